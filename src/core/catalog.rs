use crate::config::{DEFAULT_FEATURED_ITEM_ENDPOINT, DEFAULT_SALE_ITEMS_ENDPOINT};
use crate::core::counter::ItemCounter;
use crate::core::{fetch, log_load_failure, SaleItem, Transport};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const LOADING_BANNER: &str = "Loading...";

/// 兩個獨立請求各自完成時送出的事件
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogEvent {
    ItemsLoaded(Vec<SaleItem>),
    FeaturedLoaded(SaleItem),
}

/// 商店頁面的狀態：商品清單（附各自的計數器）與精選商品
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    items: Vec<SaleItem>,
    counters: Vec<ItemCounter>,
    featured: Option<SaleItem>,
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 每個事件只更新自己那一塊
    pub fn apply(&mut self, event: CatalogEvent) {
        match event {
            CatalogEvent::ItemsLoaded(items) => {
                // 清單換掉時，舊卡片的數量一併丟棄
                self.counters = vec![ItemCounter::new(); items.len()];
                self.items = items;
            }
            CatalogEvent::FeaturedLoaded(item) => {
                self.featured = Some(item);
            }
        }
    }

    pub fn items(&self) -> &[SaleItem] {
        &self.items
    }

    pub fn featured(&self) -> Option<&SaleItem> {
        self.featured.as_ref()
    }

    pub fn entries(&self) -> impl Iterator<Item = (&SaleItem, &ItemCounter)> {
        self.items.iter().zip(self.counters.iter())
    }

    pub fn counter(&self, index: usize) -> Option<&ItemCounter> {
        self.counters.get(index)
    }

    pub fn counter_mut(&mut self, index: usize) -> Option<&mut ItemCounter> {
        self.counters.get_mut(index)
    }

    pub fn featured_banner(&self) -> String {
        match &self.featured {
            Some(item) => format!(
                "Today's featured item is {} for ${}!",
                item.name, item.price
            ),
            None => LOADING_BANNER.to_string(),
        }
    }
}

/// 掛載後持續收到的更新；兩個請求都結束後 `next` 回傳 None
pub struct CatalogUpdates {
    rx: mpsc::UnboundedReceiver<CatalogEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl CatalogUpdates {
    pub async fn next(&mut self) -> Option<CatalogEvent> {
        self.rx.recv().await
    }

    /// 套用每一個到達的事件，並在每次變動後呼叫 `on_change`
    pub async fn drive<F>(mut self, state: &mut CatalogState, mut on_change: F)
    where
        F: FnMut(&CatalogState),
    {
        while let Some(event) = self.next().await {
            state.apply(event);
            on_change(state);
        }
    }

    /// 畫面被拆掉：不再接收事件，晚到的回應會被丟棄
    pub fn teardown(self) -> Vec<JoinHandle<()>> {
        drop(self.rx);
        self.tasks
    }
}

#[derive(Debug, Clone)]
pub struct CatalogLoader {
    sale_items_endpoint: String,
    featured_item_endpoint: String,
}

impl CatalogLoader {
    pub fn new(
        sale_items_endpoint: impl Into<String>,
        featured_item_endpoint: impl Into<String>,
    ) -> Self {
        Self {
            sale_items_endpoint: sale_items_endpoint.into(),
            featured_item_endpoint: featured_item_endpoint.into(),
        }
    }

    /// 同時發出兩個請求，不互相等待
    pub fn mount<R>(&self, transport: Arc<R>) -> CatalogUpdates
    where
        R: Transport + ?Sized + 'static,
    {
        let (tx, rx) = mpsc::unbounded_channel();

        let items_task = {
            let transport = Arc::clone(&transport);
            let endpoint = self.sale_items_endpoint.clone();
            let tx = tx.clone();
            tokio::spawn(async move {
                match fetch::<Vec<SaleItem>, _>(transport.as_ref(), &endpoint).await {
                    Ok(items) => {
                        tracing::info!("Loaded {} sale items", items.len());
                        deliver(&tx, CatalogEvent::ItemsLoaded(items));
                    }
                    Err(e) => log_load_failure("sale items", &e),
                }
            })
        };

        let featured_task = {
            let endpoint = self.featured_item_endpoint.clone();
            tokio::spawn(async move {
                match fetch::<SaleItem, _>(transport.as_ref(), &endpoint).await {
                    Ok(item) => {
                        tracing::info!("Featured item: {}", item.name);
                        deliver(&tx, CatalogEvent::FeaturedLoaded(item));
                    }
                    Err(e) => log_load_failure("featured item", &e),
                }
            })
        };

        CatalogUpdates {
            rx,
            tasks: vec![items_task, featured_task],
        }
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new(DEFAULT_SALE_ITEMS_ENDPOINT, DEFAULT_FEATURED_ITEM_ENDPOINT)
    }
}

fn deliver(tx: &mpsc::UnboundedSender<CatalogEvent>, event: CatalogEvent) {
    if tx.send(event).is_err() {
        tracing::debug!("Catalog view is gone, dropping late response");
    }
}
