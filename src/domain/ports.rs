use crate::utils::error::Result;
use async_trait::async_trait;

/// 對外抓取 JSON 的通道；測試時可換成假的實作
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get_json(&self, endpoint: &str) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_base(&self) -> &str;
    fn badger_id(&self) -> &str;
    fn students_endpoint(&self) -> &str;
    fn sale_items_endpoint(&self) -> &str;
    fn featured_item_endpoint(&self) -> &str;
    fn timeout_seconds(&self) -> Option<u64>;
}
