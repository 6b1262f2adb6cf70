use anyhow::Result;
use async_trait::async_trait;
use badger_pages::app::pages::{
    render_mart, run_mart_session, MartCommand, MartFrame, OutputFormat,
};
use badger_pages::core::catalog::LOADING_BANNER;
use badger_pages::{
    BadgerError, CatalogEvent, CatalogLoader, CatalogState, HttpTransport, Transport,
};
use httpmock::prelude::*;
use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncWriteExt, BufReader};
use tokio::sync::{mpsc, Notify};

fn sale_items_json() -> serde_json::Value {
    serde_json::json!([
        {"name": "Apple", "description": "Crisp and red", "price": 1.5, "featured": false},
        {"name": "Cheese Curds", "description": "Squeaky", "price": 4, "featured": true}
    ])
}

fn featured_json() -> serde_json::Value {
    serde_json::json!(
        {"name": "Cheese Curds", "description": "Squeaky", "price": 4, "featured": true}
    )
}

/// 可控制精選商品何時回應的假 Transport
struct GatedTransport {
    featured_gate: Arc<Notify>,
    fail_items: bool,
}

#[async_trait]
impl Transport for GatedTransport {
    async fn get_json(&self, endpoint: &str) -> badger_pages::Result<serde_json::Value> {
        if endpoint.ends_with("featured-sale-item") {
            self.featured_gate.notified().await;
            return Ok(featured_json());
        }
        if self.fail_items {
            return Err(BadgerError::Status {
                endpoint: endpoint.to_string(),
                status: 502,
            });
        }
        Ok(sale_items_json())
    }
}

#[tokio::test]
async fn test_mount_fetches_both_endpoints_with_header() -> Result<()> {
    let server = MockServer::start();
    let items_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/hw3/all-sale-items")
            .header("x-cs571-id", "bid_mart");
        then.status(200).json_body(sale_items_json());
    });
    let featured_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/hw3/featured-sale-item")
            .header("x-cs571-id", "bid_mart");
        then.status(200).json_body(featured_json());
    });

    let transport = Arc::new(HttpTransport::new(server.base_url(), "bid_mart"));
    let mut state = CatalogState::new();
    let mut renders = Vec::new();

    CatalogLoader::default()
        .mount(transport)
        .drive(&mut state, |state| {
            renders.push(render_mart(state, OutputFormat::Text));
        })
        .await;

    items_mock.assert();
    featured_mock.assert();
    assert_eq!(renders.len(), 2);
    assert_eq!(state.items().len(), 2);
    assert_eq!(
        state.featured_banner(),
        "Today's featured item is Cheese Curds for $4!"
    );

    Ok(())
}

#[tokio::test]
async fn test_list_renders_before_featured_item_arrives() -> Result<()> {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(GatedTransport {
        featured_gate: Arc::clone(&gate),
        fail_items: false,
    });

    let mut updates = CatalogLoader::default().mount(transport);
    let mut state = CatalogState::new();

    let first = updates.next().await.expect("items event");
    assert!(matches!(first, CatalogEvent::ItemsLoaded(_)));
    state.apply(first);

    let page = render_mart(&state, OutputFormat::Text);
    assert!(page.contains(LOADING_BANNER));
    assert!(page.contains("APPLE"));
    assert!(page.contains("CHEESE CURDS"));

    // 精選商品還沒回來之前，數量可以照常操作
    assert!("+ 1".parse::<MartCommand>()?.apply(&mut state));

    gate.notify_one();
    let second = updates.next().await.expect("featured event");
    state.apply(second);

    assert_eq!(
        state.featured_banner(),
        "Today's featured item is Cheese Curds for $4!"
    );
    assert_eq!(state.counter(0).unwrap().quantity(), 1);
    assert!(updates.next().await.is_none());

    Ok(())
}

#[tokio::test]
async fn test_featured_item_does_not_wait_for_failed_list() -> Result<()> {
    let gate = Arc::new(Notify::new());
    gate.notify_one();
    let transport = Arc::new(GatedTransport {
        featured_gate: gate,
        fail_items: true,
    });

    let mut state = CatalogState::new();
    CatalogLoader::default()
        .mount(transport)
        .drive(&mut state, |_| {})
        .await;

    assert!(state.items().is_empty());
    assert!(state.featured().is_some());

    Ok(())
}

#[tokio::test]
async fn test_failed_featured_fetch_keeps_loading_banner() -> Result<()> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/hw3/all-sale-items");
        then.status(200).json_body(sale_items_json());
    });
    server.mock(|when, then| {
        when.method(GET).path("/hw3/featured-sale-item");
        then.status(404);
    });

    let transport = Arc::new(HttpTransport::new(server.base_url(), "bid"));
    let mut state = CatalogState::new();
    CatalogLoader::default()
        .mount(transport)
        .drive(&mut state, |_| {})
        .await;

    assert_eq!(state.items().len(), 2);
    assert_eq!(state.featured_banner(), "Loading...");

    Ok(())
}

#[tokio::test]
async fn test_late_response_after_teardown_is_ignored() -> Result<()> {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(GatedTransport {
        featured_gate: Arc::clone(&gate),
        fail_items: false,
    });

    let updates = CatalogLoader::default().mount(transport);
    let tasks = updates.teardown();

    gate.notify_one();
    for task in tasks {
        tokio::time::timeout(Duration::from_secs(5), task).await??;
    }

    Ok(())
}

/// 等到某個包含 `needle` 的畫面出現
async fn wait_for_frame(frames: &mut mpsc::UnboundedReceiver<String>, needle: &str) -> Result<String> {
    loop {
        let frame = tokio::time::timeout(Duration::from_secs(5), frames.recv())
            .await?
            .ok_or_else(|| anyhow::anyhow!("session ended before showing {:?}", needle))?;
        if frame.contains(needle) {
            return Ok(frame);
        }
    }
}

#[tokio::test]
async fn test_session_applies_commands_while_featured_item_is_pending() -> Result<()> {
    let gate = Arc::new(Notify::new());
    let transport = Arc::new(GatedTransport {
        featured_gate: Arc::clone(&gate),
        fail_items: false,
    });

    let updates = CatalogLoader::default().mount(transport);
    let (mut writer, reader) = tokio::io::duplex(64);
    let (frames_tx, mut frames_rx) = mpsc::unbounded_channel();

    let session = tokio::spawn(run_mart_session(
        updates,
        Some(BufReader::new(reader)),
        move |frame| {
            if let MartFrame::Render(state) = frame {
                let _ = frames_tx.send(render_mart(state, OutputFormat::Text));
            }
        },
    ));

    wait_for_frame(&mut frames_rx, "APPLE").await?;

    // 精選商品的請求還卡著，指令仍要立刻生效並重新渲染
    writer.write_all(b"+ 1\n").await?;
    let frame = wait_for_frame(&mut frames_rx, "[-] 1 [+]").await?;
    assert!(frame.contains(LOADING_BANNER));

    gate.notify_one();
    let frame = wait_for_frame(&mut frames_rx, "Today's featured item").await?;
    assert!(frame.contains("[-] 1 [+]"));

    drop(writer);
    let state = tokio::time::timeout(Duration::from_secs(5), session).await???;
    assert_eq!(state.counter(0).unwrap().quantity(), 1);
    assert!(state.featured().is_some());

    Ok(())
}

#[tokio::test]
async fn test_session_without_input_renders_each_response() -> Result<()> {
    let gate = Arc::new(Notify::new());
    gate.notify_one();
    let transport = Arc::new(GatedTransport {
        featured_gate: gate,
        fail_items: false,
    });

    let mut renders = 0;
    let state = run_mart_session(
        CatalogLoader::default().mount(transport),
        None::<BufReader<tokio::io::DuplexStream>>,
        |_| renders += 1,
    )
    .await?;

    // 初始畫面加上兩次回應
    assert_eq!(renders, 3);
    assert_eq!(state.items().len(), 2);

    Ok(())
}
