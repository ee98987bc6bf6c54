use storefront::{DeliveryMode, Inventory, ProductItem, PurchaseRequest, StoreConfig, StoreSystem};

fn demo_catalog() -> Vec<ProductItem> {
    vec![
        ProductItem::new("Apple", 6),
        ProductItem::new("Banana", 6),
        ProductItem::new("Orange", 3),
    ]
}

fn demo_requests() -> Vec<PurchaseRequest> {
    vec![
        PurchaseRequest::new("Ali", "Apple", 2),
        PurchaseRequest::new("Mariem", "Apple", 5),
        PurchaseRequest::new("Farida", "Banana", 3),
        PurchaseRequest::new("Salim", "Orange", 5),
        PurchaseRequest::new("Yahia", "Kiwi", 1),
        PurchaseRequest::new("Noura", "Banana", 3),
        PurchaseRequest::new("Hadi", "Banana", 1),
    ]
}

/// Requests that the shelf can cover completely, so the end state is
/// the same no matter how the buyers interleave.
fn fully_stocked_requests() -> Vec<PurchaseRequest> {
    vec![
        PurchaseRequest::new("Ali", "Apple", 2),
        PurchaseRequest::new("Farida", "Apple", 1),
        PurchaseRequest::new("Noura", "Banana", 3),
        PurchaseRequest::new("Hadi", "Banana", 2),
    ]
}

/// Full run over the shared receipt stream.
#[tokio::test]
async fn test_broadcast_run_accounts_for_every_receipt() {
    let catalog = vec![ProductItem::new("Apple", 6), ProductItem::new("Banana", 6)];
    let report =
        StoreSystem::run_to_completion(catalog, fully_stocked_requests(), StoreConfig::instant())
            .await
            .expect("run failed");

    assert_eq!(report.receipts_rendered, 4);
    assert_eq!(report.inventory.stock("Apple"), Some(3));
    assert_eq!(report.inventory.stock("Banana"), Some(1));
}

/// The same run with a dedicated reply channel per ticket.
#[tokio::test]
async fn test_direct_run_accounts_for_every_receipt() {
    let catalog = vec![ProductItem::new("Apple", 6), ProductItem::new("Banana", 6)];
    let config = StoreConfig {
        delivery: DeliveryMode::Direct,
        ..StoreConfig::instant()
    };
    let report = StoreSystem::run_to_completion(catalog, fully_stocked_requests(), config)
        .await
        .expect("run failed");

    assert_eq!(report.receipts_rendered, 4);
    assert_eq!(report.inventory.stock("Apple"), Some(3));
    assert_eq!(report.inventory.stock("Banana"), Some(1));
}

/// The demo scenario under real concurrency: arrival order belongs to
/// the scheduler, conservation of stock does not.
#[tokio::test]
async fn test_demo_scenario_never_oversells() {
    let report =
        StoreSystem::run_to_completion(demo_catalog(), demo_requests(), StoreConfig::instant())
            .await
            .expect("run failed");

    assert_eq!(report.receipts_rendered, 7, "one receipt per buyer");

    // Orange: the only request wants more than the shelf holds.
    assert_eq!(report.inventory.stock("Orange"), Some(3));
    // Kiwi was never stocked and must not appear now.
    assert_eq!(report.inventory.stock("Kiwi"), None);

    // Apple: Ali (2) and Mariem (5) cannot both win from 6.
    let apple = report.inventory.stock("Apple").expect("Apple stays on the shelf");
    assert!(
        apple == 4 || apple == 1,
        "exactly one Apple request can be served, got {apple}"
    );

    // Banana: 3 + 3 + 1 wanted against 6 in stock.
    let banana = report
        .inventory
        .stock("Banana")
        .expect("Banana stays on the shelf");
    assert!(
        banana == 0 || banana == 2,
        "Banana sales must stay within stock, got {banana}"
    );
}

/// The submitted barrier and the fulfilled barrier are separate steps.
#[tokio::test]
async fn test_stepwise_run_reports_accepted_submissions() {
    let mut system = StoreSystem::new(demo_catalog(), StoreConfig::instant());
    system.place_orders(demo_requests()).await;

    let accepted = system.join_buyers().await.expect("a buyer task failed");
    assert_eq!(accepted, 7, "every buyer must get through the queue");

    let report = system.shutdown().await.expect("shutdown failed");
    assert_eq!(report.receipts_rendered, 7);
}

/// A store with no buyers opens and closes without fuss.
#[tokio::test]
async fn test_empty_run_leaves_the_shelf_untouched() {
    let report = StoreSystem::run_to_completion(demo_catalog(), Vec::new(), StoreConfig::instant())
        .await
        .expect("run failed");

    assert_eq!(report.receipts_rendered, 0);
    assert_eq!(report.inventory, Inventory::stocked(demo_catalog()));
}

/// Direct mode with more buyers than lane capacity: the handoff lane
/// applies backpressure but never drops a reply.
#[tokio::test]
async fn test_direct_run_with_tight_lanes() {
    let catalog = vec![ProductItem::new("Apple", 40)];
    let requests: Vec<PurchaseRequest> = (1..=20)
        .map(|id| PurchaseRequest::new(format!("buyer_{id}"), "Apple", 2))
        .collect();
    let config = StoreConfig {
        queue_capacity: 2,
        response_capacity: 2,
        delivery: DeliveryMode::Direct,
        ..StoreConfig::instant()
    };

    let report = StoreSystem::run_to_completion(catalog, requests, config)
        .await
        .expect("run failed");

    assert_eq!(report.receipts_rendered, 20);
    assert_eq!(report.inventory.stock("Apple"), Some(0));
}
