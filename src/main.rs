//! Demo storefront: seven buyers, three shelves, one till.

use storefront::{
    setup_tracing, ProductItem, PurchaseRequest, StoreConfig, StoreError, StoreSystem,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    setup_tracing();

    let catalog = vec![
        ProductItem::new("Apple", 6),
        ProductItem::new("Banana", 6),
        ProductItem::new("Orange", 3),
    ];
    let requests = vec![
        PurchaseRequest::new("Ali", "Apple", 2),
        PurchaseRequest::new("Mariem", "Apple", 5),
        PurchaseRequest::new("Farida", "Banana", 3),
        PurchaseRequest::new("Salim", "Orange", 5),
        PurchaseRequest::new("Yahia", "Kiwi", 1),
        PurchaseRequest::new("Noura", "Banana", 3),
        PurchaseRequest::new("Hadi", "Banana", 1),
    ];

    let report = StoreSystem::run_to_completion(catalog, requests, StoreConfig::default()).await?;

    info!(
        receipts = report.receipts_rendered,
        inventory = ?report.inventory,
        "Demo finished"
    );
    Ok(())
}
