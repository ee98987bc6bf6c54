use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::buyer;
use crate::error::StoreError;
use crate::inventory::Inventory;
use crate::lifecycle::config::{DeliveryMode, StoreConfig};
use crate::model::{ProductItem, PurchaseRequest, Receipt, Ticket};
use crate::observer;
use crate::response::{BroadcastSink, DirectSink};
use crate::worker::{FulfillmentWorker, StoreClient};

/// What a finished run leaves behind.
#[derive(Debug)]
pub struct StoreReport {
    /// The shelf exactly as the worker left it.
    pub inventory: Inventory,
    /// How many receipts the observer printed.
    pub receipts_rendered: usize,
}

/// Direct-mode plumbing the system keeps until shutdown: the shared
/// registry for wiring reply channels, and the lane that hands each
/// listener to the observer.
struct DirectLane {
    sink: DirectSink,
    lane: mpsc::Sender<oneshot::Receiver<Receipt>>,
}

enum Delivery {
    Broadcast,
    Direct(DirectLane),
}

/// The runtime orchestrator for one store.
///
/// `StoreSystem` wires the whole pipeline on startup and tears it down
/// in a fixed order on [`shutdown`](StoreSystem::shutdown): buyer tasks
/// feeding a bounded queue, the single fulfillment worker owning the
/// inventory, and one observer rendering receipts.
///
/// # Example
///
/// ```ignore
/// let mut system = StoreSystem::new(catalog, StoreConfig::default());
/// system.place_orders(requests).await;
/// let report = system.shutdown().await?;
/// println!("{} receipts", report.receipts_rendered);
/// ```
pub struct StoreSystem {
    client: StoreClient,
    delivery: Delivery,
    issued: u64,
    buyers: Vec<JoinHandle<Result<Ticket, StoreError>>>,
    worker: JoinHandle<Inventory>,
    observer: JoinHandle<usize>,
}

impl StoreSystem {
    /// Stocks the shelf and spawns the worker and observer tasks.
    ///
    /// Must be called from within a Tokio runtime. Buyers are admitted
    /// separately through [`place_order`](StoreSystem::place_order).
    pub fn new(catalog: impl IntoIterator<Item = ProductItem>, config: StoreConfig) -> Self {
        let inventory = Inventory::stocked(catalog);
        let product_lines = inventory.len();
        let (client, delivery, worker, observer) = match config.delivery {
            DeliveryMode::Broadcast => {
                let (sink, receipts) = BroadcastSink::channel(config.response_capacity);
                let (worker, client) = FulfillmentWorker::new(
                    inventory,
                    sink,
                    config.queue_capacity,
                    config.fulfillment_delay,
                );
                let worker = tokio::spawn(worker.run());
                let observer = tokio::spawn(observer::render_broadcast(receipts));
                (client, Delivery::Broadcast, worker, observer)
            }
            DeliveryMode::Direct => {
                let sink = DirectSink::new();
                let (lane, listeners) = mpsc::channel(config.response_capacity);
                let (worker, client) = FulfillmentWorker::new(
                    inventory,
                    sink.clone(),
                    config.queue_capacity,
                    config.fulfillment_delay,
                );
                let worker = tokio::spawn(worker.run());
                let observer = tokio::spawn(observer::render_direct(listeners));
                (client, Delivery::Direct(DirectLane { sink, lane }), worker, observer)
            }
        };

        info!(
            delivery = ?config.delivery,
            queue_capacity = config.queue_capacity,
            product_lines,
            "Store opened"
        );

        Self {
            client,
            delivery,
            issued: 0,
            buyers: Vec::new(),
            worker,
            observer,
        }
    }

    /// Admits one buyer: stamps the next ticket, wires the reply path,
    /// and spawns the buyer task. Returns the ticket it was given.
    pub async fn place_order(&mut self, request: PurchaseRequest) -> Ticket {
        self.issued += 1;
        let ticket = Ticket(self.issued);

        if let Delivery::Direct(direct) = &self.delivery {
            // The listener goes down the lane before the buyer exists,
            // so a receipt can never beat its own mailbox.
            let listener = direct.sink.register(ticket);
            if direct.lane.send(listener).await.is_err() {
                warn!(%ticket, "Observer is gone, reply will go unrendered");
            }
        }

        self.buyers
            .push(buyer::spawn(self.client.clone(), ticket, request));
        ticket
    }

    /// Admits one buyer per request, in order.
    pub async fn place_orders(&mut self, requests: impl IntoIterator<Item = PurchaseRequest>) {
        for request in requests {
            self.place_order(request).await;
        }
    }

    /// Waits until every admitted buyer has finished submitting.
    ///
    /// Returns how many submissions the queue accepted. A turned-away
    /// buyer is logged rather than treated as fatal; a panicked buyer
    /// task is.
    pub async fn join_buyers(&mut self) -> Result<usize, StoreError> {
        let mut accepted = 0;
        for handle in self.buyers.drain(..) {
            match handle.await {
                Ok(Ok(ticket)) => {
                    debug!(%ticket, "Buyer finished");
                    accepted += 1;
                }
                Ok(Err(error)) => warn!(%error, "Buyer was turned away"),
                Err(join_error) => {
                    return Err(StoreError::BuyerFailed(join_error.to_string()));
                }
            }
        }
        Ok(accepted)
    }

    /// Runs the close-of-day sequence and returns the final report.
    ///
    /// The order is load-bearing. Buyers are joined first so every
    /// submission is in the queue. Dropping the last client then closes
    /// the queue, and the worker's join doubles as the acknowledgment
    /// that it drained to completion. Stale direct registrations are
    /// released only after that join, when no receipt can still be in
    /// flight. Closing the reply lane last lets the observer finish
    /// its count.
    pub async fn shutdown(mut self) -> Result<StoreReport, StoreError> {
        info!("Closing the store");
        self.join_buyers().await?;
        drop(self.client);

        let inventory = self
            .worker
            .await
            .map_err(|error| StoreError::WorkerFailed(error.to_string()))?;

        if let Delivery::Direct(direct) = self.delivery {
            let released = direct.sink.release_pending();
            if released > 0 {
                warn!(released, "Released reply channels that never got a receipt");
            }
            drop(direct.lane);
        }

        let receipts_rendered = self
            .observer
            .await
            .map_err(|error| StoreError::ObserverFailed(error.to_string()))?;

        info!(receipts_rendered, "Store closed");
        Ok(StoreReport {
            inventory,
            receipts_rendered,
        })
    }

    /// Opens a store, admits one buyer per request, and closes shop.
    ///
    /// ```
    /// use storefront::{ProductItem, PurchaseRequest, StoreConfig, StoreSystem};
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), storefront::StoreError> {
    /// let catalog = vec![ProductItem::new("Apple", 6)];
    /// let requests = vec![
    ///     PurchaseRequest::new("Ali", "Apple", 2),
    ///     PurchaseRequest::new("Badr", "Apple", 3),
    /// ];
    /// let report =
    ///     StoreSystem::run_to_completion(catalog, requests, StoreConfig::instant()).await?;
    /// assert_eq!(report.receipts_rendered, 2);
    /// assert_eq!(report.inventory.stock("Apple"), Some(1));
    /// # Ok(())
    /// # }
    /// ```
    pub async fn run_to_completion(
        catalog: impl IntoIterator<Item = ProductItem>,
        requests: impl IntoIterator<Item = PurchaseRequest>,
        config: StoreConfig,
    ) -> Result<StoreReport, StoreError> {
        let mut system = StoreSystem::new(catalog, config);
        system.place_orders(requests).await;
        system.shutdown().await
    }
}
