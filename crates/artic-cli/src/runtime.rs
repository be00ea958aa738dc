//! Async side of the browser.
//!
//! Executes the [`Command`]s the reducer returns: each fetch runs as a tokio
//! task and posts its outcome back as [`Message::PageLoaded`]. The store is
//! only ever touched from the task that owns the runtime.

use std::sync::Arc;

use anyhow::{Result, bail};
use tokio::sync::mpsc;

use artic_client::PageSource;
use artic_model::ArtworkId;
use artic_state::{AppState, BulkMessage, Command, Message, PageMessage, Store};

/// Owns the store and the channel fetch results come back on.
pub struct Runtime<S> {
    source: Arc<S>,
    store: Store,
    results_tx: mpsc::UnboundedSender<Message>,
    results_rx: mpsc::UnboundedReceiver<Message>,
    in_flight: usize,
}

impl<S: PageSource> Runtime<S> {
    pub fn new(source: S, store: Store) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            source: Arc::new(source),
            store,
            results_tx,
            results_rx,
            in_flight: 0,
        }
    }

    pub fn state(&self) -> &AppState {
        self.store.state()
    }

    pub fn store_mut(&mut self) -> &mut Store {
        &mut self.store
    }

    /// Fetch tasks spawned and not yet answered.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Apply a message and start whatever it asks for.
    pub fn dispatch(&mut self, message: Message) {
        if matches!(message, Message::PageLoaded { .. }) {
            self.in_flight = self.in_flight.saturating_sub(1);
        }
        let command = self.store.dispatch(message);
        self.execute(command);
    }

    pub fn execute(&mut self, command: Command) {
        match command {
            Command::None => {}
            Command::FetchPage {
                request,
                page,
                size,
            } => {
                let source = Arc::clone(&self.source);
                let results = self.results_tx.clone();
                self.in_flight += 1;
                tokio::spawn(async move {
                    let result = source.load_page(page, size).await.map_err(|e| {
                        tracing::debug!(page = %page, error = %e, "Page fetch failed");
                        e.user_message().to_string()
                    });
                    // The receiver lives as long as the runtime.
                    let _ = results.send(Message::PageLoaded { request, result });
                });
            }
        }
    }

    /// Next fetch result. Pending forever while nothing is in flight.
    pub async fn recv(&mut self) -> Option<Message> {
        self.results_rx.recv().await
    }

    /// Apply fetch results until every spawned fetch has answered.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            let Some(message) = self.results_rx.recv().await else {
                break;
            };
            self.dispatch(message);
        }
    }

    /// Select the first `count` artworks of the collection and walk every page
    /// the target covers. Expects the first page to be displayed.
    ///
    /// Returns the selected ids page by page, each page in API order.
    pub async fn select_first(&mut self, count: i64) -> Result<Vec<ArtworkId>> {
        self.dispatch(BulkMessage::InputChanged(Some(count)).into());
        self.dispatch(BulkMessage::Apply.into());
        let Some(target) = self.state().bulk.target() else {
            bail!("count must be a positive integer, got {count}");
        };

        let rows = u64::from(self.state().page.size.rows());
        let pages = target.div_ceil(rows);
        let mut ids = selected_on_page(self.state());
        for _ in 1..pages {
            self.dispatch(PageMessage::Next.into());
            self.settle().await;
            let state = self.state();
            if let Some(error) = &state.last_error {
                bail!("fetch page {}: {error}", state.requested_page().page.next());
            }
            ids.extend(selected_on_page(state));
        }
        Ok(ids)
    }
}

fn selected_on_page(state: &AppState) -> Vec<ArtworkId> {
    state
        .selection
        .selected_on_page(&state.records)
        .into_iter()
        .map(|record| record.id)
        .collect()
}
