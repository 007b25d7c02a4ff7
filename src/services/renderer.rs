//! Catalog renderer: entry stream to display units

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio_stream::StreamExt;

use crate::{
    error::AppResult,
    services::{borrow::BorrowController, catalog::EntryStream},
    view::{ClickHandler, NodeId, Presenter},
};

/// One rendered display unit, keyed by the presenter's node handle
#[derive(Debug, Clone)]
pub struct CardBinding {
    pub node: NodeId,
    pub entry_id: String,
    pub title: String,
}

/// Registry of the currently rendered display set, replaced wholesale on
/// every render and read by the search filter
pub type RenderedSet = Arc<RwLock<Vec<CardBinding>>>;

#[derive(Clone)]
pub struct CatalogRenderer {
    presenter: Arc<dyn Presenter>,
    borrow: BorrowController,
    rendered: RenderedSet,
}

impl CatalogRenderer {
    pub fn new(presenter: Arc<dyn Presenter>, borrow: BorrowController, rendered: RenderedSet) -> Self {
        Self { presenter, borrow, rendered }
    }

    /// Render a fresh catalog snapshot, fully replacing the previous display
    /// set and its handler bindings. Registration happens entry by entry as
    /// the stream yields, so every handler is bound to an entry the fetch
    /// actually produced.
    pub async fn render(&self, mut entries: EntryStream) -> AppResult<()> {
        self.presenter.clear_catalog();

        let mut bindings = Vec::new();
        while let Some(entry) = entries.next().await {
            let node = self.presenter.insert_card(&entry);
            self.presenter.on_borrow(node, self.borrow_handler(&entry.id));
            bindings.push(CardBinding { node, entry_id: entry.id, title: entry.title });
        }

        tracing::debug!(entries = bindings.len(), "catalog rendered");
        *self.rendered.write().await = bindings;
        Ok(())
    }

    /// Handler for one borrow affordance, closed over its own copy of the
    /// entry id rather than anything shared across the render loop.
    fn borrow_handler(&self, entry_id: &str) -> ClickHandler {
        let borrow = self.borrow.clone();
        let entry_id = entry_id.to_string();
        Box::new(move || {
            let borrow = borrow.clone();
            let entry_id = entry_id.clone();
            Box::pin(async move {
                // Outcome notices are surfaced by the controller
                if let Err(err) = borrow.request_borrow(&entry_id).await {
                    tracing::debug!(book_id = %entry_id, error = %err, "borrow request not submitted");
                }
            })
        })
    }
}
