//! Catalog store service

use std::pin::Pin;
use std::sync::Arc;

use tokio_stream::{Stream, StreamExt};

use crate::{
    error::{AppError, AppResult},
    models::{BorrowRequest, CatalogEntry, NewEntry},
    provider::{DocumentId, DocumentStore},
};

/// Collection holding one document per lendable item
const BOOKS: &str = "books";
/// Collection receiving borrow-request records
const BORROW_REQUESTS: &str = "borrowRequests";

/// Lazy, one-shot sequence of catalog entries, consumed fully by the renderer
pub type EntryStream = Pin<Box<dyn Stream<Item = CatalogEntry> + Send>>;

/// Thin query interface over the remote document store
#[derive(Clone)]
pub struct CatalogStore {
    store: Arc<dyn DocumentStore>,
}

impl CatalogStore {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self { store }
    }

    /// Full current catalog snapshot.
    ///
    /// No pagination; the store's natural iteration order. Documents that do
    /// not parse as catalog entries are skipped with a warning rather than
    /// failing the whole fetch.
    pub async fn list(&self) -> AppResult<EntryStream> {
        let documents = self.store.query(BOOKS).await?;
        Ok(Box::pin(documents.filter_map(|doc| {
            let document_id = doc.id.clone();
            match CatalogEntry::try_from(doc) {
                Ok(entry) => Some(entry),
                Err(err) => {
                    tracing::warn!(document_id = %document_id, error = %err, "skipping malformed catalog entry");
                    None
                }
            }
        })))
    }

    /// Persist one borrow request.
    ///
    /// Not idempotent: repeated submissions of identical content create
    /// duplicate records.
    pub async fn create_request(&self, request: &BorrowRequest) -> AppResult<DocumentId> {
        let fields = serde_json::to_value(request)
            .map_err(|e| AppError::Submit(format!("unserializable borrow request: {}", e)))?;
        self.store.insert(BORROW_REQUESTS, fields).await
    }

    /// Add a catalog entry; the store assigns its id
    pub async fn add_entry(&self, entry: &NewEntry) -> AppResult<DocumentId> {
        let fields = serde_json::to_value(entry)
            .map_err(|e| AppError::Submit(format!("unserializable catalog entry: {}", e)))?;
        let id = self.store.insert(BOOKS, fields).await?;
        tracing::info!(document_id = %id, title = %entry.title, "catalog entry added");
        Ok(id)
    }
}
