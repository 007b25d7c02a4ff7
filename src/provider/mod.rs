//! Boundary traits for the external collaborators
//!
//! The identity provider and the remote document store are not implemented
//! here; the core reaches them only through these seams. Provider handles
//! are passed into each component's constructor, so tests substitute fakes
//! without any global state.

pub mod rest;

use std::pin::Pin;

use async_trait::async_trait;
use serde_json::Value;
use tokio_stream::Stream;

use crate::{error::AppResult, models::User, session::SessionState};

pub use rest::RestProvider;

/// One record from the remote document store
#[derive(Debug, Clone)]
pub struct Document {
    /// Store-assigned, opaque, stable
    pub id: String,
    pub fields: Value,
}

/// Store-assigned identifier of a created document
pub type DocumentId = String;

/// Lazy, one-shot sequence of query results
pub type DocumentStream = Pin<Box<dyn Stream<Item = Document> + Send>>;

/// Remote document store: collections of `{id, fields}` records
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Full snapshot of a collection, in the store's natural iteration order
    async fn query(&self, collection: &str) -> AppResult<DocumentStream>;

    /// Persist one record, returning the assigned id
    async fn insert(&self, collection: &str, fields: Value) -> AppResult<DocumentId>;
}

/// Identity provider: account lifecycle and the session signal
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn create_account(&self, email: &str, password: &str) -> AppResult<User>;

    async fn authenticate(&self, email: &str, password: &str) -> AppResult<User>;

    async fn end_session(&self) -> AppResult<()>;

    /// Read handle on the provider's session signal
    fn session(&self) -> SessionState;
}
