//! Borrow request model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One user's intent to borrow one catalog entry.
///
/// Write-only from this core's view: created, persisted, never read back.
/// The timestamp is assigned here at submission time, not by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BorrowRequest {
    pub user_id: String,
    pub book_id: String,
    pub status: RequestStatus,
    pub timestamp: DateTime<Utc>,
}

impl BorrowRequest {
    /// Build a pending request stamped with the current time
    pub fn new(user_id: impl Into<String>, book_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            book_id: book_id.into(),
            status: RequestStatus::Pending,
            timestamp: Utc::now(),
        }
    }
}

/// Lifecycle state of a borrow request. This core only ever writes
/// `Pending`; later transitions happen downstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
}
