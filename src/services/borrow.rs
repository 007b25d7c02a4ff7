//! Borrow controller: session-gated request submission

use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    models::{BorrowRequest, Session},
    provider::DocumentId,
    services::catalog::CatalogStore,
    session::SessionState,
    view::{Notice, Presenter},
};

/// Gatekeeps borrow intent on the session signal.
///
/// Holds no state between calls: every invocation re-reads the session, so
/// a user who signed out between render and click is rejected here, and the
/// request always carries the id that is authenticated right now.
#[derive(Clone)]
pub struct BorrowController {
    session: SessionState,
    catalog: CatalogStore,
    presenter: Arc<dyn Presenter>,
}

impl BorrowController {
    pub fn new(session: SessionState, catalog: CatalogStore, presenter: Arc<dyn Presenter>) -> Self {
        Self { session, catalog, presenter }
    }

    /// Submit a borrow request for one catalog entry.
    ///
    /// Fails fast while signed out: a notice is surfaced and nothing is
    /// written. A submit failure is surfaced and discarded; calling again is
    /// a fresh independent attempt, never an automatic retry.
    pub async fn request_borrow(&self, entry_id: &str) -> AppResult<DocumentId> {
        let user_id = match self.session.current() {
            Session::Authenticated { user_id } => user_id,
            Session::Anonymous => {
                self.presenter.notify(Notice::SignInRequired);
                return Err(AppError::SignInRequired);
            }
        };

        let request = BorrowRequest::new(user_id, entry_id);
        match self.catalog.create_request(&request).await {
            Ok(request_id) => {
                tracing::info!(book_id = %entry_id, request_id = %request_id, "borrow request submitted");
                self.presenter.notify(Notice::BorrowSubmitted);
                Ok(request_id)
            }
            Err(err) => {
                tracing::warn!(book_id = %entry_id, error = %err, "borrow request submission failed");
                self.presenter.notify(Notice::BorrowFailed);
                Err(err)
            }
        }
    }
}
