//! View coordinator: session transitions drive the visible view

use std::sync::Arc;

use tokio_stream::StreamExt;

use crate::{
    error::AppResult,
    models::Session,
    services::{catalog::CatalogStore, renderer::CatalogRenderer},
    session::SessionState,
    view::{Presenter, View},
};

/// Two-state machine over the top-level views.
///
/// The auth view is the pessimistic default until the first session
/// notification arrives; after that the visible view always tracks the most
/// recent notification. Re-delivery of an unchanged value is applied again
/// rather than skipped; a redundant catalog load is harmless.
#[derive(Clone)]
pub struct ViewCoordinator {
    session: SessionState,
    catalog: CatalogStore,
    renderer: CatalogRenderer,
    presenter: Arc<dyn Presenter>,
}

impl ViewCoordinator {
    pub fn new(
        session: SessionState,
        catalog: CatalogStore,
        renderer: CatalogRenderer,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self { session, catalog, renderer, presenter }
    }

    /// Long-lived subscription loop. The stream yields the current session
    /// immediately, so the initial view is applied as the first iteration;
    /// the loop ends when the provider side of the signal is dropped.
    pub async fn run(self) {
        let mut events = self.session.subscribe();
        while let Some(session) = events.next().await {
            self.handle_change(session).await;
        }
        tracing::debug!("session subscription ended");
    }

    /// Apply one session transition
    pub async fn handle_change(&self, session: Session) {
        match session {
            Session::Authenticated { user_id } => {
                tracing::info!(user_id = %user_id, "user signed in");
                self.presenter.show_view(View::Catalog);
                if let Err(err) = self.load_catalog().await {
                    // The catalog area is left empty rather than showing
                    // partial or stale data; no automatic retry
                    tracing::warn!(error = %err, "catalog load failed");
                }
            }
            Session::Anonymous => {
                tracing::info!("no user signed in");
                self.presenter.show_view(View::Auth);
            }
        }
    }

    async fn load_catalog(&self) -> AppResult<()> {
        let entries = self.catalog.list().await?;
        self.renderer.render(entries).await
    }
}
