//! Client-side services

pub mod auth;
pub mod borrow;
pub mod catalog;
pub mod coordinator;
pub mod renderer;
pub mod search;

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::{
    provider::{DocumentStore, IdentityProvider},
    session::SessionState,
    view::Presenter,
};

pub use auth::AuthController;
pub use borrow::BorrowController;
pub use catalog::CatalogStore;
pub use coordinator::ViewCoordinator;
pub use renderer::CatalogRenderer;
pub use search::SearchFilter;

/// Container for all services
///
/// Every component receives its provider handles here; nothing reaches the
/// identity provider, the store, or the display tree through module-level
/// state.
pub struct Services {
    pub session: SessionState,
    pub auth: AuthController,
    pub catalog: CatalogStore,
    pub renderer: CatalogRenderer,
    pub search: SearchFilter,
    pub borrow: BorrowController,
    pub coordinator: ViewCoordinator,
}

impl Services {
    /// Create all services over the given provider handles
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn DocumentStore>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        let session = identity.session();
        let catalog = CatalogStore::new(store);
        let borrow = BorrowController::new(session.clone(), catalog.clone(), presenter.clone());

        let rendered = Arc::new(RwLock::new(Vec::new()));
        let renderer = CatalogRenderer::new(presenter.clone(), borrow.clone(), rendered.clone());
        let search = SearchFilter::new(presenter.clone(), rendered);

        let auth = AuthController::new(identity, presenter.clone());
        let coordinator =
            ViewCoordinator::new(session.clone(), catalog.clone(), renderer.clone(), presenter);

        Self { session, auth, catalog, renderer, search, borrow, coordinator }
    }
}
