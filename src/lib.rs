//! Atheneum Library Client Core
//!
//! Client-side core of the Atheneum lending site: visitors authenticate,
//! browse the catalog, and submit borrow requests. The identity provider,
//! the remote document store, and the presentation layer are injected
//! behind the trait seams in [`provider`] and [`view`]; this crate owns the
//! state machine in between.

use std::sync::Arc;

pub mod config;
pub mod error;
pub mod models;
pub mod provider;
pub mod services;
pub mod session;
pub mod view;

pub use config::ClientConfig;
pub use error::{AppError, AppResult};

/// Top-level application handle wiring all components together
pub struct App {
    pub config: Arc<ClientConfig>,
    pub services: Arc<services::Services>,
}

impl App {
    /// Wire the service set over the given provider handles
    pub fn new(
        config: ClientConfig,
        identity: Arc<dyn provider::IdentityProvider>,
        store: Arc<dyn provider::DocumentStore>,
        presenter: Arc<dyn view::Presenter>,
    ) -> Self {
        let services = services::Services::new(identity, store, presenter);
        Self {
            config: Arc::new(config),
            services: Arc::new(services),
        }
    }

    /// Attach the input handlers and start the session-subscription loop.
    ///
    /// Returns the loop's join handle; aborting it is the explicit teardown
    /// of the subscription. Must be called from within a tokio runtime.
    pub fn start(&self) -> tokio::task::JoinHandle<()> {
        self.services.search.attach();
        self.services.auth.attach();
        tokio::spawn(self.services.coordinator.clone().run())
    }
}

/// Initialize tracing for embedders that do not bring their own subscriber
pub fn init_tracing(config: &config::LoggingConfig) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("atheneum_client={}", config.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
