//! Presentation boundary
//!
//! The display tree itself (markup, styling, node primitives, scroll
//! handling) lives outside this crate; the core drives it through the
//! [`Presenter`] trait and is driven back through the registered handlers.
//! Mutation of the display tree is confined to these calls, each running to
//! completion on the UI task, so no locking is imposed on implementations.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::models::CatalogEntry;

/// Top-level views the coordinator switches between
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Sign-up / sign-in form
    Auth,
    /// Catalog grid with search box
    Catalog,
}

/// Handle to one display unit, assigned by the presenter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

/// User-visible notices surfaced by the core
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    SignInRequired,
    BorrowSubmitted,
    BorrowFailed,
    AuthFailed(String),
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::SignInRequired => write!(f, "Please sign in first."),
            Notice::BorrowSubmitted => write!(f, "Borrow request submitted."),
            Notice::BorrowFailed => write!(f, "Borrow request failed. Please try again."),
            Notice::AuthFailed(reason) => write!(f, "Sign-in failed: {}", reason),
        }
    }
}

/// Credentials submitted through the auth form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthSubmit {
    SignUp { email: String, password: String },
    SignIn { email: String, password: String },
    SignOut,
}

pub type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

/// Borrow-affordance click handler, one per rendered card
pub type ClickHandler = Box<dyn Fn() -> BoxFuture + Send + Sync>;

/// Search-input change handler, invoked with the current query text
pub type SearchHandler = Box<dyn Fn(&str) -> BoxFuture + Send + Sync>;

/// Auth-form submission handler
pub type AuthHandler = Box<dyn Fn(AuthSubmit) -> BoxFuture + Send + Sync>;

/// Seam to the presentation layer
pub trait Presenter: Send + Sync {
    /// Make exactly one top-level view visible
    fn show_view(&self, view: View);

    /// Drop every catalog display unit and its handler bindings
    fn clear_catalog(&self);

    /// Insert one display unit (cover image, title, borrow affordance)
    fn insert_card(&self, entry: &CatalogEntry) -> NodeId;

    /// Toggle a display unit's visibility
    fn set_visible(&self, node: NodeId, visible: bool);

    /// Register the borrow-click handler for one card's affordance
    fn on_borrow(&self, node: NodeId, handler: ClickHandler);

    /// Register the search-input handler (keyup on the search box)
    fn on_search_input(&self, handler: SearchHandler);

    /// Register the auth-form submission handler
    fn on_auth_submit(&self, handler: AuthHandler);

    /// Surface a notice to the user
    fn notify(&self, notice: Notice);
}
