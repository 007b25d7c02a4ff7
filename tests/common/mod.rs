//! Shared fakes for the integration suite
//!
//! Every boundary the core depends on gets an in-process stand-in: an
//! in-memory document store, a scripted identity provider, and a presenter
//! that records the display tree instead of drawing it.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use atheneum_client::error::{AppError, AppResult};
use atheneum_client::models::{CatalogEntry, Session, User};
use atheneum_client::provider::{
    Document, DocumentId, DocumentStore, DocumentStream, IdentityProvider,
};
use atheneum_client::session::{SessionNotifier, SessionState};
use atheneum_client::view::{
    AuthHandler, AuthSubmit, ClickHandler, NodeId, Notice, Presenter, SearchHandler, View,
};

/// In-memory document store with call counting and failure injection
#[derive(Default)]
pub struct InMemoryStore {
    collections: Mutex<HashMap<String, Vec<Document>>>,
    fail_query: AtomicBool,
    insert_calls: AtomicUsize,
}

impl InMemoryStore {
    /// Replace a collection's contents with documents of known ids
    pub fn seed(&self, collection: &str, docs: Vec<(&str, Value)>) {
        let docs = docs
            .into_iter()
            .map(|(id, fields)| Document { id: id.to_string(), fields })
            .collect();
        self.collections
            .lock()
            .unwrap()
            .insert(collection.to_string(), docs);
    }

    pub fn set_fail_query(&self, fail: bool) {
        self.fail_query.store(fail, Ordering::SeqCst);
    }

    pub fn records(&self, collection: &str) -> Vec<Document> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    pub fn insert_count(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn query(&self, collection: &str) -> AppResult<DocumentStream> {
        if self.fail_query.load(Ordering::SeqCst) {
            return Err(AppError::Fetch("injected query failure".to_string()));
        }
        let docs = self
            .collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default();
        Ok(Box::pin(tokio_stream::iter(docs)))
    }

    async fn insert(&self, collection: &str, fields: Value) -> AppResult<DocumentId> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        let id = uuid::Uuid::new_v4().to_string();
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(Document { id: id.clone(), fields });
        Ok(id)
    }
}

/// Identity provider whose transitions are scripted by the test
pub struct FakeIdentity {
    notifier: SessionNotifier,
    accounts_created: AtomicUsize,
}

impl FakeIdentity {
    pub fn new() -> Self {
        Self {
            notifier: SessionNotifier::new(),
            accounts_created: AtomicUsize::new(0),
        }
    }

    /// Push a signed-in notification, as the provider would after a
    /// successful authentication on another surface
    pub fn sign_in_as(&self, user_id: &str) {
        self.notifier
            .emit(Session::Authenticated { user_id: user_id.to_string() });
    }

    pub fn sign_out_now(&self) {
        self.notifier.emit(Session::Anonymous);
    }

    pub fn accounts_created(&self) -> usize {
        self.accounts_created.load(Ordering::SeqCst)
    }

    fn grant(&self, email: &str) -> User {
        let user = User {
            id: format!("user-{}", email),
            email: email.to_string(),
        };
        self.notifier
            .emit(Session::Authenticated { user_id: user.id.clone() });
        user
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn create_account(&self, email: &str, _password: &str) -> AppResult<User> {
        self.accounts_created.fetch_add(1, Ordering::SeqCst);
        Ok(self.grant(email))
    }

    async fn authenticate(&self, email: &str, _password: &str) -> AppResult<User> {
        Ok(self.grant(email))
    }

    async fn end_session(&self) -> AppResult<()> {
        self.notifier.emit(Session::Anonymous);
        Ok(())
    }

    fn session(&self) -> SessionState {
        self.notifier.state()
    }
}

/// One recorded display unit
pub struct Card {
    pub node: NodeId,
    pub title: String,
    pub visible: bool,
}

#[derive(Default)]
struct PresenterState {
    view: Option<View>,
    next_node: u64,
    cards: Vec<Card>,
    borrow_handlers: HashMap<NodeId, ClickHandler>,
    search_handler: Option<SearchHandler>,
    auth_handler: Option<AuthHandler>,
    notices: Vec<Notice>,
}

/// Presenter that records the display tree and lets tests fire the events a
/// real page would
#[derive(Default)]
pub struct FakePresenter {
    state: Mutex<PresenterState>,
}

impl FakePresenter {
    pub fn current_view(&self) -> Option<View> {
        self.state.lock().unwrap().view
    }

    pub fn card_titles(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .cards
            .iter()
            .map(|card| card.title.clone())
            .collect()
    }

    pub fn visible_titles(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .cards
            .iter()
            .filter(|card| card.visible)
            .map(|card| card.title.clone())
            .collect()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.state.lock().unwrap().notices.clone()
    }

    pub fn node_for_title(&self, title: &str) -> NodeId {
        self.state
            .lock()
            .unwrap()
            .cards
            .iter()
            .find(|card| card.title == title)
            .map(|card| card.node)
            .expect("no card with that title")
    }

    pub fn has_borrow_handler(&self, node: NodeId) -> bool {
        self.state.lock().unwrap().borrow_handlers.contains_key(&node)
    }

    /// Fire the borrow affordance of one card
    pub async fn click_borrow(&self, node: NodeId) {
        let fut = {
            let state = self.state.lock().unwrap();
            let handler = state
                .borrow_handlers
                .get(&node)
                .expect("no borrow handler bound to node");
            handler()
        };
        fut.await;
    }

    /// Fire a search-input change with the given query text
    pub async fn type_search(&self, query: &str) {
        let fut = {
            let state = self.state.lock().unwrap();
            let handler = state
                .search_handler
                .as_ref()
                .expect("no search handler attached");
            handler(query)
        };
        fut.await;
    }

    /// Fire an auth-form submission
    pub async fn submit_auth(&self, submit: AuthSubmit) {
        let fut = {
            let state = self.state.lock().unwrap();
            let handler = state
                .auth_handler
                .as_ref()
                .expect("no auth handler attached");
            handler(submit)
        };
        fut.await;
    }
}

impl Presenter for FakePresenter {
    fn show_view(&self, view: View) {
        self.state.lock().unwrap().view = Some(view);
    }

    fn clear_catalog(&self) {
        let mut state = self.state.lock().unwrap();
        state.cards.clear();
        state.borrow_handlers.clear();
    }

    fn insert_card(&self, entry: &CatalogEntry) -> NodeId {
        let mut state = self.state.lock().unwrap();
        state.next_node += 1;
        let node = NodeId::new(state.next_node);
        state.cards.push(Card {
            node,
            title: entry.title.clone(),
            visible: true,
        });
        node
    }

    fn set_visible(&self, node: NodeId, visible: bool) {
        let mut state = self.state.lock().unwrap();
        if let Some(card) = state.cards.iter_mut().find(|card| card.node == node) {
            card.visible = visible;
        }
    }

    fn on_borrow(&self, node: NodeId, handler: ClickHandler) {
        self.state.lock().unwrap().borrow_handlers.insert(node, handler);
    }

    fn on_search_input(&self, handler: SearchHandler) {
        self.state.lock().unwrap().search_handler = Some(handler);
    }

    fn on_auth_submit(&self, handler: AuthHandler) {
        self.state.lock().unwrap().auth_handler = Some(handler);
    }

    fn notify(&self, notice: Notice) {
        self.state.lock().unwrap().notices.push(notice);
    }
}

/// Fully wired application over the fakes
pub struct World {
    pub identity: Arc<FakeIdentity>,
    pub store: Arc<InMemoryStore>,
    pub presenter: Arc<FakePresenter>,
    pub app: atheneum_client::App,
}

pub fn world() -> World {
    use atheneum_client::config::{ClientConfig, LoggingConfig, ProviderConfig};

    let identity = Arc::new(FakeIdentity::new());
    let store = Arc::new(InMemoryStore::default());
    let presenter = Arc::new(FakePresenter::default());
    let config = ClientConfig {
        provider: ProviderConfig::default(),
        logging: LoggingConfig::default(),
    };
    let app = atheneum_client::App::new(
        config,
        identity.clone(),
        store.clone(),
        presenter.clone(),
    );
    World { identity, store, presenter, app }
}

/// Poll until the condition holds, failing the test after one second
pub async fn wait_until(condition: impl Fn() -> bool) {
    tokio::time::timeout(Duration::from_secs(1), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(2)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}
