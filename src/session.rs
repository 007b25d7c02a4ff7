//! Session signal: synchronous current value plus a transition stream
//!
//! The identity provider owns a [`SessionNotifier`] and pushes every
//! transition through it. Components hold a [`SessionState`] and either read
//! the current value synchronously or subscribe to the stream of changes.

use std::pin::Pin;

use tokio::sync::{broadcast, watch};
use tokio_stream::{wrappers::BroadcastStream, Stream, StreamExt};

use crate::models::Session;

/// Buffered transitions per subscriber before the oldest is dropped
const EVENT_BUFFER: usize = 16;

/// Stream of session transitions, starting with the value current at
/// subscription time
pub type SessionStream = Pin<Box<dyn Stream<Item = Session> + Send>>;

/// Read side of the session signal. Cheap to clone; all clones observe the
/// same provider.
#[derive(Clone)]
pub struct SessionState {
    current: watch::Receiver<Session>,
    events: broadcast::Sender<Session>,
}

impl SessionState {
    /// Current session, `Anonymous` until the first notification arrives
    pub fn current(&self) -> Session {
        self.current.borrow().clone()
    }

    /// Subscribe to session transitions.
    ///
    /// The stream yields the current value immediately, then every
    /// subsequent transition for as long as the provider lives. Dropping the
    /// stream is the unsubscribe.
    pub fn subscribe(&self) -> SessionStream {
        // Subscribe before reading the current value so a transition landing
        // in between is delivered rather than lost; the worst case is one
        // duplicate, which handlers must tolerate anyway.
        let events = BroadcastStream::new(self.events.subscribe());
        let initial = self.current();
        Box::pin(
            tokio_stream::once(initial).chain(events.filter_map(|event| event.ok())),
        )
    }
}

/// Write side of the session signal, held by the identity provider
pub struct SessionNotifier {
    current: watch::Sender<Session>,
    events: broadcast::Sender<Session>,
}

impl SessionNotifier {
    pub fn new() -> Self {
        let (current, _) = watch::channel(Session::Anonymous);
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self { current, events }
    }

    /// Publish a transition: updates the current value, then notifies every
    /// subscriber. Re-publishing an unchanged value still notifies.
    pub fn emit(&self, session: Session) {
        self.current.send_replace(session.clone());
        // No receivers is fine; subscribers may come and go
        let _ = self.events.send(session);
    }

    /// Read handle shared with the rest of the core
    pub fn state(&self) -> SessionState {
        SessionState {
            current: self.current.subscribe(),
            events: self.events.clone(),
        }
    }
}

impl Default for SessionNotifier {
    fn default() -> Self {
        Self::new()
    }
}
