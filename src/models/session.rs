//! Session model

/// Authentication state of the current visitor.
///
/// Exactly one value is active at any time. Transitions are delivered
/// asynchronously by the identity provider; the core never mutates this
/// directly, it only reads the current value and reacts to change events.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Session {
    /// No authenticated user
    #[default]
    Anonymous,
    /// Signed in as the given user
    Authenticated { user_id: String },
}

impl Session {
    /// User id when authenticated
    pub fn user_id(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user_id } => Some(user_id),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }
}
