use storefront_core::{SessionKey, UserId};

/// Session context for a request.
///
/// This is present on every route once the session middleware has run.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SessionContext {
    session_key: SessionKey,
}

impl SessionContext {
    pub fn new(session_key: SessionKey) -> Self {
        Self { session_key }
    }

    pub fn session_key(&self) -> SessionKey {
        self.session_key
    }
}

/// Authenticated identity for a request (present only when a valid auth
/// token accompanied it).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CurrentUser {
    user_id: UserId,
}

impl CurrentUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
