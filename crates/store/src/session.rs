//! Per-session cart state.
//!
//! Each session owns a mutex around its cart so mutations on the same
//! session are serialized while distinct sessions proceed in parallel.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use storefront_cart::Cart;
use storefront_core::SessionKey;

/// Everything the store keeps for one browsing session: the cart itself
/// plus an optional message from the last failed mutation, held until the
/// presentation layer consumes it.
#[derive(Debug, Default)]
pub struct CartSession {
    pub cart: Cart,
    pub pending_message: Option<String>,
}

/// Session-keyed cart storage.
///
/// The outer map is guarded by an `RwLock` so concurrent sessions can look
/// up their entries without contention; the inner `Mutex` serializes
/// mutations within a single session.
#[derive(Debug, Default)]
pub struct CartSessionStore {
    sessions: RwLock<HashMap<SessionKey, Arc<Mutex<CartSession>>>>,
}

impl CartSessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entry(&self, key: SessionKey) -> Arc<Mutex<CartSession>> {
        if let Ok(sessions) = self.sessions.read() {
            if let Some(session) = sessions.get(&key) {
                return Arc::clone(session);
            }
        }

        let mut sessions = match self.sessions.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        Arc::clone(sessions.entry(key).or_default())
    }

    /// Run `f` with exclusive access to the session's state, creating the
    /// session on first touch.
    pub fn with_session<R>(&self, key: SessionKey, f: impl FnOnce(&mut CartSession) -> R) -> R {
        let entry = self.entry(key);
        let mut session = match entry.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut session)
    }

    /// Snapshot of the session's cart; an empty cart if the session has
    /// never been touched.
    pub fn load(&self, key: SessionKey) -> Cart {
        let sessions = match self.sessions.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        match sessions.get(&key) {
            Some(entry) => {
                let session = match entry.lock() {
                    Ok(guard) => guard,
                    Err(poisoned) => poisoned.into_inner(),
                };
                session.cart.clone()
            }
            None => Cart::new(),
        }
    }

    /// Consume the session's pending message, if any. Reading it clears it.
    pub fn take_pending_message(&self, key: SessionKey) -> Option<String> {
        let sessions = match self.sessions.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let entry = sessions.get(&key)?;
        let mut session = match entry.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        session.pending_message.take()
    }

    /// Drop the session entirely, discarding its cart and any pending
    /// message.
    pub fn end_session(&self, key: SessionKey) {
        let mut sessions = match self.sessions.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        sessions.remove(&key);
    }
}
