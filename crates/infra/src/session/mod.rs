//! Per-visitor session state.

use chrono::{DateTime, Utc};

use magazyn_core::SessionId;
use magazyn_inventory::Inventory;

pub mod store;

pub use store::{InMemorySessionStore, SessionStore};

/// Everything one visitor owns: their inventory and the add form's bound field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    id: SessionId,
    pub inventory: Inventory,
    /// Current value of the product-name text field.
    pub product_input: String,
    created_at: DateTime<Utc>,
    last_seen_at: DateTime<Utc>,
}

impl Session {
    /// Start a session with the seed inventory.
    pub fn start(id: SessionId, now: DateTime<Utc>) -> Self {
        Self {
            id,
            inventory: Inventory::seeded(),
            product_input: String::new(),
            created_at: now,
            last_seen_at: now,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    /// How long the session has existed as of `now`.
    pub fn age(&self, now: DateTime<Utc>) -> chrono::Duration {
        now.signed_duration_since(self.created_at)
    }

    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        if now > self.last_seen_at {
            self.last_seen_at = now;
        }
    }

    /// Whether the session has been idle for at least `ttl`.
    pub fn is_idle(&self, now: DateTime<Utc>, ttl: std::time::Duration) -> bool {
        now.signed_duration_since(self.last_seen_at)
            .to_std()
            .is_ok_and(|idle| idle >= ttl)
    }
}
