use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;

use magazyn_infra::{InMemorySessionStore, SessionStore};

use crate::config::ApiConfig;

/// Shared state handed to every handler.
#[derive(Debug)]
pub struct AppServices {
    pub sessions: Arc<InMemorySessionStore>,
}

pub fn build_services(config: &ApiConfig) -> AppServices {
    let sessions = Arc::new(InMemorySessionStore::new(config.session_idle));
    spawn_session_pruner(sessions.clone(), config.prune_interval);
    AppServices { sessions }
}

/// Background sweep of idle sessions. Runs for the lifetime of the runtime.
fn spawn_session_pruner(sessions: Arc<InMemorySessionStore>, every: Duration) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        loop {
            ticker.tick().await;
            let pruned = sessions.prune_idle(Utc::now());
            if pruned > 0 {
                tracing::info!(pruned, remaining = sessions.len(), "idle sessions pruned");
            }
        }
    });
}
