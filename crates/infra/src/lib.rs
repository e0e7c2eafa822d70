//! Infrastructure layer: in-process session registry.

pub mod session;

pub use session::{InMemorySessionStore, Session, SessionStore};
