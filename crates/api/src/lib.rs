//! HTTP front end: server, routing, session handling and page rendering.

pub mod app;
pub mod config;
pub mod context;
pub mod middleware;
