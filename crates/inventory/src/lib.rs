//! Inventory domain module.
//!
//! This crate contains the business rules for the product-name list,
//! implemented purely as deterministic domain logic (no IO, no HTTP, no storage).

pub mod store;

pub use store::{Inventory, SEED_PRODUCTS};
