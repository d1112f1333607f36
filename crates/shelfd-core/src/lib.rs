//! shelfd core: domain model, in-memory store, and error surface.
//!
//! This crate defines the item record, the store that owns all item state,
//! and the error taxonomy shared by the server and tests. It intentionally
//! carries no HTTP or runtime dependencies so the domain can be exercised
//! without standing up a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `ShelfError`/`Result` so the serving
//! process does not crash on bad input.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod metrics;
pub mod model;
pub mod store;

/// Shared result type.
pub use error::{Result, ShelfError};
pub use model::Item;
pub use store::ItemStore;
