//! shelfd server library entry.
//!
//! This crate wires the config loader, shared state, request instrumentation,
//! route handlers, and the error boundary into a cohesive HTTP service. It is
//! intended to be consumed by the binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod context;
pub mod error;
pub mod items;
pub mod middleware;
pub mod ops;
pub mod readiness;
pub mod router;
