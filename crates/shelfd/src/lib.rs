//! Top-level facade crate for shelfd.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use shelfd_core::*;
}

pub mod server {
    pub use shelfd_server::*;
}
