//! Top-level facade crate for facadegate.
//!
//! Re-exports core types and the server library so users can depend on a single crate.

pub mod core {
    pub use facadegate_core::*;
}

pub mod server {
    pub use facadegate_server::*;
}
