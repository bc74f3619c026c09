//! Policy layer (facade allow-lists).
//!
//! Compiles the configured set of root-level facades into an immutable lookup
//! structure that restricted roots consult on every method lookup.

pub mod allowlist;

pub use allowlist::{FacadeAllowList, DEFAULT_ROOT_FACADES};
