//! Per-connection API roots.
//!
//! A connection starts logged in but without a model, behind a restricted
//! root. Selecting a model swaps the restricted root for the full finder.

pub mod root;

pub use root::SessionRoot;
