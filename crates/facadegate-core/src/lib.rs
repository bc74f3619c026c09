//! facadegate core: error surface and wire headers shared by the server and
//! its clients.
//!
//! This crate carries no transport or runtime dependencies so the same error
//! taxonomy can be matched on by anything that speaks to a facadegate server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `FacadeGateError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{ClientCode, FacadeGateError, Result};
