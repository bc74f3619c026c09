//! Dispatch module exports.
//!
//! `MethodFinder` is the resolution seam: the registry implements it, and the
//! restricted root wraps any implementation behind an allow-list while
//! exposing the same trait.

pub mod finder;
pub mod registry;
pub mod restricted;

pub use finder::{MethodCaller, MethodFinder};
pub use registry::{Facade, FacadeRegistry};
pub use restricted::RestrictedRoot;
