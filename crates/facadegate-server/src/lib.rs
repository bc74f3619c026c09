//! facadegate server library entry.
//!
//! Wires config, the facade allow-list policy, the facade registry, restricted
//! session roots and the line transport into one stack. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod app_state;
pub mod config;
pub mod dispatch;
pub mod policy;
pub mod services;
pub mod session;
pub mod transport;
