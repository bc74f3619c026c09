//! Built-in facades registered at startup.

pub mod controller;

pub use controller::ControllerFacade;
