//! Wire headers for facade calls.
//!
//! Requests name a facade, its version, and a method; the server answers with
//! a response header carrying either a result or an error and its stable
//! client code. Parsing is panic-free: malformed input is reported as
//! `FacadeGateError::BadRequest`.

pub mod request;

pub use request::{decode_request, Request, Response};
