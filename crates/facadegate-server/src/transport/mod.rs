//! Transport layer (newline-delimited JSON over a byte stream).

pub mod stdio;
