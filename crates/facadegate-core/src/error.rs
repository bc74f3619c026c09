//! Shared error type across facadegate crates.

use thiserror::Error;

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Invalid input / malformed message.
    BadRequest,
    /// Facade is not reachable in the current session state.
    NotSupported,
    /// Facade, version or method does not exist.
    NotImplemented,
    /// Unsupported config/protocol version.
    UnsupportedVersion,
    /// Internal server error.
    Internal,
}

impl ClientCode {
    /// String representation used in JSON responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::BadRequest => "BAD_REQUEST",
            ClientCode::NotSupported => "NOT_SUPPORTED",
            ClientCode::NotImplemented => "NOT_IMPLEMENTED",
            ClientCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ClientCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, FacadeGateError>;

/// Unified error type used by core and server.
///
/// `Clone + Eq` so that layers which only forward an error (the restricted
/// root, session roots) can be checked to hand back exactly what they got.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FacadeGateError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("{0} not supported")]
    NotSupported(String),
    #[error("unknown object type {facade:?}")]
    UnknownFacade { facade: String },
    #[error("unknown version ({version}) of interface {facade:?}")]
    UnknownVersion { facade: String, version: u32 },
    #[error("no such request - method {facade}({version}).{method} is not implemented")]
    UnknownMethod {
        facade: String,
        version: u32,
        method: String,
    },
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl FacadeGateError {
    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            FacadeGateError::BadRequest(_) => ClientCode::BadRequest,
            FacadeGateError::NotSupported(_) => ClientCode::NotSupported,
            FacadeGateError::UnknownFacade { .. }
            | FacadeGateError::UnknownVersion { .. }
            | FacadeGateError::UnknownMethod { .. } => ClientCode::NotImplemented,
            FacadeGateError::UnsupportedVersion => ClientCode::UnsupportedVersion,
            FacadeGateError::Internal(_) => ClientCode::Internal,
        }
    }

    /// True for the "not reachable in this session state" family.
    pub fn is_not_supported(&self) -> bool {
        matches!(self, FacadeGateError::NotSupported(_))
    }
}
