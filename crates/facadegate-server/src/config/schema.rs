use serde::Deserialize;
use facadegate_core::error::{FacadeGateError, Result};

use crate::policy::{FacadeAllowList, DEFAULT_ROOT_FACADES};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub version: u32,

    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub restricted_root: RestrictedRootSection,
}

impl ServerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(FacadeGateError::UnsupportedVersion);
        }

        self.server.validate()?;
        self.restricted_root.check()?;

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_max_request_bytes")]
    pub max_request_bytes: usize,
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            max_request_bytes: default_max_request_bytes(),
        }
    }
}

impl ServerSection {
    pub fn validate(&self) -> Result<()> {
        if !(256..=16 * 1024 * 1024).contains(&self.max_request_bytes) {
            return Err(FacadeGateError::BadRequest(
                "server.max_request_bytes must be between 256 and 16777216".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_request_bytes() -> usize {
    64 * 1024
}

/// Facades reachable before a model is selected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RestrictedRootSection {
    #[serde(default = "default_allowed_facades")]
    pub allowed_facades: Vec<String>,

    /// Refuse to start when an allowed facade has no registered implementation.
    #[serde(default)]
    pub require_registered: bool,
}

impl Default for RestrictedRootSection {
    fn default() -> Self {
        Self {
            allowed_facades: default_allowed_facades(),
            require_registered: false,
        }
    }
}

impl RestrictedRootSection {
    /// Validate entries only; the set itself is compiled once by `AppState`.
    pub fn check(&self) -> Result<()> {
        FacadeAllowList::check_names(&self.allowed_facades).map_err(prefix_field)
    }

    pub fn compile(&self) -> Result<FacadeAllowList> {
        FacadeAllowList::compile(&self.allowed_facades).map_err(prefix_field)
    }
}

fn prefix_field(e: FacadeGateError) -> FacadeGateError {
    match e {
        FacadeGateError::BadRequest(msg) => {
            FacadeGateError::BadRequest(format!("restricted_root.allowed_facades: {msg}"))
        }
        other => other,
    }
}

fn default_allowed_facades() -> Vec<String> {
    DEFAULT_ROOT_FACADES.iter().map(|s| s.to_string()).collect()
}
