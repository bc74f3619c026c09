//! Shared application state for the facadegate server.
//!
//! Compiles the restricted-root allow-list, builds the facade registry and
//! registers built-in facades. Startup errors are returned, not panicked.

use std::sync::Arc;

use facadegate_core::error::{FacadeGateError, Result};

use crate::config::ServerConfig;
use crate::dispatch::FacadeRegistry;
use crate::policy::FacadeAllowList;
use crate::services::ControllerFacade;
use crate::session::SessionRoot;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
    registry: Arc<FacadeRegistry>,
}

struct AppStateInner {
    cfg: ServerConfig,
    allowed: FacadeAllowList,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Result<Self> {
        Self::with_registry(cfg, Arc::new(FacadeRegistry::new()))
    }

    /// Build on a caller-supplied registry (which may already hold facades).
    pub fn with_registry(cfg: ServerConfig, registry: Arc<FacadeRegistry>) -> Result<Self> {
        let allowed = cfg.restricted_root.compile()?;
        if allowed.is_empty() {
            tracing::warn!("restricted_root.allowed_facades is empty; nothing is reachable before a model is selected");
        }

        registry.register(Arc::new(ControllerFacade::new()));

        // allow-list <-> registry sanity check
        for name in allowed.names() {
            if !registry.has_facade(name) {
                tracing::warn!(facade = name, "allowed_facades refers to unregistered facade");
                if cfg.restricted_root.require_registered {
                    return Err(FacadeGateError::BadRequest(format!(
                        "allowed_facades references unregistered facade: {name}"
                    )));
                }
            }
        }

        Ok(Self {
            inner: Arc::new(AppStateInner { cfg, allowed }),
            registry,
        })
    }

    pub fn cfg(&self) -> &ServerConfig {
        &self.inner.cfg
    }

    pub fn allowed(&self) -> &FacadeAllowList {
        &self.inner.allowed
    }

    pub fn registry(&self) -> Arc<FacadeRegistry> {
        Arc::clone(&self.registry)
    }

    /// Root for a freshly logged-in connection (no model yet).
    pub fn new_session(&self) -> SessionRoot<Arc<FacadeRegistry>> {
        SessionRoot::restricted(self.registry(), self.inner.allowed.clone())
    }
}
