use std::sync::Arc;

use facadegate_core::error::{FacadeGateError, Result};

use crate::dispatch::{MethodCaller, MethodFinder, RestrictedRoot};
use crate::policy::FacadeAllowList;

/// API root of one connection.
pub enum SessionRoot<F> {
    /// Logged in, no model selected.
    NoModel(RestrictedRoot<F>),
    /// Bound to a model; every registered facade is reachable.
    Model { model_uuid: String, finder: F },
}

impl<F: MethodFinder> SessionRoot<F> {
    pub fn restricted(finder: F, allowed: FacadeAllowList) -> Self {
        SessionRoot::NoModel(RestrictedRoot::new(finder, allowed))
    }

    /// Bind the session to a model. The restricted root is dropped; the
    /// finder it wrapped carries on unrestricted.
    pub fn select_model(self, model_uuid: impl Into<String>) -> Result<Self> {
        let model_uuid = model_uuid.into();
        if model_uuid.is_empty() {
            return Err(FacadeGateError::BadRequest("model uuid must not be empty".into()));
        }
        match self {
            SessionRoot::NoModel(root) => {
                tracing::debug!(model = %model_uuid, "session bound to model");
                Ok(SessionRoot::Model {
                    model_uuid,
                    finder: root.into_inner(),
                })
            }
            SessionRoot::Model { model_uuid: current, .. } => Err(FacadeGateError::BadRequest(
                format!("session already bound to model {current}"),
            )),
        }
    }

    pub fn model_uuid(&self) -> Option<&str> {
        match self {
            SessionRoot::NoModel(_) => None,
            SessionRoot::Model { model_uuid, .. } => Some(model_uuid),
        }
    }
}

impl<F: MethodFinder> MethodFinder for SessionRoot<F> {
    fn find_method(&self, facade: &str, version: u32, method: &str) -> Result<Arc<dyn MethodCaller>> {
        match self {
            SessionRoot::NoModel(root) => root.find_method(facade, version, method),
            SessionRoot::Model { finder, .. } => finder.find_method(facade, version, method),
        }
    }
}
