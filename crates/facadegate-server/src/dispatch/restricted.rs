//! Restricted root: allow-list gate in front of a method finder.
//!
//! Used for connections that are logged in to the server but have not
//! selected a model. Only facades that work across model boundaries are
//! reachable; everything else is rejected before the wrapped finder is asked,
//! so facades outside the list are never probed.

use std::sync::Arc;

use facadegate_core::error::{FacadeGateError, Result};

use super::finder::{MethodCaller, MethodFinder};
use crate::policy::FacadeAllowList;

/// Wraps a finder and restricts lookups to an allow-list of facade names.
///
/// Holds `F` as given: pass `&finder` or an `Arc` to keep ownership with the
/// session owner. The root never releases the finder itself.
pub struct RestrictedRoot<F> {
    inner: F,
    allowed: FacadeAllowList,
}

impl<F: MethodFinder> RestrictedRoot<F> {
    pub fn new(inner: F, allowed: FacadeAllowList) -> Self {
        Self { inner, allowed }
    }

    /// Restrict to [`crate::policy::DEFAULT_ROOT_FACADES`].
    pub fn with_default_facades(inner: F) -> Self {
        Self::new(inner, FacadeAllowList::default())
    }

    pub fn allowed(&self) -> &FacadeAllowList {
        &self.allowed
    }

    pub fn into_inner(self) -> F {
        self.inner
    }
}

impl<F: MethodFinder> MethodFinder for RestrictedRoot<F> {
    fn find_method(&self, facade: &str, version: u32, method: &str) -> Result<Arc<dyn MethodCaller>> {
        if !self.allowed.contains(facade) {
            // Expected policy outcome, not a fault.
            tracing::debug!(facade, version, method, "facade not available without a model");
            return Err(no_model_error(facade));
        }
        self.inner.find_method(facade, version, method)
    }
}

/// Error returned for facades outside the restricted root.
pub fn no_model_error(facade: &str) -> FacadeGateError {
    FacadeGateError::NotSupported(format!("logged in to server, no model, {facade:?}"))
}
