//! Allow-list compilation and matching for root-level facades.
//!
//! Matching is exact and case-sensitive: `Controller` and `controller` are
//! different facades.

use std::collections::HashSet;
use std::sync::Arc;

use facadegate_core::error::{FacadeGateError, Result};

/// Facades reachable without a selected model. Any facade added here must
/// work across model boundaries.
pub const DEFAULT_ROOT_FACADES: [&str; 4] =
    ["AllModelWatcher", "Controller", "ModelManager", "UserManager"];

/// Immutable set of facade names. Clones share the same compiled set.
#[derive(Debug, Clone)]
pub struct FacadeAllowList {
    names: Arc<HashSet<String>>,
}

impl FacadeAllowList {
    /// Build from trusted names (duplicates collapse).
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: Arc::new(names.into_iter().map(Into::into).collect()),
        }
    }

    /// Compile configured entries, rejecting empty, whitespace-bearing and
    /// duplicate names.
    pub fn compile(raw: &[String]) -> Result<Self> {
        Self::check_names(raw)?;
        Ok(Self::new(raw.iter().cloned()))
    }

    /// Validate configured entries without building the set.
    pub fn check_names(raw: &[String]) -> Result<()> {
        let mut seen = HashSet::with_capacity(raw.len());
        for s in raw {
            if s.is_empty() {
                return Err(FacadeGateError::BadRequest("empty facade name".into()));
            }
            if s.chars().any(char::is_whitespace) {
                return Err(FacadeGateError::BadRequest(format!(
                    "facade name {s:?} contains whitespace"
                )));
            }
            if !seen.insert(s.as_str()) {
                return Err(FacadeGateError::BadRequest(format!("duplicate facade name {s}")));
            }
        }
        Ok(())
    }

    pub fn contains(&self, facade: &str) -> bool {
        self.names.contains(facade)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order (for logs and diagnostics).
    pub fn names(&self) -> Vec<&str> {
        let mut out: Vec<&str> = self.names.iter().map(String::as_str).collect();
        out.sort_unstable();
        out
    }
}

impl Default for FacadeAllowList {
    fn default() -> Self {
        Self::new(DEFAULT_ROOT_FACADES)
    }
}
