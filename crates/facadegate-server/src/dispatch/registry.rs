use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;

use facadegate_core::error::{FacadeGateError, Result};

use super::finder::{MethodCaller, MethodFinder};

/// A named, versioned group of methods.
#[async_trait]
pub trait Facade: Send + Sync {
    fn name(&self) -> &'static str;
    fn version(&self) -> u32;
    fn methods(&self) -> &'static [&'static str];
    async fn handle(&self, method: &str, params: Value) -> Result<Value>;
}

/// Registry of facades keyed by name, then version.
#[derive(Default)]
pub struct FacadeRegistry {
    facades: DashMap<String, BTreeMap<u32, Arc<dyn Facade>>>,
}

impl FacadeRegistry {
    pub fn new() -> Self {
        Self {
            facades: DashMap::new(),
        }
    }

    /// Register a facade; a later registration of the same name/version wins.
    pub fn register(&self, facade: Arc<dyn Facade>) {
        let (name, version) = (facade.name(), facade.version());
        let replaced = self
            .facades
            .entry(name.to_string())
            .or_default()
            .insert(version, facade);
        if replaced.is_some() {
            tracing::warn!(facade = name, version, "facade registration replaced");
        }
    }

    pub fn has_facade(&self, name: &str) -> bool {
        self.facades.contains_key(name)
    }

    /// Registered versions of `name`, ascending.
    pub fn versions(&self, name: &str) -> Vec<u32> {
        self.facades
            .get(name)
            .map(|v| v.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Every registered (name, version), sorted.
    pub fn registered_facades(&self) -> Vec<(String, u32)> {
        let mut out: Vec<(String, u32)> = self
            .facades
            .iter()
            .flat_map(|e| {
                let name = e.key().clone();
                e.value()
                    .keys()
                    .map(move |v| (name.clone(), *v))
                    .collect::<Vec<_>>()
            })
            .collect();
        out.sort();
        out
    }
}

impl MethodFinder for FacadeRegistry {
    fn find_method(&self, facade: &str, version: u32, method: &str) -> Result<Arc<dyn MethodCaller>> {
        let handler = {
            let versions = self.facades.get(facade).ok_or_else(|| FacadeGateError::UnknownFacade {
                facade: facade.to_string(),
            })?;
            versions
                .get(&version)
                .cloned()
                .ok_or_else(|| FacadeGateError::UnknownVersion {
                    facade: facade.to_string(),
                    version,
                })?
        };

        if !handler.methods().iter().any(|m| *m == method) {
            return Err(FacadeGateError::UnknownMethod {
                facade: facade.to_string(),
                version,
                method: method.to_string(),
            });
        }

        Ok(Arc::new(BoundMethod {
            facade: handler,
            method: method.to_string(),
        }))
    }
}

/// Caller handed out by the registry: a facade plus the method to run on it.
struct BoundMethod {
    facade: Arc<dyn Facade>,
    method: String,
}

#[async_trait]
impl MethodCaller for BoundMethod {
    async fn call(&self, params: Value) -> Result<Value> {
        self.facade.handle(&self.method, params).await
    }
}
