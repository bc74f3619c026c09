use async_trait::async_trait;
use serde_json::{json, Value};

use facadegate_core::error::{FacadeGateError, Result};

use crate::dispatch::Facade;

const METHODS: &[&str] = &["ControllerVersion", "Ping"];

/// Controller-wide facade; works without a model.
#[derive(Default)]
pub struct ControllerFacade;

impl ControllerFacade {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Facade for ControllerFacade {
    fn name(&self) -> &'static str {
        "Controller"
    }

    fn version(&self) -> u32 {
        1
    }

    fn methods(&self) -> &'static [&'static str] {
        METHODS
    }

    async fn handle(&self, method: &str, _params: Value) -> Result<Value> {
        match method {
            "ControllerVersion" => Ok(json!({ "version": env!("CARGO_PKG_VERSION") })),
            "Ping" => Ok(json!({})),
            other => Err(FacadeGateError::UnknownMethod {
                facade: self.name().to_string(),
                version: self.version(),
                method: other.to_string(),
            }),
        }
    }
}
