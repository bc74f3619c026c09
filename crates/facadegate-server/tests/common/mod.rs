//! Fakes shared by the server integration tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};

use facadegate_core::error::{FacadeGateError, Result};
use facadegate_server::dispatch::{Facade, MethodCaller, MethodFinder};

/// Caller that answers with a fixed tag.
pub struct StubCaller(pub &'static str);

#[async_trait]
impl MethodCaller for StubCaller {
    async fn call(&self, _params: Value) -> Result<Value> {
        Ok(json!({ "caller": self.0 }))
    }
}

/// Finder that records every lookup and answers with a canned outcome.
pub struct RecordingFinder {
    calls: Mutex<Vec<(String, u32, String)>>,
    outcome: std::result::Result<Arc<dyn MethodCaller>, FacadeGateError>,
}

impl RecordingFinder {
    pub fn returning(caller: Arc<dyn MethodCaller>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcome: Ok(caller),
        }
    }

    pub fn failing(err: FacadeGateError) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            outcome: Err(err),
        }
    }

    pub fn calls(&self) -> Vec<(String, u32, String)> {
        self.calls.lock().unwrap().clone()
    }
}

impl MethodFinder for RecordingFinder {
    fn find_method(&self, facade: &str, version: u32, method: &str) -> Result<Arc<dyn MethodCaller>> {
        self.calls
            .lock()
            .unwrap()
            .push((facade.to_string(), version, method.to_string()));
        self.outcome.clone()
    }
}

/// Minimal `UserManager` facade: echoes params back from `AddUser`.
pub struct UserManagerFacade {
    pub version: u32,
}

#[async_trait]
impl Facade for UserManagerFacade {
    fn name(&self) -> &'static str {
        "UserManager"
    }

    fn version(&self) -> u32 {
        self.version
    }

    fn methods(&self) -> &'static [&'static str] {
        &["AddUser", "UserInfo"]
    }

    async fn handle(&self, method: &str, params: Value) -> Result<Value> {
        match method {
            "AddUser" => Ok(json!({ "added": params, "version": self.version })),
            "UserInfo" => Ok(json!({ "results": [] })),
            other => Err(FacadeGateError::BadRequest(format!("unexpected method {other}"))),
        }
    }
}

/// Model-scoped facade that must stay hidden behind a restricted root.
pub struct ApplicationFacade;

#[async_trait]
impl Facade for ApplicationFacade {
    fn name(&self) -> &'static str {
        "Application"
    }

    fn version(&self) -> u32 {
        1
    }

    fn methods(&self) -> &'static [&'static str] {
        &["Deploy"]
    }

    async fn handle(&self, _method: &str, _params: Value) -> Result<Value> {
        Ok(json!({ "deployed": true }))
    }
}
