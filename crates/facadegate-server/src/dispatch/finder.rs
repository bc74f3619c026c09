use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use facadegate_core::error::Result;

/// A resolved, invocable handle for one (facade, version, method) triple.
///
/// Cancellation is by drop: abandoning the `call` future abandons the call.
#[async_trait]
pub trait MethodCaller: Send + Sync {
    async fn call(&self, params: Value) -> Result<Value>;
}

/// Resolves a facade method to a caller. Resolution is synchronous; only
/// invoking the returned handle may suspend.
pub trait MethodFinder: Send + Sync {
    fn find_method(&self, facade: &str, version: u32, method: &str) -> Result<Arc<dyn MethodCaller>>;
}

impl<F: MethodFinder + ?Sized> MethodFinder for &F {
    fn find_method(&self, facade: &str, version: u32, method: &str) -> Result<Arc<dyn MethodCaller>> {
        (**self).find_method(facade, version, method)
    }
}

impl<F: MethodFinder + ?Sized> MethodFinder for Arc<F> {
    fn find_method(&self, facade: &str, version: u32, method: &str) -> Result<Arc<dyn MethodCaller>> {
        (**self).find_method(facade, version, method)
    }
}

impl<F: MethodFinder + ?Sized> MethodFinder for Box<F> {
    fn find_method(&self, facade: &str, version: u32, method: &str) -> Result<Arc<dyn MethodCaller>> {
        (**self).find_method(facade, version, method)
    }
}
