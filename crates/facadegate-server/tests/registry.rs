#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

mod common;

use std::sync::Arc;

use serde_json::json;

use facadegate_core::error::FacadeGateError;
use facadegate_server::dispatch::{FacadeRegistry, MethodFinder};
use facadegate_server::services::ControllerFacade;

use common::UserManagerFacade;

fn registry() -> FacadeRegistry {
    let r = FacadeRegistry::new();
    r.register(Arc::new(ControllerFacade::new()));
    r.register(Arc::new(UserManagerFacade { version: 2 }));
    r.register(Arc::new(UserManagerFacade { version: 1 }));
    r
}

#[test]
fn lists_registered_facades_sorted() {
    let r = registry();
    assert_eq!(
        r.registered_facades(),
        vec![
            ("Controller".to_string(), 1),
            ("UserManager".to_string(), 1),
            ("UserManager".to_string(), 2),
        ]
    );
    assert_eq!(r.versions("UserManager"), vec![1, 2]);
    assert!(r.versions("Nope").is_empty());
    assert!(r.has_facade("Controller"));
    assert!(!r.has_facade("controller"));
}

#[test]
fn unknown_facade() {
    let err = registry().find_method("Application", 1, "Deploy").err().expect("must fail");
    assert_eq!(err, FacadeGateError::UnknownFacade { facade: "Application".into() });
    assert_eq!(err.to_string(), r#"unknown object type "Application""#);
    assert_eq!(err.client_code().as_str(), "NOT_IMPLEMENTED");
}

#[test]
fn unknown_version() {
    let err = registry().find_method("UserManager", 3, "AddUser").err().expect("must fail");
    assert_eq!(
        err,
        FacadeGateError::UnknownVersion { facade: "UserManager".into(), version: 3 }
    );
}

#[test]
fn unknown_method() {
    let err = registry().find_method("Controller", 1, "DestroyController").err().expect("must fail");
    assert_eq!(
        err,
        FacadeGateError::UnknownMethod {
            facade: "Controller".into(),
            version: 1,
            method: "DestroyController".into(),
        }
    );
}

#[tokio::test]
async fn resolves_the_requested_version() {
    let r = registry();
    let caller = r.find_method("UserManager", 2, "AddUser").unwrap();
    let out = caller.call(json!({ "username": "bob" })).await.unwrap();
    assert_eq!(out["version"], 2);
    assert_eq!(out["added"]["username"], "bob");
}

#[tokio::test]
async fn controller_facade_answers() {
    let r = registry();
    let out = r
        .find_method("Controller", 1, "ControllerVersion")
        .unwrap()
        .call(serde_json::Value::Null)
        .await
        .unwrap();
    assert_eq!(out["version"], env!("CARGO_PKG_VERSION"));

    let out = r.find_method("Controller", 1, "Ping").unwrap().call(json!({})).await.unwrap();
    assert_eq!(out, json!({}));
}

#[test]
fn later_registration_replaces_earlier() {
    let r = registry();
    r.register(Arc::new(UserManagerFacade { version: 1 }));
    assert_eq!(r.versions("UserManager"), vec![1, 2]);
}
