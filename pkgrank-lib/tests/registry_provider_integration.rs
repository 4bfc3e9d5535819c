//! Integration tests for npm registry resolution using wiremock

use pkgrank_lib::facts::{ProviderResult, RegistryProvider};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_package(server: &MockServer, name: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path(format!("/{name}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_resolve_repository_object() {
    let server = MockServer::start().await;
    mount_package(
        &server,
        "express",
        json!({
            "name": "express",
            "repository": {"type": "git", "url": "git+https://github.com/expressjs/express.git"}
        }),
    )
    .await;

    let provider = RegistryProvider::new(&server.uri()).unwrap();
    let spec = provider.resolve_repository("express").await;

    let spec = spec.as_ref().unwrap();
    assert_eq!(spec.owner(), "expressjs");
    assert_eq!(spec.repo(), "express");
    assert_eq!(spec.host(), "github.com");
}

#[tokio::test]
async fn test_resolve_repository_string_shorthand() {
    let server = MockServer::start().await;
    mount_package(&server, "got", json!({"name": "got", "repository": "sindresorhus/got"})).await;

    let provider = RegistryProvider::new(&server.uri()).unwrap();
    let spec = provider.resolve_repository("got").await;

    assert_eq!(spec.as_ref().map(ToString::to_string).as_deref(), Some("sindresorhus/got"));
}

#[tokio::test]
async fn test_unknown_package_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
        .mount(&server)
        .await;

    let provider = RegistryProvider::new(&server.uri()).unwrap();
    match provider.resolve_repository("no-such-package").await {
        ProviderResult::NotFound(reason) => assert!(reason.contains("no-such-package")),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_package_without_repository_is_not_found() {
    let server = MockServer::start().await;
    mount_package(&server, "left-pad", json!({"name": "left-pad"})).await;

    let provider = RegistryProvider::new(&server.uri()).unwrap();
    match provider.resolve_repository("left-pad").await {
        ProviderResult::NotFound(reason) => assert!(reason.contains("does not declare a repository")),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_github_repository_is_not_found() {
    let server = MockServer::start().await;
    mount_package(
        &server,
        "elsewhere",
        json!({"repository": {"type": "git", "url": "git+https://gitlab.com/group/elsewhere.git"}}),
    )
    .await;

    let provider = RegistryProvider::new(&server.uri()).unwrap();
    match provider.resolve_repository("elsewhere").await {
        ProviderResult::NotFound(reason) => assert!(reason.contains("not hosted on GitHub")),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_document_is_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_string("this is not json"))
        .mount(&server)
        .await;

    let provider = RegistryProvider::new(&server.uri()).unwrap();
    let result = provider.resolve_repository("broken").await;

    assert!(matches!(result, ProviderResult::Error(_)));
}

#[tokio::test]
async fn test_resolve_scoped_package_escapes_slash() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/@babel%2Fcore"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "@babel/core",
            "repository": {"type": "git", "url": "https://github.com/babel/babel.git", "directory": "packages/babel-core"}
        })))
        .mount(&server)
        .await;

    let provider = RegistryProvider::new(&server.uri()).unwrap();
    let spec = provider.resolve_repository("@babel/core").await;

    let spec = spec.as_ref().unwrap();
    assert_eq!(spec.owner(), "babel");
    assert_eq!(spec.repo(), "babel");
}
