//! End-to-end tests for batch generation against a mock HTTP server.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::fs;

use artgen_core::{
    BatchRequest, GeneratorOptions, InferenceEngine, InferenceError, JsonInference, TypeGenerator,
    build_client, run_batch,
};
use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

fn request(domain: &str, paths: &[&str], prefix: &str) -> BatchRequest {
    BatchRequest {
        domain: domain.to_string(),
        paths: paths.iter().map(|p| (*p).to_string()).collect(),
        prefix: prefix.to_string(),
    }
}

#[tokio::test]
async fn test_batch_skips_failed_fetch_and_continues() {
    let server = MockServer::start().await;
    mount_json(&server, "/users", json!([{"id": 1, "name": "a"}])).await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;
    mount_json(&server, "/posts", json!({"title": "t"})).await;

    let out = TempDir::new().unwrap();
    let client = build_client().unwrap();
    let report = run_batch(
        &client,
        &TypeGenerator::new(),
        &request(&server.uri(), &["users", "/broken", "/posts"], ""),
        out.path(),
    )
    .await
    .unwrap();

    assert_eq!(report.attempted, 3);
    assert_eq!(report.succeeded(), 2);
    assert_eq!(report.succeeded(), report.outcomes.len());

    let names: Vec<&str> = report.outcomes.iter().map(|o| o.type_name.as_str()).collect();
    assert_eq!(names, vec!["Users", "Posts"]);

    let users = fs::read_to_string(out.path().join("Users.ts")).unwrap();
    assert_eq!(
        users,
        "export interface Users {\n    id:   number;\n    name: string;\n}\n"
    );
    assert!(out.path().join("Posts.ts").is_file());
    assert!(!out.path().join("Broken.ts").exists());
}

#[tokio::test]
async fn test_batch_domain_trailing_slash_and_prefix() {
    let server = MockServer::start().await;
    mount_json(&server, "/v1/items", json!({"sku": "x"})).await;

    let out = TempDir::new().unwrap();
    let client = build_client().unwrap();
    let domain = format!("{}/v1/", server.uri());
    let report = run_batch(
        &client,
        &TypeGenerator::new(),
        &request(&domain, &["/items"], "Api"),
        out.path(),
    )
    .await
    .unwrap();

    assert_eq!(report.succeeded(), 1);
    let outcome = &report.outcomes[0];
    assert_eq!(outcome.path, "/items");
    assert_eq!(outcome.type_name, "ApiItems");
    assert_eq!(outcome.file, out.path().join("ApiItems.ts"));
}

#[tokio::test]
async fn test_batch_empty_path_list_creates_directory() {
    let root = TempDir::new().unwrap();
    let out = root.path().join("types");
    let client = build_client().unwrap();

    let report = run_batch(
        &client,
        &TypeGenerator::new(),
        &request("https://api.example.com", &[], ""),
        &out,
    )
    .await
    .unwrap();

    assert_eq!(report.attempted, 0);
    assert_eq!(report.succeeded(), 0);
    assert!(out.is_dir());
    assert_eq!(fs::read_dir(&out).unwrap().count(), 0);
}

#[tokio::test]
async fn test_batch_skips_generation_failures() {
    struct RejectComments;

    impl InferenceEngine for RejectComments {
        fn render(
            &self,
            type_name: &str,
            samples: &[Value],
            options: &GeneratorOptions,
        ) -> Result<String, InferenceError> {
            if type_name == "Comments" {
                return Err(InferenceError::NoSamples {
                    type_name: type_name.to_string(),
                });
            }
            JsonInference.render(type_name, samples, options)
        }
    }

    let server = MockServer::start().await;
    mount_json(&server, "/comments", json!({"id": 1})).await;
    mount_json(&server, "/tags", json!({"label": "x"})).await;

    let out = TempDir::new().unwrap();
    let client = build_client().unwrap();
    let generator = TypeGenerator::with_engine(RejectComments, GeneratorOptions::default());
    let report = run_batch(
        &client,
        &generator,
        &request(&server.uri(), &["comments", "tags"], ""),
        out.path(),
    )
    .await
    .unwrap();

    assert_eq!(report.attempted, 2);
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.outcomes[0].type_name, "Tags");
}

#[tokio::test]
async fn test_batch_empty_array_response_is_skipped() {
    let server = MockServer::start().await;
    mount_json(&server, "/empty", json!([])).await;

    let out = TempDir::new().unwrap();
    let client = build_client().unwrap();
    let report = run_batch(
        &client,
        &TypeGenerator::new(),
        &request(&server.uri(), &["empty"], ""),
        out.path(),
    )
    .await
    .unwrap();

    assert_eq!(report.attempted, 1);
    assert!(report.outcomes.is_empty());
}

#[tokio::test]
async fn test_batch_fails_when_output_dir_cannot_be_created() {
    let root = TempDir::new().unwrap();
    let blocker = root.path().join("file");
    fs::write(&blocker, "not a directory").unwrap();

    let client = build_client().unwrap();
    let result = run_batch(
        &client,
        &TypeGenerator::new(),
        &request("https://api.example.com", &["users"], ""),
        &blocker.join("types"),
    )
    .await;

    assert!(result.is_err());
}
