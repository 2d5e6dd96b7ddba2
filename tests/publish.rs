//! Library-level publish tests against a local mock of the Medium API.
//!
//! Run with:
//!   cargo test --test publish

use md2medium::{
    prepare, publish, Credentials, Post, PublishConfig, PublishError, PublishProgressCallback,
    PublishStatus,
};
use serde_json::json;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use wiremock::matchers::{body_json, body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

// ── Test helpers ─────────────────────────────────────────────────────────────

const POST_MD: &str = r#"---
title: "Hello, Medium"
date: 2024-05-01
tags: ["rust", "blogging", "hugo", "medium", "cli", "extra", "more"]
---
Intro paragraph.

![arch](../static/images/arch.png)
![logo](https://cdn.example.org/logo.svg)
"#;

const EXPECTED_CONTENT: &str = "Intro paragraph.\n\n\
![arch](https://raw.githubusercontent.com/kvsankar/blog/main/static/images/arch.png)\n\
![logo](https://cdn.example.org/logo.svg)\n";

fn write_post(dir: &TempDir, name: &str, body: &str) -> PathBuf {
    let p = dir.path().join(name);
    std::fs::write(&p, body).unwrap();
    p
}

fn config_for(server: &MockServer) -> md2medium::PublishConfigBuilder {
    PublishConfig::builder().api_base(format!("{}/v1", server.uri()))
}

fn created(url: &str) -> ResponseTemplate {
    ResponseTemplate::new(201).set_body_json(json!({
        "data": {
            "id": "e6f36a",
            "title": "Hello, Medium",
            "authorId": "u123",
            "tags": ["rust", "blogging", "hugo", "medium", "cli"],
            "url": url,
            "canonicalUrl": "",
            "publishStatus": "draft",
            "license": ""
        }
    }))
}

#[derive(Default)]
struct Recorder {
    events: Mutex<Vec<String>>,
}

impl PublishProgressCallback for Recorder {
    fn on_author_lookup_start(&self) {
        self.events.lock().unwrap().push("lookup".into());
    }
    fn on_author_resolved(&self, user_id: &str, looked_up: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("resolved {user_id} {looked_up}"));
    }
    fn on_publish_start(&self, title: &str, status: PublishStatus) {
        self.events
            .lock()
            .unwrap()
            .push(format!("publish {title} {status}"));
    }
    fn on_publish_complete(&self, post: &Post) {
        self.events.lock().unwrap().push(format!("done {}", post.id));
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn publishes_draft_with_configured_user_id() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let file = write_post(&dir, "hello-medium.md", POST_MD);

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/users/u123/posts"))
        .and(header("authorization", "Bearer tok-123"))
        .and(body_json(json!({
            "title": "Hello, Medium",
            "contentFormat": "markdown",
            "content": EXPECTED_CONTENT,
            "publishStatus": "draft",
            "tags": ["rust", "blogging", "hugo", "medium", "cli"]
        })))
        .respond_with(created("https://medium.com/@me/hello-medium-e6f36a"))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::new(Some("tok-123".into()), Some("u123".into())).unwrap();
    let config = config_for(&server).build().unwrap();

    let output = publish(&file, &credentials, &config)
        .await
        .expect("publish should succeed");

    assert_eq!(output.post.url, "https://medium.com/@me/hello-medium-e6f36a");
    assert_eq!(output.author.id, "u123");
    assert!(!output.author.looked_up);
}

#[tokio::test]
async fn looks_up_user_id_when_absent() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let file = write_post(&dir, "post.md", "# Heading Title\n\nText.\n");

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .and(header("authorization", "Bearer tok"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "id": "abc987",
                "username": "writer",
                "name": "A Writer",
                "url": "https://medium.com/@writer"
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/v1/users/abc987/posts"))
        .and(body_partial_json(json!({
            "title": "Heading Title",
            "publishStatus": "public",
            "canonicalUrl": "https://blog.example/post/",
            "tags": []
        })))
        .respond_with(created("https://medium.com/@writer/heading-title-e6f36a"))
        .expect(1)
        .mount(&server)
        .await;

    let recorder = Arc::new(Recorder::default());
    let credentials = Credentials::new(Some("tok".into()), None).unwrap();
    let config = config_for(&server)
        .status(PublishStatus::Public)
        .canonical_url("https://blog.example/post/")
        .progress_callback(recorder.clone())
        .build()
        .unwrap();

    let output = publish(&file, &credentials, &config).await.unwrap();

    assert_eq!(output.author.id, "abc987");
    assert!(output.author.looked_up);
    assert_eq!(
        *recorder.events.lock().unwrap(),
        vec![
            "lookup",
            "resolved abc987 true",
            "publish Heading Title public",
            "done e6f36a"
        ]
    );
}

#[tokio::test]
async fn failed_lookup_is_fatal_and_skips_post() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let file = write_post(&dir, "post.md", "Body\n");

    Mock::given(method("GET"))
        .and(path("/v1/me"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_string(r#"{"errors":[{"message":"Token was invalid.","code":6003}]}"#),
        )
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .respond_with(created("https://medium.com/never"))
        .expect(0)
        .mount(&server)
        .await;

    let credentials = Credentials::new(Some("bad".into()), None).unwrap();
    let config = config_for(&server).build().unwrap();

    let err = publish(&file, &credentials, &config).await.unwrap_err();
    match err {
        PublishError::Remote {
            operation,
            status,
            body,
        } => {
            assert_eq!(operation, "fetching user id");
            assert_eq!(status.as_u16(), 401);
            assert!(body.contains("Token was invalid."), "got: {body}");
        }
        other => panic!("expected Remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn non_created_response_surfaces_status_and_body() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let file = write_post(&dir, "post.md", "Body\n");

    let body = r#"{"errors":[{"message":"Publish status must be one of: public, draft, unlisted","code":2004}]}"#;
    Mock::given(method("POST"))
        .and(path("/v1/users/u1/posts"))
        .respond_with(ResponseTemplate::new(400).set_body_string(body))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::new(Some("tok".into()), Some("u1".into())).unwrap();
    let config = config_for(&server).build().unwrap();

    let err = publish(&file, &credentials, &config).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(400));
    let msg = err.to_string();
    assert!(msg.contains("400"), "got: {msg}");
    assert!(msg.contains(body), "got: {msg}");
}

#[tokio::test]
async fn ok_instead_of_created_is_still_an_error() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let file = write_post(&dir, "post.md", "Body\n");

    Mock::given(method("POST"))
        .and(path("/v1/users/u1/posts"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&server)
        .await;

    let credentials = Credentials::new(Some("tok".into()), Some("u1".into())).unwrap();
    let config = config_for(&server).build().unwrap();

    let err = publish(&file, &credentials, &config).await.unwrap_err();
    assert_eq!(err.status().map(|s| s.as_u16()), Some(200));
}

#[tokio::test]
async fn missing_file_makes_no_requests() {
    let server = MockServer::start().await;
    let credentials = Credentials::new(Some("tok".into()), None).unwrap();
    let config = config_for(&server).build().unwrap();

    let err = publish("/no/such/dir/post.md", &credentials, &config)
        .await
        .unwrap_err();

    assert!(matches!(err, PublishError::FileNotFound { .. }), "got: {err:?}");
    let requests = server.received_requests().await.unwrap();
    assert!(requests.is_empty(), "expected no requests, got {}", requests.len());
}

#[tokio::test]
async fn malformed_success_body_is_invalid_response() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let file = write_post(&dir, "post.md", "Body\n");

    Mock::given(method("POST"))
        .and(path("/v1/users/u1/posts"))
        .respond_with(ResponseTemplate::new(201).set_body_string("not json"))
        .mount(&server)
        .await;

    let credentials = Credentials::new(Some("tok".into()), Some("u1".into())).unwrap();
    let config = config_for(&server).build().unwrap();

    let err = publish(&file, &credentials, &config).await.unwrap_err();
    assert!(matches!(err, PublishError::InvalidResponse { .. }), "got: {err:?}");
}

// ── Title fallback, end to end through `prepare` ────────────────────────────

#[tokio::test]
async fn title_fallback_order() {
    let dir = TempDir::new().unwrap();
    let config = PublishConfig::default();

    let all = write_post(
        &dir,
        "file-name-title.md",
        "---\ntitle: Meta Title\n---\n# Heading Title\n",
    );
    assert_eq!(prepare(&all, &config).await.unwrap().title, "Meta Title");

    let no_meta = write_post(&dir, "file-name-title.md", "---\ndraft: true\n---\n# Heading Title\n");
    assert_eq!(prepare(&no_meta, &config).await.unwrap().title, "Heading Title");

    let neither = write_post(&dir, "file-name-title.md", "---\ndraft: true\n---\nPlain.\n");
    assert_eq!(prepare(&neither, &config).await.unwrap().title, "File Name Title");
}
