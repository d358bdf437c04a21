// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Archive deletion against a mock archive API.

use shelfsync_core::{ArchiveClient, ArchiveError, DeleteArchiveRequest};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
#[ignore = "require network"]
async fn archive_delete_resolves_url_and_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/archives/abc123"))
        .and(header("Content-Type", "application/json"))
        .and(header("Authorization", "Bearer s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":1}"#))
        .expect(1)
        .mount(&server)
        .await;

    let client = ArchiveClient::new().unwrap();
    let source = format!("{}/api/archives/abc123/files", server.uri());
    let request = DeleteArchiveRequest::new(source).with_token("s3cret");
    let body = client.delete_archive(&request).await.unwrap();

    assert_eq!(body, r#"{"success":1}"#);
}

#[tokio::test]
#[ignore = "require network"]
async fn archive_delete_reports_http_errors() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .respond_with(ResponseTemplate::new(423).set_body_string("archive is locked"))
        .mount(&server)
        .await;

    let client = ArchiveClient::new().unwrap();
    let source = format!("{}/api/archives/abc123/thumbnail", server.uri());
    let request = DeleteArchiveRequest::new(source);
    let err = client.delete_archive(&request).await.unwrap_err();

    match err {
        ArchiveError::Http { status, body } => {
            assert_eq!(status, 423);
            assert_eq!(body, "archive is locked");
        }
        other => panic!("Expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn archive_delete_rejects_unsupported_url_before_sending() {
    let client = ArchiveClient::new().unwrap();
    let request = DeleteArchiveRequest::new("https://lrr.example.org/api/archives/abc123");

    let err = client.delete_archive(&request).await.unwrap_err();
    assert!(matches!(err, ArchiveError::UnsupportedUrl(_)));
}
