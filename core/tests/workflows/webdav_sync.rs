// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Full sync cycles against a mock `WebDAV` server.

use shelfsync_core::{Backup, Decision, DeviceId, SyncErrorKind, Syncer, decompress};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::common::{
    Library, library, merge_libraries, mount_marker, mount_snapshot, puts_to, test_config,
};

const SNAPSHOT: &str = "/dav/shelfsync_sync.proto.gz";
const MARKER: &str = "/dav/shelfsync_device_id.txt";

async fn accept_puts(server: &MockServer) {
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .mount(server)
        .await;
}

fn pushed_library(body: &[u8]) -> Library {
    Library::decode(&decompress(body).expect("pushed blob is gzip")).expect("pushed blob decodes")
}

#[tokio::test]
#[ignore = "require network"]
async fn webdav_sync_merges_snapshot_from_other_device() {
    // Arrange
    let server = MockServer::start().await;
    let remote = library(&[("Vagabond", 120), ("Berserk", 80)]);
    mount_snapshot(&server, SNAPSHOT, &remote).await;
    mount_marker(&server, MARKER, "B").await;
    accept_puts(&server).await;

    let config = test_config(&format!("{}/dav/", server.uri()));
    let syncer = Syncer::webdav(config, DeviceId::from("A"), merge_libraries).unwrap();

    // Act
    let local = library(&[("Berserk", 100), ("Monster", 12)]);
    let outcome = syncer.sync(syncer.snapshot(local)).await.unwrap();

    // Assert
    let merged = library(&[("Berserk", 100), ("Monster", 12), ("Vagabond", 120)]);
    assert_eq!(outcome.decision, Decision::Merge);
    assert_eq!(outcome.backup, merged);

    let marker_puts = puts_to(&server, MARKER).await;
    assert_eq!(marker_puts.len(), 1);
    assert_eq!(marker_puts[0].body, b"A");
    assert_eq!(
        marker_puts[0].headers.get("content-type").unwrap(),
        "text/plain"
    );

    let blob_puts = puts_to(&server, SNAPSHOT).await;
    assert_eq!(blob_puts.len(), 1);
    assert_eq!(pushed_library(&blob_puts[0].body), merged);
    assert_eq!(
        blob_puts[0].headers.get("content-type").unwrap(),
        "application/octet-stream"
    );
}

#[tokio::test]
#[ignore = "require network"]
async fn webdav_sync_overwrites_snapshot_from_same_device() {
    let server = MockServer::start().await;
    mount_snapshot(&server, SNAPSHOT, &library(&[("Old", 1)])).await;
    mount_marker(&server, MARKER, "A").await;
    accept_puts(&server).await;

    let config = test_config(&format!("{}/dav", server.uri()));
    let syncer = Syncer::webdav(config, DeviceId::from("A"), merge_libraries).unwrap();

    let local = library(&[("Berserk", 100)]);
    let outcome = syncer.sync(syncer.snapshot(local.clone())).await.unwrap();

    assert_eq!(outcome.decision, Decision::OverwriteRemote);
    assert_eq!(outcome.backup, local);

    let blob_puts = puts_to(&server, SNAPSHOT).await;
    assert_eq!(pushed_library(&blob_puts[0].body), local);
}

#[tokio::test]
#[ignore = "require network"]
async fn webdav_sync_first_sync_adopts_local() {
    let server = MockServer::start().await;
    Mock::given(method("PROPFIND"))
        .and(path(SNAPSHOT))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .expect(0)
        .mount(&server)
        .await;
    accept_puts(&server).await;

    let config = test_config(&format!("{}/dav", server.uri()));
    let syncer = Syncer::webdav(config, DeviceId::from("A"), merge_libraries).unwrap();

    let local = library(&[("Berserk", 100)]);
    let outcome = syncer.sync(syncer.snapshot(local.clone())).await.unwrap();

    assert_eq!(outcome.decision, Decision::AdoptLocal);
    assert_eq!(outcome.backup, local);
    assert_eq!(puts_to(&server, MARKER).await.len(), 1);
    assert_eq!(puts_to(&server, SNAPSHOT).await.len(), 1);
}

#[tokio::test]
#[ignore = "require network"]
async fn webdav_sync_empty_backup_never_writes() {
    let server = MockServer::start().await;
    Mock::given(method("PROPFIND"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&format!("{}/dav", server.uri()));
    let syncer = Syncer::webdav(config, DeviceId::from("A"), merge_libraries).unwrap();

    let err = syncer
        .sync(syncer.snapshot(Library::default()))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), SyncErrorKind::EmptyPayload);
}

#[tokio::test]
#[ignore = "require network"]
async fn webdav_sync_auth_failure_is_logged_and_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("PROPFIND"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let config = test_config(&format!("{}/dav", server.uri()));
    let syncer = Syncer::webdav(config, DeviceId::from("A"), merge_libraries).unwrap();

    let result = syncer
        .sync_or_log(syncer.snapshot(library(&[("Berserk", 1)])))
        .await;

    assert_eq!(result, None);
}

#[tokio::test]
#[ignore = "require network"]
async fn webdav_sync_blob_write_failure_leaves_marker_written() {
    let server = MockServer::start().await;
    Mock::given(method("PROPFIND"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(MARKER))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path(SNAPSHOT))
        .respond_with(ResponseTemplate::new(500).set_body_string("disk full"))
        .mount(&server)
        .await;

    let config = test_config(&format!("{}/dav", server.uri()));
    let syncer = Syncer::webdav(config, DeviceId::from("A"), merge_libraries).unwrap();

    let err = syncer
        .sync(syncer.snapshot(library(&[("Berserk", 1)])))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), SyncErrorKind::Network);
    assert!(err.to_string().contains("disk full"));
}

#[tokio::test]
#[ignore = "require network"]
async fn webdav_sync_not_configured_makes_no_requests() {
    let server = MockServer::start().await;
    Mock::given(method("PROPFIND"))
        .respond_with(ResponseTemplate::new(404))
        .expect(0)
        .mount(&server)
        .await;

    let mut config = test_config(&format!("{}/dav", server.uri()));
    config.password = String::new();

    let result = Syncer::webdav(config, DeviceId::from("A"), merge_libraries);
    assert!(matches!(
        result.map(|_| ()).map_err(|e| e.kind()),
        Err(SyncErrorKind::NotConfigured)
    ));
}
