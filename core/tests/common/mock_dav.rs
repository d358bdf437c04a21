// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Helpers for mounting `WebDAV` objects on a wiremock server.

use shelfsync_core::{Backup, compress};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use crate::common::Library;

const MULTISTATUS: &str = r#"<?xml version="1.0" encoding="utf-8" ?>
<D:multistatus xmlns:D="DAV:">
  <D:response>
    <D:propstat>
      <D:prop><D:resourcetype/></D:prop>
      <D:status>HTTP/1.1 200 OK</D:status>
    </D:propstat>
  </D:response>
</D:multistatus>"#;

/// Serves the device id marker at `object`.
pub async fn mount_marker(server: &MockServer, object: &str, device_id: &str) {
    Mock::given(method("PROPFIND"))
        .and(path(object))
        .respond_with(ResponseTemplate::new(207).set_body_raw(MULTISTATUS, "application/xml"))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(object))
        .respond_with(ResponseTemplate::new(200).set_body_raw(device_id, "text/plain"))
        .mount(server)
        .await;
}

/// Serves a compressed snapshot of `library` at `object`.
pub async fn mount_snapshot(server: &MockServer, object: &str, library: &Library) {
    let blob = compress(&library.encode().expect("encode")).expect("compress");

    Mock::given(method("PROPFIND"))
        .and(path(object))
        .respond_with(ResponseTemplate::new(207).set_body_raw(MULTISTATUS, "application/xml"))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(object))
        .respond_with(ResponseTemplate::new(200).set_body_raw(blob, "application/octet-stream"))
        .mount(server)
        .await;
}

/// All PUT requests the server received for `object`.
pub async fn puts_to(server: &MockServer, object: &str) -> Vec<Request> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .into_iter()
        .filter(|r| r.method.as_str() == "PUT" && r.url.path() == object)
        .collect()
}
