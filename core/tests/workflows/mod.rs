// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the shelfsync-core crate.
//!
//! These tests drive full sync cycles and archive deletions against a mock
//! HTTP server.

mod archive_delete;
mod webdav_sync;
