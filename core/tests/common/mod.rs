// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.
//!
//! This module provides shared test infrastructure including:
//! - A sample backup type and merge function (fixtures)
//! - `WebDAV` mock helpers

mod fixtures;
mod mock_dav;

#[allow(unused_imports)]
pub use fixtures::{Library, library, merge_libraries, test_config};
#[allow(unused_imports)]
pub use mock_dav::{mount_marker, mount_snapshot, puts_to};
