// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Request builders for `WebDAV` operations.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::error::WebDavError;
use crate::xml::ns;

/// PROPFIND request builder.
///
/// Only the live properties needed to probe an object are supported.
#[derive(Debug, Default)]
pub struct PropFindRequest {
    props: Vec<&'static str>,
}

impl PropFindRequest {
    /// Creates an empty PROPFIND request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the request used for existence probes.
    #[must_use]
    pub fn probe() -> Self {
        let mut req = Self::new();
        req.add_property("resourcetype");
        req.add_property("getcontentlength");
        req
    }

    /// Adds a `DAV:` property to the request.
    pub fn add_property(&mut self, name: &'static str) -> &mut Self {
        self.props.push(name);
        self
    }

    /// Builds the XML body for the PROPFIND request.
    ///
    /// # Errors
    ///
    /// Returns an error if XML building fails.
    pub fn build(&self) -> Result<String, WebDavError> {
        let mut writer = Writer::new_with_indent(Cursor::new(Vec::new()), b' ', 2);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        // <D:propfind xmlns:D="DAV:">
        let mut propfind = BytesStart::new("D:propfind");
        propfind.push_attribute(("xmlns:D", ns::DAV));
        writer.write_event(Event::Start(propfind))?;

        writer.write_event(Event::Start(BytesStart::new("D:prop")))?;
        for name in &self.props {
            writer.write_event(Event::Empty(BytesStart::new(format!("D:{name}"))))?;
        }
        writer.write_event(Event::End(BytesEnd::new("D:prop")))?;

        writer.write_event(Event::End(BytesEnd::new("D:propfind")))?;

        String::from_utf8(writer.into_inner().into_inner())
            .map_err(|e| WebDavError::Xml(format!("UTF-8 error: {e}")))
    }
}
