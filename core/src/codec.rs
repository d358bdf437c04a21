// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Snapshot codec: gzip framing plus a versioned CBOR payload schema.

use std::io::{self, Read, Write};

use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::SyncError;

/// Version of the payload envelope written by [`encode_versioned`].
pub const SCHEMA_VERSION: u16 = 1;

/// A backup payload with a fixed binary schema.
///
/// An empty byte sequence is a valid encoding and means "nothing to sync";
/// the orchestrator refuses to push it.
pub trait Backup: Sized + Send + Sync {
    /// Serializes the backup.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::CorruptData`] if the value cannot be serialized.
    fn encode(&self) -> Result<Vec<u8>, SyncError>;

    /// Deserializes a backup previously produced by [`Backup::encode`].
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::CorruptData`] on schema mismatch.
    fn decode(bytes: &[u8]) -> Result<Self, SyncError>;
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u16,
    backup: &'a T,
}

#[derive(Deserialize)]
struct Envelope<T> {
    version: u16,
    backup: T,
}

/// Encodes a value into the versioned envelope.
///
/// The default value encodes to zero bytes, so an empty backup is detectable
/// after serialization.
///
/// # Errors
///
/// Returns [`SyncError::CorruptData`] if serialization fails.
pub fn encode_versioned<T>(value: &T) -> Result<Vec<u8>, SyncError>
where
    T: Serialize + Default + PartialEq,
{
    if *value == T::default() {
        return Ok(Vec::new());
    }

    let envelope = EnvelopeRef {
        version: SCHEMA_VERSION,
        backup: value,
    };
    let mut buf = Vec::new();
    ciborium::into_writer(&envelope, &mut buf)
        .map_err(|e| SyncError::CorruptData(format!("failed to encode backup: {e}")))?;
    Ok(buf)
}

/// Decodes a value written by [`encode_versioned`].
///
/// # Errors
///
/// Returns [`SyncError::CorruptData`] if the bytes are not a valid envelope
/// or carry an unsupported schema version.
pub fn decode_versioned<T>(bytes: &[u8]) -> Result<T, SyncError>
where
    T: DeserializeOwned + Default,
{
    if bytes.is_empty() {
        return Ok(T::default());
    }

    let envelope: Envelope<T> = ciborium::from_reader(bytes)
        .map_err(|e| SyncError::CorruptData(format!("failed to decode backup: {e}")))?;

    if envelope.version != SCHEMA_VERSION {
        return Err(SyncError::CorruptData(format!(
            "unsupported schema version {} (expected {SCHEMA_VERSION})",
            envelope.version
        )));
    }

    Ok(envelope.backup)
}

/// Compresses bytes into a gzip stream.
///
/// # Errors
///
/// Returns an error if the encoder fails to flush.
pub fn compress(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Decompresses a gzip stream.
///
/// # Errors
///
/// Returns an error if the input is not a valid gzip stream.
pub fn decompress(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder.read_to_end(&mut out)?;
    Ok(out)
}

/// Decompresses and decodes a remote snapshot blob.
pub(crate) fn unpack<B: Backup>(blob: &[u8]) -> Result<B, SyncError> {
    let bytes = decompress(blob)
        .map_err(|e| SyncError::CorruptData(format!("failed to decompress sync data: {e}")))?;
    B::decode(&bytes)
}
