// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Encoder configuration.
//!
//! [`EncoderConfig`] is plain data with serde support so host applications
//! can embed it in their own configuration files:
//!
//! ```
//! use hdds_schema_encoder::{EncoderConfig, WireFormat};
//!
//! let config: EncoderConfig =
//!     serde_json::from_str(r#"{ "wire_format": "cdr-le", "max_buffer_size": 65536 }"#).unwrap();
//! assert_eq!(config.wire_format, WireFormat::CdrLe);
//! assert_eq!(config.initial_capacity, 8096);
//! ```

use serde::{Deserialize, Serialize};

use crate::writer::{WireFormat, WriterConfig};

/// Bytes reserved for a fresh output buffer.
pub const DEFAULT_INITIAL_CAPACITY: usize = 8096;

/// Maximum composite nesting inside a single field value.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Magic byte opening a [`FrameHeader::SchemaId`] frame.
pub const SCHEMA_ID_MAGIC: u8 = 0x00;

/// Bytes emitted before the first field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrameHeader {
    /// Nothing: the buffer holds field values only.
    #[default]
    None,
    /// Registry framing: magic byte `0x00`, then the schema id as big-endian u32.
    SchemaId(u32),
}

impl FrameHeader {
    /// Encoded header bytes.
    pub fn to_bytes(self) -> Vec<u8> {
        match self {
            Self::None => Vec::new(),
            Self::SchemaId(id) => {
                let mut bytes = Vec::with_capacity(5);
                bytes.push(SCHEMA_ID_MAGIC);
                bytes.extend_from_slice(&id.to_be_bytes());
                bytes
            }
        }
    }
}

/// Encoder settings. `Default` gives Avro with no header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    pub wire_format: WireFormat,
    pub initial_capacity: usize,
    /// Encodes that would exceed this size fail instead of growing further.
    pub max_buffer_size: Option<usize>,
    pub max_depth: usize,
    pub header: FrameHeader,
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            wire_format: WireFormat::Avro,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            max_buffer_size: None,
            max_depth: DEFAULT_MAX_DEPTH,
            header: FrameHeader::None,
        }
    }
}

impl EncoderConfig {
    /// Select the wire encoding.
    pub fn with_wire_format(mut self, wire_format: WireFormat) -> Self {
        self.wire_format = wire_format;
        self
    }

    /// Bytes reserved for each fresh buffer.
    pub fn with_initial_capacity(mut self, bytes: usize) -> Self {
        self.initial_capacity = bytes;
        self
    }

    /// Cap the output size.
    pub fn with_max_buffer_size(mut self, bytes: usize) -> Self {
        self.max_buffer_size = Some(bytes);
        self
    }

    /// Limit composite nesting.
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Bytes emitted before the first field.
    pub fn with_header(mut self, header: FrameHeader) -> Self {
        self.header = header;
        self
    }

    /// Writer-facing subset.
    pub fn writer_config(&self) -> WriterConfig {
        WriterConfig {
            initial_capacity: self.initial_capacity,
            max_buffer_size: self.max_buffer_size,
            max_depth: self.max_depth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EncoderConfig::default();
        assert_eq!(config.wire_format, WireFormat::Avro);
        assert_eq!(config.initial_capacity, DEFAULT_INITIAL_CAPACITY);
        assert_eq!(config.max_buffer_size, None);
        assert_eq!(config.header, FrameHeader::None);
        assert_eq!(config.writer_config(), WriterConfig::default());
    }

    #[test]
    fn test_header_bytes() {
        assert!(FrameHeader::None.to_bytes().is_empty());
        assert_eq!(
            FrameHeader::SchemaId(0x0102_0304).to_bytes(),
            vec![0x00, 0x01, 0x02, 0x03, 0x04]
        );
    }

    #[test]
    fn test_json_roundtrip_with_partial_input() {
        let config: EncoderConfig =
            serde_json::from_str(r#"{ "header": { "schema_id": 9 }, "max_depth": 4 }"#)
                .expect("parse");
        assert_eq!(config.header, FrameHeader::SchemaId(9));
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.wire_format, WireFormat::Avro);

        let json = serde_json::to_string(&config).expect("serialize");
        let back: EncoderConfig = serde_json::from_str(&json).expect("reparse");
        assert_eq!(back, config);
    }

    #[test]
    fn test_builder_methods() {
        let config = EncoderConfig::default()
            .with_wire_format(WireFormat::CdrLe)
            .with_initial_capacity(128)
            .with_max_buffer_size(1024)
            .with_max_depth(8)
            .with_header(FrameHeader::SchemaId(1));
        let writer = config.writer_config();
        assert_eq!(writer.initial_capacity, 128);
        assert_eq!(writer.max_buffer_size, Some(1024));
        assert_eq!(writer.max_depth, 8);
    }
}
