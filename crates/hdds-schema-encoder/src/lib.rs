// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Schema-driven binary encoding for HDDS message types.
//!
//! Turns an arbitrary record into an owned binary buffer without a
//! hand-written serializer per message type. The field set and field order
//! come from a schema; the way each field is read out of the record comes
//! from a dictionary supplied with each call.
//!
//! # Features
//!
//! - **SchemaRegistry**: message type to schema mapping, shared across threads
//! - **Encoder**: walks schema fields in order, pulls values through the dictionary
//! - **Writers**: Avro binary (default) and little-endian CDR
//! - **OwnedBuffer**: move-only result with a one-time raw release for foreign callers
//!
//! # Architecture
//!
//! ```text
//! message type ──> SchemaRegistry ──> Schema
//!                                       |
//! record + Dictionary ──────────────> Encoder ──> ValueWriter ──> OwnedBuffer
//! ```
//!
//! # Example
//!
//! ```rust
//! use hdds_schema_encoder::{
//!     encode_registered, FieldDictionary, RecordSchemaBuilder, SchemaRegistry,
//! };
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum MsgType { Status }
//!
//! struct Status { id: i64, name: String }
//!
//! let registry: SchemaRegistry<MsgType> = SchemaRegistry::new();
//! registry.register(
//!     MsgType::Status,
//!     RecordSchemaBuilder::new("Status").field("id").field("name").build(),
//! );
//!
//! let dict = FieldDictionary::new()
//!     .field("name", |s: &Status| s.name.as_str().into())
//!     .field("id", |s: &Status| s.id.into());
//!
//! let status = Status { id: 7, name: "ok".into() };
//! let buf = encode_registered(&status, &dict, &registry, &MsgType::Status).unwrap();
//! assert_eq!(buf.as_slice(), &[0x0E, 0x04, b'o', b'k']);
//! ```

pub mod buffer;
pub mod config;
pub mod dictionary;
pub mod encoder;
pub mod error;
pub mod facade;
pub mod registry;
pub mod schema;
pub mod value;
pub mod writer;

pub use buffer::OwnedBuffer;
pub use config::{EncoderConfig, FrameHeader};
pub use dictionary::{Accessor, Dictionary, FieldDictionary};
pub use encoder::Encoder;
pub use error::{EncodeError, Result, WriteError};
pub use facade::{
    encode_registered, encode_registered_config, encode_with_schema, encode_with_schema_config,
};
pub use registry::{MessageType, SchemaRegistry};
pub use schema::{FieldSchema, RecordSchema, RecordSchemaBuilder, Schema};
pub use value::{FieldValue, ValueKind};
pub use writer::{AvroWriter, CdrWriter, ValueWriter, WireFormat, WriterConfig};
