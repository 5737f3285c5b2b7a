// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Error types.

use thiserror::Error;

use crate::value::ValueKind;
use crate::writer::WireFormat;

/// Errors raised by a [`ValueWriter`](crate::writer::ValueWriter).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WriteError {
    #[error("{kind} values cannot be written as {format}")]
    UnsupportedValue { kind: ValueKind, format: WireFormat },

    #[error("length {len} does not fit the wire length prefix")]
    LengthOverflow { len: usize },

    #[error("buffer limit of {limit} bytes exceeded ({attempted} bytes needed)")]
    BufferLimitExceeded { limit: usize, attempted: usize },

    #[error("value nesting exceeds {limit} levels")]
    NestingTooDeep { limit: usize },

    #[error("failed to allocate {requested} bytes of output buffer")]
    AllocationFailed { requested: usize },
}

/// Errors returned by the registry, encoder and facade.
///
/// None of these are transient: the encode call is aborted and no partial
/// buffer is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EncodeError {
    #[error("no schema registered for message type {message_type}")]
    SchemaNotFound { message_type: String },

    #[error("dictionary has no accessor for schema field '{field}'")]
    FieldAccessorMissing { field: String },

    #[error("schema {schema} declares {field_count} fields but has no name for field {index}")]
    FieldNameMissing {
        schema: String,
        index: usize,
        field_count: usize,
    },

    #[error("writer error: {0}")]
    Writer(#[from] WriteError),
}

impl EncodeError {
    pub(crate) fn schema_not_found(message_type: &impl std::fmt::Debug) -> Self {
        Self::SchemaNotFound {
            message_type: format!("{:?}", message_type),
        }
    }

    pub(crate) fn field_accessor_missing(field: &str) -> Self {
        Self::FieldAccessorMissing {
            field: field.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EncodeError>;
