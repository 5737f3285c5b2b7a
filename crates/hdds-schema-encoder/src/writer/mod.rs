// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Binary writers.
//!
//! A [`ValueWriter`] accumulates [`FieldValue`]s into a growable buffer and
//! hands the finished bytes over as an [`OwnedBuffer`]. The wire encoding of
//! each value is chosen by the writer from the value's tag.
//!
//! - [`AvroWriter`]: Avro binary encoding (default)
//! - [`CdrWriter`]: XCDR1 little-endian with natural alignment

mod avro;
mod cdr;

pub use avro::AvroWriter;
pub use cdr::CdrWriter;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::buffer::OwnedBuffer;
use crate::error::WriteError;
use crate::value::FieldValue;

/// Wire encoding selected for an encode call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WireFormat {
    #[default]
    Avro,
    CdrLe,
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Avro => f.write_str("avro"),
            Self::CdrLe => f.write_str("cdr-le"),
        }
    }
}

/// Writer-side limits, derived from [`EncoderConfig`](crate::EncoderConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriterConfig {
    /// Bytes reserved up front.
    pub initial_capacity: usize,
    /// Hard cap on the output size, `None` = unbounded.
    pub max_buffer_size: Option<usize>,
    /// Maximum composite nesting below a field value.
    pub max_depth: usize,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            initial_capacity: crate::config::DEFAULT_INITIAL_CAPACITY,
            max_buffer_size: None,
            max_depth: crate::config::DEFAULT_MAX_DEPTH,
        }
    }
}

/// Accumulates tagged values into an owned byte buffer.
pub trait ValueWriter: Sized {
    /// Encoding produced by this writer.
    const FORMAT: WireFormat;

    /// Fresh writer with an empty buffer.
    ///
    /// Fails when the initial capacity cannot be allocated.
    fn open(config: &WriterConfig) -> Result<Self, WriteError>;

    /// Append one value.
    fn write_value(&mut self, value: &FieldValue) -> Result<(), WriteError>;

    /// Append bytes verbatim (header stage).
    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), WriteError>;

    fn flush(&mut self) -> Result<(), WriteError> {
        Ok(())
    }

    /// Bytes written so far.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the accumulated bytes. Consumes the writer.
    fn finish(self) -> OwnedBuffer;
}

/// Growable byte buffer with an optional size cap, shared by the writers.
#[derive(Debug)]
pub(crate) struct ByteSink {
    buf: Vec<u8>,
    limit: Option<usize>,
}

impl ByteSink {
    /// Fails when the initial capacity cannot be reserved.
    pub(crate) fn new(config: &WriterConfig) -> Result<Self, WriteError> {
        let capacity = match config.max_buffer_size {
            Some(limit) => config.initial_capacity.min(limit),
            None => config.initial_capacity,
        };
        let mut buf = Vec::new();
        buf.try_reserve(capacity)
            .map_err(|_| WriteError::AllocationFailed {
                requested: capacity,
            })?;
        Ok(Self {
            buf,
            limit: config.max_buffer_size,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.buf.len()
    }

    /// Check the size cap, then grow without aborting on allocation failure.
    fn reserve(&mut self, additional: usize) -> Result<(), WriteError> {
        if let Some(limit) = self.limit {
            let attempted = self.buf.len().saturating_add(additional);
            if attempted > limit {
                return Err(WriteError::BufferLimitExceeded { limit, attempted });
            }
        }
        self.buf
            .try_reserve(additional)
            .map_err(|_| WriteError::AllocationFailed {
                requested: additional,
            })
    }

    pub(crate) fn put(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        self.reserve(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    pub(crate) fn put_u8(&mut self, byte: u8) -> Result<(), WriteError> {
        self.put(&[byte])
    }

    pub(crate) fn put_zeros(&mut self, count: usize) -> Result<(), WriteError> {
        self.reserve(count)?;
        self.buf.resize(self.buf.len() + count, 0);
        Ok(())
    }

    pub(crate) fn into_buffer(self) -> OwnedBuffer {
        OwnedBuffer::from(self.buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sink_enforces_limit() {
        let config = WriterConfig {
            max_buffer_size: Some(4),
            ..WriterConfig::default()
        };
        let mut sink = ByteSink::new(&config).unwrap();
        sink.put(&[1, 2, 3]).unwrap();
        let err = sink.put(&[4, 5]).unwrap_err();
        assert_eq!(
            err,
            WriteError::BufferLimitExceeded {
                limit: 4,
                attempted: 5
            }
        );
        // Rejected write leaves the sink untouched
        assert_eq!(sink.len(), 3);
        sink.put_u8(4).unwrap();
        assert_eq!(sink.into_buffer().as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_sink_reports_allocation_failure() {
        let config = WriterConfig {
            initial_capacity: usize::MAX,
            ..WriterConfig::default()
        };
        assert_eq!(
            ByteSink::new(&config).unwrap_err(),
            WriteError::AllocationFailed {
                requested: usize::MAX
            }
        );

        // Capped buffers only reserve up to the cap
        let capped = WriterConfig {
            max_buffer_size: Some(16),
            ..config
        };
        let mut sink = ByteSink::new(&capped).unwrap();
        sink.put_zeros(16).unwrap();
        assert_eq!(sink.len(), 16);
    }

    #[test]
    fn test_wire_format_serde_names() {
        assert_eq!(WireFormat::default(), WireFormat::Avro);
        assert_eq!(
            serde_json::to_string(&WireFormat::CdrLe).unwrap(),
            "\"cdr-le\""
        );
        assert_eq!(WireFormat::CdrLe.to_string(), "cdr-le");
    }
}
