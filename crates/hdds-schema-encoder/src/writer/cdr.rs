// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! XCDR1 little-endian encoding.
//!
//! Primitives are aligned to their natural size, measured from the first
//! value byte (header bytes do not count). Strings carry a u32 length that
//! includes the NUL terminator; arrays, maps and byte blobs carry a u32
//! element count. CDR has no null or tagged-union-without-type
//! representation, so those values are rejected.

use super::{ByteSink, ValueWriter, WireFormat, WriterConfig};
use crate::buffer::OwnedBuffer;
use crate::error::WriteError;
use crate::value::FieldValue;

/// [`ValueWriter`] producing little-endian CDR.
#[derive(Debug)]
pub struct CdrWriter {
    sink: ByteSink,
    /// Alignment origin: end of the header bytes.
    origin: usize,
    max_depth: usize,
}

impl CdrWriter {
    fn align(&mut self, alignment: usize) -> Result<(), WriteError> {
        let offset = self.sink.len() - self.origin;
        let padding = (alignment - (offset % alignment)) % alignment;
        self.sink.put_zeros(padding)
    }

    fn write_u32(&mut self, value: u32) -> Result<(), WriteError> {
        self.align(4)?;
        self.sink.put(&value.to_le_bytes())
    }

    fn write_count(&mut self, len: usize) -> Result<(), WriteError> {
        let count = u32::try_from(len).map_err(|_| WriteError::LengthOverflow { len })?;
        self.write_u32(count)
    }

    fn write_string(&mut self, s: &str) -> Result<(), WriteError> {
        let bytes = s.as_bytes();
        // Length includes null terminator
        self.write_count(bytes.len() + 1)?;
        self.sink.put(bytes)?;
        self.sink.put_u8(0)
    }

    fn encode(&mut self, value: &FieldValue, depth: usize) -> Result<(), WriteError> {
        match value {
            FieldValue::Boolean(v) => self.sink.put_u8(u8::from(*v)),
            FieldValue::Int(v) => {
                self.align(4)?;
                self.sink.put(&v.to_le_bytes())
            }
            FieldValue::Long(v) => {
                self.align(8)?;
                self.sink.put(&v.to_le_bytes())
            }
            FieldValue::Float(v) => {
                self.align(4)?;
                self.sink.put(&v.to_le_bytes())
            }
            FieldValue::Double(v) => {
                self.align(8)?;
                self.sink.put(&v.to_le_bytes())
            }
            FieldValue::Bytes(v) => {
                self.write_count(v.len())?;
                self.sink.put(v)
            }
            FieldValue::String(s) => self.write_string(s),
            FieldValue::Fixed(v) => self.sink.put(v),
            FieldValue::Enum { index, .. } => self.write_u32(*index),
            FieldValue::Array(items) => {
                let depth = self.descend(depth)?;
                self.write_count(items.len())?;
                for item in items {
                    self.encode(item, depth)?;
                }
                Ok(())
            }
            FieldValue::Map(entries) => {
                let depth = self.descend(depth)?;
                self.write_count(entries.len())?;
                for (key, item) in entries {
                    self.write_string(key)?;
                    self.encode(item, depth)?;
                }
                Ok(())
            }
            FieldValue::Record(fields) => {
                let depth = self.descend(depth)?;
                for (_, item) in fields {
                    self.encode(item, depth)?;
                }
                Ok(())
            }
            FieldValue::Null | FieldValue::Union { .. } => Err(WriteError::UnsupportedValue {
                kind: value.kind(),
                format: Self::FORMAT,
            }),
        }
    }

    fn descend(&self, depth: usize) -> Result<usize, WriteError> {
        if depth >= self.max_depth {
            return Err(WriteError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        Ok(depth + 1)
    }
}

impl ValueWriter for CdrWriter {
    const FORMAT: WireFormat = WireFormat::CdrLe;

    fn open(config: &WriterConfig) -> Result<Self, WriteError> {
        Ok(Self {
            sink: ByteSink::new(config)?,
            origin: 0,
            max_depth: config.max_depth,
        })
    }

    fn write_value(&mut self, value: &FieldValue) -> Result<(), WriteError> {
        self.encode(value, 0)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        self.sink.put(bytes)?;
        self.origin = self.sink.len();
        Ok(())
    }

    fn len(&self) -> usize {
        self.sink.len()
    }

    fn finish(self) -> OwnedBuffer {
        self.sink.into_buffer()
    }
}
