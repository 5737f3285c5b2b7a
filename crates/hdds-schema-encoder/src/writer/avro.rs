// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Avro binary encoding.
//!
//! Integers use zig-zag varints, floats are little-endian IEEE 754, bytes and
//! strings carry a varint length prefix. Arrays and maps are written as one
//! block followed by the zero terminator. Null writes nothing.

use super::{ByteSink, ValueWriter, WireFormat, WriterConfig};
use crate::buffer::OwnedBuffer;
use crate::error::WriteError;
use crate::value::FieldValue;

/// [`ValueWriter`] producing Avro binary data.
#[derive(Debug)]
pub struct AvroWriter {
    sink: ByteSink,
    max_depth: usize,
}

impl AvroWriter {
    fn write_varint(&mut self, mut value: u64) -> Result<(), WriteError> {
        let mut scratch = [0u8; 10];
        let mut len = 0;
        while value >= 0x80 {
            scratch[len] = (value as u8 & 0x7F) | 0x80;
            value >>= 7;
            len += 1;
        }
        scratch[len] = value as u8;
        self.sink.put(&scratch[..=len])
    }

    fn write_long(&mut self, value: i64) -> Result<(), WriteError> {
        let zigzag = ((value << 1) ^ (value >> 63)) as u64;
        self.write_varint(zigzag)
    }

    fn write_len(&mut self, len: usize) -> Result<(), WriteError> {
        let len = i64::try_from(len).map_err(|_| WriteError::LengthOverflow { len })?;
        self.write_long(len)
    }

    fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        self.write_len(bytes.len())?;
        self.sink.put(bytes)
    }

    fn encode(&mut self, value: &FieldValue, depth: usize) -> Result<(), WriteError> {
        match value {
            FieldValue::Null => Ok(()),
            FieldValue::Boolean(v) => self.sink.put_u8(u8::from(*v)),
            FieldValue::Int(v) => self.write_long(i64::from(*v)),
            FieldValue::Long(v) => self.write_long(*v),
            FieldValue::Float(v) => self.sink.put(&v.to_le_bytes()),
            FieldValue::Double(v) => self.sink.put(&v.to_le_bytes()),
            FieldValue::Bytes(v) => self.write_bytes(v),
            FieldValue::String(s) => self.write_bytes(s.as_bytes()),
            FieldValue::Fixed(v) => self.sink.put(v),
            FieldValue::Enum { index, .. } => self.write_long(i64::from(*index)),
            FieldValue::Union { branch, value } => {
                let depth = self.descend(depth)?;
                self.write_long(i64::from(*branch))?;
                self.encode(value, depth)
            }
            FieldValue::Array(items) => {
                let depth = self.descend(depth)?;
                if !items.is_empty() {
                    self.write_len(items.len())?;
                    for item in items {
                        self.encode(item, depth)?;
                    }
                }
                self.write_long(0)
            }
            FieldValue::Map(entries) => {
                let depth = self.descend(depth)?;
                if !entries.is_empty() {
                    self.write_len(entries.len())?;
                    for (key, item) in entries {
                        self.write_bytes(key.as_bytes())?;
                        self.encode(item, depth)?;
                    }
                }
                self.write_long(0)
            }
            FieldValue::Record(fields) => {
                let depth = self.descend(depth)?;
                for (_, item) in fields {
                    self.encode(item, depth)?;
                }
                Ok(())
            }
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

impl ValueWriter for AvroWriter {
    const FORMAT: WireFormat = WireFormat::Avro;

    fn open(config: &WriterConfig) -> Result<Self, WriteError> {
        Ok(Self {
            sink: ByteSink::new(config)?,
            max_depth: config.max_depth,
        })
    }

    fn write_value(&mut self, value: &FieldValue) -> Result<(), WriteError> {
        self.encode(value, 0)
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<(), WriteError> {
        self.sink.put(bytes)
    }

    fn len(&self) -> usize {
        self.sink.len()
    }

    fn finish(self) -> OwnedBuffer {
        self.sink.into_buffer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode_one(value: &FieldValue) -> Vec<u8> {
        let mut w = AvroWriter::open(&WriterConfig::default()).expect("open");
        w.write_value(value).expect("write");
        w.finish().into_vec()
    }

    #[test]
    fn test_zigzag_longs() {
        assert_eq!(encode_one(&FieldValue::Long(0)), vec![0x00]);
        assert_eq!(encode_one(&FieldValue::Long(-1)), vec![0x01]);
        assert_eq!(encode_one(&FieldValue::Long(1)), vec![0x02]);
        assert_eq!(encode_one(&FieldValue::Long(-64)), vec![0x7F]);
        assert_eq!(encode_one(&FieldValue::Long(64)), vec![0x80, 0x01]);
        assert_eq!(encode_one(&FieldValue::Int(7)), vec![0x0E]);
        assert_eq!(encode_one(&FieldValue::Long(i64::MIN)).len(), 10);
    }

    #[test]
    fn test_string_and_bytes() {
        assert_eq!(
            encode_one(&FieldValue::from("ok")),
            vec![0x04, b'o', b'k']
        );
        assert_eq!(encode_one(&FieldValue::bytes(Vec::<u8>::new())), vec![0x00]);
        assert_eq!(encode_one(&FieldValue::Fixed(vec![9, 9])), vec![9, 9]);
    }

    #[test]
    fn test_scalars() {
        assert!(encode_one(&FieldValue::Null).is_empty());
        assert_eq!(encode_one(&FieldValue::Boolean(true)), vec![1]);
        assert_eq!(encode_one(&FieldValue::Float(1.0)), 1.0f32.to_le_bytes());
        assert_eq!(encode_one(&FieldValue::Double(-2.5)), (-2.5f64).to_le_bytes());
        assert_eq!(encode_one(&FieldValue::enum_symbol(2, "BLUE")), vec![0x04]);
    }

    #[test]
    fn test_array_blocks() {
        assert_eq!(encode_one(&FieldValue::Array(vec![])), vec![0x00]);
        assert_eq!(
            encode_one(&FieldValue::from(vec![1i32, 2])),
            vec![0x04, 0x02, 0x04, 0x00]
        );
    }

    #[test]
    fn test_map_and_union() {
        let map = FieldValue::Map(vec![("a".into(), FieldValue::Boolean(false))]);
        assert_eq!(encode_one(&map), vec![0x02, 0x02, b'a', 0x00, 0x00]);

        let union = FieldValue::union(1, 3i64);
        assert_eq!(encode_one(&union), vec![0x02, 0x06]);
    }

    #[test]
    fn test_nested_record_concatenates_fields() {
        let rec = FieldValue::record([
            ("x", FieldValue::Int(1)),
            ("y", FieldValue::from("z")),
        ]);
        assert_eq!(encode_one(&rec), vec![0x02, 0x02, b'z']);
    }

    #[test]
    fn test_depth_limit() {
        let config = WriterConfig {
            max_depth: 2,
            ..WriterConfig::default()
        };
        let mut w = AvroWriter::open(&config).expect("open");
        let ok = FieldValue::Array(vec![FieldValue::Array(vec![])]);
        w.write_value(&ok).expect("two levels fit");

        let too_deep = FieldValue::Array(vec![FieldValue::Array(vec![FieldValue::Array(vec![])])]);
        assert_eq!(
            w.write_value(&too_deep),
            Err(WriteError::NestingTooDeep { limit: 2 })
        );
    }
}
