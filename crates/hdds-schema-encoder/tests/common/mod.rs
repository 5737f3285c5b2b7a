// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Shared fixtures for integration tests.
//!
//! The crate ships no decoder; [`AvroReader`] reads back just enough of the
//! Avro binary encoding to check what the encoder produced.

#![allow(dead_code)]

use hdds_schema_encoder::{FieldDictionary, FieldValue};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Cursor over Avro binary data.
pub struct AvroReader<'a> {
    buffer: &'a [u8],
    offset: usize,
}

impl<'a> AvroReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self { buffer, offset: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.offset
    }

    fn read_bytes_raw(&mut self, count: usize) -> &'a [u8] {
        assert!(
            self.offset + count <= self.buffer.len(),
            "read past end: need {} at offset {}",
            count,
            self.offset
        );
        let slice = &self.buffer[self.offset..self.offset + count];
        self.offset += count;
        slice
    }

    pub fn read_long(&mut self) -> i64 {
        let mut value: u64 = 0;
        let mut shift = 0;
        loop {
            let byte = self.read_bytes_raw(1)[0];
            value |= u64::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                break;
            }
            shift += 7;
        }
        ((value >> 1) as i64) ^ -((value & 1) as i64)
    }

    pub fn read_bool(&mut self) -> bool {
        self.read_bytes_raw(1)[0] != 0
    }

    pub fn read_double(&mut self) -> f64 {
        let bytes = self.read_bytes_raw(8);
        let mut raw = [0u8; 8];
        raw.copy_from_slice(bytes);
        f64::from_le_bytes(raw)
    }

    pub fn read_bytes(&mut self) -> Vec<u8> {
        let len = self.read_long() as usize;
        self.read_bytes_raw(len).to_vec()
    }

    pub fn read_string(&mut self) -> String {
        String::from_utf8(self.read_bytes()).expect("utf-8 string")
    }

    /// Array of longs written as a single block.
    pub fn read_long_array(&mut self) -> Vec<i64> {
        let mut items = Vec::new();
        loop {
            let count = self.read_long();
            if count == 0 {
                break;
            }
            for _ in 0..count {
                items.push(self.read_long());
            }
        }
        items
    }
}

/// Record used across tests: one field per common value kind.
#[derive(Debug, Clone)]
pub struct Telemetry {
    pub id: i64,
    pub name: String,
    pub active: bool,
    pub reading: f64,
    pub samples: Vec<i64>,
    pub note: Option<String>,
}

impl Telemetry {
    pub fn sample(id: i64) -> Self {
        Self {
            id,
            name: format!("sensor-{}", id),
            active: id % 2 == 0,
            reading: id as f64 * 0.5,
            samples: (0..id % 5).collect(),
            note: None,
        }
    }
}

pub const TELEMETRY_FIELDS: [&str; 5] = ["id", "name", "active", "reading", "samples"];

/// Dictionary for [`Telemetry`], entries inserted in `order`.
pub fn telemetry_dict(order: &[&str]) -> FieldDictionary<Telemetry> {
    let mut dict = FieldDictionary::new();
    for field in order {
        match *field {
            "id" => dict.insert("id", |t: &Telemetry| t.id.into()),
            "name" => dict.insert("name", |t: &Telemetry| t.name.as_str().into()),
            "active" => dict.insert("active", |t: &Telemetry| t.active.into()),
            "reading" => dict.insert("reading", |t: &Telemetry| t.reading.into()),
            "samples" => dict.insert("samples", |t: &Telemetry| t.samples.clone().into()),
            "note" => dict.insert("note", |t: &Telemetry| {
                FieldValue::union(u32::from(t.note.is_some()), t.note.clone())
            }),
            other => panic!("unknown telemetry field {}", other),
        }
    }
    dict
}

/// Read one Telemetry field back from `reader`.
pub fn read_telemetry_field(reader: &mut AvroReader<'_>, field: &str) -> FieldValue {
    match field {
        "id" => FieldValue::Long(reader.read_long()),
        "name" => FieldValue::String(reader.read_string()),
        "active" => FieldValue::Boolean(reader.read_bool()),
        "reading" => FieldValue::Double(reader.read_double()),
        "samples" => reader.read_long_array().into(),
        other => panic!("unknown telemetry field {}", other),
    }
}
