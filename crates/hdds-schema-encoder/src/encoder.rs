// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Generic schema-driven encoder.
//!
//! Encoding runs in three stages against a fresh writer:
//!
//! 1. **Header**: bytes from [`FrameHeader`] (nothing by default)
//! 2. **Fields**: one value per schema field, in schema index order
//! 3. **Finish**: flush and hand the buffer to the caller
//!
//! Accessors for every schema field are resolved before any byte is written,
//! so a schema/dictionary mismatch never yields a partial buffer.

use crate::buffer::OwnedBuffer;
use crate::config::{EncoderConfig, FrameHeader};
use crate::dictionary::{Accessor, Dictionary};
use crate::error::{EncodeError, Result};
use crate::schema::Schema;
use crate::writer::{AvroWriter, CdrWriter, ValueWriter, WireFormat};

/// Encoder bound to one schema.
///
/// Borrows the schema and carries no state between calls; a single encoder
/// can be shared across threads and used for any number of records.
#[derive(Debug)]
pub struct Encoder<'s, S: Schema + ?Sized> {
    schema: &'s S,
    config: EncoderConfig,
}

impl<S: Schema + ?Sized> Clone for Encoder<'_, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: Schema + ?Sized> Copy for Encoder<'_, S> {}

impl<'s, S: Schema + ?Sized> Encoder<'s, S> {
    /// Encoder with the default configuration.
    pub fn new(schema: &'s S) -> Self {
        Self::with_config(schema, EncoderConfig::default())
    }

    /// Encoder with an explicit configuration.
    pub fn with_config(schema: &'s S, config: EncoderConfig) -> Self {
        Self { schema, config }
    }

    /// Schema this encoder walks.
    pub fn schema(&self) -> &'s S {
        self.schema
    }

    /// Active configuration.
    pub fn config(&self) -> &EncoderConfig {
        &self.config
    }

    /// Encode `record` with the configured wire format.
    pub fn encode<T, D>(&self, record: &T, dict: &D) -> Result<OwnedBuffer>
    where
        T: ?Sized,
        D: Dictionary<T> + ?Sized,
    {
        match self.config.wire_format {
            WireFormat::Avro => self.encode_with::<AvroWriter, T, D>(record, dict),
            WireFormat::CdrLe => self.encode_with::<CdrWriter, T, D>(record, dict),
        }
    }

    /// Encode `record` through a caller-chosen writer, ignoring
    /// `config.wire_format`.
    pub fn encode_with<W, T, D>(&self, record: &T, dict: &D) -> Result<OwnedBuffer>
    where
        W: ValueWriter,
        T: ?Sized,
        D: Dictionary<T> + ?Sized,
    {
        let accessors = self.resolve_accessors(dict)?;

        let mut writer = W::open(&self.config.writer_config()).map_err(|e| {
            log::debug!(
                "[Encoder::encode] {} could not open {} writer: {}",
                self.schema.name(),
                W::FORMAT,
                e
            );
            EncodeError::from(e)
        })?;
        match self.run_stages(&mut writer, record, &accessors) {
            Ok(()) => {
                let buffer = writer.finish();
                log::trace!(
                    "[Encoder::encode] {} ({}) -> {} fields, {} bytes",
                    self.schema.name(),
                    W::FORMAT,
                    accessors.len(),
                    buffer.len()
                );
                Ok(buffer)
            }
            Err(e) => {
                log::debug!(
                    "[Encoder::encode] {} aborted after {} bytes: {}",
                    self.schema.name(),
                    writer.len(),
                    e
                );
                Err(e)
            }
        }
    }

    /// Look up the accessor of every schema field, in schema order.
    fn resolve_accessors<'d, T, D>(&self, dict: &'d D) -> Result<Vec<&'d Accessor<T>>>
    where
        T: ?Sized,
        D: Dictionary<T> + ?Sized,
    {
        let count = self.schema.field_count();
        let mut accessors = Vec::new();
        for index in 0..count {
            let name = self.schema.field_name(index).ok_or_else(|| {
                log::debug!(
                    "[Encoder::resolve_accessors] {} has no field at index {} of {}",
                    self.schema.name(),
                    index,
                    count
                );
                EncodeError::FieldNameMissing {
                    schema: self.schema.name().to_string(),
                    index,
                    field_count: count,
                }
            })?;
            let accessor = dict.accessor(name).ok_or_else(|| {
                log::debug!(
                    "[Encoder::resolve_accessors] {} field '{}' has no accessor",
                    self.schema.name(),
                    name
                );
                EncodeError::field_accessor_missing(name)
            })?;
            accessors.push(accessor);
        }
        Ok(accessors)
    }

    fn run_stages<W, T>(&self, writer: &mut W, record: &T, accessors: &[&Accessor<T>]) -> Result<()>
    where
        W: ValueWriter,
        T: ?Sized,
    {
        self.encode_header(writer, self.config.header)?;
        self.encode_fields(writer, record, accessors)?;
        writer.flush()?;
        Ok(())
    }

    /// Header stage.
    pub(crate) fn encode_header<W: ValueWriter>(
        &self,
        writer: &mut W,
        header: FrameHeader,
    ) -> Result<()> {
        let bytes = header.to_bytes();
        if !bytes.is_empty() {
            writer.write_raw(&bytes)?;
        }
        Ok(())
    }

    /// Field stage: one value per accessor, in schema order.
    fn encode_fields<W, T>(
        &self,
        writer: &mut W,
        record: &T,
        accessors: &[&Accessor<T>],
    ) -> Result<()>
    where
        W: ValueWriter,
        T: ?Sized,
    {
        for accessor in accessors {
            let value = accessor(record);
            writer.write_value(&value)?;
        }
        Ok(())
    }
}
