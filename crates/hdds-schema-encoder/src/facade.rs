// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Free-function entry points.

use crate::buffer::OwnedBuffer;
use crate::config::EncoderConfig;
use crate::dictionary::Dictionary;
use crate::encoder::Encoder;
use crate::error::Result;
use crate::registry::{MessageType, SchemaRegistry};
use crate::schema::Schema;

/// Encode `record` against an explicit schema, default configuration.
pub fn encode_with_schema<T, D, S>(record: &T, dict: &D, schema: &S) -> Result<OwnedBuffer>
where
    T: ?Sized,
    D: Dictionary<T> + ?Sized,
    S: Schema + ?Sized,
{
    Encoder::new(schema).encode(record, dict)
}

/// [`encode_with_schema`] with an explicit configuration.
pub fn encode_with_schema_config<T, D, S>(
    record: &T,
    dict: &D,
    schema: &S,
    config: EncoderConfig,
) -> Result<OwnedBuffer>
where
    T: ?Sized,
    D: Dictionary<T> + ?Sized,
    S: Schema + ?Sized,
{
    Encoder::with_config(schema, config).encode(record, dict)
}

/// Resolve the schema for `message_type` in `registry`, then encode.
///
/// Fails with [`SchemaNotFound`](crate::EncodeError::SchemaNotFound) when the
/// type is not registered.
pub fn encode_registered<T, D, K, S>(
    record: &T,
    dict: &D,
    registry: &SchemaRegistry<K, S>,
    message_type: &K,
) -> Result<OwnedBuffer>
where
    T: ?Sized,
    D: Dictionary<T> + ?Sized,
    K: MessageType,
    S: Schema,
{
    encode_registered_config(record, dict, registry, message_type, EncoderConfig::default())
}

/// [`encode_registered`] with an explicit configuration.
pub fn encode_registered_config<T, D, K, S>(
    record: &T,
    dict: &D,
    registry: &SchemaRegistry<K, S>,
    message_type: &K,
    config: EncoderConfig,
) -> Result<OwnedBuffer>
where
    T: ?Sized,
    D: Dictionary<T> + ?Sized,
    K: MessageType,
    S: Schema,
{
    let schema = registry.find(message_type)?;
    encode_with_schema_config(record, dict, &*schema, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::FieldDictionary;
    use crate::error::EncodeError;
    use crate::schema::{RecordSchema, RecordSchemaBuilder};

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    enum Kind {
        Cs,
        Epc,
    }

    struct CsMsg {
        seq: u32,
    }

    #[test]
    fn test_registered_matches_explicit_schema() {
        let schema = RecordSchemaBuilder::new("Cs").field("seq").build();
        let registry: SchemaRegistry<Kind> = SchemaRegistry::new();
        registry.register(Kind::Cs, schema.clone());

        let dict = FieldDictionary::new().field("seq", |m: &CsMsg| m.seq.into());
        let msg = CsMsg { seq: 300 };

        let direct = encode_with_schema(&msg, &dict, &schema).unwrap();
        let via_registry = encode_registered(&msg, &dict, &registry, &Kind::Cs).unwrap();
        assert_eq!(direct, via_registry);
    }

    #[test]
    fn test_unregistered_type_fails() {
        let registry: SchemaRegistry<Kind> = SchemaRegistry::new();
        registry.register(Kind::Cs, RecordSchema::empty("Cs"));
        let dict = FieldDictionary::<CsMsg>::new();

        let err = encode_registered(&CsMsg { seq: 1 }, &dict, &registry, &Kind::Epc).unwrap_err();
        assert_eq!(
            err,
            EncodeError::SchemaNotFound {
                message_type: "Epc".to_string()
            }
        );
    }

    #[test]
    fn test_dyn_schema_accepted() {
        let schema: Box<dyn Schema> = Box::new(RecordSchemaBuilder::new("Cs").field("seq").build());
        let dict = FieldDictionary::new().field("seq", |m: &CsMsg| m.seq.into());
        let buf = encode_with_schema(&CsMsg { seq: 1 }, &dict, &*schema).unwrap();
        assert_eq!(buf.as_slice(), &[0x02]);
    }
}
