// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Tagged field values produced by dictionary accessors.

use std::fmt;

/// A type-erased field value.
///
/// Each variant carries enough information for a [`ValueWriter`] to pick its
/// wire representation. The encoder never inspects the tag itself.
///
/// [`ValueWriter`]: crate::writer::ValueWriter
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    // Primitives
    Null,
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    Bytes(Vec<u8>),
    String(String),
    Fixed(Vec<u8>),

    // Composites
    Enum { index: u32, symbol: String },
    Union { branch: u32, value: Box<FieldValue> },
    Array(Vec<FieldValue>),
    Map(Vec<(String, FieldValue)>),
    Record(Vec<(String, FieldValue)>),
}

/// Discriminant of a [`FieldValue`], without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Boolean,
    Int,
    Long,
    Float,
    Double,
    Bytes,
    String,
    Fixed,
    Enum,
    Union,
    Array,
    Map,
    Record,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
            Self::Bytes => "bytes",
            Self::String => "string",
            Self::Fixed => "fixed",
            Self::Enum => "enum",
            Self::Union => "union",
            Self::Array => "array",
            Self::Map => "map",
            Self::Record => "record",
        };
        f.write_str(name)
    }
}

impl FieldValue {
    /// Wrap raw bytes. `Vec<u8>` converts to an array of ints otherwise.
    pub fn bytes(v: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(v.into())
    }

    /// Build a union branch.
    pub fn union(branch: u32, value: impl Into<FieldValue>) -> Self {
        Self::Union {
            branch,
            value: Box::new(value.into()),
        }
    }

    /// Build an enum symbol.
    pub fn enum_symbol(index: u32, symbol: impl Into<String>) -> Self {
        Self::Enum {
            index,
            symbol: symbol.into(),
        }
    }

    /// Build a nested record from `(name, value)` pairs, order preserved.
    pub fn record<I, N>(fields: I) -> Self
    where
        I: IntoIterator<Item = (N, FieldValue)>,
        N: Into<String>,
    {
        Self::Record(fields.into_iter().map(|(n, v)| (n.into(), v)).collect())
    }

    /// Tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Int(_) => ValueKind::Int,
            Self::Long(_) => ValueKind::Long,
            Self::Float(_) => ValueKind::Float,
            Self::Double(_) => ValueKind::Double,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::String(_) => ValueKind::String,
            Self::Fixed(_) => ValueKind::Fixed,
            Self::Enum { .. } => ValueKind::Enum,
            Self::Union { .. } => ValueKind::Union,
            Self::Array(_) => ValueKind::Array,
            Self::Map(_) => ValueKind::Map,
            Self::Record(_) => ValueKind::Record,
        }
    }

    /// True for [`FieldValue::Null`].
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Get as bool.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as i32.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Integer view, widening `Int` to `i64`.
    pub fn as_long(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(i64::from(*v)),
            Self::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Floating view, widening `Float` to `f64`.
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(f64::from(*v)),
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string (enum symbols included).
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            Self::Enum { symbol, .. } => Some(symbol),
            _ => None,
        }
    }

    /// Get as bytes (bytes or fixed).
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(v) | Self::Fixed(v) => Some(v),
            _ => None,
        }
    }

    /// Get as array items.
    pub fn as_array(&self) -> Option<&[FieldValue]> {
        match self {
            Self::Array(v) => Some(v),
            _ => None,
        }
    }

    /// Look up a field of a nested record.
    pub fn get_field(&self, name: &str) -> Option<&FieldValue> {
        match self {
            Self::Record(fields) | Self::Map(fields) => {
                fields.iter().find(|(n, _)| n == name).map(|(_, v)| v)
            }
            _ => None,
        }
    }
}

// Conversion traits
impl From<bool> for FieldValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<i8> for FieldValue {
    fn from(v: i8) -> Self {
        Self::Int(i32::from(v))
    }
}

impl From<i16> for FieldValue {
    fn from(v: i16) -> Self {
        Self::Int(i32::from(v))
    }
}

impl From<i32> for FieldValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<u8> for FieldValue {
    fn from(v: u8) -> Self {
        Self::Int(i32::from(v))
    }
}

impl From<u16> for FieldValue {
    fn from(v: u16) -> Self {
        Self::Int(i32::from(v))
    }
}

impl From<u32> for FieldValue {
    fn from(v: u32) -> Self {
        Self::Long(i64::from(v))
    }
}

impl From<i64> for FieldValue {
    fn from(v: i64) -> Self {
        Self::Long(v)
    }
}

impl From<f32> for FieldValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for FieldValue {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<String> for FieldValue {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for FieldValue {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(v: &String) -> Self {
        Self::String(v.clone())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(v: Vec<T>) -> Self {
        Self::Array(v.into_iter().map(Into::into).collect())
    }
}
