// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Record schemas: ordered lists of named fields.
//!
//! The encoder only relies on the [`Schema`] trait (field count and field
//! name by index). [`RecordSchema`] is the in-crate implementation; schemas
//! produced by an external schema library can implement the trait directly.

/// Ordered sequence of named fields.
///
/// Field index is the encode order. Implementations must be immutable once
/// shared.
pub trait Schema: Send + Sync {
    /// Schema name, used in diagnostics only.
    fn name(&self) -> &str;

    /// Number of fields.
    fn field_count(&self) -> usize;

    /// Name of the field at `index`, `None` past the end.
    fn field_name(&self, index: usize) -> Option<&str>;

    /// Field names in declaration order.
    fn field_names(&self) -> FieldNames<'_, Self>
    where
        Self: Sized,
    {
        FieldNames {
            schema: self,
            index: 0,
        }
    }
}

/// Iterator over a schema's field names, see [`Schema::field_names`].
pub struct FieldNames<'a, S: Schema + ?Sized> {
    schema: &'a S,
    index: usize,
}

impl<'a, S: Schema + ?Sized> Iterator for FieldNames<'a, S> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let name = self.schema.field_name(self.index)?;
        self.index += 1;
        Some(name)
    }
}

/// One field of a [`RecordSchema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSchema {
    /// Field name, matched against dictionary keys.
    pub name: String,
    /// Free-form documentation.
    pub doc: Option<String>,
}

impl FieldSchema {
    /// Undocumented field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            doc: None,
        }
    }

    /// Attach documentation.
    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }
}

/// Immutable record schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSchema {
    name: String,
    namespace: Option<String>,
    fields: Vec<FieldSchema>,
}

impl RecordSchema {
    /// Schema without namespace.
    pub fn new(name: impl Into<String>, fields: Vec<FieldSchema>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            fields,
        }
    }

    /// Schema without fields. Encodes to header bytes only.
    pub fn empty(name: impl Into<String>) -> Self {
        Self::new(name, Vec::new())
    }

    /// Namespace, if any.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    /// `namespace.name`, or just `name` when no namespace is set.
    pub fn full_name(&self) -> String {
        match &self.namespace {
            Some(ns) if !ns.is_empty() => format!("{}.{}", ns, self.name),
            _ => self.name.clone(),
        }
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    /// Get field by name.
    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get field index by name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }
}

impl Schema for RecordSchema {
    fn name(&self) -> &str {
        &self.name
    }

    fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn field_name(&self, index: usize) -> Option<&str> {
        self.fields.get(index).map(|f| f.name.as_str())
    }
}

/// Fluent builder for [`RecordSchema`].
#[derive(Debug)]
pub struct RecordSchemaBuilder {
    name: String,
    namespace: Option<String>,
    fields: Vec<FieldSchema>,
}

impl RecordSchemaBuilder {
    /// Builder for a schema named `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: None,
            fields: Vec::new(),
        }
    }

    /// Set the namespace.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Append a field. Declaration order is encode order.
    pub fn field(mut self, name: impl Into<String>) -> Self {
        self.fields.push(FieldSchema::new(name));
        self
    }

    /// Append a documented field.
    pub fn field_with_doc(mut self, name: impl Into<String>, doc: impl Into<String>) -> Self {
        self.fields.push(FieldSchema::new(name).with_doc(doc));
        self
    }

    /// Finish the schema.
    pub fn build(self) -> RecordSchema {
        RecordSchema {
            name: self.name,
            namespace: self.namespace,
            fields: self.fields,
        }
    }
}
