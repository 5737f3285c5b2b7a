// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Field-accessor dictionaries.
//!
//! A dictionary maps a schema field name to a function that pulls that
//! field's value out of a record. One dictionary is written per record type
//! and passed to each encode call; neither the registry nor the encoder keeps
//! it.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::value::FieldValue;

/// Extracts one field from a record. Must not mutate the record.
pub type Accessor<T> = dyn Fn(&T) -> FieldValue + Send + Sync;

/// Field name to accessor lookup for records of type `T`.
pub trait Dictionary<T: ?Sized> {
    /// Accessor for `field`, `None` when the dictionary has no such entry.
    fn accessor(&self, field: &str) -> Option<&Accessor<T>>;
}

impl<T: ?Sized, D: Dictionary<T> + ?Sized> Dictionary<T> for &D {
    fn accessor(&self, field: &str) -> Option<&Accessor<T>> {
        (**self).accessor(field)
    }
}

impl<T: ?Sized, D: Dictionary<T> + ?Sized> Dictionary<T> for Arc<D> {
    fn accessor(&self, field: &str) -> Option<&Accessor<T>> {
        (**self).accessor(field)
    }
}

/// [`HashMap`]-backed [`Dictionary`].
///
/// ```
/// use hdds_schema_encoder::FieldDictionary;
///
/// struct Reading { id: i64, label: String }
///
/// let dict = FieldDictionary::<Reading>::new()
///     .field("id", |r| r.id.into())
///     .field("label", |r| r.label.as_str().into());
/// assert_eq!(dict.len(), 2);
/// ```
pub struct FieldDictionary<T> {
    accessors: HashMap<String, Box<Accessor<T>>>,
}

impl<T> FieldDictionary<T> {
    /// Empty dictionary.
    pub fn new() -> Self {
        Self {
            accessors: HashMap::new(),
        }
    }

    /// Add or replace the accessor for `name` (builder form).
    pub fn field<F>(mut self, name: impl Into<String>, accessor: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        self.insert(name, accessor);
        self
    }

    /// Add or replace the accessor for `name`.
    pub fn insert<F>(&mut self, name: impl Into<String>, accessor: F)
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        self.accessors.insert(name.into(), Box::new(accessor));
    }

    /// Drop the accessor for `name`. Returns `false` when absent.
    pub fn remove(&mut self, name: &str) -> bool {
        self.accessors.remove(name).is_some()
    }

    /// Whether an accessor is registered for `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.accessors.contains_key(name)
    }

    /// Number of accessors.
    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    /// True when no accessor is registered.
    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }

    /// Registered field names, sorted for determinism.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.accessors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<T> Default for FieldDictionary<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for FieldDictionary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDictionary")
            .field("fields", &self.field_names())
            .finish()
    }
}

impl<T> Dictionary<T> for FieldDictionary<T> {
    fn accessor(&self, field: &str) -> Option<&Accessor<T>> {
        self.accessors.get(field).map(|a| &**a)
    }
}
