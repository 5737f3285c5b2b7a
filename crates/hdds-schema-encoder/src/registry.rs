// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::error::{EncodeError, Result};
use crate::schema::RecordSchema;

// ---------------------------------------------------------------------------
// MessageType
// ---------------------------------------------------------------------------

/// Key identifying a message kind (typically a fieldless enum).
///
/// Blanket-implemented for every type meeting the bounds.
pub trait MessageType: Eq + Hash + Clone + fmt::Debug + Send + Sync {}

impl<K: Eq + Hash + Clone + fmt::Debug + Send + Sync> MessageType for K {}

// ---------------------------------------------------------------------------
// SchemaRegistry
// ---------------------------------------------------------------------------

/// Message type to schema mapping, safe to share across threads.
///
/// Lookups take a read lock and run in parallel; `register` / `unregister`
/// take the write lock. Schemas are stored behind [`Arc`], so a schema
/// returned by [`find`](Self::find) stays valid after it is replaced or
/// removed.
pub struct SchemaRegistry<K: MessageType, S = RecordSchema> {
    schemas: RwLock<HashMap<K, Arc<S>>>,
}

impl<K: MessageType, S> SchemaRegistry<K, S> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            schemas: RwLock::new(HashMap::new()),
        }
    }

    /// Build a registry from an existing type-to-schema map.
    pub fn from_map(map: HashMap<K, S>) -> Self {
        map.into_iter().collect()
    }

    /// Associate `schema` with `message_type`, replacing any previous entry.
    ///
    /// Returns the replaced schema, if any.
    pub fn register(&self, message_type: K, schema: impl Into<Arc<S>>) -> Option<Arc<S>> {
        let previous = self.schemas.write().insert(message_type.clone(), schema.into());
        if previous.is_some() {
            log::debug!("[SchemaRegistry] replaced schema for {:?}", message_type);
        } else {
            log::debug!("[SchemaRegistry] registered schema for {:?}", message_type);
        }
        previous
    }

    /// Schema registered for `message_type`.
    ///
    /// Fails with [`EncodeError::SchemaNotFound`] when nothing is registered.
    pub fn find(&self, message_type: &K) -> Result<Arc<S>> {
        self.get(message_type).ok_or_else(|| {
            log::trace!("[SchemaRegistry] no schema for {:?}", message_type);
            EncodeError::schema_not_found(message_type)
        })
    }

    /// Schema registered for `message_type`, or `None`.
    pub fn get(&self, message_type: &K) -> Option<Arc<S>> {
        self.schemas.read().get(message_type).cloned()
    }

    /// Remove the schema for `message_type`. No-op when absent.
    pub fn unregister(&self, message_type: &K) -> Option<Arc<S>> {
        let removed = self.schemas.write().remove(message_type);
        if removed.is_some() {
            log::debug!("[SchemaRegistry] unregistered schema for {:?}", message_type);
        }
        removed
    }

    /// Whether a schema is registered for `message_type`.
    pub fn contains(&self, message_type: &K) -> bool {
        self.schemas.read().contains_key(message_type)
    }

    /// Number of registered message types.
    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }

    /// True when no message type is registered.
    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    /// Remove every registration.
    pub fn clear(&self) {
        self.schemas.write().clear();
    }
}

impl<K: MessageType, S> Default for SchemaRegistry<K, S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Independent snapshot: later changes to either registry do not affect the
/// other. Schemas themselves are shared.
impl<K: MessageType, S> Clone for SchemaRegistry<K, S> {
    fn clone(&self) -> Self {
        Self {
            schemas: RwLock::new(self.schemas.read().clone()),
        }
    }
}

impl<K: MessageType, S> FromIterator<(K, S)> for SchemaRegistry<K, S> {
    fn from_iter<I: IntoIterator<Item = (K, S)>>(iter: I) -> Self {
        let schemas = iter
            .into_iter()
            .map(|(k, s)| (k, Arc::new(s)))
            .collect::<HashMap<_, _>>();
        Self {
            schemas: RwLock::new(schemas),
        }
    }
}

impl<K: MessageType, S> fmt::Debug for SchemaRegistry<K, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.schemas.read();
        f.debug_struct("SchemaRegistry")
            .field("message_types", &guard.keys().collect::<Vec<_>>())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
