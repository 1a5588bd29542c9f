//! Insertion-ordered, copy-on-write id tables.
//!
//! Token tables, the component registry and the artboard list all share this
//! container. Order is registration order and is part of the contract: the
//! "first entry" fallback for unset font fields depends on it.

use crate::error::{ModelError, ModelResult};
use indexmap::IndexMap;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::sync::Arc;

/// An entry that can be stored in an [`OrderedTable`]
pub trait Keyed {
    fn key(&self) -> &str;
}

/// Which table a lookup ran against (used in error messages)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Color,
    FontSize,
    FontFamily,
    FontWeight,
    Breakpoint,
    Component,
    Artboard,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableKind::Color => "color",
            TableKind::FontSize => "font size",
            TableKind::FontFamily => "font family",
            TableKind::FontWeight => "font weight",
            TableKind::Breakpoint => "breakpoint",
            TableKind::Component => "component",
            TableKind::Artboard => "artboard",
        };
        f.write_str(name)
    }
}

/// Immutable ordered map from id to entry.
///
/// Cloning is cheap (the entries are shared). Edits return a new table and
/// leave every existing snapshot untouched.
pub struct OrderedTable<T> {
    entries: Arc<IndexMap<String, T>>,
}

impl<T> Clone for OrderedTable<T> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for OrderedTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.entries.values()).finish()
    }
}

impl<T: PartialEq> PartialEq for OrderedTable<T> {
    fn eq(&self, other: &Self) -> bool {
        // IndexMap equality ignores order; tables compare in order
        Arc::ptr_eq(&self.entries, &other.entries) || self.entries.iter().eq(other.entries.iter())
    }
}

impl<T> Default for OrderedTable<T> {
    fn default() -> Self {
        Self {
            entries: Arc::new(IndexMap::new()),
        }
    }
}

impl<T> OrderedTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.entries.get(id)
    }

    /// Look up `id`, failing with `UnresolvedReference` when it is absent
    pub fn resolve(&self, kind: TableKind, id: &str) -> ModelResult<&T> {
        self.get(id).ok_or_else(|| ModelError::UnresolvedReference {
            kind,
            id: id.to_string(),
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// First registered entry
    pub fn first_entry(&self, kind: TableKind) -> ModelResult<&T> {
        self.entries
            .first()
            .map(|(_, entry)| entry)
            .ok_or(ModelError::EmptyTokenTable { kind })
    }

    pub fn first_key(&self) -> Option<&str> {
        self.entries.first().map(|(key, _)| key.as_str())
    }

    pub fn key_at(&self, position: usize) -> Option<&str> {
        self.entries
            .get_index(position)
            .map(|(key, _)| key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Values<'_, String, T> {
        self.entries.values()
    }

    /// Entries in registration order
    pub fn values(&self) -> indexmap::map::Values<'_, String, T> {
        self.iter()
    }
}

impl<T: Keyed> OrderedTable<T> {
    /// Build a table, rejecting repeated ids
    pub fn from_entries(entries: Vec<T>) -> ModelResult<Self> {
        let mut table = IndexMap::with_capacity(entries.len());
        for entry in entries {
            let id = entry.key().to_string();
            if table.contains_key(&id) {
                return Err(ModelError::DuplicateId { id });
            }
            table.insert(id, entry);
        }
        Ok(Self {
            entries: Arc::new(table),
        })
    }
}

impl<T: Keyed + Clone> OrderedTable<T> {
    /// New table with `entry` set. An existing id keeps its position;
    /// a new id is appended.
    pub fn with(&self, entry: T) -> Self {
        let mut entries = IndexMap::clone(&self.entries);
        entries.insert(entry.key().to_string(), entry);
        Self {
            entries: Arc::new(entries),
        }
    }

    /// New table without `id`; later entries keep their relative order
    pub fn without(&self, id: &str) -> Self {
        let mut entries = IndexMap::clone(&self.entries);
        entries.shift_remove(id);
        Self {
            entries: Arc::new(entries),
        }
    }
}

impl<'a, T> IntoIterator for &'a OrderedTable<T> {
    type Item = &'a T;
    type IntoIter = indexmap::map::Values<'a, String, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

impl<T: Serialize> Serialize for OrderedTable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.entries.values())
    }
}

impl<'de, T: Keyed + Deserialize<'de>> Deserialize<'de> for OrderedTable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = Vec::<T>::deserialize(deserializer)?;
        Self::from_entries(entries).map_err(D::Error::custom)
    }
}
