//! String interning for task identifiers.
//!
//! The CPM passes index everything by dense integer IDs; strings only
//! appear at the crate boundary.

use rustc_hash::FxHashMap;

/// Interned task ID (u32 for compact storage and fast hashing).
pub type TaskId = u32;

/// Maps task ID strings to dense integers and back.
#[derive(Debug, Clone, Default)]
pub struct TaskIdInterner {
    to_id: FxHashMap<String, TaskId>,
    names: Vec<String>,
}

impl TaskIdInterner {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Intern a string, returning its integer ID. Idempotent per string.
    pub fn intern(&mut self, name: &str) -> TaskId {
        if let Some(&id) = self.to_id.get(name) {
            return id;
        }
        let id = self.names.len() as TaskId;
        self.names.push(name.to_string());
        self.to_id.insert(name.to_string(), id);
        id
    }

    /// Look up the ID for a string, if interned.
    #[inline]
    pub fn get(&self, name: &str) -> Option<TaskId> {
        self.to_id.get(name).copied()
    }

    /// Look up the string for an ID.
    #[inline]
    pub fn resolve(&self, id: TaskId) -> Option<&str> {
        self.names.get(id as usize).map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
