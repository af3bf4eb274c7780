//! Per-field lock state
//!
//! Plant-constant values (tax number, cement type, admixtures) are locked
//! so that loading the next waybill cannot overwrite them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::record::Field;

/// Set of frozen fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldLocks {
    locked: BTreeSet<Field>,
}

impl FieldLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self, field: Field) -> bool {
        self.locked.contains(&field)
    }

    pub fn lock(&mut self, field: Field) {
        self.locked.insert(field);
    }

    pub fn unlock(&mut self, field: Field) {
        self.locked.remove(&field);
    }

    /// Flip the lock state, returning the new state
    pub fn toggle(&mut self, field: Field) -> bool {
        if self.locked.remove(&field) {
            false
        } else {
            self.locked.insert(field);
            true
        }
    }

    /// Locked fields in wire order
    pub fn iter(&self) -> impl Iterator<Item = Field> + '_ {
        self.locked.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.locked.is_empty()
    }

    pub fn len(&self) -> usize {
        self.locked.len()
    }
}
