//! Per-pass side-table for intrinsic widths.
//!
//! The row/column decision probes every child's max intrinsic width, and row
//! layout needs the same values again to give each child a tight width.
//! Probing can be expensive (it may walk a whole subtree), so the widths
//! measured during the decision are stored here and reused.
//!
//! # Design
//!
//! A table is created at the start of one layout pass and dropped at the end
//! of it, so there is no invalidation: a new pass always starts empty.
//! Entries are keyed by [`ChildId`], never by position, so reordering the
//! child list between passes cannot hand a child someone else's width.
//!
//! # Usage
//!
//! ```ignore
//! let mut widths = IntrinsicWidthTable::with_capacity(children.len());
//! for child in &children {
//!     let width = child.render.max_intrinsic_width(f32::INFINITY);
//!     widths.store(child.id, width);
//! }
//! // ... later in the same pass:
//! let width = widths.lookup(child.id);
//! ```

use crate::ChildId;
use hashbrown::HashMap;

/// Intrinsic widths measured during one layout pass.
#[derive(Debug, Default)]
pub struct IntrinsicWidthTable {
    widths: HashMap<ChildId, f32>,
    total: f32,
    lookups: usize,
    hits: usize,
}

impl IntrinsicWidthTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            widths: HashMap::with_capacity(capacity),
            ..Self::default()
        }
    }

    /// Record a measured width and add it to the running total.
    ///
    /// Storing the same child twice replaces the old value and corrects the
    /// total.
    pub fn store(&mut self, id: ChildId, width: f32) {
        if let Some(previous) = self.widths.insert(id, width) {
            self.total -= previous;
        }
        self.total += width;
    }

    /// Look up a measured width.
    pub fn lookup(&mut self, id: ChildId) -> Option<f32> {
        self.lookups += 1;
        let found = self.widths.get(&id).copied();
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    /// Sum of all stored widths.
    pub fn total(&self) -> f32 {
        self.total
    }

    /// Number of children measured so far.
    pub fn len(&self) -> usize {
        self.widths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.widths.is_empty()
    }

    /// Lookup statistics for tracing: (lookups, hits).
    pub fn stats(&self) -> (usize, usize) {
        (self.lookups, self.hits)
    }
}
