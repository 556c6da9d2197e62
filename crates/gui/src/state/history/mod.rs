//! Snapshot-based undo/redo history
//!
//! The history stores whole-state snapshots, not diffs. A new entry is only
//! recorded when the fingerprint of the captured state differs from the
//! current one, so repeated notifications without a real change never
//! pollute the undo stack.

mod apply;
pub mod fingerprint;
pub mod snapshot;

use std::collections::VecDeque;

pub use apply::apply_snapshot;
pub use fingerprint::{fingerprint, Fingerprint, FingerprintWriter};
pub use snapshot::{
    capture_lights, restore_lights, LightSnapshot, ProjectSnapshot, SceneSelectionSnapshot,
};

use super::guard::{SuppressionCounter, SuppressionGuard};

/// Default bound on the undo stack
pub const MAX_UNDO_SNAPSHOTS: usize = 64;

/// Undo and redo stacks plus the snapshot describing the live state
#[derive(Debug)]
pub struct SnapshotHistory<T> {
    /// Oldest entry at the front, most recent at the back
    undo_stack: VecDeque<T>,
    /// Most recent at the end
    redo_stack: Vec<T>,
    current: Option<T>,
    current_fingerprint: String,
    capacity: usize,
    applying: SuppressionCounter,
}

impl<T: Fingerprint + Clone> Default for SnapshotHistory<T> {
    fn default() -> Self {
        Self::with_capacity(MAX_UNDO_SNAPSHOTS)
    }
}

impl<T: Fingerprint + Clone> SnapshotHistory<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// History bounded to `capacity` undo entries (at least one)
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            undo_stack: VecDeque::new(),
            redo_stack: Vec::new(),
            current: None,
            current_fingerprint: String::new(),
            capacity: capacity.max(1),
            applying: SuppressionCounter::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Change the bound, evicting the oldest entries if needed
    pub fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity.max(1);
        self.evict_overflow();
    }

    /// Record a freshly captured snapshot.
    ///
    /// The first snapshot only bootstraps the current state. Afterwards a
    /// snapshot equal (by fingerprint) to the current one is dropped;
    /// otherwise the old current goes onto the undo stack and the redo stack
    /// is discarded. Returns true if an undo entry was pushed.
    pub fn record(&mut self, snapshot: T) -> bool {
        let fp = fingerprint(&snapshot);
        let Some(previous) = self.current.take() else {
            self.current = Some(snapshot);
            self.current_fingerprint = fp;
            return false;
        };

        if fp == self.current_fingerprint {
            self.current = Some(previous);
            return false;
        }

        self.push_undo(previous);
        if !self.redo_stack.is_empty() {
            tracing::debug!("History: discarded {} redo entries", self.redo_stack.len());
            self.redo_stack.clear();
        }
        self.current = Some(snapshot);
        self.current_fingerprint = fp;
        tracing::debug!("History: recorded edit ({} undo entries)", self.undo_stack.len());
        true
    }

    /// Pop the most recent undo entry, parking `live` on the redo stack.
    /// Returns the snapshot to apply, or None if there is nothing to undo.
    pub fn take_undo(&mut self, live: T) -> Option<T> {
        let target = self.undo_stack.pop_back()?;
        self.redo_stack.push(live);
        tracing::debug!(
            "History: undo ({} undo / {} redo left)",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Some(target)
    }

    /// Pop the most recent redo entry, parking `live` on the undo stack.
    pub fn take_redo(&mut self, live: T) -> Option<T> {
        let target = self.redo_stack.pop()?;
        self.push_undo(live);
        tracing::debug!(
            "History: redo ({} undo / {} redo left)",
            self.undo_stack.len(),
            self.redo_stack.len()
        );
        Some(target)
    }

    /// Replace the current snapshot without touching the stacks
    pub fn set_current(&mut self, snapshot: T) {
        self.current_fingerprint = fingerprint(&snapshot);
        self.current = Some(snapshot);
    }

    /// Suppress recording while a snapshot is being applied
    pub fn begin_apply(&self) -> SuppressionGuard {
        self.applying.enter()
    }

    pub fn is_applying(&self) -> bool {
        self.applying.is_active()
    }

    /// Forget everything, including the current snapshot
    pub fn reset(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.current = None;
        self.current_fingerprint.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn current(&self) -> Option<&T> {
        self.current.as_ref()
    }

    pub fn current_fingerprint(&self) -> &str {
        &self.current_fingerprint
    }

    /// Undo entries from oldest to most recent
    pub fn undo_entries(&self) -> impl Iterator<Item = &T> {
        self.undo_stack.iter()
    }

    fn push_undo(&mut self, snapshot: T) {
        self.undo_stack.push_back(snapshot);
        self.evict_overflow();
    }

    fn evict_overflow(&mut self) {
        while self.undo_stack.len() > self.capacity {
            self.undo_stack.pop_front();
            tracing::debug!("History: evicted oldest undo entry");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Value(u32);

    impl Fingerprint for Value {
        fn write_fingerprint(&self, w: &mut FingerprintWriter) {
            self.0.write_fingerprint(w);
        }
    }

    fn history_with(values: &[u32]) -> SnapshotHistory<Value> {
        let mut h = SnapshotHistory::new();
        for v in values {
            h.record(Value(*v));
        }
        h
    }

    #[test]
    fn test_first_record_bootstraps() {
        let mut h = SnapshotHistory::new();
        assert!(!h.record(Value(1)));
        assert_eq!(h.current(), Some(&Value(1)));
        assert!(!h.can_undo());
    }

    #[test]
    fn test_same_fingerprint_coalesces() {
        let mut h = history_with(&[1]);
        for _ in 0..10 {
            assert!(!h.record(Value(1)));
        }
        assert_eq!(h.undo_len(), 0);
    }

    #[test]
    fn test_record_pushes_previous_current() {
        let h = history_with(&[1, 2, 3]);
        assert_eq!(h.undo_len(), 2);
        assert_eq!(h.current(), Some(&Value(3)));
        let entries: Vec<_> = h.undo_entries().cloned().collect();
        assert_eq!(entries, vec![Value(1), Value(2)]);
    }

    #[test]
    fn test_undo_redo_moves_between_stacks() {
        let mut h = history_with(&[1, 2]);
        let target = h.take_undo(Value(2)).unwrap();
        assert_eq!(target, Value(1));
        h.set_current(target);
        assert_eq!(h.undo_len(), 0);
        assert_eq!(h.redo_len(), 1);

        let target = h.take_redo(Value(1)).unwrap();
        assert_eq!(target, Value(2));
        assert_eq!(h.undo_len(), 1);
        assert_eq!(h.redo_len(), 0);
    }

    #[test]
    fn test_empty_stacks_are_noops() {
        let mut h = history_with(&[1]);
        assert!(h.take_undo(Value(1)).is_none());
        assert!(h.take_redo(Value(1)).is_none());
        assert_eq!(h.redo_len(), 0);
    }

    #[test]
    fn test_new_edit_after_undo_clears_redo() {
        let mut h = history_with(&[1, 2, 3]);
        let target = h.take_undo(Value(3)).unwrap();
        h.set_current(target);
        assert_eq!(h.redo_len(), 1);

        assert!(h.record(Value(4)));
        assert_eq!(h.redo_len(), 0);
        assert!(!h.can_redo());
    }

    #[test]
    fn test_bounded_keeps_most_recent() {
        let values: Vec<u32> = (0..=100).collect();
        let h = history_with(&values);
        assert_eq!(h.undo_len(), MAX_UNDO_SNAPSHOTS);
        let entries: Vec<u32> = h.undo_entries().map(|v| v.0).collect();
        let expected: Vec<u32> = (37..=100).map(|v| v - 1).collect();
        assert_eq!(entries, expected);
    }

    #[test]
    fn test_set_capacity_evicts() {
        let mut h = history_with(&[1, 2, 3, 4, 5]);
        assert_eq!(h.undo_len(), 4);
        h.set_capacity(2);
        let entries: Vec<u32> = h.undo_entries().map(|v| v.0).collect();
        assert_eq!(entries, vec![3, 4]);
    }

    #[test]
    fn test_apply_guard() {
        let h: SnapshotHistory<Value> = SnapshotHistory::new();
        assert!(!h.is_applying());
        let guard = h.begin_apply();
        assert!(h.is_applying());
        drop(guard);
        assert!(!h.is_applying());
    }

    #[test]
    fn test_reset() {
        let mut h = history_with(&[1, 2]);
        h.reset();
        assert!(h.current().is_none());
        assert!(!h.can_undo());
        assert!(h.current_fingerprint().is_empty());
    }
}
