//! Scoped reentrancy guards.
//!
//! Writing a value into a control or applying a snapshot fires the same
//! change notifications that normally record history or write back into the
//! project. A [`SuppressionCounter`] is raised for the duration of such a
//! write via an RAII [`SuppressionGuard`]; handlers check `is_active()` and
//! drop the event.

use std::cell::Cell;
use std::rc::Rc;

/// Depth counter shared between the owner and the guards it hands out
#[derive(Debug, Clone, Default)]
pub struct SuppressionCounter {
    depth: Rc<Cell<usize>>,
}

impl SuppressionCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raise the counter until the returned guard is dropped
    pub fn enter(&self) -> SuppressionGuard {
        self.depth.set(self.depth.get() + 1);
        SuppressionGuard {
            depth: Rc::clone(&self.depth),
        }
    }

    /// True while at least one guard is alive
    pub fn is_active(&self) -> bool {
        self.depth.get() > 0
    }

    pub fn depth(&self) -> usize {
        self.depth.get()
    }
}

/// Lowers the counter on drop
#[derive(Debug)]
#[must_use = "suppression ends as soon as the guard is dropped"]
pub struct SuppressionGuard {
    depth: Rc<Cell<usize>>,
}

impl Drop for SuppressionGuard {
    fn drop(&mut self) {
        self.depth.set(self.depth.get().saturating_sub(1));
    }
}
