// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Linear snapshot undo/redo.

use std::collections::VecDeque;

/// Two LIFO stacks of whole-state snapshots.
///
/// Each undo entry is the state *before* a mutation. Undoing swaps the live
/// state with the top entry and parks the live state on the redo stack; a new
/// [`record`](Self::record) discards the redo stack.
#[derive(Clone, Debug)]
pub(crate) struct History<S> {
    undo: VecDeque<S>,
    redo: Vec<S>,
    limit: Option<usize>,
}

impl<S> History<S> {
    pub(crate) fn new(limit: Option<usize>) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            limit,
        }
    }

    /// Push the state from before a mutation.
    pub(crate) fn record(&mut self, prior: S) {
        self.redo.clear();
        self.undo.push_back(prior);
        if let Some(limit) = self.limit {
            while self.undo.len() > limit {
                self.undo.pop_front();
            }
        }
    }

    /// Returns the state to restore, parking `current` for redo.
    pub(crate) fn undo(&mut self, current: S) -> Result<S, S> {
        match self.undo.pop_back() {
            Some(prior) => {
                self.redo.push(current);
                Ok(prior)
            }
            None => Err(current),
        }
    }

    /// Returns the state to re-apply, parking `current` for undo.
    pub(crate) fn redo(&mut self, current: S) -> Result<S, S> {
        match self.redo.pop() {
            Some(next) => {
                self.undo.push_back(current);
                Ok(next)
            }
            None => Err(current),
        }
    }

    pub(crate) fn undo_depth(&self) -> usize {
        self.undo.len()
    }

    pub(crate) fn redo_depth(&self) -> usize {
        self.redo.len()
    }
}
