/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::SearchError;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use sux::bits::AtomicBitVec;

/// Marker for nodes without a recorded predecessor.
const NO_PRED: usize = usize::MAX;

/// The state shared by all the tasks of a single search.
///
/// The visited set is an [`AtomicBitVec`], so that [claiming](Self::claim) a
/// node is a single atomic swap. Predecessors are stored in a slice of atomic
/// words, each written at most once with a compare-and-exchange, so that
/// recording predecessors of different nodes never contends.
///
/// A state must not be shared between independent searches: build a new one
/// for every search.
pub struct SearchState {
    visited: AtomicBitVec,
    pred: Box<[AtomicUsize]>,
    goal_found: AtomicBool,
    num_claimed: AtomicUsize,
    num_tasks: AtomicUsize,
}

impl SearchState {
    /// Creates a fresh state for a maze with `num_nodes` nodes.
    pub fn new(num_nodes: usize) -> Self {
        Self {
            visited: AtomicBitVec::new(num_nodes),
            pred: (0..num_nodes).map(|_| AtomicUsize::new(NO_PRED)).collect(),
            goal_found: AtomicBool::new(false),
            num_claimed: AtomicUsize::new(0),
            num_tasks: AtomicUsize::new(0),
        }
    }

    /// Returns the number of nodes this state was sized for.
    #[inline(always)]
    pub fn num_nodes(&self) -> usize {
        self.pred.len()
    }

    /// Claims `node` for the calling task.
    ///
    /// Returns true if and only if this call marked the node as visited: for
    /// every node, exactly one claim succeeds over the whole search.
    #[inline(always)]
    pub fn claim(&self, node: usize) -> bool {
        let claimed = !self.visited.swap(node, true, Ordering::Relaxed);
        if claimed {
            self.num_claimed.fetch_add(1, Ordering::Relaxed);
        }
        claimed
    }

    /// Returns whether `node` has already been claimed by some task.
    ///
    /// The answer can be stale as soon as it is returned; use it only as a
    /// hint, and [claim](Self::claim) to take ownership.
    #[inline(always)]
    pub fn is_claimed(&self, node: usize) -> bool {
        self.visited.get(node, Ordering::Relaxed)
    }

    /// Records `from` as the predecessor of `node`, unless a predecessor was
    /// already recorded.
    ///
    /// Returns true if the predecessor was recorded by this call.
    #[inline(always)]
    pub fn record_predecessor(&self, node: usize, from: usize) -> bool {
        self.pred[node]
            .compare_exchange(NO_PRED, from, Ordering::Release, Ordering::Relaxed)
            .is_ok()
    }

    /// Returns the predecessor recorded for `node`, if any.
    #[inline(always)]
    pub fn predecessor(&self, node: usize) -> Option<usize> {
        match self.pred[node].load(Ordering::Acquire) {
            NO_PRED => None,
            pred => Some(pred),
        }
    }

    /// Raises the goal-found flag.
    ///
    /// Returns true if this call was the one raising it. Tasks reaching a
    /// goal report their path regardless of the returned value.
    #[inline(always)]
    pub fn announce_goal(&self) -> bool {
        !self.goal_found.swap(true, Ordering::Release)
    }

    /// Returns whether some task has found a goal.
    #[inline(always)]
    pub fn is_goal_found(&self) -> bool {
        self.goal_found.load(Ordering::Acquire)
    }

    /// Returns the number of nodes claimed so far.
    pub fn num_claimed(&self) -> usize {
        self.num_claimed.load(Ordering::Relaxed)
    }

    /// Returns the number of search tasks started so far, root included.
    pub fn num_tasks(&self) -> usize {
        self.num_tasks.load(Ordering::Relaxed)
    }

    pub(crate) fn task_started(&self) {
        self.num_tasks.fetch_add(1, Ordering::Relaxed);
    }

    /// Reconstructs the path from `origin` to `goal`, both included, by
    /// walking the predecessor chain backwards from `goal`.
    ///
    /// Fails with [`SearchError::BrokenPredecessorChain`] if the chain ends
    /// (or runs longer than the number of nodes) before reaching `origin`.
    pub fn path_from_to(&self, origin: usize, goal: usize) -> Result<Vec<usize>, SearchError> {
        let mut path = vec![goal];
        let mut node = goal;
        while node != origin {
            node = match self.predecessor(node) {
                Some(pred) if path.len() < self.num_nodes() => pred,
                _ => return Err(SearchError::BrokenPredecessorChain { origin, node }),
            };
            path.push(node);
        }
        path.reverse();
        Ok(path)
    }
}
