/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Fork/join parallel depth-first search of a goal in a maze.
//!
//! The search is carried out by a tree of tasks sharing a single
//! [`SearchState`]: a task walks the maze depth-first on its own, and forks
//! a child task for each unclaimed neighbor of a node that has too many of
//! them. Every node is [claimed](SearchState::claim) by exactly one task,
//! which records its predecessor; paths are rebuilt from predecessors and
//! spliced together while joining.

mod error;
pub use error::*;

mod state;
pub use state::*;

mod solver;
pub use solver::*;

mod task;

/// The default number of unclaimed neighbors a node must exceed to become a
/// fork point.
pub const DEFAULT_FORK_THRESHOLD: usize = 2;

/// The outcome of a search task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TaskOutcome {
    /// The task found a goal; the path goes from the origin of the task to
    /// the goal, both included.
    Succeeded(Vec<usize>),
    /// The task explored everything it could without finding a goal.
    Exhausted,
    /// The task stopped because another task found a goal.
    Preempted,
}

impl TaskOutcome {
    /// Returns the path found, if any.
    pub(crate) fn into_path(self) -> Option<Vec<usize>> {
        match self {
            Self::Succeeded(path) => Some(path),
            Self::Exhausted | Self::Preempted => None,
        }
    }
}
