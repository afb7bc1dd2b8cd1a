/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use thiserror::Error;

/// Faults of a fork/join search.
///
/// Not finding a goal is not a fault: it is reported as `Ok(None)` by the
/// solver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A node outside of `0..num_nodes` was handed to the search.
    #[error("node {node} is out of bounds (the maze has {num_nodes} nodes)")]
    NodeOutOfBounds { node: usize, num_nodes: usize },
    /// The predecessor chain walked back from a node stopped before reaching
    /// the origin of the task reconstructing the path.
    #[error("predecessor chain towards origin {origin} is broken at node {node}")]
    BrokenPredecessorChain { origin: usize, node: usize },
    /// A search task panicked instead of completing.
    #[error("the search task rooted at node {root} panicked: {message}")]
    TaskPanicked { root: usize, message: String },
    /// The search state handed to the solver was already used.
    #[error("the search state already contains claimed nodes or a found goal")]
    StateInUse,
    /// The search state handed to the solver was sized for another maze.
    #[error("the search state has {state_nodes} nodes, but the maze has {num_nodes}")]
    StateSizeMismatch { state_nodes: usize, num_nodes: usize },
    /// The worker pool could not be built.
    #[error("could not build the thread pool: {0}")]
    ThreadPool(String),
}

impl From<rayon::ThreadPoolBuildError> for SearchError {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err.to_string())
    }
}
