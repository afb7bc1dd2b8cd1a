/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{task::SearchTask, SearchError, SearchState, DEFAULT_FORK_THRESHOLD};
use crate::{algo::maze::Maze, utils::Threads};
use dsi_progress_logger::ProgressLog;
use rayon::ThreadPool;

/// A parallel fork/join depth-first search for a goal of a [`Maze`].
///
/// The search starts with a single task exploring the maze depth-first from
/// the start node. Whenever a task meets a node with more than
/// [`fork_threshold`](Self::fork_threshold) unclaimed neighbors, it claims
/// them, runs a child task from each one on the thread pool and waits for
/// all of them. Tasks stop as soon as they notice that some task has found a
/// goal; the flag is checked only before popping a node, so a task walking
/// a long corridor notices it only at the next step, and a task waiting for
/// its children only after they have stopped.
///
/// The returned path is not necessarily a shortest one. If several children
/// of a fork find a goal, the first one in spawn order determines the path.
///
/// Joining children nests them on the stack of the forking worker, so mazes
/// with very long chains of fork points (e.g., with a fork threshold of zero)
/// need a thread pool with large stacks.
///
/// # Examples
///
/// ```
/// use fork_join_maze::prelude::*;
/// use dsi_progress_logger::no_logging;
/// use webgraph::graphs::vec_graph::VecGraph;
///
/// // A corridor 0 - 1 - 2 with a goal at its end
/// let graph = VecGraph::from_arcs([(0, 1), (1, 0), (1, 2), (2, 1)]);
/// let maze = GraphMaze::new(&graph, [2]);
/// let threads = Threads::NumThreads(2).build()?;
///
/// let path = ForkJoinSolver::new(&maze).solve(0, &threads, no_logging![])?;
/// assert_eq!(path, Some(vec![0, 1, 2]));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ForkJoinSolver<'a, M: Maze> {
    maze: &'a M,
    fork_threshold: usize,
}

impl<'a, M: Maze + Sync> ForkJoinSolver<'a, M> {
    /// Creates a solver for `maze` with the
    /// [default fork threshold](DEFAULT_FORK_THRESHOLD).
    pub fn new(maze: &'a M) -> Self {
        Self {
            maze,
            fork_threshold: DEFAULT_FORK_THRESHOLD,
        }
    }

    /// Sets the number of unclaimed neighbors a node must exceed to become a
    /// fork point.
    ///
    /// Zero makes every node with an unclaimed neighbor a fork point, while
    /// [`usize::MAX`] yields a sequential search. The result is correct for
    /// every value.
    pub fn fork_threshold(mut self, fork_threshold: usize) -> Self {
        self.fork_threshold = fork_threshold;
        self
    }

    /// Searches for a path from `start` to a goal.
    ///
    /// Returns `Ok(None)` if no goal is reachable from `start`.
    ///
    /// # Arguments
    /// * `start`: the node to start the search from.
    /// * `thread_pool`: the pool running the search tasks.
    /// * `pl`: a progress logger.
    pub fn solve(
        &self,
        start: usize,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<Option<Vec<usize>>, SearchError> {
        let state = SearchState::new(self.maze.num_nodes());
        self.solve_with_state(&state, start, thread_pool, pl)
    }

    /// Searches for a path from `start` to a goal using a caller-provided
    /// state, which can be inspected after the search.
    ///
    /// The state must be fresh and sized for the maze: a state containing
    /// claimed nodes or a raised goal flag is rejected with
    /// [`SearchError::StateInUse`], and a state of the wrong size with
    /// [`SearchError::StateSizeMismatch`].
    pub fn solve_with_state(
        &self,
        state: &SearchState,
        start: usize,
        thread_pool: &ThreadPool,
        pl: &mut impl ProgressLog,
    ) -> Result<Option<Vec<usize>>, SearchError> {
        let num_nodes = self.maze.num_nodes();
        if start >= num_nodes {
            return Err(SearchError::NodeOutOfBounds {
                node: start,
                num_nodes,
            });
        }
        if state.num_nodes() != num_nodes {
            return Err(SearchError::StateSizeMismatch {
                state_nodes: state.num_nodes(),
                num_nodes,
            });
        }
        if state.num_claimed() != 0 || state.is_goal_found() {
            return Err(SearchError::StateInUse);
        }

        pl.item_name("node");
        pl.expected_updates(Some(num_nodes));
        pl.info(format_args!(
            "Starting from node {} with fork threshold {}",
            start, self.fork_threshold
        ));
        pl.start("Searching for a goal...");

        state.claim(start);
        let outcome = thread_pool.install(|| {
            SearchTask::new(self.maze, state, self.fork_threshold, start).run_guarded()
        });

        pl.update_with_count(state.num_claimed());
        pl.info(format_args!("{} search tasks started", state.num_tasks()));
        pl.done();

        Ok(outcome?.into_path())
    }
}

/// Searches for a path from `start` to a goal of `maze` using the default
/// thread pool and fork threshold.
///
/// See [`ForkJoinSolver`] for the details.
pub fn solve<M: Maze + Sync>(
    maze: &M,
    start: usize,
    pl: &mut impl ProgressLog,
) -> Result<Option<Vec<usize>>, SearchError> {
    let threads = Threads::Default.build()?;
    ForkJoinSolver::new(maze).solve(start, &threads, pl)
}
