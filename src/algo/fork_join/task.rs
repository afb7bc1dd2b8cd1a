/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use super::{SearchError, SearchState, TaskOutcome};
use crate::algo::maze::Maze;
use rayon::prelude::*;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// A unit of sequential depth-first exploration.
///
/// The task owns its frontier; everything else is borrowed from the search
/// it belongs to. When it meets a node with more than `fork_threshold`
/// unclaimed neighbors it runs a child task for each of them on the current
/// rayon pool and joins them before going on.
pub(crate) struct SearchTask<'a, M: Maze> {
    maze: &'a M,
    state: &'a SearchState,
    fork_threshold: usize,
    /// The node the task was started from. It has been claimed by the
    /// creator of the task.
    origin: usize,
}

impl<'a, M: Maze + Sync> SearchTask<'a, M> {
    pub(crate) fn new(
        maze: &'a M,
        state: &'a SearchState,
        fork_threshold: usize,
        origin: usize,
    ) -> Self {
        Self {
            maze,
            state,
            fork_threshold,
            origin,
        }
    }

    /// Runs the task, turning a panic into a [`SearchError::TaskPanicked`].
    pub(crate) fn run_guarded(self) -> Result<TaskOutcome, SearchError> {
        let root = self.origin;
        catch_unwind(AssertUnwindSafe(|| self.run())).unwrap_or_else(|payload| {
            let message = if let Some(msg) = payload.downcast_ref::<&str>() {
                msg.to_string()
            } else if let Some(msg) = payload.downcast_ref::<String>() {
                msg.clone()
            } else {
                "unknown panic payload".to_string()
            };
            Err(SearchError::TaskPanicked { root, message })
        })
    }

    fn run(self) -> Result<TaskOutcome, SearchError> {
        self.state.task_started();
        let mut frontier = vec![self.origin];

        loop {
            // Cancellation point: a sibling may have found a goal
            if self.state.is_goal_found() {
                return Ok(TaskOutcome::Preempted);
            }
            let Some(curr) = frontier.pop() else {
                return Ok(TaskOutcome::Exhausted);
            };

            self.maze.mark(self.origin, curr);

            if self.maze.has_goal(curr) {
                self.state.announce_goal();
                return self
                    .state
                    .path_from_to(self.origin, curr)
                    .map(TaskOutcome::Succeeded);
            }

            let unclaimed = self
                .maze
                .neighbors(curr)
                .into_iter()
                .filter(|&succ| !self.state.is_claimed(succ))
                .collect::<Vec<_>>();

            if unclaimed.len() > self.fork_threshold {
                if let Some(path) = self.fork(curr, unclaimed)? {
                    return Ok(TaskOutcome::Succeeded(path));
                }
            } else {
                for succ in unclaimed {
                    if self.state.claim(succ) {
                        self.state.record_predecessor(succ, curr);
                        frontier.push(succ);
                    }
                }
            }
        }
    }

    /// Runs a child task for every neighbor of `curr` this task manages to
    /// claim, and joins them.
    ///
    /// Children are joined in spawn order, and the first one returning a path
    /// wins; the returned path goes from the origin of this task to a goal.
    fn fork(&self, curr: usize, unclaimed: Vec<usize>) -> Result<Option<Vec<usize>>, SearchError> {
        let children = unclaimed
            .into_iter()
            .filter(|&succ| self.state.claim(succ))
            .inspect(|&succ| {
                let recorded = self.state.record_predecessor(succ, curr);
                debug_assert!(recorded, "Node {} had a predecessor before being claimed", succ);
            })
            .collect::<Vec<_>>();

        if children.is_empty() {
            return Ok(None);
        }

        // An indexed collect keeps outcomes in spawn order
        let outcomes = children
            .par_iter()
            .map(|&child| {
                SearchTask::new(self.maze, self.state, self.fork_threshold, child).run_guarded()
            })
            .collect::<Vec<_>>();

        let mut found = None;
        for outcome in outcomes {
            if let TaskOutcome::Succeeded(child_path) = outcome? {
                found.get_or_insert(child_path);
            }
        }

        match found {
            None => Ok(None),
            Some(child_path) => {
                let mut path = self.state.path_from_to(self.origin, curr)?;
                path.extend(child_path);
                Ok(Some(path))
            }
        }
    }
}
