/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Mazes, that is, graphs with goal nodes.

use sux::bits::BitVec;
use webgraph::traits::{RandomAccessGraph, SequentialLabeling};

/// A maze to be searched.
///
/// Nodes are identified by integers in `0..num_nodes()`. The neighbors of a
/// node must not change during a search.
pub trait Maze {
    /// Returns the number of nodes of the maze.
    fn num_nodes(&self) -> usize;

    /// Returns the neighbors of `node`.
    fn neighbors(&self, node: usize) -> impl IntoIterator<Item = usize> + '_;

    /// Returns whether `node` is a goal.
    fn has_goal(&self, node: usize) -> bool;

    /// Hook invoked once for every node explored by a search, with the origin
    /// of the task (its "player") that explored it.
    ///
    /// Searches never depend on what this method does; the default
    /// implementation does nothing.
    #[inline(always)]
    fn mark(&self, _task_root: usize, _node: usize) {}
}

/// A [`Maze`] made of a [random-access graph](RandomAccessGraph) and a set of
/// goal nodes.
///
/// # Examples
///
/// ```
/// use fork_join_maze::algo::maze::*;
/// use webgraph::graphs::vec_graph::VecGraph;
///
/// let graph = VecGraph::from_arcs([(0, 1), (1, 2)]);
/// let maze = GraphMaze::new(&graph, [2]);
/// assert!(maze.has_goal(2));
/// assert!(!maze.has_goal(0));
/// ```
pub struct GraphMaze<G: RandomAccessGraph> {
    graph: G,
    goals: BitVec,
}

impl<G: RandomAccessGraph> GraphMaze<G> {
    /// Creates a new maze.
    ///
    /// # Arguments
    /// * `graph`: the graph describing the maze corridors. Undirected mazes
    ///   must contain both arcs of every corridor.
    /// * `goals`: the goal nodes.
    ///
    /// # Panics
    ///
    /// If a goal is not a node of `graph`.
    pub fn new(graph: G, goals: impl IntoIterator<Item = usize>) -> Self {
        let num_nodes = graph.num_nodes();
        let mut bits = BitVec::new(num_nodes);
        for goal in goals {
            assert!(
                goal < num_nodes,
                "Goal {} is not a node of a graph with {} nodes",
                goal,
                num_nodes
            );
            bits.set(goal, true);
        }
        Self { graph, goals: bits }
    }

    /// Returns the underlying graph.
    pub fn graph(&self) -> &G {
        &self.graph
    }

    /// Returns whether `node` is a goal.
    pub fn is_goal(&self, node: usize) -> bool {
        self.goals[node]
    }
}

impl<G: RandomAccessGraph> Maze for GraphMaze<G> {
    #[inline(always)]
    fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    #[inline(always)]
    fn neighbors(&self, node: usize) -> impl IntoIterator<Item = usize> + '_ {
        self.graph.successors(node)
    }

    #[inline(always)]
    fn has_goal(&self, node: usize) -> bool {
        self.is_goal(node)
    }
}
