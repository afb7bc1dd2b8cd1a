/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

//! Module containing the maze search algorithms.

pub mod maze;

pub mod fork_join;

/// Traits used to interact with the implemented algorithms.
pub mod traits {
    use super::*;

    pub use maze::Maze;
}
