/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

pub mod algo;
pub mod utils;

/// Module exposing all traits in a single level.
pub mod traits {
    use super::*;
    pub use algo::traits::*;
}

/// Use `use fork_join_maze::prelude::*;` to import common utilities, modules
/// and all traits.
pub mod prelude {
    use super::*;
    pub use algo::fork_join::{
        solve, ForkJoinSolver, SearchError, SearchState, DEFAULT_FORK_THRESHOLD,
    };
    pub use algo::maze::GraphMaze;
    pub use traits::*;
    pub use utils::Threads;
}
