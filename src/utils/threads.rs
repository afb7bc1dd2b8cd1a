/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};

/// The size of the worker pool running a search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Threads {
    /// As many threads as rayon chooses (usually one per logical core).
    #[default]
    Default,
    /// A fixed number of threads.
    NumThreads(usize),
}

impl Threads {
    /// Builds a fresh [`ThreadPool`] of the requested size.
    pub fn build(self) -> Result<ThreadPool, ThreadPoolBuildError> {
        match self {
            Self::Default => ThreadPoolBuilder::new().build(),
            Self::NumThreads(num_threads) => {
                ThreadPoolBuilder::new().num_threads(num_threads).build()
            }
        }
    }
}
