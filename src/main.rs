/*
 * SPDX-FileCopyrightText: 2024 Matteo Dell'Acqua
 * SPDX-FileCopyrightText: 2025 Sebastiano Vigna
 *
 * SPDX-License-Identifier: Apache-2.0 OR LGPL-2.1-or-later
 */

use anyhow::{Context, Result};
use dsi_progress_logger::prelude::*;
use fork_join_maze::prelude::*;
use webgraph::prelude::BvGraph;

fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()?;
    let mut args = std::env::args().skip(1);
    let basename = args.next().context("No graph basename provided")?;
    let start: usize = args
        .next()
        .context("No start node provided")?
        .parse()
        .context("Expected an integer start node")?;
    let goals = args
        .map(|arg| arg.parse::<usize>())
        .collect::<Result<Vec<_>, _>>()
        .context("Expected integer goal nodes")?;
    let fork_threshold = std::env::var("FORK_THRESHOLD")
        .ok()
        .map(|value| value.parse::<usize>())
        .transpose()
        .context("Expected an integer fork threshold")?
        .unwrap_or(DEFAULT_FORK_THRESHOLD);

    let graph = BvGraph::with_basename(&basename).load()?;
    let maze = GraphMaze::new(&graph, goals);
    let mut main_pl = progress_logger![display_memory = true];
    let threads = Threads::Default.build()?;

    match ForkJoinSolver::new(&maze)
        .fork_threshold(fork_threshold)
        .solve(start, &threads, &mut main_pl)?
    {
        Some(path) => {
            main_pl.info(format_args!("Found a path with {} nodes", path.len()));
            println!(
                "{}",
                path.iter()
                    .map(|node| node.to_string())
                    .collect::<Vec<_>>()
                    .join(" ")
            );
        }
        None => main_pl.info(format_args!("No goal is reachable from node {}", start)),
    }

    Ok(())
}
