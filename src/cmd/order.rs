// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `task-order` command.
//!
//! ```text
//! Config --> ProjectGraph --> HookRegistry::with_builtins().fire_all()
//!        --> edges (text | json)
//! ```

use tracing::info;

use crate::cli::OutputArgs;
use crate::config::Config;
use crate::error::Result;
use crate::graph::ProjectGraph;
use crate::hooks::HookRegistry;

/// Builds the project graph and runs every registered hook over it.
///
/// # Errors
///
/// Returns the first hook failure.
pub fn evaluate_graph(config: &Config) -> Result<ProjectGraph> {
    let mut graph = ProjectGraph::from_config(config);
    HookRegistry::with_builtins(config.ordering.clone()).fire_all(&mut graph)?;
    info!(edges = graph.edges().len(), "Evaluated project graph");
    Ok(graph)
}

pub(crate) fn edges_text(graph: &ProjectGraph) -> String {
    if graph.edges().is_empty() {
        return "No ordering constraints".to_string();
    }
    graph
        .edges()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prints the `mustRunAfter` constraints between projects.
///
/// # Errors
///
/// Returns an error if a hook fails or JSON serialization fails.
pub fn run_task_order_command(args: &OutputArgs, config: &Config) -> Result<()> {
    let graph = evaluate_graph(config)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(graph.edges())?);
    } else {
        println!("{}", edges_text(&graph));
    }
    Ok(())
}
