// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Module graph and cross-project task ordering.
//!
//! ```text
//! :core ──depends on──> :libs:x
//!                       org.example:fw:6.0.0 ──substitution──> :test:framework
//!
//! for task in [test, integTest]:
//!   :core:test mustRunAfter :libs:x:test
//! ```
//!
//! Ordering only: no edge makes a task *depend* on another, it only keeps
//! similar tasks of upstream projects first when both are scheduled.


use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::config::types::{OrderingConfig, ProjectConfig};

/// A task of a specific project.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct TaskPath {
    pub project: String,
    pub task: String,
}

impl TaskPath {
    #[must_use]
    pub fn new(project: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            task: task.into(),
        }
    }
}

impl fmt::Display for TaskPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.project == ":" {
            write!(f, ":{}", self.task)
        } else {
            write!(f, "{}:{}", self.project, self.task)
        }
    }
}

/// `task` must run after `after` whenever both are scheduled.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct OrderingEdge {
    pub task: TaskPath,
    pub after: TaskPath,
}

impl fmt::Display for OrderingEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mustRunAfter {}", self.task, self.after)
    }
}

/// Declared projects plus the ordering edges computed for them.
#[derive(Debug, Clone, Default)]
pub struct ProjectGraph {
    projects: BTreeMap<String, ProjectConfig>,
    substitutions: BTreeMap<String, String>,
    edges: BTreeSet<OrderingEdge>,
}

impl ProjectGraph {
    /// Builds the graph from `[[projects]]` and `[[substitutions]]`.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            projects: config
                .projects
                .iter()
                .map(|p| (p.path.clone(), p.clone()))
                .collect(),
            substitutions: config
                .substitutions
                .iter()
                .map(|s| (s.coordinate.clone(), s.project.clone()))
                .collect(),
            edges: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn project(&self, path: &str) -> Option<&ProjectConfig> {
        self.projects.get(path)
    }

    pub fn projects(&self) -> impl Iterator<Item = &ProjectConfig> {
        self.projects.values()
    }

    /// Coordinate-to-project substitutions.
    pub fn substitutions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.substitutions
            .iter()
            .map(|(coordinate, project)| (coordinate.as_str(), project.as_str()))
    }

    /// Maps a dependency notation to a declared project.
    ///
    /// Project paths resolve directly; external coordinates go through the
    /// substitution table. Unknown targets resolve to `None`.
    #[must_use]
    pub fn resolve_dependency(&self, dependency: &str) -> Option<&ProjectConfig> {
        let path = if dependency.starts_with(':') {
            dependency
        } else {
            self.substitutions.get(dependency)?.as_str()
        };
        self.projects.get(path)
    }

    /// Records an ordering edge; duplicates collapse.
    pub fn must_run_after(&mut self, task: TaskPath, after: TaskPath) {
        self.edges.insert(OrderingEdge { task, after });
    }

    /// Ordering edges in sorted order.
    #[must_use]
    pub const fn edges(&self) -> &BTreeSet<OrderingEdge> {
        &self.edges
    }
}

/// Makes same-named tasks of dependent projects run after their upstream
/// counterparts.
pub fn order_dependent_tasks(graph: &mut ProjectGraph, ordering: &OrderingConfig) {
    let mut pending = Vec::new();

    for project in graph.projects() {
        if ordering.skip_projects.contains(&project.path) {
            debug!(project = %project.path, "Skipping task ordering");
            continue;
        }

        for dependency in &project.dependencies {
            let Some(upstream) = graph.resolve_dependency(dependency) else {
                debug!(
                    project = %project.path,
                    dependency = %dependency,
                    "Dependency is not a project of this build"
                );
                continue;
            };

            if upstream.path == project.path {
                continue;
            }

            for task in &ordering.tasks {
                if project.tasks.contains(task) && upstream.tasks.contains(task) {
                    pending.push((
                        TaskPath::new(&project.path, task),
                        TaskPath::new(&upstream.path, task),
                    ));
                }
            }
        }
    }

    for (task, after) in pending {
        graph.must_run_after(task, after);
    }
}
