// bwc-rs: Backward-Compatibility Version Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Named extension points with eagerly-run callbacks.
//!
//! ```text
//! HookRegistry::with_builtins(ordering)
//!   ConfigLoaded       check-substitutions
//!   ProjectsEvaluated  order-dependent-tasks
//!
//! fire(point, &mut graph): every hook of `point`, registration order,
//! first error aborts
//! ```


use std::fmt;

use anyhow::Context;
use tracing::{debug, warn};

use crate::config::types::OrderingConfig;
use crate::error::Result;
use crate::graph::{ProjectGraph, order_dependent_tasks};

/// Points in the configuration phase where hooks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExtensionPoint {
    /// Configuration has been loaded and the graph built.
    ConfigLoaded,
    /// Every project has been evaluated; cross-project wiring happens here.
    ProjectsEvaluated,
}

impl ExtensionPoint {
    pub const ALL: [Self; 2] = [Self::ConfigLoaded, Self::ProjectsEvaluated];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigLoaded => "config-loaded",
            Self::ProjectsEvaluated => "projects-evaluated",
        }
    }
}

impl fmt::Display for ExtensionPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type Hook = Box<dyn Fn(&mut ProjectGraph) -> Result<()>>;

struct Registration {
    point: ExtensionPoint,
    name: String,
    hook: Hook,
}

/// Callbacks registered against [`ExtensionPoint`]s.
#[derive(Default)]
pub struct HookRegistry {
    registrations: Vec<Registration>,
}

impl HookRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the built-in hooks.
    #[must_use]
    pub fn with_builtins(ordering: OrderingConfig) -> Self {
        let mut registry = Self::new();
        registry.register(
            ExtensionPoint::ConfigLoaded,
            "check-substitutions",
            check_substitutions,
        );
        registry.register(
            ExtensionPoint::ProjectsEvaluated,
            "order-dependent-tasks",
            move |graph| {
                order_dependent_tasks(graph, &ordering);
                Ok(())
            },
        );
        registry
    }

    /// Adds `hook` to run whenever `point` fires.
    pub fn register<F>(&mut self, point: ExtensionPoint, name: impl Into<String>, hook: F)
    where
        F: Fn(&mut ProjectGraph) -> Result<()> + 'static,
    {
        self.registrations.push(Registration {
            point,
            name: name.into(),
            hook: Box::new(hook),
        });
    }

    /// Names of the hooks registered for `point`, in run order.
    #[must_use]
    pub fn names(&self, point: ExtensionPoint) -> Vec<&str> {
        self.registrations
            .iter()
            .filter(|r| r.point == point)
            .map(|r| r.name.as_str())
            .collect()
    }

    /// Runs every hook registered for `point`.
    ///
    /// # Errors
    ///
    /// Returns the first hook error, naming the hook.
    pub fn fire(&self, point: ExtensionPoint, graph: &mut ProjectGraph) -> Result<()> {
        for registration in self.registrations.iter().filter(|r| r.point == point) {
            debug!(point = %point, hook = %registration.name, "Running hook");
            (registration.hook)(graph)
                .with_context(|| format!("hook '{}' failed at {point}", registration.name))?;
        }
        Ok(())
    }

    /// Fires every extension point in phase order.
    ///
    /// # Errors
    ///
    /// Returns the first hook error.
    pub fn fire_all(&self, graph: &mut ProjectGraph) -> Result<()> {
        for point in ExtensionPoint::ALL {
            self.fire(point, graph)?;
        }
        Ok(())
    }
}

/// Warns about substitutions that point at undeclared projects.
#[allow(clippy::unnecessary_wraps)]
fn check_substitutions(graph: &mut ProjectGraph) -> Result<()> {
    for (coordinate, project) in graph.substitutions() {
        if graph.project(project).is_none() {
            warn!(
                coordinate = %coordinate,
                project = %project,
                "Substitution targets an unknown project"
            );
        }
    }
    Ok(())
}
