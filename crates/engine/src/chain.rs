// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Middleware chain wrapping a target's command.
//!
//! A [`Chain`] is an ordered list of [`Plugin`]s ending in exactly one
//! [`Terminal`]. The first plugin is outermost: it runs first and sees the
//! final exit code last. The terminal is a separate type and never receives
//! a continuation, so an invalid chain cannot be built.

use ns_core::Target;

/// A non-terminal stage of the chain.
///
/// Implementations may rewrite `target.command` before calling `next`, must
/// call `next` exactly once, and return its exit code. [`Next`] is consumed
/// by [`Next::run`], so a second call does not compile.
pub trait Plugin: Send + Sync {
    fn name(&self) -> &'static str;

    fn call(&self, target: &mut Target, next: Next<'_>) -> i32;
}

/// The innermost stage: actually runs the command.
pub trait Terminal: Send + Sync {
    fn run(&self, target: &Target) -> i32;
}

/// Continuation handed to a plugin: the rest of the chain.
pub struct Next<'a> {
    rest: &'a [Box<dyn Plugin>],
    terminal: &'a dyn Terminal,
}

impl Next<'_> {
    /// Run the remaining stages and return their exit code.
    pub fn run(self, target: &mut Target) -> i32 {
        match self.rest.split_first() {
            Some((plugin, rest)) => {
                tracing::trace!(plugin = plugin.name(), "entering plugin");
                plugin.call(
                    target,
                    Next {
                        rest,
                        terminal: self.terminal,
                    },
                )
            }
            None => self.terminal.run(target),
        }
    }
}

/// Ordered plugins plus the terminal executor.
pub struct Chain {
    plugins: Vec<Box<dyn Plugin>>,
    terminal: Box<dyn Terminal>,
}

impl Chain {
    /// A chain that only runs the terminal.
    pub fn new(terminal: impl Terminal + 'static) -> Self {
        Self {
            plugins: Vec::new(),
            terminal: Box::new(terminal),
        }
    }

    /// Add a plugin inside every plugin added so far.
    pub fn with(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Plugin names, outermost first.
    pub fn plugin_names(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Run the chain once for `target` and return the resulting exit code.
    pub fn execute(&self, target: &mut Target) -> i32 {
        Next {
            rest: &self.plugins,
            terminal: self.terminal.as_ref(),
        }
        .run(target)
    }
}

/// Run `chain` for `target`.
pub fn execute(target: &mut Target, chain: &Chain) -> i32 {
    chain.execute(target)
}

#[cfg(test)]
#[path = "chain_tests.rs"]
mod tests;
