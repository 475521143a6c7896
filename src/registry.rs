//! Command registry: maps a command name to the handler that implements it

use std::collections::HashMap;

use crate::error::{Error, Result};

/// A parsed invocation: the command name followed by its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    args: Vec<String>,
}

impl Command {
    pub fn new(name: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

/// Handler invoked with the program state and the command that selected it
pub type Handler<S> = Box<dyn Fn(&mut S, &Command) -> Result<()>>;

/// Name-to-handler table
///
/// Populated once at startup, then used for a single dispatch. Lookups are exact and
/// case-sensitive. Registering a name twice keeps only the latest handler.
pub struct CommandRegistry<S> {
    handlers: HashMap<String, Handler<S>>,
}

impl<S> CommandRegistry<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Store `handler` under `name`, replacing any previous handler for it
    pub fn register<F>(&mut self, name: impl Into<String>, handler: F)
    where
        F: Fn(&mut S, &Command) -> Result<()> + 'static,
    {
        self.handlers.insert(name.into(), Box::new(handler));
    }

    /// Invoke the handler registered for `command.name()`
    ///
    /// # Errors
    /// Returns [`Error::CommandNotFound`] if no handler is registered for the name,
    /// otherwise whatever the handler returns.
    pub fn run(&self, state: &mut S, command: &Command) -> Result<()> {
        let handler = self
            .handlers
            .get(command.name())
            .ok_or_else(|| Error::CommandNotFound(command.name().to_string()))?;
        handler(state, command)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Registered names in sorted order
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl<S> Default for CommandRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
