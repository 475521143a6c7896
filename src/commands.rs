// Command handlers module
// This module contains the built-in handlers and the registry they are installed in

pub mod login;

use crate::registry::CommandRegistry;
use crate::state::State;

/// Registry with every built-in command installed
#[must_use]
pub fn registry() -> CommandRegistry<State> {
    let mut registry = CommandRegistry::new();
    registry.register("login", login::handler_login);
    registry
}
