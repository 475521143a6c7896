//! Login command - Switch the current user

use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::Command;
use crate::state::State;

/// Set the current user to the single argument and persist it
///
/// # Errors
/// Returns [`Error::HandlerArgument`] unless exactly one argument is given, or the
/// config store's write error
pub fn handler_login(state: &mut State, cmd: &Command) -> Result<()> {
    let [name] = cmd.args() else {
        return Err(Error::HandlerArgument(format!("usage: {} <name>", cmd.name())));
    };

    debug!(user = %name, "switching current user");
    state.store.set_user(&mut state.config, name)?;

    println!("User switched successfully!");
    Ok(())
}
