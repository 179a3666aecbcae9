//! Command dispatch: bridges CLI args -> core handlers -> output formatting.

pub mod diagnostics;

use fibaro_core::{ConfigEntry, HubController};

use crate::cli::{Command, GlobalOpts};
use crate::error::CliError;

/// Dispatch a hub-bound command to the appropriate handler.
pub async fn dispatch(
    cmd: Command,
    controller: &HubController,
    entry: &ConfigEntry,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match cmd {
        Command::Entry => diagnostics::entry(controller, entry, global).await,
        Command::Device(args) => diagnostics::device(controller, entry, args, global).await,
        // Completions are handled before dispatch
        Command::Completions(_) => unreachable!(),
    }
}
