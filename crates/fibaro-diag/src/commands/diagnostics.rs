//! Diagnostics command handlers.

use fibaro_core::{
    ConfigEntry, Controller, DOMAIN, DeviceEntry, HubController, HubIdentity,
    get_config_entry_diagnostics, get_device_diagnostics,
};

use crate::cli::{DeviceArgs, GlobalOpts};
use crate::error::CliError;
use crate::output;

pub async fn entry(
    controller: &HubController,
    entry: &ConfigEntry,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let snapshot = get_config_entry_diagnostics(controller, entry).await?;
    output::print_output(&output::render(&global.output, &snapshot)?)
}

pub async fn device(
    controller: &HubController,
    entry: &ConfigEntry,
    args: DeviceArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let identity = target_identity(controller, args);
    let device = DeviceEntry::new(format!("{DOMAIN}-{identity}")).with_identifier(DOMAIN, identity);

    let snapshot = get_device_diagnostics(controller, entry, &device).await?;
    output::print_output(&output::render(&global.output, &snapshot)?)
}

fn target_identity(controller: &HubController, args: DeviceArgs) -> HubIdentity {
    match args.identity {
        Some(raw) if !args.hub => {
            let Ok(identity) = raw.parse::<HubIdentity>();
            identity
        }
        _ => HubIdentity::from(controller.hub_serial()),
    }
}
