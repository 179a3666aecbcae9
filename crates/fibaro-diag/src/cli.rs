//! Clap derive structures for the `fibaro-diag` CLI.
//!
//! Only depends on clap + clap_complete so `build.rs` can include it for
//! man page generation.

use clap::{ArgGroup, Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// fibaro-diag -- redacted diagnostics for Fibaro Home Center hubs
#[derive(Debug, Parser)]
#[command(
    name = "fibaro-diag",
    version,
    about = "Collect redacted diagnostics from a Fibaro Home Center hub",
    long_about = "Reads the hub's firmware version and device list and prints a diagnostics\n\
        snapshot with credentials, URLs, unique ids and titles masked.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Hub profile to use
    #[arg(long, short = 'p', env = "FIBARO_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Hub URL (overrides profile)
    #[arg(long, env = "FIBARO_URL", global = true)]
    pub url: Option<String>,

    /// Hub username (overrides profile)
    #[arg(long, short = 'u', env = "FIBARO_USERNAME", global = true)]
    pub username: Option<String>,

    /// Hub password (prefer the environment variable or keyring)
    #[arg(long, env = "FIBARO_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "FIBARO_OUTPUT",
        default_value = "json",
        global = true
    )]
    pub output: OutputFormat,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "FIBARO_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (overrides profile)
    #[arg(long, env = "FIBARO_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output Enum ──────────────────────────────────────────────────────

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Diagnostics for the whole hub: every device it reports
    #[command(alias = "config-entry")]
    Entry,

    /// Diagnostics for one device and its direct children
    #[command(alias = "dev")]
    Device(DeviceArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("target")
        .required(true)
        .args(["identity", "hub"])
))]
pub struct DeviceArgs {
    /// Hub device id, or the hub serial number
    ///
    /// All-digit input is always read as a device id. Use --hub for a hub
    /// whose serial number is numeric.
    pub identity: Option<String>,

    /// Target the hub itself
    #[arg(long)]
    pub hub: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
