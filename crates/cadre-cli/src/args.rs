use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

/// Plan an objective across personas and export the resulting workplan
///
/// Cadre walks through three steps: name an objective and pick the personas
/// that will work on it, give each persona a task and expected results, then
/// generate a per-persona workplan from role templates. Run without a
/// subcommand to start the interactive wizard shell, or use `serve` to drive
/// the same wizard over MCP (Model Context Protocol).
#[derive(Parser)]
#[command(version, about, name = "cadre")]
pub struct Args {
    /// Persona and template catalog (JSON). Defaults to
    /// $XDG_CONFIG_HOME/cadre/catalog.json when present, else built-ins
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Cadre CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Start the interactive wizard shell (default)
    #[command(alias = "sh")]
    Shell,
    /// List the persona catalog
    #[command(aliases = ["p", "ls"])]
    Personas(PersonasArgs),
    /// List the workplan templates and the personas they apply to
    #[command(alias = "t")]
    Templates,
    /// Start the MCP server
    Serve,
}

#[derive(ClapArgs)]
pub struct PersonasArgs {
    /// Only show personas whose name or description contains this text
    #[arg(short, long)]
    pub search: Option<String>,
}
