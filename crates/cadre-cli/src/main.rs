//! Cadre CLI Application
//!
//! Interactive wizard shell, catalog listings and MCP server for the Cadre
//! objective wizard.

mod args;
mod cli;
mod mcp;
mod renderer;
mod shell;

use std::io::{self, IsTerminal};

use Commands::*;
use anyhow::{Context, Result};
use args::{Args, Commands};
use cadre_core::SessionBuilder;
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{CadreMcpServer, run_stdio_server};
use renderer::TerminalRenderer;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        catalog,
        no_color,
        command,
    } = Args::parse();

    let session = SessionBuilder::new()
        .with_catalog_path(catalog)
        .with_default_catalog_file()
        .build()
        .context("Failed to load persona catalog")?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    let renderer = TerminalRenderer::new(!no_color && io::stdout().is_terminal());

    info!("Cadre started");

    match command {
        Some(Personas(args)) => Cli::new(session, renderer).list_personas(args.search.as_deref()),
        Some(Templates) => Cli::new(session, renderer).list_templates(),
        Some(Serve) => {
            info!("Starting Cadre MCP server");
            run_stdio_server(CadreMcpServer::new(session))
                .await
                .context("MCP server failed")
        }
        Some(Shell) | None => {
            let mut cli = Cli::new(session, renderer);
            shell::run(&mut cli, stdin.lock(), interactive)?;
            Ok(())
        }
    }
}
