//! Coachplan CLI Application
//!
//! Command-line interface and MCP server for coachplan templates.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use coachplan_core::RegistryBuilder;
use log::info;
use mcp::{run_stdio_server, CoachplanMcpServer};
use renderer::TerminalRenderer;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        template_dir,
        no_builtins,
        no_color,
        command,
    } = Args::parse();

    let mut builder = RegistryBuilder::new().with_template_dir(template_dir);
    if no_builtins {
        builder = builder.without_builtins();
    }
    let registry = builder
        .build()
        .await
        .context("Failed to load templates")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Coachplan started");

    match command {
        Some(Template { command }) => Cli::new(registry, renderer).handle_template_command(command),
        Some(Answers { command }) => Cli::new(registry, renderer).handle_answer_command(command),
        Some(Serve) => {
            info!("Starting Coachplan MCP server");
            run_stdio_server(CoachplanMcpServer::new(registry))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(registry, renderer).list_templates(),
    }
}
