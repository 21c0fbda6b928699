mod cli;
mod command;
mod config;
mod dispatch;
mod terminal;

use anyhow::{Context, Result};
use clap::Parser;
use spool_scheduler::Scheduler;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::command::Command;
use crate::config::CliConfig;
use crate::dispatch::{Reply, dispatch};
use crate::terminal::Terminal;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let args = CliArgs::parse();
    let terminal = Terminal::new();

    // Load config
    let config = CliConfig::load(args.config.as_deref())
        .context("failed to load configuration")?;
    let owner = config.resolve_owner(args.owner.as_deref());
    let scheduler_config = config.resolve_scheduler(args.no_auto_fill, args.history);

    // The scheduler lives for the whole session and is handed to each command.
    let mut scheduler = Scheduler::new(scheduler_config);
    info!(owner = %owner, "Printer console started");

    if !args.quiet {
        terminal.print_banner(&owner, scheduler.config().auto_fill_on_vacancy)?;
    }

    // REPL loop
    loop {
        let input = match terminal.read_input(&config.prompt)? {
            Some(text) => text,
            None => {
                terminal.print_info("Exiting...")?;
                break;
            }
        };

        let command = match Command::parse(&input) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                terminal.print_error(&e.to_string())?;
                continue;
            }
        };

        match dispatch(&mut scheduler, &owner, command) {
            Ok(Reply::Exit) => {
                terminal.render(&Reply::Exit)?;
                break;
            }
            Ok(reply) => terminal.render(&reply)?,
            Err(e) => {
                debug!(error = %e, input = %input, "Command failed");
                terminal.print_error(&format!("{}.", e))?;
            }
        }
    }

    info!(
        live_jobs = scheduler.live_jobs(),
        completed = scheduler.metrics().jobs_completed,
        "Printer console stopped"
    );
    Ok(())
}
