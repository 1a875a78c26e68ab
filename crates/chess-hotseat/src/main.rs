//! Chess Hotseat - two players sharing one terminal.
//!
//! Reads commands from stdin, applies them to a single game, and prints the
//! board after every change. Logs go to stderr.

mod command;
mod config;
mod render;
mod session;

use anyhow::Context;
use clap::Parser;
use command::Command;
use config::HotseatConfig;
use session::{Reply, Session};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::Level;

/// Chess Hotseat - play chess against a friend on one terminal.
#[derive(Parser)]
#[command(name = "chess-hotseat")]
#[command(about = "Play chess against a friend on one terminal")]
struct Args {
    /// Path to the configuration file
    #[arg(long, default_value = HotseatConfig::FILE_NAME)]
    config: PathBuf,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = HotseatConfig::load(&args.config)
        .with_context(|| format!("loading {}", args.config.display()))?;

    let level_name = args.log_level.as_deref().unwrap_or(&config.log_level);
    let level: Level = level_name
        .parse()
        .with_context(|| format!("invalid log level '{}'", level_name))?;
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();

    tracing::info!("Starting chess-hotseat");
    tracing::debug!(?config, "configuration loaded");

    let mut session = Session::new(config);
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", session.status())?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let reply = match Command::parse(&line) {
            Ok(command) => session.handle(command),
            Err(e) => Reply::Text(e.to_string()),
        };
        match reply {
            Reply::Text(text) => {
                if !text.is_empty() {
                    writeln!(out, "{}", text)?;
                }
            }
            Reply::Quit(text) => {
                writeln!(out, "{}", text)?;
                break;
            }
        }
        out.flush()?;
    }

    tracing::info!(ply = session.game().ply(), "session ended");
    Ok(())
}
