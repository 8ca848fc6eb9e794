//! Lumiq CLI - pick a theme and dark mode
//!
//! Lumiq offers ten themes in light and dark variants. The choice is saved
//! and restored on the next run.
//!
//! ## Quick Start
//!
//! ```bash
//! # See the themes
//! lumiq list
//!
//! # Choose one
//! lumiq set ocean
//! lumiq dark on
//!
//! # Or browse interactively
//! lumiq pick
//! ```

#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

use anyhow::Result;
use clap::Parser;

mod commands;
mod tui;
pub mod ui;

use commands::{Cli, Command};

fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();
    let store = cli.store.as_ref();

    match cli.command {
        Command::List(args) => commands::list::run(&args, store),
        Command::Show(args) => commands::show::run(&args, store),
        Command::Set(args) => commands::set::run(&args, store),
        Command::Dark(args) => commands::dark::run(&args, store),
        Command::Pick(args) => commands::pick::run(&args, store),
        Command::Config(args) => commands::config::run(args, store),
        Command::Completions(args) => commands::completions::run(args.action),
    }
}

fn init_logging() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,lumiq=info,lumiq_core=info"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).without_time())
        .with(filter)
        .init();
}
