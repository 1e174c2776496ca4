mod cli;
mod commands;
mod logging;

use std::path::Path;
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use crate::cli::{Cli, Command};
use workcal::{Settings, Workcal};

/// Settings file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG: &str = "workcal.toml";

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = load_settings(cli.config.as_deref())?;
    if let Some(lang) = cli.lang {
        settings.language = lang;
    }
    info!(?settings, "settings loaded");
    let wc = Workcal::new(settings).context("invalid settings")?;
    let out = commands::Output { json: cli.json };

    match cli.command {
        Command::Range(args) => commands::range(&wc, args, out),
        Command::Week(args) => commands::week(&wc, args, out),
        Command::Period(args) => commands::period(&wc, args, out),
        Command::Business(args) => commands::business(&wc, args, out),
        Command::Holidays(args) => commands::holidays(&wc, args, out),
    }
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(p) => Settings::load(p).with_context(|| format!("failed to load {}", p.display())),
        None if Path::new(DEFAULT_CONFIG).exists() => {
            Settings::load(Path::new(DEFAULT_CONFIG)).context("failed to load workcal.toml")
        }
        None => Ok(Settings::default()),
    }
}
