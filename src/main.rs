use abacus::config::EngineConfig;
use abacus::engine::{Calculator, Snapshot};
use abacus::input::Command;
use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Keypad calculator driven by key names.
///
/// Keys are keyboard names (`0`-`9`, `.`, `+`, `-`, `*`, `/`, `Enter`,
/// `Escape`, `Backspace`) or keypad labels (`×`, `÷`, `√`, `x²`, `1/x`, `±`,
/// `%`, `MC`, `MR`, `M+`, `MS`).
#[derive(Parser, Debug)]
#[command(name = "abacus", version, about)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the view as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Keys to press; reads lines of keys from stdin when omitted
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    init_tracing(&config);

    let mut calc = config.builder().build().context("building calculator")?;
    info!(history_limit = config.history_limit, "calculator ready");

    let mut stdout = io::stdout().lock();

    if !cli.keys.is_empty() {
        press_keys(&mut calc, cli.keys.iter().map(String::as_str));
        render(&mut stdout, &calc.snapshot(), cli.json)?;
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        press_keys(&mut calc, line.split_whitespace());
        render(&mut stdout, &calc.snapshot(), cli.json)?;
    }

    Ok(())
}

fn init_tracing(config: &EngineConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn press_keys<'a>(calc: &mut Calculator, keys: impl Iterator<Item = &'a str>) {
    for key in keys {
        match Command::from_key(key) {
            Ok(command) => calc.execute(command),
            Err(err) => warn!(key, "skipping key: {err}"),
        }
    }
}

fn render(out: &mut impl Write, snapshot: &Snapshot, json: bool) -> Result<()> {
    if json {
        writeln!(out, "{}", snapshot.to_json()?)?;
        return Ok(());
    }

    let memory = if snapshot.memory_active { "M " } else { "" };
    match &snapshot.pending {
        Some(pending) => writeln!(out, "{memory}{pending} | {}", snapshot.display)?,
        None => writeln!(out, "{memory}{}", snapshot.display)?,
    }
    for entry in &snapshot.history {
        writeln!(out, "  {entry}")?;
    }
    out.flush()?;
    Ok(())
}
