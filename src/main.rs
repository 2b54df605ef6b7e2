
use awesome_calc::config::Settings;
use awesome_calc::session::{Calculator, Key};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(version, about = "Keypad calculator. Keys: 0-9 . , + - * / ^ = C")]
struct Cli {
  /// Keystroke strings, fed in order into a single session. Reads
  /// lines from stdin when omitted.
  keys: Vec<String>,

  /// TOML settings file
  #[arg(long, value_name = "PATH")]
  config: Option<PathBuf>,

  /// Text shown when an expression cannot be evaluated
  #[arg(long, value_name = "TEXT")]
  error_marker: Option<String>,

  /// Print the postfix form of each expression on stderr before it is
  /// solved
  #[arg(long)]
  show_postfix: bool,

  /// Enable debug logging (overridden by RUST_LOG)
  #[arg(short, long)]
  verbose: bool,
}

fn init_logging(verbose: bool) {
  let default_level = if verbose { "debug" } else { "warn" };
  let filter = EnvFilter::try_from_default_env()
    .unwrap_or_else(|_| EnvFilter::new(default_level));
  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(io::stderr)
    .init();
}

fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
  let mut settings = match &cli.config {
    Some(path) => Settings::load(path)?,
    None => Settings::default(),
  };
  if let Some(marker) = &cli.error_marker {
    settings.error_marker = marker.clone();
  }
  if cli.show_postfix {
    settings.show_postfix = true;
  }
  Ok(settings)
}

fn feed(calc: &mut Calculator, line: &str) -> anyhow::Result<()> {
  let keys = Key::parse_all(line).with_context(|| format!("in keystrokes {:?}", line))?;
  for key in keys {
    if key == Key::Solve && calc.settings().show_postfix {
      if let Some(postfix) = calc.postfix_text() {
        eprintln!("postfix: {}", postfix);
      }
    }
    calc.press(key);
  }
  Ok(())
}

fn main() -> anyhow::Result<()> {
  let cli = Cli::parse();
  init_logging(cli.verbose);
  let settings = load_settings(&cli)?;
  let mut calc = Calculator::with_settings(settings);

  if cli.keys.is_empty() {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
      let line = line.context("reading stdin")?;
      feed(&mut calc, &line)?;
      writeln!(stdout, "{}", calc.display_text())?;
    }
  } else {
    for keys in &cli.keys {
      feed(&mut calc, keys)?;
    }
    println!("{}", calc.display_text());
  }
  Ok(())
}
