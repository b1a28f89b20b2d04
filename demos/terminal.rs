// Interactive SQL World terminal on stdin/stdout.
//
//   cargo run --example terminal -- --seed 7
//   RUST_LOG=debug cargo run --example terminal -- --config world.yaml

use clap::Parser;
use std::io::{self, BufRead, Write};

use sqlworld::{GameConfig, Terminal};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// YAML game configuration.
    #[arg(long)]
    config: Option<String>,

    /// Seed for spawn positions (overrides the configuration).
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let args = Args::parse();
    let mut config = match &args.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.rng_seed = args.seed;
    }

    let mut terminal = Terminal::new(config);
    let mut stdout = io::stdout();
    for line in terminal.lines() {
        writeln!(stdout, "{}", line)?;
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        // Skip the echo line; the user just typed it.
        for out in terminal.submit(&line).iter().skip(1) {
            writeln!(stdout, "{}", out)?;
        }
        stdout.flush()?;
    }
    Ok(())
}
