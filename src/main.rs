//! sffdump - decode optical transceiver EEPROM dumps
//!
//! Reads an SFP/SFP+ (SFF-8079) or QSFP+/QSFP28 (SFF-8636) EEPROM dump from
//! stdin and prints every field with its byte offsets, either as text or as
//! JSON carrying both the decoded value and the raw bytes.
//!
//! Input is a hex string by default; `--binary` accepts raw bytes and
//! `--from-json` accepts a previous `--json` output.

mod cli;
mod commands;

use std::io::IsTerminal;

use clap::Parser;
use cli::{Cli, ColorChoice};

fn main() {
    let cli = Cli::parse();

    // Default to warnings only; -v/-vv raise the level
    let level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let data = commands::decode::read_stdin()?;
    let module = commands::decode::decode_input(&data, cli.input_format(), cli.detect.into())?;
    log::info!("Decoded {} module", module.family());

    if cli.json {
        println!("{}", commands::render::json(&module, cli.compact)?);
    } else {
        let color = match cli.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => std::io::stdout().is_terminal(),
        };
        colored::control::set_override(color);
        print!("{}", commands::render::text(&module, color));
    }

    Ok(())
}
