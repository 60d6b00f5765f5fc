//! CLI argument parsing

use clap::{Parser, ValueEnum};
use sff_core::DetectStrategy;

use crate::commands::decode::InputFormat;

#[derive(Parser)]
#[command(name = "sffdump")]
#[command(author, version, about = "Decode SFP/QSFP transceiver EEPROM dumps read from stdin", long_about = None)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Print the structured form (JSON) instead of text
    #[arg(long)]
    pub json: bool,

    /// Print JSON on a single line
    #[arg(long, requires = "json")]
    pub compact: bool,

    /// Input is JSON produced by --json; the dump is rebuilt from raw values
    #[arg(long, conflicts_with = "binary")]
    pub from_json: bool,

    /// Input is raw EEPROM bytes instead of a hex string
    #[arg(long)]
    pub binary: bool,

    /// How to detect the module type
    #[arg(long, value_enum, default_value_t = Detect::Content)]
    pub detect: Detect,

    /// Colorize text output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,
}

impl Cli {
    /// Input format selected by the flags
    pub fn input_format(&self) -> InputFormat {
        if self.from_json {
            InputFormat::Json
        } else if self.binary {
            InputFormat::Binary
        } else {
            InputFormat::Hex
        }
    }
}

/// Module type detection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Detect {
    /// Identifier bytes (byte 0/1 for SFP, byte 128 for QSFP)
    Content,
    /// Dump size (256 bytes SFP, 640 bytes QSFP)
    Length,
}

impl From<Detect> for DetectStrategy {
    fn from(d: Detect) -> Self {
        match d {
            Detect::Content => DetectStrategy::Content,
            Detect::Length => DetectStrategy::Length,
        }
    }
}

/// When to use colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Only when stdout is a terminal
    Auto,
    /// Always
    Always,
    /// Never
    Never,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["sffdump"]).unwrap();
        assert!(!cli.json);
        assert_eq!(cli.detect, Detect::Content);
        assert_eq!(cli.color, ColorChoice::Auto);
        assert_eq!(cli.input_format(), InputFormat::Hex);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "sffdump", "--json", "--compact", "--detect", "length", "-vv",
        ])
        .unwrap();
        assert!(cli.json && cli.compact);
        assert_eq!(DetectStrategy::from(cli.detect), DetectStrategy::Length);
        assert_eq!(cli.verbose, 2);

        let cli = Cli::try_parse_from(["sffdump", "--from-json"]).unwrap();
        assert_eq!(cli.input_format(), InputFormat::Json);
        let cli = Cli::try_parse_from(["sffdump", "--binary"]).unwrap();
        assert_eq!(cli.input_format(), InputFormat::Binary);
    }

    #[test]
    fn test_conflicts() {
        assert!(Cli::try_parse_from(["sffdump", "--compact"]).is_err());
        assert!(Cli::try_parse_from(["sffdump", "--from-json", "--binary"]).is_err());
    }
}
