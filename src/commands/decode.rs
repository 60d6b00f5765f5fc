//! Input handling: read stdin and decode it into a [`Module`]

use std::io::{IsTerminal, Read};

use sff_core::hex::{self, HexError};
use sff_core::{DetectStrategy, Module};
use thiserror::Error;

/// Problems with the data fed to the CLI
#[derive(Debug, Error)]
pub enum InputError {
    /// Nothing was piped in
    #[error("stdin is a terminal; pipe an EEPROM dump into sffdump")]
    StdinIsTerminal,

    /// Input was empty or whitespace only
    #[error("no input data")]
    EmptyInput,

    /// Non-hex character in hex input
    #[error("invalid hex digit {found:?} at position {position}")]
    InvalidHex { position: usize, found: char },

    /// Hex input with an odd number of digits
    #[error("hex input has an odd number of digits")]
    OddHexLength,

    /// JSON input could not be parsed
    #[error("invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading stdin failed
    #[error("failed to read stdin: {0}")]
    Io(#[from] std::io::Error),
}

impl From<HexError> for InputError {
    fn from(e: HexError) -> Self {
        match e {
            HexError::OddLength => Self::OddHexLength,
            HexError::InvalidDigit { position, found } => Self::InvalidHex { position, found },
        }
    }
}

/// Format of the data read from stdin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Hex string, whitespace and a `0x` prefix allowed
    Hex,
    /// Raw EEPROM bytes
    Binary,
    /// Structured form produced by `--json`
    Json,
}

/// Read all of stdin, refusing to wait on a terminal
pub fn read_stdin() -> Result<Vec<u8>, InputError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(InputError::StdinIsTerminal);
    }
    let mut data = Vec::new();
    stdin.lock().read_to_end(&mut data)?;
    log::debug!("Read {} bytes from stdin", data.len());
    Ok(data)
}

/// Parse a hex dump, ignoring whitespace and an optional `0x` prefix
///
/// Error positions are byte offsets into `text`.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, InputError> {
    let trimmed = text.trim_start();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    if digits.trim().is_empty() {
        return Err(InputError::EmptyInput);
    }
    let skipped = text.len() - digits.len();
    hex::decode(digits).map_err(|e| match e {
        HexError::InvalidDigit { position, found } => InputError::InvalidHex {
            position: position + skipped,
            found,
        },
        e => e.into(),
    })
}

/// Turn stdin data into a decoded module
pub fn decode_input(
    data: &[u8],
    format: InputFormat,
    strategy: DetectStrategy,
) -> Result<Module, Box<dyn std::error::Error>> {
    if data.is_empty() {
        return Err(InputError::EmptyInput.into());
    }

    let module = match format {
        InputFormat::Hex => {
            let bytes = parse_hex(&String::from_utf8_lossy(data))?;
            log::debug!("Hex input decoded to {} bytes", bytes.len());
            Module::decode_with(&bytes, strategy)?
        }
        InputFormat::Binary => Module::decode_with(data, strategy)?,
        InputFormat::Json => {
            let value: serde_json::Value =
                serde_json::from_slice(data).map_err(InputError::from)?;
            Module::from_structured(&value)?
        }
    };
    Ok(module)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sff_core::{DecodeError, ModuleFamily};

    fn sfp_hex() -> String {
        let mut buf = vec![0u8; 256];
        buf[0] = 0x03;
        buf[1] = 0x04;
        buf[2] = 0x07;
        buf[20..36].copy_from_slice(b"ACME            ");
        hex::encode(&buf)
    }

    #[test]
    fn test_parse_hex_tolerates_whitespace_and_prefix() {
        assert_eq!(parse_hex("0x0a0B\n ff\r\n").unwrap(), vec![0x0a, 0x0b, 0xff]);
        assert_eq!(parse_hex("00 11\t22").unwrap(), vec![0x00, 0x11, 0x22]);
    }

    #[test]
    fn test_parse_hex_errors() {
        assert!(matches!(parse_hex("  \n"), Err(InputError::EmptyInput)));
        assert!(matches!(parse_hex("0x"), Err(InputError::EmptyInput)));
        assert!(matches!(parse_hex("abc"), Err(InputError::OddHexLength)));
        assert!(matches!(
            parse_hex("0q"),
            Err(InputError::InvalidHex {
                position: 1,
                found: 'q'
            })
        ));
        assert!(matches!(
            parse_hex("00 0q"),
            Err(InputError::InvalidHex {
                position: 4,
                found: 'q'
            })
        ));
        assert!(matches!(
            parse_hex("  0x00\n0q"),
            Err(InputError::InvalidHex {
                position: 8,
                found: 'q'
            })
        ));
    }

    #[test]
    fn test_decode_hex_input() {
        let hex = format!("{}\n", sfp_hex());
        let module =
            decode_input(hex.as_bytes(), InputFormat::Hex, DetectStrategy::Content).unwrap();
        assert_eq!(module.family(), ModuleFamily::Sff8079);
        assert!(module.describe().contains("Vendor name [20-35] : ACME"));
    }

    #[test]
    fn test_decode_binary_input() {
        let bytes = hex::decode(&sfp_hex()).unwrap();
        let module = decode_input(&bytes, InputFormat::Binary, DetectStrategy::Length).unwrap();
        assert_eq!(module.family(), ModuleFamily::Sff8079);
    }

    #[test]
    fn test_decode_json_input() {
        let bytes = hex::decode(&sfp_hex()).unwrap();
        let original = Module::decode(&bytes).unwrap();
        let json = serde_json::to_string(&original).unwrap();
        let module = decode_input(json.as_bytes(), InputFormat::Json, DetectStrategy::Content)
            .unwrap();
        assert_eq!(module.describe(), original.describe());
    }

    #[test]
    fn test_decode_errors() {
        let err = decode_input(&[], InputFormat::Binary, DetectStrategy::Content).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::EmptyInput)
        ));

        let err = decode_input(b"{", InputFormat::Json, DetectStrategy::Content).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<InputError>(),
            Some(InputError::Json(_))
        ));

        let err = decode_input(b"0000", InputFormat::Hex, DetectStrategy::Content).unwrap_err();
        assert_eq!(
            err.downcast_ref::<DecodeError>(),
            Some(&DecodeError::UnknownModuleType)
        );
    }
}
