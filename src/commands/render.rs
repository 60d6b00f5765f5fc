//! Output rendering
//!
//! Text output aligns the `<label> [<offsets>]` column; colors are applied
//! on top of the same text and carry no extra information.

use std::fmt::Write;

use colored::Colorize;
use sff_core::Module;

/// Render one line per field
pub fn text(module: &Module, color: bool) -> String {
    let entries = module.entries();
    let labels: Vec<String> = entries
        .iter()
        .map(|e| format!("{} {}", e.spec.label, e.offsets()))
        .collect();
    let width = labels.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::new();
    for (label, entry) in labels.iter().zip(&entries) {
        let label = format!("{:<width$}", label, width = width);
        let value = entry.value.describe();
        if color {
            let _ = writeln!(out, "{} : {}", label.cyan(), value.bright_green());
        } else {
            let _ = writeln!(out, "{} : {}", label, value);
        }
    }
    out
}

/// Render the structured form as JSON
pub fn json(module: &Module, compact: bool) -> Result<String, serde_json::Error> {
    if compact {
        serde_json::to_string(module)
    } else {
        serde_json::to_string_pretty(module)
    }
}
