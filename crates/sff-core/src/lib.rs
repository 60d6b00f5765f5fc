//! sff-core - Decoding of optical transceiver EEPROM maps
//!
//! This crate turns raw EEPROM dumps read from SFP/SFP+ and QSFP/QSFP+/QSFP28
//! modules into typed values, following the byte maps of SFF-8024, SFF-8079
//! and SFF-8636.
//!
//! # Overview
//!
//! - [`codes`] - static code tables (identifier, connector, encoding, ...)
//! - [`field`] - typed field values with a raw and a decoded representation
//! - [`layout`] - fixed-offset record layouts per specification family
//! - [`classify`] - module family detection
//! - [`module`] - the decode facade tying everything together
//!
//! # Example
//!
//! ```ignore
//! use sff_core::Module;
//!
//! fn show(eeprom: &[u8]) {
//!     match Module::decode(eeprom) {
//!         Ok(module) => println!("{}", module.describe()),
//!         Err(e) => println!("Decode failed: {}", e),
//!     }
//! }
//! ```

#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod classify;
pub mod codes;
pub mod error;
pub mod field;
pub mod hex;
pub mod layout;
pub mod module;

#[cfg(test)]
pub(crate) mod fixtures;

pub use classify::{classify, classify_with, DetectStrategy, ModuleFamily};
pub use error::{DecodeError, Result};
pub use module::{Module, Record};
