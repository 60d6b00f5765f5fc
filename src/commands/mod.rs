//! CLI command implementations
//!
//! - [`decode`] reads stdin and turns hex, binary or JSON input into a module
//! - [`render`] prints a module as aligned text or JSON

pub mod decode;
pub mod render;
