//! # aboutcode attrib
//!
//! Render attribution documents from a list of ABOUT records with Liquid
//! templates. Template syntax is checked up front with [`check_template`],
//! which reports problems as `(line, message)` instead of failing.

pub mod error;
mod render;

pub use error::{AttribError, Result};
pub use render::{check_template, generate, generate_from_file, DEFAULT_TEMPLATE};
