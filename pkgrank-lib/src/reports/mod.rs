//! Report generation for package scores
//!
//! Two generators are provided, both operating on a slice of [`ReportablePackage`]:
//! - **JSON**: one record per package, either as newline-delimited records or as a
//!   pretty-printed array. Record fields keep a fixed order and hold fixed-precision
//!   decimal strings, with `null` for dimensions that are not computed.
//! - **Console**: a human-readable table per package with ANSI colors.
//!
//! Number formatting is shared through the `common` module.

mod common;
mod console;
mod json;
mod reportable_package;

pub use console::generate as generate_console;
pub use json::{generate as generate_json, generate_lines as generate_json_lines};
pub use reportable_package::ReportablePackage;
