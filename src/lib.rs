// lib.rs - csvscrub library root

//! # csvscrub - CSV export cleaner
//!
//! Strips embedded HTML markup from cell values and repairs the common
//! mojibake pattern where Windows-1252 bytes were previously misread as
//! UTF-8. One input file becomes one sanitized output file in a single
//! streaming pass.
//!
//! ## Features
//!
//! - **Header passthrough**: row 0 is copied through verbatim, never
//!   sanitized
//! - **Markup stripping**: lenient HTML parsing; `script`/`style` subtrees
//!   dropped, deep text extraction for everything else
//! - **Encoding repair**: per-span Windows-1252 fallbacks in both the encode
//!   and decode direction; malformed input can never fail the run
//! - **BOM-signed output**: UTF-8 with a leading byte-order mark so
//!   spreadsheet applications pick the right encoding
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use csvscrub::prelude::*;
//!
//! let summary = sanitize_csv("export.csv", "clean.csv")?;
//! println!("{} cells rewritten", summary.cells_rewritten);
//! # Ok::<(), String>(())
//! ```

// Re-export all main modules
pub mod cli;
pub mod core;
pub mod data;
pub mod output;

// Convenience prelude for common imports
pub mod prelude {
    pub use crate::cli::{read_args, usage_text, validate_args, Args, ValidationResult};
    pub use crate::core::{decode_utf8, encode_cp1252, fix_encoding};
    pub use crate::core::{sanitize_cell, sanitize_csv, sanitize_row, strip_markup};
    pub use crate::core::TranscodeSummary;
    pub use crate::data::CsvSource;
    pub use crate::output::CsvSink;
}

// Re-export main types at the root level for convenience
pub use crate::cli::{Args, ValidationResult};
pub use crate::core::{sanitize_csv, TranscodeSummary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get library information
pub fn get_info() -> String {
    format!("csvscrub v{} - CSV export cleaner", VERSION)
}
