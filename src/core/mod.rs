// mod.rs - Core sanitization module

pub mod encoding;
pub mod sanitize;
pub mod transcode;

// Re-export main types for convenience
pub use encoding::{decode_utf8, encode_cp1252, fix_encoding};
pub use sanitize::{sanitize_cell, sanitize_row, strip_markup};
pub use transcode::{sanitize_csv, TranscodeSummary};
