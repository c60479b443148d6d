//! Low-level tokenizer for Opal.
//!
//! This crate is standalone: it depends on no other `opal_*` crate and
//! knows nothing about keywords, terminal vocabularies, or diagnostics.
//! It produces [`RawToken`] values — `(tag, len)` pairs — over a
//! sentinel-terminated [`Cursor`]. Integration layers resolve keywords,
//! drop trivia, and convert error tags into proper diagnostics.

mod cursor;
mod raw_scanner;
mod tag;

pub use cursor::Cursor;
pub use raw_scanner::{tokenize, RawScanner};
pub use tag::{RawTag, RawToken};
