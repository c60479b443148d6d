//! Secondary-diagnosis support for the Opal parser.
//!
//! The diet parse skips method and initializer bodies. When it fails on
//! a file, the compiler re-lexes only the problematic regions and replays
//! tokens through a slower, explanatory parser for precise error
//! messages. This crate provides the two pieces that feed that parser:
//!
//! - [`range`] — turns a snapshot of declaration ranges ([`decl`]) into a
//!   sorted, non-overlapping [`range::RangeSet`] of source intervals to
//!   skip or flag during re-lexing.
//! - [`window`] — a bounded, index-addressable token cache over a
//!   [`scan::Scanner`], transparently omitting tokens that fall inside a
//!   skip interval.
//!
//! The diagnosis parser builds the range set once per attempt, seeds a
//! [`window::TokenWindow`] with it and a scanner, and then drives its own
//! grammar recovery exclusively through the window. Both structures are
//! single-use: one diagnosis attempt, one thread, then dropped.

pub mod decl;
pub mod range;
mod ring;
pub mod scan;
pub mod window;

pub use decl::{InitializerDecl, MethodDecl, TypeDecl};
pub use range::{RangeFlag, RangeSet, SkipRange};
pub use scan::{ScanError, Scanner, SourceScanner};
pub use window::{EvictedIndex, TokenWindow};
