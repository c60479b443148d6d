//! Shared front-end vocabulary for the Opal compiler.
//!
//! Small value types used across the lexing and diagnosis layers:
//! byte-offset [`Span`]s, terminal-symbol tags ([`TerminalKind`]), and
//! the [`Token`] value the diagnosis parser consumes.

mod span;
mod terminal;
mod token;

pub use span::{Span, SpanError};
pub use terminal::TerminalKind;
pub use token::Token;
