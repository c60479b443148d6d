//! Token value type.

use std::fmt;

use crate::{Span, TerminalKind};

/// A token with its lexeme text and source location.
///
/// Tokens are immutable once created. Synthetic tokens (the stream-start
/// seed and end-of-range markers) carry empty text and a zero-length span.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TerminalKind,
    /// Raw lexeme. Empty for synthetic tokens.
    pub text: Box<str>,
    pub span: Span,
    /// 1-based source line of `span.end`.
    pub line: u32,
}

impl Token {
    pub fn new(kind: TerminalKind, text: impl Into<Box<str>>, span: Span, line: u32) -> Self {
        Token {
            kind,
            text: text.into(),
            span,
            line,
        }
    }

    /// A zero-length token with no text, anchored at `offset`.
    pub fn synthetic(kind: TerminalKind, offset: u32, line: u32) -> Self {
        Token {
            kind,
            text: Box::from(""),
            span: Span::at(offset),
            line,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.text.is_empty() {
            write!(f, "{:?} @ {} (line {})", self.kind, self.span, self.line)
        } else {
            write!(
                f,
                "{:?} {:?} @ {} (line {})",
                self.kind, self.text, self.span, self.line
            )
        }
    }
}
