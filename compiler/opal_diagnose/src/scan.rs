//! The scanner seam and its production implementation.
//!
//! The token window drives a character-level scanner through the
//! [`Scanner`] trait: reset to a source range, pull terminals one at a
//! time, ask for the current lexeme's positions and text, and translate
//! offsets to lines. [`SourceScanner`] implements the trait over
//! `opal_lexer_core`, resolving keywords and dropping trivia so the
//! window only ever sees terminals a parser cares about.

use opal_ir::TerminalKind;
use opal_lexer_core::{Cursor, RawScanner, RawTag};
use thiserror::Error;

/// Recoverable scanner failure.
///
/// Raised for lexemes the scanner cannot accept. The offending input is
/// consumed before the error is returned, so retrying `next_terminal`
/// always makes progress — callers skip past the bad lexeme rather than
/// aborting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The input at `offset` is not a valid Opal lexeme.
    #[error("invalid input at offset {offset}")]
    InvalidInput { offset: u32 },
}

/// Character-level lexical scanner, as the diagnosis layer consumes it.
///
/// After a successful `next_terminal`, the `terminal_*` accessors
/// describe the lexeme just produced; for `TerminalKind::Eof` the start
/// and end both sit at the end of the scanned range and the text is
/// empty.
pub trait Scanner {
    /// Restrict scanning to `[start, end)` and rewind to `start`.
    fn reset_range(&mut self, start: u32, end: u32);

    /// Produce the next terminal, or a recoverable [`ScanError`].
    ///
    /// End of the range is a terminal (`TerminalKind::Eof`), not an
    /// error, and repeats on every subsequent call.
    fn next_terminal(&mut self) -> Result<TerminalKind, ScanError>;

    /// Start offset of the current lexeme.
    fn terminal_start(&self) -> u32;

    /// End offset (exclusive) of the current lexeme.
    fn terminal_end(&self) -> u32;

    /// Raw text of the current lexeme.
    fn terminal_text(&self) -> &str;

    /// 1-based line holding `offset`.
    fn line_of(&self, offset: u32) -> u32;
}

/// [`Scanner`] over in-memory source text.
pub struct SourceScanner<'src> {
    source: &'src str,
    /// Byte offset of the first character of each line, ascending.
    /// `line_starts[0] == 0` always, so every offset maps to a line.
    line_starts: Vec<u32>,
    scanner: RawScanner,
    token_start: u32,
    token_end: u32,
}

impl<'src> SourceScanner<'src> {
    pub fn new(source: &'src str) -> Self {
        let mut line_starts = Vec::with_capacity(16);
        line_starts.push(0);
        for newline in memchr::memchr_iter(b'\n', source.as_bytes()) {
            line_starts.push(u32::try_from(newline + 1).unwrap_or(u32::MAX));
        }
        SourceScanner {
            source,
            line_starts,
            scanner: RawScanner::new(Cursor::new(source)),
            token_start: 0,
            token_end: 0,
        }
    }

    fn set_token(&mut self, start: usize, end: usize) {
        self.token_start = u32::try_from(start).unwrap_or(u32::MAX);
        self.token_end = u32::try_from(end).unwrap_or(u32::MAX);
    }
}

impl Scanner for SourceScanner<'_> {
    fn reset_range(&mut self, start: u32, end: u32) {
        let mut cursor = Cursor::bounded(self.source, end as usize);
        cursor.seek((start as usize).min(cursor.limit()));
        self.scanner = RawScanner::new(cursor);
        self.token_start = start;
        self.token_end = start;
    }

    fn next_terminal(&mut self) -> Result<TerminalKind, ScanError> {
        loop {
            let start = self.scanner.pos();
            let raw = self.scanner.next_token();
            let end = start + raw.len as usize;
            let kind = match raw.tag {
                RawTag::Whitespace | RawTag::Newline | RawTag::LineComment => continue,

                RawTag::UnterminatedStr | RawTag::InvalidByte | RawTag::InteriorNull => {
                    self.set_token(start, end);
                    return Err(ScanError::InvalidInput {
                        offset: self.token_start,
                    });
                }

                RawTag::Eof => TerminalKind::Eof,
                RawTag::Ident => {
                    let text = &self.source[start..end];
                    TerminalKind::from_ident(text).unwrap_or(TerminalKind::Ident)
                }
                RawTag::Int => TerminalKind::Int,
                RawTag::Float => TerminalKind::Float,
                RawTag::Str => TerminalKind::Str,
                RawTag::LBrace => TerminalKind::LBrace,
                RawTag::RBrace => TerminalKind::RBrace,
                RawTag::LParen => TerminalKind::LParen,
                RawTag::RParen => TerminalKind::RParen,
                RawTag::LBracket => TerminalKind::LBracket,
                RawTag::RBracket => TerminalKind::RBracket,
                RawTag::Comma => TerminalKind::Comma,
                RawTag::Dot => TerminalKind::Dot,
                RawTag::Colon => TerminalKind::Colon,
                RawTag::Semi => TerminalKind::Semi,
                RawTag::Plus => TerminalKind::Plus,
                RawTag::Minus => TerminalKind::Minus,
                RawTag::Arrow => TerminalKind::Arrow,
                RawTag::Star => TerminalKind::Star,
                RawTag::Slash => TerminalKind::Slash,
                RawTag::Percent => TerminalKind::Percent,
                RawTag::Eq => TerminalKind::Eq,
                RawTag::EqEq => TerminalKind::EqEq,
                RawTag::FatArrow => TerminalKind::FatArrow,
                RawTag::Bang => TerminalKind::Bang,
                RawTag::BangEq => TerminalKind::BangEq,
                RawTag::Less => TerminalKind::Less,
                RawTag::LessEq => TerminalKind::LessEq,
                RawTag::Greater => TerminalKind::Greater,
                RawTag::GreaterEq => TerminalKind::GreaterEq,
                RawTag::Amp => TerminalKind::Amp,
                RawTag::AmpAmp => TerminalKind::AmpAmp,
                RawTag::Pipe => TerminalKind::Pipe,
                RawTag::PipePipe => TerminalKind::PipePipe,
            };
            self.set_token(start, end);
            return Ok(kind);
        }
    }

    fn terminal_start(&self) -> u32 {
        self.token_start
    }

    fn terminal_end(&self) -> u32 {
        self.token_end
    }

    fn terminal_text(&self) -> &str {
        &self.source[self.token_start as usize..self.token_end as usize]
    }

    fn line_of(&self, offset: u32) -> u32 {
        let line = self.line_starts.partition_point(|&start| start <= offset);
        u32::try_from(line).unwrap_or(u32::MAX)
    }
}
