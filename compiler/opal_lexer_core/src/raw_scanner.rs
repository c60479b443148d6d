//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a sentinel-terminated [`Cursor`] and produces
//! [`RawToken`] values with zero heap allocation. It does not resolve
//! keywords, validate escapes, or parse numeric values — those belong to
//! integration layers.
//!
//! # Design
//!
//! Main dispatch covers all 256 byte values. Each arm calls a focused
//! method that advances the cursor and returns `RawToken { tag, len }`.
//! The sentinel byte (`0x00`) naturally dispatches to `eof()`, which
//! distinguishes end of input from an interior null.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Allocation-free scanner producing one token at a time.
///
/// Error conditions are encoded as `RawTag` variants, not as
/// `Result::Err`. Every non-`Eof` token has `len >= 1`, so a consumer
/// that keeps calling [`RawScanner::next_token`] always makes progress.
pub struct RawScanner {
    cursor: Cursor,
}

impl RawScanner {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor) -> Self {
        Self { cursor }
    }

    /// Current absolute byte position (start of the next token).
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the scanned range is
    /// exhausted. Subsequent calls after EOF continue to return `Eof`.
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        match self.cursor.current() {
            0 => self.eof(start),
            b' ' | b'\t' | b'\r' => self.whitespace(start),
            b'\n' => self.single(start, RawTag::Newline),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.ident(start),
            b'0'..=b'9' => self.number(start),
            b'"' => self.string(start),
            b'/' => self.slash_or_comment(start),
            b'{' => self.single(start, RawTag::LBrace),
            b'}' => self.single(start, RawTag::RBrace),
            b'(' => self.single(start, RawTag::LParen),
            b')' => self.single(start, RawTag::RParen),
            b'[' => self.single(start, RawTag::LBracket),
            b']' => self.single(start, RawTag::RBracket),
            b',' => self.single(start, RawTag::Comma),
            b'.' => self.single(start, RawTag::Dot),
            b':' => self.single(start, RawTag::Colon),
            b';' => self.single(start, RawTag::Semi),
            b'+' => self.single(start, RawTag::Plus),
            b'-' => self.minus(start),
            b'*' => self.single(start, RawTag::Star),
            b'%' => self.single(start, RawTag::Percent),
            b'=' => self.equal(start),
            b'!' => self.double_or(start, b'=', RawTag::BangEq, RawTag::Bang),
            b'<' => self.double_or(start, b'=', RawTag::LessEq, RawTag::Less),
            b'>' => self.double_or(start, b'=', RawTag::GreaterEq, RawTag::Greater),
            b'&' => self.double_or(start, b'&', RawTag::AmpAmp, RawTag::Amp),
            b'|' => self.double_or(start, b'|', RawTag::PipePipe, RawTag::Pipe),
            // Printable ASCII with no assigned token.
            b'\'' | b'#' | b'$' | b'?' | b'@' | b'\\' | b'^' | b'`' | b'~' => {
                self.invalid_byte(start)
            }
            // Control characters (excluding \t, \n, \r), DEL, and
            // non-ASCII bytes.
            1..=8 | 11..=12 | 14..=31 | 127..=255 => self.invalid_byte(start),
        }
    }

    // ─── EOF ────────────────────────────────────────────────────────

    fn eof(&mut self, start: usize) -> RawToken {
        if self.cursor.at_interior_null() {
            self.cursor.bump();
            return self.token(RawTag::InteriorNull, start);
        }
        RawToken {
            tag: RawTag::Eof,
            len: 0,
        }
    }

    // ─── Trivia ─────────────────────────────────────────────────────

    fn whitespace(&mut self, start: usize) -> RawToken {
        while matches!(self.cursor.current(), b' ' | b'\t' | b'\r') {
            self.cursor.bump();
        }
        self.token(RawTag::Whitespace, start)
    }

    fn slash_or_comment(&mut self, start: usize) -> RawToken {
        if self.cursor.peek() == b'/' {
            self.cursor.skip_to_line_end();
            return self.token(RawTag::LineComment, start);
        }
        self.single(start, RawTag::Slash)
    }

    // ─── Names and literals ─────────────────────────────────────────

    fn ident(&mut self, start: usize) -> RawToken {
        while matches!(
            self.cursor.current(),
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        ) {
            self.cursor.bump();
        }
        self.token(RawTag::Ident, start)
    }

    fn number(&mut self, start: usize) -> RawToken {
        self.digits();
        if self.cursor.current() == b'.' && self.cursor.peek().is_ascii_digit() {
            self.cursor.bump();
            self.digits();
            return self.token(RawTag::Float, start);
        }
        self.token(RawTag::Int, start)
    }

    fn digits(&mut self) {
        while self.cursor.current().is_ascii_digit() {
            self.cursor.bump();
        }
    }

    /// String literal. Backslash escapes a following byte without
    /// validating it; an unescaped newline or end of input before the
    /// closing quote yields `UnterminatedStr`.
    fn string(&mut self, start: usize) -> RawToken {
        self.cursor.bump();
        loop {
            match self.cursor.current() {
                b'"' => {
                    self.cursor.bump();
                    return self.token(RawTag::Str, start);
                }
                b'\\' => {
                    self.cursor.bump();
                    if !self.cursor.is_eof() && self.cursor.current() != b'\n' {
                        self.cursor.bump();
                    }
                }
                b'\n' => return self.token(RawTag::UnterminatedStr, start),
                0 if self.cursor.is_eof() => {
                    return self.token(RawTag::UnterminatedStr, start);
                }
                _ => self.cursor.bump(),
            }
        }
    }

    // ─── Operators ──────────────────────────────────────────────────

    fn minus(&mut self, start: usize) -> RawToken {
        if self.cursor.peek() == b'>' {
            self.cursor.bump();
            self.cursor.bump();
            return self.token(RawTag::Arrow, start);
        }
        self.single(start, RawTag::Minus)
    }

    fn equal(&mut self, start: usize) -> RawToken {
        match self.cursor.peek() {
            b'=' => {
                self.cursor.bump();
                self.cursor.bump();
                self.token(RawTag::EqEq, start)
            }
            b'>' => {
                self.cursor.bump();
                self.cursor.bump();
                self.token(RawTag::FatArrow, start)
            }
            _ => self.single(start, RawTag::Eq),
        }
    }

    /// Two-byte operator when the next byte matches, else the one-byte
    /// fallback.
    fn double_or(&mut self, start: usize, second: u8, double: RawTag, fallback: RawTag) -> RawToken {
        if self.cursor.peek() == second {
            self.cursor.bump();
            self.cursor.bump();
            return self.token(double, start);
        }
        self.single(start, fallback)
    }

    fn single(&mut self, start: usize, tag: RawTag) -> RawToken {
        self.cursor.bump();
        self.token(tag, start)
    }

    fn invalid_byte(&mut self, start: usize) -> RawToken {
        self.cursor.bump();
        self.token(RawTag::InvalidByte, start)
    }

    /// Build a token ending at the current cursor position.
    ///
    /// Lengths saturate at `u32::MAX`; sources that large are rejected
    /// upstream before scanning.
    fn token(&self, tag: RawTag, start: usize) -> RawToken {
        let len = u32::try_from(self.cursor.pos() - start).unwrap_or(u32::MAX);
        RawToken { tag, len }
    }
}

/// Scan a whole source string, including the trailing `Eof` token.
///
/// Convenience for tests and tools; the compiler drives [`RawScanner`]
/// incrementally instead.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    let mut scanner = RawScanner::new(Cursor::new(source));
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.tag == RawTag::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
