//! Raw token tags.
//!
//! Error conditions are encoded as tag variants, not as `Result::Err` —
//! the scanner itself never fails, it just labels what it saw. Trivia
//! (whitespace, newlines, comments) are ordinary tokens here; dropping
//! them is the integration layer's job.

/// Tag of a raw token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RawTag {
    // ─── Trivia ─────────────────────────────────────────────────────
    /// Run of spaces, tabs, or carriage returns.
    Whitespace,
    /// A single `\n`.
    Newline,
    /// `//` to end of line (newline excluded).
    LineComment,

    // ─── Literals and names ─────────────────────────────────────────
    /// `[A-Za-z_][A-Za-z0-9_]*`. Keyword resolution happens upstream.
    Ident,
    Int,
    Float,
    Str,

    // ─── Punctuation and operators ──────────────────────────────────
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,
    Comma,
    Dot,
    Colon,
    Semi,
    Plus,
    Minus,
    Arrow,
    Star,
    Slash,
    Percent,
    Eq,
    EqEq,
    FatArrow,
    Bang,
    BangEq,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    Amp,
    AmpAmp,
    Pipe,
    PipePipe,

    // ─── Error tags ─────────────────────────────────────────────────
    /// String literal with no closing `"` before end of line or EOF.
    UnterminatedStr,
    /// Byte outside the Opal source alphabet.
    InvalidByte,
    /// Null byte before the end of the source.
    InteriorNull,

    /// End of the scanned range. `len` is always 0.
    Eof,
}

impl RawTag {
    /// Whitespace, newlines, and comments — tokens an integration layer
    /// drops before a parser sees the stream.
    #[inline]
    pub fn is_trivia(self) -> bool {
        matches!(
            self,
            RawTag::Whitespace | RawTag::Newline | RawTag::LineComment
        )
    }

    /// Tags labelling input the scanner could not accept.
    #[inline]
    pub fn is_error(self) -> bool {
        matches!(
            self,
            RawTag::UnterminatedStr | RawTag::InvalidByte | RawTag::InteriorNull
        )
    }
}

/// A raw token: tag plus byte length. Positions are implicit — the
/// consumer tracks the cursor position before each `next_token` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawToken {
    pub tag: RawTag,
    pub len: u32,
}
