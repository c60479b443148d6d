//! Bounded, index-addressable token cache.
//!
//! [`TokenWindow`] presents the diagnosis parser with a monotonically
//! advancing token stream addressed by absolute index, while physically
//! retaining only the most recent `capacity` tokens in a ring. Tokens
//! whose span lies inside a skip interval never surface at any index;
//! lexemes the scanner rejects are retried past silently. Querying ahead
//! of the frontier pulls from the scanner on demand; querying behind the
//! retained window is a recoverable [`EvictedIndex`] error.
//!
//! A separate read cursor (`advance`/`reset`/`reset_to`) supports
//! backtracking grammar recovery: rewinding only moves the cursor, it
//! never evicts or re-lexes cached tokens.
//!
//! One window serves one diagnosis attempt on one thread; `&mut self`
//! on every mutating operation makes concurrent use unrepresentable.

use opal_ir::{Span, TerminalKind, Token};
use thiserror::Error;
use tracing::trace;

use crate::range::RangeSet;
use crate::ring::Ring;
use crate::scan::{ScanError, Scanner};

/// A token index that has fallen out of the retained window.
///
/// Recoverable: it means the caller's recovery strategy looked further
/// back than `capacity` tokens behind the frontier. Surfaced as an
/// error, never silently substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("token index {index} has left the retained window (oldest resident is {oldest})")]
pub struct EvictedIndex {
    /// The index that was requested.
    pub index: usize,
    /// The oldest index still resident at the time of the request.
    pub oldest: usize,
}

/// Bounded trailing cache over a [`Scanner`], with interval skipping.
pub struct TokenWindow<'r, S> {
    scanner: S,
    skip: &'r RangeSet,
    ring: Ring<Token>,
    /// Index of the most recently cached token (the frontier). Slot 0 is
    /// seeded at construction, so this starts at 0.
    next_index: usize,
    /// Index of the first end-of-stream token, once observed. Latches:
    /// after this is set the scanner is never asked again.
    eof_index: Option<usize>,
    /// Read cursor for the pull API. `None` means rewound before slot 0.
    cursor: Option<usize>,
}

impl<'r, S: Scanner> TokenWindow<'r, S> {
    /// Seed a window over `range`.
    ///
    /// Slot 0 is pre-populated with a synthetic token of `first_kind` at
    /// `range.start`; the scanner is reset to scan exactly that range.
    ///
    /// # Panics
    /// Panics if `capacity` is zero.
    pub fn new(
        capacity: usize,
        mut scanner: S,
        skip: &'r RangeSet,
        first_kind: TerminalKind,
        range: Span,
    ) -> Self {
        scanner.reset_range(range.start, range.end);
        let mut ring = Ring::with_capacity(capacity);
        let line = scanner.line_of(range.start);
        ring.put(0, Token::synthetic(first_kind, range.start, line));
        TokenWindow {
            scanner,
            skip,
            ring,
            next_index: 0,
            eof_index: None,
            cursor: None,
        }
    }

    /// The token at `index`.
    ///
    /// Indices past the end of the stream resolve to the end-of-stream
    /// token. Indices beyond the frontier trigger scanner pulls up to
    /// and including `index`. Indices older than the retained window
    /// fail with [`EvictedIndex`].
    pub fn token(&mut self, index: usize) -> Result<&Token, EvictedIndex> {
        let mut index = self.clamp(index);
        while self.eof_index.is_none() && index > self.next_index {
            self.pull();
            index = self.clamp(index);
        }
        self.ring.get(index).ok_or_else(|| EvictedIndex {
            index,
            oldest: self.oldest_resident(),
        })
    }

    /// Advance the read cursor and return its new index.
    ///
    /// The first call after construction or [`reset`](Self::reset)
    /// yields 0. Once the end of the stream is known the cursor saturates
    /// there.
    pub fn advance(&mut self) -> usize {
        let next = match self.cursor {
            None => 0,
            Some(index) => self.next_of(index),
        };
        self.cursor = Some(next);
        next
    }

    /// Current read cursor, or `None` when rewound before the start.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The index before `index`, saturating at 0.
    pub fn previous(&self, index: usize) -> usize {
        index.saturating_sub(1)
    }

    /// Rewind the read cursor before slot 0.
    pub fn reset(&mut self) {
        self.cursor = None;
    }

    /// Rewind the read cursor onto the predecessor of `index`, so
    /// advancing resumes from there. Cached tokens are untouched — no
    /// re-lexing happens on the way back.
    pub fn reset_to(&mut self, index: usize) {
        self.cursor = Some(self.previous(index));
    }

    /// True when the source line number increased between `index - 1`
    /// and `index`. Always true for index 0.
    pub fn after_newline(&mut self, index: usize) -> Result<bool, EvictedIndex> {
        if index < 1 {
            return Ok(true);
        }
        let previous_line = self.token(index - 1)?.line;
        let line = self.token(index)?.line;
        Ok(previous_line < line)
    }

    /// True when `index` is reachable: not evicted, and not past the end
    /// of the stream. Indices ahead of the frontier count as inside —
    /// they are reachable by pulling.
    pub fn is_inside_stream(&self, index: usize) -> bool {
        if self.eof_index.is_some_and(|eof| index > eof) {
            return false;
        }
        index + self.ring.capacity() > self.next_index
    }

    /// Index of the end-of-stream token, once observed.
    pub fn eof_index(&self) -> Option<usize> {
        self.eof_index
    }

    /// Number of token slots physically retained.
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    // ─── Field projections ──────────────────────────────────────────

    pub fn kind(&mut self, index: usize) -> Result<TerminalKind, EvictedIndex> {
        self.token(index).map(|t| t.kind)
    }

    pub fn text(&mut self, index: usize) -> Result<&str, EvictedIndex> {
        self.token(index).map(|t| &*t.text)
    }

    pub fn line(&mut self, index: usize) -> Result<u32, EvictedIndex> {
        self.token(index).map(|t| t.line)
    }

    pub fn start(&mut self, index: usize) -> Result<u32, EvictedIndex> {
        self.token(index).map(|t| t.span.start)
    }

    pub fn end(&mut self, index: usize) -> Result<u32, EvictedIndex> {
        self.token(index).map(|t| t.span.end)
    }

    // ─── Internals ──────────────────────────────────────────────────

    /// Successor of `index`, saturating at the end of the stream once
    /// known.
    fn next_of(&self, index: usize) -> usize {
        match self.eof_index {
            Some(eof) => (index + 1).min(eof),
            None => index + 1,
        }
    }

    fn clamp(&self, index: usize) -> usize {
        match self.eof_index {
            Some(eof) if index > eof => eof,
            _ => index,
        }
    }

    /// Oldest index still resident in the ring.
    fn oldest_resident(&self) -> usize {
        self.next_index.saturating_sub(self.ring.capacity() - 1)
    }

    /// Pull one visible token from the scanner into the cache.
    ///
    /// Loops past skipped intervals and rejected lexemes; exactly one
    /// slot is filled per call. Must not be called once the end of the
    /// stream has been observed.
    fn pull(&mut self) {
        debug_assert!(self.eof_index.is_none(), "pull after end of stream");
        loop {
            match self.scanner.next_terminal() {
                Err(ScanError::InvalidInput { offset }) => {
                    trace!(offset, "scanner rejected lexeme, retrying");
                }
                Ok(TerminalKind::Eof) => {
                    let offset = self.scanner.terminal_start();
                    let line = self.scanner.line_of(offset);
                    self.next_index += 1;
                    self.ring
                        .put(self.next_index, Token::synthetic(TerminalKind::Eof, offset, line));
                    self.eof_index = Some(self.next_index);
                    trace!(index = self.next_index, "end of stream");
                    return;
                }
                Ok(kind) => {
                    let start = self.scanner.terminal_start();
                    let end = self.scanner.terminal_end();
                    if self.skip.contains(start, end) {
                        trace!(start, end, kind = ?kind, "token inside skip interval");
                        continue;
                    }
                    let token = Token::new(
                        kind,
                        self.scanner.terminal_text(),
                        Span::new(start, end),
                        self.scanner.line_of(end),
                    );
                    self.next_index += 1;
                    trace!(index = self.next_index, kind = ?kind, start, end, "cached");
                    self.ring.put(self.next_index, token);
                    return;
                }
            }
        }
    }
}
