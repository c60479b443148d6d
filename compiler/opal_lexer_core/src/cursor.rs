//! Sentinel-terminated cursor over source bytes.
//!
//! The cursor owns a copy of the scanned bytes with a `0x00` sentinel
//! appended, so the scanner detects the end of input without bounds
//! checks in the common case. A cursor can be bounded to a prefix of the
//! source: `Cursor::bounded(source, limit)` scans `source[..limit]` and
//! treats `limit` as end of input, while reported positions stay absolute.
//!
//! # Interior Null Bytes
//!
//! If the source contains interior null bytes (U+0000), the cursor
//! distinguishes them from the sentinel by comparing `pos` against the
//! bounded length. A null at `pos < limit` is an interior null (error
//! token); a null at `pos >= limit` is end of input.

/// Sentinel byte appended after the scanned range.
const SENTINEL: u8 = 0x00;

/// Owning byte cursor with a sentinel terminator.
#[derive(Clone, Debug)]
pub struct Cursor {
    /// `source[..limit]` followed by the sentinel.
    buf: Vec<u8>,
    /// Length of the scanned range (excludes the sentinel).
    limit: usize,
    pos: usize,
}

impl Cursor {
    /// Cursor over the whole source.
    pub fn new(source: &str) -> Self {
        Self::bounded(source, source.len())
    }

    /// Cursor over `source[..limit]`. A `limit` past the end of the
    /// source is clamped to the source length.
    pub fn bounded(source: &str, limit: usize) -> Self {
        let limit = limit.min(source.len());
        let mut buf = Vec::with_capacity(limit + 1);
        buf.extend_from_slice(&source.as_bytes()[..limit]);
        buf.push(SENTINEL);
        Cursor {
            buf,
            limit,
            pos: 0,
        }
    }

    /// Current absolute byte position.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the scanned range.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Move the cursor to an absolute position.
    ///
    /// Positions past the limit are clamped — the cursor lands on end of
    /// input rather than inside the sentinel.
    #[inline]
    pub fn seek(&mut self, pos: usize) {
        debug_assert!(pos <= self.limit, "seek past end of scanned range");
        self.pos = pos.min(self.limit);
    }

    /// Byte at the current position. The sentinel (`0x00`) at or past
    /// the limit; see [`Cursor::is_eof`] to disambiguate interior nulls.
    #[inline]
    pub fn current(&self) -> u8 {
        self.buf[self.pos]
    }

    /// Byte after the current position, or the sentinel at the end.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.buf.get(self.pos + 1).copied().unwrap_or(SENTINEL)
    }

    /// Advance by one byte. Saturates at the limit.
    #[inline]
    pub fn bump(&mut self) {
        if self.pos < self.limit {
            self.pos += 1;
        }
    }

    /// True once the cursor has consumed the scanned range.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.limit
    }

    /// True when the current byte is a null inside the scanned range
    /// (as opposed to the sentinel).
    #[inline]
    pub fn at_interior_null(&self) -> bool {
        self.current() == SENTINEL && !self.is_eof()
    }

    /// Advance to the next `\n` (exclusive) or to end of input.
    ///
    /// Bulk skip for line comments: one `memchr` call instead of a
    /// byte-at-a-time loop.
    pub fn skip_to_line_end(&mut self) {
        match memchr::memchr(b'\n', &self.buf[self.pos..self.limit]) {
            Some(i) => self.pos += i,
            None => self.pos = self.limit,
        }
    }
}

#[cfg(test)]
mod tests;
