//! Diet-range computation and queries.
//!
//! [`build`] walks a declaration snapshot and produces the set of source
//! intervals the diagnosis pass must skip (bodies that need no second
//! look) or flag (regions the first parse already gave up on). The
//! resulting [`RangeSet`] is sorted by start offset and — because sibling
//! bodies are disjoint by construction — non-overlapping. Queries rely on
//! both properties.

use opal_ir::Span;
use tracing::trace;

use crate::decl::TypeDecl;

/// Why an interval is in the set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeFlag {
    /// Body parsed fine the first time; skip it silently.
    None,
    /// The declaration's signature is too malformed to diagnose at all.
    Ignore,
    /// Body region whose opening brace was never found.
    LbraceMissing,
}

/// One interval to skip or flag during re-lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipRange {
    pub span: Span,
    pub flag: RangeFlag,
}

/// Sorted, non-overlapping set of [`SkipRange`]s.
///
/// Built once per diagnosis attempt, immutable thereafter.
#[derive(Debug, Clone, Default)]
pub struct RangeSet {
    ranges: Vec<SkipRange>,
}

/// Initial accumulator capacity. Most files produce a handful of ranges;
/// `Vec` doubles from here when a type has more members.
const INITIAL_CAPACITY: usize = 8;

/// Compute the diet ranges for a declaration snapshot.
///
/// Walk order over the tree does not matter; the result is sorted by
/// start offset afterwards. Zero declarations produce an empty set.
pub fn build(types: &[TypeDecl]) -> RangeSet {
    let mut ranges = Vec::with_capacity(INITIAL_CAPACITY);
    collect(types, &mut ranges);
    RangeSet::new(ranges)
}

fn collect(types: &[TypeDecl], out: &mut Vec<SkipRange>) {
    for type_decl in types {
        collect(&type_decl.nested, out);

        for method in &type_decl.methods {
            if !method.ignored_body {
                continue;
            }
            // A signature whose source range collapses onto the body, or
            // a body running to the very end of the declaration (no
            // closing token), is beyond diagnosing: suppress the whole
            // declaration.
            if method.source_end == method.body.start
                || method.body.end == method.declaration.end
            {
                add_range(out, method.declaration, RangeFlag::Ignore);
            } else {
                let flag = if method.body.start == method.source_end + 1 {
                    RangeFlag::LbraceMissing
                } else {
                    RangeFlag::None
                };
                add_range(out, method.body, flag);
            }
        }

        for initializer in &type_decl.initializers {
            if initializer.declaration.end == initializer.body.end {
                add_range(out, initializer.declaration, RangeFlag::Ignore);
            } else {
                add_range(out, initializer.body, RangeFlag::None);
            }
        }
    }
}

fn add_range(out: &mut Vec<SkipRange>, span: Span, flag: RangeFlag) {
    trace!(start = span.start, end = span.end, flag = ?flag, "diet range");
    out.push(SkipRange { span, flag });
}

impl RangeSet {
    /// Build a set from unordered ranges: sort by start offset and trim
    /// the backing storage to exact size.
    pub fn new(mut ranges: Vec<SkipRange>) -> Self {
        ranges.sort_unstable_by_key(|r| r.span.start);
        ranges.shrink_to_fit();
        let set = RangeSet { ranges };
        debug_assert!(set.is_sorted_disjoint(), "overlapping declaration bodies");
        set
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&SkipRange> {
        self.ranges.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SkipRange> {
        self.ranges.iter()
    }

    /// True iff some interval fully encloses `[start, end)`.
    ///
    /// Linear left-to-right scan that stops as soon as an interval starts
    /// past `end`. The early exit is only correct because the set is
    /// sorted and non-overlapping — the construction invariant, asserted
    /// in debug builds.
    pub fn contains(&self, start: u32, end: u32) -> bool {
        debug_assert!(self.is_sorted_disjoint());
        for range in &self.ranges {
            if range.span.start > end {
                return false;
            }
            if range.span.encloses(Span::new(start, end)) {
                return true;
            }
        }
        false
    }

    /// Index of the last interval starting at or before `end`, or `None`
    /// when every interval starts past `end`.
    ///
    /// Tells a consumer how far ahead of `end` it may skip without
    /// crossing into a later interval.
    pub fn previous_interval(&self, end: u32) -> Option<usize> {
        debug_assert!(self.is_sorted_disjoint());
        let first_after = self.ranges.partition_point(|r| r.span.start <= end);
        first_after.checked_sub(1)
    }

    /// Construction invariant: sorted by start, pairwise disjoint.
    /// Ends are exclusive, so a range may begin exactly where the
    /// previous one ends.
    fn is_sorted_disjoint(&self) -> bool {
        self.ranges
            .windows(2)
            .all(|pair| pair[0].span.end <= pair[1].span.start)
    }
}

impl<'a> IntoIterator for &'a RangeSet {
    type Item = &'a SkipRange;
    type IntoIter = std::slice::Iter<'a, SkipRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
