use super::*;
use pretty_assertions::assert_eq;

#[test]
fn new_and_len() {
    let span = Span::new(4, 17);
    assert_eq!(span.start, 4);
    assert_eq!(span.end, 17);
    assert_eq!(span.len(), 13);
    assert!(!span.is_empty());
}

#[test]
fn at_is_empty() {
    let span = Span::at(9);
    assert_eq!(span.len(), 0);
    assert!(span.is_empty());
}

#[test]
fn contains_offset_is_half_open() {
    let span = Span::new(10, 20);
    assert!(!span.contains_offset(9));
    assert!(span.contains_offset(10));
    assert!(span.contains_offset(19));
    assert!(!span.contains_offset(20));
}

#[test]
fn encloses_includes_boundaries() {
    let outer = Span::new(10, 50);
    assert!(outer.encloses(Span::new(10, 50)));
    assert!(outer.encloses(Span::new(12, 48)));
    assert!(!outer.encloses(Span::new(9, 20)));
    assert!(!outer.encloses(Span::new(20, 51)));
}

#[test]
fn try_from_range_rejects_oversized() {
    let big = u32::MAX as usize + 1;
    assert_eq!(
        Span::try_from_range(big..big + 1),
        Err(SpanError::StartTooLarge(big))
    );
    assert_eq!(
        Span::try_from_range(0..big),
        Err(SpanError::EndTooLarge(big))
    );
}

#[test]
fn display_and_debug_agree() {
    let span = Span::new(3, 8);
    assert_eq!(format!("{span}"), "3..8");
    assert_eq!(format!("{span:?}"), "3..8");
}
