use super::*;

#[test]
fn keywords_resolve() {
    assert_eq!(TerminalKind::from_ident("fn"), Some(TerminalKind::Fn));
    assert_eq!(TerminalKind::from_ident("init"), Some(TerminalKind::Init));
    assert_eq!(TerminalKind::from_ident("while"), Some(TerminalKind::While));
}

#[test]
fn non_keywords_do_not_resolve() {
    assert_eq!(TerminalKind::from_ident("fnord"), None);
    assert_eq!(TerminalKind::from_ident("Fn"), None);
    assert_eq!(TerminalKind::from_ident(""), None);
}

#[test]
fn eof_predicate() {
    assert!(TerminalKind::Eof.is_eof());
    assert!(!TerminalKind::Start.is_eof());
    assert!(!TerminalKind::Ident.is_eof());
}
