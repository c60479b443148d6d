//! Declaration-range snapshot.
//!
//! The diagnosis pass does not walk the caller's AST directly; the caller
//! flattens the positions it needs into this small value tree once per
//! attempt. Plain fields carry no executable body and contribute no skip
//! ranges, so the snapshot omits them.

use opal_ir::Span;

/// One type declaration with its members and nested types.
#[derive(Clone, Debug, Default)]
pub struct TypeDecl {
    /// Full declaration range, from the first modifier to the closing
    /// brace (or wherever the declaration actually stopped).
    pub declaration: Span,
    pub nested: Vec<TypeDecl>,
    pub methods: Vec<MethodDecl>,
    pub initializers: Vec<InitializerDecl>,
}

/// A method or constructor.
#[derive(Clone, Copy, Debug)]
pub struct MethodDecl {
    /// Full declaration range.
    pub declaration: Span,
    /// Body range, between the braces.
    pub body: Span,
    /// End of the signature proper (last offset before the body region).
    pub source_end: u32,
    /// True when the body was not successfully diagnosed in the prior
    /// pass. Evaluated by the caller while taking the snapshot.
    pub ignored_body: bool,
}

/// An initializer block.
#[derive(Clone, Copy, Debug)]
pub struct InitializerDecl {
    /// Full declaration range.
    pub declaration: Span,
    /// Body range. Equal end offsets with `declaration` mean the block
    /// never got a real body.
    pub body: Span,
}
