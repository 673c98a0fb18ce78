//! cps-syntax: lexer, lossless CST, and resilient parser for the cps language.
//!
//! cps is a small C-like systems language with tail-call functions and
//! coroutines as top-level constructs. This crate turns source text into a
//! field-tagged concrete syntax tree plus a list of diagnostics. The tree is
//! always produced; syntax errors never abort the parse.
//!
//! # Example
//!
//! ```
//! use cps_syntax::ParseBuilder;
//!
//! let source = "fn add(int a, int b) int { return a + b }";
//! let parsed = ParseBuilder::new(source).name("add.cps").parse().expect("out of fuel");
//!
//! assert!(parsed.is_valid());
//! let def = parsed.root().defs().next().unwrap();
//! assert_eq!(def.name().unwrap().text(), "add");
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod document;
pub mod parser;

#[cfg(test)]
pub mod test_utils;

pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, DiagnosticsPrinter, ErrorClass};
pub use document::{
    AstPrinter, CstPrinter, LineCol, LineIndex, ParseBuilder, ParseConfig, Parsed, Source, Span,
    parse,
};
pub use parser::{SyntaxKind, SyntaxNode, SyntaxToken, ast};

/// Fatal conditions that stop a parse before it completes.
///
/// Syntax errors are not represented here: they are collected as
/// [`Diagnostics`] next to the (partial) tree.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// Execution fuel exhausted (too many tokens consumed).
    #[error("execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (input nested too deeply).
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    /// The caller's cancellation callback fired between definitions.
    #[error("parse cancelled")]
    Cancelled,
}

/// Result type for parse operations.
pub type Result<T> = std::result::Result<T, Error>;
