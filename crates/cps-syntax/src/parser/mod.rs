//! Parser infrastructure for the cps language.
//!
//! # Architecture
//!
//! This parser produces a lossless concrete syntax tree (CST) via Rowan's green tree builder.
//!
//! - Zero-copy parsing: tokens carry spans, text sliced only when building tree nodes
//! - Trivia buffering: whitespace/comments collected, then attached before the next node
//! - Checkpoint-based wrapping: binary expressions, calls and failed definitions are
//!   wrapped retroactively
//! - Typed views (`ast`) and named fields (`fields`) are layered over the raw tree
//!
//! # Recovery Strategy
//!
//! The parser is resilient: it always produces a tree whose text equals the source.
//!
//! 1. The first error inside a definition is reported; the parser then unwinds silently
//! 2. Tokens up to the next definition start are skipped, and the whole definition
//!    becomes a single `SyntaxKind::Error` node
//! 3. Runs of tokens that cannot start a definition become one `Error` node each
//! 4. Lexer error tokens are reported as lexical diagnostics in place of the expectation
//!    they broke
//!
//! Fuel exhaustion (exec_fuel, recursion_fuel) and cancellation return an actual error.

pub mod ast;
pub mod cst;
pub mod fields;
pub mod lexer;

mod core;
mod grammar;
mod invariants;

#[cfg(test)]
mod tests;

pub use cst::{Category, CpsLang, SyntaxElement, SyntaxKind, SyntaxNode, SyntaxToken};

pub use core::{ParseOutput, Parser};
