//! Grammar productions for the cps language.
//!
//! This module implements all `parse_*` methods as an extension of `Parser`,
//! one file per grammar layer: definitions, types, statements, expressions.

mod expressions;
mod items;
mod statements;
mod types;
