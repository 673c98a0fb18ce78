pub mod ast;
pub mod check;
pub mod cst;
pub mod run_common;
pub mod tokens;
