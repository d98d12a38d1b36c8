//! An interpreter for a small total language over unary natural numbers.
//!
//! A program is a list of `def`initions followed by at most one expression:
//!
//! ```text
//! def two = s(s(z))
//! def predIt(x, y) = if(eq(s(x), y)) then x else predIt(s(x), y)
//! def pred(x) = predIt(z, x)
//! def add(a, b) = if(eq(a, z)) then b else add(pred(a), s(b))
//! add(two, s(z))
//! ```
//!
//! Source goes through [`parser::parse`], then [`lower::lower`], then
//! [`eval::eval`]. [`run`] chains the three.
//!
//! Unbound variables and calls to undefined functions evaluate to zero unless
//! [`eval::Policy::Strict`] is selected. Nothing bounds evaluation: a program
//! that recurses forever never returns.

use crate::eval::Policy;
use crate::nat::Nat;

pub mod ast;
pub mod eval;
pub mod exp;
pub mod lexer;
pub mod lower;
pub mod nat;
pub mod parser;

/// Parses, lowers and evaluates `source`, returning the value of its final
/// expression, if it has one.
pub fn run(source: &str) -> Result<Option<Nat>, Error> {
    run_with(source, Policy::default())
}

pub fn run_with(source: &str, policy: Policy) -> Result<Option<Nat>, Error> {
    let ast = parser::parse(source)?;
    let program = lower::lower_with(ast, policy)?;
    Ok(program.try_run(policy)?)
}

#[derive(thiserror::Error, miette::Diagnostic, Debug, PartialEq)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Parser(#[from] parser::Error),
    #[error("error evaluating: {0}")]
    Eval(#[from] eval::Error),
}
