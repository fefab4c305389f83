//! Small, safe arithmetic expression language.
//!
//! ```
//! assert_eq!(calcexpr::calculate("2 ^ (32 - 1) - 1").unwrap(), 2147483647.0);
//! assert_eq!(calcexpr::calculate("max(6 % 4, -1)").unwrap(), 2.0);
//! ```
//!
//! Two operators behave differently from most languages:
//!
//! * `^` is exponentiation, not XOR.
//! * `%`, `&` and `|` truncate both operands to `i64` before operating, so
//!   fractional parts are silently discarded (`7.9 % 2.5 == 1`).

pub mod ast;
pub mod error;
pub mod functions;

pub use ast::{ASTNode, Evaluator, Operator, Parser, Sign};
pub use error::{Error, EvalError, ParseError};
pub use functions::{Builtin, Registry};

use log::debug;
use rayon::prelude::*;

/// Parses an expression into a syntax tree without evaluating it.
pub fn parse(source: &str) -> Result<ASTNode, ParseError> {
    Parser::parse_expression(source)
}

/// Evaluates a syntax tree against the global builtin registry.
pub fn evaluate(ast: &ASTNode) -> Result<f64, EvalError> {
    Evaluator::default().evaluate(ast)
}

/// Parses then evaluates `expression`, returning the first error from either phase.
pub fn calculate(expression: &str) -> Result<f64, Error> {
    let ast = parse(expression)?;
    let value = evaluate(&ast)?;
    debug!("{} = {}", expression, value);
    Ok(value)
}

/// Calculates every expression in parallel. Results keep the input order.
pub fn calculate_all<S>(expressions: &[S]) -> Vec<Result<f64, Error>>
where
    S: AsRef<str> + Sync,
{
    expressions
        .par_iter()
        .map(|expression| calculate(expression.as_ref()))
        .collect()
}
