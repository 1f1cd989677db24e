//! FILENAME: engine/src/error.rs

use parser::Operator;
use thiserror::Error;

/// Failures raised while validating or evaluating an expression.
///
/// Every variant aborts the evaluation in progress. There is no retry or
/// partial-result path: the caller gets the typed failure and still holds
/// the expression text it passed in.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    #[error("parentheses are not balanced")]
    UnbalancedParentheses,

    #[error("not a number: {0}")]
    NumberFormat(String),

    #[error("operator {0} is missing an operand")]
    StackUnderflow(Operator),

    #[error("expression reduced to {0} values instead of exactly one")]
    IncompleteExpression(usize),

    #[error("unrecognized token: {0}")]
    UnknownToken(String),
}
