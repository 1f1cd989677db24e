//! FILENAME: engine/src/evaluator.rs
//! PURPOSE: Evaluates a postfix token sequence to a single numeric result.
//! CONTEXT: This is the final stage of the pipeline. The converter has
//! already removed parentheses and encoded precedence into token order, so
//! evaluation is one pass over the sequence with an operand stack.
//!
//! SUPPORTED OPERATIONS:
//! - Binary: +, -, *, /, % (real-valued remainder), ^ (power),
//!           RT (n-th root: `3 RT 8` is the cube root of 8)
//! - Unary: SQRT

use parser::{Operator, Token};

use crate::error::EvalError;

/// Applies an operator to its popped operands.
///
/// `a` is the most recently pushed operand. Binary operators receive the
/// operand pushed before it as `b` and compute `b <op> a`, so `10 3 -`
/// yields 7. For the unary SQRT, `b` is not consumed and is passed as 0.
fn apply(op: Operator, a: f64, b: f64) -> f64 {
    match op {
        Operator::Sqrt => a.sqrt(),
        Operator::Rt => a.powf(1.0 / b),
        Operator::Add => b + a,
        Operator::Sub => b - a,
        Operator::Mul => b * a,
        Operator::Div => b / a,
        Operator::Rem => b % a,
        Operator::Pow => b.powf(a),
    }
}

/// Evaluates a postfix (reverse Polish) token sequence.
///
/// Numbers are parsed and pushed; operators pop their operands (1 for SQRT,
/// 2 for everything else) and push the intermediate result. When the
/// sequence is consumed, exactly one value must remain on the stack; that
/// value is the result.
///
/// Errors:
/// - `NumberFormat`: a number token does not parse as a finite f64.
/// - `StackUnderflow`: an operator found fewer operands than its arity.
/// - `UnknownToken`: a token that is neither number nor operator reached
///   evaluation (e.g. a stray comma carried through the converter).
/// - `IncompleteExpression`: zero or several values remained at the end.
pub fn evaluate(postfix: &[Token]) -> Result<f64, EvalError> {
    let mut stack: Vec<f64> = Vec::new();

    for token in postfix {
        match token {
            Token::Number(text) => {
                let value: f64 = text
                    .parse()
                    .map_err(|_| EvalError::NumberFormat(text.clone()))?;
                // "inf" and "NaN" parse as f64 but are not part of the
                // numeric vocabulary.
                if !value.is_finite() {
                    return Err(EvalError::NumberFormat(text.clone()));
                }
                stack.push(value);
            }

            Token::Op(op) => {
                let a = stack.pop().ok_or(EvalError::StackUnderflow(*op))?;
                let b = if op.arity() == 1 {
                    0.0
                } else {
                    stack.pop().ok_or(EvalError::StackUnderflow(*op))?
                };
                stack.push(apply(*op, a, b));
            }

            Token::Unrecognized(text) => {
                return Err(EvalError::UnknownToken(text.clone()));
            }

            // The converter never emits parentheses. Reject rather than
            // panic if a caller hands over a sequence that is not postfix.
            Token::LParen | Token::RParen => {
                return Err(EvalError::UnknownToken(token.to_string()));
            }
        }
    }

    match stack.as_slice() {
        [value] => Ok(*value),
        leftover => Err(EvalError::IncompleteExpression(leftover.len())),
    }
}
