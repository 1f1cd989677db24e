//! FILENAME: engine/src/calculator.rs
//! PURPOSE: Facade running the full pipeline with structural validation.
//! CONTEXT: Outer layers (a request handler, a REPL) call
//! `evaluate_expression` with the raw expression string and get back either
//! a `Calculation` (the result plus every intermediate stage for
//! diagnostics) or a typed `EvalError`.

use log::{debug, trace};
use parser::{to_postfix, tokenize, Token};
use serde::Serialize;

use crate::error::EvalError;
use crate::evaluator::evaluate;

/// The outcome of evaluating one expression, with the intermediate stages
/// kept for inspection and formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    /// The expression exactly as the caller supplied it.
    pub expression: String,
    /// Literal texts of the tokens, in scan order.
    pub tokens: Vec<String>,
    /// Literal texts of the postfix (reverse Polish) sequence.
    pub postfix: Vec<String>,
    /// The computed value.
    pub result: f64,
}

impl std::fmt::Display for Calculation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Original expression: {}", self.expression)?;
        writeln!(f, "Tokenized expression: [{}]", self.tokens.join(", "))?;
        writeln!(f, "Reverse Polish Notation: [{}]", self.postfix.join(", "))?;
        write!(f, "Final result: {:.2}", self.result)
    }
}

/// Evaluates an infix arithmetic expression.
///
/// Pipeline: tokenize, validate parenthesis balance, convert to postfix,
/// evaluate. Balance is checked against the token stream rather than the
/// postfix output: conversion strips parentheses, so a postfix-side count
/// would accept any input.
pub fn evaluate_expression(expression: &str) -> Result<Calculation, EvalError> {
    let tokens = tokenize(expression);
    trace!("tokenized {:?} into {} tokens", expression, tokens.len());

    check_balance(&tokens)?;

    let postfix = to_postfix(&tokens);
    trace!("postfix order: {:?}", postfix);

    let result = evaluate(&postfix)?;

    Ok(Calculation {
        expression: expression.to_string(),
        tokens: tokens.iter().map(Token::to_string).collect(),
        postfix: postfix.iter().map(Token::to_string).collect(),
        result,
    })
}

/// Depth scan over the token stream: a `)` may never overtake the `(` count
/// seen so far, and every `(` must be closed by the end. Catches the
/// mis-ordered `)(` case that a plain occurrence count would pass.
fn check_balance(tokens: &[Token]) -> Result<(), EvalError> {
    let mut depth: i64 = 0;

    for token in tokens {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth -= 1;
                if depth < 0 {
                    debug!("unbalanced expression: ')' with no open '('");
                    return Err(EvalError::UnbalancedParentheses);
                }
            }
            _ => {}
        }
    }

    if depth != 0 {
        debug!("unbalanced expression: {} unclosed '('", depth);
        return Err(EvalError::UnbalancedParentheses);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence() {
        assert_eq!(evaluate_expression("2 + 3 * 4").unwrap().result, 14.0);
        assert_eq!(evaluate_expression("(2 + 3) * 4").unwrap().result, 20.0);
    }

    #[test]
    fn test_left_associativity() {
        // 10 - 3 - 2 groups as (10 - 3) - 2, not 10 - (3 - 2).
        assert_eq!(evaluate_expression("10 - 3 - 2").unwrap().result, 5.0);
    }

    #[test]
    fn test_unary_square_root() {
        assert_eq!(evaluate_expression("SQRT(4)").unwrap().result, 2.0);
    }

    #[test]
    fn test_division_and_remainder() {
        assert_eq!(evaluate_expression("300 % 200").unwrap().result, 100.0);
        assert_eq!(evaluate_expression("300 / 200").unwrap().result, 1.5);
    }

    #[test]
    fn test_unclosed_paren_is_rejected() {
        assert_eq!(
            evaluate_expression("(1 + 2"),
            Err(EvalError::UnbalancedParentheses)
        );
    }

    #[test]
    fn test_stray_closing_paren_is_rejected() {
        assert_eq!(
            evaluate_expression("1 + 2)"),
            Err(EvalError::UnbalancedParentheses)
        );
    }

    #[test]
    fn test_misordered_parens_are_rejected() {
        // Counts match but the ')' comes first; the depth scan catches it.
        assert_eq!(
            evaluate_expression(")("),
            Err(EvalError::UnbalancedParentheses)
        );
    }

    #[test]
    fn test_comma_call_form_is_unsupported() {
        assert_eq!(
            evaluate_expression("RT(4,2)"),
            Err(EvalError::UnknownToken(",".to_string()))
        );
    }

    #[test]
    fn test_calculation_keeps_intermediate_stages() {
        let calc = evaluate_expression("2 + 3 * 4").unwrap();
        assert_eq!(calc.expression, "2 + 3 * 4");
        assert_eq!(calc.tokens, vec!["2", "+", "3", "*", "4"]);
        assert_eq!(calc.postfix, vec!["2", "3", "4", "*", "+"]);
        assert_eq!(calc.result, 14.0);
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let first = evaluate_expression("SQRT(2) * SQRT(2)").unwrap();
        let second = evaluate_expression("SQRT(2) * SQRT(2)").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_display_renders_diagnostic_report() {
        let calc = evaluate_expression("300/200").unwrap();
        assert_eq!(
            calc.to_string(),
            "Original expression: 300/200\n\
             Tokenized expression: [300, /, 200]\n\
             Reverse Polish Notation: [300, 200, /]\n\
             Final result: 1.50"
        );
    }
}
