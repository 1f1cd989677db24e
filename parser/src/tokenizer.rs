//! FILENAME: parser/src/tokenizer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the pipeline. It splits the input on
//! operator and separator characters while accumulating everything else
//! (digits, decimal points, letters) into multi-character runs.
//!
//! SUPPORTED VOCABULARY:
//! - Single-char operators: + - * / % ^
//! - Keyword operators: SQRT RT (recognized at flush time, not per char)
//! - Separators: space ( ) ,

use crate::token::{Operator, Token};

/// Separator characters. They delimit runs; apart from the parentheses they
/// carry no operator semantics.
fn is_separator(ch: char) -> bool {
    matches!(ch, ' ' | '(' | ')' | ',')
}

/// Splits an expression into tokens.
///
/// The scan keeps an accumulating buffer for the current run. An operator or
/// separator character flushes the buffer as one token and then (space
/// excepted) is emitted as its own token. Keyword operators accumulate like
/// any other run and are only recognized when the completed run is looked up
/// against the operator table: a word lookup, not a character lookup.
///
/// Tokenization never fails: a run that is neither a keyword operator nor a
/// well-formed number is carried through as `Token::Number` text and
/// rejected during evaluation.
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut run = String::new();

    for ch in expression.chars() {
        if Operator::from_char(ch).is_some() || is_separator(ch) {
            flush(&mut run, &mut tokens);
            match ch {
                ' ' => {}
                '(' => tokens.push(Token::LParen),
                ')' => tokens.push(Token::RParen),
                ',' => tokens.push(Token::Unrecognized(ch.to_string())),
                _ => {
                    if let Some(op) = Operator::from_char(ch) {
                        tokens.push(Token::Op(op));
                    }
                }
            }
        } else {
            run.push(ch);
        }
    }

    // A trailing run flushes at end of input.
    flush(&mut run, &mut tokens);

    tokens
}

/// Flushes a completed run as a single token, leaving the buffer empty.
/// Classification happens here: a run matching the operator table becomes an
/// operator token, anything else is treated as a number.
fn flush(run: &mut String, tokens: &mut Vec<Token>) {
    if run.is_empty() {
        return;
    }

    let word = std::mem::take(run);
    match Operator::from_word(&word) {
        Some(op) => tokens.push(Token::Op(op)),
        None => tokens.push(Token::Number(word)),
    }
}
