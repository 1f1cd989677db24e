//! FILENAME: engine/src/lib.rs
//! PURPOSE: Main library entry point for the expression engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod calculator;
pub mod error;
pub mod evaluator;

// Re-export commonly used types at the crate root
pub use calculator::{evaluate_expression, Calculation};
pub use error::EvalError;
pub use evaluator::evaluate;
