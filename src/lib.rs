//! Infix arithmetic for a keypad calculator.
//!
//! Expressions are turned into postfix with the shunting-yard algorithm and
//! then evaluated on a stack of `f64`.
//!
//! ```
//! assert_eq!(thin_calc::evaluate_expression("(1+2)*3"), Ok(9.0));
//! assert_eq!(thin_calc::convert("3+4*2").to_string(), "3 4 2 * +");
//! ```

mod config;
mod error;
pub mod keypad;
mod parser;
mod rpneval;
mod rpnprint;
mod scanner;
mod token;

pub use crate::config::CalcConfig;
pub use crate::error::{ConfigError, EvalFailure};
pub use crate::parser::{RPNExpr, ShuntingParser};
pub use crate::rpneval::{evaluate, evaluate_str};
pub use crate::token::{MathToken, Operator};

/// Infix to postfix, skipping anything it doesn't recognize.
pub fn convert(expr: &str) -> RPNExpr {
    ShuntingParser::parse_str(expr)
}

pub fn evaluate_expression(expr: &str) -> Result<f64, EvalFailure> {
    evaluate(&convert(expr))
}

pub fn evaluate_expression_with(expr: &str, config: &CalcConfig) -> Result<f64, EvalFailure> {
    let rpn = ShuntingParser::parse_str_with(expr, config)?;
    evaluate(&rpn)
}
