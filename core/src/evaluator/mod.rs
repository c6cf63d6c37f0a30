//! Single-pass precedence-climbing evaluator.
//!
//! The evaluator reads tokens and folds values in the same pass; there is no
//! syntax tree. Precedence levels are walked from the loosest (the last level
//! of the [`OperatorTable`](crate::parser::OperatorTable)) down to level 0,
//! where unary minus, literals, calls and parenthesized groups live.
//!
//! ## Design Principles
//!
//! - **Never panic**: malformed input surfaces as a [`CompilationError`](crate::api::CompilationError)
//! - **Stack-safe**: nesting depth is bounded by [`EngineOptions::max_depth`](crate::api::EngineOptions)
//! - **Context-agnostic**: every operator, conversion and call goes through the
//!   [`ExecutionContext`](crate::context::ExecutionContext)
//!
//! ## Example
//!
//! ```
//! use funclang_core::api::EngineOptions;
//! use funclang_core::context::Runtime;
//! use funclang_core::evaluator::eval;
//! use funclang_core::parser::{OperatorTable, TokenPattern};
//! use funclang_core::values::Value;
//!
//! let table = OperatorTable::arithmetic();
//! let pattern = TokenPattern::new(&table).unwrap();
//! let mut runtime = Runtime::new();
//!
//! let result = eval(&table, &pattern, "1 + 2 * 3", &mut runtime, &EngineOptions::default());
//! assert_eq!(result.unwrap(), Value::number(7.0));
//! ```

mod eval;


pub use eval::Evaluator;

use crate::{
    api::{EngineOptions, Error},
    context::ExecutionContext,
    parser::{OperatorTable, TokenPattern},
    values::Value,
};

/// Evaluate `source` against `context`.
///
/// `pattern` must have been built from `table`.
pub fn eval<C: ExecutionContext + ?Sized>(
    table: &OperatorTable,
    pattern: &TokenPattern,
    source: &str,
    context: &mut C,
    options: &EngineOptions,
) -> Result<Value, Error> {
    Evaluator::new(table, pattern.tokenize(source), context, options).eval()
}
