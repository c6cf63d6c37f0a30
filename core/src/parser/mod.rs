//! Operator table and tokenizer.
//!
//! There is no syntax tree: the evaluator consumes tokens straight from the
//! [`Tokenizer`] and folds values as it goes.

pub mod operator_table;
pub mod tokenizer;

pub use operator_table::OperatorTable;
pub use tokenizer::{Token, TokenKind, TokenPattern, Tokenizer};

/// Type-conversion operator, always registered at level 0.
pub const AS_OPERATOR: &str = "as";

/// Postfix chain operator: `f(x)->g(y)` calls `g` with `f(x)` as receiver.
pub const CHAIN_OPERATOR: &str = "->";

/// Prefix negation, recognized only at the tightest level.
pub const UNARY_MINUS: &str = "-";

pub const LEFT_PAREN: &str = "(";
pub const RIGHT_PAREN: &str = ")";
pub const COMMA: &str = ",";

/// Symbols that can never be registered as ordinary operators.
pub const RESERVED_SYMBOLS: &[&str] = &[
    LEFT_PAREN,
    RIGHT_PAREN,
    COMMA,
    CHAIN_OPERATOR,
    AS_OPERATOR,
    "'",
];
