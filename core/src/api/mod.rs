//! Public API for the funclang expression language.
//!
//! An [`Engine`] is built from an operator table and evaluates source text
//! against an [`ExecutionContext`](crate::context::ExecutionContext) that
//! supplies operator semantics, conversions and functions.
//!
//! # Example
//!
//! ```
//! use funclang_core::api::Engine;
//! use funclang_core::context::Runtime;
//! use funclang_core::parser::OperatorTable;
//! use funclang_core::stdlib::register_demo_functions;
//! use funclang_core::values::Value;
//!
//! let engine = Engine::new(OperatorTable::standard()).unwrap();
//!
//! let mut runtime = Runtime::new();
//! register_demo_functions(&mut runtime).unwrap();
//!
//! let result = engine.execute("add(5, 7)->add(5)", &mut runtime).unwrap();
//! assert_eq!(result, Value::number(17.0));
//! ```

pub mod engine;
pub mod error;
pub mod options;

pub use engine::Engine;
pub use error::{
    CompilationError, Error, FormatError, OperatorError, ResourceExceededError, RuntimeError,
};
pub use options::EngineOptions;
