//! Funclang - a small embeddable expression language
//!
//! # Overview
//!
//! Funclang evaluates infix expressions over a host-defined set of operators,
//! conversions and functions. The host decides:
//!
//! - which operator symbols exist and how tightly they bind ([`OperatorTable`])
//! - what each operator does ([`OperationHandler`])
//! - what `value as type` means ([`TypeConverter`])
//! - which functions can be called, directly or through `->` chains
//!   ([`FunctionHandler`])
//!
//! # Quick Start
//!
//! ```
//! use funclang::{Engine, OperatorTable, Runtime, Value, register_demo_functions};
//!
//! let engine = Engine::new(OperatorTable::standard()).unwrap();
//!
//! let mut runtime = Runtime::new();
//! register_demo_functions(&mut runtime).unwrap();
//!
//! let result = engine.execute("'5' as number * 2 + add(1)->add(2)", &mut runtime).unwrap();
//! assert_eq!(result, Value::number(13.0));
//! ```
//!
//! # Host functions
//!
//! Any closure taking the chained receiver and the argument list can be
//! registered:
//!
//! ```
//! use funclang::{Engine, Error, OperatorTable, Runtime, Value};
//!
//! let engine = Engine::new(OperatorTable::standard()).unwrap();
//! let mut runtime = Runtime::new();
//! runtime
//!     .register("shout", |this: Option<Value>, _args: Vec<Value>| -> Result<Value, Error> {
//!         let text = this.map(|v| v.to_string()).unwrap_or_default();
//!         Ok(Value::Text(text.to_uppercase()))
//!     })
//!     .unwrap();
//!
//! let result = engine.execute("'hi'->shout()", &mut runtime).unwrap();
//! assert_eq!(result, Value::text("HI"));
//! ```

pub mod error_renderer;

// Re-export public API from funclang_core
pub use funclang_core::api::{
    CompilationError, Engine, EngineOptions, Error, FormatError, OperatorError,
    ResourceExceededError, RuntimeError,
};

pub use funclang_core::context::{
    DebugContext, ExecutionContext, FunctionHandler, OperationHandler, Runtime, TypeConverter,
};
pub use funclang_core::parser::{OperatorTable, Token, TokenKind, TokenPattern, Tokenizer};
pub use funclang_core::stdlib::{
    DefaultOperationHandler, DefaultTypeConverter, register_demo_functions,
};
pub use funclang_core::values::{self, Function, Object, Value};

pub use error_renderer::{
    render_error, render_error_to, render_error_to_string, render_error_to_string_no_color,
};
