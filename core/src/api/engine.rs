//! The funclang evaluation engine.

use tracing::debug_span;

use super::{EngineOptions, Error, OperatorError};
use crate::context::ExecutionContext;
use crate::evaluator;
use crate::parser::{OperatorTable, TokenPattern};
use crate::values::Value;

/// The funclang evaluation engine.
///
/// An engine owns an immutable [`OperatorTable`] and the token pattern
/// compiled from it. It holds no per-call state: every `execute` call builds
/// its own evaluator, so one engine can be shared across threads and a host
/// function may call back into the engine that invoked it.
///
/// # Example
///
/// ```
/// use funclang_core::api::Engine;
/// use funclang_core::context::Runtime;
/// use funclang_core::parser::OperatorTable;
/// use funclang_core::values::Value;
///
/// let engine = Engine::new(OperatorTable::standard()).unwrap();
/// let mut runtime = Runtime::new();
///
/// let result = engine.execute("(1 + 2) * 3 >= 9", &mut runtime).unwrap();
/// assert_eq!(result, Value::boolean(true));
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    table: OperatorTable,
    pattern: TokenPattern,
    options: EngineOptions,
}

impl Engine {
    /// Create an engine with default options.
    pub fn new(table: OperatorTable) -> Result<Self, OperatorError> {
        Self::with_options(table, EngineOptions::default())
    }

    pub fn with_options(table: OperatorTable, options: EngineOptions) -> Result<Self, OperatorError> {
        let pattern = TokenPattern::new(&table)?;
        Ok(Self {
            table,
            pattern,
            options,
        })
    }

    pub fn table(&self) -> &OperatorTable {
        &self.table
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// The compiled token pattern, for tools that tokenize without evaluating.
    pub fn pattern(&self) -> &TokenPattern {
        &self.pattern
    }

    /// Evaluate `source` against `context`.
    pub fn execute<C: ExecutionContext + ?Sized>(
        &self,
        source: &str,
        context: &mut C,
    ) -> Result<Value, Error> {
        let _span = debug_span!("execute", source).entered();
        evaluator::eval(&self.table, &self.pattern, source, context, &self.options)
    }
}

impl Default for Engine {
    /// An engine over [`OperatorTable::standard`].
    fn default() -> Self {
        // The standard table only holds valid symbols, so its pattern compiles.
        Self::new(OperatorTable::standard()).expect("standard operator table should compile")
    }
}
