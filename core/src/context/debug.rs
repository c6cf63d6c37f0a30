//! A context that records what the evaluator asks for without computing
//! anything. Useful for inspecting fold order and call shapes.

use tracing::info;

use super::{FunctionHandler, OperationHandler, TypeConverter};
use crate::api::Error;
use crate::values::Value;
use crate::{Box, Vec};

pub const OPERATION_RESULT: &str = "the result";
pub const FUNCTION_RESULT: &str = "returned value";
pub const CONVERSION_RESULT: &str = "Converted Object";

type OperatedHook<'h> = Box<dyn FnMut(&str, &Value, &Value) + 'h>;
type FunctionCalledHook<'h> = Box<dyn FnMut(&str, Option<&Value>, &[Value]) + 'h>;
type TypeConvertedHook<'h> = Box<dyn FnMut(&str, &Value) + 'h>;

/// Logs every request at `info` and forwards it to subscribed hooks.
///
/// ```
/// use funclang_core::context::{DebugContext, OperationHandler};
/// use funclang_core::values::Value;
///
/// let mut seen = Vec::new();
/// {
///     let mut context = DebugContext::new();
///     context.on_operated(|symbol, _, _| seen.push(symbol.to_string()));
///     context.operate("+", Value::number(1.0), Value::number(2.0)).unwrap();
/// }
/// assert_eq!(seen, ["+"]);
/// ```
#[derive(Default)]
pub struct DebugContext<'h> {
    operated: Vec<OperatedHook<'h>>,
    function_called: Vec<FunctionCalledHook<'h>>,
    type_converted: Vec<TypeConvertedHook<'h>>,
}

impl<'h> DebugContext<'h> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to operator folds: `(symbol, left, right)`.
    pub fn on_operated(&mut self, hook: impl FnMut(&str, &Value, &Value) + 'h) -> &mut Self {
        self.operated.push(Box::new(hook));
        self
    }

    /// Subscribe to function calls: `(name, this, args)`.
    pub fn on_function_called(
        &mut self,
        hook: impl FnMut(&str, Option<&Value>, &[Value]) + 'h,
    ) -> &mut Self {
        self.function_called.push(Box::new(hook));
        self
    }

    /// Subscribe to conversions: `(type_name, value)`.
    pub fn on_type_converted(&mut self, hook: impl FnMut(&str, &Value) + 'h) -> &mut Self {
        self.type_converted.push(Box::new(hook));
        self
    }
}

impl core::fmt::Debug for DebugContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DebugContext")
            .field("operated", &self.operated.len())
            .field("function_called", &self.function_called.len())
            .field("type_converted", &self.type_converted.len())
            .finish()
    }
}

impl OperationHandler for DebugContext<'_> {
    fn operate(&mut self, symbol: &str, left: Value, right: Value) -> Result<Value, Error> {
        info!(symbol, left = ?left, right = ?right, "Operation");
        for hook in &mut self.operated {
            hook(symbol, &left, &right);
        }
        Ok(Value::text(OPERATION_RESULT))
    }
}

impl FunctionHandler for DebugContext<'_> {
    fn call_function(
        &mut self,
        name: &str,
        this: Option<Value>,
        args: Vec<Value>,
    ) -> Result<Value, Error> {
        info!(name, this = ?this, args = ?args, "Function call");
        for hook in &mut self.function_called {
            hook(name, this.as_ref(), &args);
        }
        Ok(Value::text(FUNCTION_RESULT))
    }
}

impl TypeConverter for DebugContext<'_> {
    fn convert(&mut self, type_name: &str, value: Value) -> Result<Value, Error> {
        info!(type_name, value = ?value, "Conversion");
        for hook in &mut self.type_converted {
            hook(type_name, &value);
        }
        Ok(Value::text(CONVERSION_RESULT))
    }
}
