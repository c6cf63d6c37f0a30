//! Execution-context capabilities.
//!
//! The evaluator needs three things from its host, each behind its own trait:
//!
//! - [`OperationHandler`] folds a binary operator,
//! - [`TypeConverter`] implements the `as` operator,
//! - [`FunctionHandler`] resolves and invokes named functions.
//!
//! Anything implementing all three is an [`ExecutionContext`]. The pieces can
//! be mixed: [`Runtime`] pairs a function registry with any converter and any
//! operation handler.

mod debug;
mod runtime;


pub use debug::DebugContext;
pub use runtime::Runtime;

use crate::Vec;
use crate::api::Error;
use crate::values::Value;

pub trait OperationHandler {
    /// Apply `symbol` to operands in source order.
    fn operate(&mut self, symbol: &str, left: Value, right: Value) -> Result<Value, Error>;
}

pub trait TypeConverter {
    /// Convert `value` to the type called `type_name`.
    fn convert(&mut self, type_name: &str, value: Value) -> Result<Value, Error>;
}

pub trait FunctionHandler {
    /// Invoke `name` with an optional receiver and ordered arguments.
    fn call_function(
        &mut self,
        name: &str,
        this: Option<Value>,
        args: Vec<Value>,
    ) -> Result<Value, Error>;
}

/// Everything the evaluator calls into.
pub trait ExecutionContext: OperationHandler + TypeConverter + FunctionHandler {}

impl<T: OperationHandler + TypeConverter + FunctionHandler + ?Sized> ExecutionContext for T {}

impl<T: OperationHandler + ?Sized> OperationHandler for &mut T {
    fn operate(&mut self, symbol: &str, left: Value, right: Value) -> Result<Value, Error> {
        (**self).operate(symbol, left, right)
    }
}

impl<T: TypeConverter + ?Sized> TypeConverter for &mut T {
    fn convert(&mut self, type_name: &str, value: Value) -> Result<Value, Error> {
        (**self).convert(type_name, value)
    }
}

impl<T: FunctionHandler + ?Sized> FunctionHandler for &mut T {
    fn call_function(
        &mut self,
        name: &str,
        this: Option<Value>,
        args: Vec<Value>,
    ) -> Result<Value, Error> {
        (**self).call_function(name, this, args)
    }
}
