use hashbrown::HashMap;
use tracing::{debug, trace};

use super::{FunctionHandler, OperationHandler, TypeConverter};
use crate::api::{Error, RuntimeError};
use crate::stdlib::{DefaultOperationHandler, DefaultTypeConverter};
use crate::values::{BoxedFunction, Function, Value};
use crate::{Box, String, ToString, Vec};

/// A function registry paired with a type converter and an operation handler.
///
/// Names are case-sensitive and unique. `'f` bounds the registered functions,
/// so closures may borrow from the caller's scope.
///
/// ```
/// use funclang_core::context::Runtime;
/// use funclang_core::api::Error;
/// use funclang_core::values::Value;
///
/// let mut runtime = Runtime::new();
/// runtime
///     .register("twice", |_this: Option<Value>, args: Vec<Value>| -> Result<Value, Error> {
///         let n = args.first().and_then(Value::as_number).unwrap_or(0.0);
///         Ok(Value::number(n * 2.0))
///     })
///     .unwrap();
/// assert!(runtime.contains("twice"));
/// ```
pub struct Runtime<'f, C = DefaultTypeConverter, O = DefaultOperationHandler> {
    functions: HashMap<String, BoxedFunction<'f>>,
    converter: C,
    operations: O,
}

impl<'f> Runtime<'f> {
    pub fn new() -> Self {
        Self::with_handlers(DefaultTypeConverter, DefaultOperationHandler)
    }
}

impl Default for Runtime<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'f, C, O> Runtime<'f, C, O> {
    pub fn with_handlers(converter: C, operations: O) -> Self {
        Self {
            functions: HashMap::new(),
            converter,
            operations,
        }
    }

    /// Register `function` under `name`.
    ///
    /// Fails with [`RuntimeError::FunctionAlreadyExists`] when the name is
    /// taken; the existing entry is left untouched.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        function: impl Function + 'f,
    ) -> Result<(), Error> {
        let name = name.into();
        if self.functions.contains_key(&name) {
            return Err(RuntimeError::FunctionAlreadyExists(name).into());
        }
        debug!(name = %name, "Registered function");
        self.functions.insert(name, Box::new(function));
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.functions.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn function_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    pub fn operations(&self) -> &O {
        &self.operations
    }
}

impl<C, O> core::fmt::Debug for Runtime<'_, C, O>
where
    C: core::fmt::Debug,
    O: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Runtime")
            .field("functions", &self.function_names())
            .field("converter", &self.converter)
            .field("operations", &self.operations)
            .finish()
    }
}

impl<C, O> FunctionHandler for Runtime<'_, C, O> {
    fn call_function(
        &mut self,
        name: &str,
        this: Option<Value>,
        args: Vec<Value>,
    ) -> Result<Value, Error> {
        let Some(function) = self.functions.get_mut(name) else {
            return Err(RuntimeError::FunctionNotFound(name.to_string()).into());
        };
        trace!(name, chained = this.is_some(), args = args.len(), "Calling function");
        function.call(this, args)
    }
}

impl<C: TypeConverter, O> TypeConverter for Runtime<'_, C, O> {
    fn convert(&mut self, type_name: &str, value: Value) -> Result<Value, Error> {
        self.converter.convert(type_name, value)
    }
}

impl<C, O: OperationHandler> OperationHandler for Runtime<'_, C, O> {
    fn operate(&mut self, symbol: &str, left: Value, right: Value) -> Result<Value, Error> {
        self.operations.operate(symbol, left, right)
    }
}
