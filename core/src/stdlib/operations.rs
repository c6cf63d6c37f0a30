//! Default operator semantics.
//!
//! Arithmetic and ordering coerce both operands to numbers, `&&`/`||` coerce
//! to booleans, and `==` compares values without coercion. Symbols the
//! handler does not know produce `Null`.

use crate::api::Error;
use crate::casting::{to_boolean, to_number};
use crate::context::OperationHandler;
use crate::values::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultOperationHandler;

impl DefaultOperationHandler {
    pub fn new() -> Self {
        Self
    }
}

impl OperationHandler for DefaultOperationHandler {
    fn operate(&mut self, symbol: &str, left: Value, right: Value) -> Result<Value, Error> {
        let result = match symbol {
            "+" => Value::Number(to_number(&left)? + to_number(&right)?),
            "-" => Value::Number(to_number(&left)? - to_number(&right)?),
            "*" => Value::Number(to_number(&left)? * to_number(&right)?),
            // IEEE 754: division by zero yields an infinity or NaN.
            "/" => Value::Number(to_number(&left)? / to_number(&right)?),
            ">" => Value::Boolean(to_number(&left)? > to_number(&right)?),
            "<" => Value::Boolean(to_number(&left)? < to_number(&right)?),
            ">=" => Value::Boolean(to_number(&left)? >= to_number(&right)?),
            "<=" => Value::Boolean(to_number(&left)? <= to_number(&right)?),
            "==" => Value::Boolean(left == right),
            "&&" => Value::Boolean(to_boolean(&left)? && to_boolean(&right)?),
            "||" => Value::Boolean(to_boolean(&left)? || to_boolean(&right)?),
            _ => Value::Null,
        };
        Ok(result)
    }
}
