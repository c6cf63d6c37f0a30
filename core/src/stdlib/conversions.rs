//! Default `as` conversions.
//!
//! Type names are matched case-insensitively: `number`, `datetime`, `string`
//! and `boolean`. Any other name yields `Null`.

use crate::api::Error;
use crate::casting::{to_boolean, to_datetime, to_number, to_text};
use crate::context::TypeConverter;
use crate::values::Value;

pub const NUMBER: &str = "number";
pub const DATETIME: &str = "datetime";
pub const STRING: &str = "string";
pub const BOOLEAN: &str = "boolean";

#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultTypeConverter;

impl DefaultTypeConverter {
    pub fn new() -> Self {
        Self
    }
}

impl TypeConverter for DefaultTypeConverter {
    fn convert(&mut self, type_name: &str, value: Value) -> Result<Value, Error> {
        let type_name = type_name.trim();
        if type_name.eq_ignore_ascii_case(NUMBER) {
            Ok(Value::Number(to_number(&value)?))
        } else if type_name.eq_ignore_ascii_case(DATETIME) {
            Ok(Value::object(to_datetime(&value)?))
        } else if type_name.eq_ignore_ascii_case(STRING) {
            Ok(Value::Text(to_text(&value)))
        } else if type_name.eq_ignore_ascii_case(BOOLEAN) {
            Ok(Value::Boolean(to_boolean(&value)?))
        } else {
            Ok(Value::Null)
        }
    }
}
