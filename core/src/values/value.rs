use alloc::sync::Arc;
use core::any::Any;
use core::fmt;

use crate::String;

/// An opaque host value carried through evaluation.
///
/// Implemented for every `'static` type that can be printed and shared
/// between threads; the engine never looks inside.
pub trait Object: Any + fmt::Debug + fmt::Display + Send + Sync {
    fn as_any(&self) -> &dyn Any;

    /// Name reported in cast errors.
    fn type_name(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

impl<T: Any + fmt::Debug + fmt::Display + Send + Sync> Object for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A runtime value produced by literals, operators, conversions and calls.
#[derive(Clone)]
pub enum Value {
    /// The absent value (unsupported conversion, unknown operator, empty return).
    Null,
    Number(f64),
    Text(String),
    Boolean(bool),
    Object(Arc<dyn Object>),
}

impl Value {
    pub fn number(value: f64) -> Self {
        Value::Number(value)
    }

    pub fn text(value: impl Into<String>) -> Self {
        Value::Text(value.into())
    }

    pub fn boolean(value: bool) -> Self {
        Value::Boolean(value)
    }

    pub fn object<T: Object>(value: T) -> Self {
        Value::Object(Arc::new(value))
    }

    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Number(_) => "number",
            Value::Text(_) => "text",
            Value::Boolean(_) => "boolean",
            Value::Object(_) => "object",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the host object if it is a `T`.
    pub fn downcast_ref<T: Object>(&self) -> Option<&T> {
        match self {
            Value::Object(obj) => (**obj).as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    /// Type-sensitive equality: `Number(5.0)` never equals `Text("5")`, and
    /// objects are equal only when they share an allocation.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Text(a), Value::Text(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::Number(n) => write!(f, "Number({:?})", n),
            Value::Text(s) => write!(f, "Text({:?})", s),
            Value::Boolean(b) => write!(f, "Boolean({})", b),
            Value::Object(obj) => write!(f, "Object({:?})", obj),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Number(n) => format_number(f, *n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Object(obj) => write!(f, "{}", obj),
        }
    }
}

fn format_number(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.is_nan() {
        write!(f, "nan")
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            write!(f, "inf")
        } else {
            write!(f, "-inf")
        }
    } else {
        write!(f, "{}", value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.into())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}
