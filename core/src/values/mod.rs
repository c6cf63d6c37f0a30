//! Runtime values flowing through the evaluation stack.

pub mod function;
pub mod value;

pub use function::{BoxedFunction, Function};
pub use value::{Object, Value};
