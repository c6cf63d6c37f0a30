//! Host functions callable from expressions.

use super::Value;
use crate::{Box, Vec};
use crate::api::Error;

/// A function registered in a [`Runtime`](crate::context::Runtime).
///
/// `this` is the receiver passed through the chain operator (`a()->f()`),
/// or `None` for a plain call. Arguments arrive in source order.
pub trait Function {
    fn call(&mut self, this: Option<Value>, args: Vec<Value>) -> Result<Value, Error>;
}

impl<F> Function for F
where
    F: FnMut(Option<Value>, Vec<Value>) -> Result<Value, Error>,
{
    fn call(&mut self, this: Option<Value>, args: Vec<Value>) -> Result<Value, Error> {
        self(this, args)
    }
}

pub type BoxedFunction<'f> = Box<dyn Function + 'f>;
