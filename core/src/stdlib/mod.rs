//! Funclang standard library
//!
//! - [`DefaultOperationHandler`]: arithmetic, comparison and logic operators
//! - [`DefaultTypeConverter`]: the `as` conversions
//! - [`register_demo_functions`]: the functions the console program ships with
//!
//! None of these are installed implicitly; a [`Runtime`](crate::context::Runtime)
//! built with `Runtime::new()` starts with the default handlers and no
//! functions.

pub mod conversions;
pub mod demo;
pub mod operations;

pub use conversions::DefaultTypeConverter;
pub use demo::register_demo_functions;
pub use operations::DefaultOperationHandler;
