//! Public error types for the funclang API.
//!
//! Errors are raised where they are detected and propagate unchanged through
//! [`Engine::execute`](super::Engine::execute). Errors produced by a host
//! context (its operations, conversions or functions) are passed through
//! without reinterpretation.

use core::ops::Range;

use thiserror::Error;

use crate::String;

/// Top-level error for every funclang operation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The source could not be scanned or parsed.
    #[error(transparent)]
    Compilation(#[from] CompilationError),

    /// A function lookup or registration failed, or a value had the wrong shape.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// A value's text could not be parsed into the requested type.
    #[error(transparent)]
    Format(#[from] FormatError),

    /// A resource limit was hit (e.g. nesting depth).
    #[error(transparent)]
    ResourceExceeded(#[from] ResourceExceededError),
}

/// Errors raised while scanning or parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompilationError {
    /// A token appeared where the grammar forbids it.
    #[error("Unexpected token \"{token}\" at position {position}")]
    UnexpectedToken { token: String, position: usize },

    /// Input ended while a token was still required.
    #[error("Unexpected end of input")]
    UnexpectedEnd,
}

/// Errors raised while evaluating.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuntimeError {
    #[error("Function not found: {0}")]
    FunctionNotFound(String),

    /// Raised at registration time, never mid-expression.
    #[error("Function already exists: {0}")]
    FunctionAlreadyExists(String),

    #[error("Cannot convert {from} to {to}")]
    InvalidCast { from: String, to: &'static str },

    /// Failure reported by a host function implementation.
    #[error("{0}")]
    Host(String),
}

/// The textual form of a value could not be parsed into `target`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("\"{value}\" is not a valid {target}")]
pub struct FormatError {
    pub value: String,
    pub target: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceExceededError {
    #[error("Expression nesting depth {depth} exceeds maximum of {max_depth}")]
    StackOverflow { depth: usize, max_depth: usize },
}

/// Rejected operator-table configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperatorError {
    #[error("Operator symbol must not be empty")]
    Empty,

    #[error("Operator symbol \"{0}\" contains whitespace")]
    Whitespace(String),

    #[error("Operator symbol \"{0}\" is reserved")]
    Reserved(String),

    #[error("Operator symbol \"{0}\" is already registered")]
    Duplicate(String),

    /// The assembled token pattern failed to compile.
    #[error("Invalid token pattern: {0}")]
    Pattern(String),
}

impl Error {
    /// Host-side failure with a message, for use in function implementations.
    pub fn host(message: impl Into<String>) -> Self {
        Error::Runtime(RuntimeError::Host(message.into()))
    }

    pub(crate) fn invalid_cast(from: impl Into<String>, to: &'static str) -> Self {
        Error::Runtime(RuntimeError::InvalidCast {
            from: from.into(),
            to,
        })
    }

    pub(crate) fn format(value: impl Into<String>, target: &'static str) -> Self {
        Error::Format(FormatError {
            value: value.into(),
            target,
        })
    }

    /// Byte range in the source the error points at, if it has one.
    ///
    /// `UnexpectedEnd` points at the end of `source`.
    pub fn span(&self, source: &str) -> Option<Range<usize>> {
        match self {
            Error::Compilation(CompilationError::UnexpectedToken { token, position }) => {
                Some(*position..*position + token.len())
            }
            Error::Compilation(CompilationError::UnexpectedEnd) => {
                Some(source.len()..source.len())
            }
            _ => None,
        }
    }

    /// Stable diagnostic code for the error category.
    pub fn code(&self) -> &'static str {
        match self {
            Error::Compilation(CompilationError::UnexpectedToken { .. }) => "P001",
            Error::Compilation(CompilationError::UnexpectedEnd) => "P002",
            Error::Runtime(RuntimeError::FunctionNotFound(_)) => "R001",
            Error::Runtime(RuntimeError::FunctionAlreadyExists(_)) => "R002",
            Error::Runtime(RuntimeError::InvalidCast { .. }) => "R003",
            Error::Runtime(RuntimeError::Host(_)) => "R004",
            Error::Format(_) => "F001",
            Error::ResourceExceeded(_) => "L001",
        }
    }
}
