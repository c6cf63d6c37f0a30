//! Configuration options for the funclang engine.

/// Default bound on expression nesting.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Configuration options for the engine.
///
/// These options control resource limits during evaluation.
///
/// # Example
///
/// ```
/// use funclang_core::api::EngineOptions;
///
/// let options = EngineOptions { max_depth: 64 };
/// assert_eq!(EngineOptions::default().max_depth, 256);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Maximum nesting of sub-expressions: parenthesized groups, argument
    /// lists, and right-hand operands that climb into a tighter precedence
    /// level. Native recursion per step is constant, so this bounds stack use
    /// for any operator table.
    ///
    /// Default: 256
    pub max_depth: usize,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
