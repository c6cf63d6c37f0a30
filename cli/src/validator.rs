use funclang::{TokenKind, TokenPattern};
use reedline::{ValidationResult, Validator};

/// Open parenthesis depth of `buffer`.
///
/// Text after an unterminated quote is string content, so counting stops
/// there: `concat('a)` is still open, `it's` is not.
pub fn calculate_depth(pattern: &TokenPattern, buffer: &str) -> usize {
    let mut depth: isize = 0;

    for token in pattern.tokenize(buffer) {
        match token.kind {
            TokenKind::LeftParen => depth += 1,
            TokenKind::RightParen => depth -= 1,
            TokenKind::Invalid if token.raw == "'" => break,
            _ => {}
        }
    }

    depth.max(0) as usize
}

/// Keeps the REPL reading lines while a call or group is open, including
/// one whose string argument spans lines.
pub struct InputValidator {
    pattern: TokenPattern,
}

impl InputValidator {
    pub fn new(pattern: TokenPattern) -> Self {
        Self { pattern }
    }
}

impl Validator for InputValidator {
    fn validate(&self, line: &str) -> ValidationResult {
        match calculate_depth(&self.pattern, line) {
            0 => ValidationResult::Complete,
            _ => ValidationResult::Incomplete,
        }
    }
}
