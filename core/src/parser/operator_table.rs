//! Operator precedence table.
//!
//! Levels are stored tightest-first: level 0 binds tightest and always holds
//! the type-conversion operator `as`. Every host push either opens a new,
//! looser level or joins the most recently opened one.

use tracing::debug;

use super::{AS_OPERATOR, CHAIN_OPERATOR, RESERVED_SYMBOLS};
use crate::api::OperatorError;
use crate::{String, Vec, format};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OperatorTable {
    levels: Vec<Vec<String>>,
}

impl Default for OperatorTable {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorTable {
    /// A table holding only the conversion operator.
    pub fn new() -> Self {
        Self {
            levels: vec![vec![String::from(AS_OPERATOR)]],
        }
    }

    /// `*` `/`, then `+` `-`.
    pub fn arithmetic() -> Self {
        let mut table = Self::new();
        table
            .push("*")
            .and_then(|t| t.push_same_precedence("/"))
            .and_then(|t| t.push("+"))
            .and_then(|t| t.push_same_precedence("-"))
            .expect("arithmetic operators are valid");
        table
    }

    /// Arithmetic, comparison, equality and boolean operators, tightest first:
    /// `* /`, `+ -`, `>= <= > <`, `==`, `&&`, `||`.
    pub fn standard() -> Self {
        let mut table = Self::arithmetic();
        table
            .push(">=")
            .and_then(|t| t.push_same_precedence("<="))
            .and_then(|t| t.push_same_precedence(">"))
            .and_then(|t| t.push_same_precedence("<"))
            .and_then(|t| t.push("=="))
            .and_then(|t| t.push("&&"))
            .and_then(|t| t.push("||"))
            .expect("standard operators are valid");
        table
    }

    /// Register `symbol` on a new level, looser than every existing one.
    pub fn push(&mut self, symbol: &str) -> Result<&mut Self, OperatorError> {
        self.insert(symbol, false)
    }

    /// Register `symbol` on the most recently created level.
    pub fn push_same_precedence(&mut self, symbol: &str) -> Result<&mut Self, OperatorError> {
        self.insert(symbol, true)
    }

    fn insert(&mut self, symbol: &str, same_precedence: bool) -> Result<&mut Self, OperatorError> {
        validate(symbol)?;
        if self.contains(symbol) {
            return Err(OperatorError::Duplicate(symbol.into()));
        }

        if !same_precedence || self.levels.is_empty() {
            self.levels.push(Vec::new());
        }
        if let Some(level) = self.levels.last_mut() {
            level.push(symbol.into());
        }

        debug!(symbol, level = self.levels.len() - 1, "Registered operator");
        Ok(self)
    }

    /// All levels, tightest first.
    pub fn levels(&self) -> &[Vec<String>] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&[String]> {
        self.levels.get(index).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Index of the loosest level, where parsing starts.
    pub fn loosest(&self) -> usize {
        self.levels.len().saturating_sub(1)
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.levels.iter().flatten().any(|s| s == symbol)
    }

    /// Level index of `symbol`, if registered.
    pub fn precedence_of(&self, symbol: &str) -> Option<usize> {
        self.levels
            .iter()
            .position(|level| level.iter().any(|s| s == symbol))
    }

    /// Render one regex alternation matching any registered symbol or the
    /// chain operator.
    ///
    /// Longer symbols come first so that `>=` is never read as `>` followed
    /// by `=`. Symbols starting or ending in a word character are bounded with
    /// `\b` so `as` does not match the front of `asset`.
    pub fn operator_pattern(&self) -> String {
        let mut symbols: Vec<&str> = self.levels.iter().flatten().map(String::as_str).collect();
        symbols.push(CHAIN_OPERATOR);
        // Stable sort keeps registration order among equal lengths.
        symbols.sort_by(|a, b| b.len().cmp(&a.len()));

        symbols
            .iter()
            .map(|symbol| escape_symbol(symbol))
            .collect::<Vec<_>>()
            .join("|")
    }
}

fn validate(symbol: &str) -> Result<(), OperatorError> {
    if symbol.is_empty() {
        return Err(OperatorError::Empty);
    }
    if symbol.chars().any(char::is_whitespace) {
        return Err(OperatorError::Whitespace(symbol.into()));
    }
    if RESERVED_SYMBOLS.contains(&symbol) {
        return Err(OperatorError::Reserved(symbol.into()));
    }
    Ok(())
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn escape_symbol(symbol: &str) -> String {
    let escaped = regex::escape(symbol);
    let starts_word = symbol.chars().next().is_some_and(is_word_char);
    let ends_word = symbol.chars().next_back().is_some_and(is_word_char);
    format!(
        "{}{}{}",
        if starts_word { r"\b" } else { "" },
        escaped,
        if ends_word { r"\b" } else { "" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_table_holds_conversion_operator() {
        let table = OperatorTable::new();
        assert_eq!(table.len(), 1);
        assert_eq!(table.level(0), Some(&[String::from("as")][..]));
        assert_eq!(table.loosest(), 0);
    }

    #[test]
    fn test_push_creates_levels() {
        let mut table = OperatorTable::new();
        table.push("*").unwrap();
        table.push_same_precedence("/").unwrap();
        table.push("+").unwrap();
        table.push_same_precedence("-").unwrap();

        assert_eq!(
            table.levels(),
            &[
                vec![String::from("as")],
                vec![String::from("*"), String::from("/")],
                vec![String::from("+"), String::from("-")],
            ]
        );
        assert_eq!(table.precedence_of("/"), Some(1));
        assert_eq!(table.precedence_of("-"), Some(2));
        assert_eq!(table.precedence_of("%"), None);
    }

    #[test]
    fn test_same_precedence_as_first_push_joins_conversion_level() {
        let mut table = OperatorTable::new();
        table.push_same_precedence("^").unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.precedence_of("^"), Some(0));
    }

    #[test]
    fn test_rejects_invalid_symbols() {
        let mut table = OperatorTable::new();
        assert_eq!(table.push("").unwrap_err(), OperatorError::Empty);
        assert_eq!(
            table.push("< =").unwrap_err(),
            OperatorError::Whitespace("< =".into())
        );
        for reserved in ["(", ")", ",", "->", "as", "'"] {
            assert_eq!(
                table.push(reserved).unwrap_err(),
                OperatorError::Reserved(reserved.into())
            );
        }
        table.push("+").unwrap();
        assert_eq!(
            table.push_same_precedence("+").unwrap_err(),
            OperatorError::Duplicate("+".into())
        );
    }

    #[test]
    fn test_operator_pattern_prefers_longer_symbols() {
        let mut table = OperatorTable::new();
        table.push(">").unwrap();
        table.push_same_precedence(">=").unwrap();
        assert_eq!(table.operator_pattern(), r"\bas\b|>=|\->|>");
    }

    #[test]
    fn test_operator_pattern_escapes_symbols() {
        let mut table = OperatorTable::new();
        table.push("*").unwrap();
        table.push("||").unwrap();
        assert_eq!(table.operator_pattern(), r"\bas\b|\|\||\->|\*");
    }

    #[test]
    fn test_standard_table() {
        let table = OperatorTable::standard();
        assert_eq!(table.len(), 7);
        assert_eq!(table.precedence_of("<"), Some(3));
        assert_eq!(table.precedence_of("||"), Some(6));
        assert_eq!(table.loosest(), 6);
    }
}
