//! Regex-driven tokenizer.
//!
//! The pattern is assembled from an [`OperatorTable`] plus the fixed grammar.
//! Capture groups, in priority order:
//!
//! 1. operator symbols and `->`
//! 2. single-quoted text (with `\'` as an escaped quote)
//! 3. bare words (`\w` and `.`)
//! 4. `(`
//! 5. `)`
//! 6. `,`
//!
//! Any other non-whitespace character matches outside every group and is
//! reported as [`TokenKind::Invalid`]. Whitespace is never matched; each scan
//! searches forward from the end of the previous token.

use alloc::borrow::Cow;

use regex::Regex;

use super::OperatorTable;
use crate::api::OperatorError;
use crate::format;

const GROUP_OPERATOR: usize = 1;
const GROUP_QUOTED: usize = 2;
const GROUP_WORD: usize = 3;
const GROUP_LEFT_PAREN: usize = 4;
const GROUP_RIGHT_PAREN: usize = 5;
const GROUP_COMMA: usize = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Operator,
    /// A bare word: identifier or unquoted literal.
    Word,
    /// A single-quoted text literal.
    Quoted,
    LeftParen,
    RightParen,
    Comma,
    Invalid,
}

impl TokenKind {
    /// True for identifier-or-text tokens, quoted or not.
    pub fn is_text(self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::Quoted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind,
    /// Token value; for quoted literals, the unescaped content between the quotes.
    pub text: Cow<'s, str>,
    /// The matched source text, quotes included.
    pub raw: &'s str,
    /// Byte offset of `raw` in the source.
    pub position: usize,
}

/// Compiled token pattern for one operator table.
#[derive(Debug, Clone)]
pub struct TokenPattern {
    regex: Regex,
}

impl TokenPattern {
    pub fn new(table: &OperatorTable) -> Result<Self, OperatorError> {
        let pattern = format!(
            r"({})|'((?:\\'|[\s\S])*?)'|([\w.]+)|(\()|(\))|(,)|\S",
            table.operator_pattern()
        );
        let regex = Regex::new(&pattern).map_err(|e| OperatorError::Pattern(e.to_string()))?;
        Ok(Self { regex })
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    /// Start a cursor over `source`, positioned on its first token.
    pub fn tokenize<'s>(&'s self, source: &'s str) -> Tokenizer<'s> {
        Tokenizer::new(&self.regex, source)
    }
}

/// A cursor over the tokens of one source string.
///
/// Exactly one token is current at a time; `None` means end of input.
#[derive(Debug, Clone)]
pub struct Tokenizer<'s> {
    regex: &'s Regex,
    source: &'s str,
    offset: usize,
    current: Option<Token<'s>>,
}

impl<'s> Tokenizer<'s> {
    fn new(regex: &'s Regex, source: &'s str) -> Self {
        let mut tokenizer = Self {
            regex,
            source,
            offset: 0,
            current: None,
        };
        tokenizer.current = tokenizer.next_match();
        tokenizer
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    pub fn current(&self) -> Option<&Token<'s>> {
        self.current.as_ref()
    }

    pub fn current_kind(&self) -> Option<TokenKind> {
        self.current.as_ref().map(|token| token.kind)
    }

    /// Move to the next token, returning the one that was current.
    pub fn advance(&mut self) -> Option<Token<'s>> {
        let next = self.next_match();
        core::mem::replace(&mut self.current, next)
    }

    fn next_match(&mut self) -> Option<Token<'s>> {
        let captures = self.regex.captures_at(self.source, self.offset)?;
        let whole = captures.get(0)?;
        self.offset = whole.end();

        let group = (GROUP_OPERATOR..=GROUP_COMMA).find(|&i| captures.get(i).is_some());
        let kind = match group {
            Some(GROUP_OPERATOR) => TokenKind::Operator,
            Some(GROUP_QUOTED) => TokenKind::Quoted,
            Some(GROUP_WORD) => TokenKind::Word,
            Some(GROUP_LEFT_PAREN) => TokenKind::LeftParen,
            Some(GROUP_RIGHT_PAREN) => TokenKind::RightParen,
            Some(GROUP_COMMA) => TokenKind::Comma,
            _ => TokenKind::Invalid,
        };

        let text = match kind {
            TokenKind::Quoted => {
                let inner = captures.get(GROUP_QUOTED).map_or("", |m| m.as_str());
                if inner.contains("\\'") {
                    Cow::Owned(inner.replace("\\'", "'"))
                } else {
                    Cow::Borrowed(inner)
                }
            }
            _ => Cow::Borrowed(whole.as_str()),
        };

        Some(Token {
            kind,
            text,
            raw: whole.as_str(),
            position: whole.start(),
        })
    }
}

impl<'s> Iterator for Tokenizer<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.as_ref()?;
        self.advance()
    }
}
