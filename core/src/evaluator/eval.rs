//! Core evaluation logic.

use smallvec::SmallVec;
use tracing::trace;

use crate::{
    ToString, Vec,
    api::{CompilationError, EngineOptions, Error, ResourceExceededError::*},
    casting::parse_number,
    context::ExecutionContext,
    parser::{
        AS_OPERATOR, CHAIN_OPERATOR, OperatorTable, Token, TokenKind, Tokenizer, UNARY_MINUS,
    },
    values::Value,
};

/// Single-pass evaluator for one `execute` call.
///
/// Parsing and evaluation happen together: every operand is pushed on the
/// stack as soon as it is read and every operator folds its two operands the
/// moment its right-hand side is complete. All state lives here, so the
/// engine that created it stays shareable.
pub struct Evaluator<'s, 'c, C: ExecutionContext + ?Sized> {
    table: &'s OperatorTable,
    tokens: Tokenizer<'s>,
    context: &'c mut C,
    stack: SmallVec<[Value; 16]>,
    depth: usize,
    max_depth: usize,
}

impl<'s, 'c, C: ExecutionContext + ?Sized> Evaluator<'s, 'c, C> {
    pub fn new(
        table: &'s OperatorTable,
        tokens: Tokenizer<'s>,
        context: &'c mut C,
        options: &EngineOptions,
    ) -> Self {
        Self {
            table,
            tokens,
            context,
            stack: SmallVec::new(),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Evaluate the whole source, which must be exactly one expression.
    pub fn eval(mut self) -> Result<Value, Error> {
        self.expression(self.table.loosest())?;
        if let Some(token) = self.tokens.current() {
            return Err(unexpected(token));
        }
        Ok(self.pop())
    }

    /// Fold every operator registered at `max_level` or tighter.
    ///
    /// A right-hand operand is parsed one level tighter than its operator, so
    /// equal-level operators associate to the left. Climbing into a tighter
    /// level counts as one nesting step, which keeps native recursion bounded
    /// by `max_depth` whatever the size of the table.
    fn expression(&mut self, max_level: usize) -> Result<(), Error> {
        self.term()?;
        while let Some((symbol, level)) = self.operator_within(max_level) {
            self.tokens.advance();
            if level == 0 {
                self.term()?;
            } else {
                self.nested(|this| this.expression(level - 1))?;
            }
            let right = self.pop();
            let left = self.pop();
            let result = self.fold(symbol, left, right)?;
            self.stack.push(result);
        }
        Ok(())
    }

    /// The current token's symbol and level, if it is a registered operator
    /// at `max_level` or tighter.
    fn operator_within(&self, max_level: usize) -> Option<(&'s str, usize)> {
        let token = self.tokens.current()?;
        if token.kind != TokenKind::Operator {
            return None;
        }
        let symbol = token.raw;
        let level = self.table.precedence_of(symbol)?;
        (level <= max_level).then_some((symbol, level))
    }

    /// Level 0 operand: an optional unary minus and a factor.
    fn term(&mut self) -> Result<(), Error> {
        // Recognized by its raw text, so it works even when `-` is not a
        // registered binary operator.
        let negate = self
            .tokens
            .current()
            .is_some_and(|token| token.raw == UNARY_MINUS);
        if negate {
            self.tokens.advance();
        }

        self.factor()?;

        if negate {
            let value = self.pop();
            let negated = match value {
                Value::Number(n) => Value::Number(-n),
                other => return Err(Error::invalid_cast(other.kind(), "number")),
            };
            self.stack.push(negated);
        }
        Ok(())
    }

    /// A literal, a call or a parenthesized expression, then any `->` calls.
    fn factor(&mut self) -> Result<(), Error> {
        match self.tokens.current_kind() {
            Some(kind) if kind.is_text() => {
                let token = self.take()?;
                if self.tokens.current_kind() == Some(TokenKind::LeftParen) {
                    self.call(&token.text, None)?;
                } else {
                    self.stack.push(literal(&token));
                }
            }
            _ => {
                self.expect(TokenKind::LeftParen)?;
                self.nested(|this| this.expression(this.table.loosest()))?;
                self.expect(TokenKind::RightParen)?;
            }
        }
        self.chain()
    }

    fn chain(&mut self) -> Result<(), Error> {
        while self
            .tokens
            .current()
            .is_some_and(|token| token.kind == TokenKind::Operator && token.raw == CHAIN_OPERATOR)
        {
            self.tokens.advance();
            let name = self.expect_text()?;
            let receiver = self.pop();
            self.call(&name.text, Some(receiver))?;
        }
        Ok(())
    }

    /// Parse `( args )` and invoke `name`, pushing the result.
    fn call(&mut self, name: &str, this: Option<Value>) -> Result<(), Error> {
        self.expect(TokenKind::LeftParen)?;
        let args = self.nested(Self::arguments)?;
        trace!(name, chained = this.is_some(), args = args.len(), "Call");
        let result = self.context.call_function(name, this, args)?;
        self.stack.push(result);
        Ok(())
    }

    /// Comma-separated arguments up to and including the closing `)`.
    fn arguments(&mut self) -> Result<Vec<Value>, Error> {
        let base = self.stack.len();
        if self.tokens.current_kind() == Some(TokenKind::RightParen) {
            self.tokens.advance();
            return Ok(Vec::new());
        }
        loop {
            self.expression(self.table.loosest())?;
            if self.tokens.current_kind() == Some(TokenKind::Comma) {
                self.tokens.advance();
                continue;
            }
            self.expect(TokenKind::RightParen)?;
            break;
        }
        Ok(self.stack.drain(base..).collect())
    }

    fn fold(&mut self, symbol: &str, left: Value, right: Value) -> Result<Value, Error> {
        if symbol == AS_OPERATOR {
            let type_name = right.to_string();
            trace!(type_name = %type_name, "Convert");
            self.context.convert(&type_name, left)
        } else {
            trace!(symbol, "Operate");
            self.context.operate(symbol, left, right)
        }
    }

    /// Run `f` one nesting level deeper, failing past the configured limit.
    ///
    /// Every recursive descent goes through here.
    fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T, Error>) -> Result<T, Error> {
        if self.depth >= self.max_depth {
            return Err(StackOverflow {
                depth: self.depth,
                max_depth: self.max_depth,
            }
            .into());
        }
        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    fn take(&mut self) -> Result<Token<'s>, Error> {
        self.tokens
            .advance()
            .ok_or(Error::Compilation(CompilationError::UnexpectedEnd))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token<'s>, Error> {
        self.expect_where(|k| k == kind)
    }

    fn expect_text(&mut self) -> Result<Token<'s>, Error> {
        self.expect_where(TokenKind::is_text)
    }

    fn expect_where(&mut self, accept: impl Fn(TokenKind) -> bool) -> Result<Token<'s>, Error> {
        let Some(token) = self.tokens.current() else {
            return Err(CompilationError::UnexpectedEnd.into());
        };
        if !accept(token.kind) {
            return Err(unexpected(token));
        }
        self.take()
    }

    fn pop(&mut self) -> Value {
        // Every fold and call is preceded by the pushes it consumes.
        self.stack.pop().expect("evaluation stack underflow")
    }
}

/// Quoted tokens are always text; bare words become numbers when they parse.
fn literal(token: &Token<'_>) -> Value {
    if token.kind == TokenKind::Word
        && let Some(n) = parse_number(&token.text)
    {
        return Value::Number(n);
    }
    Value::text(token.text.as_ref())
}

fn unexpected(token: &Token<'_>) -> Error {
    CompilationError::UnexpectedToken {
        token: token.raw.into(),
        position: token.position,
    }
    .into()
}
