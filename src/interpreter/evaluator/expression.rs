use std::io::{BufRead, Write};

use crate::{
    error::SyntaxError,
    interpreter::{
        evaluator::{
            arithmetic::Operator,
            core::{EvalResult, Interpreter},
        },
        lexer::TokenKind,
    },
};

/// How many nested [`Interpreter::evaluate`] calls one statement may make.
///
/// Operators, values after them and `(` each nest one level deeper, so this
/// bounds the length of operator chains as well as the depth of parentheses.
pub const MAX_NESTING: usize = 256;

/// The grammar context an expression is being evaluated in.
///
/// The same token means different things depending on where it shows up:
/// after `*` a `+` ends the operand, and right after a value another value
/// ends the whole expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Reads a fresh token. Values and operators both continue the
    /// expression.
    Statement,
    /// Reads a fresh token to find the operand of `*` or `/`. A `+` or `-`
    /// ends the operand and is left for the caller.
    HighPrecedence,
    /// Reads a fresh token after a value. A second value ends the expression
    /// and is left for the next statement.
    PostValue,
    /// Like `PostValue`, but starts from the token already in the cache
    /// instead of reading a new one. Used after a `HighPrecedence` operand,
    /// which has already read past itself.
    FromCache,
}

impl<R: BufRead, W: Write> Interpreter<'_, R, W> {
    /// Evaluates the rest of an expression whose value so far is `acc`.
    ///
    /// Returns the value of the expression and leaves the lookahead cache on
    /// the first token the expression did not consume. That token is what
    /// ends the expression: end of input, a keyword, `:=`, `)`, or a value
    /// directly following another value.
    ///
    /// `+` and `-` take everything to their right as their operand, so chains
    /// group to the right: `10 - 4 - 2` is `10 - (4 - 2)`. `*` and `/` take a
    /// single operand and then keep going, so they group to the left and bind
    /// tighter than `+` and `-`.
    ///
    /// # Errors
    /// Fails on an invalid token, an unclosed `(`, division by zero, an
    /// unknown variable under strict variables, or an expression nested
    /// deeper than [`MAX_NESTING`].
    pub fn evaluate(&mut self, acc: f64, mode: Mode) -> EvalResult<f64> {
        if self.depth >= MAX_NESTING {
            let line = self.tokens.current().line;
            return Err(SyntaxError::NestingTooDeep { line }.into());
        }

        self.depth += 1;
        let result = self.step(acc, mode);
        self.depth -= 1;
        result
    }

    fn step(&mut self, acc: f64, mode: Mode) -> EvalResult<f64> {
        let token = match mode {
            Mode::FromCache => self.tokens.current(),
            _ => self.tokens.advance(),
        };

        match token.kind {
            TokenKind::EndOfInput
            | TokenKind::ReadKeyword
            | TokenKind::WriteKeyword
            | TokenKind::Assign
            | TokenKind::RParen => Ok(acc),
            TokenKind::Error => Err(SyntaxError::InvalidToken { text: token.text,
                                                                line: token.line, }.into()),
            TokenKind::Identifier | TokenKind::NumberLiteral => match mode {
                Mode::Statement => {
                    let value = self.value_of(&token)?;
                    self.evaluate(value, Mode::PostValue)
                },
                Mode::HighPrecedence => {
                    let value = self.value_of(&token)?;
                    self.tokens.advance();
                    Ok(value)
                },
                Mode::PostValue | Mode::FromCache => Ok(acc),
            },
            TokenKind::LParen => self.group(acc, mode),
            TokenKind::Add => self.additive(Operator::Add, acc, mode, token.line),
            TokenKind::Sub => self.additive(Operator::Sub, acc, mode, token.line),
            TokenKind::Mul => self.multiplicative(Operator::Mul, acc, mode, token.line),
            TokenKind::Div => self.multiplicative(Operator::Div, acc, mode, token.line),
        }
    }

    /// Evaluates a parenthesized group whose `(` was just consumed.
    fn group(&mut self, acc: f64, mode: Mode) -> EvalResult<f64> {
        let inner = self.evaluate(acc, Mode::Statement)?;

        let closing = self.tokens.current();
        if closing.kind != TokenKind::RParen {
            return Err(SyntaxError::ExpectedClosingParen { found: closing.describe(),
                                                           line:  closing.line, }.into());
        }

        match mode {
            // The group is the whole operand; step past `)` for the caller.
            Mode::HighPrecedence => {
                self.tokens.advance();
                Ok(inner)
            },
            _ => self.evaluate(inner, Mode::PostValue),
        }
    }

    fn additive(&mut self, op: Operator, acc: f64, mode: Mode, line: usize) -> EvalResult<f64> {
        if mode == Mode::HighPrecedence {
            return Ok(acc);
        }

        let rhs = self.evaluate(acc, Mode::Statement)?;
        Ok(op.apply(acc, rhs, line)?)
    }

    fn multiplicative(&mut self,
                      op: Operator,
                      acc: f64,
                      mode: Mode,
                      line: usize)
                      -> EvalResult<f64> {
        let rhs = self.evaluate(acc, Mode::HighPrecedence)?;
        let value = op.apply(acc, rhs, line)?;

        match mode {
            Mode::HighPrecedence => Ok(value),
            _ => self.evaluate(value, Mode::FromCache),
        }
    }
}
