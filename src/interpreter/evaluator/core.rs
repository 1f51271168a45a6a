use std::io::{BufRead, Write};

use crate::{
    error::{Error, RuntimeError, SyntaxError},
    interpreter::{
        evaluator::expression::Mode,
        input::NumberReader,
        lexer::{Token, TokenKind, Tokenizer},
        lookahead::Lookahead,
        symbols::SymbolTable,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or the
/// [`Error`] that aborts the run.
pub type EvalResult<T> = Result<T, Error>;

/// Settings that change how a program runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Options {
    /// Treat reading a variable that was never assigned as an error instead of
    /// reading it as `0`.
    pub strict_variables: bool,
}

/// Executes a program one statement at a time while it is being tokenized.
///
/// The interpreter owns everything a run needs: the lookahead cache in front
/// of the tokenizer, the variables, the numeric input for read-statements and
/// the output sink. Nothing is shared between runs.
///
/// ## Usage
///
/// Create one interpreter per program and call [`Interpreter::run`]. Output is
/// written as each statement finishes, so prompts for read-statements appear
/// before the input they ask for is consumed.
pub struct Interpreter<'src, R, W> {
    pub(in crate::interpreter::evaluator) tokens: Lookahead<'src>,
    pub(in crate::interpreter::evaluator) depth:  usize,
    symbols: SymbolTable,
    input:   NumberReader<R>,
    output:  W,
    options: Options,
}

impl<'src, R: BufRead, W: Write> Interpreter<'src, R, W> {
    /// Creates an interpreter for `source`, reading numbers for
    /// read-statements from `input` and writing to `output`.
    pub fn new(source: &'src str, input: R, output: W, options: Options) -> Self {
        Self { tokens: Lookahead::new(Tokenizer::new(source)),
               depth: 0,
               symbols: SymbolTable::new(),
               input: NumberReader::new(input),
               output,
               options }
    }

    /// Runs every statement of the program and returns how many were
    /// executed.
    ///
    /// On success a final `Number of tokens = <count>` line is written,
    /// preceded by an empty line.
    ///
    /// # Errors
    /// Stops at the first syntax or runtime error. Output already written by
    /// earlier statements is kept; the failing statement writes nothing.
    pub fn run(&mut self) -> EvalResult<usize> {
        let mut statements = 0;

        loop {
            let token = self.tokens.current();
            match token.kind {
                TokenKind::EndOfInput => break,
                TokenKind::ReadKeyword => self.read_statement()?,
                TokenKind::WriteKeyword => self.write_statement()?,
                TokenKind::Identifier => self.assignment(&token)?,
                TokenKind::Error => {
                    return Err(SyntaxError::InvalidToken { text: token.text,
                                                           line: token.line, }.into());
                },
                _ => {
                    return Err(SyntaxError::CannotStartStatement { found: token.describe(),
                                                                   line:  token.line, }.into());
                },
            }
            statements += 1;
        }

        writeln!(self.output)?;
        writeln!(self.output, "Number of tokens = {statements}")?;
        Ok(statements)
    }

    /// Returns the variables as they stand.
    #[must_use]
    pub const fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// Flushes the output sink.
    ///
    /// # Errors
    /// Propagates the I/O error from the sink.
    pub fn flush(&mut self) -> EvalResult<()> {
        Ok(self.output.flush()?)
    }

    /// Consumes the interpreter and returns the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// `READ <identifier>`: prompts for a number and stores it.
    fn read_statement(&mut self) -> EvalResult<()> {
        let target = self.tokens.advance();
        if target.kind != TokenKind::Identifier {
            return Err(SyntaxError::ExpectedIdentifier { found: target.describe(),
                                                         line:  target.line, }.into());
        }

        write!(self.output, "Read: Enter a value for {} => ", target.text)?;
        self.output.flush()?;

        let Some(word) = self.input.next_word()? else {
            return Err(RuntimeError::MissingInput { name: target.text,
                                                    line: target.line, }.into());
        };
        let value = match word.parse::<f64>() {
            Ok(value) if value.is_finite() => value,
            _ => {
                return Err(RuntimeError::InvalidInput { name:  target.text,
                                                        input: word,
                                                        line:  target.line, }.into());
            },
        };

        self.symbols.set(&target.text, value);
        self.tokens.advance();
        Ok(())
    }

    /// `WRITE <expression>`: evaluates the expression and prints it.
    fn write_statement(&mut self) -> EvalResult<()> {
        let value = self.evaluate(0.0, Mode::Statement)?;
        writeln!(self.output, "Write: {value}")?;
        Ok(())
    }

    /// `<identifier> := <expression>`: evaluates the expression and stores it.
    fn assignment(&mut self, target: &Token) -> EvalResult<()> {
        let operator = self.tokens.advance();
        if operator.kind != TokenKind::Assign {
            return Err(SyntaxError::ExpectedAssign { found: operator.describe(),
                                                     line:  operator.line, }.into());
        }

        let first = self.tokens.advance();
        if matches!(first.kind,
                    TokenKind::EndOfInput
                    | TokenKind::ReadKeyword
                    | TokenKind::WriteKeyword
                    | TokenKind::Assign
                    | TokenKind::RParen)
        {
            return Err(SyntaxError::ExpectedValue { found: first.describe(),
                                                    line:  first.line, }.into());
        }
        self.tokens.hold();

        let value = self.evaluate(0.0, Mode::Statement)?;
        writeln!(self.output, "Assign: {} := {value}", target.text)?;
        self.symbols.set(&target.text, value);
        Ok(())
    }

    /// Returns the value of an identifier or numeric literal token.
    pub(in crate::interpreter::evaluator) fn value_of(&mut self, token: &Token) -> EvalResult<f64> {
        if token.kind == TokenKind::Identifier {
            if self.options.strict_variables && !self.symbols.contains(&token.text) {
                return Err(RuntimeError::UnknownVariable { name: token.text.clone(),
                                                           line: token.line, }.into());
            }
            return Ok(self.symbols.get(&token.text));
        }

        token.value.ok_or_else(|| {
                       Error::from(SyntaxError::InvalidToken { text: token.text.clone(),
                                                               line: token.line, })
                   })
    }
}
