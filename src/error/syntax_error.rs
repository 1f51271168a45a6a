#[derive(Debug)]
/// Represents all errors detected while tokenizing or matching the grammar.
pub enum SyntaxError {
    /// The tokenizer produced an error token: an unrecognized character or a
    /// numeric literal with two decimal points.
    InvalidToken {
        /// The offending source text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A token that cannot begin a read, write or assignment statement.
    CannotStartStatement {
        /// Description of the token found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// `READ` was not followed by a variable name.
    ExpectedIdentifier {
        /// Description of the token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A variable at the start of a statement was not followed by `:=`.
    ExpectedAssign {
        /// Description of the token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The right-hand side of an assignment was empty.
    ExpectedValue {
        /// Description of the token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// An expression chained or nested more operators than
    /// [`MAX_NESTING`](crate::interpreter::evaluator::expression::MAX_NESTING)
    /// allows.
    NestingTooDeep {
        /// The source line where the limit was reached.
        line: usize,
    },
    /// A parenthesized group was not closed.
    ExpectedClosingParen {
        /// Description of the token found instead.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl SyntaxError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::InvalidToken { line, .. }
            | Self::CannotStartStatement { line, .. }
            | Self::ExpectedIdentifier { line, .. }
            | Self::ExpectedAssign { line, .. }
            | Self::ExpectedValue { line, .. }
            | Self::NestingTooDeep { line }
            | Self::ExpectedClosingParen { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidToken { text, line } => {
                write!(f, "ERROR on line {line}: Invalid token '{text}'.")
            },
            Self::CannotStartStatement { found, line } => write!(f,
                                                                 "ERROR on line {line}: {found} cannot be the first token of a statement."),
            Self::ExpectedIdentifier { found, line } => {
                write!(f, "ERROR on line {line}: Expected identifier, received {found}.")
            },
            Self::ExpectedAssign { found, line } => write!(f,
                                                           "ERROR on line {line}: Expected assignment operator ':=', received {found}."),
            Self::ExpectedValue { found, line } => write!(f,
                                                          "ERROR on line {line}: Expected a value, but the assignment reached {found}."),
            Self::NestingTooDeep { line } => {
                write!(f, "ERROR on line {line}: Expression is nested too deeply.")
            },
            Self::ExpectedClosingParen { found, line } => write!(f,
                                                                 "ERROR on line {line}: Expected closing parenthesis ')', received {found}."),
        }
    }
}

impl std::error::Error for SyntaxError {}
