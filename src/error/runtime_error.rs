#[derive(Debug)]
/// Represents all errors that can occur while executing statements.
pub enum RuntimeError {
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A read-statement received something that is not a number.
    InvalidInput {
        /// The variable being read.
        name:  String,
        /// The text that was received.
        input: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A read-statement found the numeric input exhausted.
    MissingInput {
        /// The variable being read.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Read a variable that was never assigned, with strict variables enabled.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::DivisionByZero { line }
            | Self::InvalidInput { line, .. }
            | Self::MissingInput { line, .. }
            | Self::UnknownVariable { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { line } => {
                write!(f, "ERROR on line {line}: Cannot divide by zero.")
            },
            Self::InvalidInput { name, input, line } => write!(f,
                                                               "ERROR on line {line}: Invalid input '{input}' for '{name}'; expected a number."),
            Self::MissingInput { name, line } => {
                write!(f, "ERROR on line {line}: No input left to read into '{name}'.")
            },
            Self::UnknownVariable { name, line } => {
                write!(f, "ERROR on line {line}: Unknown variable '{name}'.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
