/// Syntax errors.
///
/// Defines the errors detected while tokenizing and matching the statement
/// grammar: invalid tokens, malformed literals, misplaced tokens and
/// unterminated groups.
pub mod syntax_error;
/// Runtime errors.
///
/// Contains the errors raised while executing statements, such as division by
/// zero or malformed numeric input.
pub mod runtime_error;

pub use runtime_error::RuntimeError;
pub use syntax_error::SyntaxError;

#[derive(Debug)]
/// Any failure that aborts a run.
///
/// Every variant is fatal: the interpreter stops at the first error and
/// reports it together with the offending line.
pub enum Error {
    /// The program text does not follow the grammar.
    Syntax(SyntaxError),
    /// A statement failed while executing.
    Runtime(RuntimeError),
    /// Reading numeric input or writing output failed.
    Io(std::io::Error),
}

impl Error {
    /// Returns the source line the error refers to, if it has one.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax(e) => Some(e.line()),
            Self::Runtime(e) => Some(e.line()),
            Self::Io(_) => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
            Self::Io(e) => write!(f, "ERROR: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
            Self::Io(e) => Some(e),
        }
    }
}

impl From<SyntaxError> for Error {
    fn from(e: SyntaxError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
