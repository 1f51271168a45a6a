use crate::error::RuntimeError;

/// The four arithmetic operators of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl Operator {
    /// Applies the operator to `left` and `right`.
    ///
    /// # Errors
    /// Returns `RuntimeError::DivisionByZero` when dividing by zero.
    ///
    /// # Example
    /// ```
    /// use calc_interp::{error::RuntimeError, interpreter::evaluator::arithmetic::Operator};
    ///
    /// assert_eq!(Operator::Sub.apply(10.0, 4.0, 1).unwrap(), 6.0);
    /// assert!(matches!(Operator::Div.apply(1.0, 0.0, 3),
    ///                  Err(RuntimeError::DivisionByZero { line: 3 })));
    /// ```
    pub fn apply(self, left: f64, right: f64, line: usize) -> Result<f64, RuntimeError> {
        match self {
            Self::Add => Ok(left + right),
            Self::Sub => Ok(left - right),
            Self::Mul => Ok(left * right),
            Self::Div => {
                if right == 0.0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                Ok(left / right)
            },
        }
    }
}
