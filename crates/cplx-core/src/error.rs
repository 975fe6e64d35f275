use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ComplexError {
    #[error("can't divide by zero")]
    DivisionByZero,

    #[error("can't take the logarithm of zero")]
    LogarithmOfZero,
}

impl ComplexError {
    /// Stable machine-readable code, used in JSON error responses.
    pub fn code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "division_by_zero",
            Self::LogarithmOfZero => "logarithm_of_zero",
        }
    }
}

pub type ComplexResult<T> = Result<T, ComplexError>;
