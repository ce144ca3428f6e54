use std::fmt;

/// Errors raised when a profile fails input validation.
///
/// The projection itself never fails for numerically valid input: degenerate
/// profiles (zero income, zero assets) produce a timeline that depletes
/// immediately, which is correct output. Only malformed numbers are rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfileError {
    /// A required numeric field is NaN or infinite.
    InvalidField { field: &'static str },
}

impl fmt::Display for ProfileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileError::InvalidField { field } => {
                write!(f, "invalid profile field: {field}")
            }
        }
    }
}

impl std::error::Error for ProfileError {}

pub type Result<T> = std::result::Result<T, ProfileError>;
