use crate::mansion::Side;

/// Navigation input that cannot be acted on.
/// Always recoverable: the cursor stays where it was and the player
/// chooses again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    /// No room in that direction.
    NoPath(Side),
    /// Input that is not one of left, right or end.
    Unrecognized(String),
    /// Exploration already ended.
    Finished,
}

impl std::fmt::Display for NavigationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPath(side) => write!(f, "no path to the {}", side),
            Self::Unrecognized(s) => write!(f, "invalid choice: {:?}", s),
            Self::Finished => write!(f, "exploration already ended"),
        }
    }
}

impl std::error::Error for NavigationError {}
