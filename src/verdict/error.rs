/// An accusation that cannot be judged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccusationError {
    /// Nobody was named.
    Empty,
}

impl std::fmt::Display for AccusationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "invalid accusation: no name given"),
        }
    }
}

impl std::error::Error for AccusationError {}
