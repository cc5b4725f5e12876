use super::error::NavigationError;
use crate::mansion::Side;
use crate::Arbitrary;
use colored::*;

/// What the player wants to do next.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Choice {
    Go(Side),
    End,
}

impl Choice {
    pub const LEFT: Self = Self::Go(Side::Left);
    pub const RIGHT: Self = Self::Go(Side::Right);
    pub fn all() -> [Self; 3] {
        [Self::LEFT, Self::RIGHT, Self::End]
    }
    pub fn key(&self) -> char {
        match self {
            Self::Go(Side::Left) => 'l',
            Self::Go(Side::Right) => 'r',
            Self::End => 'e',
        }
    }
}

impl From<Side> for Choice {
    fn from(side: Side) -> Self {
        Self::Go(side)
    }
}

impl TryFrom<char> for Choice {
    type Error = NavigationError;
    fn try_from(key: char) -> Result<Self, Self::Error> {
        match key.to_ascii_lowercase() {
            'l' => Ok(Self::LEFT),
            'r' => Ok(Self::RIGHT),
            'e' => Ok(Self::End),
            _ => Err(NavigationError::Unrecognized(key.to_string())),
        }
    }
}

/// Accepts a single key (`l`, `r`, `e`) or the whole word
/// (`left`, `right`, `end`), ignoring case and surrounding whitespace.
impl std::str::FromStr for Choice {
    type Err = NavigationError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let mut chars = input.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => Self::try_from(key),
            _ => match input.to_ascii_lowercase().as_str() {
                "left" => Ok(Self::LEFT),
                "right" => Ok(Self::RIGHT),
                "end" => Ok(Self::End),
                _ => Err(NavigationError::Unrecognized(input.to_string())),
            },
        }
    }
}

impl Arbitrary for Choice {
    fn random() -> Self {
        Self::all()[rand::random_range(0..3)]
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Go(Side::Left) => write!(f, "{}", "LEFT".cyan()),
            Self::Go(Side::Right) => write!(f, "{}", "RIGHT".yellow()),
            Self::End => write!(f, "{}", "END".magenta()),
        }
    }
}
