use crate::Arbitrary;

/// Which child of a room a move heads toward.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn all() -> [Self; 2] {
        [Self::Left, Self::Right]
    }
}

impl Arbitrary for Side {
    fn random() -> Self {
        match rand::random::<bool>() {
            true => Self::Left,
            false => Self::Right,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}
