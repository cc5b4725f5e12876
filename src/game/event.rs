use crate::mansion::Side;
use crate::verdict::AccusationError;
use crate::verdict::Verdict;

/// Everything a session reports to its player, in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Session starting.
    Opening { title: String },
    /// Player entered a room, with its clue if it has one.
    Entered {
        room: String,
        clue: Option<String>,
        fresh: bool,
    },
    /// No room in that direction; the player stays put.
    Blocked(Side),
    /// Input that is not a move; the player stays put.
    Invalid(String),
    /// Player stopped exploring in this room.
    Closed { room: String },
    /// Collected clues, ascending. Empty when nothing was found.
    Collected(Vec<String>),
    /// Accusation judged.
    Judged(Verdict),
    /// Accusation could not be judged.
    Rejected(AccusationError),
    /// Session over.
    Farewell,
}

impl Event {
    pub fn room(&self) -> Option<&str> {
        match self {
            Event::Entered { room, .. } => Some(room.as_str()),
            Event::Closed { room } => Some(room.as_str()),
            _ => None,
        }
    }
    pub fn is_signal(&self) -> bool {
        matches!(self, Event::Blocked(_) | Event::Invalid(_))
    }
}
