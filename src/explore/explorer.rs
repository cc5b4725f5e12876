use super::choice::Choice;
use super::error::NavigationError;
use crate::ledger::Ledger;
use crate::mansion::Room;

/// Entering a room.
/// `fresh` is set when the room's clue was not in the ledger before.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visit<'a> {
    pub room: &'a Room,
    pub fresh: bool,
}

impl<'a> Visit<'a> {
    pub fn clue(&self) -> Option<&'a str> {
        self.room.clue()
    }
    /// Whether there was a clue to find here at all.
    pub fn discovered(&self) -> bool {
        self.clue().is_some()
    }
}

/// Outcome of an accepted choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step<'a> {
    Moved(Visit<'a>),
    Ended,
}

/// Cursor over the mansion that files clues into a ledger.
///
/// Every time a room is entered its clue is offered to the ledger, revisits
/// included; the ledger ignores clues it already holds. A rejected choice
/// never moves the cursor. Visits borrow only the mansion (`'m`), so they
/// outlive the explorer's hold on the ledger (`'l`).
pub struct Explorer<'m, 'l> {
    cursor: &'m Room,
    ledger: &'l mut Ledger,
    over: bool,
}

impl<'m, 'l> Explorer<'m, 'l> {
    pub fn new(start: &'m Room, ledger: &'l mut Ledger) -> Self {
        Self {
            cursor: start,
            ledger,
            over: false,
        }
    }

    /// Enter the room under the cursor. Called once at the start of a walk
    /// and implicitly after every move.
    pub fn enter(&mut self) -> Visit<'m> {
        let room = self.cursor;
        let fresh = room
            .clue()
            .map(|clue| self.ledger.insert(clue))
            .unwrap_or(false);
        log::debug!("entered {} (fresh clue: {})", room.name(), fresh);
        Visit { room, fresh }
    }

    pub fn step(&mut self, choice: Choice) -> Result<Step<'m>, NavigationError> {
        if self.over {
            return Err(NavigationError::Finished);
        }
        match choice {
            Choice::End => {
                log::info!("exploration ended at {}", self.cursor.name());
                self.over = true;
                Ok(Step::Ended)
            }
            Choice::Go(side) => match self.cursor.child(side) {
                Some(next) => {
                    self.cursor = next;
                    Ok(Step::Moved(self.enter()))
                }
                None => {
                    log::warn!("no path {} from {}", side, self.cursor.name());
                    Err(NavigationError::NoPath(side))
                }
            },
        }
    }

    /// Parse raw player input and step. Unrecognized input leaves the
    /// cursor where it was.
    pub fn input(&mut self, raw: &str) -> Result<Step<'m>, NavigationError> {
        match raw.parse::<Choice>() {
            Ok(choice) => self.step(choice),
            Err(e) => {
                log::warn!("{}", e);
                Err(e)
            }
        }
    }

    pub fn current(&self) -> &'m Room {
        self.cursor
    }
    pub fn ledger(&self) -> &Ledger {
        &*self.ledger
    }
    pub fn is_over(&self) -> bool {
        self.over
    }
}
