use super::choice::Choice;
use super::error::NavigationError;
use super::explorer::Explorer;
use super::explorer::Step;
use super::explorer::Visit;
use crate::ledger::Ledger;
use crate::mansion::Room;

/// Drive an explorer from a sequence of choices.
/// Yields the start room first, then every room moved into. Blocked moves
/// are skipped; the walk stops at `End` or when the choices run out.
pub fn explore<'m, 'l, I>(
    start: &'m Room,
    ledger: &'l mut Ledger,
    choices: I,
) -> Walk<'m, 'l, I::IntoIter>
where
    I: IntoIterator<Item = Choice>,
{
    Walk {
        explorer: Explorer::new(start, ledger),
        choices: choices.into_iter(),
        started: false,
    }
}

pub struct Walk<'m, 'l, I> {
    explorer: Explorer<'m, 'l>,
    choices: I,
    started: bool,
}

impl<'m, 'l, I> Walk<'m, 'l, I> {
    pub fn explorer(&self) -> &Explorer<'m, 'l> {
        &self.explorer
    }
}

impl<'m, 'l, I> Iterator for Walk<'m, 'l, I>
where
    I: Iterator<Item = Choice>,
{
    type Item = Visit<'m>;
    fn next(&mut self) -> Option<Self::Item> {
        if !self.started {
            self.started = true;
            return Some(self.explorer.enter());
        }
        loop {
            match self.explorer.step(self.choices.next()?) {
                Ok(Step::Moved(visit)) => return Some(visit),
                Ok(Step::Ended) => return None,
                Err(NavigationError::Finished) => return None,
                Err(_) => continue,
            }
        }
    }
}
