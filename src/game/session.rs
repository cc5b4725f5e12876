use super::detective::Detective;
use super::event::Event;
use crate::explore::Explorer;
use crate::explore::NavigationError;
use crate::explore::Step;
use crate::explore::Visit;
use crate::ledger::Ledger;
use crate::mansion::Scenario;
use crate::verdict::AccusationError;
use crate::verdict::Verdict;

/// What a finished session leaves behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub clues: Vec<String>,
    pub verdict: Result<Verdict, AccusationError>,
}

/// One playthrough of a scenario.
/// Owns the ledger; borrows the mansion and the suspect index, which
/// stay untouched for the whole session.
pub struct Session<'a> {
    scenario: &'a Scenario,
    ledger: Ledger,
}

impl<'a> Session<'a> {
    pub fn new(scenario: &'a Scenario) -> Self {
        Self {
            scenario,
            ledger: Ledger::new(),
        }
    }

    pub fn run<D>(mut self, player: &mut D) -> anyhow::Result<Outcome>
    where
        D: Detective + ?Sized,
    {
        log::info!("starting {:?}", self.scenario.title());
        player.notify(&Event::Opening {
            title: self.scenario.title().to_string(),
        });
        self.explore(player)?;
        let clues = self.ledger.iter().map(String::from).collect::<Vec<_>>();
        player.notify(&Event::Collected(clues.clone()));
        let suspects = self.scenario.suspects().suspects();
        let accused = player.accuse(&suspects)?;
        let verdict = Verdict::evaluate(&self.ledger, self.scenario.suspects(), &accused);
        match &verdict {
            Ok(verdict) => player.notify(&Event::Judged(verdict.clone())),
            Err(e) => player.notify(&Event::Rejected(*e)),
        }
        player.notify(&Event::Farewell);
        Ok(Outcome { clues, verdict })
    }

    fn explore<D>(&mut self, player: &mut D) -> anyhow::Result<()>
    where
        D: Detective + ?Sized,
    {
        let mut explorer = Explorer::new(self.scenario.entrance(), &mut self.ledger);
        player.notify(&Self::entered(explorer.enter()));
        loop {
            let raw = player.navigate(explorer.current())?;
            match explorer.input(&raw) {
                Ok(Step::Moved(visit)) => player.notify(&Self::entered(visit)),
                Ok(Step::Ended) => {
                    player.notify(&Event::Closed {
                        room: explorer.current().name().to_string(),
                    });
                    return Ok(());
                }
                Err(NavigationError::NoPath(side)) => player.notify(&Event::Blocked(side)),
                Err(NavigationError::Unrecognized(input)) => {
                    player.notify(&Event::Invalid(input))
                }
                Err(NavigationError::Finished) => return Ok(()),
            }
        }
    }

    fn entered(visit: Visit<'_>) -> Event {
        Event::Entered {
            room: visit.room.name().to_string(),
            clue: visit.clue().map(String::from),
            fresh: visit.fresh,
        }
    }
}
