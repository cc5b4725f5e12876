use super::error::AccusationError;
use crate::ledger::Ledger;
use crate::suspects::SuspectIndex;
use crate::Tally;
use crate::ACCUSATION_THRESHOLD;
use colored::*;

/// Judgement on an accusation, given the clues collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    accused: String,
    support: Vec<String>,
}

impl Verdict {
    /// Walk the ledger in order and keep every clue whose suspect is
    /// exactly `accused`. Unknown clues simply do not count.
    pub fn evaluate(
        ledger: &Ledger,
        index: &SuspectIndex,
        accused: &str,
    ) -> Result<Self, AccusationError> {
        if accused.is_empty() {
            log::warn!("accusation rejected: empty name");
            return Err(AccusationError::Empty);
        }
        let support = ledger
            .iter()
            .filter(|clue| index.get(clue) == Some(accused))
            .map(String::from)
            .collect::<Vec<_>>();
        let verdict = Self {
            accused: accused.to_string(),
            support,
        };
        log::info!(
            "accused {:?}: {} matching clues, sustained: {}",
            verdict.accused,
            verdict.matches(),
            verdict.sustained()
        );
        Ok(verdict)
    }

    pub fn accused(&self) -> &str {
        &self.accused
    }
    /// Collected clues implicating the accused, ascending.
    pub fn support(&self) -> &[String] {
        &self.support
    }
    pub fn matches(&self) -> Tally {
        self.support.len()
    }
    pub fn sustained(&self) -> bool {
        self.matches() >= ACCUSATION_THRESHOLD
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.sustained() {
            true => write!(f, "{}", "SUSTAINED".green().bold()),
            false => write!(f, "{}", "NOT SUSTAINED".red().bold()),
        }
    }
}
