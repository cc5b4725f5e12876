use crate::explore::Choice;
use crate::game::Detective;
use crate::game::Event;
use crate::mansion::Room;
use crate::WANDER_STEPS;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::IndexedRandom;

/// Random walker.
/// Takes an open exit at every step, ends exploration after a fixed number
/// of steps or at a dead end, then accuses a random suspect unless told
/// whom to accuse.
#[derive(Debug)]
pub struct Wanderer {
    rng: SmallRng,
    steps: usize,
    taken: usize,
    accused: Option<String>,
}

impl Default for Wanderer {
    fn default() -> Self {
        Self::new(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Wanderer {
    fn new(rng: SmallRng) -> Self {
        Self {
            rng,
            steps: WANDER_STEPS,
            taken: 0,
            accused: None,
        }
    }
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }
    pub fn accusing(mut self, accused: &str) -> Self {
        self.accused = Some(accused.to_string());
        self
    }
}

impl Detective for Wanderer {
    fn navigate(&mut self, room: &Room) -> anyhow::Result<String> {
        let choice = match self.taken < self.steps {
            true => room
                .exits()
                .choose(&mut self.rng)
                .copied()
                .map(Choice::Go)
                .unwrap_or(Choice::End),
            false => Choice::End,
        };
        self.taken += 1;
        Ok(choice.key().to_string())
    }
    fn accuse(&mut self, suspects: &[&str]) -> anyhow::Result<String> {
        Ok(match &self.accused {
            Some(accused) => accused.clone(),
            None => suspects
                .choose(&mut self.rng)
                .map(|s| s.to_string())
                .unwrap_or_default(),
        })
    }
    fn notify(&mut self, event: &Event) {
        log::debug!("wanderer heard {:?}", event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mansion::Scenario;

    #[test]
    fn never_picks_a_wall() {
        let scenario = Scenario::classic();
        let mut wanderer = Wanderer::default().steps(usize::MAX);
        for room in scenario.entrance().rooms() {
            for _ in 0..20 {
                let input = wanderer.navigate(room).expect("infallible");
                let choice = input.parse::<Choice>().expect("valid key");
                match choice {
                    Choice::Go(side) => assert!(room.child(side).is_some()),
                    Choice::End => assert!(room.is_leaf()),
                }
            }
        }
    }

    #[test]
    fn stops_after_its_steps() {
        let room = Room::bare("Hall").with_left(Room::bare("Estar"));
        let mut wanderer = Wanderer::seeded(7).steps(2);
        assert_eq!(wanderer.navigate(&room).ok(), Some("l".to_string()));
        assert_eq!(wanderer.navigate(&room).ok(), Some("l".to_string()));
        assert_eq!(wanderer.navigate(&room).ok(), Some("e".to_string()));
    }

    #[test]
    fn same_seed_same_walk() {
        let scenario = Scenario::classic();
        let walk = |seed| {
            let mut wanderer = Wanderer::seeded(seed);
            scenario
                .entrance()
                .rooms()
                .map(|room| wanderer.navigate(room).expect("infallible"))
                .collect::<Vec<_>>()
        };
        assert_eq!(walk(42), walk(42));
    }

    #[test]
    fn accuses_someone_from_the_roster() {
        let mut wanderer = Wanderer::seeded(3);
        let roster = ["Dr. Ramos", "Sr. Silva"];
        let accused = wanderer.accuse(&roster).expect("infallible");
        assert!(roster.contains(&accused.as_str()));
        assert_eq!(wanderer.accuse(&[]).ok(), Some(String::new()));
        let mut wanderer = Wanderer::seeded(3).accusing("Sr. Costa");
        assert_eq!(wanderer.accuse(&roster).ok(), Some("Sr. Costa".to_string()));
    }
}
