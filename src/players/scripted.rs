use crate::game::Detective;
use crate::game::Event;
use crate::mansion::Room;
use std::collections::VecDeque;

/// Replays a fixed list of inputs, then a fixed accusation.
/// Once the inputs run out it ends exploration, so a session driven by a
/// script always terminates. Every event heard is kept in order.
#[derive(Debug, Default, Clone)]
pub struct Scripted {
    moves: VecDeque<String>,
    accused: String,
    transcript: Vec<Event>,
}

impl Scripted {
    pub fn new<I, S>(moves: I, accused: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
            accused: accused.to_string(),
            transcript: Vec::new(),
        }
    }
    /// Inputs separated by commas or whitespace, e.g. `"l, r, e"`.
    pub fn parse(script: &str, accused: &str) -> Self {
        Self::new(
            script
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty()),
            accused,
        )
    }
    pub fn transcript(&self) -> &[Event] {
        &self.transcript
    }
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Detective for Scripted {
    fn navigate(&mut self, _: &Room) -> anyhow::Result<String> {
        Ok(self.moves.pop_front().unwrap_or_else(|| String::from("e")))
    }
    fn accuse(&mut self, _: &[&str]) -> anyhow::Result<String> {
        Ok(self.accused.clone())
    }
    fn notify(&mut self, event: &Event) {
        self.transcript.push(event.clone());
    }
}
