use super::event::Event;
use crate::mansion::Room;

/// Whoever walks the mansion: a person at the terminal, a script, a coin.
///
/// The session asks for raw input and validates it itself, so players are
/// free to return anything; bad input is reported back through `notify`
/// and the same question is asked again.
pub trait Detective {
    /// Next navigation input while standing in `room`.
    fn navigate(&mut self, room: &Room) -> anyhow::Result<String>;
    /// Name to accuse once exploring is over. May be empty.
    /// `suspects` lists everyone the evidence could point at, sorted.
    fn accuse(&mut self, suspects: &[&str]) -> anyhow::Result<String>;
    /// Receive every event of the session.
    fn notify(&mut self, event: &Event);
}
