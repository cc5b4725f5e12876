use super::side::Side;
use crate::CLUE_LIMIT;
use crate::NAME_LIMIT;

/// A room of the mansion.
/// Each room owns its two optional children, so the whole mansion is owned
/// by its entrance and torn down children-first when the entrance drops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    clue: Option<String>,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    /// Name and clue are cut to `NAME_LIMIT` and `CLUE_LIMIT` characters.
    /// An empty clue is stored as no clue at all.
    pub fn new(name: &str, clue: &str) -> Self {
        Self {
            name: bounded(name, NAME_LIMIT),
            clue: Some(bounded(clue, CLUE_LIMIT)).filter(|c| !c.is_empty()),
            left: None,
            right: None,
        }
    }
    pub fn bare(name: &str) -> Self {
        Self::new(name, "")
    }
    pub fn with_left(self, room: Room) -> Self {
        self.with(Side::Left, room)
    }
    pub fn with_right(self, room: Room) -> Self {
        self.with(Side::Right, room)
    }
    pub fn with(mut self, side: Side, room: Room) -> Self {
        match side {
            Side::Left => self.left = Some(Box::new(room)),
            Side::Right => self.right = Some(Box::new(room)),
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    /// The clue left here, if any.
    pub fn clue(&self) -> Option<&str> {
        self.clue.as_deref()
    }
    pub fn child(&self, side: Side) -> Option<&Room> {
        match side {
            Side::Left => self.left.as_deref(),
            Side::Right => self.right.as_deref(),
        }
    }
    pub fn left(&self) -> Option<&Room> {
        self.child(Side::Left)
    }
    pub fn right(&self) -> Option<&Room> {
        self.child(Side::Right)
    }
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
    /// Sides that lead somewhere from here.
    pub fn exits(&self) -> Vec<Side> {
        Side::all()
            .into_iter()
            .filter(|side| self.child(*side).is_some())
            .collect()
    }

    /// Pre-order walk over this room and everything below it.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let room = stack.pop()?;
            stack.extend(room.right());
            stack.extend(room.left());
            Some(room)
        })
    }
    pub fn count(&self) -> usize {
        self.rooms().count()
    }
    pub fn depth(&self) -> usize {
        1 + Side::all()
            .into_iter()
            .filter_map(|side| self.child(side))
            .map(Room::depth)
            .max()
            .unwrap_or(0)
    }
    pub fn find(&self, name: &str) -> Option<&Room> {
        self.rooms().find(|room| room.name == name)
    }
}

impl std::fmt::Display for Room {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

fn bounded(text: &str, limit: usize) -> String {
    text.chars().take(limit).collect()
}
