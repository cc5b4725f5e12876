/// A collected clue and the two subtrees ordered around it.
#[derive(Debug)]
pub struct Entry {
    pub(super) text: String,
    pub(super) left: Option<Box<Entry>>,
    pub(super) right: Option<Box<Entry>>,
}

impl Entry {
    pub(super) fn leaf(text: &str) -> Self {
        Self {
            text: text.to_string(),
            left: None,
            right: None,
        }
    }
    pub fn text(&self) -> &str {
        &self.text
    }
    pub fn left(&self) -> Option<&Entry> {
        self.left.as_deref()
    }
    pub fn right(&self) -> Option<&Entry> {
        self.right.as_deref()
    }
}
