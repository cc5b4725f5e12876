use super::entry::Entry;
use std::cmp::Ordering;

/// Binary search tree of collected clues.
/// Keys are unique and ordered by exact string comparison. No rebalancing:
/// an unlucky visiting order degrades the tree into a list, so insertion,
/// traversal and teardown all run without recursion.
#[derive(Debug, Default)]
pub struct Ledger {
    root: Option<Box<Entry>>,
    len: usize,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a clue. Returns whether it was new.
    /// Empty text and clues already present leave the tree untouched.
    pub fn insert(&mut self, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let mut slot = &mut self.root;
        while let Some(entry) = slot {
            slot = match text.cmp(entry.text.as_str()) {
                Ordering::Less => &mut entry.left,
                Ordering::Greater => &mut entry.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Box::new(Entry::leaf(text)));
        self.len += 1;
        log::debug!("ledger recorded {:?} ({} clues)", text, self.len);
        true
    }

    pub fn contains(&self, text: &str) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(entry) = cursor {
            cursor = match text.cmp(entry.text.as_str()) {
                Ordering::Less => entry.left(),
                Ordering::Greater => entry.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn root(&self) -> Option<&Entry> {
        self.root.as_deref()
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }
    /// Number of entries on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        let mut stack = self.root().map(|e| (e, 1)).into_iter().collect::<Vec<_>>();
        while let Some((entry, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            stack.extend(entry.left().map(|e| (e, depth + 1)));
            stack.extend(entry.right().map(|e| (e, depth + 1)));
        }
        deepest
    }

    /// Clues in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        let mut iter = Iter { stack: Vec::new() };
        iter.descend(self.root());
        iter
    }
}

/// In-order traversal over a ledger.
pub struct Iter<'a> {
    stack: Vec<&'a Entry>,
}

impl<'a> Iter<'a> {
    fn descend(&mut self, mut cursor: Option<&'a Entry>) {
        while let Some(entry) = cursor {
            self.stack.push(entry);
            cursor = entry.left();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;
    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        self.descend(entry.right());
        Some(entry.text())
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a str;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: AsRef<str>> Extend<S> for Ledger {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for text in iter {
            self.insert(text.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Ledger {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut ledger = Self::new();
        ledger.extend(iter);
        ledger
    }
}

/// Post-order teardown with an explicit stack.
impl Drop for Ledger {
    fn drop(&mut self) {
        let mut stack = self.root.take().into_iter().collect::<Vec<_>>();
        while let Some(mut entry) = stack.pop() {
            stack.extend(entry.left.take());
            stack.extend(entry.right.take());
        }
    }
}

impl std::fmt::Display for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        self.iter().try_for_each(|clue| writeln!(f, "- {}", clue))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clue() -> String {
        let n = rand::random_range(1..6);
        (0..n)
            .map(|_| rand::random_range(b'a'..=b'e') as char)
            .collect()
    }

    #[test]
    fn sorted_and_distinct() {
        let ledger = ["Vidro com impressão", "Pegada de sapato", "Copo quebrado"]
            .into_iter()
            .collect::<Ledger>();
        let clues = ledger.iter().collect::<Vec<_>>();
        assert_eq!(
            clues,
            vec!["Copo quebrado", "Pegada de sapato", "Vidro com impressão"]
        );
    }

    #[test]
    fn duplicates_collapse() {
        let mut ledger = Ledger::new();
        assert!(ledger.insert("Pegada de sapato"));
        assert!(!ledger.insert("Pegada de sapato"));
        assert!(ledger.insert("Carta rasgada"));
        assert!(!ledger.insert("Carta rasgada"));
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.iter().count(), 2);
    }

    #[test]
    fn empty_text_is_never_recorded() {
        let mut ledger = Ledger::new();
        assert!(!ledger.insert(""));
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
        assert_eq!(ledger.iter().next(), None);
    }

    #[test]
    fn membership() {
        let ledger = ["Luvas sujas", "Cabelo loiro"].into_iter().collect::<Ledger>();
        assert!(ledger.contains("Luvas sujas"));
        assert!(ledger.contains("Cabelo loiro"));
        assert!(!ledger.contains("luvas sujas"));
        assert!(!ledger.contains(""));
    }

    #[test]
    fn case_sensitive_byte_order() {
        let ledger = ["b", "B", "a", "A"].into_iter().collect::<Ledger>();
        assert_eq!(ledger.iter().collect::<Vec<_>>(), vec!["A", "B", "a", "b"]);
    }

    #[test]
    fn shape_follows_insertion_order() {
        let ledger = ["m", "f", "t", "a", "h"].into_iter().collect::<Ledger>();
        assert_eq!(ledger.root().map(Entry::text), Some("m"));
        assert_eq!(ledger.root().and_then(Entry::left).map(Entry::text), Some("f"));
        assert_eq!(ledger.root().and_then(Entry::right).map(Entry::text), Some("t"));
        assert_eq!(ledger.depth(), 3);
    }

    #[test]
    fn sorted_input_degrades_without_overflow() {
        let n = 10_000;
        let ledger = (0..n).map(|i| format!("{:08}", i)).collect::<Ledger>();
        assert_eq!(ledger.len(), n);
        assert_eq!(ledger.depth(), n);
        assert_eq!(ledger.iter().count(), n);
        drop(ledger);
    }

    #[test]
    fn random_insertions_are_strictly_ascending() {
        for _ in 0..50 {
            let clues = (0..64).map(|_| clue()).collect::<Vec<_>>();
            let ledger = clues.iter().collect::<Ledger>();
            let walked = ledger.iter().collect::<Vec<_>>();
            assert!(walked.windows(2).all(|w| w[0] < w[1]));
            let mut expected = clues.iter().map(String::as_str).collect::<Vec<_>>();
            expected.sort();
            expected.dedup();
            assert_eq!(walked, expected);
            assert_eq!(ledger.len(), expected.len());
        }
    }

    #[test]
    fn display_lists_one_clue_per_line() {
        let ledger = ["b", "a"].into_iter().collect::<Ledger>();
        assert_eq!(ledger.to_string(), "- a\n- b\n");
        assert_eq!(Ledger::new().to_string(), "");
    }
}
