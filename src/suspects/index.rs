use super::hash::fold;
use crate::Bucket;
use crate::HASH_BUCKETS;
use std::collections::BTreeSet;
use std::collections::VecDeque;

/// One clue and the suspect it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Pair {
    clue: String,
    suspect: String,
}

/// Chained hash table from clue to suspect.
/// Every bucket is a chain scanned by exact comparison on the clue;
/// a clue appears at most once across the whole table.
#[derive(Debug, Clone)]
pub struct SuspectIndex {
    chains: Vec<VecDeque<Pair>>,
    len: usize,
}

impl Default for SuspectIndex {
    fn default() -> Self {
        Self::with_buckets(HASH_BUCKETS)
    }
}

impl SuspectIndex {
    pub fn new() -> Self {
        Self::default()
    }
    /// A zero bucket count is raised to one.
    pub fn with_buckets(buckets: usize) -> Self {
        Self {
            chains: vec![VecDeque::new(); buckets.max(1)],
            len: 0,
        }
    }

    /// Associate a clue with a suspect.
    /// An existing clue is overwritten in place and its previous suspect
    /// returned; a new clue goes to the front of its chain.
    pub fn put(&mut self, clue: &str, suspect: &str) -> Option<String> {
        let bucket = self.bucket(clue);
        let chain = &mut self.chains[bucket];
        if let Some(pair) = chain.iter_mut().find(|pair| pair.clue == clue) {
            log::debug!("reassigning {:?} to {:?}", clue, suspect);
            return Some(std::mem::replace(&mut pair.suspect, suspect.to_string()));
        }
        log::debug!("indexing {:?} -> {:?} in bucket {}", clue, suspect, bucket);
        chain.push_front(Pair {
            clue: clue.to_string(),
            suspect: suspect.to_string(),
        });
        self.len += 1;
        None
    }

    /// The suspect a clue points at. Unknown clues are a normal outcome.
    pub fn get(&self, clue: &str) -> Option<&str> {
        self.chains[self.bucket(clue)]
            .iter()
            .find(|pair| pair.clue == clue)
            .map(|pair| pair.suspect.as_str())
    }
    pub fn contains(&self, clue: &str) -> bool {
        self.get(clue).is_some()
    }

    pub fn bucket(&self, clue: &str) -> Bucket {
        fold(clue, self.chains.len())
    }
    pub fn buckets(&self) -> usize {
        self.chains.len()
    }
    /// Length of the longest chain.
    pub fn longest(&self) -> usize {
        self.chains.iter().map(VecDeque::len).max().unwrap_or(0)
    }
    pub fn len(&self) -> usize {
        self.len
    }
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// (clue, suspect) pairs, bucket by bucket, each chain front to back.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.chains
            .iter()
            .flatten()
            .map(|pair| (pair.clue.as_str(), pair.suspect.as_str()))
    }
    /// Distinct suspects in alphabetical order.
    pub fn suspects(&self) -> Vec<&str> {
        self.iter()
            .map(|(_, suspect)| suspect)
            .collect::<BTreeSet<&str>>()
            .into_iter()
            .collect()
    }
}

impl<C, S> FromIterator<(C, S)> for SuspectIndex
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    fn from_iter<T: IntoIterator<Item = (C, S)>>(iter: T) -> Self {
        let mut index = Self::new();
        index.extend(iter);
        index
    }
}

impl<C, S> Extend<(C, S)> for SuspectIndex
where
    C: AsRef<str>,
    S: AsRef<str>,
{
    fn extend<T: IntoIterator<Item = (C, S)>>(&mut self, iter: T) {
        for (clue, suspect) in iter {
            self.put(clue.as_ref(), suspect.as_ref());
        }
    }
}
