//! Insertion-ordered frequency counting.
//!
//! Rankings over themes and sentiment labels break ties by the order in which
//! keys were first seen, so counts are kept in a small vector rather than a
//! hash map.

/// A frequency counter that remembers first-seen order.
#[derive(Debug, Clone)]
pub struct Tally<K> {
    counts: Vec<(K, usize)>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Tally { counts: Vec::new() }
    }
}

impl<K: PartialEq + Clone> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K) {
        self.add_n(key, 1);
    }

    pub fn add_n(&mut self, key: K, n: usize) {
        match self.counts.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count += n,
            None => self.counts.push((key, n)),
        }
    }

    /// Count for `key`; zero if never seen.
    pub fn get(&self, key: &K) -> usize {
        self.counts
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// All keys with counts, highest first; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<(K, usize)> {
        let mut ranked = self.counts.clone();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// The `n` most frequent keys.
    pub fn top(&self, n: usize) -> Vec<K> {
        self.ranked().into_iter().take(n).map(|(k, _)| k).collect()
    }

    /// The most frequent key; the first-seen one wins a tie.
    pub fn leader(&self) -> Option<K> {
        self.ranked().into_iter().next().map(|(k, _)| k)
    }

    /// The most frequent key; the last-seen one wins a tie.
    pub fn last_leader(&self) -> Option<K> {
        self.counts
            .iter()
            .fold(None::<&(K, usize)>, |best, candidate| match best {
                Some(current) if current.1 > candidate.1 => Some(current),
                _ => Some(candidate),
            })
            .map(|(k, _)| k.clone())
    }
}
