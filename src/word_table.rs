//! WordTable: open-addressing word counter with linear probing and x3 growth.

use crate::entry::{normalize, Entry};
use core::fmt;

/// Slot count used by `WordTable::new`.
pub const DEFAULT_CAPACITY: usize = 10;
/// Capacity multiplier applied on every grow-and-rehash.
pub const GROWTH_FACTOR: usize = 3;

/// Failure constructing a `WordTable`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Initial capacity was zero; keys are taken modulo capacity.
    InvalidArgument,
}

impl fmt::Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::InvalidArgument => f.write_str("initial capacity must be positive"),
        }
    }
}

impl std::error::Error for TableError {}

/// Outcome of probing for a normalized word.
enum Probe {
    Occupied(usize),
    Vacant(usize),
}

/// Case-insensitive word counter.
///
/// Every slot is either empty or holds one `Entry`. A word lives in the first
/// slot at or after `key(word)` (wrapping) that was free when it was
/// inserted, so lookups stop at the first empty slot.
#[derive(Debug, Clone)]
pub struct WordTable {
    slots: Vec<Option<Entry>>,
    unique: usize,
    total: u64,
}

impl WordTable {
    /// Table with `DEFAULT_CAPACITY` slots.
    pub fn new() -> Self {
        Self::empty(DEFAULT_CAPACITY)
    }

    /// Table with `capacity` empty slots. Zero is rejected.
    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        if capacity == 0 {
            return Err(TableError::InvalidArgument);
        }
        Ok(Self::empty(capacity))
    }

    fn empty(capacity: usize) -> Self {
        #[cfg(feature = "logging")]
        log::trace!("word table created with capacity {}", capacity);
        Self {
            slots: empty_slots(capacity),
            unique: 0,
            total: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Home slot for `word` under the current capacity: the sum of the
    /// lowercased word's code points, modulo capacity. Permutations of the
    /// same characters share a key.
    pub fn key(&self, word: &str) -> usize {
        home_slot(&normalize(word), self.capacity())
    }

    /// Entry for `word`, if it has been added.
    pub fn lookup(&self, word: &str) -> Option<&Entry> {
        let word = normalize(word);
        match probe(&self.slots, &word) {
            Probe::Occupied(i) => self.slots[i].as_ref(),
            Probe::Vacant(_) => None,
        }
    }

    /// Number of times `word` was added; 0 if never.
    pub fn frequency(&self, word: &str) -> u64 {
        self.lookup(word).map_or(0, Entry::count)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.lookup(word).is_some()
    }

    /// Count one occurrence of `word`.
    ///
    /// Bumps the existing entry or places a new one in the first empty slot
    /// along the probe. When the unique count reaches capacity the table
    /// grows and every entry is rehashed.
    pub fn add_word(&mut self, word: &str) {
        let word = normalize(word);
        self.total = self.total.saturating_add(1);

        match probe(&self.slots, &word) {
            Probe::Occupied(i) => {
                if let Some(entry) = self.slots[i].as_mut() {
                    entry.increment();
                }
            }
            Probe::Vacant(i) => {
                self.slots[i] = Some(Entry::from_normalized(word));
                self.unique += 1;
                if self.unique >= self.capacity() {
                    self.grow_and_rehash();
                }
            }
        }
    }

    /// Multiply capacity by `GROWTH_FACTOR` and reinsert entries in storage
    /// order. Counts and the running total are untouched.
    fn grow_and_rehash(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.saturating_mul(GROWTH_FACTOR);
        let old = std::mem::replace(&mut self.slots, empty_slots(new_capacity));

        for entry in old.into_iter().flatten() {
            let i = first_vacant(&self.slots, home_slot(entry.word(), new_capacity));
            self.slots[i] = Some(entry);
        }

        #[cfg(feature = "logging")]
        log::debug!(
            "word table grew from {} to {} slots ({} unique words)",
            old_capacity,
            new_capacity,
            self.unique
        );
    }

    pub fn num_unique_words(&self) -> usize {
        self.unique
    }

    /// Number of `add_word` calls made, saturating at `u64::MAX`.
    pub fn total_num_of_words(&self) -> u64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.unique
    }

    pub fn is_empty(&self) -> bool {
        self.unique == 0
    }

    /// Word with the highest count. Ties go to the entry stored first in the
    /// backing array. `None` on an empty table.
    pub fn most_common_word(&self) -> Option<&str> {
        let mut best: Option<&Entry> = None;
        let mut best_count = 0;
        for entry in self.iter() {
            if entry.count() > best_count {
                best_count = entry.count();
                best = Some(entry);
            }
        }
        best.map(Entry::word)
    }

    /// `frequency(word) / total_num_of_words()`, or 0.0 before any word is added.
    pub fn term_frequency(&self, word: &str) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.frequency(word) as f64 / self.total as f64
    }

    /// Occupied entries in storage order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            it: self.slots.iter(),
        }
    }

    #[cfg(test)]
    pub(crate) fn slots(&self) -> &[Option<Entry>] {
        &self.slots
    }
}

impl Default for WordTable {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: AsRef<str>> Extend<S> for WordTable {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for word in iter {
            self.add_word(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for WordTable {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut table = WordTable::new();
        table.extend(iter);
        table
    }
}

/// Iterator over occupied entries in `WordTable`, in storage order.
pub struct Iter<'a> {
    it: core::slice::Iter<'a, Option<Entry>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Entry;
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.find_map(Option::as_ref)
    }
}

impl<'a> IntoIterator for &'a WordTable {
    type Item = &'a Entry;
    type IntoIter = Iter<'a>;
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn empty_slots(capacity: usize) -> Vec<Option<Entry>> {
    let mut slots = Vec::with_capacity(capacity);
    slots.resize_with(capacity, || None);
    slots
}

/// Additive key of an already-normalized word.
pub(crate) fn home_slot(word: &str, capacity: usize) -> usize {
    let sum = word
        .chars()
        .fold(0u64, |acc, c| acc.wrapping_add(u64::from(u32::from(c))));
    (sum % capacity as u64) as usize
}

/// Walk forward from `word`'s home slot until it is found or an empty slot
/// is reached. Terminates because at least one slot is always empty.
fn probe(slots: &[Option<Entry>], word: &str) -> Probe {
    let capacity = slots.len();
    let mut i = home_slot(word, capacity);
    loop {
        match &slots[i] {
            None => return Probe::Vacant(i),
            Some(entry) if entry.word() == word => return Probe::Occupied(i),
            Some(_) => i = (i + 1) % capacity,
        }
    }
}

fn first_vacant(slots: &[Option<Entry>], start: usize) -> usize {
    let mut i = start;
    while slots[i].is_some() {
        i = (i + 1) % slots.len();
    }
    i
}
