//! Entry: a normalized word and its occurrence count.

use core::hash::{Hash, Hasher};

/// Lowercase `word` the same way for storage, keying, and comparison.
pub fn normalize(word: &str) -> String {
    word.to_lowercase()
}

/// A word together with how many times it has been seen.
///
/// Identity is the normalized word alone: two entries with the same word
/// compare equal and hash identically whatever their counts. An entry also
/// compares equal to any string whose lowercase form matches its word.
#[derive(Debug, Clone)]
pub struct Entry {
    word: String,
    count: u64,
}

impl Entry {
    /// Create an entry for `word` with a count of 1. The word is stored
    /// lowercased.
    pub fn new(word: &str) -> Self {
        Self::from_normalized(normalize(word))
    }

    /// Build from a word the caller has already passed through `normalize`.
    pub(crate) fn from_normalized(word: String) -> Self {
        Self { word, count: 1 }
    }

    #[cfg(test)]
    pub(crate) fn with_count(word: &str, count: u64) -> Self {
        Self {
            word: normalize(word),
            count,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    /// Add one occurrence. Saturates at `u64::MAX`.
    #[inline]
    pub fn increment(&mut self) {
        self.count = self.count.saturating_add(1);
    }
}

impl PartialEq for Entry {
    fn eq(&self, other: &Self) -> bool {
        // Both sides are normalized at construction.
        self.word == other.word
    }
}

impl Eq for Entry {}

impl PartialEq<str> for Entry {
    fn eq(&self, other: &str) -> bool {
        self.word == normalize(other)
    }
}

impl PartialEq<&str> for Entry {
    fn eq(&self, other: &&str) -> bool {
        *self == **other
    }
}

impl PartialEq<String> for Entry {
    fn eq(&self, other: &String) -> bool {
        *self == *other.as_str()
    }
}

impl Hash for Entry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(e: &Entry) -> u64 {
        let mut h = DefaultHasher::new();
        e.hash(&mut h);
        h.finish()
    }

    /// Invariant: the stored word is lowercased and the count starts at 1.
    #[test]
    fn new_normalizes_and_starts_at_one() {
        let e = Entry::new("Hello");
        assert_eq!(e.word(), "hello");
        assert_eq!(e.count(), 1);
    }

    /// Invariant: the empty string is a valid word.
    #[test]
    fn empty_word_is_allowed() {
        let e = Entry::new("");
        assert_eq!(e.word(), "");
        assert_eq!(e, Entry::new(""));
    }

    /// Invariant: `increment` adds exactly one per call.
    #[test]
    fn increment_counts_up() {
        let mut e = Entry::new("test");
        e.increment();
        assert_eq!(e.count(), 2);
        for _ in 0..999 {
            e.increment();
        }
        assert_eq!(e.count(), 1001);
    }

    /// Invariant: counts saturate instead of wrapping.
    #[test]
    fn increment_saturates_at_max() {
        let mut e = Entry::with_count("big", u64::MAX - 1);
        e.increment();
        assert_eq!(e.count(), u64::MAX);
        e.increment();
        assert_eq!(e.count(), u64::MAX);
    }

    /// Invariant: equality ignores case and count.
    #[test]
    fn equality_is_case_insensitive_and_ignores_count() {
        let a = Entry::new("hello");
        let mut b = Entry::new("HELLO");
        b.increment();
        assert_eq!(a, b);
        assert_eq!(a, a.clone());
        assert_ne!(Entry::new("hello"), Entry::new("world"));
        assert_ne!(Entry::new("helloooooo"), Entry::new("hellooo"));
    }

    /// Invariant: an entry equals raw strings that lowercase to its word.
    #[test]
    fn equality_with_strings() {
        let e = Entry::new("Hello");
        assert!(e == "hello");
        assert!(e == "HeLLo");
        assert!(e == String::from("HELLO"));
        assert!(e != "String");
        assert!(e != "hell");
    }

    /// Invariant: equal entries hash identically; the hash depends only on the word.
    #[test]
    fn hash_consistent_with_eq() {
        let a = Entry::new("hello");
        let b = Entry::new("HELLO");
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(hash_of(&a), hash_of(&Entry::new("world")));
    }

    /// Invariant: entries deduplicate case variants in a general-purpose set.
    #[test]
    fn usable_as_set_element() {
        let mut set = HashSet::new();
        assert!(set.insert(Entry::new("Cat")));
        assert!(!set.insert(Entry::new("CAT")));
        assert!(set.insert(Entry::new("dog")));
        assert_eq!(set.len(), 2);
        assert!(set.contains(&Entry::new("cat")));
    }

    /// Invariant: debug output shows the normalized word and the count.
    #[test]
    fn debug_shows_word_and_count() {
        let mut e = Entry::new("Word");
        e.increment();
        assert_eq!(format!("{:?}", e), r#"Entry { word: "word", count: 2 }"#);
    }

    /// Invariant: `normalize` is idempotent.
    #[test]
    fn normalize_is_idempotent() {
        for w in ["MiXeD", "ÄÖÜ", "straße", "", "123!"] {
            let once = normalize(w);
            assert_eq!(normalize(&once), once);
        }
    }
}
