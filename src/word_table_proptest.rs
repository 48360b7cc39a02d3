#![cfg(test)]

// Property tests for WordTable kept inside the crate so they can inspect
// the backing slots directly.

use crate::entry::{normalize, Entry};
use crate::word_table::{home_slot, WordTable, GROWTH_FACTOR};
use proptest::prelude::*;

// Short words over a tiny alphabet (mixed case) so anagrams and case
// variants come up constantly.
fn arb_words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[abcABC]{0,4}", 0..80)
}

// Slots from the key to the entry (wrapping) must all be occupied, otherwise
// a lookup would stop early at the gap.
fn reachable_from_key(slots: &[Option<Entry>], index: usize, word: &str) -> bool {
    let capacity = slots.len();
    let mut i = home_slot(word, capacity);
    loop {
        if i == index {
            return true;
        }
        if slots[i].is_none() {
            return false;
        }
        i = (i + 1) % capacity;
    }
}

// Property: structural invariants hold after every insertion.
// - unique count equals the number of occupied slots and stays below capacity;
// - every stored word is normalized and reachable by probing from its key;
// - no word is stored twice;
// - capacity is always initial * GROWTH_FACTOR^k.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_structure_after_each_insert(initial in 1usize..=6, words in arb_words()) {
        let mut t = WordTable::with_capacity(initial).unwrap();
        for w in &words {
            t.add_word(w);

            let slots = t.slots();
            prop_assert_eq!(slots.len(), t.capacity());
            let occupied = slots.iter().filter(|s| s.is_some()).count();
            prop_assert_eq!(occupied, t.num_unique_words());
            prop_assert!(t.num_unique_words() < t.capacity());

            let mut seen = std::collections::BTreeSet::new();
            for (i, slot) in slots.iter().enumerate() {
                if let Some(e) = slot {
                    let normalized = normalize(e.word());
                    prop_assert_eq!(e.word(), normalized.as_str());
                    prop_assert!(reachable_from_key(slots, i, e.word()), "{:?} unreachable", e);
                    prop_assert!(seen.insert(e.word().to_string()), "{:?} stored twice", e);
                }
            }

            let mut cap = initial;
            while cap < t.capacity() {
                cap *= GROWTH_FACTOR;
            }
            prop_assert_eq!(cap, t.capacity());
        }
    }
}

// Property: a rehash moves entries without changing their counts.
proptest! {
    #![proptest_config(ProptestConfig { cases: 64, .. ProptestConfig::default() })]
    #[test]
    fn prop_rehash_keeps_counts(initial in 1usize..=4, words in arb_words()) {
        let mut t = WordTable::with_capacity(initial).unwrap();
        for w in &words {
            let before: Vec<(String, u64)> =
                t.iter().map(|e| (e.word().to_string(), e.count())).collect();
            let cap = t.capacity();
            let is_new = !t.contains(w);
            t.add_word(w);
            if t.capacity() != cap {
                prop_assert!(is_new, "only a new word can trigger growth");
                prop_assert_eq!(t.capacity(), cap * GROWTH_FACTOR);
                for (word, count) in before {
                    prop_assert_eq!(t.frequency(&word), count);
                }
            }
        }
    }
}
