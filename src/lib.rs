//! word-freq-table: a case-insensitive word-frequency counter backed by a
//! small open-addressing hash table.
//!
//! Internal Design:
//!
//! Summary
//! - Goal: count occurrences of caller-supplied words, merging case
//!   variants, and answer frequency queries over the collected counts.
//! - Layers:
//!   - Entry: a normalized (lowercased) word paired with its count. The
//!     word is fixed at creation; only the count changes.
//!   - WordTable: a `Vec<Option<Entry>>` probed linearly from an additive
//!     key. Owns every Entry plus the unique/total counters and the
//!     growth policy.
//!
//! Constraints
//! - Single-threaded: no locking; share behind your own mutex if needed.
//! - Keys are derived by summing the Unicode scalar values of the
//!   normalized word, modulo capacity. Anagrams always collide; linear
//!   probing keeps them distinguishable.
//! - The table grows by a factor of 3 as soon as the unique count reaches
//!   capacity, so at least one empty slot always exists and every probe
//!   terminates.
//! - No removal. Entries only move during a grow-and-rehash, which
//!   reinserts them in storage order without touching their counts.
//!
//! Overflow semantics
//! - Per-word counts and the running total are `u64` and saturate at
//!   `u64::MAX`.
//!
//! Notes and non-goals
//! - Tokenization is the caller's job; `add_word` takes one word.
//! - Ties in `most_common_word` resolve to the first maximum in storage
//!   order.
//! - The `logging` feature routes growth events to the `log` facade.

pub mod entry;
pub mod word_table;
mod word_table_proptest;

// Public surface
pub use entry::{normalize, Entry};
pub use word_table::{Iter, TableError, WordTable, DEFAULT_CAPACITY, GROWTH_FACTOR};
