//! # Word Dictionary Trait
//!
//! Common surface of the two dictionary engines so a driver (build from a
//! word stream, spell-check another stream, print) is written once.
//!
//! ```text
//!                 ┌──────────────────────────────────────────────┐
//!                 │               WordDictionary                 │
//!                 │                                              │
//!                 │  insert(&mut, &str) → Result<Frequency>      │
//!                 │  frequency(&, &str) → Option<Frequency>      │
//!                 │  contains(&, &str) → bool                    │
//!                 │  len(&) / is_empty(&)                        │
//!                 │  for_each_entry(&, FnMut(&str, Frequency))   │
//!                 └──────────────────────┬───────────────────────┘
//!                                        │
//!                    ┌───────────────────┴──────────────────┐
//!                    ▼                                      ▼
//!       ┌──────────────────────────┐          ┌──────────────────────────┐
//!       │  OpenAddressHashTable    │          │       SearchTree         │
//!       │  fixed capacity, may be  │          │  BST or red-black, grows │
//!       │  full                    │          │  without bound           │
//!       │  order: slot index       │          │  order: preorder         │
//!       └──────────────────────────┘          └──────────────────────────┘
//! ```
//!
//! Neither engine supports removal.

use crate::common::config::Frequency;
use crate::common::exception::DictError;

pub trait WordDictionary {
    /// Adds one occurrence of `word` and returns its new frequency.
    fn insert(&mut self, word: &str) -> Result<Frequency, DictError>;

    /// Frequency of `word`, or `None` if it was never inserted.
    fn frequency(&self, word: &str) -> Option<Frequency>;

    fn contains(&self, word: &str) -> bool {
        self.frequency(word).is_some()
    }

    /// Number of distinct words stored.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Visits every stored word in the engine's natural print order.
    fn for_each_entry(&self, visit: &mut dyn FnMut(&str, Frequency));
}
