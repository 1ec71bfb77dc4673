//! Word-frequency dictionaries.
//!
//! Two interchangeable engines map words to occurrence counts:
//!
//! - [`container::open_address_hash_table::OpenAddressHashTable`]: fixed
//!   capacity, linear probing or double hashing, collision statistics.
//! - [`container::search_tree::SearchTree`]: binary search tree, optionally
//!   kept balanced as a red-black tree, with DOT export.
//!
//! Both implement [`container::dictionary::WordDictionary`]. The `freqdict`
//! binary ([`cli`]) builds either one from stdin.

pub mod cli;
pub mod common;
pub mod container;
pub mod text;
