use crate::container::hash_function::ProbingMethod;
use crate::container::search_tree::TreeKind;

pub const DEFAULT_CAPACITY: usize = 113; // capacity used when none (or zero) is requested
pub const MAX_WORD_LEN: usize = 255; // longest word the tokenizer will emit, in bytes
pub const DEFAULT_SNAPSHOTS: usize = 10; // stats snapshots printed by `htable -p`
pub const DEFAULT_DOT_FILE: &str = "tree-view.dot";

pub type Frequency = u32; // occurrences of a word
pub type SlotIndex = usize; // physical slot position in the hash table
pub type ProbeCount = u32; // probes taken to place a key (0 = at home)

/// Which collision counts a stats snapshot scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsOrder {
    /// The first `n` distinct keys, in the order they were inserted.
    #[default]
    Insertion,
    /// The first `n` physical slots, occupied or not.
    Slot,
}

#[derive(Debug, Clone)]
pub struct HashTableConfig {
    pub capacity: usize,
    pub method: ProbingMethod,
    pub stats_order: StatsOrder,
}

impl Default for HashTableConfig {
    fn default() -> Self {
        HashTableConfig {
            capacity: DEFAULT_CAPACITY,
            method: ProbingMethod::Linear,
            stats_order: StatsOrder::Insertion,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    pub kind: TreeKind,
}
