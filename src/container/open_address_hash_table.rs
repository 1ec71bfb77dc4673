//! # Open-Addressing Hash Table
//!
//! Fixed-capacity word → frequency table. Collisions are resolved inside the
//! slot array by walking a probe sequence (linear probing or double hashing).
//! Keys are never moved or removed once placed.
//!
//! ```text
//!   insert("cat")
//!        │
//!        ▼
//!   hash = fold(c + 31 * h)      home = hash % capacity
//!   step = 1                               (Linear)
//!        = 1 + hash % (capacity - 1)       (Double)
//!        │
//!        ▼
//!   ┌────────┬────────┬────────┬────────┬────────┬────────┬────────┐
//!   │ slot 0 │ slot 1 │ slot 2 │ slot 3 │ slot 4 │ slot 5 │ slot 6 │
//!   │        │  dog:2 │ ◄home  │        │        │        │        │
//!   │        │        │  ant:1 │        │        │        │        │
//!   └────────┴────────┴───┬────┴────────┴───▲────┴────────┴────────┘
//!                         │    + step       │
//!                         └─────────────────┘
//!   probe 0: slot 2 holds "ant"  → keep going
//!   probe 1: slot 4 is empty     → place "cat", probe_count = 1
//!
//!   At most `capacity` probes are made; if none finds the key or a free
//!   slot the insert reports TableFull.
//! ```
//!
//! Double hashing only reaches every slot when `capacity` is prime; the
//! caller picks the capacity (see `common::util::helpers::next_prime`).

use std::io::{self, Write};

use log::{debug, trace};

use crate::common::config::{
    Frequency, HashTableConfig, ProbeCount, SlotIndex, StatsOrder, DEFAULT_CAPACITY,
};
use crate::common::exception::{DictError, HashTableError};
use crate::container::dictionary::WordDictionary;
use crate::container::hash_function::{HashFunction, ProbingMethod};
use crate::container::hash_table_stats::{collect_snapshots, write_report, StatsSnapshot};

#[derive(Debug, Clone)]
struct Entry {
    key: Box<str>,
    frequency: Frequency,
}

#[derive(Debug, Clone, Default)]
struct Slot {
    entry: Option<Entry>,
    /// Probes taken to place the key now in this slot.
    probe_count: ProbeCount,
}

#[derive(Debug)]
pub struct OpenAddressHashTable {
    slots: Vec<Slot>,
    num_keys: usize,
    method: ProbingMethod,
    hash_fn: HashFunction,
    /// Probe count of every distinct key, in insertion order.
    insertion_probes: Vec<ProbeCount>,
    stats_order: StatsOrder,
}

impl OpenAddressHashTable {
    /// Creates an empty table. A capacity of 0 falls back to [`DEFAULT_CAPACITY`].
    pub fn new(capacity: usize, method: ProbingMethod) -> Self {
        Self::with_config(HashTableConfig {
            capacity,
            method,
            ..HashTableConfig::default()
        })
    }

    pub fn with_config(config: HashTableConfig) -> Self {
        let capacity = if config.capacity < 1 {
            DEFAULT_CAPACITY
        } else {
            config.capacity
        };
        debug!(
            "Creating hash table: capacity={}, method={:?}, stats_order={:?}",
            capacity, config.method, config.stats_order
        );
        Self {
            slots: vec![Slot::default(); capacity],
            num_keys: 0,
            method: config.method,
            hash_fn: HashFunction::new(config.method, capacity),
            insertion_probes: Vec::new(),
            stats_order: config.stats_order,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn method(&self) -> ProbingMethod {
        self.method
    }

    pub fn stats_order(&self) -> StatsOrder {
        self.stats_order
    }

    pub fn len(&self) -> usize {
        self.num_keys
    }

    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    /// Adds one occurrence of `word`.
    ///
    /// # Returns
    /// The word's frequency after the insert (1 for a new word), or
    /// [`HashTableError::TableFull`] when the probe sequence found neither the
    /// word nor a free slot. A full table is left unchanged.
    pub fn insert(&mut self, word: &str) -> Result<Frequency, HashTableError> {
        let hash = HashFunction::get_hash(word);
        for (probes, index) in self.hash_fn.probe_sequence(hash).enumerate() {
            let slot = &mut self.slots[index];
            if let Some(entry) = slot.entry.as_mut() {
                if *entry.key == *word {
                    entry.frequency += 1;
                    return Ok(entry.frequency);
                }
                trace!("Slot {} taken by {:?}, probing on", index, entry.key);
                continue;
            }

            let probes = probes as ProbeCount;
            slot.entry = Some(Entry {
                key: word.into(),
                frequency: 1,
            });
            slot.probe_count = probes;
            self.num_keys += 1;
            self.insertion_probes.push(probes);
            trace!("Placed {:?} in slot {} after {} probes", word, index, probes);
            return Ok(1);
        }

        debug!("No free slot for {:?}, table is full", word);
        Err(HashTableError::TableFull {
            capacity: self.capacity(),
        })
    }

    /// Looks `word` up along its probe sequence.
    ///
    /// Stops at the first empty slot or after `capacity` probes.
    pub fn search(&self, word: &str) -> Option<Frequency> {
        let hash = HashFunction::get_hash(word);
        for index in self.hash_fn.probe_sequence(hash) {
            match &self.slots[index].entry {
                None => return None,
                Some(entry) if *entry.key == *word => return Some(entry.frequency),
                Some(_) => {}
            }
        }
        None
    }

    /// Occupied slots as `(word, frequency)`, in slot index order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Frequency)> + '_ {
        self.slots
            .iter()
            .filter_map(|slot| slot.entry.as_ref())
            .map(|entry| (&*entry.key, entry.frequency))
    }

    /// Calls `visit(frequency, word)` for each occupied slot in index order.
    pub fn for_each(&self, mut visit: impl FnMut(Frequency, &str)) {
        for (word, frequency) in self.iter() {
            visit(frequency, word);
        }
    }

    /// Probe count recorded for the key in `index`, 0 for an empty slot.
    pub fn probe_count(&self, index: SlotIndex) -> Option<ProbeCount> {
        self.slots.get(index).map(|slot| slot.probe_count)
    }

    /// Writes every slot (occupied or not) as `index probes frequency word`.
    pub fn dump_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{:>5} {:>5} {:>5}   {}", "LL", "Stats", "Freq", "Word")?;
        writeln!(out, "----------------------------")?;
        for (index, slot) in self.slots.iter().enumerate() {
            let (frequency, word) = match &slot.entry {
                Some(entry) => (entry.frequency, &*entry.key),
                None => (0, " "),
            };
            writeln!(
                out,
                "{:5} {:5} {:5}   {}",
                index, slot.probe_count, frequency, word
            )?;
        }
        Ok(())
    }

    /// Collision statistics at `num_stats` evenly spaced fill levels.
    ///
    /// Which keys a snapshot covers depends on the table's [`StatsOrder`].
    pub fn stats_snapshots(&self, num_stats: usize) -> Vec<StatsSnapshot> {
        match self.stats_order {
            StatsOrder::Insertion => {
                collect_snapshots(self.capacity(), self.num_keys, num_stats, |n| {
                    &self.insertion_probes[..n]
                })
            }
            StatsOrder::Slot => {
                let slot_probes: Vec<ProbeCount> =
                    self.slots.iter().map(|slot| slot.probe_count).collect();
                collect_snapshots(self.capacity(), self.num_keys, num_stats, |n| {
                    &slot_probes[..n]
                })
            }
        }
    }

    /// Writes the snapshot report for `num_stats` snapshots.
    pub fn print_stats<W: Write>(&self, out: &mut W, num_stats: usize) -> io::Result<()> {
        write_report(out, self.method, &self.stats_snapshots(num_stats))
    }
}

impl WordDictionary for OpenAddressHashTable {
    fn insert(&mut self, word: &str) -> Result<Frequency, DictError> {
        Ok(OpenAddressHashTable::insert(self, word)?)
    }

    fn frequency(&self, word: &str) -> Option<Frequency> {
        self.search(word)
    }

    fn len(&self) -> usize {
        self.num_keys
    }

    fn for_each_entry(&self, visit: &mut dyn FnMut(&str, Frequency)) {
        for (word, frequency) in self.iter() {
            visit(word, frequency);
        }
    }
}
