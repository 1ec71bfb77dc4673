use std::fmt;

/// Collision resolution strategy of an open-addressing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbingMethod {
    /// Step is always 1.
    #[default]
    Linear,
    /// Step is `1 + hash % (capacity - 1)`; needs a prime capacity to reach every slot.
    Double,
}

impl fmt::Display for ProbingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbingMethod::Linear => write!(f, "Linear Probing"),
            ProbingMethod::Double => write!(f, "Double Hashing"),
        }
    }
}

/// Maps a word to the integer its probe sequence is derived from.
#[derive(Debug, Clone)]
pub struct HashFunction {
    method: ProbingMethod,
    capacity: usize,
}

impl HashFunction {
    /// Creates a hash function for a table of `capacity` slots.
    ///
    /// # Parameters
    /// - `method`: The probing method the table uses.
    /// - `capacity`: Number of slots; must be non-zero.
    pub fn new(method: ProbingMethod, capacity: usize) -> Self {
        debug_assert!(capacity > 0, "hash function needs at least one slot");
        Self { method, capacity }
    }

    /// Folds the bytes of `word` into `h = c + 31 * h`, wrapping on overflow.
    ///
    /// # Parameters
    /// - `word`: The word to hash.
    ///
    /// # Returns
    /// The hashed value.
    pub fn get_hash(word: &str) -> u32 {
        word.bytes()
            .fold(0u32, |h, c| u32::from(c).wrapping_add(h.wrapping_mul(31)))
    }

    /// Slot where the probe sequence for `hash` starts.
    pub fn home(&self, hash: u32) -> usize {
        hash as usize % self.capacity
    }

    /// Distance between consecutive probes, always in `[1, capacity - 1]`
    /// (or exactly 1 for a single-slot table).
    pub fn step(&self, hash: u32) -> usize {
        match self.method {
            ProbingMethod::Double if self.capacity > 1 => 1 + hash as usize % (self.capacity - 1),
            _ => 1,
        }
    }

    /// Yields the `capacity` slots visited for `hash`, home slot first.
    pub fn probe_sequence(&self, hash: u32) -> ProbeSequence {
        ProbeSequence {
            next: self.home(hash),
            step: self.step(hash),
            capacity: self.capacity,
            remaining: self.capacity,
        }
    }
}

/// Bounded probe sequence; ends after `capacity` slots so a full table
/// terminates instead of cycling.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    next: usize,
    step: usize,
    capacity: usize,
    remaining: usize,
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let current = self.next;
        self.next = (self.next + self.step) % self.capacity;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}
