use std::collections::HashSet;

use freqdict::common::util::helpers::next_prime;
use freqdict::container::hash_function::{HashFunction, ProbingMethod};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_function() {
        let hash = HashFunction::get_hash("test_key");
        assert_ne!(hash, 0);
        assert_eq!(hash, HashFunction::get_hash("test_key"));
        assert_ne!(hash, HashFunction::get_hash("test_kez"));
    }

    #[test]
    fn test_capacity_seven_full_coverage() {
        let hf = HashFunction::new(ProbingMethod::Double, 7);
        for word in ["alpha", "beta", "gamma", "delta"] {
            let hash = HashFunction::get_hash(word);
            let step = hf.step(hash);
            assert!((1..=6).contains(&step));
            let targets: HashSet<usize> = hf.probe_sequence(hash).collect();
            assert_eq!(targets.len(), 7, "{} did not reach every slot", word);
        }
    }

    #[test]
    fn test_prime_capacities_are_fully_covered() {
        for requested in [10, 50, 100, 500] {
            let capacity = next_prime(requested);
            let hf = HashFunction::new(ProbingMethod::Double, capacity);
            for hash in (0..2_000u32).step_by(37) {
                let targets: HashSet<usize> = hf.probe_sequence(hash).collect();
                assert_eq!(targets.len(), capacity);
            }
        }
    }
}
