use crate::common::config::DEFAULT_CAPACITY;

/// Returns true if `number` is prime.
///
/// Uses 6k ± 1 trial division, which is plenty for table sizes.
pub fn is_prime(number: usize) -> bool {
    if number < 2 {
        return false;
    }
    if number <= 3 {
        return true;
    }
    if number % 2 == 0 || number % 3 == 0 {
        return false;
    }
    let mut i = 5;
    while i * i <= number {
        if number % i == 0 || number % (i + 2) == 0 {
            return false;
        }
        i += 6;
    }
    true
}

/// Picks a hash table capacity from a requested size.
///
/// A request of 0 falls back to [`DEFAULT_CAPACITY`], 1 is bumped to 2, anything
/// else becomes the smallest prime greater than or equal to the request.
///
/// # Example
/// ```rust
/// use freqdict::common::util::helpers::next_prime;
///
/// assert_eq!(next_prime(100), 101);
/// assert_eq!(next_prime(0), 113);
/// ```
pub fn next_prime(requested: usize) -> usize {
    let mut capacity = match requested {
        0 => DEFAULT_CAPACITY,
        1 => 2,
        n => n,
    };
    while !is_prime(capacity) {
        capacity += 1;
    }
    capacity
}
