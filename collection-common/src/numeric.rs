//! # Number Helpers
//!
//! Primality, factorial and the two bounded streams (Fibonacci, primes) that
//! the generation pipelines draw from. The streams are plain `Iterator`s:
//! callers bound them with `take(count)`.

use crate::error::{CollectionError, Result};

/// Primality test by trial division up to the integer square root.
///
/// Numbers `<= 1` are never prime.
///
/// # Example
/// ```
/// use collection_common::numeric::is_prime;
/// assert!(is_prime(17));
/// assert!(!is_prime(15));
/// assert!(!is_prime(1));
/// assert!(!is_prime(-7));
/// ```
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    // `d <= n / d` rather than `d * d <= n` so large inputs cannot overflow.
    (2..).take_while(|&d| d <= n / d).all(|d| n % d != 0)
}

/// `n!` with overflow checking.
///
/// Negative arguments and results beyond `u64` (anything above `20!`) are
/// rejected with `InvalidArgument`.
///
/// # Example
/// ```
/// use collection_common::numeric::factorial;
/// assert_eq!(factorial(0), Ok(1));
/// assert_eq!(factorial(5), Ok(120));
/// assert!(factorial(-1).is_err());
/// assert!(factorial(21).is_err());
/// ```
pub fn factorial(n: i64) -> Result<u64> {
    let n = u64::try_from(n)
        .map_err(|_| CollectionError::invalid_argument("factorial", format!("{n} is negative")))?;
    (1..=n)
        .try_fold(1u64, u64::checked_mul)
        .ok_or_else(|| CollectionError::invalid_argument("factorial", format!("{n}! overflows u64")))
}

/// Fibonacci numbers seeded with 0, 1.
///
/// The stream ends after the last term that fits in a `u64` (94 terms).
///
/// # Example
/// ```
/// use collection_common::numeric::Fibonacci;
/// let fibs: Vec<u64> = Fibonacci::new().take(8).collect();
/// assert_eq!(fibs, vec![0, 1, 1, 2, 3, 5, 8, 13]);
/// assert_eq!(Fibonacci::new().count(), 94);
/// ```
#[derive(Debug, Clone)]
pub struct Fibonacci {
    current: Option<u64>,
    next: Option<u64>,
}

impl Fibonacci {
    pub fn new() -> Self {
        Fibonacci {
            current: Some(0),
            next: Some(1),
        }
    }
}

impl Iterator for Fibonacci {
    type Item = u64;

    fn next(&mut self) -> Option<Self::Item> {
        let result = self.current?;
        self.current = self.next;
        self.next = self.current.and_then(|next| result.checked_add(next));
        Some(result)
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

/// Primes in ascending order, found by dividing each odd candidate by the
/// primes already seen.
///
/// # Example
/// ```
/// use collection_common::numeric::Primes;
/// let primes: Vec<i64> = Primes::new().take(5).collect();
/// assert_eq!(primes, vec![2, 3, 5, 7, 11]);
/// ```
#[derive(Debug, Clone)]
pub struct Primes {
    found: Vec<i64>,
    candidate: i64,
}

impl Primes {
    pub fn new() -> Self {
        Primes {
            found: vec![],
            candidate: 2,
        }
    }

    fn divisible_by_known_prime(&self, n: i64) -> bool {
        self.found
            .iter()
            .take_while(|&&p| p <= n / p)
            .any(|&p| n % p == 0)
    }
}

impl Iterator for Primes {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let n = self.candidate;
            self.candidate = n.checked_add(if n == 2 { 1 } else { 2 })?;
            if !self.divisible_by_known_prime(n) {
                self.found.push(n);
                return Some(n);
            }
        }
    }
}

impl Default for Primes {
    fn default() -> Self {
        Self::new()
    }
}
