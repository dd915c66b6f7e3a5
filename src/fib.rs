//! Fibonacci memoized through a bounded LRU cache.
//!
//! The recursion is the textbook double call; the cache is what keeps it
//! linear. The cache is an owned value, so separate instances never share
//! results.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::error::{Result, ShowcaseError};

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheInfo {
    pub hits: u64,
    pub misses: u64,
    pub max_size: usize,
    pub current_size: usize,
}

impl CacheInfo {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

pub struct Fibonacci {
    cache: LruCache<u64, u128>,
    hits: u64,
    misses: u64,
}

impl Fibonacci {
    pub const DEFAULT_CAPACITY: usize = 128;

    /// Largest argument whose result fits in a `u128`.
    pub const MAX_FIBONACCI_U128: u64 = 186;

    pub fn new(capacity: NonZeroUsize) -> Self {
        Fibonacci {
            cache: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    pub fn with_capacity(capacity: usize) -> Result<Self> {
        let capacity = NonZeroUsize::new(capacity)
            .ok_or_else(|| ShowcaseError::config("cache capacity must be at least 1"))?;
        Ok(Self::new(capacity))
    }

    /// Returns the `n`th Fibonacci number.
    ///
    /// Negative input and anything above [`Self::MAX_FIBONACCI_U128`] are
    /// rejected before recursing, so the recursion depth stays bounded.
    pub fn compute(&mut self, n: i64) -> Result<u128> {
        let n = u64::try_from(n).map_err(|_| ShowcaseError::NegativeFibonacci(n))?;
        if n > Self::MAX_FIBONACCI_U128 {
            return Err(ShowcaseError::FibonacciOverflow(n));
        }
        self.memoized(n)
    }

    fn memoized(&mut self, n: u64) -> Result<u128> {
        if let Some(&value) = self.cache.get(&n) {
            self.hits += 1;
            return Ok(value);
        }
        self.misses += 1;
        tracing::trace!(n, "fibonacci cache miss");

        let value = if n < 2 {
            u128::from(n)
        } else {
            let a = self.memoized(n - 1)?;
            let b = self.memoized(n - 2)?;
            a.checked_add(b).ok_or(ShowcaseError::FibonacciOverflow(n))?
        };

        self.cache.put(n, value);
        Ok(value)
    }

    /// Whether `n` is currently cached. Does not touch recency.
    pub fn is_cached(&self, n: u64) -> bool {
        self.cache.contains(&n)
    }

    pub fn cache_info(&self) -> CacheInfo {
        CacheInfo {
            hits: self.hits,
            misses: self.misses,
            max_size: self.cache.cap().get(),
            current_size: self.cache.len(),
        }
    }

    pub fn cache_clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new(NonZeroUsize::new(Self::DEFAULT_CAPACITY).unwrap_or(NonZeroUsize::MIN))
    }
}

/// Unmemoized reference definition. Exponential; keep `n` small.
pub fn fibonacci_naive(n: u64) -> u128 {
    if n < 2 {
        u128::from(n)
    } else {
        fibonacci_naive(n - 1) + fibonacci_naive(n - 2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_base_cases() {
        let mut fib = Fibonacci::default();
        assert_eq!(fib.compute(0).unwrap(), 0);
        assert_eq!(fib.compute(1).unwrap(), 1);
        assert_eq!(fib.compute(10).unwrap(), 55);
    }

    #[test]
    fn test_each_argument_evaluated_once() {
        let mut fib = Fibonacci::default();
        assert_eq!(fib.compute(30).unwrap(), 832_040);
        let first = fib.cache_info();
        assert_eq!(first.misses, 31);
        assert_eq!(first.hits, 28);
        assert_eq!(first.current_size, 31);

        assert_eq!(fib.compute(30).unwrap(), 832_040);
        let second = fib.cache_info();
        assert_eq!(second.misses, first.misses);
        assert_eq!(second.hits, first.hits + 1);
    }

    #[test]
    fn test_negative_input_rejected() {
        let mut fib = Fibonacci::default();
        assert!(matches!(fib.compute(-1), Err(ShowcaseError::NegativeFibonacci(-1))));
        assert_eq!(fib.cache_info().misses, 0);
    }

    #[test]
    fn test_largest_representable_and_overflow() {
        let mut fib = Fibonacci::default();
        assert_eq!(
            fib.compute(186).unwrap(),
            332_825_110_087_067_562_321_196_029_789_634_457_848
        );
        assert!(matches!(fib.compute(187), Err(ShowcaseError::FibonacciOverflow(187))));
    }

    #[test]
    fn test_huge_argument_reports_overflow_without_recursing() {
        let mut fib = Fibonacci::default();
        assert!(matches!(
            fib.compute(1_000_000),
            Err(ShowcaseError::FibonacciOverflow(1_000_000))
        ));
        assert!(matches!(
            fib.compute(i64::MAX),
            Err(ShowcaseError::FibonacciOverflow(_))
        ));
        assert_eq!(fib.cache_info().misses, 0);
        assert_eq!(fib.cache_info().current_size, 0);
    }

    #[test]
    fn test_least_recently_used_entries_are_evicted() {
        let mut fib = Fibonacci::with_capacity(3).unwrap();
        assert_eq!(fib.compute(10).unwrap(), 55);

        let info = fib.cache_info();
        assert_eq!(info.max_size, 3);
        assert_eq!(info.current_size, 3);
        assert_eq!(info.misses, 11);
        assert!(fib.is_cached(10));
        assert!(fib.is_cached(9));
        assert!(fib.is_cached(8));
        assert!(!fib.is_cached(7));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(Fibonacci::with_capacity(0).is_err());
    }

    #[test]
    fn test_cache_clear_resets_counters() {
        let mut fib = Fibonacci::default();
        fib.compute(20).unwrap();
        fib.cache_clear();
        assert_eq!(fib.cache_info(), CacheInfo { max_size: 128, ..CacheInfo::default() });
        assert_eq!(fib.compute(20).unwrap(), 6765);
    }

    #[test]
    fn test_hit_rate() {
        let info = CacheInfo { hits: 3, misses: 1, max_size: 8, current_size: 1 };
        assert_eq!(info.hit_rate(), 0.75);
        assert_eq!(CacheInfo::default().hit_rate(), 0.0);
    }

    proptest! {
        #[test]
        fn prop_memoized_matches_naive(n in 0u64..25) {
            let mut fib = Fibonacci::default();
            prop_assert_eq!(fib.compute(n as i64).unwrap(), fibonacci_naive(n));
        }

        #[test]
        fn prop_tiny_cache_still_correct(n in 0u64..20, capacity in 1usize..4) {
            let mut fib = Fibonacci::with_capacity(capacity).unwrap();
            prop_assert_eq!(fib.compute(n as i64).unwrap(), fibonacci_naive(n));
        }
    }
}
