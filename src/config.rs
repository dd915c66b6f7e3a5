//! Fixed constants for the feature tour.
//!
//! The binaries take no flags; they always run with [`SuiteConfig::default`].

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{Result, ShowcaseError};

#[derive(Debug, Clone, PartialEq)]
pub struct SuiteConfig {
    pub pool_workers: usize,
    pub batch_size: i64,
    pub fetch_count: usize,
    pub fetch_delay_ms: u64,
    pub cache_capacity: usize,
    pub scratch_path: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        SuiteConfig {
            pool_workers: 4,
            batch_size: 10,
            fetch_count: 5,
            fetch_delay_ms: 100,
            cache_capacity: 128,
            scratch_path: PathBuf::from("/tmp/test.txt"),
        }
    }
}

impl SuiteConfig {
    pub fn validate(&self) -> Result<()> {
        if self.pool_workers == 0 {
            return Err(ShowcaseError::config("pool_workers must be at least 1"));
        }
        if self.cache_capacity == 0 {
            return Err(ShowcaseError::config("cache_capacity must be at least 1"));
        }
        if self.batch_size < 0 {
            return Err(ShowcaseError::config("batch_size must not be negative"));
        }
        Ok(())
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}
