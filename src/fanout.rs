//! Fan-out/join in two flavours.
//!
//! `gather` runs delay-then-return futures on a single-threaded runtime.
//! `map_in_pool` maps a pure function over a bounded worker pool. Both
//! hand results back in launch order, not completion order.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::thread;
use std::time::Duration;

use futures::future::join_all;
use rayon::prelude::*;
use serde::Serialize;

use crate::error::{Result, ShowcaseError};

// =============================================================================
// Cooperative fan-out
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FetchResult {
    pub id: usize,
    pub data: String,
}

impl fmt::Display for FetchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

pub async fn fetch_data(id: usize, delay: Duration) -> FetchResult {
    tokio::time::sleep(delay).await;
    FetchResult {
        id,
        data: format!("Result {}", id),
    }
}

/// Starts `count` fetches at once and waits for all of them.
pub async fn gather_async(count: usize, delay: Duration) -> Vec<FetchResult> {
    tracing::debug!(count, ?delay, "fan-out started");
    let results = join_all((0..count).map(|id| fetch_data(id, delay))).await;
    tracing::debug!(count = results.len(), "fan-out joined");
    results
}

/// Blocking entry point: drives [`gather_async`] on a current-thread runtime.
pub fn gather(count: usize, delay: Duration) -> Result<Vec<FetchResult>> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;
    Ok(runtime.block_on(gather_async(count, delay)))
}

// =============================================================================
// Worker pool
// =============================================================================

/// Maps `f` over `inputs` on a pool of `workers` threads.
///
/// Every worker has exited by the time this returns. A panic in `f`
/// propagates to the caller.
pub fn map_in_pool<T, U, F>(inputs: &[T], workers: usize, f: F) -> Result<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    let live = AtomicUsize::new(0);
    let results = run_pool(inputs, workers, &live, f)?;
    debug_assert_eq!(live.load(Ordering::SeqCst), 0);
    Ok(results)
}

/// `live` counts worker threads that are still running their loop.
fn run_pool<T, U, F>(inputs: &[T], workers: usize, live: &AtomicUsize, f: F) -> Result<Vec<U>>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    // rayon reads 0 as "one thread per CPU"
    if workers == 0 {
        return Err(ShowcaseError::config("worker pool needs at least 1 worker"));
    }

    let results = thread::scope(|scope| -> Result<Vec<U>> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .thread_name(|i| format!("pool-worker-{}", i))
            .spawn_handler(|worker| {
                let mut builder = thread::Builder::new();
                if let Some(name) = worker.name() {
                    builder = builder.name(name.to_string());
                }
                if let Some(size) = worker.stack_size() {
                    builder = builder.stack_size(size);
                }
                builder.spawn_scoped(scope, move || {
                    live.fetch_add(1, Ordering::SeqCst);
                    worker.run();
                    live.fetch_sub(1, Ordering::SeqCst);
                })?;
                Ok(())
            })
            .build()?;
        tracing::debug!(workers, items = inputs.len(), "worker pool started");

        Ok(pool.install(|| inputs.par_iter().map(&f).collect()))
    })?;

    tracing::debug!("worker pool torn down");
    Ok(results)
}

pub fn square(x: &i64) -> i64 {
    x * x
}

/// Squares `0..count` on the pool.
pub fn square_batch(count: i64, workers: usize) -> Result<Vec<i64>> {
    let numbers: Vec<i64> = (0..count).collect();
    map_in_pool(&numbers, workers, square)
}
