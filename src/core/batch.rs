//! Fixed-size batch runner
//!
//! Items are split into consecutive windows of at most `batch_size`. All
//! items of a window run concurrently and the window completes when every
//! item has finished. Windows run one after another with a fixed pause in
//! between, never after the last one. Output order always matches input
//! order.

use crate::utils::error::{MetagenError, Result};
use futures::future::join_all;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, info};

/// Outcome of a batched run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchOutcome<R> {
    /// One result per input item, in input order
    pub results: Vec<R>,
    /// Size of each executed batch
    pub batch_sizes: Vec<usize>,
    /// Number of inter-batch pauses taken
    pub delays: usize,
}

impl<R> BatchOutcome<R> {
    pub fn batches(&self) -> usize {
        self.batch_sizes.len()
    }
}

/// Runs work in fixed-size concurrent batches with a pause between batches
#[derive(Debug, Clone)]
pub struct BatchRunner {
    batch_size: usize,
    delay: Duration,
}

impl BatchRunner {
    /// Create a runner. `batch_size` must be at least 1.
    pub fn new(batch_size: usize, delay: Duration) -> Result<Self> {
        if batch_size == 0 {
            return Err(MetagenError::config("batch size must be greater than 0"));
        }
        Ok(Self { batch_size, delay })
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Number of batches needed for `total` items
    pub fn batch_count(&self, total: usize) -> usize {
        total.div_ceil(self.batch_size)
    }

    /// Run `task` over every item, batch by batch
    pub async fn run<T, R, F, Fut>(&self, items: Vec<T>, mut task: F) -> BatchOutcome<R>
    where
        F: FnMut(T) -> Fut,
        Fut: Future<Output = R>,
    {
        let total_batches = self.batch_count(items.len());
        let mut results = Vec::with_capacity(items.len());
        let mut batch_sizes = Vec::with_capacity(total_batches);
        let mut delays = 0;

        let mut remaining = items.into_iter();
        for index in 0..total_batches {
            let batch: Vec<T> = remaining.by_ref().take(self.batch_size).collect();
            let size = batch.len();
            info!(
                batch = index + 1,
                total_batches,
                rows = size,
                "Processing batch"
            );

            let outputs = join_all(batch.into_iter().map(&mut task)).await;
            results.extend(outputs);
            batch_sizes.push(size);
            debug!(batch = index + 1, completed = results.len(), "Batch complete");

            if index + 1 < total_batches {
                debug!(delay_ms = self.delay.as_millis() as u64, "Pausing before next batch");
                tokio::time::sleep(self.delay).await;
                delays += 1;
            }
        }

        BatchOutcome {
            results,
            batch_sizes,
            delays,
        }
    }
}
