//! Parallel enumeration driver.
//!
//! The top-level work is split by root partition: every non-increasing
//! partition of `n - 1` goes into one flat list, and workers claim batches
//! of it through a shared atomic index. Each worker owns a private clone of
//! a pre-warmed cache and extends it independently; no cache writes are
//! synchronized, so the same subproblem may be solved on several workers.
//! Entries are deterministic, which makes the duplication a CPU cost only.
//!
//! Results stay per-worker until the single join point, after which the
//! coordinator merges them through a global seen-set and streams each new
//! canonical tree to the sink from one thread.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use tracing::debug;

use super::partitions::partitions_nonincreasing;
use super::{child_options_for, combine, trees_memoized, MemoCache};
use crate::tree::Tree;
use crate::utils::{memory, progress::StatusLine};
use crate::Result;

/// Upper bound on workers unless the machine has RAM to spare
const MAX_WORKERS: usize = 32;

/// Total-RAM threshold above which every core may be used
const HIGH_MEMORY_GIB: u64 = 64;

/// Largest subproblem size covered by the pre-warm pass
const PREWARM_LIMIT: usize = 15;

/// Reporter wake-up interval
const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Run the parallel enumeration for `n >= 2` nodes and at most `m` leaves,
/// streaming each canonical tree to `sink` exactly once.
pub(crate) fn run<F>(n: usize, m: usize, cache: &mut MemoCache, mut sink: F) -> Result<usize>
where
    F: FnMut(&Tree),
{
    let workers = worker_count();

    // Warm the shared cache with every small subproblem, single-threaded,
    // so workers start from a common read-mostly snapshot.
    let prewarm = (n / 2).min(PREWARM_LIMIT);
    for nodes in 1..=prewarm {
        for leaves in 1..=m {
            trees_memoized(nodes, leaves, cache);
        }
    }

    let remaining = n - 1;
    let mut all_partitions = Vec::new();
    // A root with k children has at least k leaves, so k never exceeds m.
    for k in 1..=remaining.min(m) {
        all_partitions.extend(partitions_nonincreasing(remaining, k));
    }
    let total = all_partitions.len();
    let batch = (total / (workers * 4)).max(1);
    debug!(
        workers,
        prewarm,
        total_partitions = total,
        batch,
        "dispatching partition batches"
    );

    let next = AtomicUsize::new(0);
    let completed = AtomicUsize::new(0);
    let stop = AtomicBool::new(false);

    let mut worker_results: Vec<Vec<Tree>> = (0..workers).map(|_| Vec::new()).collect();
    let mut worker_caches: Vec<MemoCache> = (0..workers).map(|_| cache.clone()).collect();

    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;

    std::thread::scope(|scope| {
        let reporter = scope.spawn(|| report_progress(&stop, &completed, total));

        pool.scope(|pool_scope| {
            for (results, worker_cache) in worker_results.iter_mut().zip(worker_caches.iter_mut()) {
                let next = &next;
                let completed = &completed;
                let all_partitions = &all_partitions;
                pool_scope.spawn(move |_| {
                    loop {
                        let start = next.fetch_add(batch, Ordering::Relaxed);
                        if start >= all_partitions.len() {
                            break;
                        }
                        let end = (start + batch).min(all_partitions.len());
                        for partition in &all_partitions[start..end] {
                            process_partition(partition, m, worker_cache, results);
                            completed.fetch_add(1, Ordering::Relaxed);
                        }
                    }
                });
            }
        });

        stop.store(true, Ordering::Relaxed);
        let _ = reporter.join();
    });

    // Single-threaded merge: global dedup, then emission.
    let mut seen = HashSet::new();
    let mut count = 0;
    for trees in worker_results {
        for tree in trees {
            if seen.insert(tree.to_string()) {
                sink(&tree);
                count += 1;
            }
        }
    }
    Ok(count)
}

/// Enumerate every candidate root for one partition into the worker's
/// result list, populating the worker cache on miss.
fn process_partition(
    partition: &[usize],
    m: usize,
    cache: &mut MemoCache,
    out: &mut Vec<Tree>,
) {
    let Some(child_options) = child_options_for(partition, m, cache) else {
        return;
    };
    let mut seen = HashSet::new();
    combine(&child_options, m, &mut Vec::new(), 0, &mut seen, out);
}

fn worker_count() -> usize {
    let cores = std::thread::available_parallelism()
        .map(|cores| cores.get())
        .unwrap_or(4);
    match memory::total_gib() {
        Some(gib) if gib > HIGH_MEMORY_GIB => cores,
        _ => cores.min(MAX_WORKERS),
    }
}

fn report_progress(stop: &AtomicBool, completed: &AtomicUsize, total: usize) {
    let started = Instant::now();
    let mut status = StatusLine::new();
    loop {
        std::thread::sleep(REPORT_INTERVAL);
        if stop.load(Ordering::Relaxed) {
            break;
        }
        let done = completed.load(Ordering::Relaxed);
        status.update(&format!(
            "Computing... {}s elapsed | Partitions: {done}/{total}",
            started.elapsed().as_secs()
        ));
    }
    status.clear();
}
