//! Memoized enumeration of unordered rooted trees.
//!
//! The engine recurses on the number of root children: for `n` nodes it
//! walks every non-increasing partition of `n - 1` into `k` parts, obtains
//! the tree lists for each part from the memoization cache, and enumerates
//! the Cartesian product of those lists with leaf-sum pruning. Candidates
//! are canonicalized at construction and deduplicated per cache slot by
//! their canonical string.
//!
//! # Cache model
//!
//! `cache[n][max_leaves]` holds the complete, deduplicated list of canonical
//! trees with exactly `n` nodes and at most `max_leaves` leaves. Slots are
//! write-once: the first computation populates the slot, later lookups clone
//! the stored list. The parallel driver gives every worker a private copy of
//! a pre-warmed cache, so the same slot may be computed more than once
//! across workers; entries are deterministic, so duplication costs CPU, not
//! correctness.

mod parallel;
pub mod partitions;
pub mod specialized;

use std::collections::HashSet;

use tracing::debug;

use crate::tree::Tree;
use crate::utils::memory;
use crate::Result;
use self::partitions::partitions_nonincreasing;

/// Memoization table: `cache[n][max_leaves]` is the full enumerated list
/// for that subproblem, or `None` while uncomputed.
pub type MemoCache = Vec<Vec<Option<Vec<Tree>>>>;

/// Below this node count the parallel driver falls back to the sequential
/// core; the work does not amortize thread start-up.
const PARALLEL_MIN_NODES: usize = 10;

/// Enumerates all unordered rooted trees with a given node count and leaf
/// budget, up to isomorphism.
///
/// Each call to [`Generator::generate`] is a fresh enumeration; the cache is
/// rebuilt per request.
pub struct Generator {
    cache: MemoCache,
}

impl Generator {
    /// Create a generator with an empty cache
    pub fn new() -> Self {
        Generator { cache: Vec::new() }
    }

    /// Generate every tree with exactly `n` nodes and at most `m` leaves,
    /// streaming each canonical tree to `sink` exactly once, from a single
    /// thread, in unspecified order. Returns the emitted count.
    ///
    /// Fails without starting enumeration when `n` exceeds the supported
    /// maximum or the estimated memory exceeds what the system has
    /// available.
    pub fn generate<F>(&mut self, n: usize, m: usize, parallel: bool, mut sink: F) -> Result<usize>
    where
        F: FnMut(&Tree),
    {
        memory::check_budget(n)?;

        if n == 0 {
            return Ok(0);
        }
        self.cache = empty_cache(n, m);

        if !parallel || n < PARALLEL_MIN_NODES {
            let trees = trees_memoized(n, m, &mut self.cache);
            for tree in &trees {
                sink(tree);
            }
            return Ok(trees.len());
        }

        if specialized::applies(n, m) {
            debug!(n, m, "routing to the small-leaf specializer");
            let trees = specialized::generate_up_to(n, m);
            for tree in &trees {
                sink(tree);
            }
            return Ok(trees.len());
        }

        parallel::run(n, m, &mut self.cache, sink)
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

/// Create an unpopulated cache covering `0..=n` nodes and `0..=m` leaves
fn empty_cache(n: usize, m: usize) -> MemoCache {
    vec![vec![None; m + 1]; n + 1]
}

/// Fetch the tree list for `(n, m)` from the cache, computing and storing
/// it first if the slot is empty.
fn trees_memoized(n: usize, m: usize, cache: &mut MemoCache) -> Vec<Tree> {
    if n == 0 {
        return Vec::new();
    }
    if let Some(list) = &cache[n][m] {
        return list.clone();
    }
    let list = build_slot(n, m, cache);
    cache[n][m] = Some(list.clone());
    list
}

fn build_slot(n: usize, m: usize, cache: &mut MemoCache) -> Vec<Tree> {
    if n == 1 {
        return if m >= 1 { vec![Tree::leaf()] } else { Vec::new() };
    }

    let remaining = n - 1;
    let mut seen = HashSet::new();
    let mut out = Vec::new();

    // A root with k children has at least k leaves, so k never exceeds m.
    for k in 1..=remaining.min(m) {
        for partition in partitions_nonincreasing(remaining, k) {
            let Some(child_options) = child_options_for(&partition, m, cache) else {
                continue;
            };
            combine(&child_options, m, &mut Vec::new(), 0, &mut seen, &mut out);
        }
    }
    out
}

/// Materialize the tree list for each partition part, or `None` when some
/// part admits no tree and the partition can be discarded.
fn child_options_for(
    partition: &[usize],
    m: usize,
    cache: &mut MemoCache,
) -> Option<Vec<Vec<Tree>>> {
    let mut child_options = Vec::with_capacity(partition.len());
    for &size in partition {
        let options = trees_memoized(size, m, cache);
        if options.is_empty() {
            return None;
        }
        child_options.push(options);
    }
    Some(child_options)
}

/// Walk the Cartesian product of the child option lists, building a
/// canonical candidate from every combination whose leaf total stays within
/// `max_leaves`. A prefix is abandoned as soon as its leaf sum plus one leaf
/// per remaining child exceeds the budget.
fn combine(
    child_options: &[Vec<Tree>],
    max_leaves: usize,
    chosen: &mut Vec<Tree>,
    leaves_so_far: usize,
    seen: &mut HashSet<String>,
    out: &mut Vec<Tree>,
) {
    let index = chosen.len();
    if index == child_options.len() {
        let candidate = Tree::from_children(chosen.clone());
        let repr = candidate.to_string();
        if seen.insert(repr) {
            out.push(candidate);
        }
        return;
    }

    let remaining_children = child_options.len() - index - 1;
    for option in &child_options[index] {
        let leaves = leaves_so_far + option.leaf_count();
        if leaves + remaining_children > max_leaves {
            continue;
        }
        chosen.push(option.clone());
        combine(child_options, max_leaves, chosen, leaves, seen, out);
        chosen.pop();
    }
}
