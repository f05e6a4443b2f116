//! Closed-form construction for small leaf budgets.
//!
//! Every tree with `k >= 2` leaves is a chain of `c >= 0` nodes descending
//! to a branching node with at least two children; the branching families
//! for `k <= 4` are small enough to write out directly. The output is
//! identical to the general generator's, which makes this module both an
//! accelerator for deep, narrow enumerations and a cross-validation oracle
//! for the general path.

use std::collections::HashSet;

use crate::tree::Tree;
use super::partitions::partitions_nonincreasing;

/// Leaf budgets the specializer covers
pub const MAX_LEAVES: usize = 4;

/// Node count from which the driver prefers the specializer
pub const MIN_NODES: usize = 15;

/// Whether the driver should route `(n, m)` to this module
pub fn applies(n: usize, m: usize) -> bool {
    m <= MAX_LEAVES && n >= MIN_NODES
}

/// All trees with exactly `n` nodes and at most `m` leaves, canonical and
/// deduplicated. Supports `m <= 4`.
pub fn generate_up_to(n: usize, m: usize) -> Vec<Tree> {
    debug_assert!(m <= MAX_LEAVES);
    let mut out = Vec::new();
    // Exact leaf counts are disjoint, so the union needs no cross-k dedup.
    for k in 1..=m.min(n) {
        out.extend(exact_leaves(n, k));
    }
    out
}

/// All trees with exactly `n` nodes and exactly `k` leaves, canonical and
/// deduplicated. Supports `k <= 4`; empty when no such tree exists.
pub fn exact_leaves(n: usize, k: usize) -> Vec<Tree> {
    debug_assert!(k <= MAX_LEAVES);
    match k {
        1 if n >= 1 => vec![chain(n)],
        2..=4 if n >= k + 1 => {
            let mut seen = HashSet::new();
            let mut out = Vec::new();
            for c in 0..=n - (k + 1) {
                for tree in branching(n - c, k) {
                    let mut wrapped = tree;
                    for _ in 0..c {
                        wrapped = Tree::from_children(vec![wrapped]);
                    }
                    if seen.insert(wrapped.to_string()) {
                        out.push(wrapped);
                    }
                }
            }
            out
        }
        _ => Vec::new(),
    }
}

/// The unique chain of `n >= 1` nodes
fn chain(n: usize) -> Tree {
    let mut tree = Tree::leaf();
    for _ in 1..n {
        tree = Tree::from_children(vec![tree]);
    }
    tree
}

/// Trees with `n` nodes, `k` leaves and at least two root children.
/// Requires `n >= k + 1`.
fn branching(n: usize, k: usize) -> Vec<Tree> {
    let remaining = n - 1;
    let mut out = Vec::new();

    match k {
        2 => {
            // Two chain children
            for partition in partitions_nonincreasing(remaining, 2) {
                out.push(Tree::from_children(vec![
                    chain(partition[0]),
                    chain(partition[1]),
                ]));
            }
        }
        3 => {
            // Three chain children
            for partition in partitions_nonincreasing(remaining, 3) {
                out.push(Tree::from_children(
                    partition.iter().map(|&size| chain(size)).collect(),
                ));
            }
            // One chain plus one two-leaf subtree
            for chain_size in 1..remaining {
                for two_leaf in exact_leaves(remaining - chain_size, 2) {
                    out.push(Tree::from_children(vec![chain(chain_size), two_leaf]));
                }
            }
        }
        4 => {
            // Four chain children
            for partition in partitions_nonincreasing(remaining, 4) {
                out.push(Tree::from_children(
                    partition.iter().map(|&size| chain(size)).collect(),
                ));
            }
            // Two chains plus one two-leaf subtree
            for first in 1..remaining {
                for second in 1..=first {
                    if first + second >= remaining {
                        break;
                    }
                    for two_leaf in exact_leaves(remaining - first - second, 2) {
                        out.push(Tree::from_children(vec![
                            chain(first),
                            chain(second),
                            two_leaf,
                        ]));
                    }
                }
            }
            // One chain plus one three-leaf subtree
            for chain_size in 1..remaining {
                for three_leaf in exact_leaves(remaining - chain_size, 3) {
                    out.push(Tree::from_children(vec![chain(chain_size), three_leaf]));
                }
            }
            // Two two-leaf subtrees
            for left_size in 3..remaining {
                let right_size = remaining - left_size;
                if right_size > left_size {
                    continue;
                }
                let rights = exact_leaves(right_size, 2);
                for left in exact_leaves(left_size, 2) {
                    for right in &rights {
                        out.push(Tree::from_children(vec![left.clone(), right.clone()]));
                    }
                }
            }
        }
        _ => unreachable!("branching families are defined for 2..=4 leaves"),
    }
    out
}
