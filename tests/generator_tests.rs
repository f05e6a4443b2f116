//! End-to-end tests of the enumeration engine.

use std::collections::HashSet;

use arbora::generate::specialized;
use arbora::{Error, Generator, Tree};

/// A000081: unordered rooted trees by node count, n = 1..=10.
const A000081: [usize; 10] = [1, 1, 2, 4, 9, 20, 48, 115, 286, 719];

/// Collect canonical strings for `(n, m)`, asserting the per-tree
/// guarantees along the way.
fn generate_and_collect(n: usize, m: usize, parallel: bool) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut results = Vec::new();

    let mut generator = Generator::new();
    let count = generator
        .generate(n, m, parallel, |tree: &Tree| {
            let repr = tree.to_string();
            assert!(seen.insert(repr.clone()), "duplicate tree: {repr}");
            assert_eq!(tree.node_count(), n, "wrong node count for {repr}");
            assert!(tree.leaf_count() <= m, "leaf limit exceeded for {repr}");
            results.push(repr);
        })
        .expect("generation failed");

    assert_eq!(count, results.len());
    results
}

fn sorted_set(n: usize, m: usize) -> Vec<String> {
    let mut results = generate_and_collect(n, m, false);
    results.sort();
    results
}

#[test]
fn single_leaf() {
    assert_eq!(sorted_set(1, 1), ["()"]);
}

#[test]
fn two_node_chain() {
    assert_eq!(sorted_set(2, 1), ["(())"]);
}

#[test]
fn three_nodes() {
    assert_eq!(sorted_set(3, 1), ["((()))"]);
    assert_eq!(sorted_set(3, 2), ["((()))", "((),())"]);
}

#[test]
fn four_nodes_three_leaves() {
    assert_eq!(
        sorted_set(4, 3),
        ["(((())))", "(((),()))", "((),(()))", "((),(),())"]
    );
}

#[test]
fn zero_nodes() {
    assert!(generate_and_collect(0, 5, false).is_empty());
    assert!(generate_and_collect(0, 5, true).is_empty());
}

#[test]
fn zero_leaves_allowed() {
    assert!(generate_and_collect(3, 0, false).is_empty());
    assert!(generate_and_collect(1, 0, false).is_empty());
}

#[test]
fn matches_a000081_when_leaves_unconstrained() {
    for (i, &expected) in A000081.iter().enumerate() {
        let n = i + 1;
        let count = generate_and_collect(n, n, false).len();
        assert_eq!(count, expected, "A000081 mismatch at n={n}");
    }
}

#[test]
fn one_leaf_budget_yields_exactly_the_chain() {
    for n in 1..=20 {
        let results = generate_and_collect(n, 1, false);
        assert_eq!(results.len(), 1, "expected one chain for n={n}");
    }
}

#[test]
fn larger_budget_is_a_superset() {
    for m in 1..7 {
        let smaller: HashSet<String> = generate_and_collect(7, m, false).into_iter().collect();
        let larger: HashSet<String> = generate_and_collect(7, m + 1, false).into_iter().collect();
        assert!(
            smaller.is_subset(&larger),
            "budget {m} is not a subset of budget {}",
            m + 1
        );
    }
}

#[test]
fn parallel_matches_sequential() {
    for (n, m) in [(10, 3), (10, 10), (11, 4), (12, 12)] {
        let mut sequential = generate_and_collect(n, m, false);
        let mut parallel = generate_and_collect(n, m, true);
        sequential.sort();
        parallel.sort();
        assert_eq!(sequential, parallel, "divergence at n={n} m={m}");
    }
}

#[test]
fn specializer_matches_general_path() {
    for n in 1..=12 {
        for m in 1..=4 {
            let general: HashSet<String> =
                generate_and_collect(n, m, false).into_iter().collect();
            let special: HashSet<String> = specialized::generate_up_to(n, m)
                .iter()
                .map(Tree::to_string)
                .collect();
            assert_eq!(general, special, "oracle divergence at n={n} m={m}");
        }
    }
}

#[test]
fn specializer_activation_path_counts() {
    // n >= 15 with m <= 4 routes through the specializer in parallel mode;
    // the sequential run takes the general path.
    for m in 1..=4 {
        let sequential = generate_and_collect(16, m, false).len();
        let parallel = generate_and_collect(16, m, true).len();
        assert_eq!(sequential, parallel, "specializer count mismatch at m={m}");
    }
}

#[test]
fn oversized_request_is_refused() {
    let mut generator = Generator::new();
    let result = generator.generate(31, 5, true, |_| {});
    assert!(matches!(result, Err(Error::TooManyNodes { .. })));
}

#[test]
fn five_nodes_unconstrained() {
    let results = sorted_set(5, 5);
    assert_eq!(results.len(), 9);
    assert!(results.contains(&"((((()))))".to_string()));
    assert!(results.contains(&"((),(),(),())".to_string()));
}

#[test]
fn budget_beyond_max_leaves_changes_nothing() {
    // No 6-node tree has more than 5 leaves
    assert_eq!(sorted_set(6, 5), sorted_set(6, 6));
    assert_eq!(sorted_set(6, 5), sorted_set(6, 100));
}

#[test]
fn emitted_trees_are_canonical() {
    for repr in generate_and_collect(7, 7, false) {
        let mut tree: Tree = repr.parse().unwrap();
        tree.canonicalize();
        assert_eq!(tree.to_string(), repr, "emitted tree was not canonical");
    }
}

#[test]
fn canonical_strings_parse_back() {
    for repr in generate_and_collect(8, 8, false) {
        let tree: Tree = repr.parse().expect("emitted tree must parse");
        assert_eq!(tree.to_string(), repr);
    }
}
