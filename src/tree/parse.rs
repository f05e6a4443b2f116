//! Parsing of the tree serialization grammar.
//!
//! ```text
//! tree     ::= "(" children ")"
//! children ::= e | tree ("," tree)*
//! ```
//!
//! Parsing does not canonicalize, so re-serializing yields the input
//! byte-for-byte.

use std::str::FromStr;

use super::Tree;
use crate::{Error, Result};

impl FromStr for Tree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Tree> {
        let bytes = s.as_bytes();
        let mut pos = 0;
        let tree = parse_tree(bytes, &mut pos)?;
        if pos != bytes.len() {
            return Err(Error::InvalidTree(format!(
                "trailing input at byte {pos} of {s:?}"
            )));
        }
        Ok(tree)
    }
}

fn parse_tree(bytes: &[u8], pos: &mut usize) -> Result<Tree> {
    expect(bytes, pos, b'(')?;
    let mut children = Vec::new();
    if peek(bytes, *pos) == Some(b'(') {
        children.push(parse_tree(bytes, pos)?);
        while peek(bytes, *pos) == Some(b',') {
            *pos += 1;
            children.push(parse_tree(bytes, pos)?);
        }
    }
    expect(bytes, pos, b')')?;
    Ok(Tree { children })
}

fn peek(bytes: &[u8], pos: usize) -> Option<u8> {
    bytes.get(pos).copied()
}

fn expect(bytes: &[u8], pos: &mut usize, wanted: u8) -> Result<()> {
    match peek(bytes, *pos) {
        Some(found) if found == wanted => {
            *pos += 1;
            Ok(())
        }
        Some(found) => Err(Error::InvalidTree(format!(
            "expected {:?} at byte {pos}, found {:?}",
            wanted as char, found as char
        ))),
        None => Err(Error::InvalidTree(format!(
            "expected {:?} at byte {pos}, found end of input",
            wanted as char
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_parse_leaf() {
        let tree: Tree = "()".parse().unwrap();
        assert!(tree.is_leaf());
    }

    #[test]
    fn test_parse_nested() {
        let tree: Tree = "((()),())".parse().unwrap();
        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.leaf_count(), 2);
        assert_eq!(tree.to_string(), "((()),())");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for input in ["", "(", "(()", "())", "(,())", "()()", "x", "( )"] {
            assert!(
                input.parse::<Tree>().is_err(),
                "accepted malformed input {input:?}"
            );
        }
    }

    #[test]
    fn test_roundtrip_random_trees() {
        for size in 1..=15 {
            let tree = crate::utils::random_tree(size);
            let repr = tree.to_string();
            let reparsed: Tree = repr.parse().unwrap();
            assert_eq!(reparsed.to_string(), repr);
        }
    }

    fn tree_from_parent_choices(choices: &[u32]) -> Tree {
        let mut children: Vec<Vec<usize>> = vec![Vec::new(); choices.len() + 1];
        for (i, &raw) in choices.iter().enumerate() {
            let node = i + 1;
            children[raw as usize % node].push(node);
        }
        build(0, &children)
    }

    fn build(node: usize, children: &[Vec<usize>]) -> Tree {
        Tree {
            children: children[node].iter().map(|&c| build(c, children)).collect(),
        }
    }

    proptest! {
        /// Property: serialize-then-parse is the identity, canonical or not.
        #[test]
        fn parse_roundtrip_property(choices in proptest::collection::vec(any::<u32>(), 0..40)) {
            let tree = tree_from_parent_choices(&choices);
            let repr = tree.to_string();
            let reparsed: Tree = repr.parse().unwrap();
            prop_assert_eq!(reparsed.to_string(), repr);
        }

        /// Property: canonicalization is idempotent.
        #[test]
        fn canonicalize_idempotent_property(choices in proptest::collection::vec(any::<u32>(), 0..40)) {
            let mut tree = tree_from_parent_choices(&choices);
            tree.canonicalize();
            let first = tree.to_string();
            tree.canonicalize();
            prop_assert_eq!(tree.to_string(), first);
        }
    }
}
