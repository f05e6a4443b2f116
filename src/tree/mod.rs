//! Rooted tree data structure and canonical-form operations

mod parse;
mod render;

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// An unordered rooted tree, stored as an ordered list of child subtrees.
///
/// Sibling order carries no meaning: two trees are equivalent iff one can be
/// recursively reordered into the other. [`Tree::canonicalize`] rewrites the
/// tree into the unique representative of its isomorphism class, after which
/// the serialization (`Display`) is the canonical form.
///
/// Equality, ordering and hashing are all induced by the serialization
/// string, so they are isomorphism-aware only for canonicalized trees.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct Tree {
    children: Vec<Tree>,
}

impl Tree {
    /// Create the childless tree
    pub fn leaf() -> Self {
        Tree {
            children: Vec::new(),
        }
    }

    /// Build a tree with the given children, canonicalized
    pub fn from_children(children: Vec<Tree>) -> Self {
        let mut tree = Tree { children };
        tree.canonicalize();
        tree
    }

    /// Append a child without re-canonicalizing
    pub fn add_child(&mut self, child: Tree) {
        self.children.push(child);
    }

    /// Get the children of this tree
    pub fn children(&self) -> &[Tree] {
        &self.children
    }

    /// Check if this tree is a leaf
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in the tree, including the root
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Tree::node_count).sum::<usize>()
    }

    /// Number of leaf nodes in the tree
    pub fn leaf_count(&self) -> usize {
        if self.children.is_empty() {
            1
        } else {
            self.children.iter().map(Tree::leaf_count).sum()
        }
    }

    /// Recursively sort every child list so the serialization becomes the
    /// canonical form of the isomorphism class. Idempotent.
    pub fn canonicalize(&mut self) {
        for child in &mut self.children {
            child.canonicalize();
        }
        self.children.sort_by_cached_key(|child| child.to_string());
    }

    fn write_serialized(&self, out: &mut String) {
        out.push('(');
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                out.push(',');
            }
            child.write_serialized(out);
        }
        out.push(')');
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.write_serialized(&mut out);
        f.write_str(&out)
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tree({self})")
    }
}

impl PartialEq for Tree {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for Tree {}

/// Total ordering induced by the serialization string
impl Ord for Tree {
    fn cmp(&self, other: &Self) -> Ordering {
        self.to_string().cmp(&other.to_string())
    }
}

impl PartialOrd for Tree {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Tree {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}
