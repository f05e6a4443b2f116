//! ASCII-art rendering of trees.

use std::fmt::Write;

use super::Tree;

impl Tree {
    /// Render the tree as indented ASCII art, one node per line, starting
    /// every line with `indent`.
    ///
    /// ```
    /// use arbora::Tree;
    ///
    /// let tree: Tree = "((),())".parse().unwrap();
    /// assert_eq!(
    ///     tree.render_ascii(""),
    ///     "└── Node\n    ├── Leaf\n    └── Leaf\n"
    /// );
    /// ```
    pub fn render_ascii(&self, indent: &str) -> String {
        let mut out = String::new();
        self.render_node(&mut out, indent, true);
        out
    }

    fn render_node(&self, out: &mut String, prefix: &str, is_last: bool) {
        let connector = if is_last { "└── " } else { "├── " };
        let label = if self.is_leaf() { "Leaf" } else { "Node" };
        let _ = writeln!(out, "{prefix}{connector}{label}");

        let continuation = if is_last { "    " } else { "│   " };
        let child_prefix = format!("{prefix}{continuation}");
        let count = self.children().len();
        for (i, child) in self.children().iter().enumerate() {
            child.render_node(out, &child_prefix, i == count - 1);
        }
    }
}
