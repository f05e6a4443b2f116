//! Timing, progress and tree-sampling utilities

pub mod memory;

use crate::tree::Tree;

/// Generate a random tree of given size
///
/// Grows the tree one node at a time, attaching each new node to a
/// uniformly chosen existing node. Handy for exercising canonicalization
/// and parsing on irregular shapes.
pub fn random_tree(size: usize) -> Tree {
    use rand::Rng;

    assert!(size > 0, "cannot create a tree with 0 nodes");

    let mut rng = rand::thread_rng();
    let mut children: Vec<Vec<usize>> = vec![Vec::new(); size];
    for node in 1..size {
        let parent = rng.gen_range(0..node);
        children[parent].push(node);
    }

    fn build(node: usize, children: &[Vec<usize>]) -> Tree {
        Tree::from_children(
            children[node]
                .iter()
                .map(|&child| build(child, children))
                .collect(),
        )
    }

    build(0, &children)
}

/// Timing utilities
pub mod timing {
    use std::time::Instant;

    /// Wall-clock timer
    pub struct Timer {
        start: Instant,
    }

    impl Timer {
        /// Start a new timer
        pub fn start() -> Self {
            Timer {
                start: Instant::now(),
            }
        }

        /// Elapsed wall time in milliseconds
        pub fn elapsed_ms(&self) -> u128 {
            self.start.elapsed().as_millis()
        }
    }
}

/// Progress reporting on a single overwriting terminal line
pub mod progress {
    use std::io::{self, Write};

    /// A status line that rewrites itself in place
    pub struct StatusLine {
        last_len: usize,
    }

    impl StatusLine {
        /// Create an empty status line
        pub fn new() -> Self {
            StatusLine { last_len: 0 }
        }

        /// Replace the line with `message`
        pub fn update(&mut self, message: &str) {
            let padding = self.last_len.saturating_sub(message.len());
            print!("\r{message}{}", " ".repeat(padding));
            self.last_len = message.len();
            let _ = io::stdout().flush();
        }

        /// Blank the line out
        pub fn clear(&mut self) {
            if self.last_len > 0 {
                print!("\r{}\r", " ".repeat(self.last_len));
                self.last_len = 0;
                let _ = io::stdout().flush();
            }
        }
    }

    impl Default for StatusLine {
        fn default() -> Self {
            Self::new()
        }
    }
}
