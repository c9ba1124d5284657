//! Construction tree rendering
//!
//! Renders the call-nesting structure of a construction script as an
//! indented tree, for human inspection and for byte-level regression
//! comparison of script structure before and after a rewrite.

use crate::script::{attribute_call_name, ScriptTree};

/// Rendered when a script contains no operations.
const NO_OPERATIONS: &str = "No operations detected.";

/// Connector glyph prefixed to every rendered entry.
const CONNECTOR: &str = "└── ";

/// One recorded operation with its call-nesting depth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructionEntry {
    /// Zero-based nesting depth of the enclosing call expression
    pub depth: usize,
    /// Operation name
    pub operation: String,
}

/// Ordered construction tree of a script.
///
/// Entries appear in pre-order; depth increases by one for each nested
/// call expression entered and is restored on return. Rendering the same
/// source twice yields byte-identical text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructionTree {
    entries: Vec<ConstructionEntry>,
}

impl ConstructionTree {
    /// Build the construction tree of a parsed script.
    #[must_use]
    pub fn build(script: &ScriptTree) -> Self {
        let mut tree = Self::default();
        tree.walk(script.root(), script.source(), 0);
        tree
    }

    /// Depth is threaded as an explicit parameter; the caller's depth is
    /// restored by the call stack regardless of what is found inside.
    fn walk(&mut self, node: tree_sitter::Node<'_>, source: &str, depth: usize) {
        let is_call = node.kind() == "call";
        if let Some((name, _)) = attribute_call_name(node, source) {
            self.entries.push(ConstructionEntry {
                depth,
                operation: name.to_string(),
            });
        }
        // Every call expression opens one nesting level, attribute-style
        // or not; other nodes keep the current depth.
        let child_depth = if is_call { depth + 1 } else { depth };
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                self.walk(child, source, child_depth);
            }
        }
    }

    /// Recorded entries, in pre-order.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> &[ConstructionEntry] {
        &self.entries
    }

    /// Check if no operations were recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Deepest recorded depth, or `None` for an empty tree.
    #[inline]
    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.entries.iter().map(|e| e.depth).max()
    }

    /// Indented textual rendering, one entry per line.
    #[must_use]
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return NO_OPERATIONS.to_string();
        }
        let mut out = String::new();
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            for _ in 0..entry.depth {
                out.push_str("    ");
            }
            out.push_str(CONNECTOR);
            out.push_str(&entry.operation);
            out.push_str("()");
        }
        out
    }
}

impl std::fmt::Display for ConstructionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
