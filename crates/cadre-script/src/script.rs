//! Script syntax tree boundary
//!
//! Wraps tree-sitter parsing of Python-syntax construction scripts. The
//! tree is immutable once built; transformations (see [`crate::rename`])
//! produce a new [`ScriptTree`] rather than editing in place, so sharing
//! one tree across concurrent analyses is safe by construction.

use std::ops::Range;

use crate::error::ParseError;

/// A parsed construction script: owned source text plus its syntax tree.
pub struct ScriptTree {
    source: String,
    tree: tree_sitter::Tree,
}

impl ScriptTree {
    /// Parse script source into a syntax tree.
    ///
    /// # Errors
    /// Returns [`ParseError::Syntax`] with the position of the first error
    /// node when the source is not valid, or a parser fault otherwise.
    pub fn parse(source: &str) -> Result<Self, ParseError> {
        let mut parser = tree_sitter::Parser::new();
        parser
            .set_language(&tree_sitter_python::LANGUAGE.into())
            .map_err(|e| ParseError::ParserInit(e.to_string()))?;

        let tree = parser.parse(source, None).ok_or(ParseError::ParseFailed)?;

        if tree.root_node().has_error() {
            let point = first_error_point(tree.root_node())
                .unwrap_or_else(|| tree.root_node().start_position());
            return Err(ParseError::Syntax {
                line: point.row + 1,
                column: point.column,
            });
        }

        Ok(Self {
            source: source.to_string(),
            tree,
        })
    }

    /// Source text this tree was parsed from.
    #[inline]
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Root node of the syntax tree.
    #[inline]
    #[must_use]
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }

    /// Serialize the tree back into source text.
    ///
    /// Trees are never mutated in place, so this is exact: the bytes are
    /// the same ones the tree was parsed from.
    #[inline]
    #[must_use]
    pub fn unparse(&self) -> &str {
        &self.source
    }
}

impl std::fmt::Debug for ScriptTree {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScriptTree")
            .field("source_len", &self.source.len())
            .field("root_kind", &self.tree.root_node().kind())
            .finish()
    }
}

/// Find the first error or missing node, pre-order.
fn first_error_point(node: tree_sitter::Node<'_>) -> Option<tree_sitter::Point> {
    if node.is_error() || node.is_missing() {
        return Some(node.start_position());
    }
    for i in 0..node.child_count() {
        if let Some(point) = node.child(i).and_then(first_error_point) {
            return Some(point);
        }
    }
    None
}

/// Operation name of an attribute-style call.
///
/// A call counts as an operation only when its function is attribute
/// access (`x.op(...)`). Bare calls (`op(...)`) are traversed by the
/// walkers but never recorded. Returns the name text and the byte range
/// of the name identifier within the source.
pub(crate) fn attribute_call_name<'s>(
    node: tree_sitter::Node<'_>,
    source: &'s str,
) -> Option<(&'s str, Range<usize>)> {
    if node.kind() != "call" {
        return None;
    }
    let function = node.child_by_field_name("function")?;
    if function.kind() != "attribute" {
        return None;
    }
    let name_node = function.child_by_field_name("attribute")?;
    let name = name_node.utf8_text(source.as_bytes()).ok()?;
    Some((name, name_node.byte_range()))
}
