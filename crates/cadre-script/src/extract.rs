//! Operation extraction
//!
//! Walks a parsed script and records every attribute-style call's
//! operation name in document order.

use indexmap::IndexMap;

use crate::script::{attribute_call_name, ScriptTree};

/// Rendered when a summary is requested for a script with no operations.
const NO_PATTERNS: &str = "no patterns detected";

/// Collects the ordered operation sequence of a construction script.
///
/// One extractor instance corresponds to one analysis pass; the recorded
/// sequence is append-only and never mutated after [`visit`] returns.
/// With verbosity enabled, each operation name is also emitted to the
/// tracing sink the moment it is discovered.
///
/// [`visit`]: OperationExtractor::visit
#[derive(Debug, Default)]
pub struct OperationExtractor {
    verbose: bool,
    operations: Vec<String>,
}

impl OperationExtractor {
    /// Create an extractor with verbosity disabled.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor that logs each operation as it is found.
    #[inline]
    #[must_use]
    pub fn verbose() -> Self {
        Self {
            verbose: true,
            operations: Vec::new(),
        }
    }

    /// Walk the script and record every attribute-style call, pre-order.
    ///
    /// Recurses into receivers and arguments, so chained and nested calls
    /// are each discovered exactly once. The tree is not modified.
    pub fn visit(&mut self, script: &ScriptTree) {
        self.walk(script.root(), script.source());
    }

    fn walk(&mut self, node: tree_sitter::Node<'_>, source: &str) {
        if let Some((name, _)) = attribute_call_name(node, source) {
            if self.verbose {
                tracing::info!(operation = name, "operation discovered");
            }
            self.operations.push(name.to_string());
        }
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                self.walk(child, source);
            }
        }
    }

    /// Recorded operation names, in document order.
    #[inline]
    #[must_use]
    pub fn operations(&self) -> &[String] {
        &self.operations
    }

    /// Number of operations recorded.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }

    /// Check if no operations were recorded.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Occurrence count per operation name, in first-seen order.
    #[must_use]
    pub fn counts(&self) -> IndexMap<String, usize> {
        let mut counts: IndexMap<String, usize> = IndexMap::new();
        for name in &self.operations {
            *counts.entry(name.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Human-readable dump: one operation name per line.
    #[must_use]
    pub fn report(&self) -> String {
        let mut out = String::new();
        for name in &self.operations {
            out.push_str(name);
            out.push('\n');
        }
        out
    }

    /// Structured summary grouping operations by occurrence count.
    ///
    /// Deterministic: identical input yields byte-identical text. An empty
    /// sequence renders the fixed fallback line instead of an empty string.
    #[must_use]
    pub fn summary(&self) -> String {
        if self.operations.is_empty() {
            return NO_PATTERNS.to_string();
        }
        let mut out = String::new();
        for (name, count) in self.counts() {
            out.push_str(&format!("- Detected {count} uses of {name}()\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::ScriptTree;
    use pretty_assertions::assert_eq;

    const CHAINED: &str =
        r#"result = cq.Workplane("XY").box(60, 20, 10).edges("|Z").fillet(2)"#;

    #[test]
    fn chained_calls_in_document_order() {
        let script = ScriptTree::parse(CHAINED).unwrap();
        let mut extractor = OperationExtractor::new();
        extractor.visit(&script);
        // Pre-order: the outermost call node is the last link of the chain.
        assert_eq!(
            extractor.operations(),
            ["fillet", "edges", "box", "Workplane"]
        );
        assert_eq!(extractor.len(), 4);
    }

    #[test]
    fn bare_calls_traversed_but_not_counted() {
        let script = ScriptTree::parse("result = make(cq.box(1), helper(2))").unwrap();
        let mut extractor = OperationExtractor::new();
        extractor.visit(&script);
        assert_eq!(extractor.operations(), ["box"]);
    }

    #[test]
    fn nested_arguments_discovered() {
        let script = ScriptTree::parse("a.outer(b.inner(1), c.other(2))").unwrap();
        let mut extractor = OperationExtractor::new();
        extractor.visit(&script);
        assert_eq!(extractor.operations(), ["outer", "inner", "other"]);
    }

    #[test]
    fn report_one_name_per_line() {
        let script = ScriptTree::parse("x.a().b()").unwrap();
        let mut extractor = OperationExtractor::new();
        extractor.visit(&script);
        assert_eq!(extractor.report(), "b\na\n");
    }

    #[test]
    fn summary_groups_counts_in_first_seen_order() {
        let script = ScriptTree::parse("x.cut(1).cut(2).fillet(3)").unwrap();
        let mut extractor = OperationExtractor::new();
        extractor.visit(&script);
        assert_eq!(extractor.counts().get("cut"), Some(&2));
        assert_eq!(
            extractor.summary(),
            "- Detected 1 uses of fillet()\n- Detected 2 uses of cut()\n"
        );
    }

    #[test]
    fn summary_empty_fallback() {
        let script = ScriptTree::parse("x = 1 + 2").unwrap();
        let mut extractor = OperationExtractor::new();
        extractor.visit(&script);
        assert!(extractor.is_empty());
        assert_eq!(extractor.summary(), "no patterns detected");
    }

    #[test]
    fn rerun_is_deterministic() {
        let script = ScriptTree::parse(CHAINED).unwrap();
        let mut first = OperationExtractor::new();
        first.visit(&script);
        let mut second = OperationExtractor::new();
        second.visit(&script);
        assert_eq!(first.report(), second.report());
        assert_eq!(first.summary(), second.summary());
    }
}
