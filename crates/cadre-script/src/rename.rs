//! Safe operation renaming
//!
//! Rewrites every attribute-style call of one operation name to another,
//! leaving all other structure untouched, and produces a freshly parsed
//! tree of the rewritten source. The input tree is never modified, so a
//! batch of renames over shared trees needs no cloning discipline from
//! the caller.

use crate::error::ParseError;
use crate::script::{attribute_call_name, ScriptTree};

/// Result of a rename pass.
#[derive(Debug)]
pub struct RenameOutcome {
    /// The rewritten script, reparsed
    pub script: ScriptTree,
    /// Number of call sites renamed
    pub replaced: usize,
}

/// Rename every attribute-style call of `old_name` to `new_name`.
///
/// Visits every call node reachable from the root; a script may invoke
/// the target operation any number of times and all occurrences are
/// rewritten. Bare calls and non-call identifiers of the same name are
/// left alone. Zero matches is a no-op, not an error: the returned
/// source is byte-identical to the input.
///
/// # Errors
/// Returns a [`ParseError`] only if the rewritten source fails to
/// reparse, which would indicate a non-identifier replacement name.
pub fn rename_operation(
    script: &ScriptTree,
    old_name: &str,
    new_name: &str,
) -> Result<RenameOutcome, ParseError> {
    let mut spans = Vec::new();
    collect_spans(script.root(), script.source(), old_name, &mut spans);

    tracing::debug!(
        old = old_name,
        new = new_name,
        sites = spans.len(),
        "renaming operation"
    );

    if spans.is_empty() {
        return Ok(RenameOutcome {
            script: ScriptTree::parse(script.source())?,
            replaced: 0,
        });
    }

    // Traversal order is not source order: in a method chain the
    // outermost call is visited first but its name is the rightmost in
    // the source. Sort by start offset and splice right-to-left so
    // earlier spans keep their offsets.
    spans.sort_unstable_by_key(|span| span.start);
    let mut source = script.source().to_string();
    for span in spans.iter().rev() {
        source.replace_range(span.clone(), new_name);
    }

    Ok(RenameOutcome {
        script: ScriptTree::parse(&source)?,
        replaced: spans.len(),
    })
}

/// Byte spans of every matching operation-name identifier, pre-order.
fn collect_spans(
    node: tree_sitter::Node<'_>,
    source: &str,
    old_name: &str,
    spans: &mut Vec<std::ops::Range<usize>>,
) {
    if let Some((name, range)) = attribute_call_name(node, source) {
        if name == old_name {
            spans.push(range);
        }
    }
    for i in 0..node.child_count() {
        if let Some(child) = node.child(i) {
            collect_spans(child, source, old_name, spans);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::OperationExtractor;
    use pretty_assertions::assert_eq;

    #[test]
    fn renames_every_occurrence() {
        let script =
            ScriptTree::parse("r = wp.cut(1).fillet(2).cut(3)\ns = wp.cut(4)").unwrap();
        let outcome = rename_operation(&script, "cut", "cutBlind").unwrap();
        assert_eq!(outcome.replaced, 3);
        assert_eq!(
            outcome.script.source(),
            "r = wp.cutBlind(1).fillet(2).cutBlind(3)\ns = wp.cutBlind(4)"
        );

        let mut extractor = OperationExtractor::new();
        extractor.visit(&outcome.script);
        assert!(extractor.operations().iter().all(|op| op != "cut"));
        assert_eq!(
            extractor.operations().iter().filter(|op| *op == "cutBlind").count(),
            3
        );
    }

    #[test]
    fn zero_matches_is_noop() {
        let source = r#"r = cq.Workplane("XY").box(1, 2, 3)"#;
        let script = ScriptTree::parse(source).unwrap();
        let outcome = rename_operation(&script, "fillet", "chamfer").unwrap();
        assert_eq!(outcome.replaced, 0);
        assert_eq!(outcome.script.source(), source);
    }

    #[test]
    fn bare_calls_and_other_names_untouched() {
        let script = ScriptTree::parse("r = box(1)\ns = wp.box(2).edges(box)").unwrap();
        let outcome = rename_operation(&script, "box", "cube").unwrap();
        assert_eq!(outcome.replaced, 1);
        assert_eq!(outcome.script.source(), "r = box(1)\ns = wp.cube(2).edges(box)");
    }

    #[test]
    fn input_tree_is_untouched() {
        let source = "r = wp.box(1)";
        let script = ScriptTree::parse(source).unwrap();
        let _ = rename_operation(&script, "box", "cube").unwrap();
        assert_eq!(script.source(), source);
    }

    #[test]
    fn structure_preserved_across_rename() {
        let script = ScriptTree::parse(r#"r = a.outer(b.oldOp(1), c.keep(2))"#).unwrap();
        let before = crate::tree::ConstructionTree::build(&script);
        let outcome = rename_operation(&script, "oldOp", "newOp").unwrap();
        let after = crate::tree::ConstructionTree::build(&outcome.script);

        assert_eq!(before.entries().len(), after.entries().len());
        for (b, a) in before.entries().iter().zip(after.entries()) {
            assert_eq!(b.depth, a.depth);
        }
        assert_eq!(after.entries()[1].operation, "newOp");
        assert_eq!(after.entries()[2].operation, "keep");
    }

    #[test]
    fn chained_rename_splices_in_source_order() {
        // The walker meets the rightmost link of the chain first and the
        // innermost argument last, so the collected spans arrive out of
        // source order; the rewrite must still land on every site.
        let script = ScriptTree::parse("r = a.op(b.op(1)).op(2)").unwrap();
        let outcome = rename_operation(&script, "op", "operation").unwrap();
        assert_eq!(outcome.replaced, 3);
        assert_eq!(
            outcome.script.source(),
            "r = a.operation(b.operation(1)).operation(2)"
        );
    }

    #[test]
    fn longer_and_shorter_replacements_stay_valid() {
        let script = ScriptTree::parse("r = wp.fillet(2).fillet(3)").unwrap();
        let grown = rename_operation(&script, "fillet", "filletEdges").unwrap();
        assert_eq!(grown.script.source(), "r = wp.filletEdges(2).filletEdges(3)");
        let shrunk = rename_operation(&grown.script, "filletEdges", "f").unwrap();
        assert_eq!(shrunk.script.source(), "r = wp.f(2).f(3)");
    }
}
