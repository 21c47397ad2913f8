//! Rewrite `$target(...)` nodes into Angular attribute bindings.

use super::instruction::{Instruction, InstructionParser};
use crate::markup::MarkupElement;

/// Root attributes dropped so the template scales with its container.
const SIZE_ATTRS: [&str; 2] = ["width", "height"];

/// Outcome of a rewrite pass.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RewriteSummary {
    /// Nodes whose id carried an instruction.
    pub rewritten: usize,
}

/// Rewrite a loaded SVG tree in place.
///
/// For every element whose `id` parses as an instruction:
/// - an existing target attribute becomes the last `color()` argument
/// - `[attr.<target>]` is set to `color('a', 'b', ...)`
/// - the `id` is removed
///
/// Elements with ordinary ids are not touched.
pub fn rewrite<E: MarkupElement>(root: &mut E, parser: &InstructionParser) -> RewriteSummary {
    for attr in SIZE_ATTRS {
        root.remove_attr(attr);
    }

    let mut summary = RewriteSummary::default();
    root.for_each_mut(&mut |node| {
        let Some(instruction) = node.attr("id").and_then(|id| parser.parse(id)) else {
            return;
        };
        apply(node, instruction);
        summary.rewritten += 1;
    });
    summary
}

fn apply<E: MarkupElement>(node: &mut E, mut instruction: Instruction) {
    let target = instruction.target.token();
    if let Some(fallback) = node.remove_attr(target) {
        instruction.args.push(fallback);
    }

    node.set_attr(&format!("[attr.{target}]"), binding(&instruction.args));
    node.remove_attr("id");
}

/// `color('a', 'b')` expression for the given arguments.
fn binding(args: &[String]) -> String {
    let quoted = args
        .iter()
        .map(|arg| format!("'{arg}'"))
        .collect::<Vec<_>>()
        .join(", ");
    format!("color({quoted})")
}
