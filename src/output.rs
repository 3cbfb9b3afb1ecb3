//! Flattened text output for parsed node trees.
//!
//! Each node prints as one line showing its id, its parent's id, its name,
//! and its value, indented two spaces per nesting depth. List values show
//! the ids of their immediate children only; the children themselves follow
//! on their own lines. Lines appear in document order, which is not id
//! order (ids are assigned post-order).
//!
//! # Examples
//!
//! ```
//! use larch_lang::{output::to_flat, Parser};
//!
//! let node = Parser::new().parse_str("a = { b = \"x\" }").unwrap();
//!
//! assert_eq!(to_flat(&node), "(2, 0, a, [1])\n  (1, 2, b, x)\n");
//! ```

use std::io;

use crate::ast::Node;
use crate::value::NodeValue;

#[derive(Default)]
pub struct FlatPrinter;

impl FlatPrinter {
    pub fn new() -> Self {
        FlatPrinter
    }

    /// Render `node` and its subtree to the flattened form.
    pub fn print(&self, node: &Node) -> String {
        let mut out = String::new();
        self.print_node(&mut out, node, 0, 0);
        out
    }

    /// `parent_id` 0 is the sentinel for "no parent"; it is never a real id.
    fn print_node(&self, out: &mut String, node: &Node, depth: usize, parent_id: u32) {
        out.push_str(&self.indent(depth));
        out.push_str(&format!("({}, {}, {}, ", node.id(), parent_id, node.name()));

        match node.value() {
            NodeValue::String(text) => out.push_str(text),
            NodeValue::List(items) => {
                let ids: Vec<String> = items.iter().map(|item| item.id().to_string()).collect();
                out.push('[');
                out.push_str(&ids.join(", "));
                out.push(']');
            }
            NodeValue::None => out.push_str("Undefined"),
        }

        out.push_str(")\n");

        if let NodeValue::List(items) = node.value() {
            for item in items {
                self.print_node(out, item, depth + 1, node.id());
            }
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }
}

// Convenience functions

/// Renders a node tree to its flattened string form.
///
/// Printing is read-only and idempotent: the same tree always yields
/// byte-identical output.
pub fn to_flat(node: &Node) -> String {
    FlatPrinter::new().print(node)
}

/// Renders a node tree and writes it to `sink`.
pub fn write_flat<W: io::Write>(sink: &mut W, node: &Node) -> io::Result<()> {
    sink.write_all(to_flat(node).as_bytes())
}
