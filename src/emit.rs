//! Rendering of a block tree back into lines, either indented or braced.

use crate::INDENT_WIDTH;
use crate::tree::Node;

/// One emitted line: the source line it derives from (`None` for
/// synthesized closing braces), its leading spaces, and its code text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub line: Option<usize>,
    pub indent: String,
    pub text: String,
}

impl Rendered {
    fn new(line: Option<usize>, depth: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            indent: " ".repeat(depth * INDENT_WIDTH),
            text: text.into(),
        }
    }
}

/// Render with indentation: one line per node, four spaces per level.
pub fn emit_indented(nodes: &[Node]) -> Vec<Rendered> {
    let mut out = Vec::new();
    walk_indented(nodes, 0, &mut out);
    out
}

fn walk_indented(nodes: &[Node], depth: usize, out: &mut Vec<Rendered>) {
    for node in nodes {
        out.push(Rendered::new(node.line, depth, node.text.clone()));
        walk_indented(&node.children, depth + 1, out);
    }
}

/// Render with braces: introducers gain ` {`, children indent one level,
/// and a synthesized `}` with no source line closes each block.
pub fn emit_braced(nodes: &[Node]) -> Vec<Rendered> {
    let mut out = Vec::new();
    walk_braced(nodes, 0, &mut out);
    out
}

fn walk_braced(nodes: &[Node], depth: usize, out: &mut Vec<Rendered>) {
    for node in nodes {
        if node.children.is_empty() {
            out.push(Rendered::new(node.line, depth, node.text.clone()));
        } else {
            out.push(Rendered::new(node.line, depth, format!("{} {{", node.text)));
            walk_braced(&node.children, depth + 1, out);
            out.push(Rendered::new(None, depth, "}"));
        }
    }
}
