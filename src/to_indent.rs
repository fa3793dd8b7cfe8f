//! Restructuring passes applied to a brace-form tree before it is rendered
//! with indentation, in pipeline order: alias join, `do`/`while` join,
//! label re-nesting, semicolon removal, colon insertion.
//!
//! The two join passes report displaced source lines in a [`RenumberMap`]
//! so comments that annotated the folded line follow it to the survivor.

use crate::labels;
use crate::tree::{Node, RenumberMap};

/// Fold a bare declarator tail (`T, U;`, or the lone `;`) into the type
/// head it terminates: `typedef struct S` + `T, U;` becomes
/// `typedef struct S, T, U`. Base-class lists stay at the end of the head.
pub fn join_aliases(nodes: Vec<Node>) -> (Vec<Node>, RenumberMap) {
    let mut out = Vec::new();
    let mut mv = RenumberMap::new();
    let mut iter = nodes.into_iter().peekable();

    while let Some(mut node) = iter.next() {
        if labels::is_type_head_braced(&node.text)
            && iter
                .peek()
                .is_some_and(|next| next.is_leaf() && labels::is_alias_tail(&next.text))
        {
            let follower = iter.next().unwrap_or_else(|| Node::new(None, ""));
            if let Some(displaced) = follower.line {
                mv.insert(displaced, node.line);
            }
            node.text = join_alias_text(&node.text, &follower.text);
        }
        let (children, child_mv) = join_aliases(std::mem::take(&mut node.children));
        node.children = children;
        mv.extend(child_mv);
        out.push(node);
    }
    (out, mv)
}

/// `name[: parents]` + `alias, …;` → `name[, alias…][: parents]`.
fn join_alias_text(head: &str, follower: &str) -> String {
    let (name, parents) = match head.split_once(':') {
        Some((n, p)) => (n.trim_end(), format!(": {}", p.trim())),
        None => (head, String::new()),
    };
    let tail = follower[..follower.len() - 1].trim();
    if tail.is_empty() {
        format!("{name}{parents}")
    } else {
        format!("{name}, {tail}{parents}")
    }
}

/// Fold the trailing `while(…);` of a loop into its `do` node, giving the
/// single introducer `do while(…)`.
pub fn join_do_while(nodes: Vec<Node>) -> (Vec<Node>, RenumberMap) {
    let mut out = Vec::new();
    let mut mv = RenumberMap::new();
    let mut iter = nodes.into_iter().peekable();

    while let Some(mut node) = iter.next() {
        if node.text == "do" {
            let tail = iter
                .peek()
                .and_then(|next| labels::while_tail(&next.text))
                .map(String::from);
            if let Some(tail) = tail {
                node.text = format!("do {tail}");
                let follower = iter.next().unwrap_or_else(|| Node::new(None, ""));
                if let Some(displaced) = follower.line {
                    mv.insert(displaced, node.line);
                }
            }
        }
        let (children, child_mv) = join_do_while(std::mem::take(&mut node.children));
        node.children = children;
        mv.extend(child_mv);
        out.push(node);
    }
    (out, mv)
}

/// Re-nest the flat section following an access-modifier or switch label
/// as that label's children, until the next label at the same level.
/// Siblings before the first label keep their position.
pub fn nest_labels(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::new();
    let mut adopting = false;

    for mut node in nodes {
        node.children = nest_labels(std::mem::take(&mut node.children));
        if labels::is_label(&node.text) {
            out.push(node);
            adopting = true;
        } else if adopting
            && let Some(label) = out.last_mut()
        {
            label.children.push(node);
        } else {
            out.push(node);
        }
    }
    out
}

/// Strip the trailing `;` from leaves; introducer lines never carried one.
pub fn strip_semicolons(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|mut node| {
            if node.is_leaf() {
                if node.text.ends_with(';') {
                    node.text.pop();
                }
            } else {
                node.children = strip_semicolons(std::mem::take(&mut node.children));
            }
            node
        })
        .collect()
}

/// Mark every block introducer with a trailing `:`. Labels already carry
/// one; an anonymous block becomes a bare `:` with no source line.
pub fn add_colons(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|mut node| {
            if !node.children.is_empty() {
                if node.text.is_empty() {
                    node.line = None;
                    node.text.push(':');
                } else if !labels::is_label(&node.text) {
                    node.text.push(':');
                }
            }
            node.children = add_colons(std::mem::take(&mut node.children));
            node
        })
        .collect()
}

#[cfg(test)]
#[path = "to_indent_test.rs"]
mod tests;
