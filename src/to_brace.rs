//! Restructuring passes applied to an indent-form tree before it is
//! rendered with braces, in pipeline order: colon removal, semicolon
//! insertion, label un-nesting, `do`/`while` split, alias split.
//!
//! The two split passes mark their original line as moved-without-target
//! in the [`RenumberMap`]; the merger then keys the new trailing line next
//! to its source line with a fractional offset.

use crate::labels;
use crate::tree::{Node, RenumberMap};

/// Strip the trailing `:` from block introducers. Labels and macros keep
/// theirs. An introducer stripped down to an empty block gains one empty
/// placeholder child so the braces still render.
pub fn strip_colons(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|mut node| {
            if !node.text.is_empty()
                && !labels::is_label(&node.text)
                && !labels::is_macro(&node.text)
                && node.text.ends_with(':')
            {
                node.text.pop();
                if node.children.is_empty() {
                    node.children.push(Node::new(None, ""));
                }
            }
            node.children = strip_colons(std::mem::take(&mut node.children));
            node
        })
        .collect()
}

/// Terminate every leaf with `;`, except macros, leaves that already end
/// in one, and the members of an `enum` block. Introducer lines get no
/// terminator.
pub fn add_semicolons(nodes: Vec<Node>) -> Vec<Node> {
    nodes
        .into_iter()
        .map(|mut node| {
            if !node.children.is_empty() {
                // Recursion is skipped only for enum heads; union members
                // still get their ';'.
                if !labels::is_enum_head(&node.text) {
                    node.children = add_semicolons(std::mem::take(&mut node.children));
                }
            } else if !node.text.is_empty()
                && !labels::is_macro(&node.text)
                && !node.text.ends_with(';')
            {
                node.text.push(';');
            }
            node
        })
        .collect()
}

/// Return the children of access-modifier and switch labels to sibling
/// position; the label line itself stays, childless.
pub fn flatten_labels(nodes: Vec<Node>) -> Vec<Node> {
    let mut out = Vec::new();
    for mut node in nodes {
        if !node.children.is_empty() && labels::is_label(&node.text) {
            let children = std::mem::take(&mut node.children);
            out.push(node);
            out.extend(flatten_labels(children));
        } else {
            node.children = flatten_labels(std::mem::take(&mut node.children));
            out.push(node);
        }
    }
    out
}

/// Split `do while(…)` into a `do` block followed by a `while(…);` leaf.
/// The leaf reuses the introducer's line number; the renumber map records
/// the line as split.
pub fn split_do_while(nodes: Vec<Node>) -> (Vec<Node>, RenumberMap) {
    let mut out = Vec::new();
    let mut mv = RenumberMap::new();

    for mut node in nodes {
        let (children, child_mv) = split_do_while(std::mem::take(&mut node.children));
        node.children = children;
        mv.extend(child_mv);

        let tail = labels::do_while_tail(&node.text).map(|t| format!("{t};"));
        match tail {
            Some(tail) => {
                let line = node.line;
                node.text = "do".to_string();
                out.push(node);
                if let Some(split) = line {
                    mv.insert(split, None);
                }
                out.push(Node::new(line, tail));
            }
            None => out.push(node),
        }
    }
    (out, mv)
}

/// Split a type head carrying aliases back into the bare introducer plus
/// a trailing declarator leaf: `typedef struct S, T, U` becomes
/// `typedef struct S` followed by `T, U;`. Heads without aliases still
/// emit the lone `;` leaf that terminates the definition.
pub fn split_aliases(nodes: Vec<Node>) -> (Vec<Node>, RenumberMap) {
    let mut out = Vec::new();
    let mut mv = RenumberMap::new();

    for mut node in nodes {
        let (children, child_mv) = split_aliases(std::mem::take(&mut node.children));
        node.children = children;
        mv.extend(child_mv);

        if labels::is_type_head_indented(&node.text) {
            let (head, tail) = split_alias_text(&node.text);
            let line = node.line;
            node.text = head;
            out.push(node);
            if let Some(split) = line {
                mv.insert(split, None);
            }
            out.push(Node::new(line, tail));
        } else {
            out.push(node);
        }
    }
    (out, mv)
}

/// `name[, alias…][: parents]` → (`name[: parents]`, `alias…;` or `;`).
fn split_alias_text(text: &str) -> (String, String) {
    let (names_part, parents) = match text.split_once(':') {
        Some((n, p)) => (n, format!(": {}", p.trim())),
        None => (text, String::new()),
    };
    let mut names = names_part.split(", ");
    let first = names.next().unwrap_or("");
    let aliases: Vec<&str> = names.map(str::trim).collect();

    let head = format!("{first}{parents}");
    let tail = if aliases.is_empty() {
        ";".to_string()
    } else {
        format!("{};", aliases.join(", "))
    };
    (head, tail)
}

#[cfg(test)]
#[path = "to_brace_test.rs"]
mod tests;
