//! The two surface-form parsers. Both produce the same block tree: nodes
//! carry their source line, a trimmed one-line payload, and children one
//! structural level down.
//!
//! The brace tokenizer is a character walk with in-string and paren state;
//! the indent parser only has to divide leading whitespace by the indent
//! width. Neither can fail: over-closed braces saturate at depth zero and
//! impossible indentation clamps to the deepest reachable level.

use crate::split::CodeLine;
use crate::tree::{Node, descend_mut, push_at_depth};
use crate::{INDENT_WIDTH, labels};

/// Parse indent-form code into a block tree.
///
/// A line ending in `\` continues on the next line: the continuation keeps
/// the continued line's tree position, and its indentation beyond that
/// level is preserved as literal spaces inside the joined text.
pub fn parse_indented(code: &[CodeLine]) -> Vec<Node> {
    let mut tree: Vec<Node> = Vec::new();
    let mut continuing = false;
    let mut prev_depth = 0usize;

    for cl in code {
        let content = cl.text.trim_start_matches(' ');
        let ws_len = cl.text.len() - content.len();
        let mut depth = ws_len / INDENT_WIDTH;

        if continuing {
            let keep = ws_len.saturating_sub(prev_depth * INDENT_WIDTH);
            let joined = format!("{}{}", " ".repeat(keep), content);
            depth = prev_depth;
            let level = descend_mut(&mut tree, depth);
            match level.last_mut() {
                Some(last) => {
                    last.text.pop(); // the trailing '\'
                    last.text.push_str(&joined);
                }
                None => level.push(Node::new(Some(cl.line), joined.clone())),
            }
            continuing = joined.ends_with('\\');
        } else {
            push_at_depth(&mut tree, depth, Node::new(Some(cl.line), content));
            continuing = content.ends_with('\\');
        }
        prev_depth = depth;
    }
    tree
}

/// Parse brace-form code into a block tree.
///
/// Statement text accumulates in a buffer that `{`, `}`, `;`, and label `:`
/// tokens flush as nodes. String contents are opaque; `;` inside parens
/// does not flush; `:` flushes only for access-modifier and switch-label
/// buffers and never as part of `::`. A token that is the first non-space
/// character of its line closes the declaration above it, so the flushed
/// node takes the previous line's number. Lines starting with `#` pass
/// through as single opaque nodes.
pub fn parse_braced(code: &[CodeLine]) -> Vec<Node> {
    let mut tree: Vec<Node> = Vec::new();
    let mut depth = 0usize;
    let mut parens = 0usize;
    let mut in_string = false;
    let mut buf = String::new();
    let mut prev = '\0';

    for cl in code {
        if labels::is_macro(cl.text.trim_start()) {
            if !buf.trim().is_empty() {
                let line = cl.line.saturating_sub(1);
                push_at_depth(&mut tree, depth, Node::new(Some(line), buf.trim()));
            }
            buf.clear();
            push_at_depth(&mut tree, depth, Node::new(Some(cl.line), cl.text.trim()));
            continue;
        }

        let chars: Vec<char> = cl.text.chars().collect();
        let mut seen_nonspace = false;

        for (i, &c) in chars.iter().enumerate() {
            // A '\' ending the line continues the statement on the next one.
            if c == '\\' && i + 1 == chars.len() {
                continue;
            }
            let first_nonspace = !seen_nonspace && !c.is_whitespace();
            if !c.is_whitespace() {
                seen_nonspace = true;
            }

            let escaped = prev == '\\' && i != 0;
            if c == '"' && !escaped {
                in_string = !in_string;
            }

            if !in_string {
                // Collapse runs of spaces.
                if c == ' ' && prev == ' ' {
                    prev = c;
                    continue;
                }
                match c {
                    '(' => parens += 1,
                    ')' => parens = parens.saturating_sub(1),
                    '{' | '}' => {
                        let line = if c == '{' && first_nonspace && cl.line > 0 {
                            cl.line - 1
                        } else {
                            cl.line
                        };
                        push_at_depth(&mut tree, depth, Node::new(Some(line), buf.trim()));
                        buf.clear();
                        if c == '{' {
                            depth += 1;
                        } else {
                            depth = depth.saturating_sub(1);
                        }
                        prev = c;
                        continue;
                    }
                    _ => {}
                }
            }

            buf.push(c);

            let flush = !in_string
                && (c == ';' && parens == 0
                    || c == ':' && labels::is_label(&buf) && {
                        let next = chars.get(i + 1).copied().unwrap_or(' ');
                        prev != ':' && next != ':'
                    });
            if flush {
                let line = if first_nonspace && cl.line > 0 {
                    cl.line - 1
                } else {
                    cl.line
                };
                push_at_depth(&mut tree, depth, Node::new(Some(line), buf.trim()));
                buf.clear();
            }
            prev = c;
        }
    }
    // A buffer still pending at end of input belongs to an unterminated
    // statement and is dropped, matching the terminator discipline of the
    // brace form.
    tree
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
