//! Final presentation pass over the merged rows: unroll block comments,
//! drop rows that ended up blank, pull declarator tails back behind their
//! closing brace, and insert the blank lines a human would leave between
//! top-level sections.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::merge::MergedLine;

/// One fully assembled output row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputLine {
    pub indent: String,
    pub code: String,
    pub block: String,
    pub comment: String,
}

/// A declarator tail after a closing brace: an identifier list ending in
/// `;`, or the lone `;` terminator.
static ALIAS_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]* *(,[A-Za-z0-9_ ,]+|);|;)").unwrap());

/// Unroll multi-line block comments: the first comment line stays on its
/// anchor row, each further line becomes its own row under the anchor's
/// indentation.
pub fn expand_block_comments(merged: Vec<MergedLine>) -> Vec<OutputLine> {
    let mut out = Vec::new();
    for m in merged {
        let MergedLine {
            indent,
            code,
            block,
            comment,
        } = m;
        let mut lines = block.into_iter();
        out.push(OutputLine {
            indent: indent.clone(),
            code,
            block: lines.next().unwrap_or_default(),
            comment,
        });
        for line in lines {
            out.push(OutputLine {
                indent: indent.clone(),
                block: line,
                ..OutputLine::default()
            });
        }
    }
    out
}

/// Drop blank rows, pull declarator tails behind `}`, and insert blank
/// lines at top-level content transitions. Always ends with one blank row
/// so the joined output carries a final newline.
pub fn tidy_lines(rows: Vec<OutputLine>) -> Vec<OutputLine> {
    let mut rows = rows;
    rows.retain(|r| {
        !(r.indent.trim().is_empty()
            && r.code.trim().is_empty()
            && r.block.trim().is_empty()
            && r.comment.trim().is_empty())
    });
    let rows = pull_back_aliases(rows);
    insert_blank_lines(rows)
}

/// Join assembled rows into the final string, single-spacing code from
/// comments on shared rows.
pub fn join_lines(rows: &[OutputLine]) -> String {
    let lines: Vec<String> = rows
        .iter()
        .map(|r| {
            let mut s = String::new();
            s.push_str(&r.indent);
            s.push_str(&r.code);
            if !r.code.is_empty() && (!r.block.is_empty() || !r.comment.is_empty()) {
                s.push(' ');
            }
            s.push_str(&r.block);
            if !r.block.is_empty() && !r.comment.is_empty() {
                s.push(' ');
            }
            s.push_str(&r.comment);
            s
        })
        .collect();
    lines.join("\n")
}

/// Merge an alias row (`T, U;` or `;`) into the preceding row when that
/// row ends in `}`, carrying its comments along: `} T, U;`, `};`.
fn pull_back_aliases(rows: Vec<OutputLine>) -> Vec<OutputLine> {
    let mut out: Vec<OutputLine> = Vec::new();
    let mut prev_char = ' ';

    for row in rows {
        let row_last = row.code.chars().last().unwrap_or(' ');
        if prev_char == '}' && ALIAS_LINE.is_match(&row.code) && !out.is_empty() {
            if let Some(last) = out.last_mut() {
                if row.code.len() > 1 {
                    last.code.push(' ');
                }
                last.code.push_str(&row.code);
                last.block.push_str(&row.block);
                last.comment.push_str(&row.comment);
            }
        } else {
            out.push(row);
        }
        prev_char = row_last;
    }
    out
}

/// Row classification for blank-line decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RowKind {
    Code,
    CloseBrace,
    Macro,
    Comment,
}

fn classify(row: &OutputLine) -> Option<RowKind> {
    match row.code.chars().next() {
        Some('#') => Some(RowKind::Macro),
        Some('}') => Some(RowKind::CloseBrace),
        Some(_) => Some(RowKind::Code),
        None if !row.block.is_empty() || !row.comment.is_empty() => Some(RowKind::Comment),
        None => None,
    }
}

/// Insert one blank row after a row when the next row returns to the top
/// level and the content kind changes, or when consecutive code rows step
/// back out of a block, or when the row after next opens one. One blank
/// row always closes the file.
fn insert_blank_lines(rows: Vec<OutputLine>) -> Vec<OutputLine> {
    use RowKind::*;

    let kinds: Vec<Option<RowKind>> = rows.iter().map(classify).collect();
    let depths: Vec<usize> = rows.iter().map(|r| r.indent.len()).collect();

    let mut insert = vec![false; rows.len()];
    for n in 0..rows.len() {
        let k0 = kinds[n];
        let d0 = depths[n];
        let k1 = kinds.get(n + 1).copied().flatten();
        let d1 = depths.get(n + 1).copied();
        let d2 = depths.get(n + 2).copied();

        if d1 == Some(0) {
            let transition = matches!(
                (k0, k1),
                (Some(Code), Some(Comment))
                    | (Some(CloseBrace), Some(Comment))
                    | (Some(CloseBrace), Some(Code))
                    | (Some(Macro), Some(Comment))
                    | (Some(Macro), Some(Code))
                    | (Some(Comment), Some(Macro))
                    | (Some(Comment), Some(Code))
                    | (Some(Code), Some(Macro))
            );
            if transition {
                insert[n] = true;
            } else if matches!(k0, Some(Code) | Some(CloseBrace)) && k1 == Some(Code) {
                if d0 > 0 {
                    // Indentation decreases: a block just ended.
                    insert[n] = true;
                } else if d2.is_some_and(|d| d > 0) {
                    // The line after next opens a block.
                    insert[n] = true;
                }
            }
        }

        if d1.is_none() && d2.is_none() {
            insert[n] = true;
        }
    }

    let mut out = Vec::with_capacity(rows.len() + 4);
    for (row, add_blank) in rows.into_iter().zip(insert) {
        out.push(row);
        if add_blank {
            out.push(OutputLine::default());
        }
    }
    out
}

#[cfg(test)]
#[path = "cosmetic_test.rs"]
mod tests;
