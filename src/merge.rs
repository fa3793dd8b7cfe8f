//! Reattachment of comments to emitted code lines.
//!
//! Everything is keyed by source line number. Code rows, block comments,
//! and line comments each go into a map; comment keys pass through the
//! restructurers' renumber map first, so a comment that annotated a folded
//! line follows it to the surviving line. Iterating the sorted union of
//! keys then interleaves the three streams in source order.
//!
//! Keys are fixed-point integers at 1/1024 of a line: an emitted row with
//! no source line (a synthesized `}`) or with an already-claimed line takes
//! the previous row's key plus one tick, which keeps emission order under
//! the sort while staying between the neighboring integer keys. 1024 ticks
//! of headroom per line is far more than any declaration expands to.

use std::collections::BTreeMap;

use crate::emit::Rendered;
use crate::split::{BlockComment, LineComment};
use crate::tree::RenumberMap;

/// Ticks per source line in the fixed-point key space.
const KEY_SCALE: i64 = 1024;

/// One output row: code plus the comments that belong on it. The block
/// comment is still rolled up; the cosmetic layer unrolls it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergedLine {
    pub indent: String,
    pub code: String,
    pub block: Vec<String>,
    pub comment: String,
}

impl MergedLine {
    fn is_empty(&self) -> bool {
        self.indent.is_empty()
            && self.code.is_empty()
            && self.block.is_empty()
            && self.comment.is_empty()
    }
}

/// Merge emitted code rows with the original comments.
pub fn merge_comments(
    rendered: &[Rendered],
    block_comments: &[BlockComment],
    line_comments: &[LineComment],
    renumber: &RenumberMap,
) -> Vec<MergedLine> {
    let mut code_map: BTreeMap<i64, (String, String)> = BTreeMap::new();
    let mut last_key = -KEY_SCALE;
    for row in rendered {
        let key = match row.line {
            Some(n) if !code_map.contains_key(&(n as i64 * KEY_SCALE)) => n as i64 * KEY_SCALE,
            _ => last_key + 1,
        };
        code_map.insert(key, (row.indent.clone(), row.text.clone()));
        last_key = key;
    }

    let mut block_map: BTreeMap<i64, Vec<String>> = BTreeMap::new();
    for bc in block_comments {
        let key = comment_key(bc.line, renumber);
        // Two comments renumbered onto one line concatenate; none is lost.
        block_map.entry(key).or_default().extend(bc.lines.clone());
    }

    let mut line_map: BTreeMap<i64, String> = BTreeMap::new();
    for lc in line_comments {
        let key = comment_key(lc.line, renumber);
        line_map
            .entry(key)
            .and_modify(|text| {
                text.push(' ');
                text.push_str(&lc.text);
            })
            .or_insert_with(|| lc.text.clone());
    }

    let mut keys: Vec<i64> = code_map.keys().copied().collect();
    keys.extend(block_map.keys().copied());
    keys.extend(line_map.keys().copied());
    keys.sort_unstable();
    keys.dedup();

    let mut out = Vec::new();
    for key in keys {
        let mut row = MergedLine::default();
        if let Some((indent, code)) = code_map.remove(&key) {
            row.indent = indent;
            row.code = code;
        }
        if let Some(block) = block_map.remove(&key) {
            row.block = block;
        }
        if let Some(comment) = line_map.remove(&key) {
            row.comment = comment;
        }
        if !row.is_empty() {
            out.push(row);
        }
    }

    propagate_indent(&mut out);
    out
}

/// Where a comment's line lands after restructuring: the mapped survivor
/// line for joins, the original line otherwise (including splits, which
/// map to no target).
fn comment_key(line: usize, renumber: &RenumberMap) -> i64 {
    match renumber.get(&line) {
        Some(Some(target)) => *target as i64 * KEY_SCALE,
        _ => line as i64 * KEY_SCALE,
    }
}

/// Give comment-only rows the indentation of the first code line below
/// them, scanning bottom-up. Trailing comments keep no indentation.
fn propagate_indent(rows: &mut [MergedLine]) {
    let mut spaces = String::new();
    for row in rows.iter_mut().rev() {
        if row.code.is_empty() {
            row.indent = spaces.clone();
        } else {
            spaces = row.indent.clone();
        }
    }
}

#[cfg(test)]
#[path = "merge_test.rs"]
mod tests;
