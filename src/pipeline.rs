//! End-to-end wiring of the conversion stages, plus direction detection.

use crate::split::{CodeLine, split_source};
use crate::tree::RenumberMap;
use crate::{DETECT_LINE_CAP, cosmetic, emit, merge, parse, to_brace, to_indent};

/// Which surface form to produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    /// Detect the input form and emit the opposite one.
    #[default]
    Auto,
    /// Emit brace syntax.
    ToBrace,
    /// Emit indent syntax.
    ToIndent,
}

/// Convert `source` to the requested surface form. Pure and total: any
/// input produces a best-effort output string; empty input produces an
/// empty string.
pub fn transcode(source: &str, direction: Direction) -> String {
    let streams = split_source(source);

    let to_indented = match direction {
        Direction::Auto => is_brace_form(&streams.code),
        Direction::ToIndent => true,
        Direction::ToBrace => false,
    };

    let (rendered, renumber) = if to_indented {
        let tree = parse::parse_braced(&streams.code);
        let (tree, alias_mv) = to_indent::join_aliases(tree);
        let (tree, loop_mv) = to_indent::join_do_while(tree);
        let tree = to_indent::nest_labels(tree);
        let tree = to_indent::strip_semicolons(tree);
        let tree = to_indent::add_colons(tree);
        (emit::emit_indented(&tree), combine(alias_mv, loop_mv))
    } else {
        let tree = parse::parse_indented(&streams.code);
        let tree = to_brace::strip_colons(tree);
        let tree = to_brace::add_semicolons(tree);
        let tree = to_brace::flatten_labels(tree);
        let (tree, loop_mv) = to_brace::split_do_while(tree);
        let (tree, alias_mv) = to_brace::split_aliases(tree);
        (emit::emit_braced(&tree), combine(alias_mv, loop_mv))
    };

    let rows = merge::merge_comments(
        &rendered,
        &streams.block_comments,
        &streams.line_comments,
        &renumber,
    );
    let rows = cosmetic::expand_block_comments(rows);
    let rows = cosmetic::tidy_lines(rows);
    cosmetic::join_lines(&rows)
}

/// Detect brace-form input by counting terminators over the first code
/// lines: more lines ending in `;` than in `:` means brace syntax.
fn is_brace_form(code: &[CodeLine]) -> bool {
    let mut semicolons = 0usize;
    let mut colons = 0usize;
    for cl in code.iter().take(DETECT_LINE_CAP) {
        match cl.text.chars().last() {
            Some(';') => semicolons += 1,
            Some(':') => colons += 1,
            _ => {}
        }
    }
    semicolons > colons
}

/// Merge the renumber maps of two restructurer passes; the later pass wins
/// on the (practically impossible) shared key.
fn combine(first: RenumberMap, second: RenumberMap) -> RenumberMap {
    let mut merged = first;
    merged.extend(second);
    merged
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
