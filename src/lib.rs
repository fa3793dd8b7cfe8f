//! Bidirectional converter between two surface syntaxes for C/C++-like
//! source: the traditional brace-and-semicolon form and an indentation-based
//! form where block introducers end with `:` and statements carry no
//! terminator.
//!
//! The conversion is a pure pipeline: a lexical splitter separates code from
//! comments while recording line provenance, a parser builds a block tree
//! from whichever surface form the input uses, a set of restructuring passes
//! rewrites dialect-specific shapes (type aliases, `do`/`while`, access and
//! switch labels), an emitter renders the opposite form, and the comments
//! are merged back onto the lines they originally annotated. Every stage is
//! total: malformed input produces best-effort output, never an error.

/// Cosmetic post-processing: blank-row removal, alias pull-back, block
/// comment expansion, and blank-line insertion.
pub mod cosmetic;
/// Rendering of a block tree into indented or braced lines.
pub mod emit;
/// Label and type-header patterns shared by the parser and restructurers.
mod labels;
/// Reattachment of comments to emitted lines via line-number keys.
pub mod merge;
/// Brace tokenizer and indent parser producing the block tree.
pub mod parse;
/// Pipeline wiring and direction detection.
mod pipeline;
/// Lexical separation of code, block comments, and line comments.
pub mod split;
/// I-to-brace restructuring passes.
pub mod to_brace;
/// Brace-to-indent restructuring passes.
pub mod to_indent;
/// The block tree and the line-renumber map.
pub mod tree;

pub use pipeline::{Direction, transcode};

/// Width of one indentation step, in spaces. One leading tab in input
/// expands to this many spaces.
pub const INDENT_WIDTH: usize = 4;

/// Upper bound on the number of code lines the direction detector inspects.
pub(crate) const DETECT_LINE_CAP: usize = 50_000;
