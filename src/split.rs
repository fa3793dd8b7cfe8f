//! Lexical separation of raw source into three line-keyed streams: code,
//! block comments, and line comments. The walk is a character FSM with
//! three flags (in-string, in-line-comment, in-block-comment); every
//! character of a non-blank line lands in exactly one stream, so the
//! streams partition the input and the merger can reassemble it later by
//! line number alone.
//!
//! Escape handling is one character of lookback: a `"` preceded by `\` does
//! not toggle the string flag. The splitter never fails; an unterminated
//! string or comment simply leaves its flag set for the rest of the input.

use crate::INDENT_WIDTH;

/// One line of code, keyed by its 0-based source line number. Trailing
/// whitespace is stripped and leading tabs are expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    pub line: usize,
    pub text: String,
}

/// One `/* … */` span, keyed by the line it starts on, kept rolled up as
/// its raw lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockComment {
    pub line: usize,
    pub lines: Vec<String>,
}

/// One `// …` comment, keyed by its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineComment {
    pub line: usize,
    pub text: String,
}

/// The three streams produced by [`split_source`].
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SourceStreams {
    pub code: Vec<CodeLine>,
    pub block_comments: Vec<BlockComment>,
    pub line_comments: Vec<LineComment>,
}

/// Split `source` into code, block comments, and line comments.
///
/// Blank lines are dropped up front (including blank lines inside block
/// comments). Consecutive all-comment lines share one pending code slot
/// whose line number tracks the latest line, so the code that eventually
/// fills it is keyed correctly. Several `/*…*/` groups on one raw line
/// merge into a single comment record.
pub fn split_source(source: &str) -> SourceStreams {
    let mut in_block = false;
    let mut in_string = false;

    let mut code: Vec<CodeLine> = Vec::new();
    let mut bcoms: Vec<BlockComment> = Vec::new();
    let mut lcoms: Vec<LineComment> = Vec::new();

    for (n, raw) in source.lines().enumerate() {
        if raw.trim().is_empty() {
            continue;
        }

        let mut in_line = false;

        // Open a fresh code slot, or reuse the previous one if it is still
        // empty (the previous line was pure comment).
        match code.last_mut() {
            Some(last) if last.text.is_empty() => last.line = n,
            _ => code.push(CodeLine {
                line: n,
                text: String::new(),
            }),
        }

        if in_block
            && let Some(b) = bcoms.last_mut()
        {
            b.lines.push(String::new());
        }

        let mut prev = '\n';
        for c in raw.chars() {
            if in_line {
                if let Some(lc) = lcoms.last_mut() {
                    lc.text.push(c);
                }
            } else if in_block {
                if let Some(b) = bcoms.last_mut()
                    && let Some(line) = b.lines.last_mut()
                {
                    line.push(c);
                }
            } else if let Some(cl) = code.last_mut() {
                cl.text.push(c);
            }

            let escaped = prev == '\\';
            if c == '"' && !(in_line || in_block || escaped) {
                in_string = !in_string;
            }
            if prev == '/' && c == '/' && !(in_string || in_line || in_block) {
                in_line = true;
                retract_two(&mut code);
                lcoms.push(LineComment {
                    line: n,
                    text: "//".to_string(),
                });
            }
            if prev == '/' && c == '*' && !(in_string || in_line || in_block) {
                in_block = true;
                retract_two(&mut code);
                match bcoms.last_mut() {
                    // A second block comment on the same line joins the first.
                    Some(b) if b.line == n => {
                        if let Some(line) = b.lines.last_mut() {
                            line.push_str("/*");
                        }
                    }
                    _ => bcoms.push(BlockComment {
                        line: n,
                        lines: vec!["/*".to_string()],
                    }),
                }
            }
            if prev == '*' && c == '/' && in_block && !in_line {
                in_block = false;
            }
            prev = c;
        }
    }

    SourceStreams {
        code: normalize(code),
        block_comments: bcoms,
        line_comments: lcoms,
    }
}

/// Drop the two marker characters just appended to the current code line.
fn retract_two(code: &mut [CodeLine]) {
    if let Some(cl) = code.last_mut() {
        cl.text.pop();
        cl.text.pop();
    }
}

/// Strip trailing spaces/tabs, expand leading tabs to [`INDENT_WIDTH`]
/// spaces, and drop lines left without code.
fn normalize(code: Vec<CodeLine>) -> Vec<CodeLine> {
    let mut out = Vec::with_capacity(code.len());
    for cl in code {
        let trimmed = cl.text.trim_end_matches([' ', '\t']);
        let content = trimmed.trim_start_matches([' ', '\t']);
        if content.is_empty() {
            continue;
        }
        let lead = &trimmed[..trimmed.len() - content.len()];
        let indent = lead.replace('\t', &" ".repeat(INDENT_WIDTH));
        out.push(CodeLine {
            line: cl.line,
            text: format!("{indent}{content}"),
        });
    }
    out
}

#[cfg(test)]
#[path = "split_test.rs"]
mod tests;
