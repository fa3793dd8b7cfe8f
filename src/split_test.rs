use super::*;

fn code_texts(s: &SourceStreams) -> Vec<(usize, &str)> {
    s.code.iter().map(|c| (c.line, c.text.as_str())).collect()
}

// --- Stream separation ---

#[test]
fn code_only() {
    let s = split_source("int x = 1;\nreturn x;\n");
    assert_eq!(code_texts(&s), vec![(0, "int x = 1;"), (1, "return x;")]);
    assert!(s.block_comments.is_empty());
    assert!(s.line_comments.is_empty());
}

#[test]
fn blank_lines_dropped() {
    let s = split_source("int a;\n\n   \nint b;\n");
    assert_eq!(code_texts(&s), vec![(0, "int a;"), (3, "int b;")]);
}

#[test]
fn line_comment_split_from_code() {
    let s = split_source("int x = 1; // init\n");
    assert_eq!(code_texts(&s), vec![(0, "int x = 1;")]);
    assert_eq!(s.line_comments.len(), 1);
    assert_eq!(s.line_comments[0].line, 0);
    assert_eq!(s.line_comments[0].text, "// init");
}

#[test]
fn comment_only_line_keys_next_code_line() {
    let s = split_source("// hello\nint x;\n");
    assert_eq!(code_texts(&s), vec![(1, "int x;")]);
    assert_eq!(s.line_comments[0].line, 0);
}

#[test]
fn block_comment_single_line() {
    let s = split_source("int a; /* note */ int b;\n");
    assert_eq!(code_texts(&s), vec![(0, "int a;  int b;")]);
    assert_eq!(s.block_comments.len(), 1);
    assert_eq!(s.block_comments[0].lines, vec!["/* note */"]);
}

#[test]
fn block_comment_multi_line() {
    let s = split_source("/* a\n   b\n   c */\nint x;\n");
    assert_eq!(code_texts(&s), vec![(3, "int x;")]);
    assert_eq!(s.block_comments.len(), 1);
    assert_eq!(s.block_comments[0].line, 0);
    assert_eq!(s.block_comments[0].lines, vec!["/* a", "   b", "   c */"]);
}

#[test]
fn two_block_comments_on_one_line_share_a_record() {
    let s = split_source("int a; /* x */ b(); /* y */\n");
    assert_eq!(code_texts(&s), vec![(0, "int a;  b();")]);
    assert_eq!(s.block_comments.len(), 1);
    assert_eq!(s.block_comments[0].lines, vec!["/* x *//* y */"]);
}

#[test]
fn blank_line_inside_block_comment_dropped() {
    let s = split_source("/* a\n\n   b */\n");
    assert_eq!(s.block_comments[0].lines, vec!["/* a", "   b */"]);
}

// --- Strings are opaque ---

#[test]
fn comment_markers_inside_string() {
    let s = split_source("char *s = \"// not /* a */ comment\";\n");
    assert_eq!(
        code_texts(&s),
        vec![(0, "char *s = \"// not /* a */ comment\";")]
    );
    assert!(s.block_comments.is_empty());
    assert!(s.line_comments.is_empty());
}

#[test]
fn escaped_quote_keeps_string_open() {
    let s = split_source("char *s = \"he said \\\"hi\\\" // x\";\n");
    assert!(s.line_comments.is_empty());
    assert_eq!(s.code[0].text, "char *s = \"he said \\\"hi\\\" // x\";");
}

#[test]
fn quote_inside_comment_does_not_open_string() {
    let s = split_source("// it's fine\nint x; // \"quoted\"\n");
    assert_eq!(code_texts(&s), vec![(1, "int x;")]);
    assert_eq!(s.line_comments.len(), 2);
}

// --- Normalization ---

#[test]
fn trailing_whitespace_trimmed() {
    let s = split_source("int x;   \t\n");
    assert_eq!(s.code[0].text, "int x;");
}

#[test]
fn leading_tabs_expand() {
    let s = split_source("\tint x;\n\t\tint y;\n");
    assert_eq!(s.code[0].text, "    int x;");
    assert_eq!(s.code[1].text, "        int y;");
}

#[test]
fn interior_tabs_kept() {
    let s = split_source("int\tx;\n");
    assert_eq!(s.code[0].text, "int\tx;");
}

// --- Malformed input never fails ---

#[test]
fn unterminated_block_comment_swallows_rest() {
    let s = split_source("int a;\n/* open\nint b;\n");
    assert_eq!(code_texts(&s), vec![(0, "int a;")]);
    assert_eq!(s.block_comments[0].lines, vec!["/* open", "int b;"]);
}

#[test]
fn unterminated_string_keeps_markers_literal() {
    let s = split_source("char *s = \"open\nint x; // still code\n");
    assert!(s.line_comments.is_empty());
    assert_eq!(s.code.len(), 2);
}

#[test]
fn empty_input() {
    assert_eq!(split_source(""), SourceStreams::default());
}
