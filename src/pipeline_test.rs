use super::*;

fn to_indent(src: &str) -> String {
    transcode(src, Direction::ToIndent)
}

fn to_brace(src: &str) -> String {
    transcode(src, Direction::ToBrace)
}

// --- Direction detection ---

#[test]
fn auto_detects_brace_input() {
    let out = transcode("int x = 1;\nint y = 2;\n", Direction::Auto);
    assert_eq!(out, "int x = 1\nint y = 2\n");
}

#[test]
fn auto_detects_indent_input() {
    let out = transcode("int f():\n    g()\n", Direction::Auto);
    assert_eq!(out, "int f() {\n    g();\n}\n");
}

#[test]
fn empty_input_gives_empty_output() {
    assert_eq!(transcode("", Direction::Auto), "");
    assert_eq!(transcode("  \n\n", Direction::Auto), "");
}

// --- Brace to indent ---

#[test]
fn simple_function() {
    let out = to_indent("int f(int x) { return x + 1; }\n");
    assert_eq!(out, "int f(int x):\n    return x + 1\n");
}

#[test]
fn access_modifiers_re_nest() {
    let out = to_indent("class A { public: int x; private: int y; };\n");
    assert_eq!(
        out,
        "class A:\n    public:\n        int x\n    private:\n        int y\n"
    );
}

#[test]
fn do_while_joins() {
    let out = to_indent("do { step(); } while(cond);\n");
    assert_eq!(out, "do while(cond):\n    step()\n");
}

#[test]
fn do_while_joins_across_lines() {
    let out = to_indent("do {\n    step();\n} while(cond);\n");
    assert_eq!(out, "do while(cond):\n    step()\n");
}

#[test]
fn typedef_aliases_join() {
    let out = to_indent("typedef struct S { int a; } T, U;\n");
    assert_eq!(out, "typedef struct S, T, U:\n    int a\n");
}

#[test]
fn enum_members_stay_bare() {
    let out = to_indent("enum Color { RED, GREEN };\n");
    assert_eq!(out, "enum Color:\n    RED, GREEN\n");
}

#[test]
fn switch_labels_re_nest() {
    let src = "switch (k) {\n    case 1:\n        f();\n        break;\n    default:\n        g();\n}\n";
    let out = to_indent(src);
    assert_eq!(
        out,
        "switch (k):\n    case 1:\n        f()\n        break\n    default:\n        g()\n"
    );
}

#[test]
fn line_comment_stays_on_its_line() {
    let out = to_indent("int x = 1; // note\n");
    assert_eq!(out, "int x = 1 // note\n");
}

#[test]
fn comment_on_joined_do_while_follows() {
    let out = to_indent("do { step(); } while(cond); // spin\n");
    assert_eq!(out, "do while(cond): // spin\n    step()\n");
}

#[test]
fn block_comment_expands_above_code() {
    let out = to_indent("/* a\n   b\n   c */\nint x;\n");
    assert_eq!(out, "/* a\n   b\n   c */\n\nint x\n");
}

#[test]
fn macros_pass_through_verbatim() {
    let out = to_indent("#define MAX 10\n#include <a.h>\nint x = MAX;\n");
    assert_eq!(out, "#define MAX 10\n#include <a.h>\n\nint x = MAX\n");
}

#[test]
fn string_literals_survive_untouched() {
    let literal = "\"a; { } // x /* y */\"";
    let out = to_indent(&format!("char *s = {literal};\n"));
    assert!(out.contains(literal), "missing literal in: {out}");
}

#[test]
fn brace_on_its_own_line_keeps_declaration_comment() {
    let out = to_indent("int f() // doc\n{\n    g();\n}\n");
    assert_eq!(out, "int f(): // doc\n    g()\n");
}

// --- Indent to brace ---

#[test]
fn typedef_aliases_split() {
    let out = to_brace("typedef struct S, T, U:\n    int a\n");
    assert_eq!(out, "typedef struct S {\n    int a;\n} T, U;\n");
}

#[test]
fn plain_struct_gets_terminator() {
    let out = to_brace("struct P:\n    int x\n    int y\n");
    assert_eq!(out, "struct P {\n    int x;\n    int y;\n};\n");
}

#[test]
fn class_with_parents_keeps_them_on_the_head() {
    let out = to_brace("class D, E: public B\n    int x\n");
    assert_eq!(out, "class D: public B {\n    int x;\n} E;\n");
}

#[test]
fn access_modifiers_flatten() {
    let out = to_brace("class A:\n    public:\n        int x\n    private:\n        int y\n");
    assert_eq!(
        out,
        "class A {\n    public:\n    int x;\n    private:\n    int y;\n};\n"
    );
}

#[test]
fn do_while_splits() {
    let out = to_brace("do while(cond):\n    step()\n");
    assert_eq!(out, "do {\n    step();\n}\n\nwhile(cond);\n");
}

#[test]
fn enum_members_get_no_semicolons() {
    let out = to_brace("enum Color:\n    RED, GREEN\n");
    assert_eq!(out, "enum Color {\n    RED, GREEN\n};\n");
}

#[test]
fn empty_block_renders_braces() {
    let out = to_brace("void noop():\n");
    assert_eq!(out, "void noop() {\n}\n");
}

#[test]
fn existing_semicolon_not_doubled() {
    let out = to_brace("x = 1;\n");
    assert_eq!(out, "x = 1;\n");
}

#[test]
fn indent_comment_keeps_its_line() {
    let out = to_brace("int x = 1 // note\n");
    assert_eq!(out, "int x = 1; // note\n");
}

#[test]
fn continuation_lines_rejoin() {
    let out = to_brace("x = a + \\\n    b\n");
    assert_eq!(out, "x = a +     b;\n");
}

// --- Round-trip stability ---

#[test]
fn round_trip_reaches_a_fixed_point() {
    let braced = "#include <stdio.h>\nint main() {\n    int x = 1;\n    if (x) {\n        printf(\"hi\");\n    }\n    return 0;\n}\n";
    let indented = transcode(braced, Direction::Auto);
    assert_eq!(
        indented,
        "#include <stdio.h>\n\nint main():\n    int x = 1\n    if (x):\n        printf(\"hi\")\n    return 0\n"
    );

    let rebraced = transcode(&indented, Direction::Auto);
    assert_eq!(
        rebraced,
        "#include <stdio.h>\n\nint main() {\n    int x = 1;\n    if (x) {\n        printf(\"hi\");\n    }\n    return 0;\n}\n"
    );

    let reindented = transcode(&rebraced, Direction::Auto);
    assert_eq!(reindented, indented);
}

#[test]
fn typedef_round_trip() {
    let braced = "typedef struct S { int a; } T, U;\n";
    let there = transcode(braced, Direction::Auto);
    let back = transcode(&there, Direction::Auto);
    assert_eq!(back, "typedef struct S {\n    int a;\n} T, U;\n");
}

#[test]
fn comments_preserved_across_conversion() {
    let src = "int a; // one\n/* two */\nint b; // three\n";
    let out = to_indent(src);
    for needle in ["// one", "/* two */", "// three"] {
        assert!(out.contains(needle), "missing {needle} in: {out}");
    }
}

#[test]
fn indent_output_is_on_a_four_space_ladder() {
    let src = "void f() { if (a) { if (b) { g(); } } h(); }\n";
    let out = to_indent(src);
    for line in out.lines() {
        let lead = line.len() - line.trim_start_matches(' ').len();
        assert_eq!(lead % 4, 0, "line off the ladder: {line:?}");
    }
}

#[test]
fn brace_output_terminator_discipline() {
    let src = "int f():\n    g()\n    h()\nint x\n";
    let out = to_brace(src);
    for line in out.lines().filter(|l| !l.trim().is_empty()) {
        let t = line.trim();
        let terminated = t.ends_with(';') || t.ends_with('{') || t.ends_with('}');
        assert!(terminated, "unterminated line: {line:?}");
    }
}
