//! Patterns for the handful of C/C++ shapes the restructurers care about:
//! access modifiers, switch labels, type-definition headers, and the two
//! halves of a `do`/`while` loop. Everything else in the source is opaque.

use once_cell::sync::Lazy;
use regex::Regex;

/// `public:` / `private:` / `protected:`, tolerating interior spaces.
static ACCESS_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ *(public|private|protected) *:$").unwrap());

/// `case …:` / `default:`. The `.` alternates admit character labels
/// such as `case 'x':`.
static SWITCH_LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ *(case( .*|'.'|)|default *):$").unwrap());

/// Type-definition header in brace form: the keyword alone or followed by
/// a name list, with no terminator yet.
static TYPE_HEAD_BRACED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(class|struct|typedef|enum|union)( [^;]*|)$").unwrap());

/// Type-definition header in indent form; aliases may follow the name
/// directly with a comma.
static TYPE_HEAD_INDENTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(class|struct|typedef|enum|union)( [^;]*|,[^;]*|)$").unwrap());

/// Bare identifier list ending in `;` — the declarator tail of a type
/// definition, or the lone terminator itself.
static ALIAS_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9_*&, ]*;$").unwrap());

/// `enum` header; members of such a block take no `;`.
static ENUM_HEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"^enum( .*|,.*|)$").unwrap());

/// Trailing `while(…);` of a brace-form `do` loop.
static WHILE_TAIL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(while *\(.+\));$").unwrap());

/// Joined `do while(…)` introducer of the indent form.
static DO_WHILE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^do (while *\(.+\))$").unwrap());

/// True for access-modifier and switch labels, the lines that keep their
/// `:` in both surface forms.
pub fn is_label(text: &str) -> bool {
    ACCESS_LABEL.is_match(text) || SWITCH_LABEL.is_match(text)
}

/// True for preprocessor lines, passed through untokenized.
pub fn is_macro(text: &str) -> bool {
    text.starts_with('#')
}

pub fn is_type_head_braced(text: &str) -> bool {
    TYPE_HEAD_BRACED.is_match(text)
}

pub fn is_type_head_indented(text: &str) -> bool {
    TYPE_HEAD_INDENTED.is_match(text)
}

pub fn is_alias_tail(text: &str) -> bool {
    ALIAS_TAIL.is_match(text)
}

pub fn is_enum_head(text: &str) -> bool {
    ENUM_HEAD.is_match(text)
}

/// The `while(…)` part of a trailing `while(…);`, if `text` is one.
pub fn while_tail(text: &str) -> Option<&str> {
    WHILE_TAIL
        .captures(text)
        .map(|c| c.get(1).map_or("", |m| m.as_str()))
}

/// The `while(…)` part of a joined `do while(…)` introducer, if any.
pub fn do_while_tail(text: &str) -> Option<&str> {
    DO_WHILE
        .captures(text)
        .map(|c| c.get(1).map_or("", |m| m.as_str()))
}
