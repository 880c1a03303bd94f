use pretty_assertions::assert_eq;
use weft_scanner::Quote;

use crate::region::{Region, Token};

// === Root Policy ===

#[test]
fn root_preserves_every_token_kind() {
    let mut root = Region::root();
    root.push_token(Token::Literal("a"));
    root.push_token(Token::Whitespace(b'\n'));
    root.push_token(Token::Comment("/* c */"));
    root.push_token(Token::Str {
        quote: Quote::Single,
        text: "'lit'",
    });
    assert_eq!(root.content, "a\n/* c */'lit'");
}

// === Child Policy ===

#[test]
fn child_drops_comments() {
    let mut sheet = Region::sheet(1);
    sheet.push_token(Token::Literal("a"));
    sheet.push_token(Token::Comment("// gone"));
    sheet.push_token(Token::Literal("b"));
    assert_eq!(sheet.content, "ab");
}

#[test]
fn child_collapses_whitespace_runs() {
    let mut sheet = Region::sheet(1);
    sheet.push_token(Token::Literal("a"));
    sheet.push_token(Token::Whitespace(b' '));
    sheet.push_token(Token::Whitespace(b'\n'));
    sheet.push_token(Token::Whitespace(b'\t'));
    sheet.push_token(Token::Literal("b"));
    assert_eq!(sheet.content, "a b");
}

#[test]
fn host_strings_pass_through_verbatim() {
    let mut host = Region::host(1);
    host.push_token(Token::Str {
        quote: Quote::Single,
        text: "'raw'",
    });
    assert_eq!(host.content, "'raw'");
}

// === Sheet String Re-Quoting ===

#[test]
fn sheet_requotes_single_quoted_strings() {
    let mut sheet = Region::sheet(1);
    sheet.push_token(Token::Str {
        quote: Quote::Single,
        text: "'a'",
    });
    assert_eq!(sheet.content, r"\'a\'");
}

#[test]
fn sheet_triple_escapes_internal_quotes() {
    let mut sheet = Region::sheet(1);
    sheet.push_token(Token::Str {
        quote: Quote::Single,
        text: r"'it\'s'",
    });
    assert_eq!(sheet.content, r"\'it\\\\'s\'");
}

#[test]
fn sheet_passes_other_quotes_through() {
    let mut sheet = Region::sheet(1);
    sheet.push_token(Token::Str {
        quote: Quote::Double,
        text: "\"a\"",
    });
    sheet.push_token(Token::Str {
        quote: Quote::Backtick,
        text: "`b`",
    });
    assert_eq!(sheet.content, "\"a\"`b`");
}

// === Bracket Depth ===

#[test]
fn host_counts_literal_open_brackets() {
    let mut host = Region::host(1);
    host.push_token(Token::Literal("["));
    host.push_token(Token::Literal("["));
    assert_eq!(host.bracket_depth, 2);
}

#[test]
fn brackets_in_strings_do_not_count() {
    let mut host = Region::host(1);
    host.push_token(Token::Str {
        quote: Quote::Double,
        text: "\"[\"",
    });
    assert_eq!(host.bracket_depth, 0);
}

#[test]
fn sheet_ignores_bracket_depth() {
    let mut sheet = Region::sheet(1);
    sheet.push_token(Token::Literal("["));
    assert_eq!(sheet.bracket_depth, 0);
}

// === Serialization & Folding ===

#[test]
fn sheet_literal_trims_and_quotes() {
    let mut sheet = Region::sheet(1);
    sheet.push_token(Token::Whitespace(b' '));
    sheet.push_token(Token::Literal("a"));
    sheet.push_token(Token::Whitespace(b' '));
    assert_eq!(sheet.sheet_literal(), "'a'");
}

#[test]
fn fold_sheet_wraps_in_evaluate_call() {
    let mut root = Region::root();
    let mut sheet = Region::sheet(1);
    sheet.push_token(Token::Literal("x"));
    root.fold_sheet(&sheet);
    assert_eq!(root.content, "RUNTIME.evaluate('x')");
}

#[test]
fn fold_host_splices_a_js_expr_call() {
    let mut sheet = Region::sheet(1);
    sheet.push_token(Token::Literal("a"));
    sheet.push_token(Token::Whitespace(b' '));
    let mut host = Region::host(1);
    host.push_token(Token::Literal("x"));
    sheet.fold_host(&host);
    assert_eq!(sheet.content, "a ' + RUNTIME.jsExpr(x) + '");
}
