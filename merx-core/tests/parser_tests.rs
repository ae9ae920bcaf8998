//! 语法检查的接受/拒绝测试

mod common;
use common::{accepts, accepts_block};
use merx_core::compiler::lexer::tokenize;
use merx_core::compiler::parser::{check, check_with_limits};
use merx_core::LimitConfig;

#[test]
fn test_declaration_with_expression() {
    assert!(accepts("int x = 1 + 2;"));
}

#[test]
fn test_declaration_missing_expression() {
    assert!(!accepts("int x = ;"));
}

#[test]
fn test_if_with_return_block() {
    assert!(accepts("if (x) { return; }"));
}

#[test]
fn test_return_missing_semicolon() {
    assert!(!accepts("if (x) return"));
}

#[test]
fn test_empty_input() {
    assert!(accepts(""));
    assert!(accepts("   \n\t"));
    assert!(accepts("// only a comment\n/* and another */"));
}

#[test]
fn test_block_balance() {
    assert!(accepts_block("{ int a; int b; }"));
    assert!(!accepts_block("{ int a; "));
}

#[test]
fn test_comments_are_invisible_to_the_parser() {
    assert!(accepts("int /* type */ x /* name */ = 1 // value\n;"));
}

#[test]
fn test_program() {
    let source = r#"
        int total = 0;
        string label = "sum";
        while (total < 100) {
            total = total + 10 * 2;
            if (total == 50) { label = "half"; } else label = label;
        }
        return total;
    "#;
    assert!(accepts(source));
}

#[test]
fn test_first_violation_rejects_everything() {
    assert!(!accepts("int a = 1; int b = ; int c = 3;"));
    assert!(!accepts("int a = 1; @"));
}

#[test]
fn test_unknown_tokens_are_rejected() {
    assert!(!accepts("x = 1 @ 2;"));
    assert!(!accepts("x = 1.2.3;"));
}

#[test]
fn test_return_paren_quirk() {
    // 带括号的返回值以运算符 token 开头，因此被当作"没有表达式"
    assert!(!accepts("return (1 + 2);"));
    assert!(accepts("return 1 + (2);"));
}

#[test]
fn test_check_functions() {
    let tokens = tokenize("if (a) { b = 1; }");
    assert!(check(&tokens));
    assert!(!check_with_limits(&tokens, LimitConfig { max_nesting_depth: 0 }));
}

#[test]
fn test_deep_nesting_is_rejected_not_overflowed() {
    let depth = 100_000;
    let source = format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth));
    assert!(!accepts(&source));

    let source = format!("{}x;", "if (a) ".repeat(depth));
    assert!(!accepts(&source));
}

fn nested_parens(depth: usize) -> String {
    format!("x = {}1{};", "(".repeat(depth), ")".repeat(depth))
}

fn nested_whiles(depth: usize) -> String {
    format!("{}x = 1;{}", "while (a) { ".repeat(depth), " }".repeat(depth))
}

#[test]
fn test_nesting_within_limit() {
    assert!(accepts(&nested_parens(200)));
    assert!(accepts(&nested_whiles(100)));
}

#[test]
fn test_default_nesting_limit_boundary() {
    let limit = LimitConfig::default().max_nesting_depth;

    assert!(accepts(&nested_parens(limit)));
    assert!(!accepts(&nested_parens(limit + 1)));

    assert!(accepts(&nested_whiles(limit)));
    assert!(!accepts(&nested_whiles(limit + 1)));
}

#[test]
fn test_raised_limit_accepts_deeper_input() {
    let limits = LimitConfig { max_nesting_depth: 400 };
    let tokens = tokenize(&nested_parens(300));
    assert!(!check(&tokens));
    assert!(check_with_limits(&tokens, limits));
}

#[test]
fn test_unicode_digit_operand() {
    assert!(accepts("x = \u{0663};"));
    assert!(accepts("int n = \u{0661}\u{0662} + 3;"));
    assert!(!accepts("x = \u{216B};"));
}
