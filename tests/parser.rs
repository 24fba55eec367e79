//! Integration tests for the stack parser's rendering rules

use nest::nest::parsing::{normalize, parse, Malformation, ParseError, ParseMode, Parser};
use nest::nest::token::{Bracket, Token};
use rstest::rstest;

#[rstest]
#[case::simple_group("(a b)", "(a, b)")]
#[case::empty_group("()", "()")]
#[case::nested_middle("(a (b c) d)", "(a, (b, c), d)")]
#[case::nested_end("(a (b c))", "(a, (b, c))")]
#[case::nested_start("((a b) c)", "((a, b), c)")]
#[case::only_nested("((a))", "((a))")]
#[case::empty_nested("(())", "(())")]
#[case::sibling_groups("((a) (b))", "((a), (b))")]
#[case::double_space("(a  b)", "(a, , b)")]
#[case::trailing_space_in_group("(a )", "(a, )")]
#[case::leading_space_in_group("( a)", "(, a)")]
#[case::punctuation_kept("(a,b c.d)", "(a,b, c.d)")]
#[case::tabs_are_text("(a\tb c)", "(a\tb, c)")]
#[case::word_with_trailing_space("hello ", "hello")]
fn test_normalize(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize(input), expected);
}

#[rstest]
#[case::empty("")]
#[case::bare_word("hello")]
#[case::two_bare_words_keep_first("hello world")]
fn test_unbracketed_input(#[case] input: &str) {
    // Text after the last delimiter is never flushed
    let expected = input.split(' ').rev().nth(1).unwrap_or("");
    assert_eq!(normalize(input), expected);
}

#[test]
fn test_unmatched_close_drains_stack() {
    let expression = parse("a) b");
    assert_eq!(expression.stack(), &[Token::atom("")]);
    assert_eq!(expression.render(), "");
}

#[test]
fn test_unmatched_close_discards_built_groups() {
    let expression = parse("(a) b) ");
    // The second ')' drains (a) and "b"; the trailing space pushes one empty atom
    assert_eq!(expression.stack(), &[Token::atom("")]);
}

#[test]
fn test_trailing_atom_is_dropped() {
    let expression = parse("(a b");
    assert_eq!(
        expression.stack(),
        &[Token::Bracket(Bracket::Open), Token::atom("a")]
    );
    assert_eq!(expression.render(), "a");
}

#[test]
fn test_stray_open_bracket_on_top() {
    assert_eq!(normalize("(a) ("), "(");
}

#[test]
fn test_only_top_of_stack_is_rendered() {
    let expression = parse("(a) (b)");
    assert_eq!(expression.stack().len(), 3);
    assert_eq!(expression.render(), "(b)");
}

#[test]
fn test_deep_nesting() {
    let depth = 1_000;
    let input = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
    let expression = parse(&input);
    assert_eq!(expression.stack().len(), 1);
    assert_eq!(expression.render(), input);
}

#[test]
fn test_very_deep_nesting() {
    for depth in [10_000, 100_000] {
        let input = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        let expression = Parser::strict().parse(&input).expect("balanced input");
        assert_eq!(expression.stack().len(), 1);
        assert_eq!(expression.render(), input);
    }
}

#[test]
fn test_deep_nesting_with_siblings() {
    let depth = 1_000;
    let input = format!("{}x{}", "(a ".repeat(depth), ")".repeat(depth));
    let expected = format!("{}x{}", "(a, ".repeat(depth), ")".repeat(depth));
    assert_eq!(normalize(&input), expected);
}

#[rstest]
#[case::unmatched_close("a) b", Malformation::UnmatchedClose { offset: 1 })]
#[case::second_close("(a)) ", Malformation::UnmatchedClose { offset: 3 })]
#[case::unclosed_open("x (a ", Malformation::UnclosedOpen { offset: 2 })]
#[case::outermost_unclosed_wins("((a) ", Malformation::UnclosedOpen { offset: 0 })]
#[case::trailing_text("(a) b", Malformation::TrailingText { offset: 4, text: "b".to_string() })]
#[case::bare_word("hello", Malformation::TrailingText { offset: 0, text: "hello".to_string() })]
#[case::close_before_unclosed(") (", Malformation::UnmatchedClose { offset: 0 })]
fn test_strict_malformations(#[case] input: &str, #[case] expected: Malformation) {
    let err = Parser::strict().parse(input).unwrap_err();
    assert_eq!(err, ParseError::MalformedExpression(expected));
}

#[rstest]
#[case("(a b)")]
#[case("()")]
#[case("(a (b c) d)")]
#[case("(a  b)")]
#[case("")]
fn test_strict_agrees_with_legacy_on_well_formed(#[case] input: &str) {
    let strict = Parser::with_mode(ParseMode::Strict)
        .parse(input)
        .expect("well formed input");
    assert_eq!(strict, parse(input));
}
