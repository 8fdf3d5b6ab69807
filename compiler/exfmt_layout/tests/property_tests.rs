//! Property-based tests for the layout engine.
//!
//! These tests use proptest to generate random token trees and verify:
//! 1. Idempotence: rendering the same tree twice gives the same text
//! 2. Whitespace-only breaking: layout never adds or drops visible characters
//! 3. No blank lines
//! 4. Metric invariants: composite length and multi-line thresholds

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::doc_markdown,
    clippy::redundant_closure_for_method_calls,
    reason = "Proptest macros generate code with these patterns"
)]

use exfmt_layout::{
    render, BracketedToken, CompositeToken, Token, TokenKind, MAX_INLINE_CHILDREN,
    MULTI_LINE_LENGTH, SEPARATOR,
};
use proptest::prelude::*;

// -- Tree Generation Strategies --

/// Generate leaf text: identifiers, operators, and punctuation.
fn leaf_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_.+*=> ]{0,12}").expect("valid regex")
}

/// Generate an open/close bracket pair.
fn bracket_pair_strategy() -> impl Strategy<Value = (&'static str, &'static str)> {
    prop_oneof![
        Just(("(", ")")),
        Just(("[", "]")),
        Just((" { ", " } ")),
        Just(("<", ">")),
    ]
}

fn leaf_strategy() -> impl Strategy<Value = Token> {
    (leaf_text_strategy(), any::<bool>(), 0usize..3).prop_map(|(text, splittable, indent)| {
        Token::leaf(text)
            .with_splittable(splittable)
            .with_split_indent(indent)
    })
}

/// Generate a token tree up to a few levels deep.
fn token_strategy() -> impl Strategy<Value = Token> {
    leaf_strategy().prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            (
                prop::collection::vec(inner.clone(), 0..9),
                any::<bool>(),
                any::<bool>(),
            )
                .prop_map(|(children, add_commas, forced)| {
                    let composite = CompositeToken::from_tokens(children, add_commas);
                    let composite = if forced {
                        composite.force_multi_line()
                    } else {
                        composite
                    };
                    Token::from(composite)
                }),
            (
                inner,
                bracket_pair_strategy(),
                any::<bool>(),
                any::<bool>(),
                any::<bool>(),
            )
                .prop_map(|(body, (open, close), new_line, omit, splittable)| {
                    let mut bracketed = BracketedToken::new(open, close, body);
                    if new_line {
                        bracketed = bracketed.new_line_before();
                    }
                    if omit {
                        bracketed = bracketed.omit_brackets_for_single();
                    }
                    Token::from(bracketed).with_splittable(splittable)
                }),
        ]
    })
}

// -- Reference Helpers --

/// Render a tree on one line, following the same bracket-omission rules.
fn inline_text(token: &Token, out: &mut String) {
    match token.kind() {
        TokenKind::Leaf(leaf) => out.push_str(leaf.text()),
        TokenKind::Composite(composite) => {
            for (i, child) in composite.children().iter().enumerate() {
                if i > 0 && composite.adds_commas() {
                    out.push_str(SEPARATOR);
                }
                inline_text(child, out);
            }
        }
        TokenKind::Bracketed(bracketed) => {
            let single = bracketed.omits_brackets();
            if !single {
                out.push_str(bracketed.open());
            }
            inline_text(bracketed.body(), out);
            if !single {
                out.push_str(bracketed.close());
            }
        }
    }
}

fn without_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Check the composite length invariant at every composite in the tree.
fn composite_lengths_hold(token: &Token) -> bool {
    match token.kind() {
        TokenKind::Leaf(_) => true,
        TokenKind::Composite(composite) => {
            let sum: usize = composite.children().iter().map(Token::length).sum();
            composite.length() == sum && composite.children().iter().all(composite_lengths_hold)
        }
        TokenKind::Bracketed(bracketed) => composite_lengths_hold(bracketed.body()),
    }
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    })]

    /// Rendering twice yields identical output.
    #[test]
    fn prop_render_idempotent(token in token_strategy()) {
        let first = render(&token);
        let second = render(&token);
        prop_assert_eq!(first, second);
    }

    /// Breaking only inserts whitespace; visible characters are untouched.
    #[test]
    fn prop_breaks_only_add_whitespace(token in token_strategy()) {
        let mut inline = String::new();
        inline_text(&token, &mut inline);
        prop_assert_eq!(without_whitespace(&render(&token)), without_whitespace(&inline));
    }

    /// Repeated break requests never stack into blank lines.
    #[test]
    fn prop_no_blank_lines(token in token_strategy()) {
        let output = render(&token);
        prop_assert!(!output.contains("\r\n\r\n"), "blank line in {:?}", output);
    }

    /// A token that is not multi-line renders without any line terminator.
    #[test]
    fn prop_single_line_tokens_stay_on_one_line(token in token_strategy()) {
        if !token.is_multi_line() {
            prop_assert!(!render(&token).contains('\n'));
        }
    }

    /// Composite length is the sum of its children, at every level.
    #[test]
    fn prop_composite_length_is_sum(token in token_strategy()) {
        prop_assert!(composite_lengths_hold(&token));
    }

    /// Short, flat composites go multi-line exactly when they exceed the child limit.
    #[test]
    fn prop_child_count_threshold(texts in prop::collection::vec("[a-z]{1,5}", 0..12)) {
        let children: Vec<Token> = texts.iter().map(|text| Token::leaf(text.as_str())).collect();
        let token = Token::composite(children);
        prop_assert!(token.length() <= MULTI_LINE_LENGTH);
        prop_assert_eq!(token.is_multi_line(), texts.len() > MAX_INLINE_CHILDREN);
    }

    /// Two leaves go multi-line exactly when their combined length exceeds the limit.
    #[test]
    fn prop_length_threshold(a in 0usize..100, b in 0usize..100) {
        let token = Token::composite([Token::leaf("a".repeat(a)), Token::leaf("b".repeat(b))]);
        prop_assert_eq!(token.is_multi_line(), a + b > MULTI_LINE_LENGTH);
    }

    /// Bracket length always counts both delimiters, rendered or not.
    #[test]
    fn prop_bracket_length_counts_delimiters(
        text in leaf_text_strategy(),
        (open, close) in bracket_pair_strategy(),
        omit in any::<bool>(),
    ) {
        let mut bracketed = BracketedToken::new(open, close, Token::leaf(text.as_str()));
        if omit {
            bracketed = bracketed.omit_brackets_for_single();
        }
        let expected = text.chars().count() + open.chars().count() + close.chars().count();
        prop_assert_eq!(bracketed.length(), expected);
        prop_assert_eq!(bracketed.omits_brackets(), omit);
    }
}
