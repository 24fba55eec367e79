//! Property-based tests for the stack parser

use nest::nest::parsing::{normalize, parse, Parser};
use proptest::prelude::*;

/// A well-formed expression tree
#[derive(Debug, Clone)]
enum Node {
    Word(String),
    List(Vec<Node>),
}

impl Node {
    /// Source form: space-separated children inside brackets
    fn source(&self) -> String {
        match self {
            Node::Word(word) => word.clone(),
            Node::List(children) => format!(
                "({})",
                children.iter().map(Node::source).collect::<Vec<_>>().join(" ")
            ),
        }
    }

    /// Normalized form: comma-separated children inside brackets
    fn normalized(&self) -> String {
        match self {
            Node::Word(word) => word.clone(),
            Node::List(children) => format!(
                "({})",
                children
                    .iter()
                    .map(Node::normalized)
                    .collect::<Vec<_>>()
                    .join(", ")
            ),
        }
    }
}

fn node_strategy() -> impl Strategy<Value = Node> {
    let leaf = "[a-z0-9]{1,5}".prop_map(Node::Word);
    leaf.prop_recursive(6, 64, 6, |inner| {
        prop::collection::vec(inner, 0..6).prop_map(Node::List)
    })
}

fn list_strategy() -> impl Strategy<Value = Node> {
    prop::collection::vec(node_strategy(), 0..6).prop_map(Node::List)
}

proptest! {
    #[test]
    fn never_panics_on_arbitrary_input(input in "[ab() \t]{0,60}") {
        let _ = normalize(&input);
        let _ = Parser::strict().parse(&input);
    }

    #[test]
    fn well_formed_lists_normalize(node in list_strategy()) {
        prop_assert_eq!(normalize(&node.source()), node.normalized());
    }

    #[test]
    fn well_formed_lists_reduce_to_one_token(node in list_strategy()) {
        let expression = parse(&node.source());
        prop_assert_eq!(expression.stack().len(), 1);
    }

    #[test]
    fn strict_accepts_well_formed_lists(node in list_strategy()) {
        let source = node.source();
        let strict = Parser::strict().parse(&source);
        prop_assert_eq!(strict, Ok(parse(&source)));
    }

    #[test]
    fn words_with_trailing_space_round_trip(word in "[a-z]{1,10}") {
        prop_assert_eq!(normalize(&format!("{} ", word)), word);
    }

    #[test]
    fn nesting_depth_preserved(depth in 1usize..300) {
        let input = format!("{}x{}", "(".repeat(depth), ")".repeat(depth));
        prop_assert_eq!(normalize(&input), input);
    }
}
