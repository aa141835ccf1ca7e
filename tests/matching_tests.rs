#[cfg(test)]
mod matching_tests {
    use relex::{alternate, sequence, LexError, MatchTree, Rule, Stream};
    use std::borrow::Cow;

    fn leaf(text: &str) -> MatchTree<'_> {
        MatchTree::Token(Cow::Borrowed(text))
    }

    #[test]
    fn test_literal_matches_exact_text() {
        let rule = Rule::literal("let");
        let (stream, tree) = rule.try_match(Stream::new("letx"), false).unwrap();
        assert_eq!(stream.remaining(), "x");
        assert_eq!(tree, leaf("let"));

        assert!(rule.try_match(Stream::new("le"), false).is_err());
        assert!(rule.try_match(Stream::new("xlet"), false).is_err());
    }

    #[test]
    fn test_literal_strips_whitespace_when_ignoring() {
        let rule = Rule::literal("a");
        let (stream, tree) = rule.try_match(Stream::new("  a"), true).unwrap();
        assert!(stream.is_empty());
        assert_eq!(tree, leaf("a"));

        assert!(rule.try_match(Stream::new("  a"), false).is_err());
    }

    #[test]
    fn test_pattern_matches_anchored() {
        let rule = Rule::pattern("[0-9]+").unwrap();
        let (stream, tree) = rule.try_match(Stream::new("12ab"), false).unwrap();
        assert_eq!(stream.remaining(), "ab");
        assert_eq!(tree, leaf("12"));

        // Anchored: a match later in the stream does not count.
        assert!(rule.try_match(Stream::new("ab12"), false).is_err());
    }

    #[test]
    fn test_pattern_skips_whitespace_when_ignoring() {
        let rule = Rule::pattern("[0-9]+").unwrap();
        let (stream, tree) = rule.try_match(Stream::new("   42"), true).unwrap();
        assert!(stream.is_empty());
        assert_eq!(stream.offset(), 5);
        assert_eq!(tree, leaf("42"));

        assert!(rule.try_match(Stream::new("   42"), false).is_err());
    }

    #[test]
    fn test_sequence_threads_the_stream() {
        let rule = sequence("a", "b");
        let (stream, tree) = rule.try_match(Stream::new("abc"), false).unwrap();
        assert_eq!(stream.remaining(), "c");
        assert_eq!(tree, MatchTree::List(vec![leaf("a"), leaf("b")]));
    }

    #[test]
    fn test_sequence_is_all_or_nothing() {
        let stream = Stream::new("ac");
        let err = sequence("a", "b").try_match(stream, false).unwrap_err();
        assert!(matches!(
            err,
            LexError::FailedMatching {
                offset: 1,
                remaining: "c",
                ..
            }
        ));
        // The caller's stream is unaffected by the partial progress.
        assert_eq!(stream.remaining(), "ac");
    }

    #[test]
    fn test_alternation_is_order_sensitive() {
        let rule = alternate("a", "ab");
        let (stream, tree) = rule.try_match(Stream::new("ab"), false).unwrap();
        assert_eq!(stream.remaining(), "b");
        assert_eq!(tree, leaf("a"));
    }

    #[test]
    fn test_alternation_returns_first_success_verbatim() {
        let rule = alternate("x", "y");
        let (_, tree) = rule.try_match(Stream::new("y"), false).unwrap();
        // No extra nesting around the winning child's tree.
        assert_eq!(tree, leaf("y"));
    }

    #[test]
    fn test_alternation_fails_when_all_candidates_fail() {
        let rule = alternate("a", "b");
        let err = rule.try_match(Stream::new("c"), false).unwrap_err();
        assert!(matches!(err, LexError::FailedMatching { offset: 0, .. }));
    }

    #[test]
    fn test_repetition_is_greedy_and_never_fails() {
        let rule = Rule::pattern("[0-9]").unwrap().repeat();

        let (stream, tree) = rule.try_match(Stream::new("123ab"), false).unwrap();
        assert_eq!(stream.remaining(), "ab");
        assert_eq!(tree, MatchTree::List(vec![leaf("1"), leaf("2"), leaf("3")]));

        let (stream, tree) = rule.try_match(Stream::new("ab"), false).unwrap();
        assert_eq!(stream.remaining(), "ab");
        assert_eq!(tree, MatchTree::List(vec![]));
    }

    #[test]
    fn test_repetition_consumes_maximally() {
        let rule = Rule::pattern("[0-9]").unwrap().repeat();
        let (stream, _) = rule.try_match(Stream::new("123"), false).unwrap();
        // Re-running on the remainder consumes nothing further.
        let (again, tree) = rule.try_match(stream, false).unwrap();
        assert_eq!(again, stream);
        assert_eq!(tree, MatchTree::List(vec![]));
    }

    #[test]
    fn test_repetition_terminates_on_empty_match() {
        // "a*" matches the empty string, which would loop forever unguarded.
        let rule = Rule::pattern("a*").unwrap().repeat();
        let (stream, tree) = rule.try_match(Stream::new("b"), false).unwrap();
        assert_eq!(stream.remaining(), "b");
        assert_eq!(tree, MatchTree::List(vec![leaf("")]));
    }

    #[test]
    fn test_optional_never_fails() {
        let rule = Rule::literal("a").optional();

        let (stream, tree) = rule.try_match(Stream::new("ab"), false).unwrap();
        assert_eq!(stream.remaining(), "b");
        assert_eq!(tree, leaf("a"));

        let (stream, tree) = rule.try_match(Stream::new("b"), false).unwrap();
        assert_eq!(stream.remaining(), "b");
        assert_eq!(tree, MatchTree::List(vec![]));
    }

    #[test]
    fn test_atom_concatenates_tokens() {
        let rule = Rule::pattern("[0-9]").unwrap().repeat().atomize();
        let (stream, tree) = rule.try_match(Stream::new("123abc"), false).unwrap();
        assert_eq!(stream.remaining(), "abc");
        assert_eq!(tree, MatchTree::Token(Cow::Owned("123".to_owned())));
    }

    #[test]
    fn test_atom_propagates_failure() {
        let rule = Rule::literal("a").atomize();
        assert!(rule.try_match(Stream::new("b"), false).is_err());
    }

    #[test]
    fn test_ignore_consumes_discard_opportunistically() {
        let rule = Rule::literal("a").ignore("#");

        // Discard present: consumed before the child matches.
        let (stream, tree) = rule.try_match(Stream::new("#a"), true).unwrap();
        assert!(stream.is_empty());
        assert_eq!(tree, leaf("a"));

        // Discard absent: its failure is swallowed.
        let (stream, _) = rule.try_match(Stream::new("a"), true).unwrap();
        assert!(stream.is_empty());

        // Whitespace skipping disabled: the discard is never attempted.
        assert!(rule.try_match(Stream::new("#a"), false).is_err());
    }

    #[test]
    fn test_matching_is_deterministic() {
        let rule = sequence(Rule::pattern("[0-9]+").unwrap(), alternate("a", "b"));
        let first = rule.try_match(Stream::new("12a!"), false).unwrap();
        let second = rule.try_match(Stream::new("12a!"), false).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_whitespace_rule_is_reusable() {
        let rule = Rule::whitespace();
        let (stream, tree) = rule.try_match(Stream::new("  \tx"), false).unwrap();
        assert_eq!(stream.remaining(), "x");
        assert_eq!(tree, leaf("  \t"));

        assert!(rule.try_match(Stream::new("x"), false).is_err());
    }
}
