//! The recursive matching semantics for every rule variant.
//!
//! Matching is all-or-nothing as observed by the caller: a rule either fully
//! matches, returning an advanced stream and a match tree, or fails without
//! the caller seeing any consumption. Failures are recovered in exactly four
//! places (Optional, Repetition, Alternation candidates, Ignore's discard);
//! everywhere else they propagate immediately.

use crate::error::LexError;
use crate::rule::{Rule, RuleKind, WHITESPACE};
use crate::stream::Stream;
use crate::tree::MatchTree;
use std::borrow::Cow;

impl Rule {
    /// Match this rule at the start of `stream`.
    ///
    /// On success, returns the stream advanced past the consumed text
    /// together with the match tree; `stream` itself is unaffected. With
    /// `ignore_whitespace` set, leaf rules opportunistically consume leading
    /// whitespace before matching.
    pub fn try_match<'s>(
        &self,
        stream: Stream<'s>,
        ignore_whitespace: bool,
    ) -> Result<(Stream<'s>, MatchTree<'s>), LexError<'s>> {
        match &*self.0 {
            RuleKind::Literal(text) => {
                let stream = if ignore_whitespace {
                    stream.trim_leading_whitespace()
                } else {
                    stream
                };
                if stream.remaining().starts_with(text.as_str()) {
                    let (stream, consumed) = stream.advance(text.len());
                    Ok((stream, MatchTree::leaf(consumed)))
                } else {
                    Err(LexError::failed(self, stream))
                }
            }

            RuleKind::Pattern { regex, .. } => {
                let stream = if ignore_whitespace {
                    skip_whitespace(stream)
                } else {
                    stream
                };
                match regex.find(stream.remaining()) {
                    Some(found) => {
                        let (stream, consumed) = stream.advance(found.end());
                        Ok((stream, MatchTree::leaf(consumed)))
                    }
                    None => Err(LexError::failed(self, stream)),
                }
            }

            // No cross-element backtracking: the first failing child fails
            // the whole sequence, and earlier children are never re-derived.
            RuleKind::Sequence(rules) => {
                let mut stream = stream;
                let mut children = Vec::with_capacity(rules.len());
                for rule in rules {
                    let (next, tree) = rule.try_match(stream, ignore_whitespace)?;
                    stream = next;
                    children.push(tree);
                }
                Ok((stream, MatchTree::List(children)))
            }

            // First success wins, returned verbatim with no extra nesting.
            // Earlier alternatives are never retried once one succeeds.
            RuleKind::Alternation(rules) => {
                for rule in rules {
                    if let Ok(success) = rule.try_match(stream, ignore_whitespace) {
                        return Ok(success);
                    }
                }
                Err(LexError::failed(self, stream))
            }

            RuleKind::Repetition(rule) => {
                let mut stream = stream;
                let mut children = Vec::new();
                while let Ok((next, tree)) = rule.try_match(stream, ignore_whitespace) {
                    let consumed = next.offset() > stream.offset();
                    stream = next;
                    children.push(tree);
                    // A child matching the empty string would match forever.
                    if !consumed {
                        break;
                    }
                }
                Ok((stream, MatchTree::List(children)))
            }

            RuleKind::Optional(rule) => match rule.try_match(stream, ignore_whitespace) {
                Ok(success) => Ok(success),
                Err(_) => Ok((stream, MatchTree::empty())),
            },

            RuleKind::Atom(rule) => {
                let (stream, tree) = rule.try_match(stream, ignore_whitespace)?;
                Ok((stream, MatchTree::Token(Cow::Owned(tree.concat()))))
            }

            RuleKind::Ignore { rule, discard } => {
                let stream = if ignore_whitespace {
                    match discard.try_match(stream, ignore_whitespace) {
                        Ok((skipped, _)) => skipped,
                        Err(_) => stream,
                    }
                } else {
                    stream
                };
                rule.try_match(stream, ignore_whitespace)
            }
        }
    }
}

// Best-effort: a stream with no leading whitespace is returned unchanged.
fn skip_whitespace(stream: Stream) -> Stream {
    match WHITESPACE.find(stream.remaining()) {
        Some(found) => stream.advance(found.end()).0,
        None => stream,
    }
}
