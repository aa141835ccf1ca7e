//! Combinator lexing: compose primitive pattern rules into a token grammar,
//! then drive the composed rule over an input to get a flat token sequence or
//! a precise failure.
//!
//! Usage:
//!
//! ```
//! use relex::{alternate, sequence, Rule};
//!
//! let number = Rule::pattern(r"\d+").unwrap();
//! let operator = Rule::pattern(r"[+\-*/^]").unwrap();
//! let postfix = sequence(number.clone(), alternate(number, operator).repeat());
//!
//! let tokens = postfix.lex("3 4 +", true).unwrap();
//! assert_eq!(tokens, vec!["3", "4", "+"]);
//!
//! assert!(postfix.lex("3 4 %", true).is_err());
//! ```
//!
//! Leaf rules are [`Rule::literal`] (exact text) and [`Rule::pattern`] (a
//! regular expression matched anchored at the start of the stream). They
//! compose with [`sequence`] and [`alternate`], and with the rule methods
//! [`repeat`](Rule::repeat), [`optional`](Rule::optional),
//! [`atomize`](Rule::atomize), [`capture`](Rule::capture),
//! [`ignore`](Rule::ignore), [`multiple`](Rule::multiple),
//! [`exactly`](Rule::exactly) and [`many`](Rule::many). String operands are
//! accepted wherever a rule is, and become literal rules.
//!
//! Matching semantics worth knowing:
//!
//! - Alternation is ordered and first-match-wins: an earlier alternative
//!   shadows a later one when both could match a prefix of the same input.
//! - Sequences are all-or-nothing, with no backtracking across elements that
//!   already matched.
//! - Repetition and Optional never fail; they report zero matches instead.
//! - With `ignore_whitespace` set, leaf rules opportunistically skip leading
//!   whitespace before matching.
//!
//! [`Rule::lex`] produces the full token sequence, or one of the two failure
//! kinds in [`LexError`]: a required rule failed to match, or input was left
//! over after all rules matched. For finer control, [`Rule::try_match`]
//! matches once against a [`Stream`] and returns the advanced stream and the
//! nested [`MatchTree`].

mod error;
mod lexer;
mod matcher;
mod rule;
mod stream;
mod tree;

pub use error::LexError;
pub use rule::{alternate, sequence, RegexError, Rule};
pub use stream::Stream;
pub use tree::{MatchTree, Token};
