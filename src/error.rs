use crate::rule::Rule;
use crate::stream::Stream;
use thiserror::Error;

/// A fatal lexing failure. There are exactly two kinds: a required rule did
/// not match, or matching finished with input left over.
///
/// Optional, Repetition, Alternation's per-candidate attempts, and Ignore's
/// discard attempt recover from `FailedMatching` locally; everywhere else it
/// propagates to the caller and no partial result survives.
#[derive(Debug, Clone, Error)]
pub enum LexError<'s> {
    /// A rule that was required to match did not match the stream.
    #[error("failed to match {rule} at offset {offset}, before {remaining:?}")]
    FailedMatching {
        /// The rule that failed.
        rule: Rule,
        /// Byte offset of the failure point.
        offset: usize,
        /// The unconsumed input at the failure point.
        remaining: &'s str,
    },
    /// Every rule matched, but input remained unconsumed.
    #[error("unconsumed input at offset {offset}: {remaining:?}")]
    RemainingInput { offset: usize, remaining: &'s str },
}

impl<'s> LexError<'s> {
    pub(crate) fn failed(rule: &Rule, stream: Stream<'s>) -> LexError<'s> {
        LexError::FailedMatching {
            rule: rule.clone(),
            offset: stream.offset(),
            remaining: stream.remaining(),
        }
    }

    pub(crate) fn leftover(stream: Stream<'s>) -> LexError<'s> {
        LexError::RemainingInput {
            offset: stream.offset(),
            remaining: stream.remaining(),
        }
    }
}
