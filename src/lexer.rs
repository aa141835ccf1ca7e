use crate::error::LexError;
use crate::rule::{Rule, RuleKind};
use crate::stream::Stream;
use crate::tree::Token;

impl Rule {
    /// Lex `input` into its complete token sequence.
    ///
    /// A Sequence rule is driven child by child; any other rule is driven as
    /// a one-element chain. Each child's match tree is flattened into the
    /// output in order. The first child that fails aborts the call with
    /// [`LexError::FailedMatching`], and input left over after every child
    /// has matched is [`LexError::RemainingInput`]. A successful match does
    /// not by itself guarantee full consumption; only `lex` enforces it. No
    /// partial token sequence is ever returned.
    pub fn lex<'s>(
        &self,
        input: &'s str,
        ignore_whitespace: bool,
    ) -> Result<Vec<Token<'s>>, LexError<'s>> {
        let mut stream = Stream::new(input);
        let mut tokens = Vec::new();

        match &*self.0 {
            RuleKind::Sequence(rules) => {
                for rule in rules {
                    let (next, tree) = rule.try_match(stream, ignore_whitespace)?;
                    stream = next;
                    tree.flatten_into(&mut tokens);
                }
            }
            _ => {
                let (next, tree) = self.try_match(stream, ignore_whitespace)?;
                stream = next;
                tree.flatten_into(&mut tokens);
            }
        }

        if stream.is_empty() {
            Ok(tokens)
        } else {
            Err(LexError::leftover(stream))
        }
    }
}
