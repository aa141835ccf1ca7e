use std::borrow::Cow;

/// One token produced by lexing: a leaf string from a match tree. Borrowed
/// from the input except for atom concatenations, which are owned.
pub type Token<'s> = Cow<'s, str>;

/// The nested result of a successful match.
///
/// Nesting mirrors the shape of the rule that produced it: a Sequence of
/// three rules yields a three-element `List`. Flattening depth-first, left to
/// right, recovers the token sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchTree<'s> {
    /// A fragment of text actually consumed from the stream.
    Token(Token<'s>),
    /// The ordered results of a composite rule's children.
    List(Vec<MatchTree<'s>>),
}

impl<'s> MatchTree<'s> {
    pub(crate) fn empty() -> MatchTree<'s> {
        MatchTree::List(Vec::new())
    }

    pub(crate) fn leaf(text: &'s str) -> MatchTree<'s> {
        MatchTree::Token(Cow::Borrowed(text))
    }

    /// The ordered leaf tokens of this tree.
    pub fn flatten(self) -> Vec<Token<'s>> {
        let mut tokens = Vec::new();
        self.flatten_into(&mut tokens);
        tokens
    }

    /// Append this tree's leaf tokens, depth-first and left to right.
    pub(crate) fn flatten_into(self, tokens: &mut Vec<Token<'s>>) {
        match self {
            MatchTree::Token(token) => tokens.push(token),
            MatchTree::List(trees) => {
                for tree in trees {
                    tree.flatten_into(tokens);
                }
            }
        }
    }

    /// All leaf tokens concatenated into one string. How Atom builds its token.
    pub(crate) fn concat(&self) -> String {
        let mut text = String::new();
        self.concat_into(&mut text);
        text
    }

    fn concat_into(&self, text: &mut String) {
        match self {
            MatchTree::Token(token) => text.push_str(token),
            MatchTree::List(trees) => {
                for tree in trees {
                    tree.concat_into(text);
                }
            }
        }
    }
}
