/// An immutable view of the remaining, unconsumed input text.
///
/// Matching never mutates a `Stream`. Every successful match returns a *new*
/// stream advanced past the consumed text, and the original stays valid, so
/// backtracking is just discarding the new value, and the same rule tree can
/// be matched against any number of streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stream<'s> {
    source: &'s str,
    offset: usize,
}

impl<'s> Stream<'s> {
    pub fn new(source: &'s str) -> Stream<'s> {
        Stream { source, offset: 0 }
    }

    /// The unconsumed suffix of the input.
    pub fn remaining(&self) -> &'s str {
        &self.source[self.offset..]
    }

    /// Byte offset from the beginning of the input.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn is_empty(&self) -> bool {
        self.offset == self.source.len()
    }

    /// A stream advanced past the next `len` bytes, plus the consumed text.
    pub(crate) fn advance(self, len: usize) -> (Stream<'s>, &'s str) {
        let consumed = &self.source[self.offset..self.offset + len];
        let stream = Stream {
            source: self.source,
            offset: self.offset + len,
        };
        (stream, consumed)
    }

    /// A stream with leading whitespace stripped.
    pub(crate) fn trim_leading_whitespace(self) -> Stream<'s> {
        let trimmed = self.remaining().trim_start();
        self.advance(self.remaining().len() - trimmed.len()).0
    }
}
