//! Byte cursor over a single source line.
//!
//! All grammar decisions are made on ASCII bytes, so every position the
//! cursor stops at is a `char` boundary and slicing the line is safe.

/// Forward-only cursor over one line of text.
///
/// [`Copy`] so a grammar can snapshot a position and rewind.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(src: &'a str) -> Self {
        Cursor { src, pos: 0 }
    }

    /// Byte at the current position, `None` at end of line.
    #[inline]
    pub(crate) fn current(&self) -> Option<u8> {
        self.src.as_bytes().get(self.pos).copied()
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.src.len()
    }

    #[cfg(test)]
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    /// Consume `expected` if it is the current byte.
    pub(crate) fn eat(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume one byte matching `pred`.
    pub(crate) fn eat_if(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        match self.current() {
            Some(b) if pred(b) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    /// Consume `word` if the remaining text starts with it.
    pub(crate) fn eat_str(&mut self, word: &str) -> bool {
        if self.rest().starts_with(word) {
            self.pos += word.len();
            true
        } else {
            false
        }
    }

    /// Consume bytes while `pred` holds and return them.
    ///
    /// `pred` must stop on an ASCII byte or at end of line; see the module
    /// docs.
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
        &self.src[start..self.pos]
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.eat_while(|b| b.is_ascii_whitespace());
    }

    /// Everything from the current position to the end of the line.
    #[inline]
    pub(crate) fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }
}
