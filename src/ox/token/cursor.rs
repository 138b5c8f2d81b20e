//! A position/line/column cursor over an immutable source buffer.
//!
//! The cursor never reads out of bounds: looking or stepping past the end
//! of input yields [`None`] and leaves the cursor untouched.

use crate::ox::types::Location;

/// Scanning state over a borrowed source.
///
/// `position` is a byte offset and only ever moves forward, one whole
/// character at a time, so it always sits on a `char` boundary.
#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    /// The complete source text.
    source: &'src str,
    /// Byte offset of the next unconsumed character.
    position: usize,
    /// Current line, 1-indexed.
    line: usize,
    /// Current column in characters, 1-indexed.
    column: usize,
}

impl<'src> Cursor<'src> {
    /// Places a fresh cursor on the first character of `source`.
    #[inline]
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Cursor {
            source,
            position: 0,
            line: Location::START.line,
            column: Location::START.column,
        }
    }

    /// The character `offset` characters ahead, without consuming anything.
    #[inline]
    #[must_use]
    pub fn peek(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    /// Whether the character `offset` ahead exists and satisfies `test`.
    #[inline]
    pub fn peek_matches<F: FnOnce(char) -> bool>(&self, offset: usize, test: F) -> bool {
        self.peek(offset).is_some_and(test)
    }

    /// Consumes and returns the current character, updating line and column.
    #[inline]
    #[expect(
        clippy::arithmetic_side_effects,
        reason = "bounded by the source length, which already fits into memory."
    )]
    pub fn advance(&mut self) -> Option<char> {
        let ch = self.peek(0)?;
        self.position += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    /// Consumes the current character only if it satisfies `test`.
    #[inline]
    pub fn advance_if<F: FnOnce(char) -> bool>(&mut self, test: F) -> Option<char> {
        if self.peek_matches(0, test) {
            self.advance()
        } else {
            None
        }
    }

    /// Consumes the current character only if it is exactly `expected`.
    #[inline]
    pub fn advance_is(&mut self, expected: char) -> bool {
        self.advance_if(|ch| ch == expected).is_some()
    }

    /// Consumes characters for as long as they satisfy `test`.
    /// Returns whether at least one character was consumed.
    #[inline]
    pub fn advance_while<F: FnMut(char) -> bool>(&mut self, mut test: F) -> bool {
        let mut consumed = false;
        while self.advance_if(&mut test).is_some() {
            consumed = true;
        }
        consumed
    }

    /// Whether the whole source has been consumed.
    #[inline]
    #[must_use]
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Byte offset of the next unconsumed character.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Location of the next unconsumed character.
    #[inline]
    #[must_use]
    pub const fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
        }
    }

    /// The verbatim source text from the byte offset `start` up to the cursor.
    #[inline]
    #[must_use]
    pub fn slice_from(&self, start: usize) -> &'src str {
        self.source.get(start..self.position).unwrap_or_default()
    }

    /// Everything not yet consumed.
    fn rest(&self) -> &'src str {
        self.source.get(self.position..).unwrap_or_default()
    }
}

#[cfg(test)]
mod test {
    use super::Cursor;
    use crate::ox::types::Location;

    #[test]
    fn peek_never_reads_past_the_end() {
        let cursor = Cursor::new("ab");
        assert_eq!(cursor.peek(0), Some('a'));
        assert_eq!(cursor.peek(1), Some('b'));
        assert_eq!(cursor.peek(2), None);
        assert_eq!(cursor.peek(100), None);
    }

    #[test]
    fn advance_tracks_lines_and_columns() {
        let mut cursor = Cursor::new("a\nbc");
        assert_eq!(cursor.advance(), Some('a'));
        assert_eq!(cursor.location(), Location { line: 1, column: 2 });
        assert_eq!(cursor.advance(), Some('\n'));
        assert_eq!(cursor.location(), Location { line: 2, column: 1 });
        assert_eq!(cursor.advance(), Some('b'));
        assert_eq!(cursor.location(), Location { line: 2, column: 2 });
    }

    #[test]
    fn advance_at_end_leaves_state_unchanged() {
        let mut cursor = Cursor::new("x");
        assert_eq!(cursor.advance(), Some('x'));
        let before = cursor.clone();
        assert_eq!(cursor.advance(), None);
        assert!(cursor.is_at_end());
        assert_eq!(cursor.position(), before.position());
        assert_eq!(cursor.location(), before.location());
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let mut cursor = Cursor::new("\u{e9}!");
        assert_eq!(cursor.advance(), Some('\u{e9}'));
        assert_eq!(cursor.position(), 2);
        assert_eq!(cursor.location(), Location { line: 1, column: 2 });
        assert_eq!(cursor.slice_from(0), "\u{e9}");
    }

    #[test]
    fn conditional_advances() {
        let mut cursor = Cursor::new("aab");
        assert!(!cursor.advance_is('b'));
        assert!(cursor.advance_while(|ch| ch == 'a'));
        assert!(!cursor.advance_while(|ch| ch == 'a'));
        assert!(cursor.advance_is('b'));
        assert_eq!(cursor.slice_from(0), "aab");
    }
}
