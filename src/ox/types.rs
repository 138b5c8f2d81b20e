//! Types used through multiple phases of the Ox toolchain, mostly
//! in an auxiliary fashion to support (better) error reporting.

use core::fmt::{Display, Formatter};

/// A Location simply consists of a line and column position.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
#[expect(
    clippy::exhaustive_structs,
    reason = "Locations are always line+col - if we ever switch to offset-based locations, this is a breaking change."
)]
pub struct Location {
    /// Line of the location, 1-indexed.
    pub line: usize,
    /// Column of the location, 1-indexed and counted in characters.
    pub column: usize,
}

impl Location {
    /// The first character of any source.
    pub const START: Location = Location { line: 1, column: 1 };
}

impl Display for Location {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Source Spans define locations of elements in the source code,
/// given both their start and end positions as [`Locations`](Location).
/// The start is inclusive, the end points just past the last character.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive] // Filename might be added.
pub struct Span {
    /// Start of the Span
    pub start: Location,
    /// End of the Span
    pub end: Location,
}

impl Span {
    /// Construct a source span from given start and end positions
    #[inline]
    #[must_use]
    pub const fn from(start: Location, end: Location) -> Self {
        Span { start, end }
    }
}

impl Display for Span {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        if self.start == self.end {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}
