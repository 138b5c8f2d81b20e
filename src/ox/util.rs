//! Miscellaneous utility functionality.
//!
//! Specifically, nothing in here is Ox-related, even though
//! it might be useful outside of this crate.
use macro_pub::macro_pub;

/// Creates a simple HashMap from the given key-value expressions.
#[macro_pub]
macro_rules! map {
    ($($key:expr => $value:expr),* $(,)?) => {{
        let mut map = HashMap::new();
        $(map.insert($key, $value);)*
        map
    }}
}

/// Whitespace as the "C" locale's `isspace` sees it.
///
/// Notably this includes the vertical tab, which [`char::is_ascii_whitespace`] does not.
#[inline]
#[must_use]
pub const fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}
