//! The human-readable token dump, one `[line:column] KIND 'text'` line per token.
//!
//! This is meant for inspection while developing the language, and makes
//! no promises of stability.
use std::io::{Result as IOResult, Write};

use crate::ox::token::tokens::Token;

/// Writes every token on its own line, in the order given.
#[inline]
pub fn write_tokens<'tok, I, W>(tokens: I, out: &mut W) -> IOResult<()>
where
    I: IntoIterator<Item = &'tok Token>,
    W: Write + ?Sized,
{
    for token in tokens {
        writeln!(out, "{token}")?;
    }
    out.flush()
}

/// Renders the dump into a String.
#[inline]
#[must_use]
pub fn render<'tok, I: IntoIterator<Item = &'tok Token>>(tokens: I) -> String {
    tokens
        .into_iter()
        .map(|token| format!("{token}\n"))
        .collect()
}
