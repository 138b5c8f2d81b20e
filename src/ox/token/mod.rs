//! This is the Lexing or Tokenization module, split into submodules.
//!
//! - [cursor] walks the source text, keeping track of line and column.
//! - [tokens] specifies the data types making up the tokens of the Ox language.
//! - [lexer] contains the code for tokenizing source code, alongside with the
//!   diagnostics that can be noticed during this phase.
//! - [dump] renders tokens for inspection.
pub mod cursor;
pub mod dump;
pub mod lexer;
pub mod tokens;
