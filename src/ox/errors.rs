//! Errors that can occur during the lifetime of the tool.
use std::io::Error as IOError;
use std::path::PathBuf;
use std::process::ExitCode;

use itertools::Itertools;
use thiserror::Error;

use crate::ox::token::lexer::LexingError;

/// An error that occurred inside the Ox engine.
/// This enum will be extended bit by bit as new phases
/// get added.
///
/// To support the [`std::process::Termination`] trait, a `From<EngineError> for ExitCode`
/// implementation is provided, using the exit codes of the
/// [`<sysexits.h>`](https://man.freebsd.org/cgi/man.cgi?query=sysexits&apropos=0&sektion=0&manpath=FreeBSD+4.3-RELEASE&format=html)
/// header.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// An error in how the tool is called.
    #[error("Usage: {0}")]
    UsageError(String),
    /// Errors that happened when trying to load the file
    /// or read the REPL line.
    #[error("Error reading source file {}: {source}", .path.display())]
    FileError {
        /// The file that could not be read; empty for standard input.
        path: PathBuf,
        /// What went wrong.
        source: IOError,
    },
    /// Errors that happened while writing out results.
    #[error("Error writing output: {0}")]
    OutputError(#[source] IOError),
    /// Errors that happened during the lexing phase.
    #[error("Errors when lexing:\n{}", .0.iter().join("\n"))]
    LexingErrors(Vec<LexingError>),
}

impl EngineError {
    /// Turns the error into a String that can be printed to standard error.
    #[inline]
    #[must_use]
    pub fn display_error(&self) -> String {
        self.to_string()
    }

    /// Wraps a failure to read `path`.
    #[inline]
    pub fn reading<P: Into<PathBuf>>(path: P) -> impl FnOnce(IOError) -> EngineError {
        let path = path.into();
        move |source| EngineError::FileError { path, source }
    }
}

impl From<EngineError> for ExitCode {
    #[inline]
    fn from(value: EngineError) -> Self {
        ExitCode::from(match value {
            EngineError::UsageError(_) => 64,     // EX_USAGE
            EngineError::LexingErrors(_) => 65,   // EX_DATAERR
            EngineError::FileError { .. } => 66,  // EX_NOINPUT
            EngineError::OutputError(_) => 74,    // EX_IOERR
        })
    }
}

// Continuation helpers for the REPL

/// Whether an error occurred because the input was too short.
/// Such errors can be recoverable by allowing further input on the REPL.
pub trait UnterminatedError {
    /// Was this error caused by sudden end of input?
    fn is_unterminated(&self) -> bool;
}

impl UnterminatedError for EngineError {
    #[inline]
    fn is_unterminated(&self) -> bool {
        if let EngineError::LexingErrors(ref errs) = *self {
            errs.is_unterminated()
        } else {
            false
        }
    }
}

impl UnterminatedError for LexingError {
    #[inline]
    fn is_unterminated(&self) -> bool {
        match *self {
            LexingError::UnknownSymbol(..)
            | LexingError::EmptyExponent(_)
            | LexingError::MissingRadixDigits(_) => false,
            LexingError::UnterminatedString(_) | LexingError::UnterminatedComment(_) => true,
        }
    }
}

impl<T: UnterminatedError> UnterminatedError for [T] {
    #[inline]
    fn is_unterminated(&self) -> bool {
        self.iter().any(UnterminatedError::is_unterminated)
    }
}
