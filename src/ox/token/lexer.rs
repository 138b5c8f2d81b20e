//! Encapsulates all behaviour necessary to properly lex Ox code.
//!
//! Lexing never fails: malformed input turns into [`TokenKind::Invalid`] tokens
//! and scanning carries on to the end of input, which is always marked by exactly
//! one [`TokenKind::EndOfFile`] token. Anything worth telling the user about is
//! additionally recorded as a [`LexingError`] on the side.
//!
//! ```rust,ignore
//! let tokens = lexer::tokenize("int x += 0x1F; // done");
//! ```
#![expect(
    clippy::min_ident_chars,
    reason = "short names do not decrease readability here."
)]

use core::iter::FusedIterator;

use thiserror::Error;
use tracing::{debug, trace};

use crate::ox::token::cursor::Cursor;
use crate::ox::token::tokens::{Token, TokenKind, KEYWORDS};
use crate::ox::types::{Location, Span};
use crate::ox::util::is_space;

/// Problems noticed during lexing.
///
/// None of these stop the lexer. Errors accompany an [`TokenKind::Invalid`]
/// token, while warnings describe input that was accepted as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[expect(
    clippy::exhaustive_enums,
    reason = "callers decide per variant whether it is fatal, so a new one is a breaking change."
)]
pub enum LexingError {
    /// Unknown symbol in the source code
    #[error("{0}: unknown symbol {1:?}")]
    UnknownSymbol(Span, char),
    /// A string was started but not terminated until the end of input/file
    #[error("{0}: unterminated string literal")]
    UnterminatedString(Span),
    /// A block comment was started but not terminated until the end of input/file
    #[error("{0}: unterminated block comment")]
    UnterminatedComment(Span),
    /// An exponent marker without any digits after it, like `1e` or `2e+`
    #[error("{0}: exponent has no digits")]
    EmptyExponent(Span),
    /// A `0x` or `0b` prefix without any digits after it
    #[error("{0}: radix prefix has no digits")]
    MissingRadixDigits(Span),
}

impl LexingError {
    /// Whether this only describes questionable, yet accepted, input.
    #[inline]
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        match *self {
            LexingError::UnknownSymbol(..) | LexingError::UnterminatedString(_) => false,
            LexingError::UnterminatedComment(_)
            | LexingError::EmptyExponent(_)
            | LexingError::MissingRadixDigits(_) => true,
        }
    }

    /// Where in the source this was noticed.
    #[inline]
    #[must_use]
    pub const fn span(&self) -> Span {
        match *self {
            LexingError::UnknownSymbol(span, _)
            | LexingError::UnterminatedString(span)
            | LexingError::UnterminatedComment(span)
            | LexingError::EmptyExponent(span)
            | LexingError::MissingRadixDigits(span) => span,
        }
    }
}

/// Tokenizes the given source code of Ox into a [Vec] of [`Tokens`](Token),
/// the last of which is always the single [`TokenKind::EndOfFile`] token.
#[inline]
pub fn tokenize<S: AsRef<str>>(source: S) -> Vec<Token> {
    tokenize_with_diagnostics(source).0
}

/// Like [tokenize], but also hands back every [`LexingError`] noticed on the way.
#[inline]
pub fn tokenize_with_diagnostics<S: AsRef<str>>(source: S) -> (Vec<Token>, Vec<LexingError>) {
    let mut lexer = Lexer::new(source.as_ref());
    let tokens = lexer.by_ref().collect::<Vec<_>>();
    debug!(
        target: "oxidec::lexer",
        tokens = tokens.len(),
        diagnostics = lexer.diagnostics.len(),
        "tokenized source"
    );
    (tokens, lexer.into_diagnostics())
}

/// A pull-based lexer over a single source.
///
/// As an [Iterator], it yields tokens in source order, ending with exactly one
/// [`TokenKind::EndOfFile`] token, after which it stays exhausted. Scanning the
/// same source again requires a fresh lexer.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    /// Scanning position.
    cursor: Cursor<'src>,
    /// Everything noticed so far.
    diagnostics: Vec<LexingError>,
    /// Whether the end-of-file token was handed out already.
    finished: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a lexer positioned at the very start of `source`.
    #[inline]
    #[must_use]
    pub const fn new(source: &'src str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            diagnostics: Vec::new(),
            finished: false,
        }
    }

    /// The diagnostics recorded by the tokens scanned so far.
    #[inline]
    #[must_use]
    pub fn diagnostics(&self) -> &[LexingError] {
        &self.diagnostics
    }

    /// Gives up the lexer in favour of its diagnostics.
    #[inline]
    #[must_use]
    pub fn into_diagnostics(self) -> Vec<LexingError> {
        self.diagnostics
    }

    /// Lexes the next token, skipping any whitespace and comments before it.
    ///
    /// Once the input is exhausted, every call returns an end-of-file token.
    #[inline]
    pub fn next_token(&mut self) -> Token {
        self.skip_insignificant();

        let start = self.cursor.position();
        let location = self.cursor.location();
        let kind = match self.cursor.peek(0) {
            None => TokenKind::EndOfFile,
            Some(c) if c.is_ascii_alphabetic() => self.scan_identifier_or_keyword(start),
            Some(c) if c.is_ascii_digit() => self.scan_number(location),
            Some('"' | '\'') => self.scan_string(location),
            Some(_) => self.scan_operator_or_punctuation(location),
        };

        let token = Token {
            kind,
            text: self.cursor.slice_from(start).to_owned(),
            location,
        };
        trace!(target: "oxidec::lexer", %token, "scanned token");
        token
    }

    /// Skips whitespace, line comments and block comments, in any order and amount.
    fn skip_insignificant(&mut self) {
        loop {
            if self.cursor.advance_while(is_space) {
                continue;
            }
            match (self.cursor.peek(0), self.cursor.peek(1)) {
                (Some('/'), Some('/')) => self.skip_line_comment(),
                (Some('/'), Some('*')) => self.skip_block_comment(),
                _ => break,
            }
        }
    }

    /// Skips a `//` comment, leaving the terminating newline in place.
    fn skip_line_comment(&mut self) {
        self.cursor.advance_while(|c| c != '\n');
    }

    /// Skips a `/* */` comment. These do not nest.
    ///
    /// Reaching the end of input first is accepted, but noted as a warning.
    fn skip_block_comment(&mut self) {
        let start = self.cursor.location();
        self.cursor.advance();
        self.cursor.advance();
        loop {
            if self.cursor.peek(0) == Some('*') && self.cursor.peek(1) == Some('/') {
                self.cursor.advance();
                self.cursor.advance();
                return;
            }
            if self.cursor.advance().is_none() {
                self.diagnostics.push(LexingError::UnterminatedComment(Span::from(
                    start,
                    self.cursor.location(),
                )));
                return;
            }
        }
    }

    /// Scans an identifier, then checks whether it is actually a reserved word.
    fn scan_identifier_or_keyword(&mut self, start: usize) -> TokenKind {
        self.cursor.advance_while(is_alpha_num);
        KEYWORDS
            .get(self.cursor.slice_from(start))
            .copied()
            .unwrap_or(TokenKind::Identifier)
    }

    /// Scans hexadecimal (`0x1F`), binary (`0b101`) and decimal integers,
    /// as well as decimal numbers with a fraction (`3.14`) and/or an exponent (`2e-3`).
    fn scan_number(&mut self, start: Location) -> TokenKind {
        let radix_digits: Option<fn(char) -> bool> = match (self.cursor.peek(0), self.cursor.peek(1)) {
            (Some('0'), Some('x')) => Some(is_hex_digit),
            (Some('0'), Some('b')) => Some(is_bin_digit),
            _ => None,
        };
        if let Some(is_radix_digit) = radix_digits {
            self.cursor.advance();
            self.cursor.advance();
            if !self.cursor.advance_while(is_radix_digit) {
                self.record(start, LexingError::MissingRadixDigits);
            }
            return TokenKind::IntegerLiteral;
        }

        let mut kind = TokenKind::IntegerLiteral;
        self.cursor.advance_while(is_digit);

        if self.cursor.peek(0) == Some('.') && self.cursor.peek_matches(1, is_digit) {
            kind = TokenKind::FloatLiteral;
            self.cursor.advance();
            self.cursor.advance_while(is_digit);
        }

        if self.cursor.advance_is('e') {
            kind = TokenKind::FloatLiteral;
            let _sign: Option<char> = self.cursor.advance_if(|c| c == '+' || c == '-');
            if !self.cursor.advance_while(is_digit) {
                self.record(start, LexingError::EmptyExponent);
            }
        }

        kind
    }

    /// Scans a string delimited by either single or double quotes.
    ///
    /// A backslash always takes the character after it along, whatever it is,
    /// so an escaped quote does not end the string. Escapes are not resolved here.
    fn scan_string(&mut self, start: Location) -> TokenKind {
        let opening = self.cursor.advance();
        loop {
            match self.cursor.advance() {
                None => {
                    self.record(start, LexingError::UnterminatedString);
                    break TokenKind::Invalid;
                }
                Some('\\') => {
                    let _escaped: Option<char> = self.cursor.advance();
                }
                closing if closing == opening => break TokenKind::StringLiteral,
                Some(_) => {}
            }
        }
    }

    /// Scans punctuation and operators, always picking the longest operator
    /// spelling that matches. Unknown characters become a single invalid token.
    fn scan_operator_or_punctuation(&mut self, start: Location) -> TokenKind {
        let Some(c) = self.cursor.advance() else {
            return TokenKind::EndOfFile;
        };
        match c {
            // Punctuation
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,

            // Arith Operators
            '+' if self.cursor.advance_is('+') => TokenKind::Increment,
            '+' if self.cursor.advance_is('=') => TokenKind::PlusAssign,
            '+' => TokenKind::Plus,
            '-' if self.cursor.advance_is('-') => TokenKind::Decrement,
            '-' if self.cursor.advance_is('=') => TokenKind::MinusAssign,
            '-' => TokenKind::Minus,
            '*' if self.cursor.advance_is('=') => TokenKind::MultiplyAssign,
            '*' => TokenKind::Multiply,
            '/' if self.cursor.advance_is('=') => TokenKind::DivideAssign,
            '/' => TokenKind::Divide,
            '%' if self.cursor.advance_is('=') => TokenKind::ModuloAssign,
            '%' => TokenKind::Modulo,

            // Comparison and Logic
            '=' if self.cursor.advance_is('=') => TokenKind::Equal,
            '=' => TokenKind::Assign,
            '!' if self.cursor.advance_is('=') => TokenKind::NotEqual,
            '!' => TokenKind::LogicalNot,
            '<' if self.cursor.advance_is('=') => TokenKind::LessEqual,
            '<' => TokenKind::Less,
            '>' if self.cursor.advance_is('=') => TokenKind::GreaterEqual,
            '>' => TokenKind::Greater,
            '&' if self.cursor.advance_is('&') => TokenKind::LogicalAnd,
            '&' => TokenKind::BitwiseAnd,
            '|' if self.cursor.advance_is('|') => TokenKind::LogicalOr,
            '|' => TokenKind::BitwiseOr,

            // ERROR
            unknown => {
                self.diagnostics.push(LexingError::UnknownSymbol(
                    Span::from(start, self.cursor.location()),
                    unknown,
                ));
                TokenKind::Invalid
            }
        }
    }

    /// Records a diagnostic spanning from `start` to the current position.
    fn record(&mut self, start: Location, diagnostic: fn(Span) -> LexingError) {
        self.diagnostics
            .push(diagnostic(Span::from(start, self.cursor.location())));
    }
}

#[expect(
    clippy::missing_trait_methods,
    reason = "the provided adaptors work through next just fine."
)]
impl Iterator for Lexer<'_> {
    type Item = Token;

    #[inline]
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        let token = self.next_token();
        self.finished = token.kind == TokenKind::EndOfFile;
        Some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Is the character an ASCII digit?
#[inline]
fn is_digit(c: char) -> bool {
    c.is_ascii_digit()
}

/// Is the character a hexadecimal ASCII digit?
#[inline]
fn is_hex_digit(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// Is the character a binary digit?
#[inline]
fn is_bin_digit(c: char) -> bool {
    c == '0' || c == '1'
}

/// Can the character continue an identifier?
#[inline]
fn is_alpha_num(c: char) -> bool {
    c.is_ascii_alphanumeric() || (c == '_')
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::{tokenize, tokenize_with_diagnostics, Lexer, LexingError};
    use crate::ox::token::tokens::Keyword::{If, Int, Public, Static, Void};
    use crate::ox::token::tokens::TokenKind::{self, *};
    use crate::ox::types::{Location, Span};

    fn tokenize_kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source).into_iter().map(|token| token.kind).collect()
    }

    fn tokenize_texts(source: &str) -> Vec<(TokenKind, String)> {
        tokenize(source)
            .into_iter()
            .map(|token| (token.kind, token.text))
            .collect()
    }

    fn diagnostics(source: &str) -> Vec<LexingError> {
        tokenize_with_diagnostics(source).1
    }

    const fn at(line: usize, column: usize) -> Location {
        Location { line, column }
    }

    #[test]
    fn simple_tokenizations() {
        assert_eq!(
            tokenize_kinds("int foo = 20;"),
            vec![Keyword(Int), Identifier, Assign, IntegerLiteral, Semicolon, EndOfFile]
        );
    }

    #[test]
    fn empty_input_is_just_end_of_file() {
        let tokens = tokenize("");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, EndOfFile);
        assert_eq!(tokens[0].text, "");
        assert_eq!(tokens[0].location, at(1, 1));
    }

    #[test]
    fn end_of_file_carries_final_position() {
        let tokens = tokenize("a\n  ");
        assert_eq!(tokens.last().map(|token| token.location), Some(at(2, 3)));
    }

    #[test]
    fn maximal_munch() {
        assert_eq!(tokenize_kinds("+="), vec![PlusAssign, EndOfFile]);
        assert_eq!(tokenize_kinds("++"), vec![Increment, EndOfFile]);
        assert_eq!(tokenize_kinds("+++"), vec![Increment, Plus, EndOfFile]);
        assert_eq!(tokenize_kinds("+ +"), vec![Plus, Plus, EndOfFile]);
        assert_eq!(tokenize_kinds("-- -= -"), vec![Decrement, MinusAssign, Minus, EndOfFile]);
        assert_eq!(tokenize_kinds("==="), vec![Equal, Assign, EndOfFile]);
        assert_eq!(tokenize_kinds("&&&"), vec![LogicalAnd, BitwiseAnd, EndOfFile]);
        assert_eq!(tokenize_kinds("||="), vec![LogicalOr, Assign, EndOfFile]);
    }

    #[test]
    fn every_operator_and_punctuation() {
        assert_eq!(
            tokenize_kinds("= == != < <= > >= + - * / % && || ! & | ++ -- += -= *= /= %="),
            vec![
                Assign, Equal, NotEqual, Less, LessEqual, Greater, GreaterEqual, Plus, Minus,
                Multiply, Divide, Modulo, LogicalAnd, LogicalOr, LogicalNot, BitwiseAnd,
                BitwiseOr, Increment, Decrement, PlusAssign, MinusAssign, MultiplyAssign,
                DivideAssign, ModuloAssign, EndOfFile,
            ]
        );
        assert_eq!(
            tokenize_kinds("(){}[];,.?:"),
            vec![
                LeftParen, RightParen, LeftBrace, RightBrace, LeftBracket, RightBracket,
                Semicolon, Comma, Dot, Question, Colon, EndOfFile,
            ]
        );
    }

    #[test]
    fn keywords_versus_identifiers() {
        assert_eq!(tokenize_kinds("if"), vec![Keyword(If), EndOfFile]);
        assert_eq!(
            tokenize_texts("ifx"),
            vec![(Identifier, "ifx".to_owned()), (EndOfFile, String::new())]
        );
        assert_eq!(tokenize_kinds("If IF"), vec![Identifier, Identifier, EndOfFile]);
        assert_eq!(tokenize_kinds("true false"), vec![BooleanLiteral, BooleanLiteral, EndOfFile]);
        assert_eq!(
            tokenize_kinds("public static void"),
            vec![Keyword(Public), Keyword(Static), Keyword(Void), EndOfFile]
        );
    }

    #[test]
    fn identifiers_take_digits_and_underscores_but_do_not_start_with_them() {
        assert_eq!(
            tokenize_texts("a_1b _c"),
            vec![
                (Identifier, "a_1b".to_owned()),
                (Invalid, "_".to_owned()),
                (Identifier, "c".to_owned()),
                (EndOfFile, String::new()),
            ]
        );
    }

    #[test]
    fn numeric_forms() {
        assert_eq!(tokenize_kinds("0x1A"), vec![IntegerLiteral, EndOfFile]);
        assert_eq!(tokenize_kinds("0b101"), vec![IntegerLiteral, EndOfFile]);
        assert_eq!(tokenize_kinds("3.14"), vec![FloatLiteral, EndOfFile]);
        assert_eq!(tokenize_kinds("2e10"), vec![FloatLiteral, EndOfFile]);
        assert_eq!(tokenize_kinds("42"), vec![IntegerLiteral, EndOfFile]);
        assert_eq!(
            tokenize_texts("1.5e-3"),
            vec![(FloatLiteral, "1.5e-3".to_owned()), (EndOfFile, String::new())]
        );
    }

    #[test]
    fn radix_and_exponent_markers_are_lowercase_only() {
        assert_eq!(
            tokenize_texts("0X1A 0B1 1E5 2.5E3"),
            vec![
                (IntegerLiteral, "0".to_owned()),
                (Identifier, "X1A".to_owned()),
                (IntegerLiteral, "0".to_owned()),
                (Identifier, "B1".to_owned()),
                (IntegerLiteral, "1".to_owned()),
                (Identifier, "E5".to_owned()),
                (FloatLiteral, "2.5".to_owned()),
                (Identifier, "E3".to_owned()),
                (EndOfFile, String::new()),
            ]
        );
        assert!(diagnostics("0X 1E").is_empty());
    }

    #[test]
    fn binary_literals_stop_at_the_first_other_digit() {
        assert_eq!(
            tokenize_texts("0b1012"),
            vec![
                (IntegerLiteral, "0b101".to_owned()),
                (IntegerLiteral, "2".to_owned()),
                (EndOfFile, String::new()),
            ]
        );
    }

    #[test]
    fn dot_without_digit_is_not_a_fraction() {
        assert_eq!(
            tokenize_texts("1.x"),
            vec![
                (IntegerLiteral, "1".to_owned()),
                (Dot, ".".to_owned()),
                (Identifier, "x".to_owned()),
                (EndOfFile, String::new()),
            ]
        );
    }

    #[test]
    fn bare_exponent_is_accepted_with_a_warning() {
        assert_eq!(
            tokenize_texts("1e+"),
            vec![(FloatLiteral, "1e+".to_owned()), (EndOfFile, String::new())]
        );
        assert_eq!(
            diagnostics("1e"),
            vec![LexingError::EmptyExponent(Span::from(at(1, 1), at(1, 3)))]
        );
    }

    #[test]
    fn radix_prefix_without_digits_is_accepted_with_a_warning() {
        assert_eq!(
            tokenize_texts("0xg"),
            vec![
                (IntegerLiteral, "0x".to_owned()),
                (Identifier, "g".to_owned()),
                (EndOfFile, String::new()),
            ]
        );
        let found = diagnostics("0b");
        assert_eq!(found, vec![LexingError::MissingRadixDigits(Span::from(at(1, 1), at(1, 3)))]);
        assert!(found[0].is_warning());
    }

    #[test]
    fn string_literal_keeps_its_escapes_verbatim() {
        let source = r#""a\"b""#;
        assert_eq!(
            tokenize_texts(source),
            vec![(StringLiteral, source.to_owned()), (EndOfFile, String::new())]
        );
    }

    #[test]
    fn both_quote_styles_close_only_themselves() {
        assert_eq!(
            tokenize_texts(r#"'say "hi"' "it's""#),
            vec![
                (StringLiteral, r#"'say "hi"'"#.to_owned()),
                (StringLiteral, r#""it's""#.to_owned()),
                (EndOfFile, String::new()),
            ]
        );
    }

    #[test]
    fn unterminated_string() {
        let (tokens, found) = tokenize_with_diagnostics("\"abc");
        assert_eq!(
            tokens.iter().map(|token| (token.kind, token.text.as_str())).collect::<Vec<_>>(),
            vec![(Invalid, "\"abc"), (EndOfFile, "")]
        );
        assert_eq!(found, vec![LexingError::UnterminatedString(Span::from(at(1, 1), at(1, 5)))]);
        assert!(!found[0].is_warning());
    }

    #[test]
    fn trailing_backslash_leaves_string_unterminated() {
        assert_eq!(
            tokenize_texts("'ab\\"),
            vec![(Invalid, "'ab\\".to_owned()), (EndOfFile, String::new())]
        );
    }

    #[test]
    fn strings_may_span_lines() {
        let tokens = tokenize("\"a\nb\" c");
        assert_eq!(tokens[0].kind, StringLiteral);
        assert_eq!(tokens[1].location, at(2, 4));
    }

    #[test]
    fn unknown_symbols_become_single_invalid_tokens() {
        let (tokens, found) = tokenize_with_diagnostics("a @#\u{e9} b");
        assert_eq!(
            tokens.iter().map(|token| (token.kind, token.text.as_str())).collect::<Vec<_>>(),
            vec![
                (Identifier, "a"),
                (Invalid, "@"),
                (Invalid, "#"),
                (Invalid, "\u{e9}"),
                (Identifier, "b"),
                (EndOfFile, ""),
            ]
        );
        assert_eq!(
            found,
            vec![
                LexingError::UnknownSymbol(Span::from(at(1, 3), at(1, 4)), '@'),
                LexingError::UnknownSymbol(Span::from(at(1, 4), at(1, 5)), '#'),
                LexingError::UnknownSymbol(Span::from(at(1, 5), at(1, 6)), '\u{e9}'),
            ]
        );
        assert_eq!(tokens[4].location, at(1, 7));
    }

    #[test]
    fn position_tracking() {
        let tokens = tokenize("a\nbb");
        assert_eq!(tokens[1].text, "bb");
        assert_eq!((tokens[1].line(), tokens[1].column()), (2, 1));
    }

    #[test]
    fn line_comment_produces_nothing() {
        assert_eq!(
            tokenize_texts("x // y\nz"),
            vec![
                (Identifier, "x".to_owned()),
                (Identifier, "z".to_owned()),
                (EndOfFile, String::new()),
            ]
        );
        assert_eq!(tokenize_kinds("// only a comment"), vec![EndOfFile]);
    }

    #[test]
    fn block_comments_and_whitespace_interleave() {
        assert_eq!(
            tokenize_kinds(" /* a */ /**/\t// b\n/* c\n d */ x /* e */ / y"),
            vec![Identifier, Divide, Identifier, EndOfFile]
        );
        assert_eq!(tokenize("/* a\n */ x")[0].location, at(2, 5));
    }

    #[test]
    fn block_comments_do_not_nest() {
        assert_eq!(tokenize_kinds("/* /* */ x */"), vec![Identifier, Multiply, Divide, EndOfFile]);
    }

    #[test]
    fn unterminated_block_comment_ends_silently_at_eof() {
        let (tokens, found) = tokenize_with_diagnostics("x /* never closed");
        assert_eq!(
            tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
            vec![Identifier, EndOfFile]
        );
        assert_eq!(found, vec![LexingError::UnterminatedComment(Span::from(at(1, 3), at(1, 18)))]);
        assert!(found[0].is_warning());
    }

    #[test]
    fn vertical_tab_and_form_feed_are_whitespace() {
        assert_eq!(tokenize_kinds("a\u{0B}b\u{0C}c\r\n"), vec![Identifier, Identifier, Identifier, EndOfFile]);
    }

    #[test]
    fn lexer_yields_end_of_file_exactly_once() {
        let mut lexer = Lexer::new("x @");
        assert_eq!(lexer.next().map(|token| token.kind), Some(Identifier));
        assert!(lexer.diagnostics().is_empty());
        assert_eq!(lexer.next().map(|token| token.kind), Some(Invalid));
        assert_eq!(lexer.diagnostics().len(), 1);
        assert_eq!(lexer.next().map(|token| token.kind), Some(EndOfFile));
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next(), None);
        assert_eq!(lexer.next_token().kind, EndOfFile);
    }

    mod properties {
        use proptest::prelude::*;

        use super::super::tokenize;
        use crate::ox::token::tokens::TokenKind;
        use crate::ox::util::is_space;

        proptest! {
            #[test]
            fn always_terminates_with_a_single_end_of_file(source in any::<String>()) {
                let tokens = tokenize(&source);
                prop_assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EndOfFile));
                prop_assert_eq!(
                    tokens.iter().filter(|token| token.kind == TokenKind::EndOfFile).count(),
                    1
                );
            }

            #[test]
            fn every_token_but_the_last_consumes_input(source in any::<String>()) {
                let tokens = tokenize(&source);
                for token in &tokens[..tokens.len() - 1] {
                    prop_assert!(!token.text.is_empty(), "empty token {:?}", token);
                }
                for pair in tokens.windows(2) {
                    prop_assert!(pair[0].location < pair[1].location);
                }
            }

            #[test]
            fn tokens_cover_everything_but_whitespace(
                source in "(?:[a-zA-Z0-9_ \t\n+*%=!<>&|(){}\\[\\];,.?:@#$-]|/[a-z0-9 =]|\"[a-z0-9.']*\"|'[a-z0-9.\"]*'){0,32}"
            ) {
                let tokens = tokenize(&source);
                let covered = tokens.iter().map(|token| token.text.as_str()).collect::<String>();
                let expected = source.chars().filter(|&c| !is_space(c)).collect::<String>();
                prop_assert_eq!(covered, expected);
            }

            #[test]
            fn token_text_sits_at_its_location(source in "[a-z0-9 \n+=\"'/*]{0,48}") {
                let lines = source.split('\n').collect::<Vec<_>>();
                for token in tokenize(&source) {
                    let Some(line) = lines.get(token.location.line - 1) else {
                        return Err(TestCaseError::fail(format!("no line for {token:?}")));
                    };
                    let rest = line.chars().skip(token.location.column - 1).collect::<String>();
                    let first_line = token.text.split('\n').next().unwrap_or_default();
                    prop_assert!(rest.starts_with(first_line), "{:?} not at {:?}", token, rest);
                }
            }
        }
    }
}
