//! Data types representing tokens available in the Ox language.
use core::fmt::{Display, Formatter};
use std::collections::HashMap;
use std::sync::LazyLock;

use crate::ox::types::Location;
use crate::ox::util::map;

/// Keywords in the Ox language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "a new keyword changes the language, which MUST be handled everywhere."
)]
pub enum Keyword {
    // Control flow
    /// `"if"`
    If,
    /// `"else"`
    Else,
    /// `"while"`
    While,
    /// `"for"`
    For,
    /// `"switch"`
    Switch,
    /// `"case"`
    Case,
    /// `"break"`
    Break,
    /// `"continue"`
    Continue,
    /// `"return"`
    Return,

    // Types
    /// `"int"`
    Int,
    /// `"float"`
    Float,
    /// `"binary"`
    Binary,
    /// `"hex"`
    Hex,
    /// `"string"`
    String,
    /// `"bool"`
    Bool,
    /// `"byte"`
    Byte,
    /// `"void"`
    Void,
    /// `"null"`
    Null,

    // Storage modifiers
    /// `"const"`
    Const,
    /// `"static"`
    Static,

    // Declarations
    /// `"class"`
    Class,
    /// `"struct"`
    Struct,
    /// `"enum"`
    Enum,

    // Access specifiers
    /// `"public"`
    Public,
    /// `"private"`
    Private,
    /// `"protected"`
    Protected,
}

impl Keyword {
    /// Name used for this keyword in token dumps.
    const fn dump_name(self) -> &'static str {
        match self {
            Keyword::If => "KEYWORD_IF",
            Keyword::Else => "KEYWORD_ELSE",
            Keyword::While => "KEYWORD_WHILE",
            Keyword::For => "KEYWORD_FOR",
            Keyword::Switch => "KEYWORD_SWITCH",
            Keyword::Case => "KEYWORD_CASE",
            Keyword::Break => "KEYWORD_BREAK",
            Keyword::Continue => "KEYWORD_CONTINUE",
            Keyword::Return => "KEYWORD_RETURN",
            Keyword::Int => "KEYWORD_INT",
            Keyword::Float => "KEYWORD_FLOAT",
            Keyword::Binary => "KEYWORD_BINARY",
            Keyword::Hex => "KEYWORD_HEX",
            Keyword::String => "KEYWORD_STRING",
            Keyword::Bool => "KEYWORD_BOOL",
            Keyword::Byte => "KEYWORD_BYTE",
            Keyword::Void => "KEYWORD_VOID",
            Keyword::Null => "KEYWORD_NULL",
            Keyword::Const => "KEYWORD_CONST",
            Keyword::Static => "KEYWORD_STATIC",
            Keyword::Class => "KEYWORD_CLASS",
            Keyword::Struct => "KEYWORD_STRUCT",
            Keyword::Enum => "KEYWORD_ENUM",
            Keyword::Public => "KEYWORD_PUBLIC",
            Keyword::Private => "KEYWORD_PRIVATE",
            Keyword::Protected => "KEYWORD_PROTECTED",
        }
    }
}

/// Lookup table for reserved words to distinguish them from identifiers.
///
/// `true` and `false` are reserved as well, but resolve to a literal instead of a keyword.
pub static KEYWORDS: LazyLock<HashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    map! {
        "if"        => TokenKind::Keyword(Keyword::If),
        "else"      => TokenKind::Keyword(Keyword::Else),
        "while"     => TokenKind::Keyword(Keyword::While),
        "for"       => TokenKind::Keyword(Keyword::For),
        "switch"    => TokenKind::Keyword(Keyword::Switch),
        "case"      => TokenKind::Keyword(Keyword::Case),
        "break"     => TokenKind::Keyword(Keyword::Break),
        "continue"  => TokenKind::Keyword(Keyword::Continue),
        "return"    => TokenKind::Keyword(Keyword::Return),

        "int"       => TokenKind::Keyword(Keyword::Int),
        "float"     => TokenKind::Keyword(Keyword::Float),
        "binary"    => TokenKind::Keyword(Keyword::Binary),
        "hex"       => TokenKind::Keyword(Keyword::Hex),
        "string"    => TokenKind::Keyword(Keyword::String),
        "bool"      => TokenKind::Keyword(Keyword::Bool),
        "byte"      => TokenKind::Keyword(Keyword::Byte),
        "void"      => TokenKind::Keyword(Keyword::Void),
        "null"      => TokenKind::Keyword(Keyword::Null),

        "const"     => TokenKind::Keyword(Keyword::Const),
        "static"    => TokenKind::Keyword(Keyword::Static),

        "class"     => TokenKind::Keyword(Keyword::Class),
        "struct"    => TokenKind::Keyword(Keyword::Struct),
        "enum"      => TokenKind::Keyword(Keyword::Enum),

        "public"    => TokenKind::Keyword(Keyword::Public),
        "private"   => TokenKind::Keyword(Keyword::Private),
        "protected" => TokenKind::Keyword(Keyword::Protected),

        "true"      => TokenKind::BooleanLiteral,
        "false"     => TokenKind::BooleanLiteral,
    }
});

/// The closed set of categories a token can fall into.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[expect(
    clippy::exhaustive_enums,
    reason = "adding a new variant MUST be handled and is a breaking change."
)]
pub enum TokenKind {
    // Literals
    /// Decimal, `0x` hexadecimal or `0b` binary integer.
    IntegerLiteral,
    /// A number with a fraction or an exponent.
    FloatLiteral,
    /// A single or double quoted string, delimiters included.
    StringLiteral,
    /// `"true"` or `"false"`
    BooleanLiteral,

    // Identifiers and Keywords
    /// A custom identifier
    Identifier,
    /// A specific keyword
    Keyword(Keyword),

    // Operators
    /// `"="`
    Assign,
    /// `"=="`
    Equal,
    /// `"!="`
    NotEqual,
    /// `"<"`
    Less,
    /// `"<="`
    LessEqual,
    /// `">"`
    Greater,
    /// `">="`
    GreaterEqual,
    /// `"+"`
    Plus,
    /// `"-"`
    Minus,
    /// `"*"`
    Multiply,
    /// `"/"`
    Divide,
    /// `"%"`
    Modulo,
    /// `"&&"`
    LogicalAnd,
    /// `"||"`
    LogicalOr,
    /// `"!"`
    LogicalNot,
    /// `"&"`
    BitwiseAnd,
    /// `"|"`
    BitwiseOr,
    /// `"++"`
    Increment,
    /// `"--"`
    Decrement,
    /// `"+="`
    PlusAssign,
    /// `"-="`
    MinusAssign,
    /// `"*="`
    MultiplyAssign,
    /// `"/="`
    DivideAssign,
    /// `"%="`
    ModuloAssign,

    // Punctuation
    /// `"("`
    LeftParen,
    /// `")"`
    RightParen,
    /// `"{"`
    LeftBrace,
    /// `"}"`
    RightBrace,
    /// `"["`
    LeftBracket,
    /// `"]"`
    RightBracket,
    /// `";"`
    Semicolon,
    /// `","`
    Comma,
    /// `"."`
    Dot,
    /// `":"`
    Colon,
    /// `"?"`
    Question,

    // Special
    /// End of Input, either end of line in REPL mode, or End of File in normal mode.
    EndOfFile,
    /// Malformed or unrecognized input, kept so that scanning never has to stop.
    Invalid,
}

impl TokenKind {
    /// The name of this kind as it appears in a token dump.
    #[inline]
    #[must_use]
    pub const fn dump_name(self) -> &'static str {
        match self {
            TokenKind::IntegerLiteral => "INTEGER_LITERAL",
            TokenKind::FloatLiteral => "FLOAT_LITERAL",
            TokenKind::StringLiteral => "STRING_LITERAL",
            TokenKind::BooleanLiteral => "BOOLEAN_LITERAL",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword(kw) => kw.dump_name(),
            TokenKind::Assign => "OP_ASSIGN",
            TokenKind::Equal => "OP_EQUAL",
            TokenKind::NotEqual => "OP_NOT_EQUAL",
            TokenKind::Less => "OP_LESS",
            TokenKind::LessEqual => "OP_LESS_EQUAL",
            TokenKind::Greater => "OP_GREATER",
            TokenKind::GreaterEqual => "OP_GREATER_EQUAL",
            TokenKind::Plus => "OP_PLUS",
            TokenKind::Minus => "OP_MINUS",
            TokenKind::Multiply => "OP_MULTIPLY",
            TokenKind::Divide => "OP_DIVIDE",
            TokenKind::Modulo => "OP_MODULO",
            TokenKind::LogicalAnd => "OP_LOGICAL_AND",
            TokenKind::LogicalOr => "OP_LOGICAL_OR",
            TokenKind::LogicalNot => "OP_LOGICAL_NOT",
            TokenKind::BitwiseAnd => "OP_BITWISE_AND",
            TokenKind::BitwiseOr => "OP_BITWISE_OR",
            TokenKind::Increment => "OP_INCREMENT",
            TokenKind::Decrement => "OP_DECREMENT",
            TokenKind::PlusAssign => "OP_PLUS_ASSIGN",
            TokenKind::MinusAssign => "OP_MINUS_ASSIGN",
            TokenKind::MultiplyAssign => "OP_MULTIPLY_ASSIGN",
            TokenKind::DivideAssign => "OP_DIVIDE_ASSIGN",
            TokenKind::ModuloAssign => "OP_MODULO_ASSIGN",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Colon => "COLON",
            TokenKind::Question => "QUESTION",
            TokenKind::EndOfFile => "EOF",
            TokenKind::Invalid => "INVALID",
        }
    }
}

impl Display for TokenKind {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.dump_name())
    }
}

/// A classified, positioned fragment of source text.
///
/// Tokens are produced once by the lexer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[expect(clippy::exhaustive_structs, reason = "kind, text and location is all a token is.")]
pub struct Token {
    /// Kind of this token.
    pub kind: TokenKind,
    /// The exact source text of this token, quotes and case preserved.
    /// Empty for [`TokenKind::EndOfFile`].
    pub text: String,
    /// Where the first character of this token sits in the source.
    pub location: Location,
}

impl Token {
    /// Line of the first character, 1-indexed.
    #[inline]
    #[must_use]
    pub const fn line(&self) -> usize {
        self.location.line
    }

    /// Column of the first character, 1-indexed.
    #[inline]
    #[must_use]
    pub const fn column(&self) -> usize {
        self.location.column
    }
}

/// Renders the token as a single dump line, `[line:column] KIND 'text'`.
impl Display for Token {
    #[inline]
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}] {} '{}'", self.location, self.kind, self.text)
    }
}
