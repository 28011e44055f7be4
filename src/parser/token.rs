//! Token model shared by the lexer and the recognizer
//!
//! A [`Token`] is a `(kind, lexeme, line)` triple. The lexeme always spans the
//! source text exactly, so concatenating the lexemes of a scan (plus the
//! skipped whitespace) reproduces the input.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;
use std::fmt;

/// Every token kind the lexer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Operators
    Plus,         // +
    Minus,        // -
    Multiply,     // *
    Divide,       // /
    Equal,        // ==
    NotEqual,     // !=
    Less,         // <
    Greater,      // >
    LessEqual,    // <=
    GreaterEqual, // >=
    Assignment,   // =
    Bang,         // !

    // Delimiters
    LeftParen,  // (
    RightParen, // )
    Semicolon,  // ;
    LeftBrace,  // {
    RightBrace, // }
    Comma,      // ,
    Dot,        // .
    Colon,      // :

    // Literals
    Number,
    Identifier,

    // Keywords (C99)
    Auto,
    Break,
    Case,
    Char,
    Const,
    Continue,
    Default,
    Do,
    Double,
    Else,
    Enum,
    Extern,
    Float,
    For,
    Goto,
    If,
    Inline,
    Int,
    Long,
    Register,
    Restrict,
    Return,
    Short,
    Signed,
    Sizeof,
    Static,
    Struct,
    Switch,
    Typedef,
    Union,
    Unsigned,
    Void,
    Volatile,
    While,
    Bool,
    Complex,
    Imaginary,

    // Comments
    SingleLineComment,
    MultiLineComment,

    Eof,
}

/// The C99 reserved words, in the order the standard lists them.
pub const KEYWORDS: [(&str, TokenKind); 37] = [
    ("auto", TokenKind::Auto),
    ("break", TokenKind::Break),
    ("case", TokenKind::Case),
    ("char", TokenKind::Char),
    ("const", TokenKind::Const),
    ("continue", TokenKind::Continue),
    ("default", TokenKind::Default),
    ("do", TokenKind::Do),
    ("double", TokenKind::Double),
    ("else", TokenKind::Else),
    ("enum", TokenKind::Enum),
    ("extern", TokenKind::Extern),
    ("float", TokenKind::Float),
    ("for", TokenKind::For),
    ("goto", TokenKind::Goto),
    ("if", TokenKind::If),
    ("inline", TokenKind::Inline),
    ("int", TokenKind::Int),
    ("long", TokenKind::Long),
    ("register", TokenKind::Register),
    ("restrict", TokenKind::Restrict),
    ("return", TokenKind::Return),
    ("short", TokenKind::Short),
    ("signed", TokenKind::Signed),
    ("sizeof", TokenKind::Sizeof),
    ("static", TokenKind::Static),
    ("struct", TokenKind::Struct),
    ("switch", TokenKind::Switch),
    ("typedef", TokenKind::Typedef),
    ("union", TokenKind::Union),
    ("unsigned", TokenKind::Unsigned),
    ("void", TokenKind::Void),
    ("volatile", TokenKind::Volatile),
    ("while", TokenKind::While),
    ("_Bool", TokenKind::Bool),
    ("_Complex", TokenKind::Complex),
    ("_Imaginary", TokenKind::Imaginary),
];

static KEYWORD_TABLE: Lazy<FxHashMap<&'static str, TokenKind>> =
    Lazy::new(|| KEYWORDS.iter().copied().collect());

/// Look up a scanned word in the keyword table.
pub fn keyword(word: &str) -> Option<TokenKind> {
    KEYWORD_TABLE.get(word).copied()
}

impl TokenKind {
    /// Upper-case name used in token dumps and in diagnostics for tokens
    /// without text.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Multiply => "MULTIPLY",
            TokenKind::Divide => "DIVIDE",
            TokenKind::Equal => "EQUAL",
            TokenKind::NotEqual => "NOT_EQUAL",
            TokenKind::Less => "LESS",
            TokenKind::Greater => "GREATER",
            TokenKind::LessEqual => "LESS_EQUAL",
            TokenKind::GreaterEqual => "GREATER_EQUAL",
            TokenKind::Assignment => "ASSIGNMENT",
            TokenKind::Bang => "BANG",
            TokenKind::LeftParen => "LEFT_PAREN",
            TokenKind::RightParen => "RIGHT_PAREN",
            TokenKind::Semicolon => "SEMICOLON",
            TokenKind::LeftBrace => "LEFT_BRACE",
            TokenKind::RightBrace => "RIGHT_BRACE",
            TokenKind::Comma => "COMMA",
            TokenKind::Dot => "DOT",
            TokenKind::Colon => "COLON",
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Auto => "AUTO",
            TokenKind::Break => "BREAK",
            TokenKind::Case => "CASE",
            TokenKind::Char => "CHAR",
            TokenKind::Const => "CONST",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Default => "DEFAULT",
            TokenKind::Do => "DO",
            TokenKind::Double => "DOUBLE",
            TokenKind::Else => "ELSE",
            TokenKind::Enum => "ENUM",
            TokenKind::Extern => "EXTERN",
            TokenKind::Float => "FLOAT",
            TokenKind::For => "FOR",
            TokenKind::Goto => "GOTO",
            TokenKind::If => "IF",
            TokenKind::Inline => "INLINE",
            TokenKind::Int => "INT",
            TokenKind::Long => "LONG",
            TokenKind::Register => "REGISTER",
            TokenKind::Restrict => "RESTRICT",
            TokenKind::Return => "RETURN",
            TokenKind::Short => "SHORT",
            TokenKind::Signed => "SIGNED",
            TokenKind::Sizeof => "SIZEOF",
            TokenKind::Static => "STATIC",
            TokenKind::Struct => "STRUCT",
            TokenKind::Switch => "SWITCH",
            TokenKind::Typedef => "TYPEDEF",
            TokenKind::Union => "UNION",
            TokenKind::Unsigned => "UNSIGNED",
            TokenKind::Void => "VOID",
            TokenKind::Volatile => "VOLATILE",
            TokenKind::While => "WHILE",
            TokenKind::Bool => "_BOOL",
            TokenKind::Complex => "_COMPLEX",
            TokenKind::Imaginary => "_IMAGINARY",
            TokenKind::SingleLineComment => "SINGLE_LINE_COMMENT",
            TokenKind::MultiLineComment => "MULTI_LINE_COMMENT",
            TokenKind::Eof => "EOF_TOKEN",
        }
    }

    pub fn is_keyword(self) -> bool {
        KEYWORDS.iter().any(|&(_, kind)| kind == self)
    }

    pub fn is_comment(self) -> bool {
        matches!(self, TokenKind::SingleLineComment | TokenKind::MultiLineComment)
    }

    /// Keywords that open a variable or function declaration.
    ///
    /// Only the three types the grammar knows about; `double`, `long` and
    /// friends are still scanned as keywords but start no declaration.
    pub fn is_type_keyword(self) -> bool {
        matches!(self, TokenKind::Int | TokenKind::Float | TokenKind::Char)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single lexeme together with its kind and starting line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    kind: TokenKind,
    lexeme: String,
    line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    /// 1-based line on which the token starts.
    pub fn line(&self) -> usize {
        self.line
    }

    /// The token's text, or its kind name when the text is empty (the end
    /// marker).
    pub fn describe(&self) -> &str {
        if self.lexeme.is_empty() {
            self.kind.name()
        } else {
            &self.lexeme
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.lexeme.is_empty() {
            write!(f, "{} N/A (line {})", self.kind, self.line)
        } else {
            write!(f, "{} '{}' (line {})", self.kind, self.lexeme, self.line)
        }
    }
}
