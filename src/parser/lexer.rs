//! Lexer (tokenizer) for C-subset source code
//!
//! Converts raw source text into a flat [`Token`] sequence consumed by the
//! recognizer. Scanning is a single maximal-munch pass and never stops early:
//! unexpected characters and unterminated block comments are recorded as
//! [`Diagnostic`]s and the scan carries on. Comments are emitted as tokens
//! rather than discarded.

use super::diagnostics::{Diagnostic, Diagnostics};
use super::token::{keyword, Token, TokenKind};

/// Lexer for C-subset source code
pub struct Lexer {
    input: Vec<char>,
    start: usize,
    position: usize,
    line: usize,
    tokens: Vec<Token>,
    diagnostics: Diagnostics,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            start: 0,
            position: 0,
            line: 1,
            tokens: Vec::new(),
            diagnostics: Diagnostics::new(),
        }
    }

    /// Tokenize the entire input.
    ///
    /// The returned sequence always ends with exactly one [`TokenKind::Eof`]
    /// carrying the last line reached.
    pub fn tokenize(mut self) -> (Vec<Token>, Diagnostics) {
        while !self.is_at_end() {
            self.start = self.position;
            self.scan_token();
        }

        self.tokens.push(Token::new(TokenKind::Eof, "", self.line));

        log::debug!(
            "scanned {} tokens with {} diagnostics",
            self.tokens.len(),
            self.diagnostics.len()
        );
        (self.tokens, self.diagnostics)
    }

    fn scan_token(&mut self) {
        let ch = match self.advance() {
            Some(ch) => ch,
            None => return,
        };

        match ch {
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            ':' => self.add_token(TokenKind::Colon),
            ';' => self.add_token(TokenKind::Semicolon),
            '+' => self.add_token(TokenKind::Plus),
            '-' => self.add_token(TokenKind::Minus),
            '*' => self.add_token(TokenKind::Multiply),

            '/' => {
                if self.peek() == Some('/') {
                    self.line_comment();
                } else if self.peek() == Some('*') {
                    self.block_comment();
                } else {
                    self.add_token(TokenKind::Divide);
                }
            }

            '=' => self.one_or_two('=', TokenKind::Equal, TokenKind::Assignment),
            '!' => self.one_or_two('=', TokenKind::NotEqual, TokenKind::Bang),
            '<' => self.one_or_two('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.one_or_two('=', TokenKind::GreaterEqual, TokenKind::Greater),

            ' ' | '\t' | '\r' => {}
            '\n' => self.line += 1,

            c if c.is_ascii_digit() => self.number(),
            c if c.is_alphabetic() || c == '_' => self.identifier_or_keyword(),

            _ => self.diagnostics.push(Diagnostic::unexpected_character(ch, self.line)),
        }
    }

    /// Emit `double` if the next character is `second`, otherwise `single`.
    fn one_or_two(&mut self, second: char, double: TokenKind, single: TokenKind) {
        if self.match_char(second) {
            self.add_token(double);
        } else {
            self.add_token(single);
        }
    }

    /// Parse numeric literal (contiguous ASCII digits only)
    fn number(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        self.add_token(TokenKind::Number);
    }

    /// Parse identifier or keyword
    fn identifier_or_keyword(&mut self) {
        while self.peek().is_some_and(|c| c.is_alphanumeric() || c == '_') {
            self.advance();
        }

        let text = self.current_text();
        let kind = keyword(&text).unwrap_or(TokenKind::Identifier);
        self.push_token(kind, text, self.line);
    }

    /// `// ...` up to, but not including, the newline
    fn line_comment(&mut self) {
        while self.peek().is_some_and(|c| c != '\n') {
            self.advance();
        }
        self.add_token(TokenKind::SingleLineComment);
    }

    /// `/* ... */`, possibly spanning lines
    fn block_comment(&mut self) {
        let start_line = self.line;
        self.advance(); // skip '*'

        while let Some(ch) = self.advance() {
            if ch == '*' && self.peek() == Some('/') {
                self.advance(); // skip '/'
                let text = self.current_text();
                self.push_token(TokenKind::MultiLineComment, text, start_line);
                return;
            }
            if ch == '\n' {
                self.line += 1;
            }
        }

        self.diagnostics.push(Diagnostic::unterminated_comment(start_line));
    }

    fn add_token(&mut self, kind: TokenKind) {
        let text = self.current_text();
        self.push_token(kind, text, self.line);
    }

    fn push_token(&mut self, kind: TokenKind, text: String, line: usize) {
        let token = Token::new(kind, text, line);
        log::trace!("{}", token);
        self.tokens.push(token);
    }

    /// Source text from the start of the current token to the cursor
    fn current_text(&self) -> String {
        self.input[self.start..self.position].iter().collect()
    }

    /// Consume the next character if it is `expected`
    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character. Line counting is left to the callers so
    /// that a newline is counted exactly once.
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;
        Some(ch)
    }

    /// Check if at end of input
    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }
}

/// Scan `source` and return its tokens, discarding lexical diagnostics.
pub fn scan(source: &str) -> Vec<Token> {
    Lexer::new(source).tokenize().0
}

/// Scan `source`, returning the tokens together with every lexical
/// diagnostic in source order.
pub fn scan_with_diagnostics(source: &str) -> (Vec<Token>, Diagnostics) {
    Lexer::new(source).tokenize()
}
