//! Statement rules
//!
//! # Grammar
//!
//! ```text
//! statement ::= block | if_stmt | return_stmt | expr_stmt
//! block     ::= "{" declaration* "}"
//! if_stmt   ::= "if" "(" expression ")" statement [ "else" statement ]
//! return_stmt ::= "return" [ expression ] ";"
//! expr_stmt ::= expression ";"
//! ```
//!
//! There is no recovery inside a block: the first failing declaration fails
//! the whole block and recovery happens at the top level.

use crate::parser::parse::Recognizer;
use crate::parser::token::TokenKind;

const TOO_DEEP: &str = "Statement nested too deeply";

impl Recognizer<'_> {
    /// Parse a statement
    pub(crate) fn statement(&mut self) -> bool {
        if self.check(TokenKind::LeftBrace) {
            return self.nested(TOO_DEEP, Self::block);
        }

        if self.check(TokenKind::If) {
            return self.nested(TOO_DEEP, Self::if_statement);
        }

        if self.match_token(TokenKind::Return) {
            return self.return_statement();
        }

        self.expression_statement()
    }

    /// `"{" declaration* "}"`
    fn block(&mut self) -> bool {
        self.advance(); // consume '{'
        while !self.check(TokenKind::RightBrace) && !self.is_at_end() {
            if !self.declaration() {
                return false;
            }
        }

        if !self.match_token(TokenKind::RightBrace) {
            self.error_at_current("Missing '}' after block");
            return false;
        }
        true
    }

    /// `"if" "(" expression ")" statement [ "else" statement ]`
    fn if_statement(&mut self) -> bool {
        self.advance(); // consume 'if'
        if !self.match_token(TokenKind::LeftParen) {
            self.error_at_current("Expected '(' after 'if'");
            return false;
        }
        if !self.expression() {
            return false;
        }
        if !self.match_token(TokenKind::RightParen) {
            self.error_at_current("Expected ')' after if condition");
            return false;
        }

        if !self.statement() {
            return false;
        }
        if self.match_token(TokenKind::Else) {
            return self.statement();
        }
        true
    }

    /// Everything after `return`
    fn return_statement(&mut self) -> bool {
        if !self.check(TokenKind::Semicolon) && !self.expression() {
            return false;
        }
        if !self.match_token(TokenKind::Semicolon) {
            self.error_at_previous("Missing ';' after return value");
            return false;
        }
        true
    }

    fn expression_statement(&mut self) -> bool {
        if !self.expression() {
            return false;
        }
        if !self.match_token(TokenKind::Semicolon) {
            self.error_at_previous("Missing ';' after expression");
            return false;
        }
        true
    }
}
