//! Declaration rules
//!
//! # Grammar
//!
//! ```text
//! declaration ::= type_kw IDENTIFIER "(" ")" statement
//!               | type_kw IDENTIFIER [ "=" expression ] ";"
//!               | statement
//! type_kw     ::= "int" | "float" | "char"
//! ```
//!
//! Parameter lists are not part of the subset: anything between `(` and `)`
//! is reported instead of being parsed.

use crate::parser::parse::Recognizer;
use crate::parser::token::TokenKind;

impl Recognizer<'_> {
    /// Parse a declaration, falling back to a statement when the current
    /// token is not a type keyword.
    pub(crate) fn declaration(&mut self) -> bool {
        if !self.is_type_keyword() {
            return self.statement();
        }
        self.advance(); // consume the type keyword

        if !self.match_token(TokenKind::Identifier) {
            self.error_at_previous("Expected identifier in variable or function declaration");
            return false;
        }

        if self.match_token(TokenKind::LeftParen) {
            return self.function_declaration();
        }
        self.variable_declaration()
    }

    /// Everything after `type name(`
    fn function_declaration(&mut self) -> bool {
        if !self.match_token(TokenKind::RightParen) {
            self.error_at_current("Function parameter lists are not supported");
            return false;
        }
        if !self.statement() {
            self.error_at_current("Invalid function body");
            return false;
        }
        true
    }

    /// Everything after `type name`
    fn variable_declaration(&mut self) -> bool {
        if self.match_token(TokenKind::Assignment) && !self.expression() {
            self.error_at_current("Invalid initializer expression");
            return false;
        }
        if !self.match_token(TokenKind::Semicolon) {
            self.error_at_previous("Missing ';' after variable declaration");
            return false;
        }
        true
    }
}
