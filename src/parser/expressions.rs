//! Expression rules
//!
//! Binary levels use the operator-loop form of precedence climbing: parse one
//! operand at the next tighter level, then keep consuming `op operand` pairs
//! while the next token is one of this level's operators.
//!
//! # Precedence (loosest first)
//!
//! ```text
//! assignment ::= IDENTIFIER "=" assignment | equality
//! equality   ::= comparison ( ( "==" | "!=" ) comparison )*
//! comparison ::= term ( ( "<" | "<=" | ">" | ">=" ) term )*
//! term       ::= factor ( ( "+" | "-" ) factor )*
//! factor     ::= unary ( ( "*" | "/" ) unary )*
//! unary      ::= ( "!" | "-" ) unary | primary
//! primary    ::= NUMBER | IDENTIFIER | "(" expression ")"
//! ```

use crate::parser::parse::Recognizer;
use crate::parser::token::TokenKind;

const EQUALITY_OPS: [TokenKind; 2] = [TokenKind::Equal, TokenKind::NotEqual];
const COMPARISON_OPS: [TokenKind; 4] = [
    TokenKind::Less,
    TokenKind::LessEqual,
    TokenKind::Greater,
    TokenKind::GreaterEqual,
];
const TERM_OPS: [TokenKind; 2] = [TokenKind::Plus, TokenKind::Minus];
const FACTOR_OPS: [TokenKind; 2] = [TokenKind::Multiply, TokenKind::Divide];
const UNARY_OPS: [TokenKind; 2] = [TokenKind::Bang, TokenKind::Minus];

const TOO_DEEP: &str = "Expression nested too deeply";

impl Recognizer<'_> {
    /// Parse expression (top-level entry point)
    pub(crate) fn expression(&mut self) -> bool {
        self.assignment()
    }

    /// Parse assignment (right-associative)
    ///
    /// `IDENTIFIER "="` is tried first; if the identifier is not followed by
    /// `=` it is handed back and re-read as the first operand of an
    /// equality expression.
    fn assignment(&mut self) -> bool {
        if self.match_token(TokenKind::Identifier) {
            if self.match_token(TokenKind::Assignment) {
                if !self.nested(TOO_DEEP, Self::assignment) {
                    self.error_at_current("Invalid right-hand side of assignment");
                    return false;
                }
                return true;
            }
            self.rewind();
        }
        self.equality()
    }

    /// Parse equality (== !=)
    fn equality(&mut self) -> bool {
        self.binary_level(&EQUALITY_OPS, Self::comparison)
    }

    /// Parse comparison (< <= > >=)
    fn comparison(&mut self) -> bool {
        self.binary_level(&COMPARISON_OPS, Self::term)
    }

    /// Parse additive (+ -)
    fn term(&mut self) -> bool {
        self.binary_level(&TERM_OPS, Self::factor)
    }

    /// Parse multiplicative (* /)
    fn factor(&mut self) -> bool {
        self.binary_level(&FACTOR_OPS, Self::unary)
    }

    /// Left-associative `operand (op operand)*` loop shared by the binary
    /// levels.
    fn binary_level(&mut self, ops: &[TokenKind], operand: fn(&mut Self) -> bool) -> bool {
        if !operand(self) {
            return false;
        }
        while self.match_any(ops) {
            if !operand(self) {
                return false;
            }
        }
        true
    }

    /// Parse unary (! -)
    ///
    /// Prefix operators carry no structure the recognizer cares about, so
    /// any run of them is skipped before the operand.
    fn unary(&mut self) -> bool {
        while self.match_any(&UNARY_OPS) {}
        self.primary()
    }

    /// Parse primary expressions
    fn primary(&mut self) -> bool {
        if self.match_any(&[TokenKind::Number, TokenKind::Identifier]) {
            return true;
        }

        if self.check(TokenKind::LeftParen) {
            return self.nested(TOO_DEEP, Self::parenthesized);
        }

        self.error_at_current("Expected number, identifier, or parenthesized expression");
        false
    }

    /// `"(" expression ")"`
    fn parenthesized(&mut self) -> bool {
        self.advance(); // consume '('
        if !self.expression() {
            return false;
        }
        if !self.match_token(TokenKind::RightParen) {
            self.error_at_current("Missing ')' after expression");
            return false;
        }
        true
    }
}
