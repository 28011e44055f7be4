//! Main recognizer coordinator
//!
//! This module provides the [`Recognizer`] struct and the core infrastructure
//! shared by the grammar rules: the token cursor, diagnostic reporting, the
//! top-level program loop and panic-mode recovery.
//!
//! # Recognizer Architecture
//!
//! The Recognizer is a recursive descent grammar checker organised as:
//! - This module: Recognizer struct, cursor helpers, `program`, `synchronize`
//! - `declarations`: variable and function declarations
//! - `statements`: blocks, `if`, `return`, expression statements
//! - `expressions`: the precedence chain from assignment down to primary
//!
//! Every rule returns `bool`. A rule that fails has already recorded a
//! diagnostic, and its caller gives up on the surrounding construct.
//!
//! # Implementation
//!
//! Rule methods are split across multiple files using `impl Recognizer`
//! blocks, each module extending the Recognizer with related rules while
//! sharing the cursor state.

use crate::parser::diagnostics::{Diagnostic, Diagnostics};
use crate::parser::token::{Token, TokenKind};

/// How many parentheses, assignments, blocks and `if` bodies may be open at
/// once before the recognizer refuses to descend further.
pub const MAX_NESTING_DEPTH: usize = 256;

/// Outcome of one recognition pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recognition {
    /// `true` iff no diagnostic was recorded.
    pub success: bool,
    pub diagnostics: Diagnostics,
}

/// Recursive descent grammar checker for the C subset
pub struct Recognizer<'a> {
    /// Non-comment tokens of the borrowed sequence.
    pub(crate) tokens: Vec<&'a Token>,
    pub(crate) position: usize,
    pub(crate) diagnostics: Diagnostics,
    /// Open nested constructs, bounded by [`MAX_NESTING_DEPTH`].
    depth: usize,
    /// Line of the end marker, reported for failures at end of input.
    end_line: usize,
}

impl<'a> Recognizer<'a> {
    /// Build a recognizer over a finished token sequence.
    ///
    /// A sequence that does not end with [`TokenKind::Eof`] is treated as if
    /// it did.
    pub fn new(tokens: &'a [Token]) -> Self {
        let end_line = tokens
            .iter()
            .find(|t| t.kind() == TokenKind::Eof)
            .or_else(|| tokens.last())
            .map_or(1, |t| t.line());
        let tokens: Vec<&'a Token> = tokens
            .iter()
            .filter(|t| !t.kind().is_comment())
            .take_while(|t| t.kind() != TokenKind::Eof)
            .collect();
        Self {
            tokens,
            position: 0,
            diagnostics: Diagnostics::new(),
            depth: 0,
            end_line,
        }
    }

    /// Validate the whole sequence (`program := declaration* EOF`).
    pub fn recognize(mut self) -> Recognition {
        log::debug!("recognizing {} tokens", self.tokens.len());

        while !self.is_at_end() {
            if !self.declaration() {
                self.synchronize();
            }
        }

        let success = self.diagnostics.is_empty();
        log::debug!(
            "recognition {} with {} diagnostics",
            if success { "succeeded" } else { "failed" },
            self.diagnostics.len()
        );
        Recognition {
            success,
            diagnostics: self.diagnostics,
        }
    }

    /// Panic-mode recovery: skip to the next likely statement boundary.
    ///
    /// Always consumes at least one token (unless already at the end), then
    /// stops after a `;` or before a declaration/statement keyword.
    pub(crate) fn synchronize(&mut self) {
        let from = self.position;
        self.advance();

        while !self.is_at_end() {
            if self.previous().kind() == TokenKind::Semicolon {
                break;
            }
            if is_sync_anchor(self.peek_kind()) {
                break;
            }
            self.advance();
        }

        log::trace!("synchronized from token {} to token {}", from, self.position);
    }

    // ===== Helper methods =====

    /// Run `rule` one nesting level deeper. At the limit, `message` is
    /// recorded against the current token and `rule` is not entered.
    pub(crate) fn nested(&mut self, message: &str, rule: fn(&mut Self) -> bool) -> bool {
        if self.depth >= MAX_NESTING_DEPTH {
            log::debug!("nesting limit of {} reached", MAX_NESTING_DEPTH);
            self.error_at_current(message);
            return false;
        }
        self.depth += 1;
        let ok = rule(self);
        self.depth -= 1;
        ok
    }

    pub(crate) fn is_type_keyword(&self) -> bool {
        !self.is_at_end() && self.peek_kind().is_type_keyword()
    }

    /// Consume the current token if it has the given kind.
    pub(crate) fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume the current token if it has any of the given kinds.
    pub(crate) fn match_any(&mut self, kinds: &[TokenKind]) -> bool {
        kinds.iter().any(|&kind| self.match_token(kind))
    }

    /// The end marker never matches.
    pub(crate) fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.peek_kind() == kind
    }

    pub(crate) fn advance(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    /// Un-consume the last token. Only used for the identifier/assignment
    /// lookahead, so it is never called at position 0.
    pub(crate) fn rewind(&mut self) {
        debug_assert!(self.position > 0);
        self.position = self.position.saturating_sub(1);
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek_kind(&self) -> TokenKind {
        self.tokens
            .get(self.position)
            .map_or(TokenKind::Eof, |t| t.kind())
    }

    /// Line and description of the current token (the end marker past the
    /// last token).
    fn current_site(&self) -> (usize, String) {
        match self.tokens.get(self.position) {
            Some(token) => (token.line(), token.describe().to_string()),
            None => (self.end_line, TokenKind::Eof.name().to_string()),
        }
    }

    /// Line and description of the token consumed last.
    fn previous_site(&self) -> (usize, String) {
        match self.position.checked_sub(1).and_then(|i| self.tokens.get(i)) {
            Some(token) => (token.line(), token.describe().to_string()),
            None => self.current_site(),
        }
    }

    fn previous(&self) -> &Token {
        self.tokens[self.position - 1]
    }

    /// Record a diagnostic against the current token.
    pub(crate) fn error_at_current(&mut self, message: &str) {
        let (line, found) = self.current_site();
        self.diagnostics.push(Diagnostic::syntax(line, message, found));
    }

    /// Record a diagnostic against the token consumed last.
    pub(crate) fn error_at_previous(&mut self, message: &str) {
        let (line, found) = self.previous_site();
        self.diagnostics.push(Diagnostic::syntax(line, message, found));
    }
}

/// Tokens that can begin a fresh declaration or statement.
fn is_sync_anchor(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Int
            | TokenKind::Float
            | TokenKind::Char
            | TokenKind::If
            | TokenKind::While
            | TokenKind::For
            | TokenKind::Return
    )
}

/// Check a finished token sequence against the grammar.
pub fn recognize(tokens: &[Token]) -> Recognition {
    Recognizer::new(tokens).recognize()
}
