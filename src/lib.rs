//! # Introduction
//!
//! `ccheck` is the front end of a small C subset: a maximal-munch scanner and
//! a recursive-descent grammar recognizer. It reports line-tagged
//! diagnostics and keeps going after errors instead of stopping at the first
//! one.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Recognizer → success + Diagnostics
//! ```
//!
//! 1. [`parser::lexer`] — scans the source into [`Token`]s. Comments are
//!    kept as tokens; unexpected characters and unterminated comments become
//!    lexical [`Diagnostic`]s.
//! 2. [`parser::parse`] — walks the finished tokens with an index cursor and
//!    checks them against the grammar, recovering at statement boundaries.
//!
//! ## Example
//!
//! ```
//! let analysis = ccheck::analyze("int a = 5;\nif (a > 1) { a = a - 1; }");
//! assert!(analysis.success);
//!
//! let analysis = ccheck::analyze("int a = ;");
//! assert!(!analysis.success);
//! assert_eq!(analysis.diagnostics.as_slice()[0].line, 1);
//! ```

pub mod parser;

pub use parser::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, LexicalDiagnosticKind};
pub use parser::lexer::{scan, scan_with_diagnostics, Lexer};
pub use parser::parse::{recognize, Recognition, Recognizer};
pub use parser::token::{Token, TokenKind};

/// Tokens and merged diagnostics of one source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    /// Lexical diagnostics first, then syntax diagnostics, each in source
    /// order.
    pub diagnostics: Diagnostics,
    /// `true` iff neither stage reported anything.
    pub success: bool,
}

/// Scan and recognize `source`, merging both diagnostic channels.
pub fn analyze(source: &str) -> Analysis {
    let (tokens, mut diagnostics) = scan_with_diagnostics(source);
    let recognition = recognize(&tokens);
    diagnostics.extend(recognition.diagnostics);

    Analysis {
        success: diagnostics.is_empty(),
        tokens,
        diagnostics,
    }
}
