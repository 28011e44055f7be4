//! Line-tagged diagnostics for both front-end stages
//!
//! Neither the lexer nor the recognizer ever fails with an error value.
//! Problems are recorded as [`Diagnostic`]s in a [`Diagnostics`] collector and
//! processing carries on; a non-empty collector is the only failure signal.

use std::fmt;

/// Which stage produced a diagnostic, and why.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    Lexical(LexicalDiagnosticKind),
    Syntax,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalDiagnosticKind {
    /// A character no token can start with. It is skipped.
    UnexpectedCharacter,

    /// End of input inside a `/* ... */` comment. No token is emitted for it.
    UnterminatedComment,
}

/// A single reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub line: usize,
    pub message: String,
    /// Offending text, or the token kind name when the token has no text.
    pub found: String,
}

impl Diagnostic {
    pub fn unexpected_character(ch: char, line: usize) -> Self {
        Self {
            kind: DiagnosticKind::Lexical(LexicalDiagnosticKind::UnexpectedCharacter),
            line,
            message: format!("Unexpected character '{}'", ch),
            found: ch.to_string(),
        }
    }

    pub fn unterminated_comment(line: usize) -> Self {
        Self {
            kind: DiagnosticKind::Lexical(LexicalDiagnosticKind::UnterminatedComment),
            line,
            message: "Unterminated comment".to_string(),
            found: "/*".to_string(),
        }
    }

    pub fn syntax(line: usize, message: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            kind: DiagnosticKind::Syntax,
            line,
            message: message.into(),
            found: found.into(),
        }
    }

    pub fn is_lexical(&self) -> bool {
        matches!(self.kind, DiagnosticKind::Lexical(_))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = match self.kind {
            DiagnosticKind::Lexical(_) => "Lexical error",
            DiagnosticKind::Syntax => "Syntax error",
        };
        write!(
            f,
            "{} at line {}: {} (found: {})",
            stage, self.line, self.message, self.found
        )
    }
}

impl std::error::Error for Diagnostic {}

/// Ordered diagnostic collector passed through one scan or one recognition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        log::debug!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.entries.extend(other.entries);
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
