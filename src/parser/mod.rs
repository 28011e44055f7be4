//! C-subset front end
//!
//! This module turns source text into a checked token sequence:
//! - [`token`]: token kinds, the token record and the keyword table
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Recognition (tokens → success flag + diagnostics)
//! - [`diagnostics`]: the line-tagged problem records both stages emit
//!
//! # Supported C Subset
//!
//! - Types: `int`, `float`, `char` (declarations only, no type checking)
//! - Declarations: `type name;`, `type name = expr;`, `type name() stmt`
//! - Statements: blocks, `if`/`else`, `return`, expression statements
//! - Expressions: `=` on identifiers, `== != < <= > >=`, `+ - * /`, unary
//!   `!` and `-`, parentheses
//! - Literals: decimal integers only
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent recognizer with an operator loop per
//! precedence level. It validates structure only and builds no tree.

mod declarations;
pub mod diagnostics;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;
