// Integration tests for the recognizer and the combined front end

use ccheck::{analyze, recognize, scan, Analysis, Recognizer, Token, TokenKind};
use std::fs;
use std::path::Path;
use std::thread;
use test_log::test;

fn read_demo(name: &str) -> String {
    let path = Path::new("demos").join(name);
    fs::read_to_string(path).expect("Failed to read demo file")
}

#[test]
fn test_undeclared_assignment_is_valid() {
    let result = recognize(&scan("int a = 5; b = 3;"));
    assert!(result.success);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_if_else_blocks() {
    assert!(recognize(&scan("if (a > 5) { b = 1; } else { b = 2; }")).success);
}

#[test]
fn test_missing_initializer_recovers() {
    let result = recognize(&scan("int a = ;\nint b = 2;\nb = b + 1;"));
    assert!(!result.success);

    // Both reports point at the `;` on line 1; nothing after it is flagged.
    let diags = result.diagnostics.as_slice();
    assert_eq!(diags.len(), 2);
    for diag in diags {
        assert_eq!(diag.line, 1);
        assert_eq!(diag.found, ";");
    }
}

#[test]
fn test_failure_at_end_of_input_names_the_marker() {
    let result = recognize(&scan("x = 1 +\n\n"));
    let first = &result.diagnostics.as_slice()[0];
    assert_eq!(first.found, "EOF_TOKEN");
    assert_eq!(first.line, 3);
}

#[test]
fn test_traversal_completes_after_many_errors() {
    let result = recognize(&scan(") ) ) ; int a = 1; ( ; return 1;"));
    assert!(!result.success);
    // `int a = 1;` and `return 1;` are re-synchronized onto and accepted.
    let found: Vec<&str> = result
        .diagnostics
        .iter()
        .map(|d| d.found.as_str())
        .collect();
    assert_eq!(found, vec![")", ";"]);
}

#[test]
fn test_recognizer_does_not_consume_caller_tokens() {
    let tokens = scan("int a = 1;");
    let before = tokens.clone();
    let first = Recognizer::new(&tokens).recognize();
    let second = Recognizer::new(&tokens).recognize();
    assert_eq!(tokens, before);
    assert_eq!(first, second);
}

#[test]
fn test_hand_built_sequence() {
    let tokens = vec![
        Token::new(TokenKind::Return, "return", 7),
        Token::new(TokenKind::Semicolon, ";", 7),
        Token::new(TokenKind::Eof, "", 7),
    ];
    assert!(recognize(&tokens).success);

    let tokens = vec![
        Token::new(TokenKind::Return, "return", 2),
        Token::new(TokenKind::Eof, "", 5),
    ];
    // The missing operand is reported on the end marker's own line.
    let result = recognize(&tokens);
    let diag = &result.diagnostics.as_slice()[0];
    assert_eq!(diag.line, 5);
    assert_eq!(diag.found, "EOF_TOKEN");
}

#[test]
fn test_valid_demo() {
    let analysis = analyze(&read_demo("valid.c"));
    assert!(analysis.success, "diagnostics: {:?}", analysis.diagnostics);
}

#[test]
fn test_error_demo() {
    let analysis = analyze(&read_demo("errors.c"));
    assert!(!analysis.success);

    let reported: Vec<(usize, &str)> = analysis
        .diagnostics
        .iter()
        .map(|d| (d.line, d.found.as_str()))
        .collect();
    assert_eq!(
        reported,
        vec![(1, ";"), (1, ";"), (3, "c"), (4, ")"), (4, "}")]
    );
}

#[test]
fn test_analyze_merges_channels_in_order() {
    let analysis = analyze("int a = @;\n/* open");
    let diags = analysis.diagnostics.as_slice();

    assert!(diags[0].is_lexical());
    assert_eq!(diags[0].found, "@");
    assert!(diags[1].is_lexical());
    assert_eq!(diags[1].line, 2);
    assert!(diags[2..].iter().all(|d| !d.is_lexical()));
    assert!(!analysis.success);
}

#[test]
fn test_lexical_errors_alone_fail_analysis() {
    let analysis = analyze("int a = 1; #");
    assert_eq!(analysis.diagnostics.len(), 1);
    assert!(!analysis.success);
    assert!(recognize(&analysis.tokens).success);
}

#[test]
fn test_analyze_diagnostics_are_owned() {
    let analysis = analyze("int a = @;\nb = ;");
    let mut lines = Vec::new();
    for diag in analysis.diagnostics {
        lines.push((diag.line, diag.is_lexical()));
    }
    assert_eq!(lines[0], (1, true));
    assert!(lines[1..].iter().all(|&(_, lexical)| !lexical));
    assert_eq!(lines.last(), Some(&(2, false)));
}

#[test]
fn test_empty_source() {
    let analysis = analyze("");
    assert!(analysis.success);
    assert_eq!(analysis.tokens.len(), 1);
    assert_eq!(analysis.tokens[0].kind(), TokenKind::Eof);
}

#[test]
fn test_independent_runs_in_parallel() {
    let sources = ["int a = 1;", "int b = ;", "if (c) { c = 0; }", "return"];
    let handles: Vec<_> = sources
        .iter()
        .map(|&source| thread::spawn(move || analyze(source).success))
        .collect();
    let results: Vec<bool> = handles
        .into_iter()
        .map(|h| h.join().expect("worker panicked"))
        .collect();
    assert_eq!(results, vec![true, false, true, false]);
}

/// Run `source` through `analyze` on its own thread so a stack overflow would
/// surface as a join error instead of taking the test binary down.
fn analyze_on_thread(source: String) -> Analysis {
    thread::spawn(move || analyze(&source))
        .join()
        .expect("analysis thread died")
}

#[test]
fn test_long_chain_of_prefix_operators() {
    let source = format!(
        "int x = {}a;\nx = {}1;",
        "!".repeat(200_000),
        "-".repeat(200_000)
    );
    let analysis = analyze_on_thread(source);
    assert!(analysis.success, "{:?}", analysis.diagnostics);
}

#[test]
fn test_deeply_nested_parentheses_are_rejected() {
    let n = 5000;
    let source = format!("x = {}1{};\nint y = 2;", "(".repeat(n), ")".repeat(n));
    let analysis = analyze_on_thread(source);

    assert!(!analysis.success);
    let diags = analysis.diagnostics.as_slice();
    assert_eq!(diags[0].message, "Expression nested too deeply");
    assert_eq!(diags[0].found, "(");
    assert_eq!(diags[0].line, 1);
    assert!(diags.iter().all(|d| d.line == 1));
}

#[test]
fn test_moderate_nesting_is_accepted() {
    let n = 200;
    let source = format!(
        "int main() {{ if ({}a{}) {{ return -({}1{}); }} }}",
        "(".repeat(n),
        ")".repeat(n),
        "(".repeat(n / 2),
        ")".repeat(n / 2)
    );
    assert!(analyze_on_thread(source).success);
}

#[test]
fn test_deeply_nested_blocks_are_rejected() {
    let n = 10_000;
    let source = format!("{}{}", "{".repeat(n), "}".repeat(n));
    let analysis = analyze_on_thread(source);

    assert!(!analysis.success);
    assert_eq!(
        analysis.diagnostics.as_slice()[0].message,
        "Statement nested too deeply"
    );
}
