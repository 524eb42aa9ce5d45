use std::cell::{Cell, RefCell};
use std::fs;
use std::path::Path;

use super::*;
use crate::tokenize::Token;

fn token(value: &str, scopes: &[&str]) -> Token {
    Token {
        value: value.to_string(),
        scopes: scopes.iter().map(|s| s.to_string()).collect(),
    }
}

/// In-process tokenizer stub: serves a fixed token stream and records
/// the grammar it was asked to tokenize under.
struct StubTokenizer {
    tokens: Vec<Token>,
    seen_grammar: RefCell<Option<GrammarId>>,
}

impl StubTokenizer {
    fn with_tokens(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            seen_grammar: RefCell::new(None),
        }
    }

    fn empty() -> Self {
        Self::with_tokens(Vec::new())
    }
}

impl Tokenizer for StubTokenizer {
    fn tokenize(&self, _text: &str, grammar: &GrammarId) -> Result<Vec<Token>, AnalysisError> {
        *self.seen_grammar.borrow_mut() = Some(grammar.clone());
        Ok(self.tokens.clone())
    }

    fn grammar_for_extension(&self, ext: &str) -> Option<GrammarId> {
        match ext {
            ".py" => Some(GrammarId::new("source.python")),
            ".js" => Some(GrammarId::new("source.js")),
            _ => None,
        }
    }
}

/// Classifier stub that counts invocations.
struct StubClassifier {
    prediction: &'static str,
    calls: Cell<usize>,
}

impl StubClassifier {
    fn new(prediction: &'static str) -> Self {
        Self {
            prediction,
            calls: Cell::new(0),
        }
    }
}

impl Classifier for StubClassifier {
    fn classify(&self, _source: &str) -> Result<String, AnalysisError> {
        self.calls.set(self.calls.get() + 1);
        Ok(self.prediction.to_string())
    }
}

#[test]
fn input_requires_exactly_one_source() {
    let both = SourceInput::new(Some("a.py".into()), Some("x = 1".into()));
    assert!(matches!(both.unwrap_err(), AnalysisError::InvalidInput));

    let neither = SourceInput::new(None, None);
    assert!(matches!(neither.unwrap_err(), AnalysisError::InvalidInput));

    assert!(SourceInput::new(Some("a.py".into()), None).is_ok());
    assert!(SourceInput::new(None, Some("x = 1".into())).is_ok());
}

#[test]
fn known_extension_skips_classifier() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.py");
    fs::write(&path, "x = 1 + 2\n").unwrap();

    let tokenizer = StubTokenizer::empty();
    let classifier = StubClassifier::new("python");
    analyze(&SourceInput::File(path), None, &tokenizer, &classifier).unwrap();

    assert_eq!(classifier.calls.get(), 0);
    assert_eq!(
        *tokenizer.seen_grammar.borrow(),
        Some(GrammarId::new("source.python"))
    );
}

#[test]
fn unknown_extension_falls_back_to_classifier() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("script.xyz");
    fs::write(&path, "puts 1\n").unwrap();

    let tokenizer = StubTokenizer::empty();
    let classifier = StubClassifier::new("javascript");
    analyze(&SourceInput::File(path), None, &tokenizer, &classifier).unwrap();

    assert_eq!(classifier.calls.get(), 1);
    assert_eq!(
        *tokenizer.seen_grammar.borrow(),
        Some(GrammarId::new("source.js"))
    );
}

#[test]
fn inline_text_uses_classifier() {
    let tokenizer = StubTokenizer::empty();
    let classifier = StubClassifier::new("python");
    analyze(
        &SourceInput::Text("x = 1".into()),
        None,
        &tokenizer,
        &classifier,
    )
    .unwrap();

    assert_eq!(classifier.calls.get(), 1);
}

#[test]
fn override_bypasses_lookup_and_classifier() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mystery.xyz");
    fs::write(&path, "whatever\n").unwrap();

    let tokenizer = StubTokenizer::empty();
    let classifier = StubClassifier::new("python");
    analyze(
        &SourceInput::File(path),
        Some(".ruby"),
        &tokenizer,
        &classifier,
    )
    .unwrap();

    assert_eq!(classifier.calls.get(), 0);
    assert_eq!(
        *tokenizer.seen_grammar.borrow(),
        Some(GrammarId::new("source.ruby"))
    );
}

#[test]
fn override_applies_to_inline_text_too() {
    let tokenizer = StubTokenizer::empty();
    let classifier = StubClassifier::new("python");
    analyze(
        &SourceInput::Text("x".into()),
        Some(".js"),
        &tokenizer,
        &classifier,
    )
    .unwrap();
    assert_eq!(classifier.calls.get(), 0);
    assert_eq!(
        *tokenizer.seen_grammar.borrow(),
        Some(GrammarId::new("source.js"))
    );
}

#[test]
fn unknown_prediction_is_unresolved() {
    let tokenizer = StubTokenizer::empty();
    let classifier = StubClassifier::new("klingon");
    let err = analyze(
        &SourceInput::Text("qapla'".into()),
        None,
        &tokenizer,
        &classifier,
    )
    .unwrap_err();
    assert!(matches!(err, AnalysisError::UnresolvedGrammar));
}

#[test]
fn missing_file_is_io_error() {
    let tokenizer = StubTokenizer::empty();
    let classifier = StubClassifier::new("python");
    let err = analyze(
        &SourceInput::File(Path::new("/no/such/file.py").to_path_buf()),
        None,
        &tokenizer,
        &classifier,
    )
    .unwrap_err();
    assert!(matches!(err, AnalysisError::Io { .. }));
}

#[test]
fn end_to_end_metrics_from_tokens() {
    let tokenizer = StubTokenizer::with_tokens(vec![
        token("x", &["source.js", "variable.other.js"]),
        token("+", &["source.js", "keyword.operator.arithmetic.js"]),
        token("y", &["source.js", "variable.other.js"]),
        token("+", &["source.js", "keyword.operator.arithmetic.js"]),
        token("-", &["source.js", "keyword.operator.arithmetic.js"]),
        token("==", &["source.js", "keyword.operator.comparison.js"]),
    ]);
    let classifier = StubClassifier::new("javascript");
    let metrics = analyze(
        &SourceInput::Text("x + y + - ==".into()),
        None,
        &tokenizer,
        &classifier,
    )
    .unwrap();

    assert_eq!(metrics.distinct_operators, 3);
    assert_eq!(metrics.total_operators, 4);
    assert_eq!(metrics.vocabulary, 12);
}

#[test]
fn no_operator_tokens_yield_zero_metrics() {
    let tokenizer = StubTokenizer::with_tokens(vec![token("hello", &["text.plain"])]);
    let classifier = StubClassifier::new("python");
    let metrics = analyze(
        &SourceInput::Text("hello".into()),
        None,
        &tokenizer,
        &classifier,
    )
    .unwrap();
    assert_eq!(metrics.volume, 0.0);
    assert_eq!(metrics.effort, 0.0);
    assert_eq!(metrics.vocabulary, 0);
}
