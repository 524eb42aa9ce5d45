//! The single-shot analysis pipeline.
//!
//! Resolution order: explicit grammar override, then the tokenizer's own
//! extension mapping (file input only), then classifier fallback. Once
//! resolved, the grammar is never re-derived within the run. The two
//! subprocess collaborators are invoked strictly sequentially.

use std::fs;
use std::path::PathBuf;

use tracing::debug;

use crate::classify::{self, Classifier};
use crate::error::AnalysisError;
use crate::grammar::{self, GrammarId};
use crate::hal::{self, HalsteadMetrics};
use crate::ops;
use crate::tokenize::Tokenizer;

/// Exactly one source form per invocation: a file path or inline text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    File(PathBuf),
    Text(String),
}

impl SourceInput {
    /// Validate the caller's arguments before any I/O: both or neither
    /// populated is a contract violation.
    pub fn new(file: Option<PathBuf>, text: Option<String>) -> Result<Self, AnalysisError> {
        match (file, text) {
            (Some(path), None) => Ok(Self::File(path)),
            (None, Some(text)) => Ok(Self::Text(text)),
            _ => Err(AnalysisError::InvalidInput),
        }
    }
}

/// Run the full pipeline: resolve a grammar, tokenize, extract operator
/// occurrences, and compute the metric set.
pub fn analyze(
    input: &SourceInput,
    grammar_override: Option<&str>,
    tokenizer: &dyn Tokenizer,
    classifier: &dyn Classifier,
) -> Result<HalsteadMetrics, AnalysisError> {
    let (text, grammar) = match input {
        SourceInput::File(path) => {
            let text = fs::read_to_string(path).map_err(|source| AnalysisError::Io {
                path: path.clone(),
                source,
            })?;
            let grammar = match grammar_override {
                Some(suffix) => GrammarId::from_override(suffix),
                None => match tokenizer.grammar_for_path(path) {
                    Some(grammar) => {
                        if let Some(language) = path
                            .extension()
                            .and_then(|e| e.to_str())
                            .and_then(|e| grammar::language_for_extension(&format!(".{e}")))
                        {
                            debug!(%language, "language detected from extension");
                        }
                        grammar
                    }
                    None => classify::resolve_grammar(classifier, tokenizer, &text)?,
                },
            };
            (text, grammar)
        }
        // No extension available for inline text: override or classify.
        SourceInput::Text(text) => {
            let grammar = match grammar_override {
                Some(suffix) => GrammarId::from_override(suffix),
                None => classify::resolve_grammar(classifier, tokenizer, text)?,
            };
            (text.clone(), grammar)
        }
    };
    debug!(%grammar, "resolved grammar");

    let tokens = tokenizer.tokenize(&text, &grammar)?;
    let operators = ops::extract_operators(&tokens);
    debug!(
        tokens = tokens.len(),
        operators = operators.len(),
        "extracted operator occurrences"
    );
    Ok(hal::compute(&operators))
}

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod tests;
