//! Adapter for the external statistical language classifier.
//!
//! Used only when extension-based resolution comes up empty. The
//! classifier is a separate program: it reads the full source text on
//! stdin and prints a single prediction line of the form
//! `Programming language: <Name>`. One spawn per invocation, no retry.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::AnalysisError;
use crate::grammar::{self, GrammarId};
use crate::tokenize::Tokenizer;

const PREDICTION_PREFIX: &str = "Programming language: ";

/// Classifier seam: best-guess language name for a piece of source text,
/// normalized to lower case.
pub trait Classifier {
    fn classify(&self, source: &str) -> Result<String, AnalysisError>;
}

/// Resolve a grammar by classifying the source text: prediction →
/// extension (reverse table lookup) → grammar (tokenizer's map). Yields
/// `UnresolvedGrammar` when either mapping is missing, rather than
/// guessing.
pub fn resolve_grammar(
    classifier: &dyn Classifier,
    tokenizer: &dyn Tokenizer,
    source: &str,
) -> Result<GrammarId, AnalysisError> {
    let language = classifier.classify(source)?;
    let extension =
        grammar::extension_for_language(&language).ok_or(AnalysisError::UnresolvedGrammar)?;
    debug!(%language, %extension, "classifier prediction mapped to extension");
    tokenizer
        .grammar_for_extension(extension)
        .ok_or(AnalysisError::UnresolvedGrammar)
}

/// Classifier backed by an external process.
pub struct SubprocessClassifier {
    program: String,
    args: Vec<String>,
}

impl SubprocessClassifier {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Default for SubprocessClassifier {
    fn default() -> Self {
        Self::new("guesslang", &[])
    }
}

impl Classifier for SubprocessClassifier {
    fn classify(&self, source: &str) -> Result<String, AnalysisError> {
        debug!(program = %self.program, "spawning classifier to guess the language");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                AnalysisError::ClassifierUnavailable(format!("cannot spawn {}: {e}", self.program))
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(source.as_bytes()).map_err(|e| {
                AnalysisError::ClassifierUnavailable(format!("cannot write source: {e}"))
            })?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| AnalysisError::ClassifierUnavailable(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AnalysisError::ClassifierUnavailable(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let line = stdout.trim();
        let language = line
            .strip_prefix(PREDICTION_PREFIX)
            .unwrap_or(line)
            .to_lowercase();
        debug!(%language, "classifier prediction");
        Ok(language)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
