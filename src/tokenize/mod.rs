//! Adapter for the external lexical tokenizer.
//!
//! The tokenizer is a separate program: it receives the source text on
//! stdin and the grammar scope name as an argument, and prints a JSON
//! document `{ "tokens": [{ "value": ..., "scopes": [...] }, ...] }`.
//! The adapter also owns the extension → grammar-scope map, which is the
//! preferred path-based resolution (the static language table in
//! `grammar` only serves the classifier's reverse lookup).

use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use serde::Deserialize;
use tracing::debug;

use crate::error::AnalysisError;
use crate::grammar::GrammarId;

/// A lexical token with its syntactic scope chain, ordered from most
/// general to most specific (TextMate-style scope names).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Token {
    pub value: String,
    pub scopes: Vec<String>,
}

/// External tokenizer seam. Implementations tokenize text under a
/// resolved grammar and expose their own path/extension → grammar map.
pub trait Tokenizer {
    fn tokenize(&self, text: &str, grammar: &GrammarId) -> Result<Vec<Token>, AnalysisError>;

    /// Map a file path to a grammar by its extension, if the tokenizer
    /// ships a grammar for it. `None` triggers classifier fallback.
    fn grammar_for_path(&self, path: &Path) -> Option<GrammarId> {
        self.grammar_for_extension(&dotted_extension(path)?)
    }

    fn grammar_for_extension(&self, ext: &str) -> Option<GrammarId>;
}

/// The dotted extension of a path (`".py"`), preserving case.
fn dotted_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_str()?;
    Some(format!(".{ext}"))
}

/// Extension → grammar scope name, mirroring the grammars bundled with
/// the external tokenizer.
const SCOPES: &[(&str, &str)] = &[
    (".bat", "source.batchfile"),
    (".c", "source.c"),
    (".cs", "source.cs"),
    (".cpp", "source.cpp"),
    (".coffee", "source.coffee"),
    (".css", "source.css"),
    (".er", "source.erlang"),
    (".go", "source.go"),
    (".hs", "source.haskell"),
    (".html", "text.html.basic"),
    (".java", "source.java"),
    (".js", "source.js"),
    (".ipynb", "source.jupyter"),
    (".lua", "source.lua"),
    (".md", "text.html.markdown"),
    (".mat", "source.matlab"),
    (".m", "source.objc"),
    (".perl", "source.perl"),
    (".php", "source.php"),
    (".ps", "source.powershell"),
    (".py", "source.python"),
    (".r", "source.r"),
    (".ruby", "source.ruby"),
    (".rs", "source.rust"),
    (".sc", "source.scala"),
    (".sh", "source.shell"),
    (".sql", "source.sql"),
    (".swift", "source.swift"),
    (".tex", "text.tex.latex"),
    (".ts", "source.ts"),
];

/// Wire format of the tokenizer's stdout.
#[derive(Deserialize)]
struct TokenDocument {
    tokens: Vec<Token>,
}

/// Tokenizer backed by an external process, one spawn per invocation.
pub struct SubprocessTokenizer {
    program: String,
    args: Vec<String>,
}

impl SubprocessTokenizer {
    pub fn new(program: impl Into<String>, args: &[&str]) -> Self {
        Self {
            program: program.into(),
            args: args.iter().map(|a| a.to_string()).collect(),
        }
    }
}

impl Default for SubprocessTokenizer {
    fn default() -> Self {
        Self::new("sct", &["tokenize"])
    }
}

impl Tokenizer for SubprocessTokenizer {
    fn tokenize(&self, text: &str, grammar: &GrammarId) -> Result<Vec<Token>, AnalysisError> {
        debug!(program = %self.program, %grammar, "spawning tokenizer");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .arg(grammar.as_str())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| AnalysisError::Tokenization(format!("cannot spawn {}: {e}", self.program)))?;

        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| AnalysisError::Tokenization(format!("cannot write source: {e}")))?;
        }

        let output = child
            .wait_with_output()
            .map_err(|e| AnalysisError::Tokenization(e.to_string()))?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AnalysisError::Tokenization(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let doc: TokenDocument = serde_json::from_slice(&output.stdout)
            .map_err(|e| AnalysisError::Tokenization(format!("malformed token output: {e}")))?;
        debug!(tokens = doc.tokens.len(), "tokenizer returned");
        Ok(doc.tokens)
    }

    fn grammar_for_extension(&self, ext: &str) -> Option<GrammarId> {
        SCOPES
            .iter()
            .find(|(e, _)| *e == ext)
            .map(|(_, scope)| GrammarId::new(*scope))
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
