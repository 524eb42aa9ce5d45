//! Grammar identifiers and the static extension → language table.
//!
//! The table mirrors the language set supported by the external
//! classifier; extensions are matched case-sensitively, including the
//! leading dot. An unknown extension is a normal outcome (classifier
//! fallback), never an error.

use std::fmt;

/// Opaque name of a lexical grammar understood by the external tokenizer
/// (e.g. `source.python`). Immutable once resolved; never re-derived
/// within a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarId(String);

impl GrammarId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build a grammar identifier from a caller-supplied scope suffix,
    /// e.g. `".python"` → `source.python`. An explicit override bypasses
    /// both extension lookup and classification.
    pub fn from_override(suffix: &str) -> Self {
        Self(format!("source{suffix}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GrammarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Extension → human-readable language name, one entry per language the
/// classifier can predict.
pub const EXTENSIONS: &[(&str, &str)] = &[
    (".bat", "Batchfile"),
    (".c", "C"),
    (".cs", "C#"),
    (".cpp", "C++"),
    (".coffee", "CoffeeScript"),
    (".css", "CSS"),
    (".er", "Erlang"),
    (".go", "Go"),
    (".hs", "Haskell"),
    (".html", "HTML"),
    (".java", "Java"),
    (".js", "JavaScript"),
    (".ipynb", "Jupyter Notebook"),
    (".lua", "Lua"),
    (".md", "Markdown"),
    (".mat", "Matlab"),
    (".m", "Objective-C"),
    (".perl", "Perl"),
    (".php", "PHP"),
    (".ps", "PowerShell"),
    (".py", "Python"),
    (".r", "R"),
    (".ruby", "Ruby"),
    (".rs", "Rust"),
    (".sc", "Scala"),
    (".sh", "Shell"),
    (".sql", "SQL"),
    (".swift", "Swift"),
    (".tex", "TeX"),
    (".ts", "TypeScript"),
];

/// Look up the language name for a dotted extension. Case-sensitive.
pub fn language_for_extension(ext: &str) -> Option<&'static str> {
    EXTENSIONS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, lang)| *lang)
}

/// Reverse lookup: find the extension whose language name matches,
/// ignoring case. Used to translate a classifier prediction back into
/// an extension the tokenizer adapter can map to a grammar.
pub fn extension_for_language(language: &str) -> Option<&'static str> {
    EXTENSIONS
        .iter()
        .find(|(_, lang)| lang.eq_ignore_ascii_case(language))
        .map(|(ext, _)| *ext)
}

#[cfg(test)]
#[path = "grammar_test.rs"]
mod tests;
