//! Failure taxonomy for the analysis pipeline.
//!
//! Every variant aborts the run for that invocation; there is no
//! partial-result mode. Callers can match on the variant to tell an
//! input-contract violation apart from a classifier or tokenizer failure.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AnalysisError {
    /// Caller supplied both a file path and inline source, or neither.
    /// Checked before any I/O is attempted.
    #[error("provide a file path OR inline source code, not both and not neither")]
    InvalidInput,

    /// The external language classifier could not be spawned or exited
    /// abnormally. Classification is best-effort; there is no retry.
    #[error("language classifier unavailable: {0}")]
    ClassifierUnavailable(String),

    /// Neither the extension lookup nor the classifier produced a usable
    /// grammar identifier. Distinct from `ClassifierUnavailable`: the
    /// classifier ran, but no mapping existed for its prediction.
    #[error("could not resolve a grammar for the input")]
    UnresolvedGrammar,

    /// The external tokenizer rejected the grammar/text pairing.
    #[error("tokenization failed: {0}")]
    Tokenization(String),

    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot serialize metrics: {0}")]
    Serialize(#[from] serde_json::Error),
}
