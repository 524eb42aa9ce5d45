//! Operator extraction from scoped token streams.

use crate::tokenize::Token;

/// Collect the values of operator tokens, in source order, duplicates
/// retained. A token qualifies when at least one of its scopes contains
/// the substring `"operator"` (scope names are compound, e.g.
/// `keyword.operator.arithmetic`); a token matching on several scopes is
/// still emitted once.
pub fn extract_operators(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter(|token| token.scopes.iter().any(|scope| scope.contains("operator")))
        .map(|token| token.value.clone())
        .collect()
}
