use std::collections::HashSet;

use serde::Serialize;
use tracing::debug;

/// Operand-to-operator ratio. Operand tokens are not extracted in a
/// second pass; distinct and total operand counts are estimated by
/// scaling the operator counts with this constant.
const OTO: f64 = 1.54;

/// Halstead complexity metrics computed from an operator sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HalsteadMetrics {
    pub distinct_operators: usize, // n1
    pub total_operators: usize,    // N1
    pub distinct_operands: usize,  // n2 = floor(OTO * n1), estimated
    pub total_operands: usize,     // N2 = floor(OTO * N1), estimated
    pub vocabulary: usize,         // n1 * n2
    pub length: usize,             // n1 * n2 as well, see below
    pub calculated_length: f64,    // n1*log2(n1) + n2*log2(n2)
    pub volume: f64,               // length * log2(vocabulary)
    pub difficulty: f64,           // (n1/2) * (N2/n2)
    pub effort: f64,               // difficulty * volume
    pub time: f64,                 // effort / 18 (seconds)
    pub bugs: f64,                 // volume / 3000
}

impl HalsteadMetrics {
    fn zeroed() -> Self {
        Self {
            distinct_operators: 0,
            total_operators: 0,
            distinct_operands: 0,
            total_operands: 0,
            vocabulary: 0,
            length: 0,
            calculated_length: 0.0,
            volume: 0.0,
            difficulty: 0.0,
            effort: 0.0,
            time: 0.0,
            bugs: 0.0,
        }
    }
}

/// Compute Halstead metrics from operator occurrences (source order,
/// duplicates retained). An empty sequence short-circuits to an
/// all-zero record: vocabulary would be 0 and log2(0) is undefined, so
/// the degenerate case must not reach the floating-point formulas.
pub fn compute(operators: &[String]) -> HalsteadMetrics {
    let n1 = operators.iter().collect::<HashSet<_>>().len();
    let big_n1 = operators.len();

    if n1 == 0 {
        return HalsteadMetrics::zeroed();
    }

    let n2 = (OTO * n1 as f64).floor() as usize;
    let big_n2 = (OTO * big_n1 as f64).floor() as usize;

    let vocabulary = n1 * n2;
    // Length shares the n1*n2 product with vocabulary (not N1 + N2).
    let length = n1 * n2;
    let calculated_length =
        n1 as f64 * (n1 as f64).log2() + n2 as f64 * (n2 as f64).log2();
    let volume = length as f64 * (vocabulary as f64).log2();
    // n1 >= 1 implies n2 >= 1, so the ratio below is always defined.
    let difficulty = (n1 as f64 / 2.0) * (big_n2 as f64 / n2 as f64);
    let effort = difficulty * volume;
    // Stroud number: 18 elementary mental discriminations per second.
    let time = effort / 18.0;
    // Halstead's delivered bugs estimate (B = V / 3000).
    let bugs = volume / 3000.0;

    debug!(n1, n2, big_n1, big_n2, "operator/operand counts");
    debug!(
        vocabulary,
        length, calculated_length, volume, difficulty, effort, time, bugs, "derived metrics"
    );

    HalsteadMetrics {
        distinct_operators: n1,
        total_operators: big_n1,
        distinct_operands: n2,
        total_operands: big_n2,
        vocabulary,
        length,
        calculated_length,
        volume,
        difficulty,
        effort,
        time,
        bugs,
    }
}

#[cfg(test)]
#[path = "analyzer_test.rs"]
mod tests;
