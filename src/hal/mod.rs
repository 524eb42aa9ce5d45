/// Halstead complexity metrics module.
///
/// Derives vocabulary, length, volume, difficulty, effort, estimated
/// time, and estimated delivered bugs from an operator occurrence
/// sequence. Operands are not extracted separately; they are estimated
/// from operator counts via a fixed ratio.
mod analyzer;
pub(crate) mod report;

pub use analyzer::{HalsteadMetrics, compute};
