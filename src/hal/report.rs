//! Report formatters for a single Halstead metrics record.
//!
//! Prints the base counts (n₁, n₂, N₁, N₂) and the derived metrics as an
//! aligned table, or as pretty-printed JSON. The time estimate is
//! formatted as a human-readable duration (seconds → days).

use crate::error::AnalysisError;

use super::analyzer::HalsteadMetrics;

/// Format seconds as a human-readable duration string.
///
/// Uses the largest appropriate unit: seconds for <60s, minutes+seconds
/// for <1h, hours+minutes for <1d, days+hours for ≥1d.
/// Examples: "45s", "3m 20s", "2h 15m", "1d 4h".
pub(crate) fn format_time(seconds: f64) -> String {
    if seconds < 60.0 {
        format!("{seconds:.0}s")
    } else if seconds < 3600.0 {
        let m = (seconds / 60.0).floor();
        let s = (seconds % 60.0).round();
        format!("{m:.0}m {s:.0}s")
    } else if seconds < 86400.0 {
        let h = (seconds / 3600.0).floor();
        let m = ((seconds % 3600.0) / 60.0).round();
        format!("{h:.0}h {m:.0}m")
    } else {
        let d = (seconds / 86400.0).floor();
        let h = ((seconds % 86400.0) / 3600.0).round();
        format!("{d:.0}d {h:.0}h")
    }
}

/// Print the metrics as an aligned two-column table.
pub fn print_report(metrics: &HalsteadMetrics) {
    let separator = "-".repeat(44);

    println!("Halstead Complexity Metrics");
    println!("{separator}");
    println!(" {:<32} {:>10}", "Distinct operators (\u{03b7}\u{2081})", metrics.distinct_operators);
    println!(" {:<32} {:>10}", "Total operators (N\u{2081})", metrics.total_operators);
    println!(" {:<32} {:>10}", "Est. distinct operands (\u{03b7}\u{2082})", metrics.distinct_operands);
    println!(" {:<32} {:>10}", "Est. total operands (N\u{2082})", metrics.total_operands);
    println!("{separator}");
    println!(" {:<32} {:>10}", "Vocabulary", metrics.vocabulary);
    println!(" {:<32} {:>10}", "Length", metrics.length);
    println!(" {:<32} {:>10.2}", "Calculated length", metrics.calculated_length);
    println!(" {:<32} {:>10.2}", "Volume", metrics.volume);
    println!(" {:<32} {:>10.2}", "Difficulty", metrics.difficulty);
    println!(" {:<32} {:>10.2}", "Effort", metrics.effort);
    println!(" {:<32} {:>10}", "Time to program", format_time(metrics.time));
    println!(" {:<32} {:>10.4}", "Delivered bugs", metrics.bugs);
}

/// Serialize the metrics as pretty-printed JSON to stdout.
pub fn print_json(metrics: &HalsteadMetrics) -> Result<(), AnalysisError> {
    println!("{}", serde_json::to_string_pretty(metrics)?);
    Ok(())
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
