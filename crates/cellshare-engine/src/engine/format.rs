/// Magnitude at which values switch to scientific notation.
const SCIENTIFIC_THRESHOLD: f64 = 1e15;

/// Format a cell value for display.
///
/// Finite values are rounded to `precision` decimal places and trailing zeros
/// are dropped, so whole numbers print without a fractional part. Values of
/// magnitude 1e15 and above print in shortest scientific form (`1e300`).
pub fn format_number(n: f64, precision: usize) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "inf" } else { "-inf" }.to_string()
    } else if n.abs() >= SCIENTIFIC_THRESHOLD {
        format!("{:e}", n)
    } else {
        let fixed = format!("{:.*}", precision, n);
        let trimmed = if fixed.contains('.') {
            fixed.trim_end_matches('0').trim_end_matches('.')
        } else {
            fixed.as_str()
        };
        match trimmed {
            "-0" => "0".to_string(),
            other => other.to_string(),
        }
    }
}
