//! Display Formatting
//!
//! Fallback strings and number formatting shared by every card layout.

pub const NO_TITLE: &str = "No Title";
pub const NO_COMPANY: &str = "No Company Name";
pub const NOT_AVAILABLE: &str = "N/A";
pub const NOT_DISCLOSED: &str = "Not Disclosed";
pub const NO_DESCRIPTION: &str = "No description available.";
pub const NO_RESULTS: &str = "No matching internships found. Please try different criteria.";
pub const ERROR_PREFIX: &str = "Error:";

/// 10^3: three fraction digits, same as the browser's default number format
const FRACTION_SCALE: f64 = 1000.0;

/// Largest scaled amount that still fits a `u128`
const MAX_EXACT_SCALED: f64 = 1e36;

/// Use `value` unless it is absent or empty
pub fn or_fallback(value: Option<&str>, fallback: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => fallback.to_string(),
    }
}

/// Monthly stipend in rupees. Zero counts as disclosed.
pub fn format_stipend(stipend: Option<f64>) -> String {
    match stipend {
        Some(amount) if amount.is_finite() => format!("₹{} /month", format_en_in(amount)),
        _ => NOT_DISCLOSED.to_string(),
    }
}

/// Match score rounded to a whole number (half away from zero)
pub fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) if s.is_finite() => format!("{}", s.round() as i64),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Format a number with Indian digit grouping (`12,34,567.5`)
pub fn format_en_in(amount: f64) -> String {
    // Half away from zero on the scaled value; `{:.3}` would round ties to even
    let scaled = (amount.abs() * FRACTION_SCALE).round();
    let (int_part, frac_part) = if scaled < MAX_EXACT_SCALED {
        let scaled = scaled as u128;
        let frac = format!("{:03}", scaled % 1000);
        ((scaled / 1000).to_string(), frac.trim_end_matches('0').to_string())
    } else {
        (format!("{:.0}", amount.abs()), String::new())
    };

    let mut out = String::new();
    if amount < 0.0 && (int_part != "0" || !frac_part.is_empty()) {
        out.push('-');
    }
    out.push_str(&group_indian(&int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(&frac_part);
    }
    out
}

// Last three digits, then pairs
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);

    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
