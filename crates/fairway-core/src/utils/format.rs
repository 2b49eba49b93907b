use std::cmp::Ordering;

/// Shown wherever a handicap could not be computed
pub const NO_HANDICAP: &str = "-";

/// Compare two names without regard to ASCII case
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.chars().map(|c| c.to_ascii_lowercase()))
}

/// Format a course or playing handicap for display.
/// Plus handicaps (below zero) are shown the golfing way, as "+2".
pub fn format_handicap(handicap: Option<i32>) -> String {
    match handicap {
        None => NO_HANDICAP.to_string(),
        Some(h) if h < 0 => format!("+{}", h.unsigned_abs()),
        Some(h) => h.to_string(),
    }
}

/// Format a handicap index to one decimal place
pub fn format_index(index: Option<f64>) -> String {
    match index {
        None => NO_HANDICAP.to_string(),
        Some(i) if i < 0.0 => format!("+{:.1}", i.abs()),
        Some(i) => format!("{:.1}", i),
    }
}

/// 1 -> "1st", 2 -> "2nd", 11 -> "11th", 23 -> "23rd"
pub fn ordinal(n: usize) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// Truncate a string to a maximum length, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}
