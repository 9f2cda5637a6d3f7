//! Ordinal day rendering

/// English ordinal suffix for a day of the month
///
/// Days 10 through 14 always take "th"; otherwise the last digit decides.
pub fn ordinal_suffix(day: u32) -> &'static str {
    if (10..=14).contains(&day) {
        return "th";
    }

    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Render a day with its ordinal suffix (`1st`, `12th`, `23rd`)
pub fn ordinalize(day: u32) -> String {
    format!("{}{}", day, ordinal_suffix(day))
}
