//! Natural-language time phrases to cron schedules
//!
//! Examples:
//! - `6am each morning` → `0 6 * * *`
//! - `3pm daily` → `0 15 * * *`
//! - `9:30am every Monday` → `30 9 * * 1`

use regex::Regex;
use std::sync::LazyLock;

// Allow expect here as the regex is compile-time verified to be valid
#[allow(clippy::expect_used)]
static TIME_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(\d{1,2})(?::(\d{2}))?\s*(am|pm)?").expect("constant regex pattern is valid")
});

/// Weekday names in the order they are checked, with their cron digit.
const WEEKDAYS: [(&str, &str); 7] = [
    ("monday", "1"),
    ("tuesday", "2"),
    ("wednesday", "3"),
    ("thursday", "4"),
    ("friday", "5"),
    ("saturday", "6"),
    ("sunday", "0"),
];

/// Translate a time phrase to `minute hour * * day-of-week`.
///
/// The first `H`, `H:MM`, `Ham` or `H:MMpm` in the phrase gives the time.
/// A weekday name restricts the schedule to that day; when several are named
/// the first one in Monday..Sunday order wins.
///
/// # Errors
///
/// Returns a message when the phrase contains no hour.
pub fn time_phrase_to_cron(phrase: &str) -> Result<String, String> {
    let lower = phrase.to_lowercase();

    let caps = TIME_PATTERN
        .captures(&lower)
        .ok_or_else(|| format!("Cannot parse time from '{phrase}'"))?;

    let mut hour: u32 = caps[1]
        .parse()
        .map_err(|_| format!("Cannot parse time from '{phrase}'"))?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m
            .as_str()
            .parse()
            .map_err(|_| format!("Cannot parse minute from '{phrase}'"))?,
        None => 0,
    };

    match caps.get(3).map(|m| m.as_str()) {
        Some("pm") if hour != 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }

    let day_of_week = WEEKDAYS
        .iter()
        .find(|(name, _)| lower.contains(name))
        .map_or("*", |(_, digit)| *digit);

    Ok(format!("{minute} {hour} * * {day_of_week}"))
}
