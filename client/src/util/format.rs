//! Display formatting for activity fields.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

const MISSING: &str = "-";

pub fn duration_label(minutes: Option<i64>) -> String {
    minutes.map_or_else(|| MISSING.to_owned(), |m| format!("{m} min"))
}

pub fn calories_label(calories: Option<i64>) -> String {
    calories.map_or_else(|| MISSING.to_owned(), |c| format!("{c} kcal"))
}

/// Shorten an ISO-8601 timestamp to `YYYY-MM-DD HH:MM`.
///
/// Values that do not look like ISO timestamps are returned unchanged.
pub fn timestamp_label(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return MISSING.to_owned();
    };
    match raw.split_once('T') {
        Some((date, time)) if date.len() == 10 => time
            .get(..5)
            .map_or_else(|| raw.to_owned(), |hm| format!("{date} {hm}")),
        _ => raw.to_owned(),
    }
}
