use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

const DATE_FORMAT: &str = "%Y-%m-%d";

static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap());

static DEADLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{4}-\d{2}-\d{2})(?:[ T]\d{2}:\d{2}(?::\d{2})?)?$").unwrap()
});

/// Check that `date` is a real calendar day written exactly as `YYYY-MM-DD`.
///
/// ```text
/// is_date_valid("2019-01-01") // true
/// is_date_valid("2016-02-29") // true
/// is_date_valid("2019-04-31") // false
/// is_date_valid("10.10.2010") // false
/// ```
pub fn is_date_valid(date: &str) -> bool {
    parse_date(date).is_some()
}

fn parse_date(date: &str) -> Option<NaiveDate> {
    if !DATE_RE.is_match(date) {
        return None;
    }
    NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
}

/// Calendar date of a stored deadline (`YYYY-MM-DD` with an optional time).
pub fn deadline_date(deadline: &str) -> Option<NaiveDate> {
    let caps = DEADLINE_RE.captures(deadline.trim())?;
    parse_date(caps.get(1)?.as_str())
}
