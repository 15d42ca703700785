//! Loose story-date parsing for the timeline rules.
//!
//! Manuscript dates are free text: real calendar dates, relative markers
//! like `Day 12`, or era markers like `Year 3`. Everything is normalized to
//! a single day-ordinal axis so ordering and gap arithmetic work across one
//! manuscript's convention. Unparsable dates resolve to `None` and are
//! excluded from order/gap analysis rather than raising.

use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4})-(\d{1,2})-(\d{1,2})$").unwrap());
static DAY_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^day\s+(\d+)$").unwrap());
static YEAR_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^year\s+(\d+)$").unwrap());

/// Fallback calendar formats tried after the explicit patterns.
const FALLBACK_FORMATS: &[&str] = &["%B %d, %Y", "%b %d, %Y", "%d %B %Y", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse a free-text story date into a day ordinal, or `None`.
///
/// Calendar dates map to days-from-CE; `Day N` maps to `N`; `Year N` maps to
/// `N * 365`. The scales only need to be consistent within one manuscript.
pub fn parse_story_date(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Some(caps) = ISO_DATE.captures(trimmed) {
        let year: i32 = caps[1].parse().ok()?;
        let month: u32 = caps[2].parse().ok()?;
        let day: u32 = caps[3].parse().ok()?;
        return NaiveDate::from_ymd_opt(year, month, day).map(|d| i64::from(d.num_days_from_ce()));
    }

    if let Some(caps) = DAY_MARKER.captures(trimmed) {
        return caps[1].parse::<i64>().ok();
    }

    if let Some(caps) = YEAR_MARKER.captures(trimmed) {
        return caps[1].parse::<i64>().ok().map(|year| year * 365);
    }

    for format in FALLBACK_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(i64::from(date.num_days_from_ce()));
        }
    }

    None
}
