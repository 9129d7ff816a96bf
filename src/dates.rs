use chrono::NaiveDate;

/// Complete date formats tried against the raw text, in order
const FULL_FORMATS: &[&str] = &[
    "%B %d, %Y",
    "%b %d, %Y",
    "%d %B %Y",
    "%d %b %Y",
    "%Y-%m-%d",
    "%m/%d/%Y",
];

/// Month-year formats, applied after prefixing a day of 1
const MONTH_FORMATS: &[&str] = &["%d %B %Y", "%d %b %Y"];

/// Leniently parses the published-date text of a listing item.
///
/// The listing mixes full dates ("June 17, 2023") with bare month-year
/// stamps ("June 2023"); the latter resolve to the first of the month.
/// Returns `None` for anything that matches no known format.
pub fn parse_published(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    for format in FULL_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(text, format) {
            return Some(date);
        }
    }

    // Bare month-year: pin the day to 1 and retry
    let first_of_month = format!("1 {}", text);
    for format in MONTH_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&first_of_month, format) {
            return Some(date);
        }
    }

    None
}
