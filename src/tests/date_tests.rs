use crate::dates::parse_published;
use chrono::NaiveDate;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn month_year_resolves_to_first_of_month() {
    assert_eq!(parse_published("June 2023"), Some(date(2023, 6, 1)));
    assert_eq!(parse_published("Jun 2023"), Some(date(2023, 6, 1)));
    assert_eq!(parse_published("December 1999"), Some(date(1999, 12, 1)));
}

#[test]
fn full_dates_parse() {
    assert_eq!(parse_published("June 17, 2023"), Some(date(2023, 6, 17)));
    assert_eq!(parse_published("17 June 2023"), Some(date(2023, 6, 17)));
    assert_eq!(parse_published("2023-06-17"), Some(date(2023, 6, 17)));
    assert_eq!(parse_published("06/17/2023"), Some(date(2023, 6, 17)));
}

#[test]
fn surrounding_whitespace_is_ignored() {
    assert_eq!(parse_published("  June 2023  "), Some(date(2023, 6, 1)));
    assert_eq!(parse_published("\nJune 17, 2023\n"), Some(date(2023, 6, 17)));
}

#[test]
fn unparseable_text_is_rejected() {
    assert_eq!(parse_published(""), None);
    assert_eq!(parse_published("   "), None);
    assert_eq!(parse_published("coming soon"), None);
    assert_eq!(parse_published("Book 1"), None);
}
