//! ISO-8601 week arithmetic used to label and navigate weeks.
//!
//! Three representations of a week travel through the app:
//! - the identifier the backend stores per week (`"2026-W06"`),
//! - the Monday sent as `week_start` (`2026-02-02`),
//! - the label people read (`2월 2일(월)`).
//!
//! Week 1 of an ISO year is the week containing January 4th, so the Monday of
//! any week is found by taking the Monday of January 4th and stepping forward
//! `week - 1` weeks.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::WeekError;

/// Language used for week and date labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekLocale {
    #[default]
    Korean,
    English,
}

/// An ISO (year, week) pair, serialized as `YYYY-Www`.
///
/// Internally the week is kept as its Monday, which makes the
/// identifier/Monday mapping a bijection by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WeekId {
    monday: NaiveDate,
}

impl WeekId {
    /// Build a week from its ISO year and week number.
    pub fn new(year: i32, week: u32) -> Result<Self, WeekError> {
        if week == 0 || week > weeks_in_year(year) {
            return Err(WeekError::WeekOutOfRange { year, week });
        }
        iso_week_monday(year, week)
            .map(|monday| WeekId { monday })
            .ok_or(WeekError::WeekOutOfRange { year, week })
    }

    /// The week containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        WeekId {
            monday: monday_of(date),
        }
    }

    /// ISO year, which differs from the calendar year around New Year.
    pub fn year(&self) -> i32 {
        self.monday.iso_week().year()
    }

    pub fn week(&self) -> u32 {
        self.monday.iso_week().week()
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }
}

impl fmt::Display for WeekId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-W{:02}", self.year(), self.week())
    }
}

impl FromStr for WeekId {
    type Err = WeekError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, week) = parse_identifier(s)?;
        WeekId::new(year, week)
    }
}

impl TryFrom<String> for WeekId {
    type Error = WeekError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<WeekId> for String {
    fn from(week: WeekId) -> Self {
        week.to_string()
    }
}

fn parse_identifier(s: &str) -> Result<(i32, u32), WeekError> {
    let invalid = || WeekError::InvalidFormat(s.to_string());
    let (year, week) = s.split_once("-W").ok_or_else(invalid)?;

    let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    if year.len() != 4 || week.len() != 2 || !all_digits(year) || !all_digits(week) {
        return Err(invalid());
    }

    let year = year.parse::<i32>().map_err(|_| invalid())?;
    let week = week.parse::<u32>().map_err(|_| invalid())?;
    Ok((year, week))
}

/// January 4th anchoring; `None` only outside chrono's date range.
fn iso_week_monday(year: i32, week: u32) -> Option<NaiveDate> {
    let jan4 = NaiveDate::from_ymd_opt(year, 1, 4)?;
    monday_of(jan4).checked_add_days(Days::new(u64::from(week.saturating_sub(1)) * 7))
}

/// Monday of the ISO week containing `date`. Sunday counts as day 7.
pub fn monday_of(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().number_from_monday();
    date - Duration::days(i64::from(weekday) - 1)
}

/// Midnight on the Monday of the week containing `moment`.
pub fn monday_of_datetime(moment: NaiveDateTime) -> NaiveDateTime {
    monday_of(moment.date()).and_time(NaiveTime::MIN)
}

/// Monday for a `YYYY-Www` identifier.
pub fn iso_week_to_monday(identifier: &str) -> Result<NaiveDate, WeekError> {
    identifier.parse::<WeekId>().map(|week| week.monday())
}

/// Number of ISO weeks in `year` (52 or 53). December 28th always falls in
/// the last week.
pub fn weeks_in_year(year: i32) -> u32 {
    NaiveDate::from_ymd_opt(year, 12, 28)
        .map(|d| d.iso_week().week())
        .unwrap_or(52)
}

/// Whole weeks from the week of `from` to the week of `to`.
pub fn weeks_between(from: NaiveDate, to: NaiveDate) -> i64 {
    (monday_of(to) - monday_of(from)).num_days() / 7
}

fn korean_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
        Weekday::Sun => "일",
    }
}

/// Short "month day (weekday)" label, e.g. `2월 9일(월)` or `Feb 9 (Mon)`.
pub fn monday_to_display_label(monday: NaiveDate, locale: WeekLocale) -> String {
    match locale {
        WeekLocale::Korean => format!(
            "{}월 {}일({})",
            monday.month(),
            monday.day(),
            korean_weekday(monday.weekday())
        ),
        WeekLocale::English => monday.format("%b %-d (%a)").to_string(),
    }
}

/// Label for a stored week identifier, e.g. `"2026-W06"` → `2월 2일(월) 주차`.
/// Identifiers that do not parse are shown as they are.
pub fn week_label_to_display(identifier: &str, locale: WeekLocale) -> String {
    match identifier.parse::<WeekId>() {
        Ok(week) => {
            let label = monday_to_display_label(week.monday(), locale);
            match locale {
                WeekLocale::Korean => format!("{} 주차", label),
                WeekLocale::English => format!("Week of {}", label),
            }
        }
        Err(_) => identifier.to_string(),
    }
}

/// One selectable week in a week window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekOption {
    pub monday: NaiveDate,
    pub label: String,
}

impl WeekOption {
    pub fn new(monday: NaiveDate, locale: WeekLocale) -> Self {
        Self {
            monday,
            label: monday_to_display_label(monday, locale),
        }
    }

    /// The `week_start` value the backend expects (`YYYY-MM-DD`).
    pub fn value(&self) -> String {
        self.monday.format("%Y-%m-%d").to_string()
    }

    pub fn week_id(&self) -> WeekId {
        WeekId::from_date(self.monday)
    }
}

/// Weeks around `today`: `future_count` upcoming weeks (furthest first)
/// followed by `past_count` weeks starting at the current one and going back.
///
/// `past_count` is floored at 1 so the current week is always offered.
pub fn generate_week_window(
    today: NaiveDate,
    past_count: u32,
    future_count: u32,
    locale: WeekLocale,
) -> Vec<WeekOption> {
    let this_monday = monday_of(today);
    let past_count = past_count.max(1);

    let future = (1..=future_count)
        .rev()
        .map(|n| this_monday + Duration::weeks(i64::from(n)));
    let past = (0..past_count).map(|n| this_monday - Duration::weeks(i64::from(n)));

    future
        .chain(past)
        .map(|monday| WeekOption::new(monday, locale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_monday_of_every_weekday() {
        // 2026-02-02 is a Monday
        for offset in 0..7 {
            let day = date(2026, 2, 2) + Duration::days(offset);
            assert_eq!(monday_of(day), date(2026, 2, 2), "offset {}", offset);
        }
        // Sunday belongs to the week that started six days earlier
        assert_eq!(monday_of(date(2026, 2, 1)), date(2026, 1, 26));
    }

    #[test]
    fn test_monday_of_is_idempotent_and_always_monday() {
        let mut day = date(2019, 12, 1);
        while day < date(2028, 2, 1) {
            let monday = monday_of(day);
            assert_eq!(monday.weekday(), Weekday::Mon);
            assert_eq!(monday_of(monday), monday);
            assert!(monday <= day && (day - monday).num_days() < 7);
            day = day + Duration::days(1);
        }
    }

    #[test]
    fn test_monday_of_datetime_truncates_to_midnight() {
        let moment = date(2026, 2, 5).and_hms_opt(18, 45, 12).unwrap();
        assert_eq!(
            monday_of_datetime(moment),
            date(2026, 2, 2).and_hms_opt(0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_known_weeks_of_2026() {
        // 2026 starts on a Thursday, so week 1 begins on 2025-12-29
        assert_eq!(iso_week_to_monday("2026-W01").unwrap(), date(2025, 12, 29));
        assert_eq!(iso_week_to_monday("2026-W06").unwrap(), date(2026, 2, 2));
        assert_eq!(iso_week_to_monday("2026-W07").unwrap(), date(2026, 2, 9));
        assert_eq!(iso_week_to_monday("2026-W10").unwrap(), date(2026, 3, 2));
    }

    #[test]
    fn test_year_boundaries() {
        // Week 1 starting in the previous Gregorian year
        assert_eq!(iso_week_to_monday("2025-W01").unwrap(), date(2024, 12, 30));
        assert_eq!(iso_week_to_monday("2019-W01").unwrap(), date(2018, 12, 31));
        // 53-week years
        assert_eq!(iso_week_to_monday("2026-W53").unwrap(), date(2026, 12, 28));
        assert_eq!(iso_week_to_monday("2027-W01").unwrap(), date(2027, 1, 4));
        assert_eq!(iso_week_to_monday("2020-W53").unwrap(), date(2020, 12, 28));
        assert_eq!(iso_week_to_monday("2021-W01").unwrap(), date(2021, 1, 4));
        assert_eq!(iso_week_to_monday("2015-W53").unwrap(), date(2015, 12, 28));
    }

    #[test]
    fn test_weeks_in_year() {
        assert_eq!(weeks_in_year(2015), 53);
        assert_eq!(weeks_in_year(2020), 53);
        assert_eq!(weeks_in_year(2025), 52);
        assert_eq!(weeks_in_year(2026), 53);
        assert_eq!(weeks_in_year(2027), 52);
    }

    #[test]
    fn test_identifier_round_trip() {
        let mut day = date(2014, 12, 1);
        while day < date(2033, 1, 15) {
            let identifier = WeekId::from_date(day).to_string();
            assert_eq!(
                iso_week_to_monday(&identifier).unwrap(),
                monday_of(day),
                "{} ({})",
                day,
                identifier
            );
            day = day + Duration::days(1);
        }
    }

    #[test]
    fn test_week_id_reports_iso_year() {
        // 2024-12-30 is in week 1 of ISO year 2025
        let week = WeekId::from_date(date(2024, 12, 31));
        assert_eq!(week.year(), 2025);
        assert_eq!(week.week(), 1);
        assert_eq!(week.to_string(), "2025-W01");
        // 2027-01-01 is still in week 53 of 2026
        assert_eq!(WeekId::from_date(date(2027, 1, 1)).to_string(), "2026-W53");
    }

    #[test]
    fn test_invalid_identifiers() {
        for bad in ["", "2026", "2026-06", "2026-W6", "26-W06", "2026-w06", "2026-W0a", " 2026-W06"] {
            assert_eq!(
                iso_week_to_monday(bad),
                Err(WeekError::InvalidFormat(bad.to_string())),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn test_out_of_range_weeks() {
        assert_eq!(
            iso_week_to_monday("2026-W00"),
            Err(WeekError::WeekOutOfRange { year: 2026, week: 0 })
        );
        assert_eq!(
            iso_week_to_monday("2025-W53"),
            Err(WeekError::WeekOutOfRange { year: 2025, week: 53 })
        );
        assert!(iso_week_to_monday("2026-W54").is_err());
    }

    #[test]
    fn test_week_id_serde() {
        let week: WeekId = serde_json::from_str("\"2026-W10\"").unwrap();
        assert_eq!(week.monday(), date(2026, 3, 2));
        assert_eq!(serde_json::to_string(&week).unwrap(), "\"2026-W10\"");
        assert!(serde_json::from_str::<WeekId>("\"2026-10\"").is_err());
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(
            monday_to_display_label(date(2026, 2, 9), WeekLocale::Korean),
            "2월 9일(월)"
        );
        assert_eq!(
            monday_to_display_label(date(2026, 2, 9), WeekLocale::English),
            "Feb 9 (Mon)"
        );
        assert_eq!(
            week_label_to_display("2026-W06", WeekLocale::Korean),
            "2월 2일(월) 주차"
        );
        assert_eq!(
            week_label_to_display("2026-W06", WeekLocale::English),
            "Week of Feb 2 (Mon)"
        );
        assert_eq!(week_label_to_display("unknown", WeekLocale::Korean), "unknown");
    }

    #[test]
    fn test_week_window_shape() {
        let today = date(2026, 2, 5);
        let window = generate_week_window(today, 16, 4, WeekLocale::Korean);

        assert_eq!(window.len(), 20);
        // Furthest future week first, then the current week
        assert_eq!(window[0].monday, date(2026, 3, 2));
        assert_eq!(window[3].monday, date(2026, 2, 9));
        assert_eq!(window[4].monday, date(2026, 2, 2));
        assert_eq!(window[4].value(), "2026-02-02");
        assert_eq!(window[4].label, "2월 2일(월)");

        for pair in window.windows(2) {
            assert_eq!((pair[0].monday - pair[1].monday).num_days(), 7);
        }
        let unique: HashSet<_> = window.iter().map(|w| w.monday).collect();
        assert_eq!(unique.len(), window.len());
    }

    #[test]
    fn test_week_window_lengths() {
        let today = date(2026, 12, 31);
        for past in 1..5 {
            for future in 0..5 {
                let window = generate_week_window(today, past, future, WeekLocale::English);
                assert_eq!(window.len() as u32, past + future);
                assert_eq!(window[future as usize].monday, monday_of(today));
            }
        }
        // A zero past count still offers the current week
        let window = generate_week_window(today, 0, 2, WeekLocale::English);
        assert_eq!(window.len(), 3);
        assert_eq!(window[2].week_id().to_string(), "2026-W53");
    }

    #[test]
    fn test_weeks_between() {
        assert_eq!(weeks_between(date(2026, 2, 5), date(2026, 3, 2)), 4);
        assert_eq!(weeks_between(date(2026, 2, 5), date(2026, 2, 1)), -1);
        assert_eq!(weeks_between(date(2026, 12, 30), date(2027, 1, 4)), 1);
    }
}
