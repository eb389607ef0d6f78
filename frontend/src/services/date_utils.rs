use chrono::{Datelike, NaiveDate};
use js_sys::Date;

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

/// Get current date in YYYY-MM-DD format
pub fn get_current_date() -> String {
    format_iso_date(today())
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// "2026년 2월 9일", used for leave dates on the members page
pub fn format_korean_date(date: &str) -> String {
    match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => format!("{}년 {}월 {}일", d.year(), d.month(), d.day()),
        Err(_) => date.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    #[wasm_bindgen_test]
    fn test_today_matches_js_date() {
        let now = Date::new_0();
        assert_eq!(today().day(), now.get_date());
        assert_eq!(get_current_date().len(), 10);
    }

    #[wasm_bindgen_test]
    fn test_format_korean_date() {
        assert_eq!(format_korean_date("2026-02-09"), "2026년 2월 9일");
        assert_eq!(format_korean_date("not a date"), "not a date");
    }
}
