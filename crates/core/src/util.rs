use chrono::{Datelike, Duration, NaiveDate};

/// Round a currency amount to 2 decimal places.
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Number of days in a given month. Returns `None` for an invalid month.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    let first_of_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some((first_of_next - Duration::days(1)).day())
}

/// Build a date, clamping the day to the end of the month
/// (day 31 in April lands on the 30th).
/// Returns `None` for an invalid month or a zero day.
pub fn clamped_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    if day == 0 {
        return None;
    }
    let last = days_in_month(year, month)?;
    NaiveDate::from_ymd_opt(year, month, day.min(last))
}

/// Add calendar months to a date, rolling year boundaries
/// (October + 3 months = January of the next year) and clamping the day.
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    let mut year = date.year();
    let mut month = date.month() as i32 + months as i32;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    // month is in 1..=12 here, so clamped_date cannot fail for day >= 1
    clamped_date(year, month as u32, date.day()).unwrap_or(date)
}
