//! Calendar arithmetic helpers used by the projection loop.
//!
//! The projection advances month by month and repeatedly asks "how many days
//! between these two dates" and "this date plus N years". jiff `Span`
//! operations are correct but heavier than needed for a hot loop, so day
//! differences go through Rata Die day-numbering and year/month offsets use
//! direct calendar arithmetic with day-of-month clamping.

use jiff::civil::Date;

/// Fast leap year check.
#[inline]
pub fn is_leap_year(year: i16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

/// Days in a month without constructing a `jiff::civil::Date`.
#[inline]
pub fn days_in_month(year: i16, month: i8) -> i8 {
    const DAYS: [i8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS[(month - 1) as usize]
    }
}

/// Convert a civil date to a Rata Die day number (days since 0001-01-01).
///
/// Proleptic Gregorian algorithm; O(1) with no branches beyond the month
/// adjustment.
#[inline]
fn rata_die(d: Date) -> i32 {
    let y = d.year() as i32;
    let m = d.month() as i32;
    let day = d.day() as i32;

    // Shift March = month 1 so Feb (end of "year") is month 12
    let a = (14 - m) / 12;
    let y2 = y - a;
    let m2 = m + 12 * a - 3;

    day + (153 * m2 + 2) / 5 + 365 * y2 + y2 / 4 - y2 / 100 + y2 / 400 - 306
}

/// Number of days between two dates (d2 - d1), positive when `d2 > d1`.
#[inline]
pub fn days_between(d1: Date, d2: Date) -> i32 {
    rata_die(d2) - rata_die(d1)
}

/// Fractional calendar years between two dates (d2 - d1), using the mean
/// Gregorian year length of 365.25 days.
#[inline]
pub fn years_between(d1: Date, d2: Date) -> f64 {
    f64::from(days_between(d1, d2)) / 365.25
}

/// Add `n` calendar years, clamping the day to the target month's length
/// (Feb 29 + 1 year = Feb 28).
#[inline]
pub fn add_years(d: Date, n: i32) -> Date {
    let year = (d.year() as i32 + n) as i16;
    let day = d.day().min(days_in_month(year, d.month()));
    jiff::civil::date(year, d.month(), day)
}

/// Add `n` calendar months, clamping the day to the target month's length.
#[inline]
pub fn add_months(d: Date, n: i32) -> Date {
    let zero_based = d.year() as i32 * 12 + (d.month() as i32 - 1) + n;
    let year = zero_based.div_euclid(12) as i16;
    let month = (zero_based.rem_euclid(12) + 1) as i8;
    let day = d.day().min(days_in_month(year, month));
    jiff::civil::date(year, month, day)
}
