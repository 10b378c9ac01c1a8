/*!
Exact Gregorian calendar arithmetic.

Everything here is a pure function of its arguments. Weekdays are numbered
with Sunday as `0` through Saturday as `6`, and that convention is used
consistently across this crate: the `%w` directive, the weekday name tables
and [`weekday`] all agree.

The [`weekday`] computation deliberately counts whole years from a fixed
anchor date instead of using a closed-form Julian day formula. The count is
signed, so it produces the same answer arbitrarily far forward or backward
from the anchor.
*/

/// The number of days in each month of a common year, January first.
const DAYS_BY_MONTH: [i64; 12] =
    [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// The weekday of the anchor date, January 1, 2000.
///
/// That day was a Saturday, which is `6` in Sunday-is-zero numbering.
const ANCHOR_WEEKDAY: i64 = 6;

/// Returns true if and only if the given year is a leap year.
///
/// A leap year is a year with 366 days. Typical years have 365 days.
///
/// # Example
///
/// ```
/// use strtime::calendar::is_leap_year;
///
/// assert!(is_leap_year(2000));
/// assert!(!is_leap_year(1900));
/// ```
pub fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Returns the number of days in the given year: 366 for leap years and 365
/// otherwise.
pub fn days_in_year(year: i64) -> i64 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Returns the number of days in the given year and month.
///
/// This correctly returns `29` when the year is a leap year and the month is
/// February.
///
/// # Panics
///
/// When `month` is not in the range `1..=12`.
pub fn days_in_month(year: i64, month: i64) -> i64 {
    assert!(
        1 <= month && month <= 12,
        "month must be in range 1..=12, but got {month}",
    );
    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_BY_MONTH[(month - 1) as usize]
    }
}

/// Returns the day of the year for the given date, in the range `1..=366`.
///
/// The `day` given is not checked against the length of the month. Callers
/// that need day-of-month validation do it separately, against
/// [`days_in_month`].
///
/// # Panics
///
/// When `month` is not in the range `1..=12`.
///
/// # Example
///
/// ```
/// use strtime::calendar::day_of_year;
///
/// assert_eq!(day_of_year(2020, 1, 1), 1);
/// assert_eq!(day_of_year(2020, 12, 23), 358);
/// ```
pub fn day_of_year(year: i64, month: i64, day: i64) -> i64 {
    assert!(
        1 <= month && month <= 12,
        "month must be in range 1..=12, but got {month}",
    );
    let mut days = day;
    for m in 1..month {
        days += DAYS_BY_MONTH[(m - 1) as usize];
    }
    if month > 2 && is_leap_year(year) {
        days += 1;
    }
    days
}

/// Returns the weekday for the given date, with Sunday as `0` through
/// Saturday as `6`.
///
/// The result comes from counting days between the given date and January 1,
/// 2000 (a Saturday): backward for earlier years, forward otherwise. The
/// count is exact for any year, including years before the anchor.
///
/// # Panics
///
/// When `month` is not in the range `1..=12`.
///
/// # Example
///
/// ```
/// use strtime::calendar::weekday;
///
/// // 2020-12-23 was a Wednesday.
/// assert_eq!(weekday(2020, 12, 23), 3);
/// ```
pub fn weekday(year: i64, month: i64, day: i64) -> i64 {
    let doy = day_of_year(year, month, day);
    if year < 2000 {
        // Days from the given date to the end of its year, then whole years
        // up to (but not including) 2000. The total is a backward count, so
        // it is subtracted from the anchor.
        let mut days = days_in_year(year) - doy + 1;
        for y in (year + 1)..2000 {
            days += days_in_year(y);
        }
        (ANCHOR_WEEKDAY - days).rem_euclid(7)
    } else {
        // Days elapsed in the given year, plus whole years since 2000.
        let mut days = doy - 1;
        for y in 2000..year {
            days += days_in_year(y);
        }
        (ANCHOR_WEEKDAY + days).rem_euclid(7)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn t_is_leap_year() {
        assert!(is_leap_year(1600));
        assert!(is_leap_year(1796));
        assert!(!is_leap_year(1800));
        assert!(!is_leap_year(1900));
        assert!(is_leap_year(1996));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(2023));
        assert!(is_leap_year(2024));
        assert!(!is_leap_year(2025));
        assert!(!is_leap_year(2100));
        assert!(!is_leap_year(2200));
        assert!(!is_leap_year(2300));
        assert!(is_leap_year(2400));
        assert!(!is_leap_year(2500));
    }

    #[test]
    fn t_days_in_month() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2000, 2), 29);
        let common: i64 =
            (1..=12).map(|month| days_in_month(2023, month)).sum();
        assert_eq!(common, 365);
        let leap: i64 = (1..=12).map(|month| days_in_month(2024, month)).sum();
        assert_eq!(leap, 366);
    }

    #[test]
    fn t_day_of_year() {
        // One date per month, with the leap day correction kicking in only
        // after February of a leap year.
        let prefix =
            |n: usize| -> i64 { DAYS_BY_MONTH[..n].iter().copied().sum() };
        let table = [
            (1995, 1, 10, prefix(0) + 10),
            (1996, 2, 11, prefix(1) + 11), // leap year, but no leap day yet
            (1997, 3, 12, prefix(2) + 12),
            (1998, 4, 13, prefix(3) + 13),
            (1999, 5, 14, prefix(4) + 14),
            (2000, 6, 15, prefix(5) + 15 + 1),
            (2001, 7, 16, prefix(6) + 16),
            (2002, 8, 17, prefix(7) + 17),
            (2003, 9, 18, prefix(8) + 18),
            (2004, 10, 19, prefix(9) + 19 + 1),
            (2005, 11, 20, prefix(10) + 20),
            (2006, 12, 21, prefix(11) + 21),
        ];
        for (year, month, day, expected) in table {
            assert_eq!(
                day_of_year(year, month, day),
                expected,
                "day_of_year({year}, {month}, {day})",
            );
        }
        assert_eq!(day_of_year(2000, 12, 31), 366);
        assert_eq!(day_of_year(2001, 12, 31), 365);
    }

    #[test]
    fn t_weekday_years_before_anchor() {
        // Walking backward one year at a time from the anchor.
        let mut days: i64 = 0;
        for year in (1990..2000).rev() {
            days += days_in_year(year);
            assert_eq!(
                weekday(year, 1, 1),
                (6 - days).rem_euclid(7),
                "weekday({year}, 1, 1)",
            );
        }
    }

    #[test]
    fn t_weekday_years_from_anchor() {
        // Walking forward one year at a time from the anchor.
        let mut days: i64 = 0;
        for year in 2000..2010 {
            assert_eq!(
                weekday(year, 1, 1),
                (6 + days).rem_euclid(7),
                "weekday({year}, 1, 1)",
            );
            days += days_in_year(year);
        }
    }

    #[test]
    fn t_weekday_spot_check() {
        let table = [
            (1601, 1, 1, 1),
            (1800, 1, 1, 3),
            (1800, 12, 31, 3),
            (1801, 1, 1, 4),
            (1801, 12, 31, 4),
            (1834, 1, 1, 3),
            (1834, 12, 31, 3),
            (1900, 1, 1, 1),
            (1900, 6, 15, 5),
            (1932, 1, 1, 5),
            (1932, 6, 15, 3),
            (1937, 1, 1, 5),
            (1937, 6, 15, 2),
            (1954, 1, 1, 5),
            (1954, 6, 15, 2),
            (1972, 1, 1, 6),
            (1972, 6, 15, 4),
            (1980, 1, 1, 2),
            (1980, 6, 15, 0),
            (1991, 1, 1, 2),
            (1991, 6, 15, 6),
            (2000, 1, 1, 6),
            (2000, 6, 15, 4),
            (2005, 1, 1, 6),
            (2005, 6, 15, 3),
            (2005, 12, 31, 6),
            (2006, 1, 1, 0),
            (2006, 6, 15, 4),
            (2006, 12, 31, 0),
            (2029, 1, 1, 1),
            (2029, 6, 15, 5),
            (2029, 12, 31, 1),
            (2121, 1, 1, 3),
            (2121, 6, 15, 0),
            (2121, 12, 31, 3),
        ];
        for (year, month, day, expected) in table {
            assert_eq!(
                weekday(year, month, day),
                expected,
                "weekday({year}, {month}, {day})",
            );
        }
    }

    #[test]
    fn t_weekday_gregorian_cycle() {
        // The Gregorian calendar repeats every 400 years.
        assert_eq!(weekday(2000, 1, 1), weekday(2400, 1, 1));
        assert_eq!(weekday(1999, 7, 4), weekday(2399, 7, 4));
        assert_eq!(weekday(1600, 2, 29), weekday(2000, 2, 29));
    }

    quickcheck::quickcheck! {
        // Re-deriving (month, day) from a day-of-year by walking month
        // boundaries recovers the original date.
        fn prop_day_of_year_roundtrip(
            year: i16,
            month: u8,
            day: u8
        ) -> quickcheck::TestResult {
            let year = i64::from(year.rem_euclid(400)) + 1800;
            let month = i64::from(month % 12) + 1;
            let day = i64::from(day) % days_in_month(year, month) + 1;

            let mut doy = day_of_year(year, month, day);
            let mut rederived_month = 1;
            while doy > days_in_month(year, rederived_month) {
                doy -= days_in_month(year, rederived_month);
                rederived_month += 1;
            }
            quickcheck::TestResult::from_bool(
                rederived_month == month && doy == day,
            )
        }

        // Consecutive days have consecutive weekdays.
        fn prop_weekday_consecutive(year: i16, doy: u16) -> bool {
            let year = i64::from(year.rem_euclid(400)) + 1800;
            let mut doy = i64::from(doy) % days_in_year(year) + 1;
            let mut month = 1;
            while doy > days_in_month(year, month) {
                doy -= days_in_month(year, month);
                month += 1;
            }
            let today = weekday(year, month, doy);
            let tomorrow = if doy < days_in_month(year, month) {
                weekday(year, month, doy + 1)
            } else if month < 12 {
                weekday(year, month + 1, 1)
            } else {
                weekday(year + 1, 1, 1)
            };
            tomorrow == (today + 1).rem_euclid(7)
        }
    }
}
