use crate::{calendar, error::Error};

/// The "broken down time" produced by parsing.
///
/// This is very similar to libc's `struct tm` in that it represents a civil
/// time as eight integer fields: year, month (`1..=12`), day of the month,
/// hour, minute, second, weekday (Sunday is `0`) and day of the year
/// (`1..=366`).
///
/// Two invariants hold for values returned by [`parse`](crate::parse()) and
/// [`BrokenDownTime::checked_add`]:
///
/// * When a full date (year, month and day) is known, the weekday and
/// day-of-year are _derived_ from it. They are never independently
/// authoritative.
/// * When only part of a date or time was supplied (say, just `%H:%M`),
/// every unparsed field is `0`, including the weekday and day-of-year, which
/// are then meaningless rather than computed.
///
/// A `BrokenDownTime` is a plain value: it is constructed fresh by each
/// operation and never mutated in place.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct BrokenDownTime {
    pub(crate) year: i64,
    pub(crate) month: i64,
    pub(crate) day: i64,
    pub(crate) hour: i64,
    pub(crate) minute: i64,
    pub(crate) second: i64,
    pub(crate) weekday: i64,
    pub(crate) day_of_year: i64,
}

impl BrokenDownTime {
    /// Creates a `BrokenDownTime` from its eight fields.
    ///
    /// No validation or derivation is performed. This is principally useful
    /// for writing down expected values in tests and examples.
    pub const fn constant(
        year: i64,
        month: i64,
        day: i64,
        hour: i64,
        minute: i64,
        second: i64,
        weekday: i64,
        day_of_year: i64,
    ) -> BrokenDownTime {
        BrokenDownTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday,
            day_of_year,
        }
    }

    /// Returns the year. Unbounded, conventionally non-negative.
    pub fn year(&self) -> i64 {
        self.year
    }

    /// Returns the month, in `1..=12` (or `0` when no month was parsed).
    pub fn month(&self) -> i64 {
        self.month
    }

    /// Returns the day of the month, in `1..=31` (or `0` when no day was
    /// parsed).
    pub fn day(&self) -> i64 {
        self.day
    }

    /// Returns the hour, in `0..=23`.
    pub fn hour(&self) -> i64 {
        self.hour
    }

    /// Returns the minute.
    ///
    /// This is in `0..=59` for any fully dated parse. A partial parse that
    /// folded in a UTC offset can legitimately sit outside that range, since
    /// without a date there is nothing to carry the excess into. For
    /// example, parsing `+01:00` with `%z` alone yields a minute of `-60`.
    pub fn minute(&self) -> i64 {
        self.minute
    }

    /// Returns the second, in `0..=59`.
    pub fn second(&self) -> i64 {
        self.second
    }

    /// Returns the weekday, with Sunday as `0` through Saturday as `6`.
    pub fn weekday(&self) -> i64 {
        self.weekday
    }

    /// Returns the day of the year, in `1..=366` (or `0` when it is
    /// unknown).
    pub fn day_of_year(&self) -> i64 {
        self.day_of_year
    }

    /// Adds a relative delta to this time, returning a new normalized time.
    ///
    /// The addition cascades: seconds overflow into minutes, minutes into
    /// hours, hours into days, days into months and months into years, with
    /// symmetric borrowing for negative deltas. The day-to-month carry is
    /// calendar aware, so adding a day to January 31 lands on February 1 and
    /// subtracting a second from midnight on New Year's Day lands on
    /// December 31, 23:59:59 of the prior year. The weekday and day-of-year
    /// of the result are recomputed from the settled date, never carried
    /// arithmetically.
    ///
    /// The receiver should hold a valid date (this is always true of a fully
    /// dated parse result).
    ///
    /// # Errors
    ///
    /// Returns an unsupported-delta error when `delta` has a non-zero
    /// weekday or day-of-year component. "Advance by N weekdays" is not a
    /// meaningful primitive here, and this is a usage error rather than a
    /// parse failure.
    ///
    /// # Example
    ///
    /// ```
    /// use strtime::{BrokenDownTime, TimeDelta};
    ///
    /// let tm = strtime::parse("%Y-%m-%d", "2000-01-01")?.unwrap();
    /// let yesterday = tm.checked_add(&TimeDelta::new().seconds(-1))?;
    /// assert_eq!(
    ///     yesterday,
    ///     BrokenDownTime::constant(1999, 12, 31, 23, 59, 59, 5, 365),
    /// );
    /// # Ok::<(), strtime::Error>(())
    /// ```
    pub fn checked_add(
        &self,
        delta: &TimeDelta,
    ) -> Result<BrokenDownTime, Error> {
        if delta.weekday != 0 {
            return Err(Error::UnsupportedDelta { field: "weekday" });
        }
        if delta.day_of_year != 0 {
            return Err(Error::UnsupportedDelta { field: "day-of-year" });
        }

        // Cascade from the finest unit up. Euclidean division keeps the
        // reduced field in range for negative sums too.
        let sum = self.second + delta.second;
        let second = sum.rem_euclid(60);
        let mut carry = sum.div_euclid(60);

        let sum = self.minute + delta.minute + carry;
        let minute = sum.rem_euclid(60);
        carry = sum.div_euclid(60);

        let sum = self.hour + delta.hour + carry;
        let hour = sum.rem_euclid(24);
        carry = sum.div_euclid(24);

        let mut day = self.day + delta.day + carry;

        // Resolve the raw month offset into a 1..=12 month and a year
        // carry before touching the day, since the day's bounds depend on
        // which month (and year) it ends up in.
        let sum = self.month + delta.month - 1;
        let mut month = sum.rem_euclid(12) + 1;
        let mut year = self.year + delta.year + sum.div_euclid(12);

        while day < 1 {
            month -= 1;
            if month < 1 {
                month = 12;
                year -= 1;
            }
            day += calendar::days_in_month(year, month);
        }
        while day > calendar::days_in_month(year, month) {
            day -= calendar::days_in_month(year, month);
            month += 1;
            if month > 12 {
                month = 1;
                year += 1;
            }
        }

        Ok(BrokenDownTime {
            year,
            month,
            day,
            hour,
            minute,
            second,
            weekday: calendar::weekday(year, month, day),
            day_of_year: calendar::day_of_year(year, month, day),
        })
    }
}

impl core::fmt::Display for BrokenDownTime {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute,
            self.second,
        )
    }
}

/// A relative time offset in the same eight-field shape as
/// [`BrokenDownTime`].
///
/// All fields default to zero. The weekday and day-of-year fields exist so
/// that the shape matches, but they are not addable quantities:
/// [`BrokenDownTime::checked_add`] rejects a delta that sets either one.
///
/// # Example
///
/// ```
/// use strtime::TimeDelta;
///
/// let delta = TimeDelta::new().days(1).hours(-2);
/// let tm = strtime::parse("%Y-%m-%d", "2024-02-28")?.unwrap();
/// let later = tm.checked_add(&delta)?;
/// assert_eq!((later.month(), later.day(), later.hour()), (2, 28, 22));
/// # Ok::<(), strtime::Error>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct TimeDelta {
    pub(crate) year: i64,
    pub(crate) month: i64,
    pub(crate) day: i64,
    pub(crate) hour: i64,
    pub(crate) minute: i64,
    pub(crate) second: i64,
    pub(crate) weekday: i64,
    pub(crate) day_of_year: i64,
}

impl TimeDelta {
    /// Creates a zero delta. Adding it leaves any valid time unchanged
    /// (after renormalization of its derived fields).
    pub const fn new() -> TimeDelta {
        TimeDelta {
            year: 0,
            month: 0,
            day: 0,
            hour: 0,
            minute: 0,
            second: 0,
            weekday: 0,
            day_of_year: 0,
        }
    }

    /// Sets the year component.
    pub fn years(self, year: i64) -> TimeDelta {
        TimeDelta { year, ..self }
    }

    /// Sets the month component.
    pub fn months(self, month: i64) -> TimeDelta {
        TimeDelta { month, ..self }
    }

    /// Sets the day component.
    pub fn days(self, day: i64) -> TimeDelta {
        TimeDelta { day, ..self }
    }

    /// Sets the hour component.
    pub fn hours(self, hour: i64) -> TimeDelta {
        TimeDelta { hour, ..self }
    }

    /// Sets the minute component.
    pub fn minutes(self, minute: i64) -> TimeDelta {
        TimeDelta { minute, ..self }
    }

    /// Sets the second component.
    pub fn seconds(self, second: i64) -> TimeDelta {
        TimeDelta { second, ..self }
    }

    /// Sets the weekday component. Any non-zero value makes
    /// [`BrokenDownTime::checked_add`] fail.
    pub fn weekday(self, weekday: i64) -> TimeDelta {
        TimeDelta { weekday, ..self }
    }

    /// Sets the day-of-year component. Any non-zero value makes
    /// [`BrokenDownTime::checked_add`] fail.
    pub fn day_of_year(self, day_of_year: i64) -> TimeDelta {
        TimeDelta { day_of_year, ..self }
    }
}

impl core::ops::Neg for TimeDelta {
    type Output = TimeDelta;

    fn neg(self) -> TimeDelta {
        TimeDelta {
            year: -self.year,
            month: -self.month,
            day: -self.day,
            hour: -self.hour,
            minute: -self.minute,
            second: -self.second,
            weekday: -self.weekday,
            day_of_year: -self.day_of_year,
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for BrokenDownTime {
    fn arbitrary(g: &mut quickcheck::Gen) -> BrokenDownTime {
        use quickcheck::Arbitrary;

        let year = i64::from(u16::arbitrary(g) % 400) + 1800;
        let month = i64::from(u8::arbitrary(g) % 12) + 1;
        let day =
            i64::from(u8::arbitrary(g)) % calendar::days_in_month(year, month)
                + 1;
        BrokenDownTime {
            year,
            month,
            day,
            hour: i64::from(u8::arbitrary(g) % 24),
            minute: i64::from(u8::arbitrary(g) % 60),
            second: i64::from(u8::arbitrary(g) % 60),
            weekday: calendar::weekday(year, month, day),
            day_of_year: calendar::day_of_year(year, month, day),
        }
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for TimeDelta {
    fn arbitrary(g: &mut quickcheck::Gen) -> TimeDelta {
        use quickcheck::Arbitrary;

        let field = |g: &mut quickcheck::Gen| i64::from(i16::arbitrary(g));
        TimeDelta {
            year: field(g),
            month: field(g),
            day: field(g),
            hour: field(g),
            minute: field(g),
            second: field(g),
            weekday: 0,
            day_of_year: 0,
        }
    }
}
