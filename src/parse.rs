use crate::{
    calendar,
    directive::{self, Directive, Field, Kind},
    error::Error,
    tm::{BrokenDownTime, TimeDelta},
};

/// Parse the given `input` according to the given `format` string.
///
/// The format string is a sequence of literal bytes and `%x` directives.
/// A literal byte must match one identical byte of input. A directive
/// consumes whatever its micro-parser accepts and folds the parsed value
/// into the output record. The grammar is deterministic and greedy: each
/// unit either matches at the current position or the whole parse fails.
/// The input must be fully consumed; trailing input is a non-match.
///
/// See the [crate documentation](crate) for the directive table.
///
/// # Errors
///
/// A mismatch between input and template is *not* an error: it is reported
/// as `Ok(None)`. An error always means the format string itself is at
/// fault, either referencing an unrecognized directive or one that is
/// recognized but unsupported. See [`Error`] for the distinction.
///
/// # Example
///
/// ```
/// let tm = strtime::parse("%Y-%m-%d", "2020-12-23")?.unwrap();
/// assert_eq!(tm.year(), 2020);
/// assert_eq!(tm.month(), 12);
/// assert_eq!(tm.day(), 23);
/// // 2020-12-23 was a Wednesday, the 358th day of the year.
/// assert_eq!(tm.weekday(), 3);
/// assert_eq!(tm.day_of_year(), 358);
/// # Ok::<(), strtime::Error>(())
/// ```
///
/// # Example: UTC normalization
///
/// A parsed `%z` offset is folded into the minute field, so the returned
/// time is UTC, with day boundaries handled by the calendar:
///
/// ```
/// let tm = strtime::parse(
///     "%Y-%m-%dT%H:%M:%S%z",
///     "2020-12-23T04:01:20+05:00",
/// )?.unwrap();
/// assert_eq!(tm.to_string(), "2020-12-22 23:01:20");
/// # Ok::<(), strtime::Error>(())
/// ```
pub fn parse(
    format: impl AsRef<[u8]>,
    input: impl AsRef<[u8]>,
) -> Result<Option<BrokenDownTime>, Error> {
    parse_mono(format.as_ref(), input.as_ref())
}

fn parse_mono(
    fmt: &[u8],
    inp: &[u8],
) -> Result<Option<BrokenDownTime>, Error> {
    let mut p = Parser { fmt, inp, fields: Fields::default() };
    if !p.parse()? {
        return Ok(None);
    }
    if !p.inp.is_empty() {
        trace!(
            "parse succeeded but {} bytes of input remain unconsumed",
            p.inp.len(),
        );
        return Ok(None);
    }
    Ok(p.fields.into_time())
}

/// The per-field accumulators written by directive folds.
///
/// Each slot starts unset. A fold either initializes a slot or adds to it,
/// which is how redundant directives combine (`%I` with `%p`, or `%M` with
/// the negated `%z` offset).
#[derive(Clone, Copy, Debug, Default)]
struct Fields {
    year: Option<i64>,
    month: Option<i64>,
    day: Option<i64>,
    hour: Option<i64>,
    minute: Option<i64>,
    second: Option<i64>,
    weekday: Option<i64>,
    day_of_year: Option<i64>,
}

impl Fields {
    fn add(&mut self, field: Field, contribution: i64) {
        let slot = match field {
            Field::Year => &mut self.year,
            Field::Month => &mut self.month,
            Field::Day => &mut self.day,
            Field::Hour => &mut self.hour,
            Field::Minute => &mut self.minute,
            Field::Second => &mut self.second,
            Field::Weekday => &mut self.weekday,
            Field::DayOfYear => &mut self.day_of_year,
        };
        *slot = Some(slot.unwrap_or(0) + contribution);
    }

    /// Validates the accumulated fields and assembles the final record.
    ///
    /// This is where directive interplay gets checked, since no single
    /// directive can see what the others contributed.
    fn into_time(self) -> Option<BrokenDownTime> {
        // A PM contribution on top of a 24-hour clock value can push the
        // hour past its range. That's bad input, not a bad template.
        let hour = self.hour.unwrap_or(0);
        if !(0..=23).contains(&hour) {
            trace!("accumulated hour {hour} is out of range");
            return None;
        }

        let mut tm = BrokenDownTime::constant(
            self.year.unwrap_or(0),
            self.month.unwrap_or(0),
            self.day.unwrap_or(0),
            hour,
            self.minute.unwrap_or(0),
            self.second.unwrap_or(0),
            self.weekday.unwrap_or(0),
            self.day_of_year.unwrap_or(0),
        );

        // Everything below needs a full date. Partial parses keep their
        // unset fields at zero, including out-of-range minutes from a
        // dateless `%z`, since there is no date to carry the excess into.
        let (year, month, day) = match (self.year, self.month, self.day) {
            (Some(year), Some(month), Some(day)) => (year, month, day),
            _ => return Some(tm),
        };

        if !(1..=12).contains(&month)
            || day < 1
            || day > calendar::days_in_month(year, month)
        {
            trace!("day {day} is not valid for year {year}, month {month}");
            return None;
        }

        if !(0..=59).contains(&tm.minute()) {
            // A UTC offset displaced the minute out of range. Adding a
            // zero delta reuses the carry cascade to renormalize, and
            // recomputes the weekday and day-of-year while it's at it.
            // The zero delta can't be rejected, so this never fails.
            tm = tm.checked_add(&TimeDelta::new()).ok()?;
        } else {
            tm = BrokenDownTime::constant(
                year,
                month,
                day,
                tm.hour(),
                tm.minute(),
                tm.second(),
                calendar::weekday(year, month, day),
                calendar::day_of_year(year, month, day),
            );
        }
        Some(tm)
    }
}

struct Parser<'f, 'i> {
    fmt: &'f [u8],
    inp: &'i [u8],
    fields: Fields,
}

impl<'f, 'i> Parser<'f, 'i> {
    /// Walks the format string to its end, consuming input in lockstep.
    ///
    /// Returns `false` on an ordinary non-match. Errors are reserved for
    /// faults in the format string itself.
    fn parse(&mut self) -> Result<bool, Error> {
        while !self.fmt.is_empty() {
            if self.f() != b'%' {
                if !self.parse_literal() {
                    return Ok(false);
                }
                continue;
            }
            if !self.bump_fmt() {
                return Err(Error::UnexpectedEndOfFormat);
            }
            let directive = directive::lookup(self.f())
                .ok_or(Error::UnknownDirective { directive: self.f() })?;
            if !self.parse_directive(directive)? {
                trace!(
                    "%{} did not match the remaining input",
                    char::from(directive.letter),
                );
                return Ok(false);
            }
            self.bump_fmt();
        }
        Ok(true)
    }

    /// Returns the byte at the current position of the format string.
    ///
    /// # Panics
    ///
    /// This panics when the entire format string has been consumed.
    fn f(&self) -> u8 {
        self.fmt[0]
    }

    /// Bumps the position of the format string.
    ///
    /// This returns true in precisely the cases where `self.f()` will not
    /// panic. i.e., When the end of the format string hasn't been reached
    /// yet.
    fn bump_fmt(&mut self) -> bool {
        self.fmt = &self.fmt[1..];
        !self.fmt.is_empty()
    }

    /// Matches one literal byte of the format string against one byte of
    /// input. An exhausted input is an ordinary non-match.
    fn parse_literal(&mut self) -> bool {
        match self.inp.split_first() {
            Some((&byte, rest)) if byte == self.f() => {
                self.inp = rest;
                self.bump_fmt();
                true
            }
            _ => false,
        }
    }

    /// Runs one directive's micro-parser and folds the result.
    ///
    /// The parser is positioned on the directive letter, with the `%`
    /// already consumed. Unimplemented directives fail before looking at
    /// the input at all, so even an empty input surfaces the fault.
    fn parse_directive(
        &mut self,
        directive: &Directive,
    ) -> Result<bool, Error> {
        let value = match directive.kind {
            Kind::Unimplemented => {
                return Err(Error::UnsupportedDirective {
                    directive: directive.letter,
                });
            }
            Kind::Choice(choices) => {
                match parse_choice(self.inp, choices) {
                    None => return Ok(false),
                    Some((index, rest)) => {
                        self.inp = rest;
                        index
                    }
                }
            }
            Kind::Number { width, min, max } => {
                match parse_number(self.inp, width, min, max) {
                    None => return Ok(false),
                    Some((number, rest)) => {
                        self.inp = rest;
                        number
                    }
                }
            }
            Kind::Offset => match parse_offset(self.inp) {
                None => return Ok(false),
                Some((minutes, rest)) => {
                    self.inp = rest;
                    minutes
                }
            },
            Kind::Percent => match self.inp.split_first() {
                Some((b'%', rest)) => {
                    self.inp = rest;
                    return Ok(true);
                }
                _ => return Ok(false),
            },
        };
        if let Some((field, contribution)) = directive.fold.apply(value) {
            self.fields.add(field, contribution);
        }
        Ok(true)
    }
}

/// Matches the first candidate that is a byte-prefix of the input.
///
/// On success, returns the candidate's index and the input with the
/// candidate's bytes consumed. Matching is case sensitive: `z` is not a
/// UTC marker and `pm` is not a meridiem.
fn parse_choice<'i>(
    input: &'i [u8],
    choices: &'static [&'static [u8]],
) -> Option<(i64, &'i [u8])> {
    for (index, choice) in choices.iter().enumerate() {
        if input.len() >= choice.len() && &input[..choice.len()] == *choice {
            return Some((index as i64, &input[choice.len()..]));
        }
    }
    None
}

/// Parses an integer of exactly `width` ASCII digits whose value lies in
/// `min..=max`. Anything else, including a shorter run of digits, is a
/// non-match.
fn parse_number(
    input: &[u8],
    width: usize,
    min: i64,
    max: i64,
) -> Option<(i64, &[u8])> {
    if input.len() < width {
        return None;
    }
    let (digits, rest) = input.split_at(width);
    let mut number: i64 = 0;
    for &byte in digits {
        if !byte.is_ascii_digit() {
            return None;
        }
        number = number * 10 + i64::from(byte - b'0');
    }
    if number < min || max < number {
        return None;
    }
    Some((number, rest))
}

/// Parses a UTC offset of exactly the shape `[+-]HH:MM`, returning its
/// value in signed minutes. The sign applies to the whole quantity, so
/// `-01:30` is -90 minutes.
fn parse_offset(input: &[u8]) -> Option<(i64, &[u8])> {
    if input.len() < 6 {
        return None;
    }
    let (offset, rest) = input.split_at(6);
    let sign = match offset[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return None,
    };
    if offset[3] != b':' {
        return None;
    }
    let (hours, _) = parse_number(&offset[1..3], 2, 0, 99)?;
    let (minutes, _) = parse_number(&offset[4..6], 2, 0, 99)?;
    Some((sign * (hours * 60 + minutes), rest))
}
