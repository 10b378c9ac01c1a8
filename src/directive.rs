/*!
The directive table: what each `%x` means.

Dispatch is data, not control flow. Every recognized directive gets one row
in [`DIRECTIVES`] carrying its micro-parser [`Kind`] and its [`Fold`] rule,
so adding or removing a directive is a table edit. The table is built once
into the binary and never mutated.
*/

/// Weekday names, Sunday first so that a candidate's index is its weekday
/// number.
static WEEKDAY_NAMES: &[&[u8]] = &[
    b"Sunday",
    b"Monday",
    b"Tuesday",
    b"Wednesday",
    b"Thursday",
    b"Friday",
    b"Saturday",
];

static WEEKDAY_ABBREVS: &[&[u8]] =
    &[b"Sun", b"Mon", b"Tue", b"Wed", b"Thu", b"Fri", b"Sat"];

/// Month names, January first so that a candidate's index is the month
/// number minus one.
static MONTH_NAMES: &[&[u8]] = &[
    b"January",
    b"February",
    b"March",
    b"April",
    b"May",
    b"June",
    b"July",
    b"August",
    b"September",
    b"October",
    b"November",
    b"December",
];

static MONTH_ABBREVS: &[&[u8]] = &[
    b"Jan", b"Feb", b"Mar", b"Apr", b"May", b"Jun", b"Jul", b"Aug", b"Sep",
    b"Oct", b"Nov", b"Dec",
];

static MERIDIEM_NAMES: &[&[u8]] = &[b"AM", b"PM"];

/// `%Z` accepts the literal UTC marker or nothing at all. The empty
/// candidate must come last: candidates are tried in order and the empty
/// string is a prefix of everything.
static ZONE_NAMES: &[&[u8]] = &[b"Z", b""];

/// How a directive consumes input.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Kind {
    /// Match the first candidate that is a byte-prefix of the input. The
    /// parsed value is the candidate's index.
    Choice(&'static [&'static [u8]]),
    /// Exactly `width` ASCII digits whose value lies in `min..=max`.
    Number { width: usize, min: i64, max: i64 },
    /// A UTC offset of exactly the shape `[+-]HH:MM`, valued in signed
    /// minutes.
    Offset,
    /// A single literal `%`.
    Percent,
    /// Recognized, but using it is an error (locale renderings and
    /// week-of-year numbers).
    Unimplemented,
}

/// A field of the broken-down-time record, used to key the parser's
/// accumulators.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Field {
    Year,
    Month,
    Day,
    Hour,
    Minute,
    Second,
    Weekday,
    DayOfYear,
}

/// How a directive's parsed value contributes to the output record.
///
/// Every contribution merges by addition, with unset fields starting from
/// zero. Most directives contribute once to an untouched field, which makes
/// addition equivalent to assignment. The interesting cases are the ones
/// that deliberately combine: `%p` adds twelve hours on top of whatever
/// hour was parsed, and `%z` adds a negative minute count so that the
/// accumulated time becomes UTC.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Fold {
    /// The value is the year.
    Year,
    /// A two-digit year, taken relative to the year 2000.
    YearTwoDigit,
    /// The value is the month number.
    Month,
    /// A month name's candidate index; months count from one.
    MonthName,
    /// The value is the day of the month.
    Day,
    /// The value is the hour on a 24-hour clock.
    Hour24,
    /// The hour on a 12-hour clock; 12 means 0 so that `%p` can add the
    /// other half of the day.
    Hour12,
    /// An AM/PM candidate index; PM contributes twelve hours.
    Meridiem,
    /// The value is the minute.
    Minute,
    /// The value is the second.
    Second,
    /// A weekday number or (because the name tables are Sunday-first) a
    /// weekday name's candidate index.
    Weekday,
    /// The value is the day of the year.
    DayOfYear,
    /// A UTC offset in minutes; subtracted from the minute field so the
    /// result is local time minus the offset, i.e. UTC.
    UtcOffset,
    /// No contribution. The directive only consumes input.
    None,
}

impl Fold {
    /// Converts a directive's parsed value into a field contribution, or
    /// `None` for directives that affect control only.
    pub(crate) fn apply(self, value: i64) -> Option<(Field, i64)> {
        match self {
            Fold::Year => Some((Field::Year, value)),
            Fold::YearTwoDigit => Some((Field::Year, 2000 + value)),
            Fold::Month => Some((Field::Month, value)),
            Fold::MonthName => Some((Field::Month, value + 1)),
            Fold::Day => Some((Field::Day, value)),
            Fold::Hour24 => Some((Field::Hour, value)),
            Fold::Hour12 => {
                Some((Field::Hour, if value == 12 { 0 } else { value }))
            }
            Fold::Meridiem => Some((Field::Hour, 12 * value)),
            Fold::Minute => Some((Field::Minute, value)),
            Fold::Second => Some((Field::Second, value)),
            Fold::Weekday => Some((Field::Weekday, value)),
            Fold::DayOfYear => Some((Field::DayOfYear, value)),
            Fold::UtcOffset => Some((Field::Minute, -value)),
            Fold::None => None,
        }
    }
}

/// One row of the directive table.
#[derive(Debug)]
pub(crate) struct Directive {
    pub(crate) letter: u8,
    pub(crate) kind: Kind,
    pub(crate) fold: Fold,
}

const fn number(width: usize, min: i64, max: i64) -> Kind {
    Kind::Number { width, min, max }
}

/// Every recognized directive. Letters absent from this table are invalid
/// in a format string.
pub(crate) static DIRECTIVES: &[Directive] = &[
    Directive {
        letter: b'a',
        kind: Kind::Choice(WEEKDAY_ABBREVS),
        fold: Fold::Weekday,
    },
    Directive {
        letter: b'A',
        kind: Kind::Choice(WEEKDAY_NAMES),
        fold: Fold::Weekday,
    },
    Directive {
        letter: b'b',
        kind: Kind::Choice(MONTH_ABBREVS),
        fold: Fold::MonthName,
    },
    Directive {
        letter: b'B',
        kind: Kind::Choice(MONTH_NAMES),
        fold: Fold::MonthName,
    },
    Directive { letter: b'c', kind: Kind::Unimplemented, fold: Fold::None },
    Directive { letter: b'd', kind: number(2, 0, 31), fold: Fold::Day },
    Directive { letter: b'H', kind: number(2, 0, 23), fold: Fold::Hour24 },
    Directive { letter: b'I', kind: number(2, 1, 12), fold: Fold::Hour12 },
    Directive { letter: b'j', kind: number(3, 0, 366), fold: Fold::DayOfYear },
    Directive { letter: b'm', kind: number(2, 0, 12), fold: Fold::Month },
    Directive { letter: b'M', kind: number(2, 0, 59), fold: Fold::Minute },
    Directive {
        letter: b'p',
        kind: Kind::Choice(MERIDIEM_NAMES),
        fold: Fold::Meridiem,
    },
    Directive { letter: b'S', kind: number(2, 0, 59), fold: Fold::Second },
    Directive { letter: b'U', kind: Kind::Unimplemented, fold: Fold::None },
    Directive { letter: b'w', kind: number(1, 0, 6), fold: Fold::Weekday },
    Directive { letter: b'W', kind: Kind::Unimplemented, fold: Fold::None },
    Directive { letter: b'x', kind: Kind::Unimplemented, fold: Fold::None },
    Directive { letter: b'X', kind: Kind::Unimplemented, fold: Fold::None },
    Directive { letter: b'y', kind: number(2, 0, 99), fold: Fold::YearTwoDigit },
    Directive { letter: b'Y', kind: number(4, 0, 9999), fold: Fold::Year },
    Directive { letter: b'z', kind: Kind::Offset, fold: Fold::UtcOffset },
    Directive {
        letter: b'Z',
        kind: Kind::Choice(ZONE_NAMES),
        fold: Fold::None,
    },
    Directive { letter: b'%', kind: Kind::Percent, fold: Fold::None },
];

/// Looks up the table row for a directive letter.
pub(crate) fn lookup(letter: u8) -> Option<&'static Directive> {
    DIRECTIVES.iter().find(|directive| directive.letter == letter)
}
