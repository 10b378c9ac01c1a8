/*!
A parser for `strptime`-style format strings, with exact calendar
arithmetic on the parsed result.

The two entry points are [`parse`], which interprets an input string
according to a format template and produces a [`BrokenDownTime`], and
[`BrokenDownTime::checked_add`], which shifts such a time by a
[`TimeDelta`] while keeping every field in its calendar-correct range.

# Example

```
use strtime::parse;

let tm = parse("%Y-%m-%dT%H:%M:%S%z", "2020-12-23T04:01:20+05:00")?
    .unwrap();
// The offset has been folded away. This is the UTC instant.
assert_eq!(tm.to_string(), "2020-12-22 23:01:20");
assert_eq!(tm.weekday(), 2); // Tuesday, with Sunday as 0
# Ok::<(), strtime::Error>(())
```

# Conversion specifications

The following directives are supported in format strings. Matching is
byte-wise, case sensitive and greedy, with numeric directives requiring
exactly the stated number of ASCII digits.

| Directive | Example | Description |
| --------- | ------- | ----------- |
| `%a` | `Sun` | An abbreviated weekday name. |
| `%A` | `Sunday` | A full weekday name. |
| `%b` | `Jul` | An abbreviated month name. |
| `%B` | `July` | A full month name. |
| `%d` | `25` | The day of the month, two digits. |
| `%H` | `23` | The hour on a 24-hour clock, two digits. |
| `%I` | `11` | The hour on a 12-hour clock, two digits. |
| `%j` | `359` | The day of the year, three digits. |
| `%m` | `07` | The month, two digits. |
| `%M` | `04` | The minute, two digits. |
| `%p` | `AM` | The meridiem marker, `AM` or `PM`. |
| `%S` | `59` | The second, two digits. |
| `%w` | `0` | The weekday number, `0` (Sunday) through `6` (Saturday). |
| `%y` | `24` | A two-digit year, interpreted as `2000` through `2099`. |
| `%Y` | `2024` | A four-digit year. |
| `%z` | `+05:00` | A UTC offset, `[+-]HH:MM`. |
| `%Z` | `Z` | A UTC zone marker, `Z` or absent. |
| `%%` | `%` | A literal `%`. |

The directives `%c`, `%U`, `%W`, `%x` and `%X` are recognized but not
supported, and using one reports an error.

Some directives interact:

* A `%p` meridiem adds twelve hours to whatever hour was parsed, so
  `%I:%M%p` reads a 12-hour clock. (`%I` maps `12` to `0` first, making
  `12:00AM` midnight and `12:00PM` noon.)
* A `%z` offset is subtracted from the minute field. When the rest of
  the format pins down a full date, the result is renormalized through
  the calendar, yielding the UTC equivalent of the parsed local time.
* When a full date is present, the weekday and day-of-year fields are
  computed from it, overriding anything `%w` or `%j` contributed.

# Failure reporting

Three outcomes are kept apart:

* `Ok(Some(tm))` for a successful parse.
* `Ok(None)` when the input simply does not match the format, including
  out-of-range values like a minute of `61` or February 30th.
* `Err(err)` when the format string itself is at fault. The predicates
  [`Error::is_invalid_format`] and [`Error::is_unsupported`] split these
  into malformed templates and known-but-unimplemented directives.

# Crate features

* **std** (enabled by default) - Implements the standard library
  `Error` trait for this crate's error type. Disabling it makes this
  crate `no_std` compatible.
* **logging** - Emits trace-level messages through the [`log`] crate
  explaining why a parse came back empty.
* **serde** - Adds `Serialize` and `Deserialize` implementations for
  [`BrokenDownTime`] and [`TimeDelta`].

[`log`]: https://docs.rs/log
*/

#![no_std]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(missing_debug_implementations)]

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod logging;

pub mod calendar;
mod directive;
mod error;
mod escape;
mod parse;
mod tm;

pub use crate::{
    error::Error,
    parse::parse,
    tm::{BrokenDownTime, TimeDelta},
};
