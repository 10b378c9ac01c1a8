use crate::escape;

/// An error that can occur in this crate.
///
/// An error always indicates a problem with the _template_ or with the
/// arguments to an operation. An input string that merely fails to match its
/// template is not an error: [`parse`](crate::parse()) reports that case as
/// `Ok(None)`. Callers rely on these channels staying distinct. That is:
///
/// * A bad format string produces [`Error::UnknownDirective`] or
/// [`Error::UnexpectedEndOfFormat`].
/// * A format string (or delta) asking for something this crate knowingly
/// does not do produces [`Error::UnsupportedDirective`] or
/// [`Error::UnsupportedDelta`].
/// * Anything else is an ordinary non-match and never an `Error`.
///
/// # Example
///
/// ```
/// use strtime::Error;
///
/// // A typo'd directive is a template bug, not a non-match.
/// let err = strtime::parse("%Y-%m-%q", "2024-07-15").unwrap_err();
/// assert!(err.is_invalid_format());
///
/// // A recognized-but-unsupported directive is a third, distinct channel.
/// let err = strtime::parse("%c", "").unwrap_err();
/// assert!(err.is_unsupported());
/// assert!(!err.is_invalid_format());
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// The format string referenced a `%` directive whose letter isn't
    /// recognized at all.
    UnknownDirective {
        /// The unrecognized byte following the `%`.
        directive: u8,
    },
    /// The format string ended immediately after a `%`.
    UnexpectedEndOfFormat,
    /// The format string referenced a directive that is recognized but
    /// deliberately unimplemented (locale renderings and week-of-year
    /// numbers).
    UnsupportedDirective {
        /// The byte following the `%`.
        directive: u8,
    },
    /// A [`TimeDelta`](crate::TimeDelta) specified a non-zero value for a
    /// field that is derived rather than added (weekday or day-of-year).
    UnsupportedDelta {
        /// A human readable label for the offending field.
        field: &'static str,
    },
}

impl Error {
    /// Returns true when this error indicates a structurally invalid format
    /// string, i.e., a bad template rather than bad input.
    pub fn is_invalid_format(&self) -> bool {
        matches!(
            *self,
            Error::UnknownDirective { .. } | Error::UnexpectedEndOfFormat,
        )
    }

    /// Returns true when this error indicates a known gap: a recognized but
    /// unsupported directive, or a delta shape that cannot be added.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            *self,
            Error::UnsupportedDirective { .. }
                | Error::UnsupportedDelta { .. },
        )
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::Error::*;

        match *self {
            UnknownDirective { directive } => write!(
                f,
                "found unrecognized directive `%{directive}` \
                 in format string",
                directive = escape::Byte(directive),
            ),
            UnexpectedEndOfFormat => f.write_str(
                "invalid format string, expected directive after `%`, \
                 but found end of format string",
            ),
            UnsupportedDirective { directive } => write!(
                f,
                "parsing `%{directive}` is not supported",
                directive = escape::Byte(directive),
            ),
            UnsupportedDelta { field } => write!(
                f,
                "time delta with non-zero {field} is not supported",
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
