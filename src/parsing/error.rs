//! Error types for hours-notation parsing.

/// Result type for hours-notation parsing.
pub type ParseResult<T> = Result<T, HoursParseError>;

/// Error raised while parsing one weekly-hours notation string.
///
/// Each variant carries the offending token or substring plus the clause it
/// came from, so a caller can produce a diagnostic without re-parsing. An
/// error aborts the whole notation string; no partial schedule is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HoursParseError {
    #[error("malformed clause {clause:?}: {reason}")]
    MalformedClause {
        clause: String,
        reason: &'static str,
    },

    #[error("unknown weekday {token:?} in clause {clause:?}")]
    UnknownWeekday { token: String, clause: String },

    #[error("invalid time {token:?} in clause {clause:?}")]
    TimeParse { token: String, clause: String },
}
