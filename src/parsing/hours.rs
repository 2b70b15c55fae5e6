//! Parser for the compact weekly-hours notation.
//!
//! The notation packs a whole week of opening hours into one line, e.g.
//! `"Mon-Thu, Sun 11:30 am - 10 pm / Sat 5:30 pm - 10 pm"`:
//!
//! ```text
//! notation  := rule ( " / " rule )*          later rules override earlier
//!                                            ones for any shared weekday
//! rule      := daylist timerange
//! daylist   := dayitem ( ", " dayitem )*
//! dayitem   := dayname | dayname "-" dayname inclusive, wraps past Saturday
//! timerange := time period "-" time period   12-hour clock, "am"/"pm"
//! time      := hour | hour ":" minute
//! ```
//!
//! Each clause is consumed token by token: day items first (a token is a day
//! item until the first digit-leading token), then the opening time, the
//! standalone `-`, and the closing time. A closing time earlier than the
//! opening time is the wraparound representation, not an error.

use chrono::NaiveTime;

use crate::core::domain::{Schedule, TimeRange};
use crate::parsing::error::{HoursParseError, ParseResult};
use crate::time::{TimeOfDay, Weekday};

/// Separator between sub-rules. The surrounding spaces are part of it: a
/// hyphen glued into a day range ("Mon-Wed") must not split rules.
const RULE_SEPARATOR: &str = " / ";

/// Hyphen, both glued inside a day range and standalone between times.
const RANGE_HYPHEN: &str = "-";

/// Format accepted by the time parser after normalization.
const TIME_FORMAT: &str = "%I:%M%p";

/// Weekly-hours notation parser.
pub struct HoursParser;

impl HoursParser {
    /// Parses one notation string into a [`Schedule`].
    ///
    /// Clauses are folded left to right, so a later clause overrides an
    /// earlier one for any weekday they share. The first failing clause
    /// aborts the whole string; no partial schedule is ever returned.
    pub fn parse(notation: &str) -> ParseResult<Schedule> {
        let mut schedule = Schedule::new();
        for clause in notation.split(RULE_SEPARATOR) {
            schedule.merge(parse_clause(clause)?.into_schedule());
        }
        Ok(schedule)
    }

    /// Parses many notation strings, one result per input.
    pub fn parse_batch<'a, I>(notations: I) -> Vec<ParseResult<Schedule>>
    where
        I: IntoIterator<Item = &'a str>,
    {
        notations.into_iter().map(Self::parse).collect()
    }
}

/// One parsed clause: the weekdays it covers and their shared open interval.
#[derive(Debug)]
struct ParsedRule {
    days: Vec<Weekday>,
    hours: TimeRange,
}

impl ParsedRule {
    fn into_schedule(self) -> Schedule {
        let mut schedule = Schedule::new();
        for day in self.days {
            schedule.insert(day, self.hours);
        }
        schedule
    }
}

/// Token cursor over one whitespace-split clause.
struct ClauseCursor<'a> {
    clause: &'a str,
    tokens: Vec<&'a str>,
    position: usize,
}

impl<'a> ClauseCursor<'a> {
    fn new(clause: &'a str) -> Self {
        Self {
            clause,
            tokens: clause.split_whitespace().collect(),
            position: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position).copied()
    }

    fn next_token(&mut self, missing: &'static str) -> ParseResult<&'a str> {
        let token = self.peek().ok_or_else(|| self.malformed(missing))?;
        self.position += 1;
        Ok(token)
    }

    fn expect(&mut self, literal: &str, missing: &'static str) -> ParseResult<()> {
        let token = self.next_token(missing)?;
        if token != literal {
            return Err(self.malformed(missing));
        }
        Ok(())
    }

    /// Fails unless every token has been consumed.
    fn finish(&self) -> ParseResult<()> {
        if self.position != self.tokens.len() {
            return Err(self.malformed("unexpected trailing tokens"));
        }
        Ok(())
    }

    fn malformed(&self, reason: &'static str) -> HoursParseError {
        HoursParseError::MalformedClause {
            clause: self.clause.to_string(),
            reason,
        }
    }
}

fn parse_clause(clause: &str) -> ParseResult<ParsedRule> {
    let mut cursor = ClauseCursor::new(clause);

    let days = parse_day_list(&mut cursor)?;
    let open = parse_time(&mut cursor)?;
    cursor.expect(RANGE_HYPHEN, "expected '-' between opening and closing time")?;
    let close = parse_time(&mut cursor)?;
    cursor.finish()?;

    Ok(ParsedRule {
        days,
        hours: TimeRange::new(open, close),
    })
}

/// Consumes day items until the first digit-leading token (the opening time).
fn parse_day_list(cursor: &mut ClauseCursor<'_>) -> ParseResult<Vec<Weekday>> {
    let mut days = Vec::new();

    while let Some(token) = cursor.peek() {
        if starts_with_digit(token) {
            break;
        }
        cursor.position += 1;

        // A non-final day item keeps its list comma when split on whitespace.
        let item = token.strip_suffix(',').unwrap_or(token);
        expand_day_item(cursor.clause, item, &mut days)?;
    }

    if days.is_empty() {
        return Err(cursor.malformed("clause has no day list"));
    }
    Ok(days)
}

/// Expands one day item, a single name or an inclusive `A-B` range, into
/// `days`. A range walks forward through the week modulo 7, so `Fri-Mon`
/// yields Fri, Sat, Sun, Mon.
fn expand_day_item(clause: &str, item: &str, days: &mut Vec<Weekday>) -> ParseResult<()> {
    match item.split_once(RANGE_HYPHEN) {
        Some((first, last)) => {
            let first = lookup_day(clause, first)?;
            let last = lookup_day(clause, last)?;

            let mut day = first;
            days.push(day);
            while day != last {
                day = day.next();
                days.push(day);
            }
        }
        None => days.push(lookup_day(clause, item)?),
    }
    Ok(())
}

fn lookup_day(clause: &str, token: &str) -> ParseResult<Weekday> {
    Weekday::from_short_name(token).ok_or_else(|| HoursParseError::UnknownWeekday {
        token: token.to_string(),
        clause: clause.to_string(),
    })
}

/// Consumes a `time period` token pair and resolves it on the 12-hour clock
/// (12 am is midnight, 12 pm is noon).
fn parse_time(cursor: &mut ClauseCursor<'_>) -> ParseResult<TimeOfDay> {
    let raw = cursor.next_token("expected a time")?;
    let period = cursor.next_token("expected an am/pm period")?;

    let normalized = normalize_time(raw, period);
    match NaiveTime::parse_from_str(&normalized, TIME_FORMAT) {
        Ok(time) => Ok(TimeOfDay::from(time)),
        Err(_) => Err(HoursParseError::TimeParse {
            token: format!("{raw} {period}"),
            clause: cursor.clause.to_string(),
        }),
    }
}

/// Normalizes a raw time and its period token to the uniform `hh:mmPP` form:
/// a single-digit hour gains a leading zero, a bare hour gains `:00`.
///
/// `"9"`/`"pm"` becomes `"09:00pm"`, `"9:30"`/`"pm"` becomes `"09:30pm"`.
fn normalize_time(raw: &str, period: &str) -> String {
    let (hour, minute) = match raw.split_once(':') {
        Some((hour, minute)) => (hour, minute),
        None => (raw, "00"),
    };
    format!("{hour:0>2}:{minute}{period}")
}

fn starts_with_digit(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_ascii_digit())
}
