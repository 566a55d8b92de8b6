//! RFC 3339 date-time values as carried by `timeCreated` and similar fields.
//!
//! A [`DateTime`] keeps the instant as microseconds since the Unix epoch plus
//! the UTC offset it was written with, so formatting reproduces the offset.

use std::fmt;
use std::str::FromStr;

const MICROS_PER_SECOND: i64 = 1_000_000;
const MICROS_PER_MINUTE: i64 = 60 * MICROS_PER_SECOND;
const MICROS_PER_HOUR: i64 = 60 * MICROS_PER_MINUTE;
const MICROS_PER_DAY: i64 = 24 * MICROS_PER_HOUR;

/// Error type for RFC 3339 parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeParseError {
    pub message: String,
}

impl DateTimeParseError {
    fn new(input: &str, what: &str) -> Self {
        Self {
            message: format!("{what} in {input:?}"),
        }
    }
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DateTimeParseError {}

/// An instant with the UTC offset it was expressed in.
///
/// Precision is one microsecond. Parsing truncates any further fractional
/// digits, so a nanosecond timestamp re-encodes with six digits at most.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DateTime {
    /// Microseconds since 1970-01-01T00:00:00Z.
    pub epoch_micros: i64,
    /// Signed UTC offset in minutes (e.g., +330 for +05:30).
    pub offset_min: i16,
}

impl DateTime {
    /// Creates a UTC date-time from microseconds since the Unix epoch.
    pub fn from_epoch_micros(epoch_micros: i64) -> Self {
        Self {
            epoch_micros,
            offset_min: 0,
        }
    }

    /// Parses an RFC 3339 date-time (`YYYY-MM-DDTHH:MM:SS[.ffffff](Z|±HH:MM)`).
    pub fn parse(input: &str) -> Result<Self, DateTimeParseError> {
        let (epoch_micros, offset_min) = parse_datetime_rfc3339(input)?;
        Ok(Self {
            epoch_micros,
            offset_min,
        })
    }
}

impl FromStr for DateTime {
    type Err = DateTimeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateTime::parse(s)
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_datetime_rfc3339(self.epoch_micros, self.offset_min))
    }
}

fn parse_timezone_offset(input: &str, offset: &str) -> Result<i16, DateTimeParseError> {
    if offset == "Z" || offset == "z" {
        return Ok(0);
    }

    let bytes = offset.as_bytes();
    if bytes.len() != 6 || bytes[3] != b':' {
        return Err(DateTimeParseError::new(input, "invalid timezone offset"));
    }
    let sign = match bytes[0] {
        b'+' => 1i16,
        b'-' => -1i16,
        _ => return Err(DateTimeParseError::new(input, "invalid timezone offset")),
    };

    let hours = parse_digits(input, &offset[1..3], "invalid timezone offset")? as i16;
    let minutes = parse_digits(input, &offset[4..6], "invalid timezone offset")? as i16;
    if hours > 24 || (hours == 24 && minutes != 0) || minutes > 59 {
        return Err(DateTimeParseError::new(input, "timezone offset out of range"));
    }

    Ok(sign * (hours * 60 + minutes))
}

fn format_timezone_offset(offset_min: i16) -> String {
    if offset_min == 0 {
        return "Z".to_string();
    }
    let sign = if offset_min > 0 { '+' } else { '-' };
    let abs = offset_min.unsigned_abs();
    format!("{}{:02}:{:02}", sign, abs / 60, abs % 60)
}

fn parse_digits(input: &str, digits: &str, what: &str) -> Result<i64, DateTimeParseError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DateTimeParseError::new(input, what));
    }
    digits
        .parse()
        .map_err(|_| DateTimeParseError::new(input, what))
}

/// Fractional seconds beyond microsecond precision are truncated.
fn parse_fraction(frac: &str) -> i64 {
    let mut micros = 0i64;
    for (i, b) in frac.bytes().take(6).enumerate() {
        micros += (b - b'0') as i64 * 10i64.pow(5 - i as u32);
    }
    micros
}

fn format_fraction(micros: i64) -> String {
    if micros == 0 {
        return String::new();
    }
    let digits = format!("{:06}", micros);
    format!(".{}", digits.trim_end_matches('0'))
}

fn is_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn days_in_month(year: i64, month: i64) -> i64 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 0,
    }
}

/// Days since the epoch for a civil date (Howard Hinnant's algorithm).
fn days_from_civil(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = if y >= 0 { y } else { y - 399 } / 400;
    let yoe = y - era * 400;
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, i64, i64) {
    let z = days + 719_468;
    let era = if z >= 0 { z } else { z - 146_096 } / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + if month <= 2 { 1 } else { 0 };
    (year, month, day)
}

/// Parses an RFC 3339 date-time and returns microseconds since the Unix epoch
/// and the offset in minutes.
pub fn parse_datetime_rfc3339(input: &str) -> Result<(i64, i16), DateTimeParseError> {
    let bytes = input.as_bytes();
    if bytes.len() < 20 || !input.is_ascii() {
        return Err(DateTimeParseError::new(input, "invalid RFC 3339 date-time"));
    }
    if bytes[4] != b'-'
        || bytes[7] != b'-'
        || !matches!(bytes[10], b'T' | b't' | b' ')
        || bytes[13] != b':'
        || bytes[16] != b':'
    {
        return Err(DateTimeParseError::new(input, "invalid RFC 3339 date-time"));
    }

    let year = parse_digits(input, &input[0..4], "invalid year")?;
    let month = parse_digits(input, &input[5..7], "invalid month")?;
    let day = parse_digits(input, &input[8..10], "invalid day")?;
    let hours = parse_digits(input, &input[11..13], "invalid hours")?;
    let minutes = parse_digits(input, &input[14..16], "invalid minutes")?;
    let seconds = parse_digits(input, &input[17..19], "invalid seconds")?;

    if !(1..=12).contains(&month) {
        return Err(DateTimeParseError::new(input, "invalid month"));
    }
    if day < 1 || day > days_in_month(year, month) {
        return Err(DateTimeParseError::new(input, "invalid day"));
    }
    if hours > 23 || minutes > 59 || seconds > 59 {
        return Err(DateTimeParseError::new(input, "invalid time of day"));
    }

    let rest = &input[19..];
    let (micros, offset) = match rest.strip_prefix('.') {
        Some(frac_and_offset) => {
            let frac_len = frac_and_offset
                .bytes()
                .take_while(u8::is_ascii_digit)
                .count();
            if frac_len == 0 {
                return Err(DateTimeParseError::new(input, "empty fractional seconds"));
            }
            (
                parse_fraction(&frac_and_offset[..frac_len]),
                &frac_and_offset[frac_len..],
            )
        }
        None => (0, rest),
    };
    let offset_min = parse_timezone_offset(input, offset)?;

    let local_micros = days_from_civil(year, month, day) * MICROS_PER_DAY
        + hours * MICROS_PER_HOUR
        + minutes * MICROS_PER_MINUTE
        + seconds * MICROS_PER_SECOND
        + micros;

    Ok((local_micros - offset_min as i64 * MICROS_PER_MINUTE, offset_min))
}

/// Formats microseconds since the Unix epoch as an RFC 3339 date-time in the
/// given offset.
pub fn format_datetime_rfc3339(epoch_micros: i64, offset_min: i16) -> String {
    let local_micros = epoch_micros + offset_min as i64 * MICROS_PER_MINUTE;
    let days = local_micros.div_euclid(MICROS_PER_DAY);
    let time_micros = local_micros.rem_euclid(MICROS_PER_DAY);

    let (year, month, day) = civil_from_days(days);
    let hours = time_micros / MICROS_PER_HOUR;
    let minutes = (time_micros % MICROS_PER_HOUR) / MICROS_PER_MINUTE;
    let seconds = (time_micros % MICROS_PER_MINUTE) / MICROS_PER_SECOND;
    let micros = time_micros % MICROS_PER_SECOND;

    format!(
        "{:04}-{:02}-{:02}T{:02}:{:02}:{:02}{}{}",
        year,
        month,
        day,
        hours,
        minutes,
        seconds,
        format_fraction(micros),
        format_timezone_offset(offset_min)
    )
}
