//! Codec for the WMI CIM_DATETIME timestamp format.
//!
//! `wmic` reports timestamps as `yyyyMMddHHmmss.ffffff+zzz` where `zzz` is
//! the UTC offset in minutes, three digits, no colon (e.g.
//! `20240816232957.500000+480`). Nothing else emits this format, so the
//! parser accepts it exactly and nothing more.

use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Timelike};

use super::parse::ParseError;

/// Total length of a CIM_DATETIME string.
const CIM_DATETIME_LEN: usize = 25;

/// Parses a CIM_DATETIME string into a timestamp carrying its UTC offset.
pub fn parse_wmi_time(input: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let s = input.trim();

    if s.len() != CIM_DATETIME_LEN || !s.is_ascii() {
        return Err(ParseError {
            input: input.to_string(),
            message: format!("expected {} ASCII characters", CIM_DATETIME_LEN),
        });
    }

    // Layout: 14 datetime digits, '.', 6 fractional digits, sign, 3 digits.
    let (datetime_part, rest) = s.split_at(14);
    if !rest.starts_with('.') {
        return Err(invalid(input, "missing '.' before fractional seconds"));
    }
    let (fraction_part, zone_part) = rest[1..].split_at(6);

    let naive = NaiveDateTime::parse_from_str(datetime_part, "%Y%m%d%H%M%S")
        .map_err(|e| invalid(input, format!("bad datetime digits: {}", e)))?;

    let micros: u32 = fraction_part
        .parse()
        .map_err(|_| invalid(input, "bad fractional seconds"))?;
    let naive = naive
        .with_nanosecond(micros * 1_000)
        .ok_or_else(|| invalid(input, "fractional seconds out of range"))?;

    let sign = match zone_part.as_bytes()[0] {
        b'+' => 1,
        b'-' => -1,
        _ => return Err(invalid(input, "zone offset must start with '+' or '-'")),
    };
    let offset_minutes: i32 = zone_part[1..]
        .parse()
        .map_err(|_| invalid(input, "bad zone offset digits"))?;

    let offset = FixedOffset::east_opt(sign * offset_minutes * 60)
        .ok_or_else(|| invalid(input, "zone offset out of range"))?;

    offset
        .from_local_datetime(&naive)
        .single()
        .ok_or_else(|| invalid(input, "ambiguous local time"))
}

/// Formats a timestamp as `YYYY-MM-DD-hh-mm-ss` in its own offset, i.e. the
/// wall-clock fields exactly as the source reported them.
pub fn format_timestamp(t: &DateTime<FixedOffset>) -> String {
    t.format("%Y-%m-%d-%H-%M-%S").to_string()
}

fn invalid(input: &str, message: impl Into<String>) -> ParseError {
    ParseError {
        input: input.to_string(),
        message: message.into(),
    }
}
