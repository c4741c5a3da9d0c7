//! Field parsers for free-text utility output.
//!
//! Numeric helpers follow a best-effort policy: a value that does not parse
//! becomes zero and is never surfaced as an error. Only `parse_byte_size`
//! and `decode_console_text` can fail, and only their callers decide whether
//! that failure is hard.

use std::collections::HashMap;

use encoding_rs::GBK;

/// Error type for field parsing failures.
#[derive(Debug, Clone)]
pub struct ParseError {
    pub input: String,
    pub message: String,
}

impl ParseError {
    fn new(input: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "failed to parse '{}': {}", self.input, self.message)
    }
}

impl std::error::Error for ParseError {}

/// Parses a decimal string as `u32`, returning zero on failure.
pub fn parse_u32(s: &str) -> u32 {
    s.trim().parse().unwrap_or(0)
}

/// Parses a decimal string as `i64`, returning zero on failure.
pub fn parse_i64(s: &str) -> i64 {
    s.trim().parse().unwrap_or(0)
}

/// Parses a decimal string as `u64`, returning zero on failure.
pub fn parse_u64(s: &str) -> u64 {
    s.trim().parse().unwrap_or(0)
}

/// Parses a size like `512`, `476.9G` or `1T` into bytes.
///
/// `G` means 2^30 and `T` means 2^40; no suffix means bytes. The magnitude
/// may be fractional, the result is truncated. Errs only when the magnitude
/// is not a number.
pub fn parse_byte_size(s: &str) -> Result<u64, ParseError> {
    let s = s.trim();

    let (magnitude, multiplier) = if let Some(rest) = s.strip_suffix('G') {
        (rest, 1u64 << 30)
    } else if let Some(rest) = s.strip_suffix('T') {
        (rest, 1u64 << 40)
    } else {
        (s, 1)
    };

    let value: f64 = magnitude
        .parse()
        .map_err(|_| ParseError::new(s, "not a numeric size"))?;

    Ok((value * multiplier as f64) as u64)
}

/// Decodes GBK console output into a UTF-8 string.
///
/// `wmic` writes its reports in the legacy double-byte console encoding on
/// Chinese-locale systems; plain ASCII output passes through unchanged.
/// An invalid byte sequence is an error, not a lossy replacement.
pub fn decode_console_text(bytes: &[u8]) -> Result<String, ParseError> {
    let (text, _, had_errors) = GBK.decode(bytes);
    if had_errors {
        return Err(ParseError::new(
            String::from_utf8_lossy(bytes),
            "invalid GBK byte sequence",
        ));
    }
    Ok(text.into_owned())
}

/// Iterates over `Key=Value` lines, trimming both sides.
///
/// Lines without a `=` are skipped. Only the first `=` delimits; values may
/// contain further `=` characters.
pub fn key_value_pairs(text: &str) -> impl Iterator<Item = (&str, &str)> {
    text.lines().filter_map(|line| {
        let (key, value) = line.split_once('=')?;
        Some((key.trim(), value.trim()))
    })
}

/// Parses a `Key=Value` list into a map. The last occurrence of a duplicate
/// key wins.
pub fn parse_key_value_list(text: &str) -> HashMap<String, String> {
    key_value_pairs(text)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
