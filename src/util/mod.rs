//! Utility modules for pcinfo.

mod parse;
mod wmi_time;

pub use parse::{
    ParseError, decode_console_text, key_value_pairs, parse_byte_size, parse_i64,
    parse_key_value_list, parse_u32, parse_u64,
};
pub use wmi_time::{format_timestamp, parse_wmi_time};
