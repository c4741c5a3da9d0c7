//! pcinfo - Host inventory collection library.
//!
//! Collects static host inventory (OS identity, CPU topology, logical and
//! physical disk usage) by invoking platform utilities and parsing their
//! output into one normalized record:
//! - Linux: `lsb_release`, `uname`, `free`, `/proc/cpuinfo`, `df`, `lsblk`
//! - Windows: `wmic` query modes, decoded from the GBK console encoding
//!
//! The `pcinfo` binary renders the record as a text report.

pub mod collector;
pub mod model;
pub mod util;
