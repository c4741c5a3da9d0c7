//! Normalized host inventory records and their text rendering.
//!
//! All records are one-shot snapshots: collected, read, discarded. Numeric
//! fields default to zero and time fields to `None` when the underlying
//! utility output is missing or unparseable.

use std::fmt;

use chrono::{DateTime, FixedOffset};

use crate::util::format_timestamp;

/// Operating system identity and memory counters.
///
/// `free_physical_memory` and `total_visible_memory_size` keep each
/// platform's raw unit: bytes on Linux (`free -b`), kilobyte-valued WMI
/// counters on Windows. The renderer divides both by 2^20 either way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OsInfo {
    pub user_name: String,
    pub manufacturer: String,
    /// Full OS description, e.g. "Ubuntu 22.04.4 LTS".
    pub description: String,
    pub version: String,
    pub architecture: String,
    pub registered_user: String,
    pub serial_number: String,
    pub install_date: Option<DateTime<FixedOffset>>,
    pub last_boot_up_time: Option<DateTime<FixedOffset>>,
    pub local_date_time: Option<DateTime<FixedOffset>>,
    pub free_physical_memory: i64,
    pub total_visible_memory_size: i64,
}

/// CPU model and topology.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuInfo {
    pub name: String,
    pub number_of_cores: u32,
    pub number_of_logical_processors: u32,
    /// MHz, truncated to an integer.
    pub max_clock_speed: u32,
}

/// One logical volume.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskUsageInfo {
    pub name: String,
    pub description: String,
    pub total_size: u64,
    pub free_space: u64,
}

/// Logical volumes in discovery order. May be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogicalDiskUsageInfo {
    pub disks: Vec<DiskUsageInfo>,
}

/// One physical disk device.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalDiskInfo {
    pub caption: String,
    pub model: String,
    pub name: String,
    pub size: u64,
}

/// Physical disk devices in discovery order. May be empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PhysicalDiskUsageInfo {
    pub disks: Vec<PhysicalDiskInfo>,
}

/// Composite record produced by one collection call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PcInfo {
    pub os: OsInfo,
    pub cpu: CpuInfo,
    pub logical_disks: LogicalDiskUsageInfo,
    pub physical_disks: PhysicalDiskUsageInfo,
}

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const MIB: f64 = 1024.0 * 1024.0;

fn format_time(t: Option<&DateTime<FixedOffset>>) -> String {
    match t {
        Some(t) => format_timestamp(t),
        None => "N/A".to_string(),
    }
}

impl fmt::Display for OsInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "User Name: {}\n\
             OS Info: {}\n\
             PC Manufacturer: {}\n\
             OS Version: {}\n\
             OS Architecture: {}\n\
             Registered User: {}\n\
             Serial Number: {}\n\
             Install Date: {}\n\
             Last Boot Up Time: {}\n\
             Local Date Time: {}\n\
             Free Physical Memory: {:.2} GB\n\
             Total Visible Memory Size: {:.2} GB",
            self.user_name,
            self.description,
            self.manufacturer,
            self.version,
            self.architecture,
            self.registered_user,
            self.serial_number,
            format_time(self.install_date.as_ref()),
            format_time(self.last_boot_up_time.as_ref()),
            format_time(self.local_date_time.as_ref()),
            self.free_physical_memory as f64 / MIB,
            self.total_visible_memory_size as f64 / MIB,
        )
    }
}

impl fmt::Display for CpuInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "CPU Name: {}\n\
             Number of Cores: {}\n\
             Number of Logical Processors: {}\n\
             Max Clock Speed: {:.2} GHz",
            self.name,
            self.number_of_cores,
            self.number_of_logical_processors,
            self.max_clock_speed as f64 / 1000.0,
        )
    }
}

impl fmt::Display for DiskUsageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Disk Name: {}\n\
             Description: {}\n\
             Total Size: {:.2} GB\n\
             Free Space: {:.2} GB",
            self.name,
            self.description,
            self.total_size as f64 / GIB,
            self.free_space as f64 / GIB,
        )
    }
}

impl fmt::Display for LogicalDiskUsageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, disk) in self.disks.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", disk)?;
        }
        Ok(())
    }
}

impl fmt::Display for PhysicalDiskInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Caption: {}\n\
             Model: {}\n\
             Name: {}\n\
             Size: {:.2} GB",
            self.caption,
            self.model,
            self.name,
            self.size as f64 / GIB,
        )
    }
}

impl fmt::Display for PhysicalDiskUsageInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, disk) in self.disks.iter().enumerate() {
            if i > 0 {
                write!(f, "\n\n")?;
            }
            write!(f, "{}", disk)?;
        }
        Ok(())
    }
}

impl fmt::Display for PcInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "PC Information:")?;
        writeln!(f, "OS Info:")?;
        writeln!(f, "{}", self.os)?;
        writeln!(f, "CPU Info:")?;
        writeln!(f, "{}", self.cpu)?;
        writeln!(f, "Logical Disk Usage:")?;
        writeln!(f, "{}", self.logical_disks)?;
        writeln!(f, "Physical Disk Info:")?;
        write!(f, "{}", self.physical_disks)
    }
}
