//! Host inventory collector for Windows.
//!
//! Every query goes through `wmic` in `/format:list` mode, whose console
//! output arrives in the GBK encoding and is decoded before parsing. The OS,
//! CPU and disk queries are required; the manufacturer lookup falls back to
//! a placeholder instead of failing.

use tracing::warn;

use crate::collector::traits::CommandRunner;
use crate::collector::{CollectError, Collector, Phase};
use crate::model::{
    CpuInfo, DiskUsageInfo, LogicalDiskUsageInfo, OsInfo, PhysicalDiskInfo, PhysicalDiskUsageInfo,
};
use crate::util::{
    decode_console_text, key_value_pairs, parse_i64, parse_key_value_list, parse_u32, parse_u64,
    parse_wmi_time,
};

const OS_QUERY: &[&str] = &["os", "get", "/all", "/format:list"];
const MODEL_QUERY: &[&str] = &["computersystem", "get", "model"];
const CPU_QUERY: &[&str] = &[
    "cpu",
    "get",
    "name,NumberOfCores,NumberOfLogicalProcessors,MaxClockSpeed",
    "/format:list",
];
const LOGICAL_DISK_QUERY: &[&str] = &[
    "logicaldisk",
    "get",
    "name,size,freespace,description",
    "/all",
    "/format:list",
];
const DISK_DRIVE_QUERY: &[&str] = &[
    "diskdrive",
    "get",
    "name,size,model,caption",
    "/all",
    "/format:list",
];

/// Placeholder manufacturer when the model query fails.
const UNKNOWN_MANUFACTURER: &str = "unKnown";

/// Collector backed by the `wmic` management tool.
pub struct WindowsCollector<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> WindowsCollector<R> {
    /// Creates a new Windows collector.
    ///
    /// # Arguments
    /// * `runner` - Command runner implementation (real or mock)
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Runs one `wmic` query and returns its decoded, trimmed output.
    ///
    /// Execution and decoding failures are both hard errors tagged with the
    /// collection phase.
    fn query(&self, phase: Phase, args: &[&str]) -> Result<String, CollectError> {
        let raw = self
            .runner
            .run("wmic", args)
            .map_err(|source| CollectError::Command { phase, source })?;
        let text = decode_console_text(&raw).map_err(|_| CollectError::Decode { phase })?;
        Ok(text.trim().to_string())
    }

    /// Looks up the computer model via `wmic computersystem get model`. The
    /// first output line is a column header, the second is the value.
    fn collect_manufacturer(&self) -> Option<String> {
        let raw = self.runner.run("wmic", MODEL_QUERY).ok()?;
        let text = decode_console_text(&raw).ok()?;
        let mut lines = text.trim().lines();
        lines.next()?;
        Some(lines.next()?.trim().to_string())
    }
}

impl<R: CommandRunner> Collector for WindowsCollector<R> {
    fn collect_os(&self) -> Result<OsInfo, CollectError> {
        let text = self.query(Phase::Os, OS_QUERY)?;
        let map = parse_key_value_list(&text);
        let field = |key: &str| map.get(key).cloned().unwrap_or_default();
        let time = |key: &str| map.get(key).and_then(|v| parse_wmi_time(v).ok());

        let manufacturer = self.collect_manufacturer().unwrap_or_else(|| {
            warn!("computer model query failed, reporting manufacturer as unknown");
            UNKNOWN_MANUFACTURER.to_string()
        });

        Ok(OsInfo {
            user_name: field("CSName"),
            manufacturer,
            description: field("Caption"),
            version: field("Version"),
            architecture: field("OSArchitecture"),
            registered_user: field("RegisteredUser"),
            serial_number: field("SerialNumber"),
            install_date: time("InstallDate"),
            last_boot_up_time: time("LastBootUpTime"),
            local_date_time: time("LocalDateTime"),
            // WMI reports both memory counters in kilobytes.
            free_physical_memory: parse_i64(&field("FreePhysicalMemory")),
            total_visible_memory_size: parse_i64(&field("TotalVisibleMemorySize")),
        })
    }

    fn collect_cpu(&self) -> Result<CpuInfo, CollectError> {
        let text = self.query(Phase::Cpu, CPU_QUERY)?;
        let map = parse_key_value_list(&text);
        let field = |key: &str| map.get(key).map(String::as_str).unwrap_or_default();

        Ok(CpuInfo {
            name: field("Name").to_string(),
            number_of_cores: parse_u32(field("NumberOfCores")),
            number_of_logical_processors: parse_u32(field("NumberOfLogicalProcessors")),
            max_clock_speed: parse_u32(field("MaxClockSpeed")),
        })
    }

    fn collect_logical_disks(&self) -> Result<LogicalDiskUsageInfo, CollectError> {
        let text = self.query(Phase::LogicalDisks, LOGICAL_DISK_QUERY)?;
        Ok(LogicalDiskUsageInfo {
            disks: parse_logical_disks(&text),
        })
    }

    fn collect_physical_disks(&self) -> Result<PhysicalDiskUsageInfo, CollectError> {
        let text = self.query(Phase::PhysicalDisks, DISK_DRIVE_QUERY)?;
        Ok(PhysicalDiskUsageInfo {
            disks: parse_physical_disks(&text),
        })
    }
}

/// Parses the repeating-record `logicaldisk` list.
///
/// The stream is flat `Key=Value` lines covering several disks in sequence.
/// A `Description` key starts a new record when the current one already has
/// a name; the trailing record is flushed if it has a name.
fn parse_logical_disks(text: &str) -> Vec<DiskUsageInfo> {
    let mut disks = Vec::new();
    let mut current = DiskUsageInfo::default();

    for (key, value) in key_value_pairs(text) {
        match key {
            "Description" => {
                if !current.name.is_empty() {
                    disks.push(std::mem::take(&mut current));
                }
                current.description = value.to_string();
            }
            "FreeSpace" => current.free_space = parse_u64(value),
            "Name" => current.name = value.to_string(),
            "Size" => current.total_size = parse_u64(value),
            _ => {}
        }
    }

    if !current.name.is_empty() {
        disks.push(current);
    }
    disks
}

/// Parses the repeating-record `diskdrive` list; same technique as the
/// logical disks, with `Caption` as the boundary key.
fn parse_physical_disks(text: &str) -> Vec<PhysicalDiskInfo> {
    let mut disks = Vec::new();
    let mut current = PhysicalDiskInfo::default();

    for (key, value) in key_value_pairs(text) {
        match key {
            "Caption" => {
                if !current.name.is_empty() {
                    disks.push(std::mem::take(&mut current));
                }
                current.caption = value.to_string();
            }
            "Model" => current.model = value.to_string(),
            "Name" => current.name = value.to_string(),
            "Size" => current.size = parse_u64(value),
            _ => {}
        }
    }

    if !current.name.is_empty() {
        disks.push(current);
    }
    disks
}
