//! Host inventory collectors.
//!
//! One `Collector` capability, two platform implementations: Linux shells
//! out to `lsb_release`/`uname`/`free`/`df`/`lsblk`, Windows drives `wmic`.
//! Both run over the `CommandRunner` seam so tests can substitute canned
//! output via `mock::MockRunner`.

pub mod linux;
pub mod mock;
pub mod traits;
pub mod windows;

use std::io;

pub use linux::LinuxCollector;
pub use traits::{CommandRunner, SystemRunner};
pub use windows::WindowsCollector;

use crate::model::{CpuInfo, LogicalDiskUsageInfo, OsInfo, PcInfo, PhysicalDiskUsageInfo};

/// Collection phase, used to name the failing step in errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Os,
    Cpu,
    LogicalDisks,
    PhysicalDisks,
}

impl Phase {
    fn as_str(self) -> &'static str {
        match self {
            Phase::Os => "OS info",
            Phase::Cpu => "CPU info",
            Phase::LogicalDisks => "logical disk usage info",
            Phase::PhysicalDisks => "physical disk usage info",
        }
    }
}

/// Error type for hard collection failures.
///
/// Soft failures (a single missing key or unparseable number) never surface
/// here; they leave the field at its zero default.
#[derive(Debug)]
pub enum CollectError {
    /// A required external command could not be executed.
    Command { phase: Phase, source: io::Error },
    /// Command output was not valid console-encoded text.
    Decode { phase: Phase },
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Command { phase, source } => {
                write!(f, "failed to get {}: {}", phase.as_str(), source)
            }
            CollectError::Decode { phase } => {
                write!(f, "failed to get {}: invalid console encoding", phase.as_str())
            }
        }
    }
}

impl std::error::Error for CollectError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectError::Command { source, .. } => Some(source),
            CollectError::Decode { .. } => None,
        }
    }
}

/// Platform-specific inventory collection capability.
pub trait Collector {
    fn collect_os(&self) -> Result<OsInfo, CollectError>;
    fn collect_cpu(&self) -> Result<CpuInfo, CollectError>;
    fn collect_logical_disks(&self) -> Result<LogicalDiskUsageInfo, CollectError>;
    fn collect_physical_disks(&self) -> Result<PhysicalDiskUsageInfo, CollectError>;

    /// Runs the four sub-collections in sequence and assembles the composite
    /// record, stopping at the first hard failure. Each command is invoked
    /// exactly once; there are no retries.
    fn collect_all(&self) -> Result<PcInfo, CollectError> {
        Ok(PcInfo {
            os: self.collect_os()?,
            cpu: self.collect_cpu()?,
            logical_disks: self.collect_logical_disks()?,
            physical_disks: self.collect_physical_disks()?,
        })
    }
}

/// Collects the host inventory with the platform's native collector.
pub fn collect() -> Result<PcInfo, CollectError> {
    #[cfg(target_os = "windows")]
    {
        WindowsCollector::new(SystemRunner::new()).collect_all()
    }
    #[cfg(not(target_os = "windows"))]
    {
        LinuxCollector::new(SystemRunner::new()).collect_all()
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockRunner;
    use super::*;

    #[test]
    fn test_collect_all_linux_end_to_end() {
        let collector = LinuxCollector::new(MockRunner::typical_linux());
        let info = collector.collect_all().unwrap();

        assert_eq!(info.os.description, "Ubuntu 22.04.4 LTS");
        assert_eq!(info.cpu.number_of_cores, 4);
        assert_eq!(info.logical_disks.disks.len(), 3);
        assert_eq!(info.physical_disks.disks.len(), 2);

        let report = info.to_string();
        let os = report.find("OS Info:").unwrap();
        let cpu = report.find("CPU Info:").unwrap();
        let logical = report.find("Logical Disk Usage:").unwrap();
        let physical = report.find("Physical Disk Info:").unwrap();
        assert!(os < cpu && cpu < logical && logical < physical);
        // df sizes are bytes, rendered with the 2^30 divisor.
        assert!(report.contains("Total Size: 467.96 GB"));
    }

    #[test]
    fn test_collect_all_windows_end_to_end() {
        let collector = WindowsCollector::new(MockRunner::typical_windows());
        let info = collector.collect_all().unwrap();

        assert_eq!(info.os.user_name, "DESKTOP-ABC123");
        assert_eq!(info.cpu.number_of_logical_processors, 16);
        assert_eq!(info.logical_disks.disks.len(), 2);
        assert_eq!(info.physical_disks.disks.len(), 2);

        let report = info.to_string();
        assert!(report.contains("Local Date Time: 2024-08-16-23-29-57"));
        // WMI memory counters are kilobytes, rendered with the 2^20 divisor.
        assert!(report.contains("Total Visible Memory Size: 15.89 GB"));
    }

    #[test]
    fn test_collect_all_stops_at_first_hard_failure() {
        let mut runner = MockRunner::typical_linux();
        runner.remove("cat /proc/cpuinfo");
        let collector = LinuxCollector::new(runner);

        let err = collector.collect_all().unwrap_err();
        assert!(matches!(err, CollectError::Command { phase: Phase::Cpu, .. }));
        assert_eq!(
            err.to_string(),
            "failed to get CPU info: command not found: cat /proc/cpuinfo"
        );
    }

    #[test]
    fn test_collect_all_os_failures_are_soft_on_linux() {
        let mut runner = MockRunner::typical_linux();
        runner.remove("lsb_release -a");
        runner.remove("free -b");
        let collector = LinuxCollector::new(runner);

        let info = collector.collect_all().unwrap();
        assert_eq!(info.os.description, "");
        assert_eq!(info.os.total_visible_memory_size, 0);
    }
}
