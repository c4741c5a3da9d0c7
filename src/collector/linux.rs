//! Host inventory collector for Linux.
//!
//! Shells out to the usual suspects (`lsb_release`, `uname`, `free`, `df`,
//! `lsblk`, plus `/proc/cpuinfo`). OS identity lookups are best effort and
//! never fail the collection; CPU and disk lookups hard-fail only when the
//! underlying command cannot be executed.

use chrono::Local;
use tracing::debug;

use crate::collector::traits::CommandRunner;
use crate::collector::{CollectError, Collector, Phase};
use crate::model::{
    CpuInfo, DiskUsageInfo, LogicalDiskUsageInfo, OsInfo, PhysicalDiskInfo, PhysicalDiskUsageInfo,
};
use crate::util::{parse_byte_size, parse_i64, parse_u32, parse_u64};

/// Collector backed by Linux command-line utilities.
pub struct LinuxCollector<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> LinuxCollector<R> {
    /// Creates a new Linux collector.
    ///
    /// # Arguments
    /// * `runner` - Command runner implementation (real or mock)
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Runs a command and returns its stdout as text, or `None` on any
    /// failure. Used for the optional OS identity lookups.
    fn run_text(&self, program: &str, args: &[&str]) -> Option<String> {
        match self.runner.run(program, args) {
            Ok(out) => Some(String::from_utf8_lossy(&out).into_owned()),
            Err(e) => {
                debug!("{} failed, leaving field empty: {}", program, e);
                None
            }
        }
    }

    fn run_required(&self, phase: Phase, program: &str, args: &[&str]) -> Result<String, CollectError> {
        let out = self
            .runner
            .run(program, args)
            .map_err(|source| CollectError::Command { phase, source })?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }
}

impl<R: CommandRunner> Collector for LinuxCollector<R> {
    /// Collects OS identity and memory counters. Every lookup here is
    /// optional, so this never returns an error.
    fn collect_os(&self) -> Result<OsInfo, CollectError> {
        // The current process owner doubles as the registered user; Linux
        // has no separate registration concept.
        let user_name = std::env::var("USER").unwrap_or_default();
        let mut info = OsInfo {
            registered_user: user_name.clone(),
            user_name,
            local_date_time: Some(Local::now().fixed_offset()),
            ..OsInfo::default()
        };

        if let Some(out) = self.run_text("lsb_release", &["-a"]) {
            for line in out.lines() {
                if let Some(rest) = line.strip_prefix("Description:") {
                    info.description = rest.trim().to_string();
                }
            }
        }

        if let Some(out) = self.run_text("uname", &["-r"]) {
            info.version = out.trim().to_string();
        }

        if let Some(out) = self.run_text("uname", &["-m"]) {
            info.architecture = out.trim().to_string();
        }

        // free -b: second line is "Mem:", field 1 total and field 3 free,
        // both in bytes.
        if let Some(out) = self.run_text("free", &["-b"]) {
            if let Some(mem_line) = out.lines().nth(1) {
                let fields: Vec<&str> = mem_line.split_whitespace().collect();
                if fields.len() > 1 {
                    info.total_visible_memory_size = parse_i64(fields[1]);
                }
                if fields.len() > 3 {
                    info.free_physical_memory = parse_i64(fields[3]);
                }
            }
        }

        Ok(info)
    }

    fn collect_cpu(&self) -> Result<CpuInfo, CollectError> {
        let out = self.run_required(Phase::Cpu, "cat", &["/proc/cpuinfo"])?;

        let mut info = CpuInfo::default();
        for line in out.lines() {
            if let Some(value) = field_value(line, "model name") {
                info.name = value.to_string();
            } else if let Some(value) = field_value(line, "cpu cores") {
                info.number_of_cores = parse_u32(value);
            } else if let Some(value) = field_value(line, "siblings") {
                info.number_of_logical_processors = parse_u32(value);
            } else if let Some(value) = field_value(line, "cpu MHz") {
                info.max_clock_speed = value.parse::<f64>().map(|mhz| mhz as u32).unwrap_or(0);
            }
        }

        Ok(info)
    }

    fn collect_logical_disks(&self) -> Result<LogicalDiskUsageInfo, CollectError> {
        let out = self.run_required(Phase::LogicalDisks, "df", &["-B1"])?;

        let mut disks = Vec::new();
        for line in out.lines().skip(1) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() >= 6 {
                disks.push(DiskUsageInfo {
                    name: fields[0].to_string(),
                    description: fields[5].to_string(),
                    total_size: parse_u64(fields[1]),
                    free_space: parse_u64(fields[3]),
                });
            }
        }

        Ok(LogicalDiskUsageInfo { disks })
    }

    fn collect_physical_disks(&self) -> Result<PhysicalDiskUsageInfo, CollectError> {
        let out = self.run_required(Phase::PhysicalDisks, "lsblk", &["-ndo", "NAME,SIZE,MODEL"])?;

        let mut disks = Vec::new();
        for line in out.lines() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() >= 2 {
                let model = if fields.len() >= 3 {
                    fields[2..].join(" ")
                } else {
                    String::new()
                };
                disks.push(PhysicalDiskInfo {
                    // lsblk has no separate caption column; the device name
                    // stands in for it.
                    caption: fields[0].to_string(),
                    model,
                    name: fields[0].to_string(),
                    size: parse_byte_size(fields[1]).unwrap_or(0),
                });
            }
        }

        Ok(PhysicalDiskUsageInfo { disks })
    }
}

/// Extracts the value of a colon-separated `/proc/cpuinfo` line if it starts
/// with `key`.
fn field_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    if !line.starts_with(key) {
        return None;
    }
    line.split_once(':').map(|(_, value)| value.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::MockRunner;

    #[test]
    fn test_collect_os() {
        let collector = LinuxCollector::new(MockRunner::typical_linux());
        let info = collector.collect_os().unwrap();

        assert_eq!(info.description, "Ubuntu 22.04.4 LTS");
        assert_eq!(info.version, "6.5.0-35-generic");
        assert_eq!(info.architecture, "x86_64");
        assert_eq!(info.total_visible_memory_size, 16706158592);
        assert_eq!(info.free_physical_memory, 2147483648);
        assert!(info.local_date_time.is_some());
        // Not collectable through this path.
        assert!(info.install_date.is_none());
        assert!(info.last_boot_up_time.is_none());
        assert_eq!(info.serial_number, "");
        assert_eq!(info.manufacturer, "");
    }

    #[test]
    fn test_collect_os_absorbs_missing_commands() {
        // No commands registered at all: everything stays at its default.
        let collector = LinuxCollector::new(MockRunner::new());
        let info = collector.collect_os().unwrap();

        assert_eq!(info.description, "");
        assert_eq!(info.version, "");
        assert_eq!(info.total_visible_memory_size, 0);
        assert_eq!(info.free_physical_memory, 0);
    }

    #[test]
    fn test_collect_os_short_free_output_yields_zero() {
        let mut runner = MockRunner::typical_linux();
        runner.add_output("free -b", "               total\n");
        let collector = LinuxCollector::new(runner);
        let info = collector.collect_os().unwrap();

        assert_eq!(info.total_visible_memory_size, 0);
        assert_eq!(info.free_physical_memory, 0);
    }

    #[test]
    fn test_collect_cpu() {
        let collector = LinuxCollector::new(MockRunner::typical_linux());
        let info = collector.collect_cpu().unwrap();

        assert_eq!(info.name, "Intel(R) Core(TM) i3-10100 CPU @ 3.60GHz");
        assert_eq!(info.number_of_cores, 4);
        assert_eq!(info.number_of_logical_processors, 8);
        assert_eq!(info.max_clock_speed, 3600);
    }

    #[test]
    fn test_collect_cpu_missing_fields_stay_zero() {
        let mut runner = MockRunner::new();
        runner.add_output(
            "cat /proc/cpuinfo",
            "processor\t: 0\nmodel name\t: Some CPU\nflags\t\t: fpu\n",
        );
        let collector = LinuxCollector::new(runner);
        let info = collector.collect_cpu().unwrap();

        assert_eq!(info.name, "Some CPU");
        assert_eq!(info.number_of_cores, 0);
        assert_eq!(info.number_of_logical_processors, 0);
        assert_eq!(info.max_clock_speed, 0);
    }

    #[test]
    fn test_collect_cpu_hard_fails_without_command() {
        let collector = LinuxCollector::new(MockRunner::new());
        let err = collector.collect_cpu().unwrap_err();
        assert!(err.to_string().contains("CPU info"));
    }

    #[test]
    fn test_collect_logical_disks() {
        let collector = LinuxCollector::new(MockRunner::typical_linux());
        let info = collector.collect_logical_disks().unwrap();

        assert_eq!(info.disks.len(), 3);
        assert_eq!(info.disks[0].name, "/dev/nvme0n1p2");
        assert_eq!(info.disks[0].description, "/");
        assert_eq!(info.disks[0].total_size, 502468108288);
        assert_eq!(info.disks[0].free_space, 374923280384);
        assert_eq!(info.disks[2].description, "/boot/efi");
    }

    #[test]
    fn test_collect_logical_disks_skips_short_lines() {
        let mut runner = MockRunner::new();
        runner.add_output(
            "df -B1",
            "Filesystem 1B-blocks Used Available Use% Mounted on\nbroken line\n/dev/sda1 100 50 50 50% /data\n",
        );
        let collector = LinuxCollector::new(runner);
        let info = collector.collect_logical_disks().unwrap();

        assert_eq!(info.disks.len(), 1);
        assert_eq!(info.disks[0].description, "/data");
    }

    #[test]
    fn test_collect_physical_disks() {
        let collector = LinuxCollector::new(MockRunner::typical_linux());
        let info = collector.collect_physical_disks().unwrap();

        assert_eq!(info.disks.len(), 2);
        assert_eq!(info.disks[0].name, "nvme0n1");
        assert_eq!(info.disks[0].caption, "nvme0n1");
        assert_eq!(info.disks[0].model, "Samsung SSD 980 PRO 500GB");
        assert_eq!(info.disks[0].size, (476.9 * (1u64 << 30) as f64) as u64);
        assert_eq!(info.disks[1].size, (1.8 * (1u64 << 40) as f64) as u64);
    }

    #[test]
    fn test_collect_physical_disks_without_model_column() {
        let mut runner = MockRunner::new();
        runner.add_output("lsblk -ndo NAME,SIZE,MODEL", "sr0 1024\n");
        let collector = LinuxCollector::new(runner);
        let info = collector.collect_physical_disks().unwrap();

        assert_eq!(info.disks.len(), 1);
        assert_eq!(info.disks[0].model, "");
        assert_eq!(info.disks[0].size, 1024);
    }

    #[test]
    fn test_collect_disks_hard_fail_without_commands() {
        let collector = LinuxCollector::new(MockRunner::new());
        assert!(collector.collect_logical_disks().is_err());
        assert!(collector.collect_physical_disks().is_err());
    }
}
