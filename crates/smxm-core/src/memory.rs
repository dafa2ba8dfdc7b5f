use serde::{Deserialize, Serialize};
use sysinfo::System;

/// Peak resident set size of the process, sampled once after the multiply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryReport {
    pub peak_rss_kb: Option<u64>,
}

impl MemoryReport {
    pub fn sample() -> Self {
        Self {
            peak_rss_kb: measure_peak_memory(),
        }
    }

    /// Kilobytes to print; `0` when the platform could not report a value.
    pub fn kilobytes(&self) -> u64 {
        self.peak_rss_kb.unwrap_or(0)
    }
}

/// Maximum resident set size observed so far for this process, in kilobytes.
///
/// On Linux this is the `VmHWM` high-water mark from `/proc/self/status`.
/// Elsewhere the current resident memory reported by `sysinfo` is used, which
/// is a lower bound of the peak. Returns `None` if neither source answers.
pub fn measure_peak_memory() -> Option<u64> {
    #[cfg(target_os = "linux")]
    {
        if let Some(kb) = std::fs::read_to_string("/proc/self/status")
            .ok()
            .and_then(|status| parse_status_kb(&status, "VmHWM:"))
        {
            return Some(kb);
        }
        log::debug!("VmHWM unavailable, falling back to sysinfo");
    }
    process_rss_kb()
}

/// Current resident memory of this process according to `sysinfo`, in kilobytes.
pub fn process_rss_kb() -> Option<u64> {
    let pid = sysinfo::get_current_pid().ok()?;
    let mut sys = System::new();
    if !sys.refresh_process(pid) {
        return None;
    }
    sys.process(pid).map(|p| p.memory() / 1024)
}

/// Parse a `Key:   123456 kB` line out of a `/proc/<pid>/status` dump.
pub fn parse_status_kb(status: &str, key: &str) -> Option<u64> {
    status
        .lines()
        .find(|line| line.starts_with(key))
        .and_then(|line| line.split_whitespace().nth(1))
        .and_then(|v| v.parse::<u64>().ok())
}
