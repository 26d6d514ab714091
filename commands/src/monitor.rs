use std::cmp::Ordering;
use std::thread;
use std::time::Duration;

use sysinfo::MINIMUM_CPU_UPDATE_INTERVAL;
use sysinfo::System;

/// Window over which CPU usage is averaged.
const CPU_SAMPLE_WINDOW: Duration = Duration::from_millis(500);

const BYTES_PER_MB: u64 = 1024 * 1024;

/// One row of the `ps` table.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRow {
    pub pid: String,
    pub name: String,
    pub cpu_percent: f32,
}

/// Samples global CPU usage; blocks for about half a second.
pub fn cpu_usage() -> String {
    let mut system = System::new();
    system.refresh_cpu();
    thread::sleep(CPU_SAMPLE_WINDOW.max(MINIMUM_CPU_UPDATE_INTERVAL));
    system.refresh_cpu();
    format!("CPU Usage: {:.1}%", system.global_cpu_info().cpu_usage())
}

pub fn memory_usage() -> String {
    let mut system = System::new();
    system.refresh_memory();
    format_memory(system.used_memory(), system.total_memory())
}

/// The `limit` busiest processes by CPU usage.
pub fn processes(limit: usize) -> String {
    let mut system = System::new();
    system.refresh_processes();
    thread::sleep(MINIMUM_CPU_UPDATE_INTERVAL);
    system.refresh_processes();

    let rows = system
        .processes()
        .iter()
        .map(|(pid, process)| ProcessRow {
            pid: pid.to_string(),
            name: process.name().to_string(),
            cpu_percent: process.cpu_usage(),
        })
        .collect();
    format_process_table(rows, limit)
}

pub fn uptime() -> String {
    format_uptime(System::uptime())
}

pub fn format_memory(used_bytes: u64, total_bytes: u64) -> String {
    let percent = if total_bytes == 0 {
        0.0
    } else {
        used_bytes as f64 * 100.0 / total_bytes as f64
    };
    format!(
        "Memory Usage: {percent:.1}% ({} MB / {} MB)",
        used_bytes / BYTES_PER_MB,
        total_bytes / BYTES_PER_MB
    )
}

pub fn format_process_table(mut rows: Vec<ProcessRow>, limit: usize) -> String {
    rows.sort_by(|a, b| {
        b.cpu_percent
            .partial_cmp(&a.cpu_percent)
            .unwrap_or(Ordering::Equal)
    });
    let mut lines = vec!["PID    CPU%  NAME".to_string()];
    lines.extend(
        rows.iter()
            .take(limit)
            .map(|row| format!("{:>5}  {:>5.1}%  {}", row.pid, row.cpu_percent, row.name)),
    );
    lines.join("\n")
}

pub fn format_uptime(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;
    format!("System Uptime: {hours}h {minutes}m {secs}s")
}
