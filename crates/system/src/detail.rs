use crate::provider::MetricsProvider;
use aqua_core::{state::gib, DetailKind, Result, TextSink};
use std::path::Path;
use tracing::debug;

/// Write the on-demand report for `kind` into `log` and scroll to it.
///
/// Every line is gathered before anything is written, so a failing provider
/// call leaves the log untouched.
pub fn report<P, T>(kind: DetailKind, provider: &mut P, disk_path: &Path, log: &mut T) -> Result<()>
where
    P: MetricsProvider + ?Sized,
    T: TextSink + ?Sized,
{
    let lines = match kind {
        DetailKind::Cpu         => cpu_lines(provider)?,
        DetailKind::Memory      => memory_lines(provider)?,
        DetailKind::Disk        => disk_lines(provider, disk_path)?,
        DetailKind::Temperature => temperature_lines(provider),
    };

    for line in &lines {
        log.append_line(line);
    }
    log.scroll_to_end();
    Ok(())
}

fn cpu_lines<P: MetricsProvider + ?Sized>(provider: &mut P) -> Result<Vec<String>> {
    let freq = provider.cpu_freq()?;
    let count = |n: Option<usize>| n.map_or_else(|| "unknown".to_string(), |n| n.to_string());

    Ok(vec![
        "[INFO] CPU Information:".to_string(),
        format!("  - Current Frequency: {:.1} MHz", freq.current),
        format!("  - Min Frequency: {:.1} MHz", freq.min),
        format!("  - Max Frequency: {:.1} MHz", freq.max),
        format!("  - CPU Count: {} (Physical cores)", count(provider.cpu_count(false))),
        format!("  - Logical CPUs: {}", count(provider.cpu_count(true))),
    ])
}

fn memory_lines<P: MetricsProvider + ?Sized>(provider: &mut P) -> Result<Vec<String>> {
    let mem = provider.virtual_memory()?;
    Ok(vec![
        "[INFO] Memory Information:".to_string(),
        format!("  - Total Memory: {:.2} GB", gib(mem.total)),
        format!("  - Available Memory: {:.2} GB", gib(mem.available)),
        format!("  - Used Memory: {:.2} GB", gib(mem.used)),
        format!("  - Memory Usage: {:.1}%", mem.percent),
    ])
}

fn disk_lines<P: MetricsProvider + ?Sized>(provider: &mut P, path: &Path) -> Result<Vec<String>> {
    let disk = provider.disk_usage(path)?;
    Ok(vec![
        "[INFO] Disk Information:".to_string(),
        format!("  - Total Space: {:.2} GB", gib(disk.total)),
        format!("  - Used Space: {:.2} GB", gib(disk.used)),
        format!("  - Free Space: {:.2} GB", gib(disk.free)),
        format!("  - Disk Usage: {:.1}%", disk.percent),
    ])
}

fn temperature_lines<P: MetricsProvider + ?Sized>(provider: &mut P) -> Vec<String> {
    let mut lines = vec!["[INFO] Temperature Information:".to_string()];

    let groups = provider.sensors_temperatures().unwrap_or_else(|e| {
        debug!("Temperature report without sensors: {e}");
        Vec::new()
    });
    lines.extend(groups.iter().filter_map(|g| {
        g.readings
            .first()
            .map(|c| format!("  - {} sensor: {c:.1}°C", g.name))
    }));

    if lines.len() == 1 {
        lines.push("  - Temperature data unavailable.".to_string());
    }
    lines
}
