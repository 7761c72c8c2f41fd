/// Read the hardware frequency limits of the first CPU from the Linux sysfs
/// cpufreq interface.
///
/// Returns `(min_mhz, max_mhz)`, or `None` when the kernel exposes no
/// cpufreq driver (VMs, containers, non-Linux hosts).
pub fn read_limits() -> Option<(f64, f64)> {
    let base = std::path::Path::new("/sys/devices/system/cpu/cpu0/cpufreq");
    if !base.exists() {
        return None;
    }

    let min = read_khz(&base.join("cpuinfo_min_freq"))?;
    let max = read_khz(&base.join("cpuinfo_max_freq"))?;

    Some((min / 1000.0, max / 1000.0))
}

fn read_khz(path: &std::path::Path) -> Option<f64> {
    parse_khz(&std::fs::read_to_string(path).ok()?)
}

fn parse_khz(raw: &str) -> Option<f64> {
    raw.trim().parse::<u64>().ok().map(|khz| khz as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_khz_trims_newline() {
        assert_eq!(parse_khz("3600000\n"), Some(3_600_000.0));
    }

    #[test]
    fn parse_khz_rejects_garbage() {
        assert_eq!(parse_khz("<unknown>"), None);
        assert_eq!(parse_khz(""), None);
    }
}
