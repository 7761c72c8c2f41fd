use crate::cpufreq;
use aqua_core::{
    AquaError, CpuFrequency, DiskUsage, HostInfo, MemoryUsage, Result, SensorGroup,
};
use std::net::IpAddr;
use std::path::Path;
use sysinfo::{Components, Disks, Networks, System};

/// Source of raw operating-system metrics.
///
/// The refresh loop and the detail reports only talk to this trait, so tests
/// can drive them with scripted values.
pub trait MetricsProvider {
    /// Global CPU utilisation since the previous call (0.0 – 100.0).
    fn cpu_percent(&mut self) -> Result<f32>;

    fn virtual_memory(&mut self) -> Result<MemoryUsage>;

    /// Usage of the filesystem mounted at `path`.
    fn disk_usage(&mut self, path: &Path) -> Result<DiskUsage>;

    /// Temperature readings grouped by hardware monitor chip, in discovery order.
    fn sensors_temperatures(&mut self) -> Result<Vec<SensorGroup>>;

    fn cpu_freq(&mut self) -> Result<CpuFrequency>;

    /// Logical CPUs when `logical`, physical cores otherwise.
    fn cpu_count(&mut self, logical: bool) -> Option<usize>;

    fn host_info(&mut self) -> HostInfo;
}

/// [`MetricsProvider`] backed by the `sysinfo` crate.
pub struct SysinfoProvider {
    sys:        System,
    components: Components,
}

impl SysinfoProvider {
    /// Take the initial full refresh.  Fails when the host reports no CPUs,
    /// which leaves nothing meaningful to monitor.
    pub fn new() -> Result<Self> {
        let sys = System::new_all();
        if sys.cpus().is_empty() {
            return Err(AquaError::System("the OS reported no CPUs".into()));
        }

        Ok(Self {
            sys,
            components: Components::new_with_refreshed_list(),
        })
    }
}

impl MetricsProvider for SysinfoProvider {
    fn cpu_percent(&mut self) -> Result<f32> {
        self.sys.refresh_cpu_usage();

        let per_core: Vec<f32> = self.sys.cpus().iter().map(|c| c.cpu_usage()).collect();
        if per_core.is_empty() {
            return Err(AquaError::System("CPU list is empty".into()));
        }
        let average = per_core.iter().sum::<f32>() / per_core.len() as f32;
        Ok(((average * 10.0).round() / 10.0).clamp(0.0, 100.0))
    }

    fn virtual_memory(&mut self) -> Result<MemoryUsage> {
        self.sys.refresh_memory();

        let total = self.sys.total_memory();
        if total == 0 {
            return Err(AquaError::System("total memory reported as zero".into()));
        }
        Ok(MemoryUsage::new(
            total,
            self.sys.available_memory(),
            self.sys.used_memory(),
        ))
    }

    fn disk_usage(&mut self, path: &Path) -> Result<DiskUsage> {
        let disks = Disks::new_with_refreshed_list();
        disks
            .iter()
            .find(|d| d.mount_point() == path)
            .map(|d| DiskUsage::from_space(d.total_space(), d.available_space()))
            .ok_or_else(|| {
                AquaError::System(format!("no filesystem mounted at '{}'", path.display()))
            })
    }

    fn sensors_temperatures(&mut self) -> Result<Vec<SensorGroup>> {
        self.components.refresh(true);
        group_readings(
            self.components
                .iter()
                .map(|c| (c.label().to_string(), c.temperature())),
        )
    }

    fn cpu_freq(&mut self) -> Result<CpuFrequency> {
        self.sys.refresh_cpu_frequency();

        let current = self
            .sys
            .cpus()
            .first()
            .map(|c| c.frequency() as f64)
            .ok_or_else(|| AquaError::System("CPU list is empty".into()))?;
        let (min, max) = cpufreq::read_limits().unwrap_or((current, current));

        Ok(CpuFrequency { current, min, max })
    }

    fn cpu_count(&mut self, logical: bool) -> Option<usize> {
        if logical {
            Some(self.sys.cpus().len()).filter(|&n| n > 0)
        } else {
            System::physical_core_count()
        }
    }

    fn host_info(&mut self) -> HostInfo {
        let unknown = || "unknown".to_string();
        let networks = Networks::new_with_refreshed_list();

        let ip_address = networks
            .iter()
            .flat_map(|(_, data)| data.ip_networks().iter().map(|n| n.addr))
            .find(|addr| matches!(addr, IpAddr::V4(v4) if !v4.is_loopback()))
            .map(|addr| addr.to_string())
            .unwrap_or_else(unknown);

        HostInfo {
            os:           System::name().unwrap_or_else(unknown),
            os_version:   System::os_version().unwrap_or_else(unknown),
            architecture: std::env::consts::ARCH.to_string(),
            processor:    self
                .sys
                .cpus()
                .first()
                .map(|c| c.brand().trim().to_string())
                .filter(|b| !b.is_empty())
                .unwrap_or_else(unknown),
            hostname:     System::host_name().unwrap_or_else(unknown),
            ip_address,
            ram_total:    self.sys.total_memory(),
        }
    }
}

/// Group flat `(label, reading)` pairs by chip name, the first word of the
/// label (`"coretemp Core 0"` → `coretemp`).
///
/// Sensors that returned no value are dropped.  When sensors exist but none
/// of them produced a value the read is reported as failed.
pub fn group_readings<I>(components: I) -> Result<Vec<SensorGroup>>
where
    I: IntoIterator<Item = (String, Option<f32>)>,
{
    let mut groups: Vec<SensorGroup> = Vec::new();
    let mut seen = 0usize;

    for (label, reading) in components {
        seen += 1;
        let Some(celsius) = reading else { continue };

        let name = label.split_whitespace().next().unwrap_or("unknown");
        match groups.iter_mut().find(|g| g.name == name) {
            Some(group) => group.readings.push(celsius),
            None => groups.push(SensorGroup {
                name:     name.to_string(),
                readings: vec![celsius],
            }),
        }
    }

    if seen > 0 && groups.is_empty() {
        return Err(AquaError::Sensor(format!(
            "{seen} sensor(s) present but none returned a reading"
        )));
    }
    Ok(groups)
}
