use crate::provider::MetricsProvider;
use aqua_core::{FallbackCause, Result, Sample, SensorGroup, Temperature};
use chrono::NaiveTime;
use std::path::Path;
use tracing::debug;

/// Take one [`Sample`] from `provider`.
///
/// CPU, memory and disk failures propagate.  The temperature never fails:
/// see [`read_temperature`].
pub fn sample<P>(provider: &mut P, disk_path: &Path, now: NaiveTime) -> Result<Sample>
where
    P: MetricsProvider + ?Sized,
{
    let cpu_percent  = provider.cpu_percent()?;
    let mem_percent  = provider.virtual_memory()?.percent;
    let disk_percent = provider.disk_usage(disk_path)?.percent;
    let temperature  = read_temperature(provider, cpu_percent);

    Ok(Sample {
        timestamp: now,
        cpu_percent,
        mem_percent,
        disk_percent,
        temperature,
    })
}

/// First reading of the first sensor group that has one.
///
/// Absent sensors, a failed read and a non-finite value all yield the
/// load-derived synthetic temperature for `cpu_percent`.
pub fn read_temperature<P>(provider: &mut P, cpu_percent: f32) -> Temperature
where
    P: MetricsProvider + ?Sized,
{
    let cause = match provider.sensors_temperatures() {
        Ok(groups) => match first_reading(&groups) {
            Some(c) if c.is_finite() => return Temperature::Sensor(c),
            Some(c) => FallbackCause::ReadFailed(format!("non-finite reading {c}")),
            None    => FallbackCause::NoSensors,
        },
        Err(e) => FallbackCause::ReadFailed(e.to_string()),
    };

    debug!("Using synthetic temperature: {cause}");
    Temperature::synthetic(cpu_percent, cause)
}

fn first_reading(groups: &[SensorGroup]) -> Option<f32> {
    groups.iter().find_map(|g| g.readings.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fake::{FakeProvider, Sensors};
    use aqua_core::AquaError;

    fn noon() -> NaiveTime {
        NaiveTime::from_hms_opt(12, 0, 0).unwrap()
    }

    #[test]
    fn reads_every_metric() {
        let mut p = FakeProvider::new().with_cpu([25.0]).with_mem(60.0);
        let s = sample(&mut p, Path::new("/"), noon()).unwrap();

        assert_eq!(s.cpu_percent, 25.0);
        assert_eq!(s.mem_percent, 60.0);
        assert_eq!(s.disk_percent, p.disk.percent);
        assert_eq!(s.temperature, Temperature::Sensor(48.0));
        assert_eq!(s.timestamp, noon());
    }

    #[test]
    fn skips_empty_groups() {
        let mut p = FakeProvider::new().with_sensors(Sensors::Groups(vec![
            SensorGroup { name: "acpitz".into(), readings: vec![] },
            SensorGroup { name: "coretemp".into(), readings: vec![61.0, 58.0] },
        ]));
        assert_eq!(read_temperature(&mut p, 10.0), Temperature::Sensor(61.0));
    }

    #[test]
    fn no_groups_falls_back() {
        let mut p = FakeProvider::new().with_sensors(Sensors::Groups(vec![]));
        let t = read_temperature(&mut p, 50.0);
        assert_eq!(t, Temperature::synthetic(50.0, FallbackCause::NoSensors));
        assert_eq!(t.celsius(), 60.0);
    }

    #[test]
    fn read_error_falls_back() {
        let mut p = FakeProvider::new().with_sensors(Sensors::Fail);
        let t = read_temperature(&mut p, 80.0);
        assert!(matches!(
            t,
            Temperature::Synthetic { cause: FallbackCause::ReadFailed(_), .. }
        ));
        assert!((t.celsius() - 69.0).abs() < 1e-4);
    }

    #[test]
    fn nan_reading_falls_back() {
        let mut p = FakeProvider::new().with_sensors(Sensors::Groups(vec![SensorGroup {
            name:     "k10temp".into(),
            readings: vec![f32::NAN],
        }]));
        assert_eq!(read_temperature(&mut p, 0.0).celsius(), 45.0);
    }

    #[test]
    fn disk_failure_propagates() {
        let mut p = FakeProvider::new();
        let err = sample(&mut p, Path::new("/mnt/missing"), noon()).unwrap_err();
        assert!(matches!(err, AquaError::System(_)));
    }
}
