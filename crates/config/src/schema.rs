use aqua_core::{AquaError, DetailKind, Result};
use serde::{Deserialize, Serialize};

/// Smallest accepted `theme.font_size`.  Secondary labels render two points
/// below it, and the text shaper rejects sizes at or below zero.
pub const MIN_FONT_SIZE: f32 = 8.0;

/// Root configuration structure parsed from `aqua.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AquaConfig {
    /// Sampling settings; read once at startup.
    pub monitor: MonitorConfig,
    /// Main window geometry and title.
    pub window: WindowConfig,
    /// On-demand detail actions shown as buttons.  Empty hides the action row.
    pub details: Vec<DetailKind>,
    /// Theme / visual settings.
    pub theme: ThemeConfig,
}

impl Default for AquaConfig {
    fn default() -> Self {
        Self {
            monitor: MonitorConfig::default(),
            window:  WindowConfig::default(),
            details: DetailKind::ALL.to_vec(),
            theme:   ThemeConfig::default(),
        }
    }
}

impl AquaConfig {
    /// Reject values the refresh loop cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.monitor.history_len == 0 {
            return Err(AquaError::Config("monitor.history_len must be at least 1".into()));
        }
        if self.monitor.interval_ms == 0 {
            return Err(AquaError::Config("monitor.interval_ms must be at least 1".into()));
        }
        let size = self.theme.font_size;
        if !size.is_finite() || size < MIN_FONT_SIZE {
            return Err(AquaError::Config(format!(
                "theme.font_size must be at least {MIN_FONT_SIZE}, got {size}"
            )));
        }
        Ok(())
    }
}

/// Refresh-loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// Delay between the end of one cycle and the start of the next.
    pub interval_ms: u64,
    /// Samples kept for the charts and rolling averages.
    pub history_len: usize,
    /// Mount point whose usage is reported as "disk".
    pub disk_path: String,
    /// Lines kept in the text log (0 = unbounded).
    pub log_lines: usize,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1_000,
            history_len: 20,
            disk_path:   "/".to_string(),
            log_lines:   1_000,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title:  String,
    pub width:  f32,
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title:  "AquaSys Monitor".to_string(),
            width:  1440.0,
            height: 1080.0,
        }
    }
}

/// Theme / styling configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Window background color (hex, e.g. `"#0f2c2c"`).
    pub background: String,
    /// Background of the log, info and chart panels.
    pub panel: String,
    /// Primary text color.
    pub foreground: String,
    /// Headings and the CPU series.
    pub accent: String,
    /// The memory series.
    pub secondary: String,
    /// Panel outlines.
    pub border: String,
    /// Base font size in points.
    pub font_size: f32,
    /// Panel outline width (pixels).
    pub border_width: f32,
    /// Inner padding for each panel (pixels).
    pub padding: u16,
    /// Gap between panels (pixels).
    pub gap: u16,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            background:   "#0f2c2c".to_string(),
            panel:        "#001f1f".to_string(),
            foreground:   "#ffffff".to_string(),
            accent:       "#00ffe7".to_string(),
            secondary:    "#00ffa2".to_string(),
            border:       "#ffffff".to_string(),
            font_size:    12.0,
            border_width: 2.0,
            padding:      10,
            gap:          10,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let cfg: AquaConfig = toml::from_str("[monitor]\ninterval_ms = 500\n").unwrap();
        assert_eq!(cfg.monitor.interval_ms, 500);
        assert_eq!(cfg.monitor.history_len, 20);
        assert_eq!(cfg.monitor.disk_path, "/");
        assert_eq!(cfg.details, DetailKind::ALL.to_vec());
        assert_eq!(cfg.theme.accent, "#00ffe7");
    }

    #[test]
    fn empty_details_disables_actions() {
        let cfg: AquaConfig = toml::from_str("details = []\n").unwrap();
        assert!(cfg.details.is_empty());
    }

    #[test]
    fn details_parse_lowercase_names() {
        let cfg: AquaConfig = toml::from_str("details = [\"disk\", \"temperature\"]\n").unwrap();
        assert_eq!(cfg.details, vec![DetailKind::Disk, DetailKind::Temperature]);
    }

    #[test]
    fn zero_history_is_rejected() {
        let mut cfg = AquaConfig::default();
        cfg.monitor.history_len = 0;
        assert!(cfg.validate().is_err());
        assert!(AquaConfig::default().validate().is_ok());
    }

    #[test]
    fn tiny_or_negative_font_size_is_rejected() {
        for size in ["2.0", "-4.0", "nan"] {
            let cfg: AquaConfig = toml::from_str(&format!("[theme]\nfont_size = {size}\n")).unwrap();
            assert!(matches!(cfg.validate(), Err(AquaError::Config(_))), "font_size = {size}");
        }

        let cfg: AquaConfig = toml::from_str("[theme]\nfont_size = 8.0\n").unwrap();
        assert!(cfg.validate().is_ok());
    }
}
