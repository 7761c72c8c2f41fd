//! Desktop window for `aqua`.
//!
//! Owns the Iced application loop and wires together:
//! - the refresh loop (one-shot timer rearmed after every cycle)
//! - on-demand detail reports (action buttons)
//! - config file watcher (live theme / action reload)

use aqua_config::{default_path, load as load_config, AquaConfig, ConfigWatcher};
use aqua_core::{AquaError, ChartSink, Message, Result, TextSink};
use aqua_renderer::{ChartModel, LogBuffer};
use aqua_system::{MetricsProvider, Monitor, SysinfoProvider};
use aqua_theme::Theme;
use aqua_widgets::{panel, ActionsWidget, ChartWidget, HostWidget, LogWidget, StatusWidget};
use futures::channel::mpsc::Sender;
use iced::{
    widget::{container, row, scrollable, text, Column},
    Element, Length, Size, Subscription, Task,
};
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use tracing::{info, warn};

/// The refresh loop as the window runs it.
type LiveMonitor = Monitor<SysinfoProvider, ChartModel, LogBuffer>;

// ── Entry point ───────────────────────────────────────────────────────────────

/// Build the monitor and open the window.  Returns once the window closes.
///
/// A monitor that cannot be constructed is reported as an error before any
/// window is shown.
pub fn run() -> Result<()> {
    let config = load_config(default_path()).unwrap_or_else(|e| {
        warn!("{e}; using defaults.");
        AquaConfig::default()
    });
    let monitor = build_monitor(&config)?;
    let size = Size::new(config.window.width, config.window.height);

    // Iced may call the boot closure through a shared reference; the slot
    // hands the already-built monitor over exactly once.
    let slot = Mutex::new(Some((monitor, config)));

    iced::application(move || Aqua::boot(&slot), Aqua::update, Aqua::view)
        .title(Aqua::title)
        .subscription(Aqua::subscription)
        .style(Aqua::style)
        .window_size(size)
        .run()
        .map_err(|e| AquaError::Window(e.to_string()))
}

fn build_monitor(config: &AquaConfig) -> Result<LiveMonitor> {
    build_monitor_with(SysinfoProvider::new()?, config)
}

/// Wire `provider` into a monitor with the window's sinks.
fn build_monitor_with<P: MetricsProvider>(
    mut provider: P,
    config: &AquaConfig,
) -> Result<Monitor<P, ChartModel, LogBuffer>> {
    let disk_path = Path::new(&config.monitor.disk_path);

    // Fail now rather than on the first tick if the mount is missing.
    provider.disk_usage(disk_path)?;

    Ok(Monitor::new(
        provider,
        ChartModel::default(),
        LogBuffer::new(config.monitor.log_lines),
        config.monitor.history_len,
        disk_path,
    ))
}

// ── State ─────────────────────────────────────────────────────────────────────

struct Aqua {
    /// `None` only if boot found the slot already emptied.
    monitor:  Option<LiveMonitor>,
    config:   AquaConfig,
    theme:    Theme,
    interval: Duration,
    // Top
    log:      LogWidget,
    host:     HostWidget,
    // Middle
    actions:  ActionsWidget,
    chart:    ChartWidget,
    // Bottom
    status:   StatusWidget,
}

impl Aqua {
    fn boot(slot: &Mutex<Option<(LiveMonitor, AquaConfig)>>) -> (Self, Task<Message>) {
        let taken = slot.lock().ok().and_then(|mut s| s.take());
        let (mut monitor, config) = match taken {
            Some((monitor, config)) => (Some(monitor), config),
            None => {
                warn!("Monitor already handed to a previous window; refresh loop not started");
                (None, AquaConfig::default())
            }
        };

        let host = monitor
            .as_mut()
            .map(|m| HostWidget::new(&m.host_info()))
            .unwrap_or_default();

        let aqua = Self {
            monitor,
            theme:    Theme::from_config(&config.theme),
            interval: Duration::from_millis(config.monitor.interval_ms),
            log:      LogWidget::new(),
            host,
            actions:  ActionsWidget::new(&config.details),
            chart:    ChartWidget::new(),
            status:   StatusWidget::new(),
            config,
        };

        // First cycle runs immediately; every later one is rearmed by `refresh`.
        (aqua, Task::done(Message::Tick))
    }

    fn title(&self) -> String {
        self.config.window.title.clone()
    }

    // ── Update ────────────────────────────────────────────────────────────────

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Tick => self.refresh(),
            Message::Detail(kind) => {
                if let Some(monitor) = self.monitor.as_mut() {
                    if let Err(e) = monitor.detail(kind) {
                        warn!("{kind} report failed: {e}");
                    }
                }
                Task::none()
            }
            Message::ConfigReloaded => {
                self.reload_config();
                Task::none()
            }
        }
    }

    /// Run one cycle and rearm the timer.  A failed cycle is not rearmed:
    /// the chart and log freeze on their last values.
    fn refresh(&mut self) -> Task<Message> {
        let Some(monitor) = self.monitor.as_mut() else {
            return Task::none();
        };

        match next_tick(monitor, self.interval) {
            Some(delay) => Task::perform(tokio::time::sleep(delay), |_| Message::Tick),
            None => Task::none(),
        }
    }

    fn reload_config(&mut self) {
        let cfg = match load_config(default_path()) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Config reload failed: {e}");
                return;
            }
        };

        info!("Config reloaded");
        let old = &self.config.monitor;
        if cfg.monitor.interval_ms != old.interval_ms
            || cfg.monitor.history_len != old.history_len
            || cfg.monitor.disk_path != old.disk_path
        {
            info!("Sampling settings changed; they take effect on next start");
        }

        if let Some(monitor) = self.monitor.as_mut() {
            monitor.log_mut().set_limit(cfg.monitor.log_lines);
        }
        self.theme   = Theme::from_config(&cfg.theme);
        self.actions = ActionsWidget::new(&cfg.details);
        self.config  = cfg;
    }

    // ── View ──────────────────────────────────────────────────────────────────

    fn view(&self) -> Element<'_, Message> {
        let theme = &self.theme;
        let gap   = theme.gap as f32;

        let heading = container(
            text("System Resource Monitor")
                .size(theme.title_size())
                .color(theme.accent.to_iced()),
        )
        .center_x(Length::Fill);

        let mut content = Column::new().spacing(gap).padding(theme.padding).push(heading);

        // ── Top: text log + host info ─────────────────────────────────────────
        if let Some(monitor) = &self.monitor {
            let top = row![
                container(panel(self.log.view(monitor.log(), theme), theme))
                    .width(Length::FillPortion(3)),
                container(panel(self.host.view(theme), theme)).width(Length::FillPortion(1)),
            ]
            .spacing(gap);
            content = content.push(top);
        }

        // ── Middle: detail actions (optional) + charts ────────────────────────
        if let Some(actions) = self.actions.view(theme) {
            content = content.push(actions);
        }

        if let Some(monitor) = &self.monitor {
            content = content
                .push(panel(self.chart.view(monitor.chart(), theme), theme))
                .push(panel(self.status.view(monitor.last_report(), theme), theme));
        }

        scrollable(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    // ── Subscriptions ─────────────────────────────────────────────────────────

    fn subscription(&self) -> Subscription<Message> {
        Subscription::run(config_stream)
    }

    // ── Style ─────────────────────────────────────────────────────────────────

    fn style(&self, _theme: &iced::Theme) -> iced::theme::Style {
        iced::theme::Style {
            background_color: self.theme.background.to_iced(),
            text_color: self.theme.foreground.to_iced(),
        }
    }
}

/// Run one cycle; the delay before the next one, or `None` once the loop has
/// stopped.  The monitor has already logged any failure.
fn next_tick<P, C, T>(monitor: &mut Monitor<P, C, T>, interval: Duration) -> Option<Duration>
where
    P: MetricsProvider,
    C: ChartSink,
    T: TextSink,
{
    monitor.tick().ok().map(|_| interval)
}

// ── Subscription streams ──────────────────────────────────────────────────────

/// Watches `~/.config/aqua/aqua.toml` for writes and sends `ConfigReloaded`.
fn config_stream() -> impl iced::futures::Stream<Item = Message> {
    iced::stream::channel(1, |mut sender: Sender<Message>| async move {
        let (_watcher, mut rx) = ConfigWatcher::spawn(default_path());

        while rx.recv().await.is_some() {
            let _ = sender.try_send(Message::ConfigReloaded);
        }

        // Watcher gave up (no config directory); stall rather than end the
        // subscription.
        loop {
            tokio::time::sleep(Duration::from_secs(3600)).await;
        }
    })
}
