use aqua_core::{HostInfo, Message};
use aqua_theme::Theme;
use iced::{
    widget::{column, text, Column},
    Element,
};

/// "System Info" panel; the host description never changes while running.
#[derive(Debug, Default)]
pub struct HostWidget {
    rows: Vec<(&'static str, String)>,
}

impl HostWidget {
    pub fn new(info: &HostInfo) -> Self {
        Self { rows: info.rows() }
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> Element<'a, Message> {
        let fg = theme.foreground.to_iced();
        let rows = Column::with_children(self.rows.iter().map(|(key, value)| {
            text(format!("{key}: {value}"))
                .size(theme.font_size)
                .color(fg)
                .into()
        }))
        .spacing(2.0);

        column![
            text("System Info")
                .size(theme.font_size + 2.0)
                .color(theme.accent.to_iced()),
            rows,
        ]
        .spacing(theme.gap as f32 / 2.0)
        .into()
    }
}
