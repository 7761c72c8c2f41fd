use aqua_core::Message;
use aqua_renderer::LogBuffer;
use aqua_theme::Theme;
use iced::{
    widget::{scrollable, text},
    Element, Font, Length,
};

/// Monospace scrolling view of the text log.
#[derive(Debug, Default)]
pub struct LogWidget;

impl LogWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, log: &'a LogBuffer, theme: &'a Theme) -> Element<'a, Message> {
        let body = text(log.text())
            .font(Font::MONOSPACE)
            .size(theme.font_size - 2.0)
            .color(theme.foreground.to_iced());

        let view = scrollable(body)
            .width(Length::Fill)
            .height(Length::Fixed(280.0));

        // Bottom-anchored: new lines keep the tail in view.
        if log.follows_tail() {
            view.anchor_bottom().into()
        } else {
            view.into()
        }
    }
}
