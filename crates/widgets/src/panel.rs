use aqua_core::Message;
use aqua_theme::Theme;
use iced::{
    widget::container,
    Background, Border, Element, Length,
};

/// Outlined panel used for every section of the window.
pub fn panel<'a>(content: impl Into<Element<'a, Message>>, theme: &Theme) -> Element<'a, Message> {
    let background = theme.panel.to_iced();
    let border     = theme.border.to_iced();
    let width      = theme.border_width;
    let text_color = theme.foreground.to_iced();

    container(content)
        .padding(theme.padding)
        .width(Length::Fill)
        .style(move |_| container::Style {
            background: Some(Background::Color(background)),
            border: Border {
                color: border,
                width,
                radius: 0.0.into(),
            },
            text_color: Some(text_color),
            ..container::Style::default()
        })
        .into()
}
