use aqua_core::{DetailKind, Message};
use aqua_theme::Theme;
use iced::{
    widget::{button, text, Row},
    Border, Color, Element,
};

/// Row of on-demand report buttons.
///
/// Returns `None` when no actions are configured — callers should skip rendering.
#[derive(Debug, Default)]
pub struct ActionsWidget {
    kinds: Vec<DetailKind>,
}

impl ActionsWidget {
    pub fn new(kinds: &[DetailKind]) -> Self {
        let mut unique: Vec<DetailKind> = Vec::with_capacity(kinds.len());
        for kind in kinds {
            if !unique.contains(kind) {
                unique.push(*kind);
            }
        }
        Self { kinds: unique }
    }

    pub fn kinds(&self) -> &[DetailKind] {
        &self.kinds
    }

    pub fn view<'a>(&'a self, theme: &'a Theme) -> Option<Element<'a, Message>> {
        if self.kinds.is_empty() {
            return None;
        }

        let buttons = self.kinds.iter().map(|&kind| {
            button(text(kind.label()).size(theme.font_size))
                .padding(6)
                .on_press(Message::Detail(kind))
                .style(|_, _| button::Style {
                    background: Some(Color::WHITE.into()),
                    text_color: Color::BLACK,
                    border: Border {
                        color: Color::BLACK,
                        width: 2.0,
                        radius: 0.0.into(),
                    },
                    ..button::Style::default()
                })
                .into()
        });

        Some(Row::with_children(buttons).spacing(theme.gap as f32).into())
    }
}
