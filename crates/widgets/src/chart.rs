use aqua_core::{Message, Series};
use aqua_renderer::{ChartModel, Panel};
use aqua_theme::{Color, Theme};
use iced::{
    mouse,
    widget::canvas::{self, Canvas, Frame, Geometry, LineDash, Path, Stroke, Text},
    Element, Length, Pixels, Point, Rectangle, Renderer, Size, Vector,
};
use std::f32::consts::FRAC_PI_4;

/// Space around each plot area: title above, y labels left, rotated
/// timestamps below.
const MARGIN_TOP:    f32 = 28.0;
const MARGIN_LEFT:   f32 = 40.0;
const MARGIN_RIGHT:  f32 = 16.0;
const MARGIN_BOTTOM: f32 = 64.0;

const Y_TICKS: [f32; 6] = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];

/// CPU and memory line charts stacked vertically.
#[derive(Debug, Default)]
pub struct ChartWidget;

impl ChartWidget {
    pub fn new() -> Self {
        Self
    }

    pub fn view<'a>(&'a self, model: &'a ChartModel, theme: &'a Theme) -> Element<'a, Message> {
        Canvas::new(Plot { model, theme })
            .width(Length::Fill)
            .height(Length::Fixed(560.0))
            .into()
    }
}

struct Plot<'a> {
    model: &'a ChartModel,
    theme: &'a Theme,
}

impl canvas::Program<Message> for Plot<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let half = Size::new(bounds.width, bounds.height / 2.0);

        let panels = [
            (Series::Cpu, self.theme.accent, Point::ORIGIN),
            (Series::Memory, self.theme.secondary, Point::new(0.0, half.height)),
        ];
        for (series, color, origin) in panels {
            self.draw_panel(&mut frame, self.model.panel(series), color, Rectangle::new(origin, half));
        }

        vec![frame.into_geometry()]
    }
}

impl Plot<'_> {
    fn draw_panel(&self, frame: &mut Frame, panel: &Panel, color: Color, area: Rectangle) {
        let plot = Rectangle {
            x:      area.x + MARGIN_LEFT,
            y:      area.y + MARGIN_TOP,
            width:  (area.width - MARGIN_LEFT - MARGIN_RIGHT).max(1.0),
            height: (area.height - MARGIN_TOP - MARGIN_BOTTOM).max(1.0),
        };
        let (x_axis, y_axis) = (self.model.x, self.model.y);
        let project = |x: f32, y: f32| {
            Point::new(
                plot.x + x_axis.fraction(x) * plot.width,
                plot.y + plot.height - y_axis.fraction(y) * plot.height,
            )
        };

        let fg        = self.theme.foreground.to_iced();
        let text_size = Pixels(self.theme.font_size - 2.0);

        frame.fill_rectangle(plot.position(), plot.size(), self.theme.panel.to_iced());

        // Title and legend.
        frame.fill_text(Text {
            content:  panel.title.to_string(),
            position: Point::new(area.x + area.width / 2.0 - 50.0, area.y + 6.0),
            color:    fg,
            size:     Pixels(self.theme.font_size + 2.0),
            ..Text::default()
        });
        frame.fill_text(Text {
            content:  panel.legend.to_string(),
            position: Point::new(plot.x + plot.width - 100.0, plot.y + 6.0),
            color:    color.to_iced(),
            size:     text_size,
            ..Text::default()
        });

        // Dashed grid with y labels.
        let grid = Stroke {
            line_dash: LineDash { segments: &[4.0, 4.0], offset: 0 },
            ..Stroke::default().with_color(self.theme.grid.to_iced()).with_width(1.0)
        };
        for value in Y_TICKS {
            let left = project(x_axis.min, value);
            let right = Point::new(plot.x + plot.width, left.y);
            frame.stroke(&Path::line(left, right), grid.clone());
            frame.fill_text(Text {
                content:  format!("{value:.0}"),
                position: Point::new(area.x + 6.0, left.y - 6.0),
                color:    fg,
                size:     text_size,
                ..Text::default()
            });
        }

        // Rotated timestamp ticks.
        for (x, label) in self.model.ticks() {
            let at = project(x, y_axis.min);
            frame.stroke(&Path::line(at, at + Vector::new(0.0, 4.0)), grid.clone());
            frame.with_save(|frame| {
                frame.translate(Vector::new(at.x, at.y + 6.0));
                frame.rotate(FRAC_PI_4);
                frame.fill_text(Text {
                    content:  label.to_string(),
                    position: Point::ORIGIN,
                    color:    fg,
                    size:     text_size,
                    ..Text::default()
                });
            });
        }

        // Series line.
        if let Some((&(x0, y0), rest)) = panel.points.split_first() {
            let line = Path::new(|b| {
                b.move_to(project(x0, y0));
                for &(x, y) in rest {
                    b.line_to(project(x, y));
                }
            });
            frame.stroke(&line, Stroke::default().with_color(color.to_iced()).with_width(2.0));

            if rest.is_empty() {
                frame.fill(&Path::circle(project(x0, y0), 3.0), color.to_iced());
            }
        }
    }
}
