use iced::alignment;
use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Text};
use iced::{Color, Point, Radians, Rectangle, Renderer, Theme, mouse};

use crate::summary::ChartData;

const SLICE_COLORS: [Color; 3] = [
    Color { r: 0.36, g: 0.54, b: 0.86, a: 1.0 }, // protein
    Color { r: 0.91, g: 0.56, b: 0.22, a: 1.0 }, // fat
    Color { r: 0.38, g: 0.72, b: 0.42, a: 1.0 }, // carbs
];

/// Three-slice macronutrient pie with percentage labels.
#[derive(Debug)]
pub struct PieChart {
    data: ChartData,
}

impl PieChart {
    pub fn new(data: ChartData) -> Self {
        Self { data }
    }
}

impl<Message> Program<Message> for PieChart {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        let total: f64 = self.data.slices.iter().map(|slice| slice.grams).sum();
        if total <= 0.0 {
            // All-zero breakdown: nothing to draw.
            return vec![frame.into_geometry()];
        }

        let center = frame.center();
        let radius = frame.width().min(frame.height()) / 2.0 - 16.0;
        let mut start = -std::f32::consts::FRAC_PI_2;

        for (slice, color) in self.data.slices.iter().zip(SLICE_COLORS) {
            let sweep = (slice.grams / total) as f32 * std::f32::consts::TAU;
            if sweep <= 0.0 {
                continue;
            }

            let path = Path::new(|builder| {
                builder.move_to(center);
                builder.arc(canvas::path::Arc {
                    center,
                    radius,
                    start_angle: Radians(start),
                    end_angle: Radians(start + sweep),
                });
                builder.close();
            });
            frame.fill(&path, color);

            let mid = start + sweep / 2.0;
            let label_at = Point::new(
                center.x + mid.cos() * radius * 0.65,
                center.y + mid.sin() * radius * 0.65,
            );
            frame.fill_text(Text {
                content: format!("{} {:.1}%", slice.label, slice.percent),
                position: label_at,
                color: Color::WHITE,
                size: 14.0.into(),
                horizontal_alignment: alignment::Horizontal::Center,
                vertical_alignment: alignment::Vertical::Center,
                ..Text::default()
            });

            start += sweep;
        }

        vec![frame.into_geometry()]
    }
}
