use iced::widget::canvas::{self, Path};
use iced::{Color, Point, Rectangle, Size};

use crate::core::parallax::{BLOB_COUNT, Offset};

const RADIUS: f32 = 190.0;

/// Blob anchors as fractions of the canvas size.
const ANCHORS: [(f32, f32); BLOB_COUNT] = [(0.12, 0.18), (0.85, 0.22), (0.18, 0.78), (0.88, 0.82)];

const COLORS: [Color; BLOB_COUNT] = [
    Color { r: 0.39, g: 0.40, b: 0.95, a: 0.18 },
    Color { r: 0.66, g: 0.33, b: 0.97, a: 0.16 },
    Color { r: 0.39, g: 0.40, b: 0.95, a: 0.14 },
    Color { r: 0.66, g: 0.33, b: 0.97, a: 0.12 },
];

/// Parallax blobs drawn behind the landing content.
#[derive(Debug, Clone)]
pub struct Blobs {
    offsets: [Option<Offset>; BLOB_COUNT],
}

impl Blobs {
    pub fn new(offsets: [Option<Offset>; BLOB_COUNT]) -> Self {
        Self { offsets }
    }
}

impl<Message> canvas::Program<Message> for Blobs {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &iced::Theme,
        bounds: Rectangle,
        _cursor: iced::mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());
        let Size { width, height } = bounds.size();

        for (index, offset) in self.offsets.iter().enumerate() {
            // unmounted on this viewport
            let Some(offset) = offset else {
                continue;
            };
            let (ax, ay) = ANCHORS[index];
            let center = Point::new(ax * width + offset.x, ay * height + offset.y);
            frame.fill(&Path::circle(center, RADIUS), COLORS[index]);
        }

        vec![frame.into_geometry()]
    }
}
