use crate::error::DrawError;
use crate::path::{Figure, Outline, Paint, Transform};
use crate::shapes::check_dimension;

/// A straight slot or prong: an axis-aligned filled rectangle centered on
/// (`x`, `y`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bar {
    width: f64,
    height: f64,
    x: f64,
    y: f64,
}

impl Bar {
    pub fn new(width: f64, height: f64, x: f64, y: f64) -> Result<Self, DrawError> {
        check_dimension("bar width", width)?;
        check_dimension("bar height", height)?;
        Ok(Self {
            width,
            height,
            x,
            y,
        })
    }

    pub(crate) fn outline(&self) -> Figure {
        Figure {
            outline: Outline::Rect {
                corner: [self.x - self.width / 2.0, self.y - self.height / 2.0],
                size: [self.width, self.height],
            },
            paint: Paint::Fill,
            transform: Transform::default(),
        }
    }
}
