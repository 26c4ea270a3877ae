use crate::error::DrawError;
use crate::path::{Figure, Outline, Paint, Transform};
use crate::shapes::check_dimension;

/// A round pin contact: a filled circle of the given diameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pad {
    radius: f64,
    x: f64,
    y: f64,
}

impl Pad {
    pub fn new(diameter: f64, x: f64, y: f64) -> Result<Self, DrawError> {
        check_dimension("pad diameter", diameter)?;
        Ok(Self {
            radius: diameter / 2.0,
            x,
            y,
        })
    }

    pub(crate) fn outline(&self) -> Figure {
        Figure {
            outline: Outline::Circle {
                center: [self.x, self.y],
                radius: self.radius,
            },
            paint: Paint::Fill,
            transform: Transform::default(),
        }
    }
}
