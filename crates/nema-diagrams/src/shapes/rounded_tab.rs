use crate::error::DrawError;
use crate::path::{Figure, Outline, Paint, PathCommand, Rotation, SweepDir, Transform};
use crate::shapes::check_dimension;

/// A rectangle with one short side replaced by a semicircular cap.
///
/// The cap sits at the positive end of the longer dimension; when the
/// dimensions are equal it sits at the positive end of the x dimension.
/// `rotation` (degrees) reorients the whole tab about its own center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedTab {
    width: f64,
    height: f64,
    x: f64,
    y: f64,
    rotation: f64,
}

impl RoundedTab {
    pub fn new(width: f64, height: f64, x: f64, y: f64, rotation: f64) -> Result<Self, DrawError> {
        check_dimension("rounded tab width", width)?;
        check_dimension("rounded tab height", height)?;
        Ok(Self {
            width,
            height,
            x,
            y,
            rotation,
        })
    }

    pub(crate) fn outline(&self) -> Figure {
        // When rotated, the path is built about the origin and the offset
        // moves into a transform so the path math stays origin-relative.
        let (transform, x0, y0) = if self.rotation == 0.0 {
            (Transform::default(), self.x, self.y)
        } else {
            let transform = Transform {
                translate: Some([self.x, self.y]),
                rotate: Some(Rotation {
                    degrees: self.rotation,
                    pivot: None,
                }),
            };
            (transform, 0.0, 0.0)
        };

        let mut commands = vec![PathCommand::MoveTo([
            x0 - self.width / 2.0,
            y0 - self.height / 2.0,
        ])];
        if self.width >= self.height {
            let side_length = self.width - self.height / 2.0;
            commands.push(PathCommand::HorizontalBy(side_length));
            commands.push(PathCommand::ArcBy {
                radius: self.height / 2.0,
                sweep: SweepDir::Positive,
                end: [0.0, self.height],
            });
            commands.push(PathCommand::HorizontalBy(-side_length));
        } else {
            let side_length = self.height - self.width / 2.0;
            commands.push(PathCommand::VerticalBy(side_length));
            commands.push(PathCommand::ArcBy {
                radius: self.width / 2.0,
                sweep: SweepDir::Negative,
                end: [self.width, 0.0],
            });
            commands.push(PathCommand::VerticalBy(-side_length));
        }
        commands.push(PathCommand::Close);

        Figure {
            outline: Outline::Path(commands),
            paint: Paint::Fill,
            transform,
        }
    }
}
