use crate::error::DrawError;
use crate::path::{Figure, Outline, Paint, PathCommand, Rotation, Transform};
use crate::shapes::check_dimension;

/// An upper-case "T": a horizontal crossbar centered on the intersection
/// point plus a vertical arm extending downward from it.
///
/// `vertical_length` is measured from the top of the crossbar to the far
/// end of the arm, so the drawn arm is shortened by half the stroke width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cross {
    width: f64,
    crossbar_length: f64,
    vertical_length: f64,
    x: f64,
    y: f64,
    rotation: f64,
}

impl Cross {
    pub fn new(
        width: f64,
        crossbar_length: f64,
        vertical_length: f64,
        x: f64,
        y: f64,
        rotation: f64,
    ) -> Result<Self, DrawError> {
        check_dimension("cross width", width)?;
        check_dimension("crossbar length", crossbar_length)?;
        check_dimension("vertical length", vertical_length)?;
        Ok(Self {
            width,
            crossbar_length,
            vertical_length,
            x,
            y,
            rotation,
        })
    }

    pub(crate) fn outline(&self) -> Figure {
        let transform = if self.rotation == 0.0 {
            Transform::default()
        } else {
            Transform {
                translate: None,
                rotate: Some(Rotation {
                    degrees: self.rotation,
                    pivot: Some([self.x, self.y]),
                }),
            }
        };

        let commands = vec![
            PathCommand::MoveTo([self.x - self.crossbar_length / 2.0, self.y]),
            PathCommand::HorizontalBy(self.crossbar_length),
            PathCommand::MoveBy([-self.crossbar_length / 2.0, 0.0]),
            PathCommand::VerticalBy(-(self.vertical_length - self.width / 2.0)),
        ];

        Figure {
            outline: Outline::Path(commands),
            paint: Paint::Stroke { width: self.width },
            transform,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crossbar_and_arm() {
        let cross = Cross::new(0.075, 0.330, 0.290, 0.25, 0.125, 0.0).unwrap();
        let figure = cross.outline();
        let commands = match &figure.outline {
            Outline::Path(commands) => commands,
            other => panic!("expected Path, got {other:?}"),
        };
        assert!(
            matches!(commands[0], PathCommand::MoveTo([x, y]) if (x - 0.085).abs() < 1e-9
                && (y - 0.125).abs() < 1e-9)
        );
        assert!(matches!(commands[1], PathCommand::HorizontalBy(d) if (d - 0.330).abs() < 1e-9));
        assert!(matches!(commands[2], PathCommand::MoveBy([dx, _]) if (dx + 0.165).abs() < 1e-9));
        // Arm length accounts for the crossbar's half thickness
        assert!(
            matches!(commands[3], PathCommand::VerticalBy(d) if (d + (0.290 - 0.0375)).abs() < 1e-9)
        );
        assert_eq!(figure.paint, Paint::Stroke { width: 0.075 });
    }

    #[test]
    fn test_rotation_about_intersection() {
        let cross = Cross::new(0.075, 0.330, 0.290, 0.25, 0.125, 90.0).unwrap();
        let figure = cross.outline();
        assert_eq!(figure.transform.to_attr(), "rotate(90 0.25,0.125)");
    }

    #[test]
    fn test_no_transform_when_unrotated() {
        let cross = Cross::new(0.075, 0.330, 0.290, 0.25, 0.125, 0.0).unwrap();
        assert!(cross.outline().transform.is_identity());
    }
}
