use crate::error::DrawError;
use crate::path::{Figure, Outline, Paint, PathCommand, SweepDir, Transform};
use crate::shapes::{check_dimension, polar};

/// A stroked arc along a circle centered on the connector axis, from
/// `start_angle` to `end_angle` (degrees from the positive x axis).
///
/// Always rendered as the minor arc; no conductor spans 180 degrees or
/// more, so the major-arc case never arises.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcBand {
    width: f64,
    radius: f64,
    start: [f64; 2],
    end: [f64; 2],
    direction: SweepDir,
}

impl ArcBand {
    pub fn new(
        width: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<Self, DrawError> {
        check_dimension("arc band width", width)?;
        check_dimension("arc band radius", radius)?;
        let start = polar(radius, start_angle.to_radians());
        let end = polar(radius, end_angle.to_radians());
        let direction = if start_angle < end_angle {
            SweepDir::Positive
        } else {
            SweepDir::Negative
        };
        Ok(Self {
            width,
            radius,
            start,
            end,
            direction,
        })
    }

    pub fn direction(&self) -> SweepDir {
        self.direction
    }

    pub fn start_point(&self) -> [f64; 2] {
        self.start
    }

    pub fn end_point(&self) -> [f64; 2] {
        self.end
    }

    pub(crate) fn outline(&self) -> Figure {
        Figure {
            outline: Outline::Path(vec![
                PathCommand::MoveTo(self.start),
                PathCommand::ArcTo {
                    radius: self.radius,
                    sweep: self.direction,
                    end: self.end,
                },
            ]),
            paint: Paint::Stroke { width: self.width },
            transform: Transform::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_direction_follows_angle_order() {
        let band = ArcBand::new(0.093, 0.5, -53.0, -95.0).unwrap();
        assert_eq!(band.direction(), SweepDir::Negative);
        let band = ArcBand::new(0.093, 0.5, -95.0, -53.0).unwrap();
        assert_eq!(band.direction(), SweepDir::Positive);
    }

    #[test]
    fn test_endpoints_on_circle() {
        let band = ArcBand::new(0.093, 0.5, -53.0, -95.0).unwrap();
        let [x, y] = band.start_point();
        assert_abs_diff_eq!(x, 0.5 * (-53.0f64).to_radians().cos(), epsilon = 1e-12);
        assert_abs_diff_eq!(y, 0.5 * (-53.0f64).to_radians().sin(), epsilon = 1e-12);
        let [x, y] = band.end_point();
        assert_abs_diff_eq!(x.hypot(y), 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_outline_is_single_minor_arc() {
        let band = ArcBand::new(0.075, 0.437, -28.0, -85.0).unwrap();
        let figure = band.outline();
        let commands = match &figure.outline {
            Outline::Path(commands) => commands,
            other => panic!("expected Path, got {other:?}"),
        };
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            commands[1],
            PathCommand::ArcTo {
                radius,
                sweep: SweepDir::Negative,
                ..
            } if (radius - 0.437).abs() < 1e-12
        ));
        assert_eq!(figure.paint, Paint::Stroke { width: 0.075 });
    }

    #[test]
    fn test_idempotent() {
        let band = ArcBand::new(0.093, 0.5, -53.0, -95.0).unwrap();
        assert_eq!(band.outline(), band.outline());
    }
}
