use std::f64::consts::FRAC_PI_2;

use crate::error::DrawError;
use crate::path::{Figure, Outline, Paint, PathCommand, SweepDir, Transform};
use crate::shapes::{check_dimension, checked_asin, polar};

/// An arc band that terminates in a rectangular hook tab, filled as one
/// closed region. Models the asymmetric ground contact on locking devices.
///
/// The band runs from `start_angle` toward the hook. `hook_angle` gives a
/// line the hook is parallel to; `hook_outer_offset` is the signed
/// perpendicular distance from that line to the hook's outer edge, and
/// `hook_length` is measured along the hook's inner edge. A negative
/// length folds the hook inward from the arc; nonnegative lengths (a hook
/// lying outside the arc) are not implemented and fail at construction.
/// `hook_width` defaults to the band width, and always takes the sign of
/// `hook_outer_offset`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HookedArcBand {
    width: f64,
    radius: f64,
    /// Radians.
    start_angle: f64,
    /// Radians.
    hook_angle: f64,
    hook_outer_offset: f64,
    hook_length: f64,
    hook_width: f64,
}

impl HookedArcBand {
    pub fn new(
        width: f64,
        radius: f64,
        start_angle: f64,
        hook_angle: f64,
        hook_outer_offset: f64,
        hook_length: f64,
        hook_width: Option<f64>,
    ) -> Result<Self, DrawError> {
        check_dimension("hooked arc band width", width)?;
        check_dimension("hooked arc band radius", radius)?;
        if hook_length >= 0.0 {
            return Err(DrawError::UnsupportedHook(hook_length));
        }
        let hook_width = hook_width.unwrap_or(width).copysign(hook_outer_offset);
        Ok(Self {
            width,
            radius,
            start_angle: start_angle.to_radians(),
            hook_angle: hook_angle.to_radians(),
            hook_outer_offset,
            hook_length,
            hook_width,
        })
    }

    pub(crate) fn outline(&self) -> Result<Figure, DrawError> {
        let outer_radius = self.radius + self.width / 2.0;
        let inner_radius = self.radius - self.width / 2.0;

        let start_inner = polar(inner_radius, self.start_angle);
        let start_outer = polar(outer_radius, self.start_angle);

        // The band ends where the outer/inner circles reach the given
        // perpendicular distances from the hook axis line.
        let angle_to_end_outer = checked_asin(self.hook_outer_offset / outer_radius)?;
        let end_outer = polar(outer_radius, self.hook_angle + angle_to_end_outer);
        let angle_to_end_inner =
            checked_asin((self.hook_outer_offset - self.hook_width) / inner_radius)?;
        let end_inner = polar(inner_radius, self.hook_angle + angle_to_end_inner);

        // Walk from the inner band edge along the hook axis, then across
        // it, to find the hook's two free corners. The constructor
        // guarantees hook_length < 0.
        let along = polar(self.hook_length, self.hook_angle);
        let hook_inner_corner = [end_inner[0] + along[0], end_inner[1] + along[1]];
        let across = polar(self.hook_width, self.hook_angle + FRAC_PI_2);
        let hook_outer_corner = [hook_inner_corner[0] + across[0], hook_inner_corner[1] + across[1]];

        let outward = if self.hook_outer_offset > 0.0 {
            SweepDir::Positive
        } else {
            SweepDir::Negative
        };

        Ok(Figure {
            outline: Outline::Path(vec![
                PathCommand::MoveTo(start_outer),
                PathCommand::ArcTo {
                    radius: outer_radius,
                    sweep: outward,
                    end: end_outer,
                },
                PathCommand::LineTo(hook_outer_corner),
                PathCommand::LineTo(hook_inner_corner),
                PathCommand::LineTo(end_inner),
                PathCommand::ArcTo {
                    radius: inner_radius,
                    sweep: outward.opposite(),
                    end: start_inner,
                },
                PathCommand::Close,
            ]),
            paint: Paint::Fill,
            transform: Transform::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    /// Ground slot of a 30 A locking device.
    fn slot_band() -> HookedArcBand {
        HookedArcBand::new(0.093, 0.5, -205.0, -180.0, 0.248, -0.105, Some(0.114)).unwrap()
    }

    /// Ground prong of the same device: negative outer offset, default
    /// hook width.
    fn prong_band() -> HookedArcBand {
        HookedArcBand::new(0.070, 0.5, 22.5, 0.0, -0.220, -0.100, None).unwrap()
    }

    fn path_commands(figure: &Figure) -> &[PathCommand] {
        match &figure.outline {
            Outline::Path(commands) => commands,
            other => panic!("expected Path, got {other:?}"),
        }
    }

    fn distance_from_origin(point: [f64; 2]) -> f64 {
        point[0].hypot(point[1])
    }

    #[test]
    fn test_arc_endpoints_on_their_circles() {
        let band = slot_band();
        let outer_radius = 0.5 + 0.093 / 2.0;
        let inner_radius = 0.5 - 0.093 / 2.0;
        let figure = band.outline().unwrap();
        let commands = path_commands(&figure);

        let start_outer = match commands[0] {
            PathCommand::MoveTo(p) => p,
            ref other => panic!("expected MoveTo, got {other:?}"),
        };
        assert_abs_diff_eq!(distance_from_origin(start_outer), outer_radius, epsilon = 1e-9);

        let end_outer = match commands[1] {
            PathCommand::ArcTo { end, .. } => end,
            ref other => panic!("expected ArcTo, got {other:?}"),
        };
        assert_abs_diff_eq!(distance_from_origin(end_outer), outer_radius, epsilon = 1e-9);

        let end_inner = match commands[4] {
            PathCommand::LineTo(p) => p,
            ref other => panic!("expected LineTo, got {other:?}"),
        };
        assert_abs_diff_eq!(distance_from_origin(end_inner), inner_radius, epsilon = 1e-9);

        let start_inner = match commands[5] {
            PathCommand::ArcTo { end, .. } => end,
            ref other => panic!("expected ArcTo, got {other:?}"),
        };
        assert_abs_diff_eq!(distance_from_origin(start_inner), inner_radius, epsilon = 1e-9);
    }

    #[test]
    fn test_hook_corners_follow_axis() {
        let band = prong_band();
        let figure = band.outline().unwrap();
        let commands = path_commands(&figure);

        let end_inner = match commands[4] {
            PathCommand::LineTo(p) => p,
            ref other => panic!("expected LineTo, got {other:?}"),
        };
        let hook_inner_corner = match commands[3] {
            PathCommand::LineTo(p) => p,
            ref other => panic!("expected LineTo, got {other:?}"),
        };
        let hook_outer_corner = match commands[2] {
            PathCommand::LineTo(p) => p,
            ref other => panic!("expected LineTo, got {other:?}"),
        };

        // Hook axis angle is 0: the inner corner sits hook_length along x
        // from the inner band end
        assert_abs_diff_eq!(hook_inner_corner[0], end_inner[0] - 0.100, epsilon = 1e-9);
        assert_abs_diff_eq!(hook_inner_corner[1], end_inner[1], epsilon = 1e-9);
        // The outer corner sits hook_width across the axis; the width
        // takes the sign of the outer offset (negative here)
        assert_abs_diff_eq!(hook_outer_corner[0], hook_inner_corner[0], epsilon = 1e-9);
        assert_abs_diff_eq!(hook_outer_corner[1], hook_inner_corner[1] - 0.070, epsilon = 1e-9);
    }

    #[test]
    fn test_sweep_signs_follow_outer_offset() {
        let figure = slot_band().outline().unwrap();
        let commands = path_commands(&figure);
        assert!(matches!(
            commands[1],
            PathCommand::ArcTo {
                sweep: SweepDir::Positive,
                ..
            }
        ));
        assert!(matches!(
            commands[5],
            PathCommand::ArcTo {
                sweep: SweepDir::Negative,
                ..
            }
        ));

        let figure = prong_band().outline().unwrap();
        let commands = path_commands(&figure);
        assert!(matches!(
            commands[1],
            PathCommand::ArcTo {
                sweep: SweepDir::Negative,
                ..
            }
        ));
        assert!(matches!(
            commands[5],
            PathCommand::ArcTo {
                sweep: SweepDir::Positive,
                ..
            }
        ));
    }

    #[test]
    fn test_closed_filled_region() {
        let figure = slot_band().outline().unwrap();
        let commands = path_commands(&figure);
        assert_eq!(figure.paint, Paint::Fill);
        assert!(matches!(commands.last(), Some(PathCommand::Close)));
    }

    #[test]
    fn test_nonnegative_hook_length_rejected() {
        assert!(matches!(
            HookedArcBand::new(0.093, 0.5, -205.0, -180.0, 0.248, 0.105, None),
            Err(DrawError::UnsupportedHook(_))
        ));
        assert!(matches!(
            HookedArcBand::new(0.093, 0.5, -205.0, -180.0, 0.248, 0.0, None),
            Err(DrawError::UnsupportedHook(_))
        ));
    }

    #[test]
    fn test_offset_beyond_outer_radius_is_domain_error() {
        // The offset can never be reached by the outer circle, so the
        // draw must fail instead of producing NaN coordinates
        let band = HookedArcBand::new(0.093, 0.5, -205.0, -180.0, 0.6, -0.105, None).unwrap();
        assert!(matches!(band.outline(), Err(DrawError::AsinDomain(_))));
    }

    #[test]
    fn test_idempotent() {
        let band = slot_band();
        assert_eq!(band.outline().unwrap(), band.outline().unwrap());
    }
}
