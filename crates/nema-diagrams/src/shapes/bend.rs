use crate::error::DrawError;
use crate::path::{Figure, Outline, Paint, PathCommand, SweepDir, Transform};
use crate::shapes::check_dimension;

/// An "L": two perpendicular stroked segments joined by a rounded corner
/// whose radius is half the stroke width.
///
/// Which axis is drawn first depends on both the quadrant of the
/// start-to-end delta and the requested sweep direction: when the x and y
/// deltas have the same sign, a positive sweep draws the x segment first;
/// when the signs differ, a negative sweep does.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bend {
    width: f64,
    start: [f64; 2],
    end: [f64; 2],
    sweep: SweepDir,
    x_sign: f64,
    y_sign: f64,
    x_first: bool,
}

impl Bend {
    pub fn new(
        width: f64,
        start: [f64; 2],
        end: [f64; 2],
        sweep: SweepDir,
    ) -> Result<Self, DrawError> {
        check_dimension("bend width", width)?;
        let x_sign = (end[0] - start[0]).signum();
        let y_sign = (end[1] - start[1]).signum();
        let x_first = (x_sign == y_sign) == (sweep == SweepDir::Positive);
        Ok(Self {
            width,
            start,
            end,
            sweep,
            x_sign,
            y_sign,
            x_first,
        })
    }

    pub fn x_first(&self) -> bool {
        self.x_first
    }

    pub(crate) fn outline(&self) -> Figure {
        let mut commands = vec![PathCommand::MoveTo(self.start)];
        // The first segment stops half a stroke width short to leave room
        // for the corner arc.
        if self.x_first {
            commands.push(PathCommand::HorizontalBy(
                self.end[0] - self.start[0] - self.x_sign * self.width / 2.0,
            ));
        } else {
            commands.push(PathCommand::VerticalBy(
                self.end[1] - self.start[1] - self.y_sign * self.width / 2.0,
            ));
        }
        commands.push(PathCommand::ArcBy {
            radius: self.width / 2.0,
            sweep: self.sweep,
            end: [
                self.x_sign * self.width / 2.0,
                self.y_sign * self.width / 2.0,
            ],
        });
        if self.x_first {
            commands.push(PathCommand::VerticalTo(self.end[1]));
        } else {
            commands.push(PathCommand::HorizontalTo(self.end[0]));
        }

        Figure {
            outline: Outline::Path(commands),
            paint: Paint::Stroke { width: self.width },
            transform: Transform::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_first_truth_table() {
        // Same signs: positive sweep draws the x segment first
        let bend = Bend::new(0.06, [0.0, 0.0], [1.0, 1.0], SweepDir::Positive).unwrap();
        assert!(bend.x_first());
        let bend = Bend::new(0.06, [0.0, 0.0], [1.0, 1.0], SweepDir::Negative).unwrap();
        assert!(!bend.x_first());
        // Differing signs: negative sweep draws the x segment first
        let bend = Bend::new(0.06, [0.0, 0.0], [1.0, -1.0], SweepDir::Positive).unwrap();
        assert!(!bend.x_first());
        let bend = Bend::new(0.06, [0.0, 0.0], [-1.0, 1.0], SweepDir::Negative).unwrap();
        assert!(bend.x_first());
    }

    #[test]
    fn test_x_first_path() {
        let bend = Bend::new(0.06, [-0.48, 0.0], [-0.25, 0.135], SweepDir::Positive).unwrap();
        let figure = bend.outline();
        let commands = match &figure.outline {
            Outline::Path(commands) => commands,
            other => panic!("expected Path, got {other:?}"),
        };
        assert!(matches!(commands[0], PathCommand::MoveTo([x, y]) if x == -0.48 && y == 0.0));
        // First segment shortened by half the stroke width
        assert!(
            matches!(commands[1], PathCommand::HorizontalBy(d) if (d - (0.23 - 0.03)).abs() < 1e-9)
        );
        assert!(matches!(
            commands[2],
            PathCommand::ArcBy {
                sweep: SweepDir::Positive,
                ..
            }
        ));
        // Finishing segment runs to the exact end point
        assert!(matches!(commands[3], PathCommand::VerticalTo(y) if (y - 0.135).abs() < 1e-9));
    }

    #[test]
    fn test_y_first_path() {
        let bend = Bend::new(0.06, [0.0, 0.0], [1.0, 1.0], SweepDir::Negative).unwrap();
        let figure = bend.outline();
        let commands = match &figure.outline {
            Outline::Path(commands) => commands,
            other => panic!("expected Path, got {other:?}"),
        };
        assert!(matches!(commands[1], PathCommand::VerticalBy(d) if (d - 0.97).abs() < 1e-9));
        assert!(matches!(commands[3], PathCommand::HorizontalTo(x) if (x - 1.0).abs() < 1e-9));
    }

    #[test]
    fn test_corner_radius_is_half_width() {
        let bend = Bend::new(0.06, [0.0, 0.0], [1.0, 1.0], SweepDir::Positive).unwrap();
        let figure = bend.outline();
        let commands = match &figure.outline {
            Outline::Path(commands) => commands,
            other => panic!("expected Path, got {other:?}"),
        };
        assert!(matches!(
            commands[2],
            PathCommand::ArcBy { radius, end: [dx, dy], .. }
                if (radius - 0.03).abs() < 1e-9 && (dx - 0.03).abs() < 1e-9 && (dy - 0.03).abs() < 1e-9
        ));
    }

    #[test]
    fn test_stroked_paint() {
        let bend = Bend::new(0.06, [0.0, 0.0], [1.0, 1.0], SweepDir::Positive).unwrap();
        assert_eq!(bend.outline().paint, Paint::Stroke { width: 0.06 });
    }
}
