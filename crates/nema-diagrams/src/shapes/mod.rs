//! Parametric conductor shape generators.
//!
//! Each shape turns a handful of physical dimensions into an exact outline
//! figure. Dimensions are inches; angles are degrees measured from the
//! positive x axis unless a field says otherwise. Shapes are immutable
//! after construction and [`Conductor::outline`] is a pure function, so
//! drawing the same shape twice yields identical figures.

mod arc_band;
mod bar;
mod bend;
mod cross;
mod hooked_arc;
mod pad;
mod rounded_tab;

pub use arc_band::ArcBand;
pub use bar::Bar;
pub use bend::Bend;
pub use cross::Cross;
pub use hooked_arc::HookedArcBand;
pub use pad::Pad;
pub use rounded_tab::RoundedTab;

pub use crate::path::SweepDir;

use crate::error::DrawError;
use crate::path::Figure;

/// A conductor outline, one of the parametric shape families.
#[derive(Debug, Clone, PartialEq)]
pub enum Conductor {
    Bar(Bar),
    RoundedTab(RoundedTab),
    Bend(Bend),
    Pad(Pad),
    Cross(Cross),
    ArcBand(ArcBand),
    HookedArcBand(HookedArcBand),
}

impl Conductor {
    /// Produce the figure describing this conductor's outline.
    pub fn outline(&self) -> Result<Figure, DrawError> {
        match self {
            Self::Bar(s) => Ok(s.outline()),
            Self::RoundedTab(s) => Ok(s.outline()),
            Self::Bend(s) => Ok(s.outline()),
            Self::Pad(s) => Ok(s.outline()),
            Self::Cross(s) => Ok(s.outline()),
            Self::ArcBand(s) => Ok(s.outline()),
            Self::HookedArcBand(s) => s.outline(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bar(_) => "bar",
            Self::RoundedTab(_) => "rounded tab",
            Self::Bend(_) => "bend",
            Self::Pad(_) => "pad",
            Self::Cross(_) => "cross",
            Self::ArcBand(_) => "arc band",
            Self::HookedArcBand(_) => "hooked arc band",
        }
    }
}

impl From<Bar> for Conductor {
    fn from(shape: Bar) -> Self {
        Self::Bar(shape)
    }
}

impl From<RoundedTab> for Conductor {
    fn from(shape: RoundedTab) -> Self {
        Self::RoundedTab(shape)
    }
}

impl From<Bend> for Conductor {
    fn from(shape: Bend) -> Self {
        Self::Bend(shape)
    }
}

impl From<Pad> for Conductor {
    fn from(shape: Pad) -> Self {
        Self::Pad(shape)
    }
}

impl From<Cross> for Conductor {
    fn from(shape: Cross) -> Self {
        Self::Cross(shape)
    }
}

impl From<ArcBand> for Conductor {
    fn from(shape: ArcBand) -> Self {
        Self::ArcBand(shape)
    }
}

impl From<HookedArcBand> for Conductor {
    fn from(shape: HookedArcBand) -> Self {
        Self::HookedArcBand(shape)
    }
}

/// Point on the circle of `radius` at `angle` radians.
pub(crate) fn polar(radius: f64, angle: f64) -> [f64; 2] {
    [radius * angle.cos(), radius * angle.sin()]
}

/// `asin` that rejects out-of-domain inputs instead of returning NaN.
pub(crate) fn checked_asin(value: f64) -> Result<f64, DrawError> {
    if !(-1.0..=1.0).contains(&value) {
        return Err(DrawError::AsinDomain(value));
    }
    Ok(value.asin())
}

pub(crate) fn check_dimension(what: &'static str, value: f64) -> Result<(), DrawError> {
    if value < 0.0 {
        return Err(DrawError::NegativeDimension { what, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_polar() {
        let [x, y] = polar(2.0, std::f64::consts::FRAC_PI_2);
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_polar_negative_radius() {
        // A negative radius walks in the opposite direction
        let [x, y] = polar(-1.0, 0.0);
        assert_abs_diff_eq!(x, -1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(y, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_checked_asin_in_domain() {
        assert_abs_diff_eq!(checked_asin(0.5).unwrap(), 0.5f64.asin(), epsilon = 1e-12);
        assert!(checked_asin(1.0).is_ok());
        assert!(checked_asin(-1.0).is_ok());
    }

    #[test]
    fn test_checked_asin_out_of_domain() {
        assert!(matches!(
            checked_asin(1.0001),
            Err(DrawError::AsinDomain(_))
        ));
        assert!(matches!(
            checked_asin(f64::NAN),
            Err(DrawError::AsinDomain(_))
        ));
    }

    #[test]
    fn test_check_dimension() {
        assert!(check_dimension("width", 0.0).is_ok());
        assert!(check_dimension("width", 1.5).is_ok());
        assert!(matches!(
            check_dimension("width", -0.1),
            Err(DrawError::NegativeDimension { what: "width", .. })
        ));
    }
}
