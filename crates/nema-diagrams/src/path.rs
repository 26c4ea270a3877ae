//! Drawing primitives emitted by the conductor shapes.
//!
//! A shape describes itself as a [`Figure`]: an outline (rectangle, circle,
//! or path-command sequence), how it is painted, and an optional transform.
//! The renderer turns figures into SVG elements; nothing in this module
//! touches the output format directly.

use crate::error::DrawError;

/// Rotational sense used to pick between the two circles passing through a
/// pair of points. Maps onto the SVG elliptical-arc sweep flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepDir {
    Positive,
    Negative,
}

impl SweepDir {
    /// Parse the `'+'`/`'-'` notation used in dimension tables.
    pub fn from_symbol(symbol: char) -> Result<Self, DrawError> {
        match symbol {
            '+' => Ok(Self::Positive),
            '-' => Ok(Self::Negative),
            other => Err(DrawError::InvalidSweep(other)),
        }
    }

    /// Value of the SVG sweep flag.
    pub fn flag(self) -> u8 {
        match self {
            Self::Positive => 1,
            Self::Negative => 0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
        }
    }
}

// ─── Path commands ───────────────────────────────────────────────────

/// One path drawing command. Uppercase SVG letters are absolute
/// coordinates, lowercase relative, same as the `d` attribute grammar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// `M x y`
    MoveTo([f64; 2]),
    /// `m dx dy`
    MoveBy([f64; 2]),
    /// `L x y`
    LineTo([f64; 2]),
    /// `h dx`
    HorizontalBy(f64),
    /// `v dy`
    VerticalBy(f64),
    /// `H x`
    HorizontalTo(f64),
    /// `V y`
    VerticalTo(f64),
    /// `A r r 0 0 <sweep> x y` — circular, never the large arc.
    ArcTo {
        radius: f64,
        sweep: SweepDir,
        end: [f64; 2],
    },
    /// `a r r 0 0 <sweep> dx dy`
    ArcBy {
        radius: f64,
        sweep: SweepDir,
        end: [f64; 2],
    },
    /// `Z`
    Close,
}

// ─── Figures ─────────────────────────────────────────────────────────

/// Shape outline in one of the three forms the renderer accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum Outline {
    Rect { corner: [f64; 2], size: [f64; 2] },
    Circle { center: [f64; 2], radius: f64 },
    Path(Vec<PathCommand>),
}

/// How an outline is painted: a solid filled region or an open stroked
/// path of the given stroke width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Fill,
    Stroke { width: f64 },
}

/// Translate-then-rotate transform. The identity when both parts are
/// absent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub translate: Option<[f64; 2]>,
    pub rotate: Option<Rotation>,
}

/// Rotation in degrees, about `pivot` when given and the origin otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rotation {
    pub degrees: f64,
    pub pivot: Option<[f64; 2]>,
}

impl Transform {
    pub fn is_identity(&self) -> bool {
        self.translate.is_none() && self.rotate.is_none()
    }

    /// Render as an SVG `transform` attribute value.
    pub fn to_attr(&self) -> String {
        let mut parts = Vec::new();
        if let Some([x, y]) = self.translate {
            if y == 0.0 {
                parts.push(format!("translate({x})"));
            } else {
                parts.push(format!("translate({x} {y})"));
            }
        }
        if let Some(rotation) = self.rotate {
            match rotation.pivot {
                Some([px, py]) => parts.push(format!("rotate({} {},{})", rotation.degrees, px, py)),
                None => parts.push(format!("rotate({})", rotation.degrees)),
            }
        }
        parts.join(" ")
    }
}

/// A fully specified drawable element.
#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub outline: Outline,
    pub paint: Paint,
    pub transform: Transform,
}
