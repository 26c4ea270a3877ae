//! Path assembly and device composition.
//!
//! Figures become `svg` elements here, and devices become complete
//! documents: a body circle, a centered coordinate frame, and one colored
//! element per conductor. Conductors are drawn in catalog order, so a
//! later conductor paints over an earlier one where they overlap.

use std::path::{Path, PathBuf};

use log::info;
use svg::node::element::path::Data;
use svg::node::element::{Circle, Group, Path as SvgPath, Rectangle};
use svg::{Document, Node};

use crate::devices::Device;
use crate::error::DrawError;
use crate::path::{Figure, Outline, Paint, PathCommand, Transform};
use crate::shapes::Conductor;
use crate::style::{self, OUTLINE_WIDTH};

/// Which side of a device to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Receptacle,
    Plug,
}

impl Side {
    pub fn letter(self) -> &'static str {
        match self {
            Self::Receptacle => "R",
            Self::Plug => "P",
        }
    }
}

fn build_data(commands: &[PathCommand]) -> Data {
    let mut data = Data::new();
    for command in commands {
        data = match *command {
            PathCommand::MoveTo([x, y]) => data.move_to((x, y)),
            PathCommand::MoveBy([dx, dy]) => data.move_by((dx, dy)),
            PathCommand::LineTo([x, y]) => data.line_to((x, y)),
            PathCommand::HorizontalBy(dx) => data.horizontal_line_by(dx),
            PathCommand::VerticalBy(dy) => data.vertical_line_by(dy),
            PathCommand::HorizontalTo(x) => data.horizontal_line_to(x),
            PathCommand::VerticalTo(y) => data.vertical_line_to(y),
            PathCommand::ArcTo { radius, sweep, end } => data.elliptical_arc_to((
                radius,
                radius,
                0.0,
                0.0,
                f64::from(sweep.flag()),
                end[0],
                end[1],
            )),
            PathCommand::ArcBy { radius, sweep, end } => data.elliptical_arc_by((
                radius,
                radius,
                0.0,
                0.0,
                f64::from(sweep.flag()),
                end[0],
                end[1],
            )),
            PathCommand::Close => data.close(),
        };
    }
    data
}

fn apply_style<T: Node>(mut node: T, paint: Paint, color: &str, transform: &Transform) -> T {
    match paint {
        Paint::Fill => {
            node.assign("fill", color);
            if style::needs_outline(color) {
                node.assign("stroke", "black");
                node.assign("stroke-width", OUTLINE_WIDTH);
            }
        }
        Paint::Stroke { width } => {
            node.assign("fill", "none");
            node.assign("stroke", color);
            node.assign("stroke-width", width);
        }
    }
    if !transform.is_identity() {
        node.assign("transform", transform.to_attr());
    }
    node
}

fn render_figure(figure: &Figure, color: &str) -> Box<dyn Node> {
    match &figure.outline {
        Outline::Rect { corner, size } => {
            let rect = Rectangle::new()
                .set("x", corner[0])
                .set("y", corner[1])
                .set("width", size[0])
                .set("height", size[1]);
            apply_style(rect, figure.paint, color, &figure.transform).into()
        }
        Outline::Circle { center, radius } => {
            let circle = Circle::new()
                .set("cx", center[0])
                .set("cy", center[1])
                .set("r", *radius);
            apply_style(circle, figure.paint, color, &figure.transform).into()
        }
        Outline::Path(commands) => {
            let path = SvgPath::new().set("d", build_data(commands));
            apply_style(path, figure.paint, color, &figure.transform).into()
        }
    }
}

/// Render one conductor as an SVG element in the given color.
fn render_conductor(conductor: &Conductor, color: &str) -> Result<Box<dyn Node>, DrawError> {
    let figure = conductor.outline()?;
    // Stroked shapes have no interior to fill, so the inverted white
    // styling cannot be rendered for them.
    if style::needs_outline(color) && matches!(figure.paint, Paint::Stroke { .. }) {
        return Err(DrawError::UnsupportedStyle {
            shape: conductor.kind(),
        });
    }
    Ok(render_figure(&figure, color))
}

/// Render one side of a device, or `None` when the device has no body on
/// that side.
pub fn render_side(device: &Device, side: Side) -> Result<Option<Document>, DrawError> {
    let diameter = match side {
        Side::Receptacle => device.receptacle_diameter(),
        Side::Plug => device.plug_diameter(),
    };
    let Some(diameter) = diameter else {
        return Ok(None);
    };

    let drawing_width = diameter + OUTLINE_WIDTH * 2.0;

    let mut background = Circle::new().set("r", diameter / 2.0).set("fill", "white");
    if side == Side::Receptacle {
        background = background
            .set("stroke", "black")
            .set("stroke-width", OUTLINE_WIDTH);
    }

    let mut group = Group::new()
        .set("transform", format!("translate({0} {0})", drawing_width / 2.0))
        .add(background);

    for (role, pair) in device.conductors() {
        let conductor = match side {
            Side::Receptacle => &pair.receptacle,
            Side::Plug => &pair.plug,
        };
        if let Some(conductor) = conductor {
            group = group.add(render_conductor(conductor, role.color())?);
        }
    }

    let dimension = format!("{drawing_width}in");
    let document = Document::new()
        .set("width", dimension.clone())
        .set("height", dimension)
        .set("viewBox", format!("0 0 {0} {0}", drawing_width))
        .add(group);
    Ok(Some(document))
}

/// File name of the artifact for one side of a device.
pub fn artifact_name(device: &Device, side: Side) -> String {
    format!("NEMA_{}{}.svg", device.name(), side.letter())
}

/// Render and write every artifact for `devices` under `out_dir`,
/// returning the written paths.
pub fn save_all(out_dir: &Path, devices: &[Device]) -> Result<Vec<PathBuf>, DrawError> {
    let mut written = Vec::new();
    for device in devices {
        for side in [Side::Receptacle, Side::Plug] {
            if let Some(document) = render_side(device, side)? {
                let path = out_dir.join(artifact_name(device, side));
                svg::save(&path, &document)?;
                info!("wrote {}", path.display());
                written.push(path);
            }
        }
    }
    Ok(written)
}
