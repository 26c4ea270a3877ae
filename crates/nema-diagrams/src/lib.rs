//! SVG diagrams of NEMA plug and receptacle contact patterns.
//!
//! Each standard device in the catalog yields up to two diagrams: the
//! receptacle slot pattern and the plug prong pattern, drawn face-on with
//! exact dimensions from ANSI/NEMA WD 6-2016 and colored by conductor
//! role. The geometry pipeline is pure: dimensions go in, path commands
//! come out, and the `svg` crate turns them into documents.

pub mod devices;
pub mod error;
pub mod path;
pub mod render;
pub mod shapes;
pub mod style;

pub use devices::{all_devices, ConductorPair, Device};
pub use error::DrawError;
pub use render::{artifact_name, render_side, save_all, Side};
pub use shapes::Conductor;
pub use style::Role;
