//! The device catalog.
//!
//! All dimensions come from ANSI/NEMA WD 6-2016. Receptacle slot outlines
//! use the standard's minimum dimensions; plug prong outlines use the
//! maximums. The body circles follow the dimensions for flanged inlets
//! and connector bodies.

use crate::error::DrawError;
use crate::shapes::{ArcBand, Bar, Bend, Conductor, Cross, HookedArcBand, Pad, RoundedTab, SweepDir};
use crate::style::Role;

/// Receptacle and plug instances of one conductor role. Either side may
/// be absent, but a present side is always fully specified.
#[derive(Debug, Clone, Default)]
pub struct ConductorPair {
    pub receptacle: Option<Conductor>,
    pub plug: Option<Conductor>,
}

/// A named standard device pattern: two optional body diameters plus its
/// conductor set. Conductor order is draw order.
#[derive(Debug, Clone)]
pub struct Device {
    name: &'static str,
    receptacle_diameter: Option<f64>,
    plug_diameter: Option<f64>,
    conductors: Vec<(Role, ConductorPair)>,
}

impl Device {
    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn receptacle_diameter(&self) -> Option<f64> {
        self.receptacle_diameter
    }

    pub fn plug_diameter(&self) -> Option<f64> {
        self.plug_diameter
    }

    pub fn conductors(&self) -> &[(Role, ConductorPair)] {
        &self.conductors
    }
}

/// Build the full catalog, in standard order.
pub fn all_devices() -> Result<Vec<Device>, DrawError> {
    Ok(vec![
        nema_1_15()?,
        nema_1_20()?,
        nema_5_15()?,
        nema_5_20()?,
        nema_l5_30()?,
        nema_l6_20()?,
    ])
}

fn nema_1_15() -> Result<Device, DrawError> {
    let conductor_spacing = 0.500;

    let slot_width = 0.075;
    let neutral_slot_height = 0.330;
    let line_slot_height = 0.265;

    let prong_width = 0.060;
    let neutral_prong_height = 0.322;
    let line_prong_height = 0.260;

    Ok(Device {
        name: "1-15",
        receptacle_diameter: Some(1.531),
        plug_diameter: Some(1.550),
        conductors: vec![
            (
                Role::Neutral,
                ConductorPair {
                    receptacle: Some(
                        Bar::new(slot_width, neutral_slot_height, conductor_spacing / 2.0, 0.0)?
                            .into(),
                    ),
                    plug: Some(
                        Bar::new(prong_width, neutral_prong_height, -conductor_spacing / 2.0, 0.0)?
                            .into(),
                    ),
                },
            ),
            (
                Role::LineX,
                ConductorPair {
                    receptacle: Some(
                        Bar::new(slot_width, line_slot_height, -conductor_spacing / 2.0, 0.0)?
                            .into(),
                    ),
                    plug: Some(
                        Bar::new(prong_width, line_prong_height, conductor_spacing / 2.0, 0.0)?
                            .into(),
                    ),
                },
            ),
        ],
    })
}

fn nema_1_20() -> Result<Device, DrawError> {
    let conductor_spacing = 0.500;

    let prong_width = 0.060;
    let neutral_width = 0.260;
    let neutral_height = 0.165;
    let line_height = 0.260;

    let neutral_start = [
        -conductor_spacing / 2.0 - (neutral_width - prong_width / 2.0),
        0.0,
    ];
    let neutral_end = [
        -conductor_spacing / 2.0,
        neutral_height - prong_width / 2.0,
    ];

    Ok(Device {
        name: "1-20",
        receptacle_diameter: None,
        plug_diameter: Some(1.550),
        conductors: vec![
            (
                Role::Neutral,
                ConductorPair {
                    receptacle: None,
                    plug: Some(
                        Bend::new(prong_width, neutral_start, neutral_end, SweepDir::Positive)?
                            .into(),
                    ),
                },
            ),
            (
                Role::LineX,
                ConductorPair {
                    receptacle: None,
                    plug: Some(
                        Bar::new(prong_width, line_height, conductor_spacing / 2.0, 0.0)?.into(),
                    ),
                },
            ),
        ],
    })
}

fn nema_5_15() -> Result<Device, DrawError> {
    let conductor_spacing = 0.500;
    let lower_offset = 0.125;
    let upper_offset = 0.468;

    let slot_width = 0.075;
    let neutral_slot_height = 0.330;
    let line_slot_height = 0.265;
    let ground_slot_dims = 0.205;

    let prong_width = 0.060;
    let neutral_prong_height = 0.322;
    let line_prong_height = 0.260;
    let ground_prong_dims = 0.190;

    Ok(Device {
        name: "5-15",
        receptacle_diameter: Some(1.531),
        plug_diameter: Some(1.550),
        conductors: vec![
            (
                Role::Neutral,
                ConductorPair {
                    receptacle: Some(
                        Bar::new(
                            slot_width,
                            neutral_slot_height,
                            conductor_spacing / 2.0,
                            lower_offset,
                        )?
                        .into(),
                    ),
                    plug: Some(
                        Bar::new(
                            prong_width,
                            neutral_prong_height,
                            -conductor_spacing / 2.0,
                            lower_offset,
                        )?
                        .into(),
                    ),
                },
            ),
            (
                Role::Ground,
                ConductorPair {
                    receptacle: Some(
                        RoundedTab::new(
                            ground_slot_dims,
                            ground_slot_dims,
                            0.0,
                            lower_offset - upper_offset,
                            90.0,
                        )?
                        .into(),
                    ),
                    plug: Some(
                        Pad::new(ground_prong_dims, 0.0, lower_offset - upper_offset)?.into(),
                    ),
                },
            ),
            (
                Role::LineX,
                ConductorPair {
                    receptacle: Some(
                        Bar::new(
                            slot_width,
                            line_slot_height,
                            -conductor_spacing / 2.0,
                            lower_offset,
                        )?
                        .into(),
                    ),
                    plug: Some(
                        Bar::new(
                            prong_width,
                            line_prong_height,
                            conductor_spacing / 2.0,
                            lower_offset,
                        )?
                        .into(),
                    ),
                },
            ),
        ],
    })
}

fn nema_5_20() -> Result<Device, DrawError> {
    let receptacle_conductor_spacing = 0.500;
    let plug_line_offset = 0.250;
    let plug_neutral_offset = 0.609;
    let lower_offset = 0.125;
    let upper_offset = 0.468;

    let slot_width = 0.075;
    let neutral_slot_height = 0.330;
    let neutral_slot_width = 0.290;
    let line_slot_height = 0.265;
    let ground_slot_dims = 0.205;

    let prong_width = 0.060;
    let prong_length = 0.260;
    let ground_prong_dims = 0.190;

    Ok(Device {
        name: "5-20",
        receptacle_diameter: Some(1.531),
        plug_diameter: Some(1.550),
        conductors: vec![
            (
                Role::Neutral,
                ConductorPair {
                    // The neutral slot is T-shaped so the receptacle also
                    // accepts 5-15 plugs
                    receptacle: Some(
                        Cross::new(
                            slot_width,
                            neutral_slot_height,
                            neutral_slot_width,
                            receptacle_conductor_spacing / 2.0,
                            lower_offset,
                            90.0,
                        )?
                        .into(),
                    ),
                    plug: Some(
                        Bar::new(
                            prong_length,
                            prong_width,
                            plug_line_offset - plug_neutral_offset,
                            lower_offset,
                        )?
                        .into(),
                    ),
                },
            ),
            (
                Role::Ground,
                ConductorPair {
                    receptacle: Some(
                        RoundedTab::new(
                            ground_slot_dims,
                            ground_slot_dims,
                            0.0,
                            lower_offset - upper_offset,
                            90.0,
                        )?
                        .into(),
                    ),
                    plug: Some(
                        Pad::new(ground_prong_dims, 0.0, lower_offset - upper_offset)?.into(),
                    ),
                },
            ),
            (
                Role::LineX,
                ConductorPair {
                    receptacle: Some(
                        Bar::new(
                            slot_width,
                            line_slot_height,
                            -receptacle_conductor_spacing / 2.0,
                            lower_offset,
                        )?
                        .into(),
                    ),
                    plug: Some(
                        Bar::new(prong_width, prong_length, plug_line_offset, lower_offset)?.into(),
                    ),
                },
            ),
        ],
    })
}

fn nema_l5_30() -> Result<Device, DrawError> {
    let conductor_radius = 0.500;
    let slot_width = 0.093;
    let prong_width = 0.070;

    let neutral_angle_slot_end = 127.0;
    let neutral_angle_slot_width = 42.5;
    let line_angle_slot_end = 242.0;
    let line_angle_slot_width = 52.0;

    let ground_angle_slot_start = -25.0;
    let ground_hook_slot_outer_y = 0.248;
    let ground_hook_slot_height = 0.114;
    let ground_hook_slot_width = 0.105;

    let neutral_angle_prong_end = 124.5;
    let neutral_angle_prong_width = 38.0;
    let line_angle_prong_end = 239.5;
    let line_angle_prong_width = 47.5;

    let ground_angle_prong_start = -22.5;
    let ground_hook_prong_outer_y = 0.220;
    let ground_hook_prong_height = prong_width;
    let ground_hook_prong_width = 0.100;

    Ok(Device {
        name: "L5-30",
        receptacle_diameter: Some(1.860),
        plug_diameter: Some(1.880),
        conductors: vec![
            (
                Role::Neutral,
                ConductorPair {
                    receptacle: Some(
                        ArcBand::new(
                            slot_width,
                            conductor_radius,
                            neutral_angle_slot_end - 180.0,
                            neutral_angle_slot_end - neutral_angle_slot_width - 180.0,
                        )?
                        .into(),
                    ),
                    plug: Some(
                        ArcBand::new(
                            prong_width,
                            conductor_radius,
                            -neutral_angle_prong_end,
                            -neutral_angle_prong_end + neutral_angle_prong_width,
                        )?
                        .into(),
                    ),
                },
            ),
            (
                Role::Ground,
                ConductorPair {
                    receptacle: Some(
                        HookedArcBand::new(
                            slot_width,
                            conductor_radius,
                            ground_angle_slot_start - 180.0,
                            -180.0,
                            ground_hook_slot_outer_y,
                            -ground_hook_slot_width,
                            Some(ground_hook_slot_height),
                        )?
                        .into(),
                    ),
                    plug: Some(
                        HookedArcBand::new(
                            prong_width,
                            conductor_radius,
                            -ground_angle_prong_start,
                            0.0,
                            -ground_hook_prong_outer_y,
                            -ground_hook_prong_width,
                            Some(ground_hook_prong_height),
                        )?
                        .into(),
                    ),
                },
            ),
            (
                Role::LineX,
                ConductorPair {
                    receptacle: Some(
                        ArcBand::new(
                            slot_width,
                            conductor_radius,
                            line_angle_slot_end - 180.0,
                            line_angle_slot_end - line_angle_slot_width - 180.0,
                        )?
                        .into(),
                    ),
                    plug: Some(
                        ArcBand::new(
                            prong_width,
                            conductor_radius,
                            -line_angle_prong_end,
                            -line_angle_prong_end + line_angle_prong_width,
                        )?
                        .into(),
                    ),
                },
            ),
        ],
    })
}

fn nema_l6_20() -> Result<Device, DrawError> {
    let conductor_radius = 0.437;
    let slot_width = 0.075;
    let prong_width = 0.060;

    let line1_angle_slot_end = 152.0;
    let line1_angle_slot_width = 57.0;
    let line2_angle_slot_end = 262.0;
    let line2_angle_slot_width = 42.5;

    let ground_angle_slot_start = -25.0;
    let ground_hook_slot_outer_y = 0.220;
    let ground_hook_slot_height = 0.100;
    let ground_hook_slot_width = 0.105;

    let line1_angle_prong_end = 149.5;
    let line1_angle_prong_width = 52.5;
    let line2_angle_prong_end = 259.5;
    let line2_angle_prong_width = 38.0;

    let ground_angle_prong_start = -22.5;
    let ground_hook_prong_outer_y = 0.200;
    let ground_hook_prong_height = prong_width;
    let ground_hook_prong_width = 0.094;

    Ok(Device {
        name: "L6-20",
        receptacle_diameter: Some(1.860),
        plug_diameter: Some(1.880),
        conductors: vec![
            (
                Role::LineX,
                ConductorPair {
                    receptacle: Some(
                        ArcBand::new(
                            slot_width,
                            conductor_radius,
                            line1_angle_slot_end - 180.0,
                            line1_angle_slot_end - line1_angle_slot_width - 180.0,
                        )?
                        .into(),
                    ),
                    plug: Some(
                        ArcBand::new(
                            prong_width,
                            conductor_radius,
                            -line1_angle_prong_end,
                            -line1_angle_prong_end + line1_angle_prong_width,
                        )?
                        .into(),
                    ),
                },
            ),
            (
                Role::Ground,
                ConductorPair {
                    receptacle: Some(
                        HookedArcBand::new(
                            slot_width,
                            conductor_radius,
                            ground_angle_slot_start - 180.0,
                            -180.0,
                            ground_hook_slot_outer_y,
                            -ground_hook_slot_width,
                            Some(ground_hook_slot_height),
                        )?
                        .into(),
                    ),
                    plug: Some(
                        HookedArcBand::new(
                            prong_width,
                            conductor_radius,
                            -ground_angle_prong_start,
                            0.0,
                            -ground_hook_prong_outer_y,
                            -ground_hook_prong_width,
                            Some(ground_hook_prong_height),
                        )?
                        .into(),
                    ),
                },
            ),
            (
                Role::LineY,
                ConductorPair {
                    receptacle: Some(
                        ArcBand::new(
                            slot_width,
                            conductor_radius,
                            line2_angle_slot_end - 180.0,
                            line2_angle_slot_end - line2_angle_slot_width - 180.0,
                        )?
                        .into(),
                    ),
                    plug: Some(
                        ArcBand::new(
                            prong_width,
                            conductor_radius,
                            -line2_angle_prong_end,
                            -line2_angle_prong_end + line2_angle_prong_width,
                        )?
                        .into(),
                    ),
                },
            ),
        ],
    })
}
