//! Static layout of the campus model.
//!
//! Units are meters-ish; the ground sits at y = -2 and the club house is
//! centered on the origin with its front face toward +z. Every offset is
//! relative to the parent group noted on the constant.

use glam::Vec3;

use crate::color::Color;

/// Rotation of `degrees` about `axis`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rotation {
    pub degrees: f32,
    pub axis: Vec3,
}

/// Local translate → rotate → scale for one drawn part.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub translate: Vec3,
    pub rotate: Option<Rotation>,
    pub scale: Vec3,
}

impl Placement {
    /// Translation and scale, no rotation.
    pub const fn new(translate: Vec3, scale: Vec3) -> Self {
        Self {
            translate,
            rotate: None,
            scale,
        }
    }

    /// The same placement with a rotation inserted between translate and scale.
    pub const fn rotated(self, degrees: f32, axis: Vec3) -> Self {
        Self {
            rotate: Some(Rotation { degrees, axis }),
            ..self
        }
    }
}

/// A placement plus the color it is drawn in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Part {
    pub placement: Placement,
    pub color: Color,
}

impl Part {
    pub const fn new(translate: Vec3, scale: Vec3, color: Color) -> Self {
        Self {
            placement: Placement::new(translate, scale),
            color,
        }
    }
}

const fn v(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

// Ground and roads ----------------------------------------------------------

/// Flat lawn; zero thickness on purpose.
pub const GROUND: Part = Part::new(v(0.0, -2.0, 0.0), v(50.0, 0.0, 50.0), Color::Green);

pub const ROADS: [Part; 2] = [
    // Street running past the front fence
    Part::new(v(0.0, -1.99, 16.0), v(50.0, 0.02, 4.0), Color::DarkGrey),
    // Footpath from the gate to the front door
    Part::new(v(-3.0, -1.99, 7.0), v(3.0, 0.02, 10.0), Color::Grey),
];

// Buildings -----------------------------------------------------------------

/// Main (long) building origin, world space.
pub const MAIN_BUILDING_ORIGIN: Vec3 = v(-1.5, 0.0, 0.0);
/// Relative to [`MAIN_BUILDING_ORIGIN`].
pub const MAIN_BUILDING_BODY: Part = Part::new(Vec3::ZERO, v(11.6, 4.0, 4.0), Color::Red);
/// Chimney origin, relative to [`MAIN_BUILDING_ORIGIN`].
pub const CHIMNEY_ORIGIN: Vec3 = v(3.5, 3.4, -1.0);
/// Relative to [`CHIMNEY_ORIGIN`].
pub const CHIMNEY_STACK: Part = Part::new(Vec3::ZERO, v(0.8, 2.4, 0.8), Color::Red);
/// Relative to [`CHIMNEY_ORIGIN`].
pub const CHIMNEY_PIPE: Part = Part::new(v(0.0, 1.4, 0.0), v(0.3, 0.5, 0.3), Color::DarkGrey);

/// Side (tall) building, world space.
pub const SIDE_BUILDING: Part = Part::new(v(6.3, 1.25, 0.0), v(4.0, 6.5, 4.0), Color::Red);

// Roofs (prisms) ------------------------------------------------------------

pub const ROOFS: [Part; 3] = [
    // Main roof, ridge along x
    Part {
        placement: Placement::new(v(-1.5, 3.5, 0.0), v(4.5, 3.0, 11.6)).rotated(90.0, Vec3::Y),
        color: Color::Grey,
    },
    // Side roof, ridge along z
    Part::new(v(6.3, 5.7, 0.0), v(4.5, 2.5, 4.0), Color::Grey),
    // Small gable over the front door
    Part::new(v(-3.0, 3.0, 1.8), v(3.2, 2.0, 1.0), Color::Grey),
];

// Roof edges ----------------------------------------------------------------

pub const ROOF_EDGES: [Part; 6] = [
    // Main eaves, front and back
    Part::new(v(-1.5, 2.0, 2.1), v(11.8, 0.15, 0.25), Color::White),
    Part::new(v(-1.5, 2.0, -2.1), v(11.8, 0.15, 0.25), Color::White),
    // Main ridge cap
    Part::new(v(-1.5, 5.0, 0.0), v(11.8, 0.12, 0.12), Color::White),
    // Side eaves, front and back
    Part::new(v(6.3, 4.5, 2.1), v(4.2, 0.15, 0.25), Color::White),
    Part::new(v(6.3, 4.5, -2.1), v(4.2, 0.15, 0.25), Color::White),
    // Side ridge cap
    Part::new(v(6.3, 6.95, 0.0), v(0.12, 0.12, 4.2), Color::White),
];

// Doors ---------------------------------------------------------------------

/// Hinge line of the front door (its left edge), world space.
pub const DOOR_HINGE: Vec3 = v(-3.6, -0.75, 2.05);
/// Distance from the hinge line to the panel center.
pub const DOOR_HALF_WIDTH: f32 = 0.6;
/// Relative to the swung panel center.
pub const DOOR_PANEL: Part = Part::new(Vec3::ZERO, v(1.2, 2.5, 0.1), Color::Brown);
/// Relative to the swung panel center.
pub const DOOR_HANDLE: Part = Part::new(v(0.45, 0.0, 0.08), v(0.08, 0.08, 0.08), Color::Black);
/// The side building's door never opens.
pub const SIDE_DOOR: Part = Part::new(v(6.3, -0.75, 2.05), v(1.2, 2.5, 0.1), Color::DarkBrown);

// Windows -------------------------------------------------------------------

/// Where a window sits and which way it faces (degrees about y, 0 = +z).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WindowSpot {
    pub origin: Vec3,
    pub facing_degrees: f32,
}

const fn window(x: f32, y: f32, z: f32, facing_degrees: f32) -> WindowSpot {
    WindowSpot {
        origin: v(x, y, z),
        facing_degrees,
    }
}

pub const WINDOWS: [WindowSpot; 13] = [
    // Main building, front
    window(-6.3, 0.6, 2.05, 0.0),
    window(-4.8, 0.6, 2.05, 0.0),
    window(-1.3, 0.6, 2.05, 0.0),
    window(0.2, 0.6, 2.05, 0.0),
    window(1.7, 0.6, 2.05, 0.0),
    window(3.2, 0.6, 2.05, 0.0),
    // Main building, back
    window(-5.0, 0.6, -2.05, 180.0),
    window(-1.0, 0.6, -2.05, 180.0),
    window(3.0, 0.6, -2.05, 180.0),
    // Side building, two floors
    window(5.3, 0.6, 2.05, 0.0),
    window(7.3, 0.6, 2.05, 0.0),
    window(5.3, 3.0, 2.05, 0.0),
    window(7.3, 3.0, 2.05, 0.0),
];

/// Relative to a [`WindowSpot`].
pub const WINDOW_GLASS: Part = Part::new(Vec3::ZERO, v(0.9, 1.2, 0.05), Color::Blue);
/// Relative to a [`WindowSpot`].
pub const WINDOW_SILL: Part = Part::new(v(0.0, -0.65, 0.05), v(1.1, 0.1, 0.2), Color::White);

// Furniture -----------------------------------------------------------------

pub const BIN_ORIGIN: Vec3 = v(1.0, -1.5, 3.5);
/// Relative to [`BIN_ORIGIN`].
pub const BIN_BODY: Part = Part::new(Vec3::ZERO, v(0.6, 1.0, 0.6), Color::DarkGreen);
/// Relative to [`BIN_ORIGIN`].
pub const BIN_LID: Part = Part::new(v(0.0, 0.55, 0.0), v(0.7, 0.1, 0.7), Color::Black);

pub const BENCH_ORIGINS: [Vec3; 2] = [v(-6.0, 0.0, 5.0), v(3.5, 0.0, 5.0)];
/// Relative to a bench origin.
pub const BENCH_SEAT: Part = Part::new(v(0.0, -1.45, 0.0), v(2.0, 0.1, 0.6), Color::Brown);
/// Relative to a bench origin.
pub const BENCH_BACK: Part = Part::new(v(0.0, -1.0, -0.28), v(2.0, 0.8, 0.08), Color::Brown);
/// Relative to a bench origin.
pub const BENCH_LEGS: [Part; 2] = [
    Part::new(v(-0.85, -1.75, 0.0), v(0.1, 0.5, 0.5), Color::Black),
    Part::new(v(0.85, -1.75, 0.0), v(0.1, 0.5, 0.5), Color::Black),
];

pub const LAMP_ORIGIN: Vec3 = v(-6.0, 0.0, 8.0);
/// Relative to [`LAMP_ORIGIN`].
pub const LAMP_POLE: Part = Part::new(Vec3::ZERO, v(0.15, 4.0, 0.15), Color::Black);
/// Arm origin, relative to [`LAMP_ORIGIN`].
pub const LAMP_ARM_ORIGIN: Vec3 = v(0.0, 1.9, 0.0);
/// Relative to [`LAMP_ARM_ORIGIN`].
pub const LAMP_ARM: Part = Part::new(v(0.4, 0.0, 0.0), v(0.8, 0.08, 0.08), Color::Black);
/// Relative to [`LAMP_ARM_ORIGIN`].
pub const LAMP_HEAD: Part = Part::new(v(0.8, -0.15, 0.0), v(0.3, 0.3, 0.3), Color::Yellow);

// Fences --------------------------------------------------------------------

/// A straight fence starting at `start` and running along its local +x.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FenceRun {
    pub start: Vec3,
    /// Rotation about y; 90 turns local +x into world -z
    pub heading_degrees: f32,
    pub length: f32,
}

const fn fence(x: f32, z: f32, heading_degrees: f32, length: f32) -> FenceRun {
    FenceRun {
        start: v(x, 0.0, z),
        heading_degrees,
        length,
    }
}

pub const FENCE_RUNS: [FenceRun; 5] = [
    // Front, either side of the gate
    fence(-20.0, 12.0, 0.0, 15.5),
    fence(-1.5, 12.0, 0.0, 21.5),
    // Sides, running back from the front corners
    fence(-20.0, 12.0, 90.0, 24.0),
    fence(20.0, 12.0, 90.0, 24.0),
    // Back
    fence(-20.0, -12.0, 0.0, 40.0),
];

/// Gap between posts along a run.
pub const FENCE_POST_SPACING: f32 = 2.0;
/// Relative to a post position on the run.
pub const FENCE_POST: Part = Part::new(v(0.0, -1.3, 0.0), v(0.15, 1.4, 0.15), Color::DarkBrown);
/// Rail heights; each rail spans the full run length.
pub const FENCE_RAIL_HEIGHTS: [f32; 2] = [-1.5, -0.9];
/// Rail cross-section (y, z); x is the run length.
pub const FENCE_RAIL_SECTION: (f32, f32) = (0.08, 0.05);
pub const FENCE_RAIL_COLOR: Color = Color::Brown;

/// Post positions along a run of `length`, both ends included.
pub fn fence_post_offsets(length: f32) -> impl Iterator<Item = f32> {
    let spans = (length / FENCE_POST_SPACING).ceil().max(1.0) as usize;
    let step = length / spans as f32;
    (0..=spans).map(move |i| i as f32 * step)
}

// Gate ----------------------------------------------------------------------

/// Hinge line of the gate (its left edge), world space.
pub const GATE_HINGE: Vec3 = v(-4.5, -1.2, 12.0);
/// Distance from the hinge line to the panel center.
pub const GATE_HALF_WIDTH: f32 = 1.5;
/// Fixed posts either side of the opening, world space.
pub const GATE_POSTS: [Part; 2] = [
    Part::new(v(-4.6, -1.2, 12.0), v(0.2, 1.6, 0.2), Color::DarkGrey),
    Part::new(v(-1.4, -1.2, 12.0), v(0.2, 1.6, 0.2), Color::DarkGrey),
];
/// Relative to the swung panel center.
pub const GATE_RAILS: [Part; 2] = [
    Part::new(v(0.0, 0.6, 0.0), v(3.0, 0.1, 0.08), Color::Grey),
    Part::new(v(0.0, -0.6, 0.0), v(3.0, 0.1, 0.08), Color::Grey),
];
/// Number of vertical bars in the gate panel.
pub const GATE_BAR_COUNT: usize = 8;
/// Horizontal distance between bars.
pub const GATE_BAR_SPACING: f32 = 0.4;
/// Relative to a bar position.
pub const GATE_BAR: Part = Part::new(Vec3::ZERO, v(0.08, 1.2, 0.08), Color::Grey);

/// Bar x offsets, centered on the panel.
pub fn gate_bar_offsets() -> impl Iterator<Item = f32> {
    let first = -GATE_BAR_SPACING * (GATE_BAR_COUNT - 1) as f32 / 2.0;
    (0..GATE_BAR_COUNT).map(move |i| first + i as f32 * GATE_BAR_SPACING)
}
