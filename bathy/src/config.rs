use crate::BathyError;
use grd::{Format, GeoBounds};
use std::{fmt, str::FromStr};

/// Grid edge a directional profile is measured from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Left,
    Right,
    Top,
    Bottom,
}

/// Solitary-wave crest layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveKind {
    /// Radial crest centered on `(gap_bottom, gap_top)`.
    Circular,
    /// Crest along the row `y = gap_bottom`.
    Horizontal,
    /// Crest along the column `x = gap_bottom`.
    Vertical,
    /// Flat, zero everywhere.
    Empty,
}

/// What to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    CircularSinusoidal,
    CircularLinear,
    Linear(Edge),
    Sinusoidal(Edge),
    /// Double wedge: a channel whose floor slopes down from both the
    /// left and right edges, walled along the top and bottom.
    Duhis,
    Wave(WaveKind),
}

impl Shape {
    const NAMES: [(&'static str, Shape); 15] = [
        ("circsin", Shape::CircularSinusoidal),
        ("circlin", Shape::CircularLinear),
        ("linr", Shape::Linear(Edge::Right)),
        ("linl", Shape::Linear(Edge::Left)),
        ("lint", Shape::Linear(Edge::Top)),
        ("linb", Shape::Linear(Edge::Bottom)),
        ("sinr", Shape::Sinusoidal(Edge::Right)),
        ("sinl", Shape::Sinusoidal(Edge::Left)),
        ("sint", Shape::Sinusoidal(Edge::Top)),
        ("sinb", Shape::Sinusoidal(Edge::Bottom)),
        ("duhis", Shape::Duhis),
        ("wavecirc", Shape::Wave(WaveKind::Circular)),
        ("wavehorizontal", Shape::Wave(WaveKind::Horizontal)),
        ("wavevertical", Shape::Wave(WaveKind::Vertical)),
        ("waveempty", Shape::Wave(WaveKind::Empty)),
    ];

    /// Returns the shape registered under `name`, if any.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, shape)| *shape)
    }

    /// Returns every registered `(name, shape)` pair.
    pub fn all() -> &'static [(&'static str, Shape)] {
        &Self::NAMES
    }

    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, shape)| *shape == self)
            .map_or("", |(name, _)| name)
    }

    pub fn is_wave(self) -> bool {
        matches!(self, Shape::Wave(_))
    }
}

impl FromStr for Shape {
    type Err = BathyError;
    fn from_str(s: &str) -> Result<Self, BathyError> {
        Self::lookup(s).ok_or_else(|| BathyError::Shape(s.to_owned()))
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Resolved generation parameters.
///
/// Elevations are positive-down: `z_bottom` is the depth inside the
/// band, `z_land` the value outside of it. For wave shapes `|z_land|`
/// is the crest amplitude and `z_bottom` the still water depth.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bounds: GeoBounds,

    /// Number of columns.
    pub size_x: usize,

    /// Number of rows.
    pub size_y: usize,

    /// Inner threshold of the interpolation band, in cells.
    pub gap_bottom: i32,

    /// Outer threshold of the interpolation band, in cells.
    pub gap_top: i32,

    pub z_land: f32,

    pub z_bottom: f32,

    pub shape: Shape,

    pub output: Format,

    /// Force `z_land` along all four borders.
    pub has_walls: bool,

    /// Wall thickness in cells.
    pub wall_width: usize,

    /// Slope tangent of the double-wedge flanks.
    pub tana: f32,
}

impl Config {
    /// Returns the number of cells in the configured grid.
    pub fn len(&self) -> usize {
        self.size_x * self.size_y
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bounds: GeoBounds::default(),
            size_x: 256,
            size_y: 256,
            gap_bottom: 64,
            gap_top: 240,
            z_land: -10.0,
            z_bottom: 50.0,
            shape: Shape::CircularSinusoidal,
            output: Format::Ascii,
            has_walls: false,
            wall_width: 3,
            tana: 0.05,
        }
    }
}
