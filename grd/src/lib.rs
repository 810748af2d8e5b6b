//! Surfer-style GRD grid files.
//!
//! Two encodings are supported:
//!
//! - `DSAA`: whitespace separated ASCII, see [`ascii`].
//! - `DSBB`: packed little-endian binary, see [`binary`].
//!
//! Both carry the grid dimensions, the geographic bounds, the value
//! range and the row-major samples.

pub mod ascii;
pub mod binary;
mod error;

pub use crate::error::GrdError;
use log::info;
use std::{
    fmt,
    fs::File,
    io::{BufWriter, Read, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

/// Geographic extent of a grid, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoBounds {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Default for GeoBounds {
    fn default() -> Self {
        Self {
            lat_min: 0.0,
            lat_max: 1.0,
            lon_min: 0.0,
            lon_max: 1.0,
        }
    }
}

/// Running `(min, max)` over every sample of a grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub min: f64,
    pub max: f64,
}

impl Extent {
    /// Extent of zero samples.
    pub const EMPTY: Self = Self {
        min: f64::INFINITY,
        max: f64::NEG_INFINITY,
    };

    pub fn include(&mut self, sample: f32) {
        let sample = f64::from(sample);
        if sample < self.min {
            self.min = sample;
        }
        if sample > self.max {
            self.max = sample;
        }
    }

    /// Combines two extents with the same tie-breaking as
    /// [`Extent::include`], so merging row extents left to right
    /// matches a single sequential pass.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        if other.min < self.min {
            self.min = other.min;
        }
        if other.max > self.max {
            self.max = other.max;
        }
        self
    }
}

impl Default for Extent {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl FromIterator<f32> for Extent {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        let mut extent = Self::EMPTY;
        for sample in iter {
            extent.include(sample);
        }
        extent
    }
}

/// A row-major grid of elevation samples.
///
/// Sample `i` lives at `(x, y) = (i % size_x, i / size_x)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size_x: usize,
    size_y: usize,
    samples: Vec<f32>,
    extent: Extent,
}

impl Grid {
    /// Returns a grid from samples and their previously accumulated
    /// extent.
    ///
    /// # Panics
    ///
    /// If `samples.len() != size_x * size_y`.
    pub fn new(size_x: usize, size_y: usize, samples: Vec<f32>, extent: Extent) -> Self {
        assert_eq!(samples.len(), size_x * size_y);
        Self {
            size_x,
            size_y,
            samples,
            extent,
        }
    }

    /// Returns a grid, computing the extent from `samples`.
    pub fn from_samples(size_x: usize, size_y: usize, samples: Vec<f32>) -> Self {
        let extent = samples.iter().copied().collect();
        Self::new(size_x, size_y, samples, extent)
    }

    pub fn size_x(&self) -> usize {
        self.size_x
    }

    pub fn size_y(&self) -> usize {
        self.size_y
    }

    /// Returns the number of samples in this grid.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Returns the sample at `(x, y)`.
    pub fn get(&self, (x, y): (usize, usize)) -> f32 {
        self.samples[self.xy_to_linear_index((x, y))]
    }

    pub fn xy_to_linear_index(&self, (x, y): (usize, usize)) -> usize {
        y * self.size_x + x
    }

    #[cfg(test)]
    fn linear_index_to_xy(&self, idx: usize) -> (usize, usize) {
        (idx % self.size_x, idx / self.size_x)
    }
}

/// On-disk GRD encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// `DSAA`
    Ascii,
    /// `DSBB`
    Binary,
}

impl Format {
    const NAMES: [(&'static str, Format); 2] = [("grd", Format::Ascii), ("grdbin", Format::Binary)];

    /// Returns the format registered under `name`, if any.
    pub fn lookup(name: &str) -> Option<Self> {
        Self::NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, format)| *format)
    }

    pub fn name(self) -> &'static str {
        Self::NAMES
            .iter()
            .find(|(_, format)| *format == self)
            .map_or("", |(name, _)| name)
    }

    /// Returns the conventional output file name for `base`.
    pub fn file_name(self, base: &str) -> String {
        match self {
            Format::Ascii => format!("{base}.grd"),
            Format::Binary => format!("{base}_bin.grd"),
        }
    }
}

impl FromStr for Format {
    type Err = GrdError;
    fn from_str(s: &str) -> Result<Self, GrdError> {
        Self::lookup(s).ok_or_else(|| GrdError::Format(s.to_owned()))
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A grid together with its geographic bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct GrdFile {
    pub bounds: GeoBounds,
    pub grid: Grid,
}

impl GrdFile {
    /// Returns a GRD file parsed from `path`, detecting the encoding
    /// from its magic.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GrdError> {
        let mut raw = Vec::new();
        File::open(path)?.read_to_end(&mut raw)?;
        match raw.get(..4) {
            Some(magic) if magic == ascii::MAGIC.as_bytes() => ascii::read(&raw[..]),
            Some(magic) if magic == &binary::MAGIC[..] => binary::read(&raw[..]),
            Some(magic) => Err(GrdError::Magic([magic[0], magic[1], magic[2], magic[3]])),
            None => Err(GrdError::Header(String::from("file shorter than magic"))),
        }
    }

    /// Encodes `self` into `wtr`.
    pub fn encode<W: Write>(&self, wtr: W, format: Format) -> Result<(), GrdError> {
        match format {
            Format::Ascii => ascii::write(wtr, &self.bounds, &self.grid),
            Format::Binary => binary::write(wtr, &self.bounds, &self.grid),
        }
    }

    /// Writes `self` to a new file at `path`.
    ///
    /// A failed write leaves whatever was already flushed on disk.
    pub fn write<P: AsRef<Path>>(&self, path: P, format: Format) -> Result<Written, GrdError> {
        let path = path.as_ref();
        let mut wtr = BufWriter::new(File::create(path)?);
        self.encode(&mut wtr, format)?;
        wtr.flush()?;
        info!("wrote {} samples to {}", self.grid.len(), path.display());
        Ok(Written {
            path: path.to_owned(),
            extent: self.grid.extent(),
        })
    }
}

/// Completion notice for a written file.
///
/// Displays as `<path> MM(<min>, <max>)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Written {
    pub path: PathBuf,
    pub extent: Extent,
}

impl fmt::Display for Written {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} MM({:.6}, {:.6})",
            self.path.display(),
            self.extent.min,
            self.extent.max
        )
    }
}
