use bathy::{Config, Shape, WaveKind};
use clap::{Args, Parser, Subcommand};
use grd::{Format, GeoBounds};
use std::path::PathBuf;
use thiserror::Error;

/// NamiDance wave and bathymetry grid generator.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a bathymetry or initial wave GRD file.
    Generate(Generate),

    /// Print the header of an existing GRD file.
    Inspect(Inspect),
}

#[derive(Debug, Clone, Args)]
pub struct Generate {
    /// Generation type: circsin, circlin, lin{r,l,t,b}, sin{r,l,t,b},
    /// duhis, wavecirc, wavehorizontal, wavevertical or waveempty.
    #[arg(short = 't', long = "type", default_value = "circsin")]
    pub shape: Shape,

    /// Output type: grd (ASCII) or grdbin (binary).
    #[arg(short, long, default_value = "grd")]
    pub output: Format,

    /// Latitude range.
    #[arg(
        long,
        num_args = 2,
        value_names = ["MIN", "MAX"],
        default_values_t = [0.0, 1.0],
        allow_negative_numbers = true,
    )]
    pub lat: Vec<f64>,

    /// Longitude range.
    #[arg(
        long,
        num_args = 2,
        value_names = ["MIN", "MAX"],
        default_values_t = [0.0, 1.0],
        allow_negative_numbers = true,
    )]
    pub lon: Vec<f64>,

    /// Grid size in cells.
    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        default_values_t = [256, 256],
    )]
    pub size: Vec<usize>,

    /// Inner and outer band thresholds, in cells. Wave types use them
    /// as the crest position.
    #[arg(
        long,
        num_args = 2,
        value_names = ["BOTTOM", "TOP"],
        default_values_t = [64, 240],
        allow_negative_numbers = true,
    )]
    pub gap: Vec<i32>,

    /// Land and bottom elevation (positive down). Wave types use them
    /// as amplitude and still water depth.
    #[arg(
        short,
        num_args = 2,
        value_names = ["LAND", "BOTTOM"],
        default_values_t = [-10.0, 50.0],
        allow_negative_numbers = true,
    )]
    pub z: Vec<f32>,

    /// Put walls on the borders.
    #[arg(long)]
    pub wall: bool,

    /// Wall width in cells.
    #[arg(short, long, default_value_t = 3)]
    pub wall_width: usize,

    /// Slope tangent of the double wedge (duhis) flanks.
    #[arg(long, default_value_t = 0.05)]
    pub tana: f32,

    /// Sample rows in parallel.
    #[arg(long)]
    pub parallel: bool,

    /// Output file base name. `.grd` or `_bin.grd` is appended.
    #[arg(short, long, default_value = "namigen")]
    pub name: String,
}

#[derive(Debug, Clone, Args)]
pub struct Inspect {
    /// GRD file, ASCII or binary.
    pub file: PathBuf,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("--{0} expects exactly two values")]
    Arity(&'static str),

    #[error("grid size {0}x{1} has no cells")]
    EmptyGrid(usize, usize),

    #[error("gap bottom and top are both {0}, {1} needs a non-empty band")]
    DegenerateGap(i32, Shape),

    #[error("{0} needs a positive depth, got {1}")]
    Depth(Shape, f32),

    #[error("wall width {width} leaves no interior in a {size_x}x{size_y} grid")]
    WallWidth {
        width: usize,
        size_x: usize,
        size_y: usize,
    },
}

impl Generate {
    /// Returns a validated configuration.
    pub fn config(&self) -> Result<Config, ConfigError> {
        let (lat_min, lat_max) = pair(&self.lat, "lat")?;
        let (lon_min, lon_max) = pair(&self.lon, "lon")?;
        let (size_x, size_y) = pair(&self.size, "size")?;
        let (gap_bottom, gap_top) = pair(&self.gap, "gap")?;
        let (z_land, z_bottom) = pair(&self.z, "z")?;

        let cfg = Config {
            bounds: GeoBounds {
                lat_min,
                lat_max,
                lon_min,
                lon_max,
            },
            size_x,
            size_y,
            gap_bottom,
            gap_top,
            z_land,
            z_bottom,
            shape: self.shape,
            output: self.output,
            has_walls: self.wall,
            wall_width: self.wall_width,
            tana: self.tana,
        };
        validate(&cfg)?;
        Ok(cfg)
    }
}

fn pair<T: Copy>(values: &[T], name: &'static str) -> Result<(T, T), ConfigError> {
    match values {
        [a, b] => Ok((*a, *b)),
        _ => Err(ConfigError::Arity(name)),
    }
}

fn validate(cfg: &Config) -> Result<(), ConfigError> {
    if cfg.is_empty() {
        return Err(ConfigError::EmptyGrid(cfg.size_x, cfg.size_y));
    }
    match cfg.shape {
        Shape::Wave(WaveKind::Empty) => (),
        Shape::Wave(_) => {
            if cfg.z_bottom <= 0.0 || cfg.z_bottom.is_nan() {
                return Err(ConfigError::Depth(cfg.shape, cfg.z_bottom));
            }
        }
        Shape::Duhis => {
            if cfg.wall_width.saturating_mul(2) >= cfg.size_y {
                return Err(ConfigError::WallWidth {
                    width: cfg.wall_width,
                    size_x: cfg.size_x,
                    size_y: cfg.size_y,
                });
            }
        }
        shape => {
            if cfg.gap_bottom == cfg.gap_top {
                return Err(ConfigError::DegenerateGap(cfg.gap_bottom, shape));
            }
            let narrowest = cfg.size_x.min(cfg.size_y);
            if cfg.has_walls && cfg.wall_width.saturating_mul(2) >= narrowest {
                return Err(ConfigError::WallWidth {
                    width: cfg.wall_width,
                    size_x: cfg.size_x,
                    size_y: cfg.size_y,
                });
            }
        }
    }
    Ok(())
}
