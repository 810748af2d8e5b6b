//! `DSBB` binary encoding.
//!
//! All fields are little-endian:
//!
//! | field                                 | type          |
//! |---------------------------------------|---------------|
//! | magic `DSBB`                          | `[u8; 4]`     |
//! | size_x, size_y                        | `u16`         |
//! | lon_min, lon_max, lat_max, lat_min    | `f64`         |
//! | min, max                              | `f64`         |
//! | samples, row-major                    | `f32`         |
//!
//! Note the latitude order: max _before_ min. Older releases of the
//! generator wrote lat_min first; this module only speaks the
//! max-first layout.

use crate::{Extent, GeoBounds, GrdError, GrdFile, Grid};
use byteorder::{LittleEndian as LE, ReadBytesExt, WriteBytesExt};
use std::io::{Read, Write};

pub const MAGIC: [u8; 4] = *b"DSBB";

/// Size of everything before the samples.
pub const HEADER_LEN: usize = 4 + 2 * 2 + 6 * 8;

/// Writes `grid` as a `DSBB` file.
///
/// Grids wider or taller than `u16::MAX` are rejected before anything
/// is written.
pub fn write<W: Write>(mut wtr: W, bounds: &GeoBounds, grid: &Grid) -> Result<(), GrdError> {
    let size_x = header_dimension("size_x", grid.size_x())?;
    let size_y = header_dimension("size_y", grid.size_y())?;
    let Extent { min, max } = grid.extent();

    wtr.write_all(&MAGIC)?;
    wtr.write_u16::<LE>(size_x)?;
    wtr.write_u16::<LE>(size_y)?;

    wtr.write_f64::<LE>(bounds.lon_min)?;
    wtr.write_f64::<LE>(bounds.lon_max)?;
    wtr.write_f64::<LE>(bounds.lat_max)?;
    wtr.write_f64::<LE>(bounds.lat_min)?;

    wtr.write_f64::<LE>(min)?;
    wtr.write_f64::<LE>(max)?;

    for sample in grid.samples() {
        wtr.write_f32::<LE>(*sample)?;
    }
    Ok(())
}

/// Parses a `DSBB` file from `rdr`.
pub fn read<R: Read>(mut rdr: R) -> Result<GrdFile, GrdError> {
    let mut header = [0_u8; HEADER_LEN];
    rdr.read_exact(&mut header)?;
    let (magic, fields) = header.split_at(MAGIC.len());
    if magic != &MAGIC[..] {
        return Err(GrdError::Magic([magic[0], magic[1], magic[2], magic[3]]));
    }
    let fields = &mut &fields[..];

    let size_x = usize::from(fields.read_u16::<LE>()?);
    let size_y = usize::from(fields.read_u16::<LE>()?);

    let lon_min = fields.read_f64::<LE>()?;
    let lon_max = fields.read_f64::<LE>()?;
    let lat_max = fields.read_f64::<LE>()?;
    let lat_min = fields.read_f64::<LE>()?;
    let bounds = GeoBounds {
        lat_min,
        lat_max,
        lon_min,
        lon_max,
    };

    let extent = Extent {
        min: fields.read_f64::<LE>()?,
        max: fields.read_f64::<LE>()?,
    };

    let mut raw = Vec::new();
    rdr.read_to_end(&mut raw)?;
    let expected = size_x * size_y;
    let actual = raw.len() / std::mem::size_of::<f32>();
    if actual != expected || raw.len() % std::mem::size_of::<f32>() != 0 {
        return Err(GrdError::Length { expected, actual });
    }
    let mut samples = vec![0.0_f32; expected];
    (&raw[..]).read_f32_into::<LE>(&mut samples)?;

    Ok(GrdFile {
        bounds,
        grid: Grid::new(size_x, size_y, samples, extent),
    })
}

fn header_dimension(axis: &'static str, value: usize) -> Result<u16, GrdError> {
    u16::try_from(value).map_err(|_| GrdError::Dimension { axis, value })
}
