use crate::options::Inspect;
use anyhow::Result;
use grd::GrdFile;
use std::io::{self, Write};

impl Inspect {
    pub fn run(&self) -> Result<()> {
        let file = GrdFile::open(&self.file)?;
        summarize(std::io::stdout().lock(), &file)?;
        Ok(())
    }
}

/// Writes the header fields of `file` to `wtr`.
pub fn summarize<W: Write>(mut wtr: W, file: &GrdFile) -> io::Result<()> {
    let GrdFile { bounds, grid } = file;
    writeln!(wtr, "size   : {} {}", grid.size_x(), grid.size_y())?;
    writeln!(wtr, "lat    : {:.7} {:.7}", bounds.lat_min, bounds.lat_max)?;
    writeln!(wtr, "lon    : {:.7} {:.7}", bounds.lon_min, bounds.lon_max)?;
    writeln!(
        wtr,
        "extent : {:.6} {:.6}",
        grid.extent().min,
        grid.extent().max
    )
}
