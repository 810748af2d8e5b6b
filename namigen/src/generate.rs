use crate::options::Generate;
use anyhow::Result;
use bathy::{sample, sample_par, Config};
use grd::{GrdFile, Written};
use log::info;
use std::path::Path;

impl Generate {
    pub fn run(&self) -> Result<()> {
        let cfg = self.config()?;
        let path = cfg.output.file_name(&self.name);
        let written = generate(&cfg, self.parallel, Path::new(&path))?;
        println!("{written}");
        Ok(())
    }
}

/// Samples `cfg` and writes the grid to `path`.
pub fn generate(cfg: &Config, parallel: bool, path: &Path) -> Result<Written> {
    log_config(cfg);
    let grid = if parallel { sample_par(cfg) } else { sample(cfg) };
    let file = GrdFile {
        bounds: cfg.bounds,
        grid,
    };
    Ok(file.write(path, cfg.output)?)
}

fn log_config(cfg: &Config) {
    info!("lat   : {} {}", cfg.bounds.lat_min, cfg.bounds.lat_max);
    info!("lon   : {} {}", cfg.bounds.lon_min, cfg.bounds.lon_max);
    info!("size  : {} {}", cfg.size_x, cfg.size_y);
    info!("gap   : {} {}", cfg.gap_bottom, cfg.gap_top);
    info!("z     : {} {}", cfg.z_land, cfg.z_bottom);
    info!("type  : {}", cfg.shape);
    info!("out   : {}", cfg.output);
    info!("walls : {} (width {})", cfg.has_walls, cfg.wall_width);
    info!("tana  : {}", cfg.tana);
}
