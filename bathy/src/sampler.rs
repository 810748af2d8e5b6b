use crate::{classify, Config};
use grd::{Extent, Grid};
use log::debug;
use rayon::prelude::*;

/// Evaluates every cell of `cfg` in row-major order.
pub fn sample(cfg: &Config) -> Grid {
    let now = std::time::Instant::now();
    let mut extent = Extent::EMPTY;
    let mut samples = Vec::with_capacity(cfg.len());
    for idx in 0..cfg.len() {
        let pos = (idx % cfg.size_x, idx / cfg.size_x);
        let z = classify(pos, cfg);
        extent.include(z);
        samples.push(z);
    }
    debug!(
        "sampled {}x{} {} in {:?}",
        cfg.size_x,
        cfg.size_y,
        cfg.shape,
        now.elapsed()
    );
    Grid::new(cfg.size_x, cfg.size_y, samples, extent)
}

/// Same as [`sample`], with rows evaluated in parallel.
///
/// The result is identical to [`sample`], including the extent.
pub fn sample_par(cfg: &Config) -> Grid {
    if cfg.is_empty() {
        return Grid::new(cfg.size_x, cfg.size_y, Vec::new(), Extent::EMPTY);
    }
    let now = std::time::Instant::now();
    let mut samples = vec![0.0_f32; cfg.len()];
    let extent = samples
        .par_chunks_mut(cfg.size_x)
        .enumerate()
        .map(|(y, row)| {
            let mut extent = Extent::EMPTY;
            for (x, dst) in row.iter_mut().enumerate() {
                *dst = classify((x, y), cfg);
                extent.include(*dst);
            }
            extent
        })
        .reduce(|| Extent::EMPTY, Extent::merge);
    debug!(
        "sampled {}x{} {} on {} threads in {:?}",
        cfg.size_x,
        cfg.size_y,
        cfg.shape,
        rayon::current_num_threads(),
        now.elapsed()
    );
    Grid::new(cfg.size_x, cfg.size_y, samples, extent)
}
