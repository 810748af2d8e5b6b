use crate::{profile::profile, Config, Shape};

/// Returns the final elevation of the cell at `(x, y)`.
///
/// Waves are used verbatim. The double wedge is always walled along
/// the top and bottom rows; other bathymetry shapes are walled on all
/// four borders when `has_walls` is set. Walls take precedence over
/// the shape profile.
pub fn classify(pos: (usize, usize), cfg: &Config) -> f32 {
    match cfg.shape {
        Shape::Wave(_) => profile(cfg.shape, pos, cfg),
        Shape::Duhis if in_horizontal_wall(pos, cfg) => cfg.z_land,
        Shape::Duhis => profile(Shape::Duhis, pos, cfg),
        _ if cfg.has_walls && in_wall(pos, cfg) => cfg.z_land,
        shape => profile(shape, pos, cfg),
    }
}

fn in_horizontal_wall((_x, y): (usize, usize), cfg: &Config) -> bool {
    y < cfg.wall_width || y + cfg.wall_width >= cfg.size_y
}

fn in_wall((x, y): (usize, usize), cfg: &Config) -> bool {
    x < cfg.wall_width || x + cfg.wall_width >= cfg.size_x || in_horizontal_wall((x, y), cfg)
}
