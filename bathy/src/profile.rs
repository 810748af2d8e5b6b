//! Per-cell elevation profiles.
//!
//! Every function here is pure: the result depends only on the cell
//! position `(x, y)` and the [`Config`].

use crate::{
    math::{banded, Blend},
    Config, Edge, Shape, WaveKind,
};

/// Returns the unmasked elevation of `shape` at `(x, y)`.
pub fn profile(shape: Shape, pos: (usize, usize), cfg: &Config) -> f32 {
    match shape {
        Shape::CircularSinusoidal => circular(Blend::Sinusoidal, pos, cfg),
        Shape::CircularLinear => circular(Blend::Linear, pos, cfg),
        Shape::Linear(edge) => directional(edge, Blend::Linear, pos, cfg),
        Shape::Sinusoidal(edge) => directional(edge, Blend::Sinusoidal, pos, cfg),
        Shape::Duhis => double_wedge(pos, cfg),
        Shape::Wave(kind) => wave(kind, pos, cfg),
    }
}

/// Radially symmetric basin around the grid center.
///
/// Distance runs from the cell center `(x + 0.5, y + 0.5)` to
/// `(size_x / 2, size_y / 2)` rather than from the raw index `(x, y)`,
/// so that a basin on an even-sized grid is symmetric. On a 4x4 grid
/// the four center cells then sit 0.71 cells out and only reach
/// `z_bottom` once `gap_bottom / 2` covers that. The band thresholds
/// are diameters, hence the halving.
#[allow(clippy::cast_precision_loss)]
pub fn circular(blend: Blend, (x, y): (usize, usize), cfg: &Config) -> f32 {
    let center_x = cfg.size_x as f32 * 0.5;
    let center_y = cfg.size_y as f32 * 0.5;
    let dx = x as f32 + 0.5 - center_x;
    let dy = y as f32 + 0.5 - center_y;
    let distance = dx.hypot(dy);
    banded(
        distance,
        cfg.gap_bottom as f32 * 0.5,
        cfg.gap_top as f32 * 0.5,
        blend,
        cfg.z_land,
        cfg.z_bottom,
    )
}

/// Flat bottom next to `edge`, rising to land away from it.
#[allow(clippy::cast_precision_loss)]
pub fn directional(edge: Edge, blend: Blend, (x, y): (usize, usize), cfg: &Config) -> f32 {
    let distance = match edge {
        Edge::Right => x,
        Edge::Left => cfg.size_x - 1 - x,
        Edge::Bottom => y,
        Edge::Top => cfg.size_y - 1 - y,
    };
    banded(
        distance as f32,
        cfg.gap_bottom as f32,
        cfg.gap_top as f32,
        blend,
        cfg.z_land,
        cfg.z_bottom,
    )
}

/// Channel floor sloping away from the nearer of the left and right
/// edges by `tana` per cell, bounded by `z_bottom`.
#[allow(clippy::cast_precision_loss)]
pub fn double_wedge((x, _y): (usize, usize), cfg: &Config) -> f32 {
    let distance = x.min(cfg.size_x - 1 - x) as f32;
    let (lo, hi) = if cfg.z_land <= cfg.z_bottom {
        (cfg.z_land, cfg.z_bottom)
    } else {
        (cfg.z_bottom, cfg.z_land)
    };
    let z = cfg.z_land + (cfg.z_bottom - cfg.z_land).signum() * cfg.tana * distance;
    z.max(lo).min(hi)
}

/// Hyperbolic-secant-squared solitary wave of amplitude `|z_land|` on
/// water of depth `z_bottom`.
#[allow(clippy::cast_precision_loss)]
pub fn wave(kind: WaveKind, (x, y): (usize, usize), cfg: &Config) -> f32 {
    let (x, y) = (x as f32, y as f32);
    let (c0, c1) = (cfg.gap_bottom as f32, cfg.gap_top as f32);
    let distance = match kind {
        WaveKind::Circular => (x - c0).hypot(y - c1),
        WaveKind::Horizontal => (y - c0).abs(),
        WaveKind::Vertical => (x - c0).abs(),
        WaveKind::Empty => return 0.0,
    };
    let amplitude = cfg.z_land.abs();
    let depth = cfg.z_bottom;
    let k = (0.75 * amplitude / depth.powi(3)).sqrt();
    amplitude / (k * distance).cosh().powi(2)
}

#[cfg(test)]
mod tests {
    use super::{circular, directional, double_wedge, profile, wave};
    use crate::{Blend, Config, Edge, Shape, WaveKind};
    use approx::assert_relative_eq;

    fn cfg() -> Config {
        Config {
            size_x: 10,
            size_y: 8,
            gap_bottom: 2,
            gap_top: 6,
            ..Config::default()
        }
    }

    #[test]
    fn test_circular_bands() {
        let cfg = Config {
            size_x: 20,
            size_y: 20,
            gap_bottom: 4,
            gap_top: 16,
            ..Config::default()
        };
        for blend in [Blend::Linear, Blend::Sinusoidal] {
            // Cell (9, 9) is 0.71 cells from the center.
            assert_eq!(circular(blend, (9, 9), &cfg), cfg.z_bottom);
            // Cell (0, 0) is 13.4 cells away, past gap_top / 2.
            assert_eq!(circular(blend, (0, 0), &cfg), cfg.z_land);
            let z = circular(blend, (14, 10), &cfg);
            assert!(cfg.z_land < z && z < cfg.z_bottom);
        }
    }

    #[test]
    fn test_circular_is_symmetric() {
        let cfg = Config {
            size_x: 16,
            size_y: 16,
            gap_bottom: 2,
            gap_top: 14,
            ..Config::default()
        };
        for (x, y) in [(3, 5), (0, 7), (6, 1)] {
            let z = circular(Blend::Sinusoidal, (x, y), &cfg);
            assert_eq!(z, circular(Blend::Sinusoidal, (15 - x, y), &cfg));
            assert_eq!(z, circular(Blend::Sinusoidal, (x, 15 - y), &cfg));
            assert_eq!(z, circular(Blend::Sinusoidal, (y, x), &cfg));
        }
    }

    #[test]
    fn test_directional_edges() {
        let cfg = cfg();
        // Right measures from x = 0.
        assert_eq!(directional(Edge::Right, Blend::Linear, (2, 3), &cfg), cfg.z_bottom);
        assert_eq!(directional(Edge::Right, Blend::Linear, (6, 3), &cfg), cfg.z_land);
        assert_relative_eq!(
            directional(Edge::Right, Blend::Linear, (4, 3), &cfg),
            20.0,
            epsilon = 1e-5
        );
        // Left mirrors right.
        for x in 0..cfg.size_x {
            assert_eq!(
                directional(Edge::Left, Blend::Linear, (x, 0), &cfg),
                directional(Edge::Right, Blend::Linear, (cfg.size_x - 1 - x, 0), &cfg)
            );
        }
        // Bottom measures from y = 0, top mirrors it.
        assert_eq!(directional(Edge::Bottom, Blend::Sinusoidal, (0, 1), &cfg), cfg.z_bottom);
        assert_eq!(directional(Edge::Top, Blend::Sinusoidal, (0, 6), &cfg), cfg.z_bottom);
        assert_eq!(directional(Edge::Top, Blend::Sinusoidal, (0, 0), &cfg), cfg.z_land);
    }

    #[test]
    fn test_directional_monotonic() {
        let cfg = Config {
            size_x: 64,
            gap_bottom: 8,
            gap_top: 48,
            ..cfg()
        };
        for blend in [Blend::Linear, Blend::Sinusoidal] {
            let row: Vec<f32> = (0..cfg.size_x)
                .map(|x| directional(Edge::Right, blend, (x, 0), &cfg))
                .collect();
            assert!(row.windows(2).all(|w| w[0] >= w[1]));
        }
    }

    #[test]
    fn test_double_wedge() {
        let cfg = Config {
            size_x: 11,
            tana: 2.0,
            z_land: 0.0,
            z_bottom: 7.0,
            ..cfg()
        };
        assert_eq!(double_wedge((0, 3), &cfg), 0.0);
        assert_eq!(double_wedge((10, 3), &cfg), 0.0);
        assert_eq!(double_wedge((1, 3), &cfg), 2.0);
        assert_eq!(double_wedge((9, 3), &cfg), 2.0);
        // Slope would reach 10 at the middle, floor caps it.
        assert_eq!(double_wedge((5, 3), &cfg), 7.0);

        let inverted = Config {
            z_land: 5.0,
            z_bottom: -5.0,
            ..cfg
        };
        assert_eq!(double_wedge((2, 0), &inverted), 1.0);
        assert_eq!(double_wedge((5, 0), &inverted), -5.0);
    }

    #[test]
    fn test_wave_crest() {
        let cfg = Config {
            size_x: 100,
            size_y: 100,
            gap_bottom: 40,
            gap_top: 60,
            z_land: -2.0,
            z_bottom: 10.0,
            ..Config::default()
        };
        assert_relative_eq!(wave(WaveKind::Horizontal, (7, 40), &cfg), 2.0);
        assert_relative_eq!(wave(WaveKind::Vertical, (40, 7), &cfg), 2.0);
        assert_relative_eq!(wave(WaveKind::Circular, (40, 60), &cfg), 2.0);
        assert_eq!(
            wave(WaveKind::Horizontal, (0, 35), &cfg),
            wave(WaveKind::Horizontal, (0, 45), &cfg)
        );

        // H / cosh²(sqrt(0.75 * 2 / 1000) * 10)
        let expected = 2.0 / (0.038_729_835_f32 * 10.0).cosh().powi(2);
        assert_relative_eq!(
            wave(WaveKind::Vertical, (50, 0), &cfg),
            expected,
            epsilon = 1e-6
        );
        assert!(wave(WaveKind::Circular, (0, 0), &cfg) < wave(WaveKind::Circular, (30, 50), &cfg));
    }

    #[test]
    fn test_empty_wave() {
        let cfg = cfg();
        for y in 0..cfg.size_y {
            for x in 0..cfg.size_x {
                assert_eq!(profile(Shape::Wave(WaveKind::Empty), (x, y), &cfg), 0.0);
            }
        }
    }
}
