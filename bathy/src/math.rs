use std::f32::consts::PI;

/// How a banded profile eases between `z_bottom` and `z_land`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blend {
    Linear,
    /// Half cosine, zero slope at both ends of the band.
    Sinusoidal,
}

impl Blend {
    /// Returns the elevation at normalized band position `t`, where
    /// `t = 0` is the land side and `t = 1` the bottom side.
    pub fn apply(self, t: f32, z_land: f32, z_bottom: f32) -> f32 {
        let weight = match self {
            Blend::Linear => t,
            Blend::Sinusoidal => (PI * t - PI).cos() * 0.5 + 0.5,
        };
        z_land + weight * (z_bottom - z_land)
    }
}

/// Maps `distance` through the band `(inner, outer)`.
///
/// At or beyond `outer` the result is exactly `z_land`, at or inside
/// `inner` exactly `z_bottom`.
pub fn banded(
    distance: f32,
    inner: f32,
    outer: f32,
    blend: Blend,
    z_land: f32,
    z_bottom: f32,
) -> f32 {
    if distance >= outer {
        z_land
    } else if distance <= inner {
        z_bottom
    } else {
        let t = 1.0 - (distance - inner) / (outer - inner);
        blend.apply(t, z_land, z_bottom)
    }
}
