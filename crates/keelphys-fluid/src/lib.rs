// keelphys-fluid: the environment side of the force model. One immutable
// value per world; bodies read it, nothing writes it after construction.

use keelphys_core::{StepHasher, hash_f32};

/// Divisor floor wherever we normalize by a depth range.
pub const MIN_DIVISOR: f32 = 1.0e-6;

#[derive(Copy, Clone, Debug)]
pub struct Fluid {
    pub rho: f32,       // kg/m^3
    pub g: f32,         // m/s^2
    pub sea_level: f32, // world-space y of the surface plane, meters
}

impl Default for Fluid {
    fn default() -> Self {
        Self { rho: 997.0, g: 9.807, sea_level: 0.0 }
    }
}

impl Fluid {
    /// Seawater at typical surface salinity.
    pub fn salt_water() -> Self { Self { rho: 1025.0, ..Self::default() } }

    /// Depth of a world-space height below the surface; 0 at or above it.
    #[inline]
    pub fn depth_below_surface(&self, y_world: f32) -> f32 {
        (self.sea_level - y_world).max(0.0)
    }

    /// Normalized [0,1] submersion of a point, reaching 1 once the point is
    /// `reach_m` below the surface.
    #[inline]
    pub fn submersion_factor(&self, y_world: f32, reach_m: f32) -> f32 {
        (self.depth_below_surface(y_world) / reach_m.max(MIN_DIVISOR)).clamp(0.0, 1.0)
    }

    #[inline]
    pub fn is_above_surface(&self, y_world: f32) -> bool { y_world > self.sea_level }
}

/// Deterministic 64-bit ID for a fluid spec (BLAKE3, first 8 bytes LE).
/// Lets hosts detect environment swaps without comparing floats.
pub fn spec_id(f: &Fluid) -> u64 {
    let mut h = StepHasher::new();
    for x in [f.rho, f.g, f.sea_level] { hash_f32(&mut h, x); }
    let b = h.finalize();
    u64::from_le_bytes([b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7]])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test] fn depth_clamps_at_surface() {
        let f = Fluid::default();
        assert_eq!(f.depth_below_surface(3.0), 0.0);
        assert_eq!(f.depth_below_surface(0.0), 0.0);
        assert!((f.depth_below_surface(-2.5) - 2.5).abs() < 1e-6);
    }

    #[test] fn factor_is_normalized() {
        let f = Fluid::default();
        assert_eq!(f.submersion_factor(1.0, 0.5), 0.0);
        assert!((f.submersion_factor(-0.25, 0.5) - 0.5).abs() < 1e-6);
        assert_eq!(f.submersion_factor(-10.0, 0.5), 1.0);
        // zero reach must not divide by zero
        assert_eq!(f.submersion_factor(-1.0, 0.0), 1.0);
    }

    #[test] fn spec_ids_differ_per_fluid() {
        assert_ne!(spec_id(&Fluid::default()), spec_id(&Fluid::salt_water()));
        assert_eq!(spec_id(&Fluid::default()), spec_id(&Fluid::default()));
    }
}
