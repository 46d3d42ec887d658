use glam::Vec3A;
use keelphys_core::{StepCtx, HydroQuery, BuoyancyModel, DragModel};

/// Volumes at or below this are degenerate; force models return zero
/// rather than divide into them.
pub const MIN_VOLUME_M3: f32 = 1.0e-9;

const MIN_DIVISOR: f32 = 1.0e-6;

/// Preferred buoyancy: displaced volume scales with how deep the reference
/// point sits below the surface, so a body eases into full lift instead of
/// snapping to it at the waterline.
///
/// Returns a single vertical force of ρ_fluid·g·V_displaced − m·g, i.e.
/// lift net of the body's own weight. Hosts keep applying their own
/// gravity on top; the model was tuned against that combination.
///
/// Sink policy: a body with density ≥ fluid density always displaces its
/// full volume, independent of depth — the net force stays negative and it
/// settles to the bottom.
#[derive(Copy, Clone, Debug)]
pub struct DepthAwareBuoyancy {
    /// Fraction of the body height over which lift ramps to full:
    /// reach = height / reach_divisor. Tuning constant, not physics.
    pub reach_divisor: f32,
}

impl Default for DepthAwareBuoyancy {
    fn default() -> Self { Self { reach_divisor: 4.0 } }
}

impl BuoyancyModel for DepthAwareBuoyancy {
    fn force_contrib(&self, _ctx: &StepCtx, q: HydroQuery) -> [f32; 3] {
        if q.volume_m3 <= MIN_VOLUME_M3 { return [0.0; 3]; }
        let displaced = if q.floats {
            let depth = (q.sea_level - q.pos_world[1]).max(0.0);
            let reach = (q.height_m / self.reach_divisor.max(MIN_DIVISOR)).max(MIN_DIVISOR);
            let factor = (depth / reach).clamp(0.0, 1.0);
            (q.volume_m3 * factor).min(q.volume_m3)
        } else {
            q.volume_m3
        };
        let fy = q.rho_fluid * q.gravity * displaced - q.mass_kg * q.gravity;
        [0.0, fy, 0.0]
    }
}

/// Legacy depth-blind policy: displaced volume is mass over fluid density,
/// i.e. exactly enough to carry the body's weight. Returns the GROSS upward
/// lift (the host still applies gravity). Kept for hosts that want the
/// original equilibrium behavior.
///
/// The upper bound here clamps against the object volume. The source this
/// model descends from clamped against the fluid density instead — a
/// unit mismatch (kg/m^3 bounding m^3); the volume clamp is the corrected
/// policy.
#[derive(Copy, Clone, Debug, Default)]
pub struct ArchimedesBuoyancy;

impl BuoyancyModel for ArchimedesBuoyancy {
    fn force_contrib(&self, _ctx: &StepCtx, q: HydroQuery) -> [f32; 3] {
        if q.volume_m3 <= MIN_VOLUME_M3 { return [0.0; 3]; }
        let displaced = if q.floats {
            (q.mass_kg / q.rho_fluid.max(MIN_DIVISOR)).min(q.volume_m3)
        } else {
            q.volume_m3
        };
        [0.0, q.rho_fluid * q.gravity * displaced, 0.0]
    }
}

/// Linear + quadratic velocity drag: F = −c1·v − c2·v·|v|.
/// Above the surface the whole force is scaled down — drag from air is
/// negligible next to water, and the scale keeps fluid exit smooth.
#[derive(Copy, Clone, Debug)]
pub struct LinearQuadDrag {
    pub linear: f32,
    pub quadratic: f32,
    pub air_scale: f32,
}

impl Default for LinearQuadDrag {
    fn default() -> Self {
        Self { linear: 0.8, quadratic: 0.2, air_scale: 0.01 }
    }
}

impl DragModel for LinearQuadDrag {
    fn force_contrib(&self, _ctx: &StepCtx, q: HydroQuery) -> [f32; 3] {
        let v = Vec3A::from_array(q.vel_world);
        // Host-fed velocity can go non-finite; never hand NaN back.
        if !v.is_finite() { return [0.0; 3]; }
        let mut f = -v * self.linear - v * v.length() * self.quadratic;
        if q.pos_world[1] > q.sea_level {
            f *= self.air_scale;
        }
        f.to_array()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keelphys_core::{StepCtx, WorldMode};

    fn ctx() -> StepCtx { StepCtx { dt: 1.0 / 60.0, tick: 0, mode: WorldMode::Runtime } }

    // 10 m^3 box of density 500 in water: mass 5000 kg.
    fn wood_box_at(y: f32) -> HydroQuery {
        HydroQuery {
            pos_world: [0.0, y, 0.0],
            vel_world: [0.0; 3],
            rho_fluid: 997.0,
            gravity: 9.807,
            sea_level: 0.0,
            volume_m3: 10.0,
            mass_kg: 5000.0,
            height_m: 2.0,
            floats: true,
        }
    }

    #[test] fn dry_body_feels_only_weight() {
        let q = wood_box_at(2.0); // sea_level + height
        let f = DepthAwareBuoyancy::default().force_contrib(&ctx(), q);
        assert!((f[1] - (-5000.0 * 9.807)).abs() < 1e-2);
    }

    #[test] fn deep_body_displaces_full_volume() {
        // at or below sea_level - height/4 the factor saturates
        let q = wood_box_at(-0.5);
        let f = DepthAwareBuoyancy::default().force_contrib(&ctx(), q);
        let expect = 997.0 * 9.807 * 10.0 - 5000.0 * 9.807; // 48_740.79 N
        assert!((f[1] - expect).abs() < 0.5);
        assert!((f[1] - 48_740.79).abs() < 0.5);
        // deeper changes nothing
        let f2 = DepthAwareBuoyancy::default().force_contrib(&ctx(), wood_box_at(-50.0));
        assert!((f[1] - f2[1]).abs() < 1e-3);
    }

    #[test] fn lift_ramps_between_surface_and_reach() {
        // halfway down the reach (height/4 = 0.5 m): half the volume displaced
        let q = wood_box_at(-0.25);
        let f = DepthAwareBuoyancy::default().force_contrib(&ctx(), q);
        let expect = 997.0 * 9.807 * 5.0 - 5000.0 * 9.807;
        assert!((f[1] - expect).abs() < 0.5);
    }

    #[test] fn sink_policy_ignores_depth() {
        // density 1200 >= 997: full displacement everywhere, even when "dry"
        let mk = |y: f32| HydroQuery {
            mass_kg: 12_000.0,
            floats: false,
            ..wood_box_at(y)
        };
        let m = DepthAwareBuoyancy::default();
        for y in [3.0, 0.0, -0.1, -80.0] {
            let f = m.force_contrib(&ctx(), mk(y));
            let expect = 997.0 * 9.807 * 10.0 - 12_000.0 * 9.807;
            assert!((f[1] - expect).abs() < 1e-1, "y={y}");
            assert!(f[1] < 0.0);
        }
    }

    #[test] fn degenerate_volume_is_skipped() {
        let q = HydroQuery { volume_m3: 0.0, mass_kg: 0.0, ..wood_box_at(-1.0) };
        assert_eq!(DepthAwareBuoyancy::default().force_contrib(&ctx(), q), [0.0; 3]);
        assert_eq!(ArchimedesBuoyancy.force_contrib(&ctx(), q), [0.0; 3]);
    }

    #[test] fn legacy_lift_carries_exactly_the_weight() {
        // displaced = m/rho, so gross lift == m g: neutral once submerged
        let f = ArchimedesBuoyancy.force_contrib(&ctx(), wood_box_at(-1.0));
        assert!((f[1] - 5000.0 * 9.807).abs() < 1e-1);
    }

    #[test] fn legacy_clamp_bounds_by_volume() {
        // mass/rho would displace ~5 m^3; only 1 m^3 of body exists
        let q = HydroQuery { volume_m3: 1.0, ..wood_box_at(-1.0) };
        let f = ArchimedesBuoyancy.force_contrib(&ctx(), q);
        assert!((f[1] - 997.0 * 9.807 * 1.0).abs() < 1e-1);
    }

    #[test] fn drag_matches_coefficients() {
        let q = HydroQuery { vel_world: [10.0, 0.0, 0.0], ..wood_box_at(-1.0) };
        let f = LinearQuadDrag::default().force_contrib(&ctx(), q);
        assert!((f[0] - (-28.0)).abs() < 1e-4);
        assert_eq!(f[1], 0.0);
        assert_eq!(f[2], 0.0);
    }

    #[test] fn drag_opposes_velocity_and_grows_with_speed() {
        let d = LinearQuadDrag::default();
        let mut last = 0.0f32;
        for s in [0.0, 0.5, 1.0, 4.0, 10.0, 25.0] {
            let q = HydroQuery { vel_world: [0.6 * s, -0.8 * s, 0.0], ..wood_box_at(-1.0) };
            let f = Vec3A::from_array(d.force_contrib(&ctx(), q));
            let v = Vec3A::from_array(q.vel_world);
            if s > 0.0 {
                assert!(f.dot(v) < 0.0);
            }
            assert!(f.length() >= last - 1e-4);
            last = f.length();
        }
    }

    #[test] fn air_drag_is_negligible() {
        let below = HydroQuery { vel_world: [10.0, 0.0, 0.0], ..wood_box_at(-1.0) };
        let above = HydroQuery { pos_world: [0.0, 1.0, 0.0], ..below };
        let d = LinearQuadDrag::default();
        let fb = d.force_contrib(&ctx(), below);
        let fa = d.force_contrib(&ctx(), above);
        assert!((fa[0] - fb[0] * 0.01).abs() < 1e-4);
    }

    #[test] fn non_finite_velocity_yields_zero_drag() {
        let q = HydroQuery { vel_world: [f32::NAN, 0.0, 0.0], ..wood_box_at(-1.0) };
        assert_eq!(LinearQuadDrag::default().force_contrib(&ctx(), q), [0.0; 3]);
    }
}
