// keelphys-buoy: the floating-body component. One instance per host body;
// the host calls init once after spawn and update once per tick. All state
// is exclusively owned, so instances can be ticked in any interleaving.

mod distribute;

use std::sync::Arc;

use keelphys_core::{
    BodyId, StepCtx, Vec3, Isometry, Velocity, HydroError, HydroQuery,
    BuoyancyModel, DragModel, ForceSink,
};
use keelphys_fluid::Fluid;
use keelphys_geom::{Aabb, BodyProfile};
use keelphys_hydro::{DepthAwareBuoyancy, LinearQuadDrag, ForceOutput, evaluate};
use keelphys_viz::{Ledger, LedgerEvent, PointDraw};

pub use distribute::distribute;

/// Per-body tuning. `density` is the one gameplay-editable scalar; the rest
/// default to the values the model was tuned with.
#[derive(Copy, Clone, Debug)]
pub struct FloatConfig {
    /// Object density, kg/m^3. Set before play begins.
    pub density: f32,
    pub linear_drag: f32,
    pub quadratic_drag: f32,
    /// Drag multiplier while the reference point is above the surface.
    pub air_drag_scale: f32,
    /// Divide drag across the sample points so total drag is conserved.
    /// The single switch replacing the old divergent preview/runtime paths.
    pub share_drag: bool,
    /// Host length units per meter (100 for centimeter hosts).
    pub units_per_meter: f32,
}

impl Default for FloatConfig {
    fn default() -> Self {
        Self {
            density: 500.0,
            linear_drag: 0.8,
            quadratic_drag: 0.2,
            air_drag_scale: 0.01,
            share_drag: true,
            units_per_meter: 100.0,
        }
    }
}

/// Pose and velocity read fresh from the host physics state each tick.
/// Not owned by this crate.
#[derive(Copy, Clone, Debug, Default)]
pub struct MotionState {
    pub pose: Isometry,
    pub vel: Velocity,
}

impl MotionState {
    /// Reject host state that would poison the force math.
    pub fn validate(&self) -> Result<(), HydroError> {
        if self.vel.lin.is_finite() && self.pose.pos.is_finite() {
            Ok(())
        } else {
            Err(HydroError::DegenerateVelocity)
        }
    }
}

pub struct FloatingBody {
    pub body: BodyId,
    pub cfg: FloatConfig,
    profile: Option<BodyProfile>,
    buoyancy: Arc<dyn BuoyancyModel>,
    drag: Arc<dyn DragModel>,
}

impl FloatingBody {
    pub fn new(body: BodyId, cfg: FloatConfig) -> Self {
        let drag = LinearQuadDrag {
            linear: cfg.linear_drag,
            quadratic: cfg.quadratic_drag,
            air_scale: cfg.air_drag_scale,
        };
        Self {
            body,
            cfg,
            profile: None,
            buoyancy: Arc::new(DepthAwareBuoyancy::default()),
            drag: Arc::new(drag),
        }
    }

    /// Swap in different force models (e.g. the legacy Archimedes policy).
    /// The drag coefficients in `cfg` are ignored once a custom drag model
    /// is installed.
    pub fn with_models(
        mut self,
        buoyancy: Arc<dyn BuoyancyModel>,
        drag: Arc<dyn DragModel>,
    ) -> Self {
        self.buoyancy = buoyancy;
        self.drag = drag;
        self
    }

    /// Build the body profile from the host bounds query. Runs once after
    /// spawn; forces are zero until it has. Malformed bounds degrade to a
    /// zero-volume profile and report `InvalidGeometry` — update keeps
    /// ticking, it just applies nothing.
    pub fn init_from_bounds(
        &mut self,
        bounds: &Aabb,
        fluid: &Fluid,
        ledger: &mut Ledger,
    ) -> Result<(), HydroError> {
        let built = BodyProfile::from_bounds(
            bounds,
            self.cfg.units_per_meter,
            self.cfg.density,
            fluid.rho,
        );
        let (profile, status) = match built {
            Ok(p) => (p, Ok(())),
            Err(e) => (BodyProfile::degenerate(self.cfg.density), Err(e)),
        };
        ledger.push(LedgerEvent::ProfileBuilt {
            body: self.body,
            volume_m3: profile.volume_m3,
            mass_kg: profile.mass_kg,
            floats: profile.floats,
        });
        self.profile = Some(profile);
        status
    }

    pub fn profile(&self) -> Option<&BodyProfile> { self.profile.as_ref() }

    /// One simulated frame: evaluate buoyancy and drag for the current
    /// motion state, then push per-sample-point forces into `sink`. Returns
    /// the aggregate totals (what the distributor conserves).
    pub fn update(
        &self,
        ctx: &StepCtx,
        fluid: &Fluid,
        motion: &MotionState,
        sink: &mut dyn ForceSink,
        draw: &mut dyn PointDraw,
        ledger: &mut Ledger,
    ) -> Result<ForceOutput, HydroError> {
        let profile = match &self.profile {
            Some(p) => p,
            None => {
                debug_assert!(false, "FloatingBody::update before init_from_bounds");
                return Err(HydroError::MissingProfile);
            }
        };
        if profile.is_degenerate() {
            return Ok(ForceOutput::ZERO);
        }

        let mut vel = motion.vel.lin;
        if motion.validate().is_err() {
            ledger.push(LedgerEvent::DegenerateVelocity { body: self.body });
            vel = Vec3::ZERO;
        }

        let q = HydroQuery {
            pos_world: motion.pose.pos.to_array(),
            vel_world: vel.to_array(),
            rho_fluid: fluid.rho,
            gravity: fluid.g,
            sea_level: fluid.sea_level,
            volume_m3: profile.volume_m3,
            mass_kg: profile.mass_kg,
            height_m: profile.height_m,
            floats: profile.floats,
        };
        let out = evaluate(ctx, self.buoyancy.as_ref(), self.drag.as_ref(), q);

        ledger.push(LedgerEvent::Hydro {
            body: self.body,
            buoy_n: out.buoyancy.y,
            drag_n: out.drag.length(),
            depth_m: fluid.depth_below_surface(motion.pose.pos.y),
        });

        distribute(
            self.body,
            profile,
            &motion.pose,
            &out,
            fluid,
            self.cfg.share_drag,
            sink,
            draw,
            ledger,
        );
        Ok(out)
    }
}
