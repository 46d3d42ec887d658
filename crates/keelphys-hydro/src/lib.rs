// keelphys-hydro: the per-tick force models. Everything here is pure
// computation; the only side effects live in the distributor one crate up.

mod models;

pub use models::{DepthAwareBuoyancy, ArchimedesBuoyancy, LinearQuadDrag, MIN_VOLUME_M3};

use keelphys_core::{StepCtx, Vec3, HydroQuery, BuoyancyModel, DragModel};

/// Transient per-tick totals. Recomputed every frame, never persisted.
#[derive(Copy, Clone, Debug)]
pub struct ForceOutput {
    pub buoyancy: Vec3,
    pub drag: Vec3,
}

impl ForceOutput {
    pub const ZERO: Self = Self { buoyancy: Vec3::ZERO, drag: Vec3::ZERO };
    #[inline] pub fn total(&self) -> Vec3 { self.buoyancy + self.drag }
}

/// Run both models against one query.
pub fn evaluate(
    ctx: &StepCtx,
    buoyancy: &dyn BuoyancyModel,
    drag: &dyn DragModel,
    q: HydroQuery,
) -> ForceOutput {
    let b = buoyancy.force_contrib(ctx, q);
    let d = drag.force_contrib(ctx, q);
    ForceOutput {
        buoyancy: Vec3::from_array(b),
        drag: Vec3::from_array(d),
    }
}
