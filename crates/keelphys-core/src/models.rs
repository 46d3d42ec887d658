use crate::{StepCtx, Vec3, BodyId};

/// Flattened per-tick inputs for force models: current motion, fluid
/// constants, and the body profile numbers the models need. Built fresh
/// each tick by the component from host queries; models stay stateless.
#[derive(Copy, Clone, Debug)]
pub struct HydroQuery {
    pub pos_world: [f32; 3],
    pub vel_world: [f32; 3],
    /// Fluid density, kg/m^3 (water ~997).
    pub rho_fluid: f32,
    /// Gravitational acceleration, m/s^2.
    pub gravity: f32,
    /// World-space height of the fluid surface plane.
    pub sea_level: f32,
    pub volume_m3: f32,
    pub mass_kg: f32,
    /// Vertical full extent of the body, meters.
    pub height_m: f32,
    /// density < rho_fluid, decided once at profile build.
    pub floats: bool,
}

/// Buoyant force for the current tick, world frame, newtons.
pub trait BuoyancyModel: Send + Sync {
    fn force_contrib(&self, ctx: &StepCtx, q: HydroQuery) -> [f32; 3];
}

/// Drag force for the current tick, world frame, newtons.
pub trait DragModel: Send + Sync {
    fn force_contrib(&self, ctx: &StepCtx, q: HydroQuery) -> [f32; 3];
}

/// Outbound seam to the host rigid-body integrator: one call per submerged
/// sample point per tick. Point and force are both in body-local space.
pub trait ForceSink {
    fn apply_local_force(&mut self, body: BodyId, point_local: Vec3, force_local: Vec3);
}
