// keelphys-testbed: a minimal stand-in host. SoA body store, semi-implicit
// Euler, host gravity, and torque derived from the off-center point forces
// the distributor emits. Exists for tests, the bob example, and the sim
// tool — not a general rigid-body engine.

use std::sync::Arc;

use glam::Quat;
use keelphys_core::{
    BodyId, StepCtx, StepStage, Vec3, Isometry, Velocity, WorldMode, HydroError,
    BuoyancyModel, DragModel, ForceSink, StepHasher, hash_vec3, hash_quat,
    iso, vec3,
};
use keelphys_fluid::Fluid;
use keelphys_geom::Aabb;
use keelphys_buoy::{FloatConfig, FloatingBody, MotionState};
use keelphys_viz::{DebugSettings, Ledger, NoDraw, PointDraw, ScheduleRecorder};

/// Collects the per-point local forces of one frame and converts them to
/// world-space force + torque about each body's center.
struct Accum {
    rots: Vec<Quat>,
    force: Vec<Vec3>,
    torque: Vec<Vec3>,
}

impl Accum {
    fn new(rots: Vec<Quat>) -> Self {
        let n = rots.len();
        Self { rots, force: vec![Vec3::ZERO; n], torque: vec![Vec3::ZERO; n] }
    }
}

impl ForceSink for Accum {
    fn apply_local_force(&mut self, body: BodyId, point_local: Vec3, force_local: Vec3) {
        let i = body.0 as usize;
        let f_world = self.rots[i] * force_local;
        let r_world = self.rots[i] * point_local;
        self.force[i] += f_world;
        self.torque[i] += r_world.cross(f_world);
    }
}

pub struct BobWorld {
    fluid: Fluid,
    mode: WorldMode,
    tick: u64,

    // SoA body storage, BodyId = index
    pos: Vec<Vec3>,
    rot: Vec<Quat>,
    linvel: Vec<Vec3>,
    angvel: Vec<Vec3>,
    mass: Vec<f32>,
    inv_inertia_local: Vec<Vec3>, // diagonal, body frame

    floats: Vec<FloatingBody>,
    ledger: Ledger,
    schedule: ScheduleRecorder,
    debug: DebugSettings,
    drawn_points: Vec<(Vec3, bool)>,
}

/// Buffers the cosmetic sample-point draws of one frame.
struct CollectDraw<'a>(&'a mut Vec<(Vec3, bool)>);
impl PointDraw for CollectDraw<'_> {
    fn point(&mut self, world: Vec3, submerged: bool) {
        self.0.push((world, submerged));
    }
}

impl BobWorld {
    pub fn new(fluid: Fluid) -> Self {
        Self {
            fluid,
            mode: WorldMode::Runtime,
            tick: 0,
            pos: Vec::new(),
            rot: Vec::new(),
            linvel: Vec::new(),
            angvel: Vec::new(),
            mass: Vec::new(),
            inv_inertia_local: Vec::new(),
            floats: Vec::new(),
            ledger: Ledger::new(4096),
            schedule: ScheduleRecorder::new(),
            debug: DebugSettings::default(),
            drawn_points: Vec::new(),
        }
    }

    pub fn set_debug(&mut self, cfg: DebugSettings) { self.debug = cfg; }

    /// Sample points drawn during the last step (requires `draw_points`).
    pub fn drawn_points(&self) -> &[(Vec3, bool)] { &self.drawn_points }

    pub fn set_mode(&mut self, mode: WorldMode) { self.mode = mode; }
    pub fn fluid(&self) -> &Fluid { &self.fluid }
    #[inline] pub fn tick_index(&self) -> u64 { self.tick }
    #[inline] pub fn num_bodies(&self) -> u32 { self.pos.len() as u32 }

    pub fn body_pose(&self, id: BodyId) -> Isometry {
        iso(self.pos[id.0 as usize], self.rot[id.0 as usize])
    }
    pub fn body_vel(&self, id: BodyId) -> Velocity {
        Velocity { lin: self.linvel[id.0 as usize], ang: self.angvel[id.0 as usize] }
    }

    pub fn ledger(&self) -> &Ledger { &self.ledger }
    pub fn ledger_mut(&mut self) -> &mut Ledger { &mut self.ledger }
    pub fn schedule_digest(&self) -> [u8; 32] { self.schedule.digest() }

    /// Spawn a box hull: builds the floating-body profile from centimeter
    /// half-extents and derives mass/inertia from it.
    pub fn add_hull(
        &mut self,
        half_extents_units: Vec3,
        cfg: FloatConfig,
        start_pos: Vec3,
    ) -> Result<BodyId, HydroError> {
        let id = BodyId(self.pos.len() as u32);
        let fb = FloatingBody::new(id, cfg);
        self.spawn(fb, half_extents_units, start_pos)
    }

    /// Same, but with explicit force models (e.g. the legacy Archimedes
    /// policy for comparison runs).
    pub fn add_hull_with(
        &mut self,
        half_extents_units: Vec3,
        cfg: FloatConfig,
        start_pos: Vec3,
        buoyancy: Arc<dyn BuoyancyModel>,
        drag: Arc<dyn DragModel>,
    ) -> Result<BodyId, HydroError> {
        let id = BodyId(self.pos.len() as u32);
        let fb = FloatingBody::new(id, cfg).with_models(buoyancy, drag);
        self.spawn(fb, half_extents_units, start_pos)
    }

    fn spawn(
        &mut self,
        mut fb: FloatingBody,
        half_extents_units: Vec3,
        start_pos: Vec3,
    ) -> Result<BodyId, HydroError> {
        self.schedule.push(StepStage::BuildProfile);
        let bounds = Aabb::from_center_half_extents(Vec3::ZERO, half_extents_units);
        fb.init_from_bounds(&bounds, &self.fluid, &mut self.ledger)?;
        let profile = *fb.profile().ok_or(HydroError::MissingProfile)?;

        // Box inertia from the profile dims (diagonal, body frame).
        let dims = profile.half_extents_m * 2.0;
        let m = profile.mass_kg;
        let (x2, y2, z2) = (dims.x * dims.x, dims.y * dims.y, dims.z * dims.z);
        let i_diag = vec3(y2 + z2, x2 + z2, x2 + y2) * (m / 12.0);
        let inv_i = if m > 0.0 {
            vec3(1.0 / i_diag.x, 1.0 / i_diag.y, 1.0 / i_diag.z)
        } else {
            Vec3::ZERO
        };

        let id = fb.body;
        self.pos.push(start_pos);
        self.rot.push(Quat::IDENTITY);
        self.linvel.push(Vec3::ZERO);
        self.angvel.push(Vec3::ZERO);
        self.mass.push(m);
        self.inv_inertia_local.push(inv_i);
        self.floats.push(fb);
        Ok(id)
    }

    /// One fixed frame: evaluate every floating body, then integrate with
    /// host gravity on top of the net hydro forces.
    pub fn step(&mut self, dt: f32) -> Result<(), HydroError> {
        self.schedule.clear();
        let ctx = StepCtx { dt, tick: self.tick, mode: self.mode };

        self.schedule.push(StepStage::SampleMotion);
        let mut acc = Accum::new(self.rot.clone());

        self.schedule.push(StepStage::Buoyancy);
        self.schedule.push(StepStage::Drag);
        self.schedule.push(StepStage::Distribute);
        self.drawn_points.clear();
        for fb in &self.floats {
            let i = fb.body.0 as usize;
            let motion = MotionState {
                pose: iso(self.pos[i], self.rot[i]),
                vel: Velocity { lin: self.linvel[i], ang: self.angvel[i] },
            };
            if self.debug.draw_points {
                let mut draw = CollectDraw(&mut self.drawn_points);
                fb.update(&ctx, &self.fluid, &motion, &mut acc, &mut draw, &mut self.ledger)?;
            } else {
                fb.update(&ctx, &self.fluid, &motion, &mut acc, &mut NoDraw, &mut self.ledger)?;
            }
        }

        self.schedule.push(StepStage::Integrate);
        let gravity = vec3(0.0, -self.fluid.g, 0.0);
        for i in 0..self.pos.len() {
            let m = self.mass[i];
            if m <= 0.0 { continue; }

            let a = acc.force[i] / m + gravity;
            self.linvel[i] += a * dt;
            self.pos[i] += self.linvel[i] * dt;

            // torque -> angular velocity via the diagonal body-frame inertia
            let tau_local = self.rot[i].inverse() * acc.torque[i];
            let dw_local = self.inv_inertia_local[i] * tau_local;
            self.angvel[i] += (self.rot[i] * dw_local) * dt;

            // small-angle orientation update
            let dtheta = self.angvel[i] * dt;
            if dtheta.length_squared() > 0.0 {
                let dq = Quat::from_xyzw(dtheta.x * 0.5, dtheta.y * 0.5, dtheta.z * 0.5, 1.0)
                    .normalize();
                self.rot[i] = (dq * self.rot[i]).normalize();
            }
        }

        self.tick += 1;
        if self.debug.print_every != 0
            && (self.tick as u32) % self.debug.print_every == 0
            && !self.pos.is_empty()
        {
            println!(
                "tick {:6}  body0 y={:+.3}m vy={:+.3}m/s",
                self.tick, self.pos[0].y, self.linvel[0].y
            );
        }
        Ok(())
    }

    /// Deterministic state hash over all body state (BLAKE3).
    pub fn step_hash(&self) -> [u8; 32] {
        let mut h = StepHasher::new();
        h.update_bytes(&self.tick.to_le_bytes());
        for i in 0..self.pos.len() {
            hash_vec3(&mut h, &self.pos[i]);
            hash_quat(&mut h, &self.rot[i]);
            hash_vec3(&mut h, &self.linvel[i]);
            hash_vec3(&mut h, &self.angvel[i]);
        }
        h.finalize()
    }
}
