use keelphys_core::Vec3;

/// Knobs for the testbed/tool debug surfaces.
#[derive(Copy, Clone, Debug)]
pub struct DebugSettings {
    /// Print a telemetry line every N ticks; 0 disables.
    pub print_every: u32,
    /// Forward sample points to the `PointDraw` hook.
    pub draw_points: bool,
}

impl Default for DebugSettings {
    fn default() -> Self { Self { print_every: 0, draw_points: false } }
}

/// Cosmetic per-sample-point visualization hook. Purely optional; hosts
/// without a debug renderer use [`NoDraw`].
pub trait PointDraw {
    fn point(&mut self, world: Vec3, submerged: bool);
}

pub struct NoDraw;
impl PointDraw for NoDraw {
    #[inline] fn point(&mut self, _world: Vec3, _submerged: bool) {}
}
