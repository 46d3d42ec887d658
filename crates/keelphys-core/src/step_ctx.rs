/// Execution context the host runs ticks under. The force path is identical
/// in both modes; `Preview` exists so hosts embedding an interactive preview
/// can tag telemetry, not to select a different code path.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum WorldMode {
    Runtime,
    Preview,
}

/// Per-tick context passed into model evaluations and the distributor.
#[derive(Copy, Clone, Debug)]
pub struct StepCtx {
    pub dt: f32,
    pub tick: u64,
    pub mode: WorldMode,
}
