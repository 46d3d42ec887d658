use crate::StepHasher;

/// Stages of one simulated frame, in execution order. The recorder in
/// keelphys-viz turns a tick's stage list into a digest so schedule drift
/// shows up in tests.
#[repr(u8)]
#[derive(Copy, Clone, Debug)]
pub enum StepStage {
    BuildProfile = 1,
    SampleMotion = 2,
    Buoyancy = 3,
    Drag = 4,
    Distribute = 5,
    Integrate = 6,
}

pub fn schedule_digest(stages: &[StepStage]) -> [u8; 32] {
    let mut h = StepHasher::new();
    for s in stages { h.update_bytes(&[*s as u8]); }
    h.finalize()
}
