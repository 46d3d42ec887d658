mod ledger;
mod debug;

pub use ledger::{Ledger, LedgerEvent};
pub use debug::{DebugSettings, PointDraw, NoDraw};

use keelphys_core::{StepStage, schedule_digest};

/// Records the stage order of one tick; the digest makes schedule drift
/// visible in tests without diffing logs.
#[derive(Default)]
pub struct ScheduleRecorder { stages: Vec<StepStage> }

impl ScheduleRecorder {
    pub fn new() -> Self { Self { stages: Vec::new() } }
    pub fn push(&mut self, s: StepStage) { self.stages.push(s); }
    pub fn clear(&mut self) { self.stages.clear(); }
    pub fn digest(&self) -> [u8; 32] { schedule_digest(&self.stages) }
}
