use std::collections::VecDeque;
use keelphys_core::BodyId;

/// Telemetry events from the force path. Pushed every tick, drained by
/// whatever debug surface the host wires up (or nobody).
#[derive(Copy, Clone, Debug)]
pub enum LedgerEvent {
    ProfileBuilt { body: BodyId, volume_m3: f32, mass_kg: f32, floats: bool },
    Hydro { body: BodyId, buoy_n: f32, drag_n: f32, depth_m: f32 },
    PointForce { body: BodyId, idx: u8, factor: f32, force_n: f32 },
    DegenerateVelocity { body: BodyId },
}

/// Bounded event ring; oldest entries fall off once full.
pub struct Ledger {
    cap: usize,
    events: VecDeque<LedgerEvent>,
}

impl Ledger {
    pub fn new(cap: usize) -> Self {
        Self { cap: cap.max(1), events: VecDeque::with_capacity(cap.max(1)) }
    }

    pub fn push(&mut self, e: LedgerEvent) {
        if self.events.len() == self.cap { self.events.pop_front(); }
        self.events.push_back(e);
    }

    pub fn len(&self) -> usize { self.events.len() }
    pub fn is_empty(&self) -> bool { self.events.is_empty() }
    pub fn clear(&mut self) { self.events.clear(); }
    pub fn iter(&self) -> impl Iterator<Item = &LedgerEvent> { self.events.iter() }
    pub fn drain(&mut self) -> impl Iterator<Item = LedgerEvent> + '_ { self.events.drain(..) }
}
