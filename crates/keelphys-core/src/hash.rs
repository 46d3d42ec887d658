use blake3::Hasher;
use crate::types::Vec3;
use glam::Quat;

/// Deterministic state hasher (BLAKE3). Used for run hashes in the testbed
/// and for environment spec identity.
pub struct StepHasher(Hasher);

impl StepHasher {
    pub fn new() -> Self { StepHasher(Hasher::new()) }
    pub fn update_bytes(&mut self, bytes: &[u8]) { self.0.update(bytes); }
    pub fn finalize(self) -> [u8; 32] { *self.0.finalize().as_bytes() }
}

impl Default for StepHasher {
    fn default() -> Self { Self::new() }
}

#[inline]
pub fn hash_f32(h: &mut StepHasher, x: f32) { h.update_bytes(&x.to_le_bytes()); }

#[inline]
pub fn hash_vec3(h: &mut StepHasher, v: &Vec3) {
    for c in [v.x, v.y, v.z] { h.update_bytes(&c.to_le_bytes()); }
}

#[inline]
pub fn hash_quat(h: &mut StepHasher, q: &Quat) {
    for c in [q.x, q.y, q.z, q.w] { h.update_bytes(&c.to_le_bytes()); }
}

/// Hex-encode a 32-byte hash for telemetry output.
pub fn hex32(x: [u8; 32]) -> String {
    let mut s = String::with_capacity(64);
    for b in &x {
        use std::fmt::Write;
        let _ = write!(s, "{:02x}", b);
    }
    s
}
