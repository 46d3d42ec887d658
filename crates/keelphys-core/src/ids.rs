use core::fmt;

/// Host-side rigid body handle. Opaque to the force model; only echoed back
/// through the `ForceSink` so the host can route per-point forces.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BodyId(pub u32);
impl fmt::Display for BodyId { fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "BodyId({})", self.0) } }
