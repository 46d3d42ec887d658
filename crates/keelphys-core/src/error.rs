use thiserror::Error;

/// Local failure modes of the force path. Nothing here crosses the host
/// seam as a panic; callers degrade to zero force and keep ticking.
#[derive(Debug, Error, Copy, Clone, PartialEq, Eq)]
pub enum HydroError {
    /// Zero or negative bounding extents. Profile degrades to zero
    /// volume/mass and buoyancy is skipped instead of dividing by zero.
    #[error("bounding extents are zero or negative; profile degraded")]
    InvalidGeometry,

    /// Non-finite velocity from the host. Drag is skipped for the tick so
    /// NaN never propagates back into the integrator.
    #[error("non-finite velocity; drag skipped this tick")]
    DegenerateVelocity,

    /// Force evaluation requested before the body profile was built.
    #[error("force evaluated before profile initialization")]
    MissingProfile,
}
