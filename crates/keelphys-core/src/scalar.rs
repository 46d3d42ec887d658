/// Single simulation scalar. f32 everywhere; the host engines we target
/// store transforms and velocities in f32.
pub type Scalar = f32;
