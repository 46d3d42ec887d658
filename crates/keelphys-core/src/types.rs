use glam::{Vec3A, Quat};
use crate::Scalar;

pub type Vec3 = Vec3A;

/// World vertical. Sea level is a plane of constant y; depth is measured
/// along -UP.
pub const UP: Vec3 = Vec3A::Y;

#[inline] pub fn vec3(x: Scalar, y: Scalar, z: Scalar) -> Vec3 { Vec3::new(x, y, z) }
#[inline] pub fn iso(pos: Vec3, rot: Quat) -> Isometry { Isometry { pos, rot } }
#[inline] pub fn quat_identity() -> Quat { Quat::IDENTITY }

/// Body pose as reported by the host transform query.
#[derive(Copy, Clone, Debug)]
pub struct Isometry { pub pos: Vec3, pub rot: Quat }

impl Isometry {
    /// Local-space point to world space under this pose.
    #[inline] pub fn transform_point(&self, p: Vec3) -> Vec3 { self.rot * p + self.pos }
    /// World-space vector into this pose's local frame.
    #[inline] pub fn inverse_transform_vector(&self, v: Vec3) -> Vec3 { self.rot.inverse() * v }
}

impl Default for Isometry {
    fn default() -> Self { Self { pos: Vec3::ZERO, rot: Quat::IDENTITY } }
}

#[derive(Copy, Clone, Debug, Default)]
pub struct Velocity { pub lin: Vec3, pub ang: Vec3 }
