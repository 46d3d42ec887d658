use keelphys_core::types::Vec3;

/// Axis-aligned bounds as reported by the host's actor-bounds query,
/// in host length units.
#[derive(Copy, Clone, Debug, Default)]
pub struct Aabb { pub min: Vec3, pub max: Vec3 }

impl Aabb {
    #[inline] pub fn new(min: Vec3, max: Vec3) -> Self { Self { min, max } }
    #[inline] pub fn from_center_half_extents(c: Vec3, he: Vec3) -> Self {
        Self { min: c - he, max: c + he }
    }
    #[inline] pub fn center(&self) -> Vec3 { (self.min + self.max) * 0.5 }
    #[inline] pub fn half_extents(&self) -> Vec3 { (self.max - self.min) * 0.5 }
    /// Vertical full extent, host units.
    #[inline] pub fn height(&self) -> f32 { self.max.y - self.min.y }
}
