use keelphys_core::types::Vec3;
use keelphys_core::vec3;

pub const SAMPLE_POINT_COUNT: usize = 5;

/// Fixed local-space constellation used to distribute the aggregate force:
/// four footprint corners lowered a quarter of the vertical extent below
/// center, plus one keel centroid at half the vertical extent below center.
///
/// Regenerated from the profile's half-extents each tick; recomputation is
/// cheap and never goes stale if bounds change.
#[inline]
pub fn sample_points(half_extents_m: Vec3) -> [Vec3; SAMPLE_POINT_COUNT] {
    let hx = half_extents_m.x;
    let hy = half_extents_m.y;
    let hz = half_extents_m.z;
    [
        vec3( hx, -0.5 * hy,  hz),
        vec3( hx, -0.5 * hy, -hz),
        vec3(-hx, -0.5 * hy,  hz),
        vec3(-hx, -0.5 * hy, -hz),
        vec3(0.0, -hy, 0.0),
    ]
}
