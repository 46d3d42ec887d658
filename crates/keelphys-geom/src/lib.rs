mod aabb;
mod profile;
mod points;

pub use aabb::Aabb;
pub use profile::{BodyProfile, MIN_VOLUME_M3, DEFAULT_UNITS_PER_METER};
pub use points::{sample_points, SAMPLE_POINT_COUNT};
