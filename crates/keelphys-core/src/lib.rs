pub mod scalar;
pub mod ids;
pub mod types;
pub mod hash;
pub mod schedule;
pub mod step_ctx;
pub mod error;
pub mod models;

pub use scalar::Scalar;
pub use ids::BodyId;
pub use types::{Vec3, Isometry, Velocity, vec3, iso, quat_identity};
pub use hash::{StepHasher, hash_vec3, hash_quat, hash_f32};
pub use schedule::{StepStage, schedule_digest};
pub use step_ctx::{StepCtx, WorldMode};
pub use error::HydroError;
pub use models::{HydroQuery, BuoyancyModel, DragModel, ForceSink};
pub use glam::Quat;
