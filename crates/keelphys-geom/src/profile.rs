use keelphys_core::types::Vec3;
use keelphys_core::HydroError;
use crate::Aabb;

/// Volumes at or below this are treated as degenerate: no force is ever
/// evaluated against them.
pub const MIN_VOLUME_M3: f32 = 1.0e-9;

/// Host length units per meter. 100.0 matches engines with a centimeter
/// convention; pass 1.0 for meter-native hosts.
pub const DEFAULT_UNITS_PER_METER: f32 = 100.0;

/// Static mass/geometry properties of one floating body, built once from
/// host bounds. Immutable afterwards: volume and mass do not track runtime
/// deformation or rescaling (known limitation).
#[derive(Copy, Clone, Debug)]
pub struct BodyProfile {
    pub density: f32,       // kg/m^3, configured
    pub volume_m3: f32,
    pub mass_kg: f32,
    pub height_m: f32,      // vertical full extent
    pub half_extents_m: Vec3,
    /// density < fluid density, decided here so non-floating bodies fall
    /// into the full-displacement sink policy instead of being rejected.
    pub floats: bool,
}

impl BodyProfile {
    /// Build from world-space half-extents in host units.
    ///
    /// Malformed extents never panic: the caller gets `InvalidGeometry` and
    /// should fall back to [`BodyProfile::degenerate`].
    pub fn from_half_extents(
        half_extents_units: Vec3,
        units_per_meter: f32,
        density: f32,
        rho_fluid: f32,
    ) -> Result<Self, HydroError> {
        let he = half_extents_units;
        if he.x <= 0.0 || he.y <= 0.0 || he.z <= 0.0 || units_per_meter <= 0.0 {
            return Err(HydroError::InvalidGeometry);
        }
        let he_m = he * (2.0 / units_per_meter); // full extents, meters
        let volume = he_m.x * he_m.y * he_m.z;
        if volume <= MIN_VOLUME_M3 {
            return Err(HydroError::InvalidGeometry);
        }
        Ok(Self {
            density,
            volume_m3: volume,
            mass_kg: density * volume,
            height_m: he_m.y,
            half_extents_m: he_m * 0.5,
            floats: density < rho_fluid,
        })
    }

    /// Convenience wrapper over the host bounds query.
    pub fn from_bounds(
        bounds: &Aabb,
        units_per_meter: f32,
        density: f32,
        rho_fluid: f32,
    ) -> Result<Self, HydroError> {
        Self::from_half_extents(bounds.half_extents(), units_per_meter, density, rho_fluid)
    }

    /// Zero-volume fallback for malformed bounds. Forces evaluated against
    /// it are skipped, never divided.
    pub fn degenerate(density: f32) -> Self {
        Self {
            density,
            volume_m3: 0.0,
            mass_kg: 0.0,
            height_m: 0.0,
            half_extents_m: Vec3::ZERO,
            floats: false,
        }
    }

    #[inline] pub fn is_degenerate(&self) -> bool { self.volume_m3 <= MIN_VOLUME_M3 }

    /// Weight in newtons under gravity `g`.
    #[inline] pub fn weight_n(&self, g: f32) -> f32 { self.mass_kg * g }
}
