pub mod buffer;
pub mod epsg3857;
pub mod epsg4326;
pub mod registry;

use crate::extent::Extent;

/// Units of a coordinate reference system.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Units {
    Degrees,
    Meters,
}

impl Units {
    /// Meters covered by one unit, using a 6370997 m sphere for degrees.
    pub fn meters_per_unit(&self) -> f64 {
        match self {
            Self::Degrees => 2.0 * std::f64::consts::PI * 6_370_997.0 / 360.0,
            Self::Meters => 1.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Degrees => "degrees",
            Self::Meters => "m",
        }
    }
}

/// Resolution adjustment for a point in the projection's own coordinates.
pub type PointResolutionFn = fn(f64, [f64; 2]) -> f64;

/// Static description of a projection as seen by rendering code.
///
/// Aliases of one system share everything but `code`.
#[derive(Clone, Copy, Debug)]
pub struct Projection {
    pub code: &'static str,
    pub units: Units,
    pub extent: Extent,
    /// Covers the whole globe, so views may wrap horizontally.
    pub global: bool,
    pub world_extent: Extent,
    pub point_resolution: Option<PointResolutionFn>,
}

impl Projection {
    /// Resolution at `point`, corrected for local distortion when the
    /// projection defines a correction.
    pub fn point_resolution(&self, resolution: f64, point: [f64; 2]) -> f64 {
        match self.point_resolution {
            Some(f) => f(resolution, point),
            None => resolution,
        }
    }

    /// Whether two descriptors describe the same system under different codes.
    pub fn is_equivalent(&self, other: &Projection) -> bool {
        self.units == other.units
            && self.extent == other.extent
            && self.global == other.global
            && self.world_extent == other.world_extent
            && self.point_resolution.is_some() == other.point_resolution.is_some()
    }
}

/// Single-point transforms between geographic degrees and projected coordinates.
pub trait PointTransform: Send + Sync {
    /// Forward: (lon_deg, lat_deg) -> (easting, northing)
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64);

    /// Inverse: (easting, northing) -> (lon_deg, lat_deg)
    fn inverse(&self, x: f64, y: f64) -> (f64, f64);

    /// Batch forward transform (default: loop).
    fn forward_batch(&self, coords: &mut [(f64, f64)]) {
        for c in coords.iter_mut() {
            *c = self.forward(c.0, c.1);
        }
    }

    /// Batch inverse transform.
    fn inverse_batch(&self, coords: &mut [(f64, f64)]) {
        for c in coords.iter_mut() {
            *c = self.inverse(c.0, c.1);
        }
    }
}
