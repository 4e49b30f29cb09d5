//! Spherical Web Mercator (EPSG:3857) and its transforms to and from
//! geographic EPSG:4326.
//!
//!   forward: x = H·λ/180, y = R·ln(tan(π·(φ + 90)/360)), y clamped to [-H, H]
//!   inverse: λ = 180·x/H, φ = 360·atan(exp(y/R))/π - 90
//!
//! where λ, φ are in degrees, R is the sphere radius and H = π·R.
//! Only the forward direction clamps.

use std::f64::consts::PI;

use num_traits::Float;

use crate::extent::Extent;
use crate::proj::buffer::{allocate_output, transform_into};
use crate::proj::{PointTransform, Projection, Units};

/// Radius of the WGS84 sphere (metres).
pub const RADIUS: f64 = 6_378_137.0;

/// Half the width of the projected square, π·R.
pub const HALF_SIZE: f64 = PI * RADIUS;

/// Projected extent: the square `[-H, -H, H, H]`.
pub const EXTENT: Extent = Extent::new(-HALF_SIZE, -HALF_SIZE, HALF_SIZE, HALF_SIZE);

/// Geographic extent of the usable world.
pub const WORLD_EXTENT: Extent = Extent::new(-180.0, -85.0, 180.0, 85.0);

/// Codes naming this projection.
pub const CODES: [&str; 7] = [
    "EPSG:3857",
    "EPSG:102100",
    "EPSG:102113",
    "EPSG:900913",
    "urn:ogc:def:crs:EPSG:6.18:3:3857",
    "urn:ogc:def:crs:EPSG::3857",
    "http://www.opengis.net/gml/srs/epsg.xml#3857",
];

/// One descriptor per entry of [`CODES`], identical apart from the code.
pub static PROJECTIONS: [Projection; 7] = [
    descriptor(CODES[0]),
    descriptor(CODES[1]),
    descriptor(CODES[2]),
    descriptor(CODES[3]),
    descriptor(CODES[4]),
    descriptor(CODES[5]),
    descriptor(CODES[6]),
];

const fn descriptor(code: &'static str) -> Projection {
    Projection {
        code,
        units: Units::Meters,
        extent: EXTENT,
        global: true,
        world_extent: WORLD_EXTENT,
        point_resolution: Some(point_resolution),
    }
}

/// Correct a resolution for Mercator scale distortion at `point`'s northing.
pub fn point_resolution(resolution: f64, point: [f64; 2]) -> f64 {
    resolution / (point[1] / RADIUS).cosh()
}

#[inline]
fn lon_to_x(lon: f64) -> f64 {
    HALF_SIZE * lon / 180.0
}

#[inline]
fn lat_to_y(lat: f64) -> f64 {
    // Diverges towards the poles; NaN (|lat| > 90) passes the clamp untouched.
    let y = RADIUS * (PI * (lat + 90.0) / 360.0).tan().ln();
    y.clamp(-HALF_SIZE, HALF_SIZE)
}

#[inline]
fn x_to_lon(x: f64) -> f64 {
    180.0 * x / HALF_SIZE
}

#[inline]
fn y_to_lat(y: f64) -> f64 {
    360.0 * (y / RADIUS).exp().atan() / PI - 90.0
}

/// Project one lon/lat pair (degrees) to metres.
#[inline]
pub fn forward_point(lon: f64, lat: f64) -> (f64, f64) {
    (lon_to_x(lon), lat_to_y(lat))
}

/// Unproject one x/y pair (metres) to lon/lat degrees.
#[inline]
pub fn inverse_point(x: f64, y: f64) -> (f64, f64) {
    (x_to_lon(x), y_to_lat(y))
}

/// Transform an interleaved EPSG:4326 buffer to EPSG:3857.
pub fn from_epsg4326<T: Float>(input: &[T], dimension: usize) -> Vec<T> {
    let mut output = allocate_output(input, dimension);
    from_epsg4326_into(input, &mut output, dimension);
    output
}

/// Like [`from_epsg4326`], writing into a caller-owned buffer.
///
/// # Panics
/// If `output` is shorter than `input`.
pub fn from_epsg4326_into<T: Float>(input: &[T], output: &mut [T], dimension: usize) {
    transform_into(input, output, dimension, lon_to_x, lat_to_y);
}

/// Transform an interleaved EPSG:3857 buffer to EPSG:4326.
pub fn to_epsg4326<T: Float>(input: &[T], dimension: usize) -> Vec<T> {
    let mut output = allocate_output(input, dimension);
    to_epsg4326_into(input, &mut output, dimension);
    output
}

/// Like [`to_epsg4326`], writing into a caller-owned buffer.
///
/// # Panics
/// If `output` is shorter than `input`.
pub fn to_epsg4326_into<T: Float>(input: &[T], output: &mut [T], dimension: usize) {
    transform_into(input, output, dimension, x_to_lon, y_to_lat);
}

/// Point-wise access to the same math as the buffer functions.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebMercator;

impl PointTransform for WebMercator {
    fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        forward_point(lon, lat)
    }

    fn inverse(&self, x: f64, y: f64) -> (f64, f64) {
        inverse_point(x, y)
    }
}
