//! Geographic EPSG:4326 (longitude/latitude in degrees) and its aliases.

use crate::extent::Extent;
use crate::proj::{Projection, Units};

/// Full geographic extent.
pub const EXTENT: Extent = Extent::new(-180.0, -90.0, 180.0, 90.0);

/// Codes naming geographic longitude/latitude.
pub const CODES: [&str; 8] = [
    "EPSG:4326",
    "CRS:84",
    "urn:ogc:def:crs:EPSG::4326",
    "urn:ogc:def:crs:EPSG:6.6:4326",
    "urn:ogc:def:crs:OGC:1.3:CRS84",
    "urn:ogc:def:crs:OGC:2:84",
    "http://www.opengis.net/gml/srs/epsg.xml#4326",
    "urn:x-ogc:def:crs:EPSG:4326",
];

pub static PROJECTIONS: [Projection; 8] = [
    descriptor(CODES[0]),
    descriptor(CODES[1]),
    descriptor(CODES[2]),
    descriptor(CODES[3]),
    descriptor(CODES[4]),
    descriptor(CODES[5]),
    descriptor(CODES[6]),
    descriptor(CODES[7]),
];

const fn descriptor(code: &'static str) -> Projection {
    Projection {
        code,
        units: Units::Degrees,
        extent: EXTENT,
        global: true,
        world_extent: EXTENT,
        point_resolution: None,
    }
}
