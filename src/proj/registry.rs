//! Registry — maps CRS codes to projection descriptors and code pairs to
//! buffer transforms.
//!
//! Every alias of a system is registered, so a transform found under one code
//! is the very same function found under any of its aliases.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::ProjError;
use crate::proj::buffer::allocate_output;
use crate::proj::{epsg3857, epsg4326, Projection};

/// Transform from an interleaved input buffer into an output buffer with the
/// given tuple stride.
pub type TransformFn = fn(&[f64], &mut [f64], usize);

/// Transforms between two systems, one per direction.
#[derive(Clone, Copy)]
pub struct TransformPair {
    pub forward: TransformFn,
    pub inverse: TransformFn,
}

/// Copies every component; used between aliases of one system.
fn clone_transform(input: &[f64], output: &mut [f64], _dimension: usize) {
    assert!(
        output.len() >= input.len(),
        "output buffer too short: {} values for an input of {}",
        output.len(),
        input.len()
    );
    output[..input.len()].copy_from_slice(input);
}

#[derive(Default)]
pub struct Registry {
    projections: HashMap<&'static str, Projection>,
    transforms: HashMap<&'static str, HashMap<&'static str, TransformFn>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with EPSG:4326 and EPSG:3857 under all their aliases.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.add_equivalent(&epsg4326::PROJECTIONS);
        registry.add_equivalent(&epsg3857::PROJECTIONS);
        registry.add_transforms(
            &epsg4326::PROJECTIONS,
            &epsg3857::PROJECTIONS,
            TransformPair {
                forward: epsg3857::from_epsg4326_into::<f64>,
                inverse: epsg3857::to_epsg4326_into::<f64>,
            },
        );
        registry
    }

    /// The process-wide default registry, built on first use.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(|| {
            let registry = Registry::with_defaults();
            log::debug!(
                "built default CRS registry: {} codes, {} transforms",
                registry.projections.len(),
                registry.transform_count()
            );
            registry
        })
    }

    /// Register projections that differ only by code, with copy transforms
    /// between every pair of them.
    pub fn add_equivalent(&mut self, projections: &[Projection]) {
        for src in projections {
            self.projections.insert(src.code, *src);
            for dst in projections {
                self.add_transform(src.code, dst.code, clone_transform);
            }
        }
    }

    /// Register `pair.forward` from every source to every destination code,
    /// and `pair.inverse` back.
    pub fn add_transforms(
        &mut self,
        sources: &[Projection],
        destinations: &[Projection],
        pair: TransformPair,
    ) {
        for src in sources {
            self.projections.insert(src.code, *src);
            for dst in destinations {
                self.projections.insert(dst.code, *dst);
                self.add_transform(src.code, dst.code, pair.forward);
                self.add_transform(dst.code, src.code, pair.inverse);
            }
        }
    }

    fn add_transform(&mut self, src: &'static str, dst: &'static str, f: TransformFn) {
        self.transforms.entry(src).or_default().insert(dst, f);
    }

    fn transform_count(&self) -> usize {
        self.transforms.values().map(HashMap::len).sum()
    }

    /// Look up the descriptor registered under `code`.
    pub fn projection(&self, code: &str) -> Result<&Projection, ProjError> {
        self.projections.get(code).ok_or_else(|| {
            log::trace!("no projection registered for {code}");
            ProjError::UnknownCrs(code.to_string())
        })
    }

    /// All registered codes, sorted.
    pub fn codes(&self) -> Vec<&'static str> {
        let mut codes: Vec<_> = self.projections.keys().copied().collect();
        codes.sort_unstable();
        codes
    }

    /// Whether both codes name the same system.
    pub fn equivalent(&self, a: &str, b: &str) -> Result<bool, ProjError> {
        if a == b {
            self.projection(a)?;
            return Ok(true);
        }
        let pa = self.projection(a)?;
        let pb = self.projection(b)?;
        Ok(pa.is_equivalent(pb))
    }

    /// Look up the transform from `src` to `dst`.
    pub fn transform_fn(&self, src: &str, dst: &str) -> Result<TransformFn, ProjError> {
        self.projection(src)?;
        self.projection(dst)?;
        self.transforms
            .get(src)
            .and_then(|m| m.get(dst))
            .copied()
            .ok_or_else(|| {
                log::trace!("no transform registered from {src} to {dst}");
                ProjError::NoTransform {
                    src: src.to_string(),
                    dst: dst.to_string(),
                }
            })
    }

    /// Look up the transforms `src -> dst` and `dst -> src`.
    pub fn transform_pair(&self, src: &str, dst: &str) -> Result<TransformPair, ProjError> {
        Ok(TransformPair {
            forward: self.transform_fn(src, dst)?,
            inverse: self.transform_fn(dst, src)?,
        })
    }

    /// Transform an interleaved buffer from `src` to `dst` into a new buffer.
    pub fn transform(
        &self,
        input: &[f64],
        src: &str,
        dst: &str,
        dimension: usize,
    ) -> Result<Vec<f64>, ProjError> {
        let f = self.transform_fn(src, dst)?;
        let mut output = allocate_output(input, dimension);
        f(input, &mut output, dimension);
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_all_codes_registered() {
        let registry = Registry::global();
        let codes = registry.codes();
        assert_eq!(codes.len(), epsg3857::CODES.len() + epsg4326::CODES.len());
        for code in epsg3857::CODES.iter().chain(epsg4326::CODES.iter()) {
            assert!(codes.contains(code), "missing {code}");
        }
    }

    #[test]
    fn test_projection_lookup() {
        let registry = Registry::global();
        let proj = registry.projection("EPSG:900913").unwrap();
        assert_eq!(proj.code, "EPSG:900913");
        assert_eq!(proj.extent, epsg3857::EXTENT);
        assert_relative_eq!(proj.point_resolution(1.0, [0.0, 0.0]), 1.0);
    }

    #[test]
    fn test_unknown_code() {
        let registry = Registry::global();
        assert_eq!(
            registry.projection("EPSG:99999").unwrap_err(),
            ProjError::UnknownCrs("EPSG:99999".into())
        );
        assert!(matches!(
            registry.transform_fn("EPSG:4326", "EPSG:32633"),
            Err(ProjError::UnknownCrs(code)) if code == "EPSG:32633"
        ));
    }

    #[test]
    fn test_missing_transform() {
        let mut registry = Registry::new();
        registry.add_equivalent(&epsg4326::PROJECTIONS);
        registry.add_equivalent(&epsg3857::PROJECTIONS);
        assert!(matches!(
            registry.transform_fn("EPSG:4326", "EPSG:3857"),
            Err(ProjError::NoTransform { .. })
        ));
        assert!(registry.transform_fn("EPSG:3857", "EPSG:102100").is_ok());
    }

    #[test]
    fn test_alias_equivalence_bitwise() {
        let registry = Registry::global();
        let input = [13.4, 52.5, -70.1, -33.4, 179.9, 84.0];
        let reference = registry
            .transform(&input, "EPSG:4326", "EPSG:3857", 2)
            .unwrap();
        for geo in epsg4326::CODES {
            for merc in epsg3857::CODES {
                let out = registry.transform(&input, geo, merc, 2).unwrap();
                let same = out
                    .iter()
                    .zip(&reference)
                    .all(|(a, b)| a.to_bits() == b.to_bits());
                assert!(same, "{geo} -> {merc} differs");

                let back = registry.transform(&out, merc, geo, 2).unwrap();
                assert_eq!(back, epsg3857::to_epsg4326(&reference, 2));
            }
        }
    }

    #[test]
    fn test_transform_pair() {
        let registry = Registry::global();
        let pair = registry
            .transform_pair("urn:ogc:def:crs:OGC:1.3:CRS84", "EPSG:102113")
            .unwrap();
        let input = [2.35, 48.85];
        let mut merc = [0.0; 2];
        (pair.forward)(&input, &mut merc, 2);
        let mut geo = [0.0; 2];
        (pair.inverse)(&merc, &mut geo, 2);
        assert_relative_eq!(geo[0], 2.35, epsilon = 1e-9);
        assert_relative_eq!(geo[1], 48.85, epsilon = 1e-9);
    }

    #[test]
    fn test_alias_transform_copies() {
        let registry = Registry::global();
        let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let out = registry
            .transform(&input, "EPSG:3857", "EPSG:900913", 3)
            .unwrap();
        assert_eq!(out, input.to_vec());
    }

    #[test]
    fn test_transform_keeps_extra_dimensions() {
        let registry = Registry::global();
        let out = registry
            .transform(&[10.0, 20.0, 500.0], "CRS:84", "EPSG:3857", 3)
            .unwrap();
        assert_eq!(out[2], 500.0);
        assert_relative_eq!(out[0], epsg3857::HALF_SIZE * 10.0 / 180.0, epsilon = 1e-6);
    }

    #[test]
    fn test_equivalent() {
        let registry = Registry::global();
        assert!(registry.equivalent("EPSG:3857", "EPSG:102100").unwrap());
        assert!(registry.equivalent("EPSG:4326", "CRS:84").unwrap());
        assert!(!registry.equivalent("EPSG:4326", "EPSG:3857").unwrap());
        assert!(registry.equivalent("EPSG:1", "EPSG:1").is_err());
    }
}
