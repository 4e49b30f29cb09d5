//! PyO3 bindings for interleaved coordinate buffer transforms.

use ndarray::Array1;
use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::proj::epsg3857;
use crate::proj::registry::Registry;

/// Transform interleaved lon/lat values (degrees) to Web Mercator metres.
///
/// Args:
///     coords: 1D float64 array of interleaved coordinates.
///     dimension: Values per coordinate tuple; only the first two are transformed.
///
/// Returns:
///     New 1D array of the same length.
#[pyfunction]
#[pyo3(signature = (coords, dimension=2))]
pub fn from_epsg4326<'py>(
    py: Python<'py>,
    coords: PyReadonlyArray1<'py, f64>,
    dimension: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let input = coords.as_array().to_vec();
    let output = py.allow_threads(move || epsg3857::from_epsg4326(&input, dimension));
    Ok(PyArray1::from_owned_array(py, Array1::from(output)))
}

/// Transform interleaved Web Mercator metres to lon/lat values (degrees).
///
/// Args:
///     coords: 1D float64 array of interleaved coordinates.
///     dimension: Values per coordinate tuple; only the first two are transformed.
///
/// Returns:
///     New 1D array of the same length.
#[pyfunction]
#[pyo3(signature = (coords, dimension=2))]
pub fn to_epsg4326<'py>(
    py: Python<'py>,
    coords: PyReadonlyArray1<'py, f64>,
    dimension: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let input = coords.as_array().to_vec();
    let output = py.allow_threads(move || epsg3857::to_epsg4326(&input, dimension));
    Ok(PyArray1::from_owned_array(py, Array1::from(output)))
}

/// Transform interleaved coordinates between two registered CRS codes.
///
/// Args:
///     coords: 1D float64 array of interleaved coordinates.
///     src_crs: Source CRS code (e.g. "EPSG:4326" or "CRS:84").
///     dst_crs: Destination CRS code (e.g. "EPSG:3857" or "EPSG:900913").
///     dimension: Values per coordinate tuple.
///
/// Raises:
///     ValueError: if either code is unknown or no transform connects them.
#[pyfunction]
#[pyo3(signature = (coords, src_crs, dst_crs, dimension=2))]
pub fn transform<'py>(
    py: Python<'py>,
    coords: PyReadonlyArray1<'py, f64>,
    src_crs: &str,
    dst_crs: &str,
    dimension: usize,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let input = coords.as_array().to_vec();
    let src_crs = src_crs.to_string();
    let dst_crs = dst_crs.to_string();

    let output = py.allow_threads(move || {
        Registry::global().transform(&input, &src_crs, &dst_crs, dimension)
    });
    let output = output.map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(PyArray1::from_owned_array(py, Array1::from(output)))
}

/// Resolution at `point`, corrected for the distortion of projection `crs`.
#[pyfunction]
#[pyo3(signature = (resolution, point, crs="EPSG:3857"))]
pub fn point_resolution(resolution: f64, point: [f64; 2], crs: &str) -> PyResult<f64> {
    let proj = Registry::global()
        .projection(crs)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(proj.point_resolution(resolution, point))
}

/// Units of projection `crs` ("m" or "degrees").
#[pyfunction]
pub fn units(crs: &str) -> PyResult<&'static str> {
    let proj = Registry::global()
        .projection(crs)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(proj.units.as_str())
}

/// Extent of projection `crs` as `(min_x, min_y, max_x, max_y)`.
#[pyfunction]
pub fn extent(crs: &str) -> PyResult<[f64; 4]> {
    let proj = Registry::global()
        .projection(crs)
        .map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(proj.extent.to_array())
}

/// All registered CRS codes.
#[pyfunction]
pub fn codes() -> Vec<&'static str> {
    Registry::global().codes()
}
