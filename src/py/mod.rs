use pyo3::prelude::*;

mod transform;

/// Register all Python-visible functions and types.
pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(transform::from_epsg4326, m)?)?;
    m.add_function(wrap_pyfunction!(transform::to_epsg4326, m)?)?;
    m.add_function(wrap_pyfunction!(transform::transform, m)?)?;
    m.add_function(wrap_pyfunction!(transform::point_resolution, m)?)?;
    m.add_function(wrap_pyfunction!(transform::units, m)?)?;
    m.add_function(wrap_pyfunction!(transform::extent, m)?)?;
    m.add_function(wrap_pyfunction!(transform::codes, m)?)?;
    Ok(())
}
