use pyo3::prelude::*;

pub mod error;
pub mod extent;
pub mod proj;
mod py;

/// A Python module implemented in Rust.
#[pymodule]
fn _webmerc(m: &Bound<'_, PyModule>) -> PyResult<()> {
    py::register(m)?;
    Ok(())
}
