//! PyO3 bindings for hdc-vsa.
//!
//! Exposes generation to Python with numpy `int16` results:
//! - `generate_vector` / `gen_hv`: one binary hypervector
//! - `generate_item_memory` / `gen_im`: an N x D item memory
//!
//! Build with: `maturin develop --features python`

use numpy::{IntoPyArray, PyArray1, PyArray2};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::error::HdcError;
use crate::hypervector;
use crate::item_memory;

impl From<HdcError> for PyErr {
    fn from(err: HdcError) -> Self {
        PyValueError::new_err(err.to_string())
    }
}

// ---------------------------------------------------------------------------
// Standalone Python functions
// ---------------------------------------------------------------------------

/// Generate one binary hypervector as a numpy int16 array.
///
/// Raises `ValueError` when `dimensionality` is negative or too large.
#[pyfunction]
#[pyo3(signature = (seed, dimensionality))]
fn generate_vector<'py>(
    py: Python<'py>,
    seed: u64,
    dimensionality: i64,
) -> PyResult<Bound<'py, PyArray1<i16>>> {
    let hv = hypervector::generate_vector(seed, dimensionality)?;
    Ok(hv.into_pyarray(py))
}

/// Generate a `count` x `dimensionality` item memory as a numpy int16 array.
///
/// Rows are drawn progressively from one stream seeded with `seed`.
/// Raises `ValueError` when either size is negative or the table too large.
#[pyfunction]
#[pyo3(signature = (seed, dimensionality, count))]
fn generate_item_memory<'py>(
    py: Python<'py>,
    seed: u64,
    dimensionality: i64,
    count: i64,
) -> PyResult<Bound<'py, PyArray2<i16>>> {
    let im = item_memory::generate_item_memory(seed, dimensionality, count)?;
    Ok(im.into_pyarray(py))
}

/// Short alias of `generate_vector`.
#[pyfunction]
#[pyo3(signature = (seed, dimensionality))]
fn gen_hv<'py>(
    py: Python<'py>,
    seed: u64,
    dimensionality: i64,
) -> PyResult<Bound<'py, PyArray1<i16>>> {
    generate_vector(py, seed, dimensionality)
}

/// Short alias of `generate_item_memory`.
#[pyfunction]
#[pyo3(signature = (seed, dimensionality, count))]
fn gen_im<'py>(
    py: Python<'py>,
    seed: u64,
    dimensionality: i64,
    count: i64,
) -> PyResult<Bound<'py, PyArray2<i16>>> {
    generate_item_memory(py, seed, dimensionality, count)
}

// ---------------------------------------------------------------------------
// Module registration
// ---------------------------------------------------------------------------

/// The hdc_vsa Python module.
#[pymodule]
pub fn hdc_vsa(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(generate_vector, m)?)?;
    m.add_function(wrap_pyfunction!(generate_item_memory, m)?)?;
    m.add_function(wrap_pyfunction!(gen_hv, m)?)?;
    m.add_function(wrap_pyfunction!(gen_im, m)?)?;
    Ok(())
}
