// Python bindings. Results cross the boundary as JSON strings so the Python
// side can load them with json.loads() without extra pyclass wrappers.

use pyo3::exceptions::{PyNotImplementedError, PyValueError};
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::counters;
use crate::error::TrackError;
use crate::parser::parse_observed;
use crate::types::ActivityStats;

fn to_py_err(e: TrackError) -> PyErr {
    match e {
        TrackError::UnsupportedFormat(_) => PyNotImplementedError::new_err(e.to_string()),
        _ => PyValueError::new_err(e.to_string()),
    }
}

fn to_json<T: serde::Serialize>(v: &T) -> PyResult<String> {
    serde_json::to_string(v).map_err(|e| PyValueError::new_err(format!("serialize: {e}")))
}

/// parse_track_json(raw, format_hint) -> str
#[pyfunction]
fn parse_track_json(raw: &str, format_hint: &str) -> PyResult<String> {
    let track = parse_observed(raw, format_hint, counters::global()).map_err(to_py_err)?;
    to_json(&track)
}

/// activity_stats_json(raw, format_hint) -> str
#[pyfunction]
fn activity_stats_json(raw: &str, format_hint: &str) -> PyResult<String> {
    let track = parse_observed(raw, format_hint, counters::global()).map_err(to_py_err)?;
    to_json(&ActivityStats::from_samples(&track.samples))
}

/// Prometheus text exposition of the process-wide parse counters.
#[pyfunction]
fn metrics_text() -> String {
    counters::global().render()
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(parse_track_json, m)?)?;
    m.add_function(wrap_pyfunction!(activity_stats_json, m)?)?;
    m.add_function(wrap_pyfunction!(metrics_text, m)?)?;
    Ok(())
}
