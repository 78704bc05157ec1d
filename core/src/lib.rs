//! GPX track ingestion and ride/run metrics.
//!
//! `parse` turns raw track-file text into ordered samples plus distance,
//! duration and elevation gain. The remaining modules prepare those results
//! for storage, charts and maps.

pub mod cli;
pub mod counters;
pub mod error;
pub mod geo;
pub mod gpx;
pub mod metrics;
pub mod models;
pub mod parser;
pub mod records;
pub mod series;
pub mod state;
pub mod storage;
pub mod types;

#[cfg(feature = "python")]
mod py;

pub use counters::Metrics;
pub use error::{ConfigError, RecordError, TrackError, TrackResult};
pub use models::{ParsedTrack, Sample};
pub use parser::{parse, parse_gpx, parse_observed, parse_with, TrackAccumulator};
pub use records::{sample_records, validate_activity_name, ActivityType, NewActivity, SampleRecord};
pub use series::{chart_series, map_region, route, MapRegion, RoutePoint};
pub use state::{ActivityDataState, FetchStatus};
pub use storage::{load_cfg, save_cfg};
pub use types::{ActivityStats, Cfg, ChartType, TrackFormat};

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn ridetrack_core(_py: Python, m: &PyModule) -> PyResult<()> {
    py::register(m)
}
