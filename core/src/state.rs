use log::debug;

use crate::models::Sample;
use crate::types::ChartType;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Activity-detail view state, owned by the caller.
///
/// Transitions take the state by value and return the next one, so the caller
/// decides where the state lives (task, actor, UI thread).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActivityDataState {
    pub status: FetchStatus,
    pub samples: Vec<Sample>,
    pub chart: ChartType,
    pub selected_value: Option<f64>,
}

impl ActivityDataState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Previously loaded samples stay visible until the new fetch completes.
    pub fn start_fetch(self) -> Self {
        Self { status: FetchStatus::Loading, ..self }
    }

    /// Ignored unless a fetch is in flight.
    pub fn fetch_succeeded(self, samples: Vec<Sample>) -> Self {
        if self.status != FetchStatus::Loading {
            debug!("state: dropping stale fetch result ({:?})", self.status);
            return self;
        }
        Self { status: FetchStatus::Loaded, samples, ..self }
    }

    pub fn fetch_failed(self, error: impl Into<String>) -> Self {
        if self.status != FetchStatus::Loading {
            debug!("state: dropping stale fetch error ({:?})", self.status);
            return self;
        }
        Self { status: FetchStatus::Failed(error.into()), ..self }
    }

    pub fn select_chart(self, chart: ChartType) -> Self {
        Self { chart, selected_value: None, ..self }
    }

    pub fn select_value(self, value: Option<f64>) -> Self {
        Self { selected_value: value, ..self }
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed(e) => Some(e),
            _ => None,
        }
    }
}
