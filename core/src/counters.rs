use once_cell::sync::Lazy;
use prometheus::{Encoder, IntCounter, IntCounterVec, Opts, Registry, TextEncoder};

/// Parse counters in their own registry. Callers own an instance and pass it
/// to `parse_observed`; the parser itself never touches it.
#[derive(Clone)]
pub struct Metrics {
    registry: Registry,
    parse_total: IntCounterVec,
    track_points_total: IntCounter,
}

impl Metrics {
    pub fn new() -> prometheus::Result<Self> {
        let registry = Registry::new();
        let parse_total = IntCounterVec::new(
            Opts::new("track_parse_total", "Track files parsed, by outcome"),
            &["outcome"],
        )?;
        let track_points_total =
            IntCounter::new("track_points_total", "Track-points emitted by successful parses")?;

        registry.register(Box::new(parse_total.clone()))?;
        registry.register(Box::new(track_points_total.clone()))?;

        Ok(Self { registry, parse_total, track_points_total })
    }

    /// outcome: ok | empty | malformed | unsupported | too_large
    pub fn record_parse(&self, outcome: &str, points: usize) {
        self.parse_total.with_label_values(&[outcome]).inc();
        self.track_points_total.inc_by(points as u64);
    }

    pub fn parse_count(&self, outcome: &str) -> u64 {
        self.parse_total.with_label_values(&[outcome]).get()
    }

    pub fn track_points(&self) -> u64 {
        self.track_points_total.get()
    }

    /// Prometheus text exposition of this registry.
    pub fn render(&self) -> String {
        let mut buf = Vec::new();
        let encoder = TextEncoder::new();
        if let Err(e) = encoder.encode(&self.registry.gather(), &mut buf) {
            log::warn!("metrics encode failed: {e}");
        }
        String::from_utf8(buf).unwrap_or_default()
    }
}

static GLOBAL: Lazy<Metrics> =
    Lazy::new(|| Metrics::new().expect("static metric definitions are valid"));

/// Process-wide instance, used by the Python bindings.
pub fn global() -> &'static Metrics {
    &GLOBAL
}
