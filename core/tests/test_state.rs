use ridetrack_core::{ActivityDataState, ChartType, FetchStatus, Sample};

fn samples(n: usize) -> Vec<Sample> {
    (0..n).map(|i| Sample { elevation: i as f64, ..Default::default() }).collect()
}

#[test]
fn fetch_success_flow() {
    let s = ActivityDataState::new();
    assert_eq!(s.status, FetchStatus::Idle);

    let s = s.start_fetch();
    assert!(s.is_loading());

    let s = s.fetch_succeeded(samples(3));
    assert_eq!(s.status, FetchStatus::Loaded);
    assert_eq!(s.samples.len(), 3);
    assert_eq!(s.error(), None);
}

#[test]
fn fetch_failure_keeps_previous_samples() {
    let s = ActivityDataState::new().start_fetch().fetch_succeeded(samples(2));
    let s = s.start_fetch().fetch_failed("network down");
    assert_eq!(s.error(), Some("network down"));
    assert_eq!(s.samples.len(), 2);
}

#[test]
fn stale_results_are_ignored() {
    let s = ActivityDataState::new().fetch_succeeded(samples(5));
    assert_eq!(s.status, FetchStatus::Idle);
    assert!(s.samples.is_empty());

    let s = s.start_fetch().fetch_failed("boom").fetch_succeeded(samples(1));
    assert_eq!(s.status, FetchStatus::Failed("boom".into()));
    assert!(s.samples.is_empty());
}

#[test]
fn switching_chart_clears_selection() {
    let s = ActivityDataState::new().select_value(Some(31.5));
    assert_eq!(s.selected_value, Some(31.5));
    assert_eq!(s.chart, ChartType::Speed);

    let s = s.select_chart(ChartType::Power);
    assert_eq!(s.chart, ChartType::Power);
    assert_eq!(s.selected_value, None);
}
