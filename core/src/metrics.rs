use ordered_float::OrderedFloat;

use crate::models::Sample;
use crate::types::ActivityStats;

/// Mean speed over samples that have a predecessor (the first is always 0).
pub fn avg_speed(samples: &[Sample]) -> Option<f64> {
    if samples.len() < 2 { return None; }
    let moving = &samples[1..];
    Some(moving.iter().map(|s| s.speed).sum::<f64>() / moving.len() as f64)
}

pub fn max_speed(samples: &[Sample]) -> Option<f64> {
    samples
        .iter()
        .map(|s| OrderedFloat(s.speed))
        .max()
        .map(|v| v.into_inner())
}

fn avg_of(values: impl Iterator<Item = u32>) -> Option<f64> {
    let mut sum = 0.0f64;
    let mut cnt = 0usize;
    for v in values {
        sum += v as f64;
        cnt += 1;
    }
    if cnt == 0 { None } else { Some(sum / cnt as f64) }
}

pub fn avg_hr(samples: &[Sample]) -> Option<f64> {
    avg_of(samples.iter().filter_map(|s| s.heart_rate))
}

pub fn max_hr(samples: &[Sample]) -> Option<u32> {
    samples.iter().filter_map(|s| s.heart_rate).max()
}

pub fn avg_cadence(samples: &[Sample]) -> Option<f64> {
    avg_of(samples.iter().filter_map(|s| s.cadence))
}

pub fn avg_power(samples: &[Sample]) -> Option<f64> {
    avg_of(samples.iter().filter_map(|s| s.power))
}

impl ActivityStats {
    pub fn from_samples(samples: &[Sample]) -> Self {
        Self {
            average_speed: avg_speed(samples),
            max_speed: max_speed(samples),
            average_heart_rate: avg_hr(samples),
            max_heart_rate: max_hr(samples),
            average_cadence: avg_cadence(samples),
            average_power: avg_power(samples),
        }
    }
}
