//! Peak-flow zone classification.

use crate::models::Zone;

/// Lower bound (percent of personal best) of the green zone.
pub const GREEN_THRESHOLD: f64 = 80.0;
/// Lower bound (percent of personal best) of the yellow zone.
pub const YELLOW_THRESHOLD: f64 = 50.0;

/// Window used for the tracker's recent-average card.
pub const RECENT_READINGS_WINDOW: usize = 7;

/// Classify a reading against the personal best.
///
/// A non-positive personal best yields `Red`, the most cautious zone.
pub fn zone_classification(reading: f64, personal_best: f64) -> Zone {
    if personal_best.is_nan() || personal_best <= 0.0 {
        return Zone::Red;
    }

    let percent = 100.0 * reading / personal_best;
    if percent >= GREEN_THRESHOLD {
        Zone::Green
    } else if percent >= YELLOW_THRESHOLD {
        Zone::Yellow
    } else {
        Zone::Red
    }
}

/// Rounded mean of the first `window` values; `0` when there are none.
///
/// Series are stored newest-first, so this is the average of the most recent
/// readings.
pub fn rolling_average<I>(values: I, window: usize) -> u32
where
    I: IntoIterator<Item = u32>,
{
    let (sum, count) = values
        .into_iter()
        .take(window)
        .fold((0u64, 0u64), |(sum, count), v| (sum + u64::from(v), count + 1));

    if count == 0 {
        return 0;
    }
    // Round half up, matching Math.round for non-negative input
    let rounded = (sum * 2 + count) / (count * 2);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}
