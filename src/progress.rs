//! Progress math for the completion ring: ratio, stroke offset, and the
//! red-to-green color ramp.

use crate::models::{AppData, ProgressResponse};

/// Fixed circumference of the SVG ring (2 * pi * 45, rounded).
pub const RING_CIRCUMFERENCE: f64 = 283.0;

/// Completion ratio at which the prize unlocks.
pub const PRIZE_THRESHOLD: f64 = 0.8;

pub fn ratio(current: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    current as f64 / total as f64
}

pub fn ring_offset(ratio: f64) -> f64 {
    RING_CIRCUMFERENCE * (1.0 - ratio)
}

/// Linear channel interpolation from red (ratio 0) to green (ratio 1).
pub fn ring_color(ratio: f64) -> String {
    let red = (255.0 * (1.0 - ratio)).round() as u8;
    let green = (255.0 * ratio).round() as u8;
    format!("rgb({red}, {green}, 0)")
}

pub fn snapshot(data: &AppData) -> ProgressResponse {
    let current = data.completed();
    let total = data.tracked();
    let ratio = ratio(current, total);
    ProgressResponse {
        current,
        total,
        ratio,
        label: format!("{current}/{total}"),
        ring_offset: ring_offset(ratio),
        color: ring_color(ratio),
        prize_claimed: data.prize_claimed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ratio_stays_in_unit_interval() {
        assert_eq!(ratio(0, 13), 0.0);
        assert_eq!(ratio(13, 13), 1.0);
        assert_eq!(ratio(0, 0), 0.0);
        let mid = ratio(7, 13);
        assert!(mid > 0.0 && mid < 1.0);
    }

    #[test]
    fn color_endpoints_are_pure_red_and_green() {
        assert_eq!(ring_color(0.0), "rgb(255, 0, 0)");
        assert_eq!(ring_color(1.0), "rgb(0, 255, 0)");
    }

    #[test]
    fn ring_offset_empties_and_fills() {
        assert_eq!(ring_offset(0.0), RING_CIRCUMFERENCE);
        assert_eq!(ring_offset(1.0), 0.0);
    }

    #[test]
    fn label_is_current_slash_total() {
        let mut data = AppData::default();
        for i in 0..13 {
            data.set(&format!("tip-{i}"), u8::from(i < 10));
        }
        let snapshot = snapshot(&data);
        assert_eq!(snapshot.label, "10/13");
        assert_eq!(snapshot.current, 10);
        assert_eq!(snapshot.total, 13);
    }

    #[test]
    fn threshold_crossing_at_eleven_of_thirteen() {
        // 10/13 ~ 0.769 stays below the cut, 11/13 ~ 0.846 crosses it.
        assert!(ratio(10, 13) < PRIZE_THRESHOLD);
        assert!(ratio(11, 13) >= PRIZE_THRESHOLD);
    }

    #[test]
    fn threshold_is_inclusive_at_exactly_eighty_percent() {
        assert!(ratio(12, 15) >= PRIZE_THRESHOLD);
        assert!(ratio(4, 5) >= PRIZE_THRESHOLD);
    }
}
