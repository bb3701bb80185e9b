//! Sorted color-stop table and value-to-color resolution.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::GaugeError;
use crate::normalize::normalize;

/// One threshold -> color entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ColorStop {
    pub threshold: f64,
    pub color: Color,
}

impl ColorStop {
    pub fn new(threshold: f64, color: Color) -> Self {
        Self { threshold, color }
    }
}

/// Color stops sorted ascending by threshold.
///
/// Construction sorts regardless of insertion order and resolves duplicate
/// thresholds last-wins (the map-key semantics the stop config implies), so
/// resolution always scans unique thresholds in ascending order. At least
/// one stop is required; an empty table fails with
/// [`GaugeError::EmptyStopTable`].
#[derive(Debug, Clone, PartialEq)]
pub struct ColorStopTable {
    stops: Vec<ColorStop>,
}

impl ColorStopTable {
    pub fn new(mut stops: Vec<ColorStop>) -> Result<Self, GaugeError> {
        if stops.is_empty() {
            return Err(GaugeError::EmptyStopTable);
        }

        // Stable sort keeps insertion order among equal thresholds, so the
        // later entry wins the dedup below.
        stops.sort_by(|a, b| {
            a.threshold
                .partial_cmp(&b.threshold)
                .unwrap_or(Ordering::Equal)
        });

        let mut deduped: Vec<ColorStop> = Vec::with_capacity(stops.len());
        for stop in stops {
            match deduped.last_mut() {
                Some(prev) if prev.threshold == stop.threshold => *prev = stop,
                _ => deduped.push(stop),
            }
        }

        Ok(Self { stops: deduped })
    }

    pub fn stops(&self) -> &[ColorStop] {
        &self.stops
    }

    fn lowest(&self) -> &ColorStop {
        &self.stops[0]
    }

    fn highest(&self) -> &ColorStop {
        &self.stops[self.stops.len() - 1]
    }

    /// Resolve the display color for a value.
    ///
    /// Values at or below the lowest threshold take the lowest stop's color;
    /// values at or past the highest take the highest stop's. In between,
    /// the first adjacent pair with `s1 <= value < s2` owns the value
    /// (half-open bracket; a boundary value belongs to the bracket it
    /// starts). With `gradient` off the bracket's lower color is returned
    /// unchanged; with it on the two colors blend at
    /// `normalize(s1, s2, value)`.
    pub fn resolve(&self, value: f64, gradient: bool) -> Result<Color, GaugeError> {
        if value <= self.lowest().threshold {
            return Ok(self.lowest().color);
        }
        if value >= self.highest().threshold {
            return Ok(self.highest().color);
        }

        for pair in self.stops.windows(2) {
            let (s1, s2) = (pair[0], pair[1]);
            if s1.threshold <= value && value < s2.threshold {
                if !gradient {
                    return Ok(s1.color);
                }
                let t = normalize(s1.threshold, s2.threshold, value);
                return Ok(s1.color.blend(s2.color, t));
            }
        }

        // Unreachable for a table built by `new`; surfaced instead of
        // silently returning an arbitrary color.
        Err(GaugeError::StopLookupFailed(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stop(threshold: f64, hex: &str) -> ColorStop {
        ColorStop::new(threshold, Color::from_hex(hex).unwrap())
    }

    #[test]
    fn test_empty_table_is_rejected() {
        assert_eq!(
            ColorStopTable::new(Vec::new()).unwrap_err(),
            GaugeError::EmptyStopTable
        );
    }

    #[test]
    fn test_single_stop_always_wins() {
        let table = ColorStopTable::new(vec![stop(0.0, "#03a9f4")]).unwrap();
        for value in [-100.0, 0.0, 42.0, 1e9] {
            assert_eq!(table.resolve(value, false).unwrap().to_hex(), "#03a9f4");
            assert_eq!(table.resolve(value, true).unwrap().to_hex(), "#03a9f4");
        }
    }

    #[test]
    fn test_step_mode_takes_lower_stop() {
        let table =
            ColorStopTable::new(vec![stop(0.0, "#000000"), stop(100.0, "#ffffff")]).unwrap();
        assert_eq!(table.resolve(25.0, false).unwrap().to_hex(), "#000000");
    }

    #[test]
    fn test_clamps_outside_the_table() {
        let table =
            ColorStopTable::new(vec![stop(0.0, "#000000"), stop(100.0, "#ffffff")]).unwrap();
        assert_eq!(table.resolve(-5.0, false).unwrap().to_hex(), "#000000");
        assert_eq!(table.resolve(100.0, false).unwrap().to_hex(), "#ffffff");
        assert_eq!(table.resolve(250.0, true).unwrap().to_hex(), "#ffffff");
    }

    #[test]
    fn test_gradient_midpoint_blend() {
        let table =
            ColorStopTable::new(vec![stop(0.0, "#000000"), stop(100.0, "#ffffff")]).unwrap();
        assert_eq!(table.resolve(50.0, true).unwrap().to_hex(), "#7f7f7f");
    }

    #[test]
    fn test_boundary_value_belongs_to_upper_bracket() {
        let table = ColorStopTable::new(vec![
            stop(0.0, "#111111"),
            stop(10.0, "#222222"),
            stop(20.0, "#333333"),
        ])
        .unwrap();
        // Exactly 10 sits in the [10, 20) bracket, so its s1 is the middle
        // stop, in both step and gradient mode (t = 0 there).
        assert_eq!(table.resolve(10.0, false).unwrap().to_hex(), "#222222");
        assert_eq!(table.resolve(10.0, true).unwrap().to_hex(), "#222222");
    }

    #[test]
    fn test_insertion_order_is_irrelevant() {
        let sorted = ColorStopTable::new(vec![
            stop(0.0, "#111111"),
            stop(10.0, "#222222"),
            stop(20.0, "#333333"),
        ])
        .unwrap();
        let shuffled = ColorStopTable::new(vec![
            stop(20.0, "#333333"),
            stop(0.0, "#111111"),
            stop(10.0, "#222222"),
        ])
        .unwrap();
        assert_eq!(sorted, shuffled);
        assert_eq!(shuffled.resolve(15.0, false).unwrap().to_hex(), "#222222");
    }

    #[test]
    fn test_duplicate_threshold_last_wins() {
        let table =
            ColorStopTable::new(vec![stop(0.0, "#111111"), stop(0.0, "#222222")]).unwrap();
        assert_eq!(table.stops().len(), 1);
        assert_eq!(table.resolve(0.0, false).unwrap().to_hex(), "#222222");
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let table = ColorStopTable::new(vec![
            stop(0.0, "#03a9f4"),
            stop(50.0, "#ffff00"),
            stop(100.0, "#ff0000"),
        ])
        .unwrap();
        let first = table.resolve(75.0, true).unwrap();
        let second = table.resolve(75.0, true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_three_stop_gradient_blend() {
        let table = ColorStopTable::new(vec![
            stop(0.0, "#03a9f4"),
            stop(50.0, "#ffff00"),
            stop(100.0, "#ff0000"),
        ])
        .unwrap();
        // 75 sits midway through [50, 100): yellow -> red at t = 0.5.
        assert_eq!(table.resolve(75.0, true).unwrap().to_hex(), "#ff7f00");
    }
}
