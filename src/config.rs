//! Gauge configuration types.
//!
//! The config mirrors what a dashboard host supplies per gauge: the entity
//! to read, the value range, stroke styling and the color-stop table.
//! Every field except `entity` has a serde default, and validation runs
//! once at gauge construction rather than per render.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::GaugeError;
use crate::stops::{ColorStop, ColorStopTable};

/// Configuration for one circular gauge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GaugeConfig {
    /// Identifier of the entity whose state drives the gauge. Required.
    pub entity: String,

    /// Display name shown above the value label.
    #[serde(default)]
    pub name: Option<String>,

    /// Read this attribute of the entity instead of its primary state.
    #[serde(default)]
    pub attribute: Option<String>,

    /// Take the range maximum from this attribute instead of `max`.
    #[serde(default)]
    pub attribute_max: Option<String>,

    /// Range minimum.
    #[serde(default = "default_min")]
    pub min: f64,

    /// Range maximum. Must differ from `min`.
    #[serde(default = "default_max")]
    pub max: f64,

    /// Stroke color used when no stop table applies, and the seed color at
    /// `min` when one does.
    #[serde(default = "default_stroke_color")]
    pub stroke_color: Color,

    /// Stroke width passed through to the presentation layer.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Render `/ max` after the value instead of a unit.
    #[serde(default = "default_false")]
    pub show_max: bool,

    /// Unit text override; falls back to the entity's
    /// `unit_of_measurement` attribute.
    #[serde(default)]
    pub units: Option<String>,

    /// Threshold -> color stops driving the stroke color.
    #[serde(default)]
    pub color_stops: Vec<ColorStop>,

    /// Blend between bracketing stops instead of stepping.
    #[serde(default = "default_false")]
    pub gradient: bool,
}

fn default_min() -> f64 {
    0.0
}

fn default_max() -> f64 {
    100.0
}

fn default_stroke_color() -> Color {
    Color::new(0x03, 0xa9, 0xf4)
}

fn default_stroke_width() -> f64 {
    6.0
}

fn default_false() -> bool {
    false
}

impl Default for GaugeConfig {
    fn default() -> Self {
        Self {
            entity: String::new(),
            name: None,
            attribute: None,
            attribute_max: None,
            min: default_min(),
            max: default_max(),
            stroke_color: default_stroke_color(),
            stroke_width: default_stroke_width(),
            show_max: default_false(),
            units: None,
            color_stops: Vec::new(),
            gradient: default_false(),
        }
    }
}

impl GaugeConfig {
    /// Minimal config for a given entity, everything else defaulted.
    pub fn for_entity(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            ..Self::default()
        }
    }

    /// Check the invariants the evaluation path relies on.
    ///
    /// `min > max` is allowed (a reversed range inverts the fraction);
    /// only `min == max` is rejected as degenerate.
    pub fn validate(&self) -> Result<(), GaugeError> {
        if self.entity.trim().is_empty() {
            return Err(GaugeError::MissingEntity);
        }
        if self.min == self.max {
            return Err(GaugeError::DegenerateRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Build the stop table used for stroke color resolution.
    ///
    /// The table is always seeded with `min -> stroke_color` before the
    /// configured stops merge over it, so resolution is total even with no
    /// stops configured. A configured stop at exactly `min` overrides the
    /// seed.
    pub fn stop_table(&self) -> Result<ColorStopTable, GaugeError> {
        let mut stops = Vec::with_capacity(self.color_stops.len() + 1);
        stops.push(ColorStop::new(self.min, self.stroke_color));
        stops.extend(self.color_stops.iter().copied());
        ColorStopTable::new(stops)
    }
}
