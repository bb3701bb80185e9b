//! Circle gauge core: one evaluation per render cycle.
//!
//! A `CircleGauge` validates its config and pre-builds the sorted stop
//! table once, then turns each host-supplied [`EntityState`] snapshot into
//! a [`GaugeReading`]: the unclamped range fraction, the arc dash
//! geometry, the resolved stroke color and the label text. Evaluation is
//! pure; nothing is retained between calls.

use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::GaugeConfig;
use crate::error::GaugeError;
use crate::host::{DetailHandler, EntityState};
use crate::normalize::{normalize, ArcGeometry};
use crate::stops::ColorStopTable;

/// Text parts of the gauge label; the host's layout assembles them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GaugeLabel {
    /// Display name above the value, when configured.
    pub name: Option<String>,
    /// The raw reading as display text.
    pub value: String,
    /// Unit suffix: the configured units, the entity's unit of
    /// measurement, or `/ max` when `show_max` is set.
    pub unit: String,
}

/// One evaluation result: everything the presentation layer needs to
/// paint the gauge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GaugeReading {
    /// Unclamped fraction of the configured range.
    pub fraction: f64,
    /// SVG `stroke-dasharray` for the arc fill.
    pub dash_array: String,
    /// Stroke paint as a 6-digit hex string.
    pub stroke_color: String,
    /// Stroke width passed through from the config.
    pub stroke_width: f64,
    pub label: GaugeLabel,
}

/// The gauge widget core.
pub struct CircleGauge {
    config: GaugeConfig,
    stops: ColorStopTable,
    detail: Option<Box<dyn DetailHandler>>,
}

impl fmt::Debug for CircleGauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircleGauge")
            .field("config", &self.config)
            .field("stops", &self.stops)
            .field("detail", &self.detail.as_ref().map(|_| ".."))
            .finish()
    }
}

impl CircleGauge {
    /// Validate the config and pre-build the stop table.
    pub fn new(config: GaugeConfig) -> Result<Self, GaugeError> {
        config.validate()?;
        let stops = config.stop_table()?;
        debug!(
            "circle gauge for {}: range [{}, {}], {} color stop(s), gradient {}",
            config.entity,
            config.min,
            config.max,
            stops.stops().len(),
            config.gradient
        );
        Ok(Self {
            config,
            stops,
            detail: None,
        })
    }

    pub fn config(&self) -> &GaugeConfig {
        &self.config
    }

    /// Inject the host's click-to-detail capability.
    pub fn set_detail_handler(&mut self, handler: Box<dyn DetailHandler>) {
        self.detail = Some(handler);
    }

    /// Forward a click on the gauge to the host's detail view, if a
    /// handler was injected.
    pub fn activate(&self, entity_id: &str) {
        if let Some(handler) = &self.detail {
            handler.on_activate(entity_id);
        }
    }

    /// Evaluate one entity snapshot.
    pub fn evaluate(&self, entity: &EntityState) -> Result<GaugeReading, GaugeError> {
        let value = self.reading(entity)?;
        let max = self.range_max(entity);
        if max == self.config.min {
            return Err(GaugeError::DegenerateRange {
                min: self.config.min,
                max,
            });
        }

        let fraction = normalize(self.config.min, max, value);
        if !(0.0..=1.0).contains(&fraction) {
            warn!(
                "{}: reading {} outside [{}, {}] (fraction {})",
                entity.entity_id, value, self.config.min, max, fraction
            );
        }

        let color = self.stops.resolve(value, self.config.gradient)?;

        Ok(GaugeReading {
            fraction,
            dash_array: ArcGeometry::from_fraction(fraction).dash_array(),
            stroke_color: color.to_hex(),
            stroke_width: self.config.stroke_width,
            label: self.label(entity, max),
        })
    }

    /// Drill the numeric reading out of the snapshot: the primary state,
    /// or the configured attribute when one is set.
    fn reading(&self, entity: &EntityState) -> Result<f64, GaugeError> {
        let raw = match &self.config.attribute {
            Some(attr) => entity.attributes.get(attr),
            None => Some(&entity.state),
        };
        raw.and_then(EntityState::numeric)
            .ok_or_else(|| GaugeError::NonNumericValue {
                entity: entity.entity_id.clone(),
                value: raw.map_or_else(|| "null".to_string(), Value::to_string),
            })
    }

    /// Effective range maximum: the `attribute_max` attribute when
    /// configured and numeric, otherwise the configured `max`.
    fn range_max(&self, entity: &EntityState) -> f64 {
        self.config
            .attribute_max
            .as_ref()
            .and_then(|attr| entity.attributes.get(attr))
            .and_then(EntityState::numeric)
            .unwrap_or(self.config.max)
    }

    fn label(&self, entity: &EntityState, max: f64) -> GaugeLabel {
        let value = match &self.config.attribute {
            Some(attr) => entity
                .attributes
                .get(attr)
                .map(display_text)
                .unwrap_or_default(),
            None => display_text(&entity.state),
        };

        let unit = if self.config.show_max {
            format!("/ {max}")
        } else if let Some(units) = &self.config.units {
            units.clone()
        } else {
            entity
                .attributes
                .get("unit_of_measurement")
                .map(display_text)
                .unwrap_or_default()
        };

        GaugeLabel {
            name: self.config.name.clone(),
            value,
            unit,
        }
    }
}

/// Display text for a state value; strings drop their JSON quoting.
fn display_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
