//! Host boundary: entity snapshots, the detail-view callback and the
//! gauge registry.
//!
//! The host dashboard owns live state, layout and event dispatch. It hands
//! the core a per-render [`EntityState`] snapshot, injects a
//! [`DetailHandler`] for the click-to-detail interaction, and wires gauge
//! factories into a [`GaugeRegistry`] it passes around by handle. There is
//! no implicit global registration.

use std::collections::HashMap;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::GaugeConfig;
use crate::error::GaugeError;
use crate::gauge::CircleGauge;

/// Snapshot of one entity's live state, supplied by the host per
/// evaluation. Nothing is retained between evaluations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntityState {
    pub entity_id: String,
    /// Primary state value. Sensor integrations frequently deliver numbers
    /// as strings, so readings accept both forms.
    pub state: Value,
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
}

impl EntityState {
    pub fn new(entity_id: impl Into<String>, state: Value) -> Self {
        Self {
            entity_id: entity_id.into(),
            state,
            attributes: HashMap::new(),
        }
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// Numeric view of a state or attribute value. JSON numbers pass
    /// through; strings are parsed after trimming.
    pub(crate) fn numeric(value: &Value) -> Option<f64> {
        match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

/// Host-injected capability for the click-to-detail interaction.
///
/// The gauge calls `on_activate` with its entity id when the user clicks
/// it; what a "detail view" looks like is entirely the host's business.
pub trait DetailHandler: Send + Sync {
    fn on_activate(&self, entity_id: &str);
}

/// Function that builds a gauge core from host-supplied config.
pub type GaugeFactory = fn(GaugeConfig) -> Result<CircleGauge>;

/// Registry of gauge factories.
///
/// Hosts register factories once during wiring and pass the registry by
/// handle wherever gauges get built.
pub struct GaugeRegistry {
    factories: HashMap<String, GaugeFactory>,
}

impl GaugeRegistry {
    pub fn new() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Register a gauge factory under an id.
    pub fn register(&mut self, id: &str, factory: GaugeFactory) {
        self.factories.insert(id.to_string(), factory);
    }

    /// Build a gauge by registered id.
    pub fn create(&self, id: &str, config: GaugeConfig) -> Result<CircleGauge> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| GaugeError::UnknownGauge(id.to_string()))?;
        factory(config)
    }

    /// List all registered gauge ids.
    pub fn list(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }
}

impl Default for GaugeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::sync::{Arc, Mutex};

    #[test]
    fn test_entity_state_serde() {
        let entity = EntityState::new("sensor.temp", json!("21.5"))
            .with_attribute("unit_of_measurement", json!("°C"));
        let out = serde_json::to_string(&entity).unwrap();
        let back: EntityState = serde_json::from_str(&out).unwrap();
        assert_eq!(back, entity);
    }

    #[test]
    fn test_numeric_accepts_numbers_and_strings() {
        assert_eq!(EntityState::numeric(&json!(42)), Some(42.0));
        assert_eq!(EntityState::numeric(&json!(" 21.5 ")), Some(21.5));
        assert_eq!(EntityState::numeric(&json!("unavailable")), None);
        assert_eq!(EntityState::numeric(&json!(null)), None);
        assert_eq!(EntityState::numeric(&json!(["nope"])), None);
    }

    #[test]
    fn test_registry_creates_registered_gauges() {
        let mut registry = GaugeRegistry::new();
        registry.register("circle", |config| Ok(CircleGauge::new(config)?));

        let gauge = registry
            .create("circle", GaugeConfig::for_entity("sensor.temp"))
            .unwrap();
        assert_eq!(gauge.config().entity, "sensor.temp");
        assert_eq!(registry.list(), vec!["circle".to_string()]);
    }

    #[test]
    fn test_registry_rejects_unknown_ids() {
        let registry = GaugeRegistry::new();
        let err = registry
            .create("dial", GaugeConfig::for_entity("sensor.temp"))
            .unwrap_err();
        assert_eq!(
            err.downcast::<GaugeError>().unwrap(),
            GaugeError::UnknownGauge("dial".to_string())
        );
    }

    #[derive(Clone)]
    struct Recorder(Arc<Mutex<Vec<String>>>);

    impl DetailHandler for Recorder {
        fn on_activate(&self, entity_id: &str) {
            self.0.lock().unwrap().push(entity_id.to_string());
        }
    }

    #[test]
    fn test_detail_handler_receives_entity_id() {
        let mut gauge = CircleGauge::new(GaugeConfig::for_entity("sensor.temp")).unwrap();
        let recorder = Recorder(Arc::new(Mutex::new(Vec::new())));
        gauge.set_detail_handler(Box::new(recorder.clone()));

        gauge.activate("sensor.temp");
        assert_eq!(*recorder.0.lock().unwrap(), vec!["sensor.temp".to_string()]);
    }
}
