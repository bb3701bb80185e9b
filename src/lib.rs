//! circle-gauge: pure computation core for a circular sensor gauge widget.
//!
//! This library maps one live numeric reading to everything a presentation
//! layer needs to paint a circular gauge:
//! - Range normalization and the arc dash geometry derived from it
//! - Stroke color resolution over a sorted color-stop table, either as a
//!   step function or by linear RGB blending between the bracketing stops
//! - Label/unit text assembly from the configured overrides and the
//!   entity's own attributes
//!
//! The core is stateless: each evaluation is a pure function of a config
//! snapshot and an entity-state snapshot supplied by the host. Markup,
//! styling and event wiring remain the host's responsibility.

pub mod color;
pub mod config;
pub mod error;
pub mod gauge;
pub mod host;
pub mod normalize;
pub mod stops;

// Re-export commonly used types at the crate root for convenience
pub use color::Color;
pub use config::GaugeConfig;
pub use error::GaugeError;
pub use gauge::{CircleGauge, GaugeLabel, GaugeReading};
pub use host::{DetailHandler, EntityState, GaugeRegistry};
pub use normalize::{normalize, ArcGeometry};
pub use stops::{ColorStop, ColorStopTable};
