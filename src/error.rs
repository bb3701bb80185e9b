//! Error types for gauge construction and evaluation.
//!
//! The core never recovers from malformed input internally: it either
//! produces a well-defined result or signals one of these kinds. Catching
//! and presenting them to the end user is the host's job.

use thiserror::Error;

/// Everything that can go wrong building or evaluating a gauge.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum GaugeError {
    /// The config has no entity id to read state from.
    #[error("gauge config requires a non-empty entity id")]
    MissingEntity,

    /// Range min and max coincide, so normalization would divide by zero.
    #[error("degenerate range: min ({min}) must differ from max ({max})")]
    DegenerateRange { min: f64, max: f64 },

    /// A hex color string had the wrong length or non-hex characters.
    #[error("malformed hex color {0:?}")]
    MalformedColor(String),

    /// A color stop table was built from zero stops.
    #[error("color stop table requires at least one stop")]
    EmptyStopTable,

    /// No adjacent stop pair bracketed the value. Cannot happen for a table
    /// that went through `ColorStopTable::new`; kept explicit so malformed
    /// input never resolves to an arbitrary color.
    #[error("no color stop bracket matched value {0}")]
    StopLookupFailed(f64),

    /// The entity state (or drilled attribute) did not yield a number.
    #[error("reading for {entity} is not numeric: {value}")]
    NonNumericValue { entity: String, value: String },

    /// Registry lookup for an unregistered gauge id.
    #[error("unknown gauge: {0}")]
    UnknownGauge(String),
}
