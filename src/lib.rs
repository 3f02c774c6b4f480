//! thermo-chart: a thermometer gauge with an auto-ranging value axis.
//!
//! The crate splits into pure computation (`core`: axis rounding, scale,
//! layout, value transitions), orchestration (`api`: the `Thermometer`
//! instance and its scene builder) and drawing backends (`render`).

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{Thermometer, ThermometerConfig};
pub use error::{ThermometerError, ThermometerResult};
