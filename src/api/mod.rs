mod scene_builder;
mod snapshot;
mod thermometer;
mod thermometer_config;
mod value_controller;

pub use scene_builder::format_tick_label;
pub use snapshot::{THERMOMETER_SNAPSHOT_JSON_SCHEMA_V1, ThermometerSnapshot};
pub use thermometer::Thermometer;
pub use thermometer_config::ThermometerConfig;
