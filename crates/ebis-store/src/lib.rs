//! Preset store for delivery-record templates

mod presets;

pub use presets::{Preset, PresetStore};
