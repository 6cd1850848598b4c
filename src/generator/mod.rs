//! Template generation beyond hand-authored presets
//!
//! [`families`] enumerates parametric configuration families; [`batch`]
//! drives a full run, registering authored presets first and filling each
//! category's remaining ids with generated configurations.

pub mod batch;
pub mod families;

pub use batch::{BatchError, BatchGenerator, Catalog, CategoryBatch};
pub use families::{configs_for, ease_variation_specs, Direction, Easing};
