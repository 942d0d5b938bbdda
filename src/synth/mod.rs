//! Model synthesis: fuzzy inputs in, canonical LP text out.
//!
//! The pipeline has two steps:
//! 1. Reduce the active product and resource prefixes to a crisp
//!    [`LinearModel`] at one alpha level.
//! 2. Render that model as text with fixed section order.

pub mod linear_model;
pub mod render;
pub mod settings;
pub mod synthesizer;

pub use linear_model::LinearModel;
pub use render::{render, ModelText, BOUNDS, END, MAXIMIZE, SUBJECT_TO};
pub use settings::{Labels, Settings, PRODUCT_RANGE, RESOURCE_RANGE};
pub use synthesizer::{synthesize, Synthesizer};
