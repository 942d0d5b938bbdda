//! # fuzzy-lp
//!
//! Turns uncertain production data into a crisp linear-programming model.
//!
//! Demand and price of each product, and optionally resource capacities, are
//! triangular fuzzy numbers `(a, m, b)`. A single confidence level `alpha`
//! reduces each of them to a scalar (the midpoint of its alpha-cut) and the
//! resulting LP is rendered as plain text for display or for a solver that
//! reads the `MAXIMIZE` / `SUBJECT TO` / `BOUNDS` / `END` layout.
//!
//! ## Quick Start
//!
//! ```
//! use fuzzy_lp::prelude::*;
//!
//! let products = vec![
//!     Product::new("Chair", (50.0, 100.0, 150.0), (10.0, 20.0, 30.0), vec![3.0, 0.0]),
//!     Product::new("Table", (20.0, 40.0, 60.0), (5.0, 10.0, 15.0), vec![0.0, 2.0]),
//! ];
//! let resources = vec![Resource::new("Wood", 100.0), Resource::new("Labor", 50.0)];
//!
//! let text = synthesize(&products, &resources, 2, 2, 1.0);
//! assert!(text.contains("20.00 X1 + 10.00 X2"));
//! assert!(text.contains("3 X1 <= 100"));
//! ```
//!
//! ## Reduction rule
//!
//! ```text
//! lower = a + alpha * (m - a)
//! upper = b + alpha * (m - b)
//! crisp = (lower + upper) / 2
//! ```
//!
//! At `alpha = 1` every quantity collapses to its most-likely value `m`; at
//! `alpha = 0` it is the midpoint of the support.
//!
//! ## Architecture
//!
//! - **`fuzzy`**: triangular numbers, alpha-cuts, defuzzification
//! - **`model`**: products, resources (crisp or fuzzy capacity), scenarios
//! - **`synth`**: crisp [`LinearModel`](synth::LinearModel) and its text form
//!
//! Nothing here solves the LP; it only formulates it.

pub mod error;
pub mod fuzzy;
pub mod logging;
pub mod model;
pub mod synth;

/// Prelude module for convenient imports.
///
/// ```
/// use fuzzy_lp::prelude::*;
/// ```
pub mod prelude {
    // Fuzzy arithmetic
    pub use crate::fuzzy::{alpha_cut, crisp, AlphaCut, FuzzyNumber};

    // Inputs
    pub use crate::model::{Capacity, Product, Resource, Scenario};

    // Synthesis
    pub use crate::synth::{render, synthesize, Labels, LinearModel, Settings, Synthesizer};

    // Errors
    pub use crate::error::{FuzzyLpError, Result};
}

// Re-export main types at crate root
pub use error::{FuzzyLpError, Result};
pub use fuzzy::FuzzyNumber;
pub use synth::{synthesize, Synthesizer};
