//! Product definitions.

use serde::{Deserialize, Serialize};

use crate::fuzzy::FuzzyNumber;

/// A product with fuzzy demand and price.
///
/// `resource_usage[r]` is the amount of resource `r` consumed per unit. The
/// relation to resources is positional, not by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Display name, used only in the variable glossary.
    pub name: String,
    /// Demand estimate.
    pub demand: FuzzyNumber,
    /// Unit price estimate.
    pub price: FuzzyNumber,
    /// Per-unit consumption of each resource, index-aligned with resources.
    #[serde(default)]
    pub resource_usage: Vec<f64>,
}

impl Product {
    /// Create a product.
    pub fn new(
        name: impl Into<String>,
        demand: impl Into<FuzzyNumber>,
        price: impl Into<FuzzyNumber>,
        resource_usage: impl Into<Vec<f64>>,
    ) -> Self {
        Product {
            name: name.into(),
            demand: demand.into(),
            price: price.into(),
            resource_usage: resource_usage.into(),
        }
    }

    /// Usage of resource `index`; entries past the end count as zero.
    pub fn usage(&self, index: usize) -> f64 {
        self.resource_usage.get(index).copied().unwrap_or(0.0)
    }

    /// Grow the usage vector with zeros until it covers `num_resources`.
    ///
    /// Never shrinks: entries for deactivated resources are kept so they
    /// come back if the resource is re-enabled.
    pub fn pad_usage(&mut self, num_resources: usize) {
        if self.resource_usage.len() < num_resources {
            self.resource_usage.resize(num_resources, 0.0);
        }
    }
}
