//! Planning scenarios: the full input to model synthesis.
//!
//! A scenario bundles the product list, the resource list and the
//! [`Settings`] selecting the active prefixes and the alpha level. It is the
//! on-disk format too:
//!
//! ```json
//! {
//!   "settings": { "alpha": 0.5, "num_products": 4, "num_resources": 3 },
//!   "products": [
//!     { "name": "Product A",
//!       "demand": { "a": 100, "m": 150, "b": 200 },
//!       "price": { "a": 30, "m": 35, "b": 40 },
//!       "resource_usage": [5, 7, 4, 0] }
//!   ],
//!   "resources": [
//!     { "name": "Resource 1", "capacity": 1200 },
//!     { "name": "Resource 2", "capacity": { "a": 1400, "m": 1500, "b": 1600 } }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyLpError, Result};
use crate::fuzzy::FuzzyNumber;
use crate::model::{Capacity, Product, Resource};
use crate::synth::{LinearModel, Settings, Synthesizer};

/// Products, resources and synthesis settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Synthesis settings.
    #[serde(default)]
    pub settings: Settings,
    /// Full product list; only a prefix is active.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Full resource list; only a prefix is active.
    #[serde(default)]
    pub resources: Vec<Resource>,
}

impl Scenario {
    /// Create a scenario.
    pub fn new(products: Vec<Product>, resources: Vec<Resource>, settings: Settings) -> Self {
        Scenario {
            settings,
            products,
            resources,
        }
    }

    /// Sample production plan: five products, four resources, alpha 0.5,
    /// with the first four products and three resources active.
    pub fn sample() -> Self {
        let products = vec![
            Product::new(
                "Product A",
                (100.0, 150.0, 200.0),
                (30.0, 35.0, 40.0),
                vec![5.0, 7.0, 4.0, 0.0],
            ),
            Product::new(
                "Product B",
                (80.0, 120.0, 160.0),
                (25.0, 30.0, 34.0),
                vec![6.0, 5.0, 5.0, 0.0],
            ),
            Product::new(
                "Product C",
                (90.0, 130.0, 170.0),
                (28.0, 32.0, 38.0),
                vec![4.0, 6.0, 3.0, 0.0],
            ),
            Product::new(
                "Product D",
                (60.0, 100.0, 140.0),
                (20.0, 24.0, 28.0),
                vec![3.0, 4.0, 2.0, 0.0],
            ),
            Product::new(
                "Product E",
                (70.0, 110.0, 150.0),
                (22.0, 26.0, 30.0),
                vec![4.0, 5.0, 3.0, 2.0],
            ),
        ];
        let resources = vec![
            Resource::new("Resource 1", 1200.0),
            Resource::new("Resource 2", 1500.0),
            Resource::new("Resource 3", 1000.0),
            Resource::new("Resource 4", 800.0),
        ];
        Scenario::new(products, resources, Settings::default())
    }

    /// Parse a scenario from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the scenario as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load a scenario from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let scenario = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.display(),
            products = scenario.products.len(),
            resources = scenario.resources.len(),
            "loaded scenario"
        );
        Ok(scenario)
    }

    /// Write the scenario to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }

    /// Change the active resource count, padding every product's usage
    /// vector with zeros so each active resource has an entry.
    pub fn set_num_resources(&mut self, num_resources: usize) {
        self.settings.num_resources = num_resources;
        for product in &mut self.products {
            product.pad_usage(num_resources);
        }
    }

    /// Change the active product count.
    pub fn set_num_products(&mut self, num_products: usize) {
        self.settings.num_products = num_products;
    }

    /// Strict input check for callers that want to reject bad data before
    /// synthesis. Covers the settings, the list lengths, triangle ordering
    /// and finiteness of every active number.
    pub fn validate(&self) -> Result<()> {
        self.settings.validate()?;

        let num_products = self.settings.num_products;
        let num_resources = self.settings.num_resources;
        check_available("product", num_products, self.products.len())?;
        check_available("resource", num_resources, self.resources.len())?;

        for product in &self.products[..num_products] {
            check_fuzzy(&product.demand)?;
            check_fuzzy(&product.price)?;
            for r in 0..num_resources {
                if !product.usage(r).is_finite() {
                    return Err(FuzzyLpError::NonFinite {
                        field: format!("{} usage of resource {}", product.name, r + 1),
                    });
                }
            }
        }

        for resource in &self.resources[..num_resources] {
            match resource.capacity {
                Capacity::Crisp(value) if !value.is_finite() => {
                    return Err(FuzzyLpError::NonFinite {
                        field: format!("{} capacity", resource.name),
                    });
                }
                Capacity::Crisp(_) => {}
                Capacity::Fuzzy(f) => check_fuzzy(&f)?,
            }
        }

        Ok(())
    }

    /// Build the crisp model for this scenario.
    pub fn build(&self) -> LinearModel {
        self.synthesizer().build(&self.products, &self.resources)
    }

    /// Render the model text for this scenario.
    pub fn synthesize(&self) -> String {
        self.synthesizer().synthesize(&self.products, &self.resources)
    }

    fn synthesizer(&self) -> Synthesizer {
        Synthesizer::from_settings(self.settings.clone())
    }
}

fn check_available(what: &'static str, requested: usize, available: usize) -> Result<()> {
    if requested > available {
        return Err(FuzzyLpError::NotEnoughEntries {
            what,
            requested,
            available,
        });
    }
    Ok(())
}

fn check_fuzzy(f: &FuzzyNumber) -> Result<()> {
    FuzzyNumber::try_new(f.a, f.m, f.b).map(|_| ())
}
