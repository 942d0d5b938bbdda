//! Model synthesis entry points.
//!
//! [`synthesize`] is the one-call form. [`Synthesizer`] is the builder form
//! for callers that want custom labels or the intermediate [`LinearModel`]:
//!
//! ```ignore
//! let text = Synthesizer::new(0.8)
//!     .products(3)
//!     .resources(2)
//!     .labels(Labels::romanian())
//!     .synthesize(&products, &resources);
//! ```
//!
//! Synthesis is total. Active counts larger than the supplied lists are
//! clamped to what is available, unordered triangles are reported with a
//! warning and reduced anyway, and non-finite numbers flow into the text.

use crate::fuzzy::FuzzyNumber;
use crate::model::{Capacity, Product, Resource};

use super::linear_model::LinearModel;
use super::render::render;
use super::settings::{Labels, Settings};

/// Builder for model synthesis.
#[derive(Debug, Clone, Default)]
pub struct Synthesizer {
    settings: Settings,
}

impl Synthesizer {
    /// Synthesizer at level `alpha` with default counts and labels.
    pub fn new(alpha: f64) -> Self {
        Synthesizer {
            settings: Settings {
                alpha,
                ..Settings::default()
            },
        }
    }

    /// Synthesizer using `settings` as-is.
    pub fn from_settings(settings: Settings) -> Self {
        Synthesizer { settings }
    }

    /// Set the active product count.
    pub fn products(mut self, num_products: usize) -> Self {
        self.settings.num_products = num_products;
        self
    }

    /// Set the active resource count.
    pub fn resources(mut self, num_resources: usize) -> Self {
        self.settings.num_resources = num_resources;
        self
    }

    /// Set the text labels.
    pub fn labels(mut self, labels: Labels) -> Self {
        self.settings.labels = labels;
        self
    }

    /// Current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Reduce the active prefixes to a crisp model.
    pub fn build(&self, products: &[Product], resources: &[Resource]) -> LinearModel {
        let alpha = self.settings.alpha;
        let products = active_prefix("product", products, self.settings.num_products);
        let resources = active_prefix("resource", resources, self.settings.num_resources);

        warn_unordered(products, resources);

        let model = LinearModel::from_parts(products, resources, alpha);
        tracing::debug!(
            alpha,
            products = model.num_variables(),
            resources = model.num_resources(),
            constraints = model.active_constraints().count(),
            "built linear model"
        );
        model
    }

    /// Reduce and render the model text.
    pub fn synthesize(&self, products: &[Product], resources: &[Resource]) -> String {
        let model = self.build(products, resources);
        render(&model, &self.settings.labels)
    }
}

/// Render the LP model for the first `num_products` products and first
/// `num_resources` resources at level `alpha`, with the default labels.
pub fn synthesize(
    products: &[Product],
    resources: &[Resource],
    num_products: usize,
    num_resources: usize,
    alpha: f64,
) -> String {
    Synthesizer::new(alpha)
        .products(num_products)
        .resources(num_resources)
        .synthesize(products, resources)
}

fn active_prefix<'a, T>(what: &str, items: &'a [T], requested: usize) -> &'a [T] {
    if requested > items.len() {
        tracing::debug!(
            requested,
            available = items.len(),
            "{} count exceeds list length, clamping",
            what
        );
    }
    &items[..requested.min(items.len())]
}

fn warn_unordered(products: &[Product], resources: &[Resource]) {
    let check = |owner: &str, quantity: &str, f: &FuzzyNumber| {
        if !f.is_ordered() {
            tracing::warn!(owner, quantity, value = %f, "fuzzy number is not ordered a <= m <= b");
        }
    };
    for p in products {
        check(&p.name, "demand", &p.demand);
        check(&p.name, "price", &p.price);
    }
    for r in resources {
        if let Capacity::Fuzzy(f) = &r.capacity {
            check(&r.name, "capacity", f);
        }
    }
}
