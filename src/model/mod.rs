//! Planning inputs: products, resources and the scenario bundling them.

pub mod product;
pub mod resource;
pub mod scenario;

pub use product::Product;
pub use resource::{Capacity, Resource};
pub use scenario::Scenario;
