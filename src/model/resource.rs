//! Resource definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fuzzy::FuzzyNumber;

/// Capacity of a resource, either a plain bound or a fuzzy estimate.
///
/// Serialized untagged: a bare number is crisp, an `{a, m, b}` object is fuzzy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Capacity {
    /// Known bound, used as-is.
    Crisp(f64),
    /// Uncertain bound, defuzzified at synthesis time.
    Fuzzy(FuzzyNumber),
}

impl Capacity {
    /// Resolve to a scalar bound at level `alpha`.
    pub fn resolve(&self, alpha: f64) -> f64 {
        match self {
            Capacity::Crisp(value) => *value,
            Capacity::Fuzzy(f) => f.defuzzify(alpha),
        }
    }

    /// Check if this capacity needs defuzzification.
    pub fn is_fuzzy(&self) -> bool {
        matches!(self, Capacity::Fuzzy(_))
    }
}

impl From<f64> for Capacity {
    fn from(value: f64) -> Self {
        Capacity::Crisp(value)
    }
}

impl From<FuzzyNumber> for Capacity {
    fn from(f: FuzzyNumber) -> Self {
        Capacity::Fuzzy(f)
    }
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Capacity::Crisp(value) => write!(f, "{}", value),
            Capacity::Fuzzy(fuzzy) => write!(f, "{}", fuzzy),
        }
    }
}

/// A capacitated resource shared by the products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    /// Display name.
    pub name: String,
    /// Available amount.
    pub capacity: Capacity,
}

impl Resource {
    /// Create a resource.
    pub fn new(name: impl Into<String>, capacity: impl Into<Capacity>) -> Self {
        Resource {
            name: name.into(),
            capacity: capacity.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crisp_ignores_alpha() {
        let c = Capacity::Crisp(100.0);
        assert_eq!(c.resolve(0.0), 100.0);
        assert_eq!(c.resolve(1.0), 100.0);
        assert!(!c.is_fuzzy());
    }

    #[test]
    fn test_fuzzy_resolves_midpoint() {
        let c = Capacity::from(FuzzyNumber::new(80.0, 100.0, 140.0));
        assert!(c.is_fuzzy());
        assert_eq!(c.resolve(0.0), 110.0);
        assert_eq!(c.resolve(1.0), 100.0);
    }

    #[test]
    fn test_untagged_serde() {
        let crisp: Resource = serde_json::from_str(r#"{"name": "Oven", "capacity": 1200}"#).unwrap();
        assert_eq!(crisp.capacity, Capacity::Crisp(1200.0));

        let fuzzy: Resource = serde_json::from_str(
            r#"{"name": "Labor", "capacity": {"a": 10, "m": 20, "b": 30}}"#,
        )
        .unwrap();
        assert_eq!(fuzzy.capacity, Capacity::Fuzzy(FuzzyNumber::new(10.0, 20.0, 30.0)));

        let back = serde_json::to_string(&crisp.capacity).unwrap();
        assert_eq!(back, "1200.0");
    }
}
