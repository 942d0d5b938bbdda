//! Synthesis settings.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::error::{FuzzyLpError, Result};

/// Active product counts the planning form offers.
pub const PRODUCT_RANGE: RangeInclusive<usize> = 3..=5;

/// Active resource counts the planning form offers.
pub const RESOURCE_RANGE: RangeInclusive<usize> = 2..=4;

/// Human-readable text around the fixed LP keywords.
///
/// The keywords themselves (`MAXIMIZE`, `SUBJECT TO`, `BOUNDS`, `END`) and
/// the `X<k>` variable tokens are not configurable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// First line of the model.
    pub title: String,
    /// Prefix of the alpha line, rendered as `<alpha_level> = 0.50`.
    pub alpha_level: String,
    /// Heading of the variable glossary.
    pub variables: String,
    /// Heading of the alpha-cut summary, followed by ` (α = 0.50):`.
    pub alpha_cut_values: String,
    /// Key for crisp demand in the summary.
    pub demand: String,
    /// Key for crisp price in the summary.
    pub price: String,
}

impl Default for Labels {
    fn default() -> Self {
        Labels {
            title: "Linear Programming Model – Production Optimization".into(),
            alpha_level: "Alpha level α".into(),
            variables: "Variable definitions:".into(),
            alpha_cut_values: "α-cut values".into(),
            demand: "Demand".into(),
            price: "Price".into(),
        }
    }
}

impl Labels {
    /// Romanian wording used by the original planning form.
    pub fn romanian() -> Self {
        Labels {
            title: "Model de Programare Liniară – Optimizarea Producției".into(),
            alpha_level: "Nivel α".into(),
            variables: "Definiții variabile:".into(),
            alpha_cut_values: "Valori α-cut".into(),
            demand: "Cerere".into(),
            price: "Preț".into(),
        }
    }
}

/// Settings controlling model synthesis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Confidence level used to defuzzify every fuzzy input.
    pub alpha: f64,
    /// Length of the active product prefix.
    pub num_products: usize,
    /// Length of the active resource prefix.
    pub num_resources: usize,
    /// Text labels.
    pub labels: Labels,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            alpha: 0.5,
            num_products: 4,
            num_resources: 3,
            labels: Labels::default(),
        }
    }
}

impl Settings {
    /// Check the settings against the bounds of the planning form.
    ///
    /// Synthesis itself accepts anything; this is for callers that want to
    /// reject input at the editing boundary.
    pub fn validate(&self) -> Result<()> {
        if !self.alpha.is_finite() || !(0.0..=1.0).contains(&self.alpha) {
            return Err(FuzzyLpError::InvalidAlpha(self.alpha));
        }
        check_count("product", self.num_products, &PRODUCT_RANGE)?;
        check_count("resource", self.num_resources, &RESOURCE_RANGE)?;
        Ok(())
    }
}

fn check_count(what: &'static str, got: usize, range: &RangeInclusive<usize>) -> Result<()> {
    if range.contains(&got) {
        Ok(())
    } else {
        Err(FuzzyLpError::InvalidCount {
            what,
            got,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let settings = Settings::default();
        assert_eq!(settings.alpha, 0.5);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_alpha() {
        let mut settings = Settings::default();
        settings.alpha = 1.5;
        assert!(matches!(settings.validate(), Err(FuzzyLpError::InvalidAlpha(_))));

        settings.alpha = f64::NAN;
        assert!(settings.validate().is_err());

        settings.alpha = 1.0;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validate_counts() {
        let mut settings = Settings::default();
        settings.num_products = 6;
        assert!(matches!(
            settings.validate(),
            Err(FuzzyLpError::InvalidCount { what: "product", .. })
        ));

        let mut settings = Settings::default();
        settings.num_resources = 1;
        assert!(matches!(
            settings.validate(),
            Err(FuzzyLpError::InvalidCount { what: "resource", .. })
        ));
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"alpha": 0.8}"#).unwrap();
        assert_eq!(settings.alpha, 0.8);
        assert_eq!(settings.num_products, 4);
        assert_eq!(settings.labels, Labels::default());
    }
}
