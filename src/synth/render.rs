//! Canonical text rendering of a [`LinearModel`].
//!
//! Section order is fixed: header, `MAXIMIZE`, `SUBJECT TO` (resource rows
//! then demand bounds), `BOUNDS`, `END`, the variable glossary and the
//! alpha-cut summary. Prices print with two decimals, demands rounded to
//! whole units; usage coefficients and capacities print as given.

use std::fmt;

use super::linear_model::{variable_token, LinearModel};
use super::settings::Labels;

/// Objective section keyword.
pub const MAXIMIZE: &str = "MAXIMIZE";
/// Constraint section keyword.
pub const SUBJECT_TO: &str = "SUBJECT TO";
/// Bounds section keyword.
pub const BOUNDS: &str = "BOUNDS";
/// End-of-model marker.
pub const END: &str = "END";

/// A model paired with the labels to render it with.
#[derive(Debug, Clone, Copy)]
pub struct ModelText<'a> {
    /// Model to render.
    pub model: &'a LinearModel,
    /// Wording for the non-keyword lines.
    pub labels: &'a Labels,
}

impl<'a> ModelText<'a> {
    /// Pair `model` with `labels`.
    pub fn new(model: &'a LinearModel, labels: &'a Labels) -> Self {
        ModelText { model, labels }
    }
}

impl fmt::Display for ModelText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let model = self.model;
        let labels = self.labels;
        let n = model.num_variables();
        let alpha = format_price(model.alpha);

        writeln!(f, "{}", labels.title)?;
        writeln!(f, "{} = {}", labels.alpha_level, alpha)?;
        writeln!(f)?;

        writeln!(f, "{}", MAXIMIZE)?;
        let objective: Vec<String> = model
            .objective
            .iter()
            .enumerate()
            .map(|(i, price)| format!("{} {}", format_price(*price), variable_token(i)))
            .collect();
        writeln!(f, "{}", objective.join(" + "))?;
        writeln!(f)?;

        writeln!(f, "{}", SUBJECT_TO)?;
        for (_, terms, capacity) in model.active_constraints() {
            let lhs: Vec<String> = terms
                .iter()
                .map(|(p, usage)| format!("{} {}", usage, variable_token(*p)))
                .collect();
            writeln!(f, "{} <= {}", lhs.join(" + "), capacity)?;
        }
        for (i, demand) in model.demand.iter().enumerate() {
            writeln!(f, "{} <= {}", variable_token(i), format_demand(*demand))?;
        }
        writeln!(f)?;

        writeln!(f, "{}", BOUNDS)?;
        for i in 0..n {
            writeln!(f, "{} >= 0", variable_token(i))?;
        }
        writeln!(f)?;
        writeln!(f, "{}", END)?;
        writeln!(f)?;

        writeln!(f, "{}", labels.variables)?;
        for (i, name) in model.variable_names.iter().enumerate() {
            writeln!(f, "{} = {}", variable_token(i), name)?;
        }
        writeln!(f)?;

        writeln!(f, "{} (α = {}):", labels.alpha_cut_values, alpha)?;
        for (i, name) in model.variable_names.iter().enumerate() {
            writeln!(
                f,
                "{}: {}={}, {}={}",
                name,
                labels.demand,
                format_demand(model.demand[i]),
                labels.price,
                format_price(model.objective[i]),
            )?;
        }
        Ok(())
    }
}

impl fmt::Display for LinearModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&ModelText::new(self, &Labels::default()), f)
    }
}

/// Render `model` with `labels`.
pub fn render(model: &LinearModel, labels: &Labels) -> String {
    ModelText::new(model, labels).to_string()
}

/// Two decimals, ties rounded away from zero.
pub(crate) fn format_price(value: f64) -> String {
    format!("{:.2}", round_half_away(value, 2))
}

/// Whole units, ties rounded away from zero.
pub(crate) fn format_demand(value: f64) -> String {
    format!("{:.0}", round_half_away(value, 0))
}

/// Round to `decimals` places with ties away from zero. `{:.N}` alone
/// rounds exact ties to even.
fn round_half_away(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, Resource};

    #[test]
    fn test_format_demand_rounds_half_away() {
        assert_eq!(format_demand(2.5), "3");
        assert_eq!(format_demand(3.5), "4");
        assert_eq!(format_demand(134.4), "134");
        assert_eq!(format_demand(-2.5), "-3");
        // Small negatives keep their sign, as the planning form shows them.
        assert_eq!(format_demand(-0.4), "-0");
        assert_eq!(format_demand(0.4), "0");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(32.5), "32.50");
        assert_eq!(format_price(0.0), "0.00");
        assert_eq!(format_price(29.625), "29.63");
        assert_eq!(format_price(0.125), "0.13");
        assert_eq!(format_price(-0.125), "-0.13");
    }

    #[test]
    fn test_non_finite_passes_through() {
        assert_eq!(format_price(f64::NAN), "NaN");
        assert_eq!(format_demand(f64::INFINITY), "inf");
    }

    #[test]
    fn test_render_single_product() {
        let products = vec![Product::new("Gear", (8.0, 10.0, 12.0), (4.0, 5.0, 6.0), vec![1.5])];
        let resources = vec![Resource::new("Lathe", 12.5)];
        let model = LinearModel::from_parts(&products, &resources, 1.0);

        let expected = "\
Linear Programming Model – Production Optimization
Alpha level α = 1.00

MAXIMIZE
5.00 X1

SUBJECT TO
1.5 X1 <= 12.5
X1 <= 10

BOUNDS
X1 >= 0

END

Variable definitions:
X1 = Gear

α-cut values (α = 1.00):
Gear: Demand=10, Price=5.00
";
        assert_eq!(render(&model, &Labels::default()), expected);
        assert_eq!(model.to_string(), expected);
    }

    #[test]
    fn test_render_empty_model() {
        let model = LinearModel::from_parts(&[], &[], 0.5);
        let text = render(&model, &Labels::default());
        assert!(text.contains("MAXIMIZE\n\n\nSUBJECT TO\n\nBOUNDS\n\nEND\n"));
    }
}
