//! Crisp linear model built from fuzzy inputs.
//!
//! After defuzzification at a fixed alpha level the production problem is a
//! plain LP in standard inequality form:
//!
//! ```text
//! maximize    c'x
//! subject to  A x <= cap      (one row per resource)
//!             x <= d          (demand bounds)
//!             x >= 0
//! ```
//!
//! `A` is stored dense with shape (resources, products); products whose usage
//! vector is too short contribute zeros.

use nalgebra::{DMatrix, DVector};

use crate::model::{Product, Resource};

/// A defuzzified production LP.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel {
    /// Alpha level the model was reduced at.
    pub alpha: f64,
    /// Product names, one per variable.
    pub variable_names: Vec<String>,
    /// Resource names, one per usage row.
    pub resource_names: Vec<String>,
    /// Crisp unit prices (objective coefficients).
    pub objective: DVector<f64>,
    /// Per-unit resource usage, shape (resources, products).
    pub usage: DMatrix<f64>,
    /// Resolved resource capacities.
    pub capacities: DVector<f64>,
    /// Crisp demand upper bounds.
    pub demand: DVector<f64>,
}

impl LinearModel {
    /// Reduce the given active products and resources at level `alpha`.
    pub fn from_parts(products: &[Product], resources: &[Resource], alpha: f64) -> Self {
        let n = products.len();
        let m = resources.len();

        LinearModel {
            alpha,
            variable_names: products.iter().map(|p| p.name.clone()).collect(),
            resource_names: resources.iter().map(|r| r.name.clone()).collect(),
            objective: DVector::from_iterator(n, products.iter().map(|p| p.price.defuzzify(alpha))),
            usage: DMatrix::from_fn(m, n, |r, p| products[p].usage(r)),
            capacities: DVector::from_iterator(
                m,
                resources.iter().map(|r| r.capacity.resolve(alpha)),
            ),
            demand: DVector::from_iterator(n, products.iter().map(|p| p.demand.defuzzify(alpha))),
        }
    }

    /// Number of decision variables.
    pub fn num_variables(&self) -> usize {
        self.objective.len()
    }

    /// Number of resource rows, including ones with no usage.
    pub fn num_resources(&self) -> usize {
        self.capacities.len()
    }

    /// Token for variable `index` (0-based): `X1`, `X2`, ...
    pub fn variable(&self, index: usize) -> String {
        variable_token(index)
    }

    /// Terms `(variable index, coefficient)` of resource row `r` with a
    /// strictly positive coefficient.
    pub fn constraint_terms(&self, r: usize) -> Vec<(usize, f64)> {
        self.usage
            .row(r)
            .iter()
            .enumerate()
            .filter(|&(_, &u)| u > 0.0)
            .map(|(p, &u)| (p, u))
            .collect()
    }

    /// Resource rows that have at least one positive term, as
    /// `(row, terms, capacity)`.
    pub fn active_constraints(&self) -> impl Iterator<Item = (usize, Vec<(usize, f64)>, f64)> + '_ {
        (0..self.num_resources()).filter_map(move |r| {
            let terms = self.constraint_terms(r);
            if terms.is_empty() {
                None
            } else {
                Some((r, terms, self.capacities[r]))
            }
        })
    }

    /// Objective value `c'x` at a candidate plan.
    pub fn revenue(&self, plan: &DVector<f64>) -> f64 {
        self.objective.dot(plan)
    }

    /// Check a candidate plan against every constraint and bound.
    pub fn is_feasible(&self, plan: &DVector<f64>, tol: f64) -> bool {
        if plan.len() != self.num_variables() {
            return false;
        }
        let load = &self.usage * plan;
        let within_capacity = load
            .iter()
            .zip(self.capacities.iter())
            .all(|(l, c)| *l <= c + tol);
        let within_demand = plan
            .iter()
            .zip(self.demand.iter())
            .all(|(x, d)| *x >= -tol && *x <= d + tol);
        within_capacity && within_demand
    }
}

/// Variable token for 0-based index `i`.
pub(crate) fn variable_token(i: usize) -> String {
    format!("X{}", i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fuzzy::FuzzyNumber;

    fn two_by_two() -> (Vec<Product>, Vec<Resource>) {
        let products = vec![
            Product::new("P1", (50.0, 100.0, 150.0), (10.0, 20.0, 30.0), vec![3.0, 0.0]),
            Product::new("P2", (20.0, 40.0, 60.0), (5.0, 10.0, 15.0), vec![0.0, 2.0]),
        ];
        let resources = vec![Resource::new("R1", 100.0), Resource::new("R2", 50.0)];
        (products, resources)
    }

    #[test]
    fn test_from_parts_shapes() {
        let (products, resources) = two_by_two();
        let model = LinearModel::from_parts(&products, &resources, 1.0);
        assert_eq!(model.num_variables(), 2);
        assert_eq!(model.num_resources(), 2);
        assert_eq!(model.usage.shape(), (2, 2));
        assert_eq!(model.objective.as_slice(), &[20.0, 10.0]);
        assert_eq!(model.demand.as_slice(), &[100.0, 40.0]);
        assert_eq!(model.capacities.as_slice(), &[100.0, 50.0]);
    }

    #[test]
    fn test_short_usage_padded_with_zero() {
        let products = vec![Product::new("Short", 10.0, 1.0, vec![4.0])];
        let resources = vec![Resource::new("R1", 10.0), Resource::new("R2", 20.0)];
        let model = LinearModel::from_parts(&products, &resources, 0.5);
        assert_eq!(model.usage[(0, 0)], 4.0);
        assert_eq!(model.usage[(1, 0)], 0.0);
        assert_eq!(model.active_constraints().count(), 1);
    }

    #[test]
    fn test_constraint_terms_skip_non_positive() {
        let products = vec![
            Product::new("A", 1.0, 1.0, vec![2.0]),
            Product::new("B", 1.0, 1.0, vec![0.0]),
            Product::new("C", 1.0, 1.0, vec![-1.0]),
            Product::new("D", 1.0, 1.0, vec![0.5]),
        ];
        let resources = vec![Resource::new("R", 10.0)];
        let model = LinearModel::from_parts(&products, &resources, 0.0);
        assert_eq!(model.constraint_terms(0), vec![(0, 2.0), (3, 0.5)]);
    }

    #[test]
    fn test_fuzzy_capacity_resolved() {
        let (products, mut resources) = two_by_two();
        resources[0].capacity = FuzzyNumber::new(80.0, 100.0, 140.0).into();
        let model = LinearModel::from_parts(&products, &resources, 0.0);
        assert_eq!(model.capacities[0], 110.0);
    }

    #[test]
    fn test_feasibility_and_revenue() {
        let (products, resources) = two_by_two();
        let model = LinearModel::from_parts(&products, &resources, 1.0);

        let plan = DVector::from_vec(vec![30.0, 25.0]);
        assert!(model.is_feasible(&plan, 1e-9));
        assert_eq!(model.revenue(&plan), 850.0);

        // 3 * 40 = 120 > 100
        let over = DVector::from_vec(vec![40.0, 0.0]);
        assert!(!model.is_feasible(&over, 1e-9));

        let negative = DVector::from_vec(vec![-1.0, 0.0]);
        assert!(!model.is_feasible(&negative, 1e-9));
    }

    #[test]
    fn test_variable_tokens_are_one_based() {
        let (products, resources) = two_by_two();
        let model = LinearModel::from_parts(&products, &resources, 1.0);
        assert_eq!(model.variable(0), "X1");
        assert_eq!(model.variable(1), "X2");
        assert_eq!(model.variable_names, vec!["P1", "P2"]);
    }

    #[test]
    fn test_empty_model() {
        let model = LinearModel::from_parts(&[], &[], 0.5);
        assert_eq!(model.num_variables(), 0);
        assert_eq!(model.active_constraints().count(), 0);
    }
}
