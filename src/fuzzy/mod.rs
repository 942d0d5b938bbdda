//! Triangular fuzzy numbers and their alpha-cut reduction.
//!
//! A fuzzy quantity enters the crisp model through exactly one rule:
//! take the alpha-cut interval and use its midpoint.

pub mod number;

pub use number::{alpha_cut, crisp, AlphaCut, FuzzyNumber};
