//! Point rules: the cost catalog and the per-card evaluator.
//!
//! `PointRules` is configuration, not global state. Every pricing path
//! takes the rules it should use, so tests and alternate game modes can
//! substitute their own catalog.

pub mod catalog;
pub mod evaluator;

pub use catalog::{PointRules, TierRules};
pub use evaluator::{evaluate_card_cost, CardCost, CostEvaluator};
