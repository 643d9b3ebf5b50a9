//! Point aggregation and budget comparison.
//!
//! - `aggregate_breakdown`: cards -> `PointBreakdown`
//! - `max_points_for_tier` / `SaveDataTier`: tier -> budget
//! - `LimitStatus`: total vs. budget

pub mod breakdown;
pub mod limit;
pub mod tier;

pub use breakdown::{aggregate_breakdown, aggregate_with, PointBreakdown};
pub use limit::{is_over_limit, remaining, LimitStatus};
pub use tier::{max_points_for_tier, SaveDataTier};
