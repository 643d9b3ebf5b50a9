//! Comparison of a point total against a tier budget.

use serde::{Deserialize, Serialize};

/// Points left before the cap. Negative when over the limit.
#[must_use]
pub const fn remaining(total: u32, max_points: u32) -> i64 {
    max_points as i64 - total as i64
}

/// Strictly over: a total equal to the cap is still within it.
#[must_use]
pub const fn is_over_limit(total: u32, max_points: u32) -> bool {
    total > max_points
}

/// A total measured against a budget.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LimitStatus {
    pub total: u32,
    pub max_points: u32,
}

impl LimitStatus {
    #[must_use]
    pub const fn new(total: u32, max_points: u32) -> Self {
        Self { total, max_points }
    }

    #[must_use]
    pub const fn remaining(&self) -> i64 {
        remaining(self.total, self.max_points)
    }

    #[must_use]
    pub const fn is_over_limit(&self) -> bool {
        is_over_limit(self.total, self.max_points)
    }

    /// Surplus above the cap; 0 when within it.
    #[must_use]
    pub const fn over_by(&self) -> u32 {
        self.total.saturating_sub(self.max_points)
    }
}

impl std::fmt::Display for LimitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_over_limit() {
            write!(
                f,
                "Over limit: {} / {} ({} points over)",
                self.total,
                self.max_points,
                self.over_by()
            )
        } else {
            write!(
                f,
                "Within limit: {} / {} ({} points remaining)",
                self.total,
                self.max_points,
                self.remaining()
            )
        }
    }
}
