//! Sort order policy.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SortError;

/// Direction every comparison is evaluated in.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// True when `a` must be placed after `b` under this order.
    ///
    /// Ascending: `a > b`. Descending: `a < b`. Equal elements are never out
    /// of order, and incomparable values (NaN) are treated as in order.
    #[inline]
    pub fn out_of_order<T: PartialOrd + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            SortOrder::Ascending => a > b,
            SortOrder::Descending => a < b,
        }
    }

    /// True when `data` is already ordered under this policy.
    pub fn is_sorted<T: PartialOrd>(self, data: &[T]) -> bool {
        data.windows(2).all(|w| !self.out_of_order(&w[0], &w[1]))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortOrder::Ascending),
            "desc" | "descending" => Ok(SortOrder::Descending),
            other => Err(SortError::InvalidConfig {
                reason: format!("unknown sort order '{other}'"),
            }),
        }
    }
}
