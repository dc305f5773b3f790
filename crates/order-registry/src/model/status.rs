use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Fulfillment status of an order.
///
/// Orders start at `Processing` and move forward one stage at a time; `Delivered` is
/// terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OrderStatus {
    Processing,
    Delivering,
    Delivered,
}

impl OrderStatus {
    /// The stage after this one, or `None` for `Delivered`.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Processing => Some(Self::Delivering),
            Self::Delivering => Some(Self::Delivered),
            Self::Delivered => None,
        }
    }

    pub const fn is_terminal(self) -> bool {
        self.next().is_none()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Processing => "PROCESSING",
            Self::Delivering => "DELIVERING",
            Self::Delivered => "DELIVERED",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
