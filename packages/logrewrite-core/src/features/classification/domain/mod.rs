//! Domain models for expression classification

use serde::{Deserialize, Serialize};

/// Evaluation cost of an expression, as far as a log call is concerned
///
/// `Cheap` means evaluating it eagerly is harmless even when the message is
/// discarded. Anything the classifier cannot prove cheap is `Expensive`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cost {
    Cheap,
    Expensive,
}

impl Cost {
    pub fn is_cheap(&self) -> bool {
        matches!(self, Self::Cheap)
    }

    pub fn is_expensive(&self) -> bool {
        matches!(self, Self::Expensive)
    }

    /// Combine two costs: expensive wins
    pub fn combine(self, other: Cost) -> Cost {
        if self.is_expensive() || other.is_expensive() {
            Cost::Expensive
        } else {
            Cost::Cheap
        }
    }
}
