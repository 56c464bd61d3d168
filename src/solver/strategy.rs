//! Search options
//!
//! Bundles the cost policy and neighbor policy a search runs with.

use super::cost::{CostModel, IncrementScope, VowelRule};
use crate::graph::NeighborMode;

/// Policies for one search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchOptions {
    pub cost: CostModel,
    pub neighbors: NeighborMode,
}

impl SearchOptions {
    #[must_use]
    pub const fn new(cost: CostModel, neighbors: NeighborMode) -> Self {
        Self { cost, neighbors }
    }

    /// Trailing-pair costs over raw neighbor lists
    ///
    /// Every differing letter counts regardless of vowels, the increment
    /// ignores the edge being scored, and the start word is never marked
    /// visited up front.
    #[must_use]
    pub const fn legacy() -> Self {
        Self::new(CostModel::legacy(), NeighborMode::Raw)
    }

    /// Short human-readable label, e.g. `per-edge/all/distinct`
    #[must_use]
    pub fn label(&self) -> String {
        let scope = match self.cost.scope {
            IncrementScope::PerEdge => "per-edge",
            IncrementScope::TrailingPair => "trailing-pair",
        };
        let vowels = match self.cost.vowels {
            VowelRule::CountAllDifferingPositions => "all",
            VowelRule::VowelsOnly => "vowels-only",
        };
        let neighbors = match self.neighbors {
            NeighborMode::Distinct => "distinct",
            NeighborMode::Raw => "raw",
        };
        format!("{scope}/{vowels}/{neighbors}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = SearchOptions::default();
        assert_eq!(options.cost, CostModel::default());
        assert_eq!(options.neighbors, NeighborMode::Distinct);
        assert_eq!(options.label(), "per-edge/all/distinct");
    }

    #[test]
    fn legacy_options() {
        let options = SearchOptions::legacy();
        assert_eq!(options.cost.scope, IncrementScope::TrailingPair);
        assert_eq!(options.neighbors, NeighborMode::Raw);
        assert_eq!(options.label(), "trailing-pair/all/raw");
    }
}
