//! Per-cell dominance filter and the global cost bound.

use std::collections::HashMap;

use hexdozer_core::Hex;
use log::trace;

use crate::ordering::{FrontierKey, FrontierOrdering};
use crate::path::Path;
use crate::traits::HeuristicBoard;

/// Upper bound on the total cost of admissible candidates.
///
/// Starts infinite and only ever tightens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostBound(Option<i32>);

impl CostBound {
    /// No bound.
    pub const INFINITE: Self = Self(None);

    /// A bound at `limit`, or infinite for `None`.
    #[inline]
    pub const fn new(limit: Option<i32>) -> Self {
        Self(limit)
    }

    /// The finite limit, if any.
    #[inline]
    pub fn limit(self) -> Option<i32> {
        self.0
    }

    #[inline]
    pub fn is_infinite(self) -> bool {
        self.0.is_none()
    }

    /// Whether a candidate of total cost `cost` is strictly under the bound.
    #[inline]
    pub fn admits(self, cost: i32) -> bool {
        self.0.is_none_or(|limit| cost < limit)
    }

    /// Lower the bound to `cost` if that is tighter. Returns whether the
    /// bound changed.
    pub fn tighten(&mut self, cost: i32) -> bool {
        if self.0.is_some_and(|limit| limit <= cost) {
            return false;
        }
        self.0 = Some(cost);
        true
    }
}

/// Outcome of running a candidate through [`BestTable::filter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Recorded as the best path into its cell; goes to the frontier.
    Admitted {
        key: FrontierKey,
        /// Key of the entry it displaced, if the cell was already visited.
        replaced: Option<FrontierKey>,
    },
    /// Off the board, or an illegal step that leveling cannot fix.
    Infeasible,
    /// Does not strictly beat the recorded path into its cell.
    Dominated,
    /// Not strictly cheaper than the cost bound.
    OverBound,
}

impl Verdict {
    #[inline]
    pub fn is_admitted(&self) -> bool {
        matches!(self, Verdict::Admitted { .. })
    }
}

/// Key of the best known path into every visited cell.
///
/// Holds exactly one entry per cell. An entry is only ever replaced by a
/// path that strictly precedes it under the frontier ordering. The paths
/// themselves live in the frontier.
#[derive(Debug, Clone, Default)]
pub struct BestTable {
    entries: HashMap<Hex, FrontierKey>,
}

impl BestTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of visited cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Key of the best known path into `cell`.
    pub fn key_of(&self, cell: Hex) -> Option<FrontierKey> {
        self.entries.get(&cell).copied()
    }

    /// Record `key` for `cell` unconditionally, returning the key it
    /// displaced. Used to seed the table with the start path.
    pub fn record(&mut self, cell: Hex, key: FrontierKey) -> Option<FrontierKey> {
        self.entries.insert(cell, key)
    }

    /// Decide whether `child` is worth keeping, recording it if so.
    ///
    /// A child is admitted when all of the following hold:
    ///
    /// 1. its cell is on the board and its last step is legal, or the
    ///    target needs leveling;
    /// 2. its cell is unvisited, or it strictly precedes the recorded path;
    /// 3. its total cost is strictly under `bound`.
    pub fn filter<B>(&mut self, child: &Path, ordering: &FrontierOrdering<'_, B>, bound: CostBound) -> Verdict
    where
        B: HeuristicBoard + ?Sized,
    {
        let cell = child.cell();
        if !ordering.board().contains(cell) || !(child.last_step_legal() || child.requires_leveling()) {
            trace!("reject {cell}: infeasible");
            return Verdict::Infeasible;
        }

        let key = ordering.key(child);
        let replaced = self.key_of(cell);
        if replaced.is_some_and(|prev| key >= prev) {
            trace!("reject {cell}: dominated ({key:?} vs {replaced:?})");
            return Verdict::Dominated;
        }

        if !bound.admits(child.total_cost()) {
            trace!("reject {cell}: cost {} over bound {bound:?}", child.total_cost());
            return Verdict::OverBound;
        }

        trace!("admit {cell}: {key:?}");
        self.entries.insert(cell, key);
        Verdict::Admitted { key, replaced }
    }
}
