//! Search entry point and expansion loop.

use hexdozer_core::{Facing, Hex};
use log::debug;

use crate::config::SearchConfig;
use crate::dominance::{BestTable, CostBound, Verdict};
use crate::error::PlanError;
use crate::expand::expand;
use crate::frontier::Frontier;
use crate::observer::SearchObserver;
use crate::ordering::{FrontierKey, FrontierOrdering};
use crate::path::Path;
use crate::traits::{HeuristicBoard, MovementProfile};

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Termination {
    /// Every candidate was expanded or pruned.
    FrontierExhausted,
    /// [`SearchConfig::max_expansions`] was reached first.
    ExpansionLimit,
}

/// Counters collected over one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    pub expansions: u64,
    pub children: u64,
    pub admitted: u64,
    /// Admitted children that displaced a recorded path.
    pub replaced: u64,
    pub infeasible: u64,
    pub dominated: u64,
    pub over_bound: u64,
    /// Times the best route improved.
    pub solutions: u64,
    pub frontier_high_water: usize,
    /// Cells in the per-cell table when the search ended.
    pub visited_cells: usize,
}

/// Result of [`Planner::plan`].
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best route found, if any reached the destination.
    pub best: Option<Path>,
    /// Final cost bound; equals the best route's total cost when one exists
    /// and no tighter initial bound was configured.
    pub bound: CostBound,
    pub termination: Termination,
    pub stats: SearchStats,
}

impl SearchOutcome {
    /// Whether a route to the destination was found.
    #[inline]
    pub fn found(&self) -> bool {
        self.best.is_some()
    }
}

/// Route planner. Holds only configuration; every search owns its state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner {
    config: SearchConfig,
}

impl Planner {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Plan a route for `unit` from `start` facing `facing` to `dest`.
    ///
    /// # Errors
    ///
    /// Returns [`PlanError::InvalidDestination`] or
    /// [`PlanError::InvalidStart`] when either cell is off the board. No
    /// search step is taken in that case.
    pub fn plan<B, M>(
        &self,
        board: &B,
        unit: &M,
        start: Hex,
        facing: Facing,
        dest: Hex,
    ) -> Result<SearchOutcome, PlanError>
    where
        B: HeuristicBoard + ?Sized,
        M: MovementProfile<B> + ?Sized,
    {
        self.plan_observed(board, unit, start, facing, dest, &mut ())
    }

    /// Like [`plan`](Self::plan), reporting progress to `observer`.
    ///
    /// # Errors
    ///
    /// Same as [`plan`](Self::plan).
    pub fn plan_observed<B, M, O>(
        &self,
        board: &B,
        unit: &M,
        start: Hex,
        facing: Facing,
        dest: Hex,
        observer: &mut O,
    ) -> Result<SearchOutcome, PlanError>
    where
        B: HeuristicBoard + ?Sized,
        M: MovementProfile<B> + ?Sized,
        O: SearchObserver + ?Sized,
    {
        if !board.contains(dest) {
            return Err(PlanError::InvalidDestination { dest });
        }
        if !board.contains(start) {
            return Err(PlanError::InvalidStart { start });
        }

        let ordering = FrontierOrdering::new(board, dest);
        let mut table = BestTable::new();
        let mut frontier = Frontier::new();
        let mut bound = CostBound::new(self.config.initial_bound);
        let mut best: Option<(FrontierKey, Path)> = None;
        let mut stats = SearchStats::default();

        let root = Path::new(start, facing);
        let root_key = ordering.key(&root);
        table.record(root.cell(), root_key);
        frontier.push(root_key, root);

        debug!("planning {start} {facing} -> {dest}");

        let termination = loop {
            if self
                .config
                .max_expansions
                .is_some_and(|limit| stats.expansions >= limit)
            {
                break Termination::ExpansionLimit;
            }
            let Some((cur_key, cur)) = frontier.pop() else {
                break Termination::FrontierExhausted;
            };
            stats.expansions += 1;
            observer.expanded(&cur, cur_key);

            for child in expand(&cur, board, unit) {
                stats.children += 1;
                let verdict = table.filter(&child, &ordering, bound);
                observer.decided(&child, &verdict);
                match verdict {
                    Verdict::Admitted { key, replaced } => {
                        stats.admitted += 1;
                        if replaced.is_some() {
                            stats.replaced += 1;
                        }
                        frontier.push(key, child);
                    }
                    Verdict::Infeasible => stats.infeasible += 1,
                    Verdict::Dominated => stats.dominated += 1,
                    Verdict::OverBound => stats.over_bound += 1,
                }
            }

            let improves = best.as_ref().is_none_or(|(best_key, _)| cur_key < *best_key);
            if cur.cell() == dest && improves {
                bound.tighten(cur.total_cost());
                stats.solutions += 1;
                debug!(
                    "route to {dest}: cost {} ({} mp + {} leveling), {} hexes, bound {:?}",
                    cur.total_cost(),
                    cur.mp_used(),
                    cur.leveling_cost(),
                    cur.hexes_moved(),
                    bound.limit()
                );
                observer.improved(&cur, bound);
                best = Some((cur_key, cur));
            }
        };

        stats.frontier_high_water = frontier.high_water();
        stats.visited_cells = table.len();
        debug!(
            "search ended ({termination:?}) after {} expansions, {} cells visited",
            stats.expansions, stats.visited_cells
        );

        Ok(SearchOutcome {
            best: best.map(|(_, p)| p),
            bound,
            termination,
            stats,
        })
    }
}

/// Find a route for `unit` from `start` facing `facing` to `dest` with the
/// default configuration.
///
/// When no route exists the returned path is empty: it stands at `start`
/// with no moves. An empty path is also returned when `start == dest`.
///
/// # Errors
///
/// Returns [`PlanError::InvalidDestination`] when `dest` is off the board
/// and [`PlanError::InvalidStart`] when `start` is.
pub fn find_path<B, M>(
    board: &B,
    unit: &M,
    start: Hex,
    facing: Facing,
    dest: Hex,
) -> Result<Path, PlanError>
where
    B: HeuristicBoard + ?Sized,
    M: MovementProfile<B> + ?Sized,
{
    let outcome = Planner::default().plan(board, unit, start, facing, dest)?;
    Ok(outcome.best.unwrap_or_else(|| Path::new(start, facing)))
}
