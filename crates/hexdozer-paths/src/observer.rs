use crate::dominance::{CostBound, Verdict};
use crate::ordering::FrontierKey;
use crate::path::Path;

/// Hooks into a running search. Every method defaults to doing nothing.
///
/// Observers see the search as it happens and cannot influence it.
pub trait SearchObserver {
    /// `path` was taken off the frontier for expansion.
    fn expanded(&mut self, _path: &Path, _key: FrontierKey) {}

    /// The dominance filter ruled on `child`.
    fn decided(&mut self, _child: &Path, _verdict: &Verdict) {}

    /// `best` became the best route so far and the bound moved to `bound`.
    fn improved(&mut self, _best: &Path, _bound: CostBound) {}
}

impl SearchObserver for () {}

/// Observer that records every event, in order.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    pub events: Vec<SearchEvent>,
}

/// One event seen by an [`EventLog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchEvent {
    Expanded { key: FrontierKey, hexes_moved: u32 },
    Decided { verdict: Verdict },
    Improved { total_cost: i32, bound: CostBound },
}

impl SearchObserver for EventLog {
    fn expanded(&mut self, path: &Path, key: FrontierKey) {
        self.events.push(SearchEvent::Expanded {
            key,
            hexes_moved: path.hexes_moved(),
        });
    }

    fn decided(&mut self, _child: &Path, verdict: &Verdict) {
        self.events.push(SearchEvent::Decided { verdict: *verdict });
    }

    fn improved(&mut self, best: &Path, bound: CostBound) {
        self.events.push(SearchEvent::Improved {
            total_cost: best.total_cost(),
            bound,
        });
    }
}

impl EventLog {
    /// Bounds in the order they were set.
    pub fn bounds(&self) -> Vec<CostBound> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SearchEvent::Improved { bound, .. } => Some(*bound),
                _ => None,
            })
            .collect()
    }

    /// Number of expansions seen.
    pub fn expansions(&self) -> usize {
        self.events
            .iter()
            .filter(|e| matches!(e, SearchEvent::Expanded { .. }))
            .count()
    }
}
