/// Tunables for a [`Planner`](crate::Planner).
///
/// The default runs every search to frontier exhaustion with no bound
/// other than the routes it finds itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Stop after this many expansions. `None` means no limit.
    pub max_expansions: Option<u64>,
    /// Cost bound in force before any route is found. `None` is infinite.
    pub initial_bound: Option<i32>,
}

impl SearchConfig {
    /// Cap the number of expanded paths.
    pub fn with_max_expansions(mut self, n: u64) -> Self {
        self.max_expansions = Some(n);
        self
    }

    /// Only admit candidates strictly cheaper than `bound`.
    pub fn with_initial_bound(mut self, bound: i32) -> Self {
        self.initial_bound = Some(bound);
        self
    }
}
