use hexdozer_core::Hex;
use thiserror::Error;

/// Malformed planner input, detected before the search starts.
///
/// An unreachable destination is not an error: the planner then returns
/// an empty path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// The destination lies outside the board.
    #[error("destination {dest} is outside the board")]
    InvalidDestination { dest: Hex },
    /// The start cell lies outside the board.
    #[error("start {start} is outside the board")]
    InvalidStart { start: Hex },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cell() {
        let e = PlanError::InvalidDestination {
            dest: Hex::new(9, -1),
        };
        assert_eq!(e.to_string(), "destination (9, -1) is outside the board");
        let e = PlanError::InvalidStart {
            start: Hex::new(0, 40),
        };
        assert_eq!(e.to_string(), "start (0, 40) is outside the board");
    }
}
