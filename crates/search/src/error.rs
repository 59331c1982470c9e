use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The board planner found a best leaf but no ordering re-derives its
    /// placements.
    #[error("no branch reproduces the planned placements")]
    NoBranch,
}
