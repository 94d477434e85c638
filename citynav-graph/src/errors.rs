use thiserror::Error;

#[derive(Error, Copy, Clone, PartialEq, Eq, Debug)]
pub enum PathError {
    #[error("Target node is not reachable from the start node")]
    Unreachable,

    #[error("No edge in the graph matches a predecessor link (graph modified after the search?)")]
    MissingEdge,
}
