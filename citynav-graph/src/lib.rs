//! Weighted undirected graph with single-source shortest path search.

pub use self::errors::PathError;
pub use self::numtraits::{CheckedAdd, Zero};
pub use self::pathsearch::{reconstruct_path, GraphBuilder, GraphSolver, Leg, PathTree};
pub use self::store::Graph;

mod errors;
mod numtraits;
mod store;
pub mod pathsearch;
