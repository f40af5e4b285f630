//! # grid_astar
//!
//! Grid-based A* pathfinding over weighted cost maps. Every cell of a
//! [CostGrid] carries a non-negative traversal cost or is marked
//! [IMPASSABLE]; the search moves over the 8-neighbourhood of each cell and
//! is guided by the Euclidean straight-line heuristic, which doubles as the
//! per-step movement cost. Pre-computes
//! [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! to avoid flood-filling behaviour if no path exists.
//!
//! The sole entry point is [compute_path]: it returns the finish
//! [Waypoint] of a minimum-cost path as a [PathChain] that can be walked
//! back to the start, or [None] when the finish cannot be reached.
pub mod cost_grid;
pub mod error;
pub mod frontier;
pub mod search;
pub mod waypoint;

pub use cost_grid::CostGrid;
pub use error::{GridError, Result};
pub use frontier::Frontier;
pub use search::{compute_path, compute_path_bounded, estimate_cost};
pub use waypoint::{PathChain, Waypoint, WaypointId};

/// Cell cost marking a cell that can never be entered.
pub const IMPASSABLE: u32 = u32::MAX;

/// Maximum cut-off limit for accumulated path costs. A candidate step whose
/// accumulated cost reaches this limit is discarded rather than tracked.
pub const COST_CEILING: f32 = 1e6;
