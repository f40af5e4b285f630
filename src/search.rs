use crate::cost_grid::CostGrid;
use crate::frontier::Frontier;
use crate::waypoint::{PathChain, Waypoint};
use crate::{COST_CEILING, IMPASSABLE};
use grid_util::point::Point;
use log::info;

/// Estimates the cost of travelling between two cells as the Euclidean
/// straight-line distance. Admissible and consistent for movement over the
/// 8-neighbourhood, and also used as the exact cost of a single step, so a
/// path's accumulated cost is its geometric length plus the costs of the
/// cells it enters.
pub fn estimate_cost(from: Point, to: Point) -> f32 {
    let dx = (to.x - from.x) as f32;
    let dy = (to.y - from.y) as f32;
    (dx * dx + dy * dy).sqrt()
}

/// Computes a minimum-cost path between the start and finish cells of the
/// given grid. Returns the chain ending in the waypoint on the finish cell,
/// to be walked back to the start, or [None] if the finish cannot be
/// reached. Candidates accumulating [COST_CEILING] or more are discarded.
pub fn compute_path(grid: &CostGrid) -> Option<PathChain> {
    compute_path_bounded(grid, COST_CEILING)
}

/// [compute_path] with an explicit cost ceiling: a candidate step whose
/// accumulated cost reaches `cost_ceiling` is dropped instead of offered to
/// the frontier, so a low ceiling can make every finish unreachable.
pub fn compute_path_bounded(grid: &CostGrid, cost_ceiling: f32) -> Option<PathChain> {
    let start = grid.start();
    let finish = grid.finish();

    // With a fresh component index a split grid fails fast. A dirty index
    // proves nothing either way, so the search just runs.
    if !grid.components_dirty() && grid.unreachable(&start, &finish) {
        info!("{} is not reachable from {}", finish, start);
        return None;
    }

    let mut frontier = Frontier::new();
    let mut root = Waypoint::new(start, None);
    root.set_costs(0.0, estimate_cost(start, finish));
    frontier.offer(root);

    while let Some(best_id) = frontier.best_open() {
        let best = frontier.node(best_id);
        if best.location() == finish {
            return Some(frontier.into_chain(best_id));
        }
        for next in best.location().moore_neighborhood() {
            // The bounds error doubles as the outside-the-grid filter.
            let Ok(cell_cost) = grid.cost_at(next) else {
                continue;
            };
            if cell_cost == IMPASSABLE || frontier.is_closed(next) {
                continue;
            }
            let travelled =
                best.travelled() + estimate_cost(best.location(), next) + cell_cost as f32;
            if travelled >= cost_ceiling {
                continue;
            }
            let mut candidate = Waypoint::new(next, Some(best_id));
            candidate.set_costs(travelled, estimate_cost(next, finish));
            frontier.offer(candidate);
        }
        frontier.close(best.location());
    }

    info!("open set exhausted before reaching {}", finish);
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::SQRT_2;

    #[test]
    fn heuristic_is_euclidean() {
        assert_eq!(estimate_cost(Point::new(0, 0), Point::new(3, 4)), 5.0);
        assert_eq!(estimate_cost(Point::new(2, 2), Point::new(2, 2)), 0.0);
        assert!((estimate_cost(Point::new(0, 0), Point::new(1, 1)) - SQRT_2).abs() < 1e-6);
        // Symmetric.
        assert_eq!(
            estimate_cost(Point::new(-2, 5), Point::new(1, 1)),
            estimate_cost(Point::new(1, 1), Point::new(-2, 5))
        );
    }

    #[test]
    fn straight_line_across_open_grid() {
        let grid = CostGrid::new(5, 5).unwrap();
        let chain = compute_path(&grid).unwrap();
        assert_eq!(chain.len(), 5);
        assert!((chain.total_cost() - 4.0).abs() < 1e-5);
        let points = chain.points();
        assert_eq!(points.first(), Some(&Point::new(0, 2)));
        assert_eq!(points.last(), Some(&Point::new(4, 2)));
    }

    #[test]
    fn wall_blocks_all_routes() {
        let mut grid = CostGrid::new(5, 5).unwrap();
        for y in 0..5 {
            grid.set_cost(Point::new(2, y), IMPASSABLE).unwrap();
        }
        grid.update();
        assert!(compute_path(&grid).is_none());
    }

    #[test]
    fn wall_blocks_all_routes_with_stale_components() {
        // Without the component fast-fail the loop itself must exhaust.
        let mut grid = CostGrid::new(5, 5).unwrap();
        for y in 0..5 {
            grid.set_cost(Point::new(2, y), IMPASSABLE).unwrap();
        }
        assert!(grid.components_dirty());
        assert!(compute_path(&grid).is_none());
    }

    #[test]
    fn low_ceiling_prunes_every_step() {
        let mut grid = CostGrid::new(3, 3).unwrap();
        for x in 0..3 {
            for y in 0..3 {
                grid.set_cost(Point::new(x, y), 2).unwrap();
            }
        }
        assert!(compute_path_bounded(&grid, 1.0).is_none());
        // The same grid is solvable under the default ceiling.
        assert!(compute_path(&grid).is_some());
    }

    #[test]
    fn start_equals_finish() {
        let mut grid = CostGrid::new(3, 3).unwrap();
        grid.set_start(Point::new(1, 1));
        grid.set_finish(Point::new(1, 1));
        let chain = compute_path(&grid).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.total_cost(), 0.0);
        assert_eq!(chain.points(), vec![Point::new(1, 1)]);
    }

    #[test]
    fn detour_around_obstacle() {
        let mut grid = CostGrid::new(3, 3).unwrap();
        grid.set_start(Point::new(0, 0));
        grid.set_finish(Point::new(2, 2));
        grid.set_cost(Point::new(1, 1), IMPASSABLE).unwrap();
        grid.update();
        let chain = compute_path(&grid).unwrap();
        assert_eq!(chain.len(), 4);
        assert!((chain.total_cost() - (2.0 + SQRT_2)).abs() < 1e-5);
        assert!(!chain.points().contains(&Point::new(1, 1)));
    }

    #[test]
    fn expensive_cells_are_avoided() {
        let mut grid = CostGrid::new(3, 3).unwrap();
        grid.set_start(Point::new(0, 1));
        grid.set_finish(Point::new(2, 1));
        grid.set_cost(Point::new(1, 1), 10).unwrap();
        let chain = compute_path(&grid).unwrap();
        // Straight through the middle would cost 12.
        assert!((chain.total_cost() - 2.0 * SQRT_2).abs() < 1e-5);
        assert!(!chain.points().contains(&Point::new(1, 1)));
    }

    #[test]
    fn finish_cell_cost_is_paid() {
        let mut grid = CostGrid::new(2, 1).unwrap();
        grid.set_cost(Point::new(1, 0), 5).unwrap();
        let chain = compute_path(&grid).unwrap();
        assert!((chain.total_cost() - 6.0).abs() < 1e-5);
    }

    #[test]
    fn start_cell_cost_is_not_paid() {
        // Only cells stepped onto contribute their cost.
        let mut grid = CostGrid::new(2, 1).unwrap();
        grid.set_cost(Point::new(0, 0), 50).unwrap();
        let chain = compute_path(&grid).unwrap();
        assert!((chain.total_cost() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn blocked_start_can_still_step_off() {
        let mut grid = CostGrid::new(3, 1).unwrap();
        grid.set_cost(Point::new(0, 0), IMPASSABLE).unwrap();
        grid.update();
        let chain = compute_path(&grid).unwrap();
        assert_eq!(chain.len(), 3);
    }

    #[test]
    fn blocked_finish_is_never_entered() {
        let mut grid = CostGrid::new(3, 1).unwrap();
        grid.set_cost(Point::new(2, 0), IMPASSABLE).unwrap();
        grid.update();
        assert!(compute_path(&grid).is_none());
    }

    #[test]
    fn path_is_connected_and_ends_on_the_endpoints() {
        let mut grid = CostGrid::new(6, 6).unwrap();
        grid.set_start(Point::new(0, 5));
        grid.set_finish(Point::new(5, 0));
        for y in 1..6 {
            grid.set_cost(Point::new(3, y), IMPASSABLE).unwrap();
        }
        grid.update();
        let chain = compute_path(&grid).unwrap();
        let points = chain.points();
        assert_eq!(points.first(), Some(&Point::new(0, 5)));
        assert_eq!(points.last(), Some(&Point::new(5, 0)));
        for pair in points.windows(2) {
            let dx = (pair[1].x - pair[0].x).abs();
            let dy = (pair[1].y - pair[0].y).abs();
            assert!(dx <= 1 && dy <= 1 && (dx, dy) != (0, 0));
        }
    }
}
