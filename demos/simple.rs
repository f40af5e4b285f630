use grid_astar::{compute_path, CostGrid, IMPASSABLE};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ---
// where
// - # marks an impassable cell
// - S marks the start
// - E marks the end
fn main() {
    let mut grid = CostGrid::new(3, 3).unwrap();
    grid.set_cost(Point::new(1, 1), IMPASSABLE).unwrap();
    grid.set_start(Point::new(0, 0));
    grid.set_finish(Point::new(2, 2));
    grid.update();
    println!("{}", grid);
    if let Some(chain) = compute_path(&grid) {
        println!("A path has been found:");
        for p in chain.points() {
            println!("{:?}", p);
        }
    }
}
