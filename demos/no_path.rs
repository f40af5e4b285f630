use grid_astar::{compute_path, CostGrid, IMPASSABLE};
use grid_util::point::Point;

// A solid wall splits the grid in two, so no path exists and the search
// reports that with an explicit None.
fn main() {
    let mut grid = CostGrid::new(5, 5).unwrap();
    for y in 0..5 {
        grid.set_cost(Point::new(2, y), IMPASSABLE).unwrap();
    }
    grid.update();
    println!("{}", grid);
    match compute_path(&grid) {
        Some(chain) => println!("Unexpected path of cost {}", chain.total_cost()),
        None => println!("No path exists between {:?} and {:?}", grid.start(), grid.finish()),
    }
}
