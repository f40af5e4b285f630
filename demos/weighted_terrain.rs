use grid_astar::{compute_path, CostGrid};
use grid_util::point::Point;

// Costs steer the search without blocking it outright: a column of
// expensive swamp cells separates start and finish, with a single cheap
// ford at the top. The cheapest path detours through the ford even though
// wading straight across would be shorter.
fn main() {
    let mut grid = CostGrid::new(7, 5).unwrap();
    for y in 1..5 {
        grid.set_cost(Point::new(3, y), 8).unwrap();
    }
    println!("{}", grid);
    let chain = compute_path(&grid).expect("the grid has no impassable cells");
    println!("Total cost: {:.2}", chain.total_cost());
    for p in chain.points() {
        println!("{:?}", p);
    }
}
