use crate::error::{GridError, Result};
use crate::IMPASSABLE;
use core::fmt;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use log::info;
use petgraph::unionfind::UnionFind;

/// [CostGrid] is a dense map of per-cell traversal costs with a designated
/// start and finish cell. A cost of [IMPASSABLE] blocks a cell outright;
/// every other value is added to the accumulated cost of a path stepping
/// onto the cell. In addition to the raw costs, a [UnionFind] structure
/// tracks the connected components of passable cells so that searches on a
/// split grid can fail fast instead of flooding the whole component.
///
/// The grid is read-only for the duration of a search; mutation and search
/// must not overlap.
#[derive(Clone, Debug)]
pub struct CostGrid {
    cells: SimpleGrid<u32>,
    start: Point,
    finish: Point,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl CostGrid {
    /// Creates a grid with all costs zero. Start and finish default to the
    /// left and right edge of the middle row until set explicitly.
    pub fn new(width: usize, height: usize) -> Result<CostGrid> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }
        let mut grid = CostGrid {
            cells: SimpleGrid::new(width, height, 0),
            start: Point::new(0, (height / 2) as i32),
            finish: Point::new(width as i32 - 1, (height / 2) as i32),
            components: UnionFind::new(width * height),
            components_dirty: false,
        };
        grid.generate_components();
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.cells.width
    }

    pub fn height(&self) -> usize {
        self.cells.height
    }

    /// True iff the location lies within the grid bounds.
    pub fn contains(&self, loc: Point) -> bool {
        loc.x >= 0
            && loc.y >= 0
            && (loc.x as usize) < self.cells.width
            && (loc.y as usize) < self.cells.height
    }

    fn check_bounds(&self, loc: Point) -> Result<()> {
        if self.contains(loc) {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                x: loc.x,
                y: loc.y,
                width: self.cells.width,
                height: self.cells.height,
            })
        }
    }

    /// The stored cost of the cell at `loc`.
    pub fn cost_at(&self, loc: Point) -> Result<u32> {
        self.check_bounds(loc)?;
        Ok(self.cells.get(loc.x as usize, loc.y as usize))
    }

    /// Stores a cost value. Opening a cell joins it to the neighbouring
    /// components on the spot; blocking one only flags the components as
    /// dirty, since a split cannot be undone incrementally.
    pub fn set_cost(&mut self, loc: Point, cost: u32) -> Result<()> {
        self.check_bounds(loc)?;
        let was_passable = self.cells.get(loc.x as usize, loc.y as usize) != IMPASSABLE;
        self.cells.set(loc.x as usize, loc.y as usize, cost);
        if cost == IMPASSABLE {
            if was_passable {
                self.components_dirty = true;
            }
        } else {
            let cell_ix = self.index(loc);
            let neighbours = self
                .passable_neighbours(loc)
                .into_iter()
                .map(|p| self.index(p))
                .collect::<Vec<usize>>();
            for ix in neighbours {
                self.components.union(cell_ix, ix);
            }
        }
        Ok(())
    }

    /// True iff the location is in bounds and not blocked.
    pub fn is_passable(&self, loc: Point) -> bool {
        self.contains(loc) && self.cells.get(loc.x as usize, loc.y as usize) != IMPASSABLE
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn set_start(&mut self, loc: Point) {
        self.start = loc;
    }

    pub fn finish(&self) -> Point {
        self.finish
    }

    pub fn set_finish(&mut self, loc: Point) {
        self.finish = loc;
    }

    fn index(&self, loc: Point) -> usize {
        loc.y as usize * self.cells.width + loc.x as usize
    }

    fn passable_neighbours(&self, loc: Point) -> Vec<Point> {
        loc.moore_neighborhood()
            .into_iter()
            .filter(|p| self.is_passable(*p))
            .collect::<Vec<Point>>()
    }

    /// Whether the component index is stale. Mutators that may split a
    /// component set this; [update](Self::update) clears it.
    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up passable grid
    /// neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!("Generating connected components");
        let w = self.cells.width;
        let h = self.cells.height;
        self.components = UnionFind::new(w * h);
        self.components_dirty = false;
        for x in 0..w {
            for y in 0..h {
                let point = Point::new(x as i32, y as i32);
                if !self.is_passable(point) {
                    continue;
                }
                let parent_ix = self.index(point);
                // Forward half of the 8-neighbourhood; the backward half was
                // already linked when those cells were visited.
                let neighbours = [
                    Point::new(point.x + 1, point.y),
                    Point::new(point.x, point.y + 1),
                    Point::new(point.x + 1, point.y + 1),
                    Point::new(point.x + 1, point.y - 1),
                ]
                .into_iter()
                .filter(|p| self.is_passable(*p))
                .map(|p| self.index(p))
                .collect::<Vec<usize>>();
                for ix in neighbours {
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }

    /// Retrieves the component id a given passable [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.index(*point))
    }

    /// Checks if `goal` is provably cut off from `start`: both cells are
    /// passable yet lie in different connected components. Conservative for
    /// blocked or out-of-bounds start cells, since the search may still step
    /// off one. Stale while the component index is dirty.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if start == goal {
            return false;
        }
        if !self.is_passable(*goal) {
            return true;
        }
        if !self.is_passable(*start) {
            return false;
        }
        !self
            .components
            .equiv(self.index(*start), self.index(*goal))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
}

impl fmt::Display for CostGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.cells.height {
            let values = (0..self.cells.width)
                .map(|x| {
                    let cost = self.cells.get(x, y);
                    if cost == IMPASSABLE {
                        -1
                    } else {
                        cost as i64
                    }
                })
                .collect::<Vec<i64>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
