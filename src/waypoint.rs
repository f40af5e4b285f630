use grid_util::point::Point;

/// Index of a [Waypoint] in the arena owned by its search.
pub type WaypointId = usize;

/// One step of a candidate path: a location, a link to the step it was
/// reached from, and the cost bookkeeping used to rank it for expansion.
/// Waypoints are plain values; once published to the frontier they are never
/// mutated, only superseded by a fresh waypoint for the same location.
#[derive(Clone, Copy, Debug)]
pub struct Waypoint {
    loc: Point,
    previous: Option<WaypointId>,
    travelled: f32,
    remaining: f32,
}

impl Waypoint {
    /// A waypoint with zeroed costs. `previous` is absent only for the
    /// search root.
    pub fn new(loc: Point, previous: Option<WaypointId>) -> Waypoint {
        Waypoint {
            loc,
            previous,
            travelled: 0.0,
            remaining: 0.0,
        }
    }

    /// Sets the exact cost from the start and the estimated cost to the
    /// finish in one call. Neither value is meaningful without the other.
    pub fn set_costs(&mut self, travelled: f32, remaining: f32) {
        self.travelled = travelled;
        self.remaining = remaining;
    }

    pub fn location(&self) -> Point {
        self.loc
    }

    /// The previous waypoint on the path, or [None] for the start of it.
    pub fn previous(&self) -> Option<WaypointId> {
        self.previous
    }

    /// Exact cost of travelling from the start to this waypoint along its
    /// chain. No estimates are included.
    pub fn travelled(&self) -> f32 {
        self.travelled
    }

    /// Estimated remaining cost of travelling to the finish.
    pub fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Selection key for the frontier: travelled plus remaining cost.
    pub fn total_cost(&self) -> f32 {
        self.travelled + self.remaining
    }
}

/// A completed search result: the waypoint arena together with the id of the
/// terminal waypoint sitting on the finish cell. Walking the `previous`
/// links from the terminal reaches the predecessor-less root.
#[derive(Clone, Debug)]
pub struct PathChain {
    nodes: Vec<Waypoint>,
    terminal: WaypointId,
}

impl PathChain {
    pub(crate) fn new(nodes: Vec<Waypoint>, terminal: WaypointId) -> PathChain {
        PathChain { nodes, terminal }
    }

    /// The waypoint on the finish cell.
    pub fn terminal(&self) -> &Waypoint {
        &self.nodes[self.terminal]
    }

    /// Exact cost of the whole path.
    pub fn total_cost(&self) -> f32 {
        self.terminal().travelled()
    }

    /// Walks the chain from the finish back to the start.
    pub fn iter_back(&self) -> impl Iterator<Item = &Waypoint> + '_ {
        itertools::unfold(Some(self.terminal), move |id| {
            id.map(|current| {
                let node = &self.nodes[current];
                *id = node.previous();
                node
            })
        })
    }

    /// The path cells in walking order, start first and finish last.
    pub fn points(&self) -> Vec<Point> {
        let mut path: Vec<Point> = self.iter_back().map(|wp| wp.location()).collect();
        path.reverse();
        path
    }

    /// Number of waypoints on the path, both endpoints included.
    pub fn len(&self) -> usize {
        self.iter_back().count()
    }
}
