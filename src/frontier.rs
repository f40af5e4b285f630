use crate::waypoint::{PathChain, Waypoint, WaypointId};
use fxhash::{FxBuildHasher, FxHashMap};
use grid_util::point::Point;
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Priority-queue slot for one open waypoint. Slots are cheap snapshots: a
/// slot is stale once the open map no longer holds its id for the waypoint's
/// location, and stale slots are simply skipped when the queue is polled.
struct OpenSlot {
    total: OrderedFloat<f32>,
    travelled: OrderedFloat<f32>,
    id: WaypointId,
}

impl PartialEq for OpenSlot {
    fn eq(&self, other: &Self) -> bool {
        self.total.eq(&other.total) && self.travelled.eq(&other.travelled)
    }
}

impl Eq for OpenSlot {}

impl PartialOrd for OpenSlot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OpenSlot {
    fn cmp(&self, other: &Self) -> Ordering {
        // First orders per total cost, then creates subordering based on
        // travelled cost, favoring exploration of nodes further from the
        // start.
        match other.total.cmp(&self.total) {
            Ordering::Equal => self.travelled.cmp(&other.travelled),
            s => s,
        }
    }
}

/// Open and closed bookkeeping for a single A* invocation. The frontier owns
/// every waypoint created during the search in an arena; the open and closed
/// maps hold at most one arena id per location and are disjoint at all
/// times. A finished search converts the frontier into a [PathChain],
/// handing the arena to the caller.
pub struct Frontier {
    nodes: Vec<Waypoint>,
    open: FxIndexMap<Point, WaypointId>,
    closed: FxHashMap<Point, WaypointId>,
    queue: BinaryHeap<OpenSlot>,
}

impl Frontier {
    pub fn new() -> Frontier {
        Frontier {
            nodes: Vec::new(),
            open: FxIndexMap::default(),
            closed: FxHashMap::default(),
            queue: BinaryHeap::new(),
        }
    }

    /// Insert-or-replace for the open set. A candidate replaces the open
    /// waypoint at its location only when its travelled cost is strictly
    /// smaller; the comparison deliberately ignores the heuristic part,
    /// which is identical for two waypoints on the same location. A closed
    /// location is refused outright. Returns whether the frontier changed.
    pub fn offer(&mut self, node: Waypoint) -> bool {
        let loc = node.location();
        if self.closed.contains_key(&loc) {
            return false;
        }
        if let Some(&current) = self.open.get(&loc) {
            if self.nodes[current].travelled() <= node.travelled() {
                return false;
            }
        }
        let id = self.nodes.len();
        self.queue.push(OpenSlot {
            total: OrderedFloat(node.total_cost()),
            travelled: OrderedFloat(node.travelled()),
            id,
        });
        self.nodes.push(node);
        self.open.insert(loc, id);
        true
    }

    /// The open waypoint with the minimum total cost, or [None] when no open
    /// waypoints remain. Ties are broken by the queue order. The waypoint
    /// stays open; pair with [close](Self::close) to finalize it.
    pub fn best_open(&mut self) -> Option<WaypointId> {
        while let Some(slot) = self.queue.peek() {
            let id = slot.id;
            let loc = self.nodes[id].location();
            if self.open.get(&loc) == Some(&id) {
                return Some(id);
            }
            // Superseded by a cheaper waypoint or closed since it was queued.
            self.queue.pop();
        }
        None
    }

    /// Current number of open waypoints.
    pub fn open_count(&self) -> usize {
        self.open.len()
    }

    /// Moves the waypoint at `loc` from the open to the closed set.
    /// Locations with no open waypoint are silently ignored.
    pub fn close(&mut self, loc: Point) {
        if let Some(id) = self.open.swap_remove(&loc) {
            self.closed.insert(loc, id);
        }
    }

    /// Whether the location has been finalized.
    pub fn is_closed(&self, loc: Point) -> bool {
        self.closed.contains_key(&loc)
    }

    /// Snapshot of an arena waypoint.
    pub fn node(&self, id: WaypointId) -> Waypoint {
        self.nodes[id]
    }

    /// Consumes the frontier, handing the arena to the caller as the chain
    /// ending in `terminal`.
    pub fn into_chain(self, terminal: WaypointId) -> PathChain {
        PathChain::new(self.nodes, terminal)
    }
}

impl Default for Frontier {
    fn default() -> Frontier {
        Frontier::new()
    }
}
