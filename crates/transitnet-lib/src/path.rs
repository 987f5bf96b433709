use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::iter;

use crate::graph::Graph;
use crate::registry::StationId;

/// Station each reached station was first (or most cheaply) entered from.
/// The search origin has no entry.
type CameFrom = HashMap<StationId, StationId>;

/// Find the route with the fewest hops between `start` and `goal`.
///
/// Stations are expanded in FIFO order and the search stops the first time
/// `goal` is discovered as a neighbour. Returns `None` when `goal` cannot be
/// reached.
pub fn find_route_bfs(graph: &Graph, start: StationId, goal: StationId) -> Option<Vec<StationId>> {
    if start == goal {
        return Some(vec![start]);
    }

    let mut came_from = CameFrom::new();
    let mut frontier = VecDeque::from([start]);

    while let Some(station) = frontier.pop_front() {
        for &next in graph.neighbours(station).keys() {
            if next == start || came_from.contains_key(&next) {
                continue;
            }
            came_from.insert(next, station);
            if next == goal {
                return Some(walk_back(&came_from, goal));
            }
            frontier.push_back(next);
        }
    }

    None
}

/// Run Dijkstra's algorithm over the `distance` weight.
///
/// Returns the route together with its total distance, or `None` when `goal`
/// never receives a finite distance.
pub fn find_route_dijkstra(
    graph: &Graph,
    start: StationId,
    goal: StationId,
) -> Option<(Vec<StationId>, f64)> {
    if start == goal {
        return Some((vec![start], 0.0));
    }

    let mut best: HashMap<StationId, f64> = HashMap::from([(start, 0.0)]);
    let mut came_from = CameFrom::new();
    // Min-heap on (distance, station id).
    let mut frontier = BinaryHeap::from([Reverse((FloatOrd(0.0), start))]);

    while let Some(Reverse((FloatOrd(travelled), station))) = frontier.pop() {
        if best.get(&station).is_some_and(|&known| known < travelled) {
            continue;
        }
        // Distances are positive: the goal is settled once popped.
        if station == goal {
            return Some((walk_back(&came_from, goal), travelled));
        }

        for (&next, weights) in graph.neighbours(station) {
            let candidate = travelled + weights.distance;
            if candidate < best.get(&next).copied().unwrap_or(f64::INFINITY) {
                best.insert(next, candidate);
                came_from.insert(next, station);
                frontier.push(Reverse((FloatOrd(candidate), next)));
            }
        }
    }

    None
}

/// Follow predecessor links from `goal` back to the origin, origin first.
fn walk_back(came_from: &CameFrom, goal: StationId) -> Vec<StationId> {
    let mut route: Vec<StationId> =
        iter::successors(Some(goal), |station| came_from.get(station).copied()).collect();
    route.reverse();
    route
}

/// `f64` under `total_cmp`, usable as a heap key.
#[derive(Copy, Clone, Debug, Default)]
pub(crate) struct FloatOrd(pub(crate) f64);

impl Ord for FloatOrd {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for FloatOrd {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for FloatOrd {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for FloatOrd {}
