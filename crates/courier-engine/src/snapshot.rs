//! # Graph Snapshot and Search
//!
//! A [`GraphSnapshot`] is the read-only node/edge view a graph strategy
//! loads fresh per invocation — hub coordinates plus an adjacency list.
//! The searches themselves ([`shortest_path`], [`best_first_path`]) are
//! pure functions over a snapshot, which keeps them synchronous, easy to
//! reason about, and directly testable without the async accessors.
//!
//! ## Traversal invariant
//!
//! Connections are traversable in both directions: the adjacency builder
//! inserts an arc for each role of every connection. The stored
//! `from`/`to` order carries no direction semantics anywhere in the
//! system.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet};

use geo_types::{Coord, Point};
use ordered_float::OrderedFloat;

use courier_core::geom::{planar_distance, serialize_line};
use courier_core::{ConnectionAccess, Hub, HubAccess, HubId, Route, RoutingError};

/// Read-only node/edge view for one graph search.
#[derive(Debug, Default)]
pub struct GraphSnapshot {
    coords: HashMap<HubId, Point<f64>>,
    adjacency: HashMap<HubId, Vec<(HubId, f64)>>,
}

/// Result of a successful search: hub sequence from start to end, plus
/// the finalized path cost.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Hubs along the path, start first.
    pub path: Vec<HubId>,
    /// Total traversal cost of the path.
    pub total_cost: f64,
}

impl GraphSnapshot {
    /// Load the full hub and connection sets from the accessors.
    pub async fn load(
        hubs: &dyn HubAccess,
        connections: &dyn ConnectionAccess,
    ) -> Result<Self, RoutingError> {
        let hub_list = hubs.hubs_with_location().await?;
        let connection_list = connections.connections().await?;

        let mut coords = HashMap::with_capacity(hub_list.len());
        for hub in &hub_list {
            coords.insert(hub.id, hub.point()?);
        }

        let mut adjacency: HashMap<HubId, Vec<(HubId, f64)>> = HashMap::new();
        for connection in &connection_list {
            let cost = connection.cost();
            // Both directions: connections are undirected by invariant.
            adjacency
                .entry(connection.from_hub)
                .or_default()
                .push((connection.to_hub, cost));
            adjacency
                .entry(connection.to_hub)
                .or_default()
                .push((connection.from_hub, cost));
        }

        Ok(Self { coords, adjacency })
    }

    /// Build a snapshot directly from parts (search tests and tooling).
    pub fn from_parts(
        coords: HashMap<HubId, Point<f64>>,
        undirected_edges: &[(HubId, HubId, f64)],
    ) -> Self {
        let mut adjacency: HashMap<HubId, Vec<(HubId, f64)>> = HashMap::new();
        for &(a, b, cost) in undirected_edges {
            adjacency.entry(a).or_default().push((b, cost));
            adjacency.entry(b).or_default().push((a, cost));
        }
        Self { coords, adjacency }
    }

    /// Make sure an endpoint hub's coordinate is present, parsing its
    /// stored location if the hub was absent from the loaded set.
    pub fn ensure_hub(&mut self, hub: &Hub) -> Result<(), RoutingError> {
        if !self.coords.contains_key(&hub.id) {
            self.coords.insert(hub.id, hub.point()?);
        }
        Ok(())
    }

    /// Coordinate of a hub, if known to the snapshot.
    pub fn coord(&self, id: HubId) -> Option<Point<f64>> {
        self.coords.get(&id).copied()
    }

    /// Neighbors of a hub with traversal costs.
    pub fn neighbors(&self, id: HubId) -> &[(HubId, f64)] {
        self.adjacency.get(&id).map_or(&[], Vec::as_slice)
    }

    /// Assemble a [`Route`] from a hub path and its finalized cost.
    ///
    /// A single-hub path (start == end) duplicates the coordinate to
    /// satisfy the two-coordinate geometry minimum.
    pub fn route_for_path(
        &self,
        path: &[HubId],
        total_cost: f64,
        service: &str,
    ) -> Result<Route, RoutingError> {
        let mut coords = Vec::with_capacity(path.len().max(2));
        for id in path {
            let point = self.coord(*id).ok_or(RoutingError::HubNotFound { id: *id })?;
            coords.push(Coord {
                x: point.x(),
                y: point.y(),
            });
        }
        if coords.len() == 1 {
            let only = coords[0];
            coords.push(only);
        }
        Ok(Route::computed(serialize_line(&coords), total_cost, service))
    }
}

/// Single-source shortest path (Dijkstra) from `start` to `end`.
///
/// Distance to `start` is zero and all others unvisited; a min-priority
/// queue keyed by current best distance drives relaxation. Duplicate heap
/// entries are permitted — stale ones are skipped on pop. The search
/// stops early once `end` is popped. Ties break on hub id, which is
/// stable and cannot affect the path length.
///
/// Returns `None` when `end` is unreachable.
pub fn shortest_path(graph: &GraphSnapshot, start: HubId, end: HubId) -> Option<SearchOutcome> {
    let mut dist: HashMap<HubId, f64> = HashMap::new();
    let mut prev: HashMap<HubId, HubId> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, HubId)>> = BinaryHeap::new();

    dist.insert(start, 0.0);
    heap.push(Reverse((OrderedFloat(0.0), start)));

    while let Some(Reverse((OrderedFloat(cost), current))) = heap.pop() {
        if current == end {
            break;
        }
        // Stale entry: this hub was already finalized at a lower cost.
        if dist.get(&current).is_some_and(|&best| cost > best) {
            continue;
        }
        for &(neighbor, weight) in graph.neighbors(current) {
            let candidate = cost + weight;
            if dist.get(&neighbor).map_or(true, |&best| candidate < best) {
                dist.insert(neighbor, candidate);
                prev.insert(neighbor, current);
                heap.push(Reverse((OrderedFloat(candidate), neighbor)));
            }
        }
    }

    let total_cost = *dist.get(&end)?;
    let path = reconstruct(&prev, start, end)?;
    Some(SearchOutcome { path, total_cost })
}

/// Best-first search (A*) from `start` to `end`, prioritized by
/// `g + h` where `h` is the planar distance to the goal coordinate.
///
/// Same node/edge model, relaxation, and reconstruction discipline as
/// [`shortest_path`]. The heuristic is admissible when connection weights
/// are planar distances; with arbitrary weights the search remains
/// complete but optimality depends on the weighting.
pub fn best_first_path(graph: &GraphSnapshot, start: HubId, end: HubId) -> Option<SearchOutcome> {
    let goal = graph.coord(end)?;
    let heuristic = |id: HubId| {
        graph
            .coord(id)
            .map_or(0.0, |point| planar_distance(point, goal))
    };

    let mut g_score: HashMap<HubId, f64> = HashMap::new();
    let mut prev: HashMap<HubId, HubId> = HashMap::new();
    let mut settled: HashSet<HubId> = HashSet::new();
    let mut heap: BinaryHeap<Reverse<(OrderedFloat<f64>, HubId)>> = BinaryHeap::new();

    g_score.insert(start, 0.0);
    heap.push(Reverse((OrderedFloat(heuristic(start)), start)));

    while let Some(Reverse((_, current))) = heap.pop() {
        if !settled.insert(current) {
            continue;
        }
        if current == end {
            break;
        }
        let current_g = match g_score.get(&current) {
            Some(&g) => g,
            None => continue,
        };
        for &(neighbor, weight) in graph.neighbors(current) {
            let candidate = current_g + weight;
            if g_score.get(&neighbor).map_or(true, |&best| candidate < best) {
                g_score.insert(neighbor, candidate);
                prev.insert(neighbor, current);
                heap.push(Reverse((
                    OrderedFloat(candidate + heuristic(neighbor)),
                    neighbor,
                )));
            }
        }
    }

    let total_cost = *g_score.get(&end)?;
    let path = reconstruct(&prev, start, end)?;
    Some(SearchOutcome { path, total_cost })
}

/// Backtrack the predecessor map from `end` to `start`.
///
/// `None` when `end` was never reached (absent from the map and not the
/// start itself).
fn reconstruct(prev: &HashMap<HubId, HubId>, start: HubId, end: HubId) -> Option<Vec<HubId>> {
    if start == end {
        return Some(vec![start]);
    }
    if !prev.contains_key(&end) {
        return None;
    }
    let mut path = vec![end];
    let mut current = end;
    while let Some(&predecessor) = prev.get(&current) {
        path.push(predecessor);
        current = predecessor;
        if current == start {
            break;
        }
    }
    path.reverse();
    Some(path)
}
