//! Heuristics for the [A* search](crate::search::a_star_search).

use crate::{Cost, Vertex};

/// Estimates the remaining Cost of walking from one Vertex to the target.
///
/// For A* to return the cheapest Path, the estimate must never exceed the real remaining
/// Cost (it must be *admissible*). The search itself does not check this.
///
/// If there is no proper way of estimating the Cost, use [`Zero`]. That turns A* into
/// Dijkstra's Algorithm: slower, but always correct.
///
/// Any `Fn(&Vertex, &Vertex) -> Cost` closure is a Heuristic.
pub trait Heuristic {
	/// the estimated Cost from `vertex` to `target`
	fn estimate(&self, vertex: &Vertex, target: &Vertex) -> Cost;
}

impl<F: Fn(&Vertex, &Vertex) -> Cost> Heuristic for F {
	fn estimate(&self, vertex: &Vertex, target: &Vertex) -> Cost {
		self(vertex, target)
	}
}

/// The straight-line distance between the coordinates of two Vertices, rounded down.
///
/// Vertices without coordinates get an estimate of 0.
///
/// ## Examples
/// ```
/// # use graph_pathfinding::{heuristic::{Euclidean, Heuristic}, Graph};
/// let mut graph = Graph::new();
/// let a = graph.add_vertex_at("A", 0, 0).unwrap();
/// let b = graph.add_vertex_at("B", 2, 2).unwrap();
/// let c = graph.add_vertex("C").unwrap();
///
/// assert_eq!(Euclidean.estimate(&graph[a], &graph[b]), 2); // 2.83
/// assert_eq!(Euclidean.estimate(&graph[a], &graph[c]), 0);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Heuristic for Euclidean {
	fn estimate(&self, vertex: &Vertex, target: &Vertex) -> Cost {
		match (vertex.pos(), target.pos()) {
			(Some(a), Some(b)) => a.distance(b) as Cost,
			_ => 0,
		}
	}
}

/// Estimates 0 everywhere
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Zero;

impl Heuristic for Zero {
	fn estimate(&self, _: &Vertex, _: &Vertex) -> Cost {
		0
	}
}

#[test]
fn test_euclidean() {
	let mut graph = crate::Graph::new();
	let a = graph.add_vertex_at("A", -3, 0).unwrap();
	let b = graph.add_vertex_at("B", 0, 4).unwrap();

	assert_eq!(Euclidean.estimate(&graph[a], &graph[b]), 5);
	assert_eq!(Euclidean.estimate(&graph[b], &graph[b]), 0);
}

#[test]
fn test_closure_heuristic() {
	let mut graph = crate::Graph::new();
	let a = graph.add_vertex("A").unwrap();
	let b = graph.add_vertex("B").unwrap();
	let by_index = |v: &Vertex, t: &Vertex| v.index().abs_diff(t.index());

	assert_eq!(by_index.estimate(&graph[a], &graph[b]), 1);
	assert_eq!(Zero.estimate(&graph[a], &graph[b]), 0);
}
