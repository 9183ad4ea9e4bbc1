use super::{check_endpoints, reconstruct_path, select_min};
use crate::heuristic::{Euclidean, Heuristic};
use crate::{Cost, Graph, Path, SearchConfig, VertexID};

/// Searches a Graph using the [A* Algorithm](https://en.wikipedia.org/wiki/A*_search_algorithm),
/// guided by the [`Euclidean`] distance between the coordinates of the Vertices.
///
/// Each Vertex has a cost `g` (the cheapest known distance from `start`) and a score
/// `f = g + h`, where `h` is the estimated distance to `target`. The unsettled Vertex with the
/// lowest score is picked by scanning all Vertices (ties go to the lowest index), every Edge
/// leaving it is relaxed on `g`, and the Vertex is settled. The search stops as soon as
/// `target` is settled or no reachable Vertex is left.
///
/// When a Vertex is picked, its stored score is replaced by the bare estimate `h`. That Vertex
/// is settled in the same step, so the replacement never changes which Vertex is picked next.
/// See [`SearchConfig::rescore_on_select`].
///
/// The result is the cheapest Path as long as the Edge weights are never shorter than the
/// straight-line distance between their endpoints. This is not checked.
///
/// ## Examples
/// Basic usage:
/// ```
/// use graph_pathfinding::{search::a_star_search, EdgeType::Bidirectional, Graph};
///
/// // A(0,0) --3-- B(3,0) --4-- C(3,4)
/// //    \                      /
/// //     `---------9----------'
/// let mut graph = Graph::new();
/// let a = graph.add_vertex_at("A", 0, 0).unwrap();
/// graph.add_vertex_at("B", 3, 0).unwrap();
/// let c = graph.add_vertex_at("C", 3, 4).unwrap();
/// graph.add_edge("A", "B", 3, Bidirectional).unwrap();
/// graph.add_edge("B", "C", 4, Bidirectional).unwrap();
/// graph.add_edge("A", "C", 9, Bidirectional).unwrap();
///
/// let path = a_star_search(&graph, a, c).unwrap();
///
/// assert_eq!(path, vec!["A", "B", "C"]);
/// assert_eq!(path.cost(), 7);
/// ```
///
/// ## Returns
/// the Path, or `None` if `start` or `target` are not part of the Graph or if `target` cannot
/// be reached. Searching from a Vertex to itself also gives `None`.
pub fn a_star_search(graph: &Graph, start: VertexID, target: VertexID) -> Option<Path<&str>> {
	a_star_search_with(graph, start, target, Euclidean, SearchConfig::default())
}

/// [`a_star_search`] with a custom [`Heuristic`] and [`SearchConfig`].
///
/// [`rescore_on_select`](SearchConfig::rescore_on_select) and
/// [`stop_at_target`](SearchConfig::stop_at_target) have an effect here.
///
/// ## Examples
/// ```
/// use graph_pathfinding::{heuristic::Zero, search::a_star_search_with, Graph, SearchConfig};
/// use graph_pathfinding::EdgeType::Unidirectional;
///
/// let mut graph = Graph::new();
/// for label in ["A", "B", "C"] {
///     graph.add_vertex(label).unwrap();
/// }
/// graph.add_edge("A", "B", 2, Unidirectional).unwrap();
/// graph.add_edge("B", "C", 2, Unidirectional).unwrap();
/// graph.add_edge("A", "C", 5, Unidirectional).unwrap();
///
/// let path = a_star_search_with(&graph, 0, 2, Zero, SearchConfig::CANONICAL).unwrap();
/// assert_eq!(path, vec!["A", "B", "C"]);
/// ```
pub fn a_star_search_with(
	graph: &Graph,
	start: VertexID,
	target: VertexID,
	heuristic: impl Heuristic,
	config: SearchConfig,
) -> Option<Path<&str>> {
	if !check_endpoints(graph, start, target, "a*") {
		return None;
	}
	let n = graph.len();
	let goal = &graph[target];

	// `None` until reached
	let mut g_score: Vec<Option<Cost>> = vec![None; n];
	let mut f_score: Vec<Option<Cost>> = vec![None; n];
	let mut settled = vec![false; n];
	let mut predecessors: Vec<Option<VertexID>> = vec![None; n];

	g_score[start] = Some(0);
	f_score[start] = Some(heuristic.estimate(&graph[start], goal));

	while let Some((current_id, _)) = select_min(&f_score, &settled) {
		let current = &graph[current_id];
		let estimate = heuristic.estimate(current, goal);
		if config.rescore_on_select {
			f_score[current_id] = Some(estimate);
		}
		log::trace!(
			"checking {}, distance to {} is {}",
			current.label(),
			goal.label(),
			estimate
		);

		// a Vertex with a score always has a cost
		let Some(current_cost) = g_score[current_id] else {
			settled[current_id] = true;
			continue;
		};
		for edge in current.edges() {
			let other_cost = current_cost.saturating_add(edge.weight);
			if g_score[edge.dest].map_or(true, |known| known > other_cost) {
				predecessors[edge.dest] = Some(current_id);
				g_score[edge.dest] = Some(other_cost);
				f_score[edge.dest] =
					Some(other_cost.saturating_add(heuristic.estimate(&graph[edge.dest], goal)));
			}
		}
		settled[current_id] = true;

		if config.stop_at_target && settled[target] {
			break;
		}
	}

	let path = g_score[target]
		.and_then(|cost| reconstruct_path(graph, &predecessors, start, target, cost));
	match &path {
		Some(path) => log::debug!("a*: {}", path),
		None => log::debug!("a*: no path from {} to {}", graph[start].label(), goal.label()),
	}
	path
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::heuristic::Zero;
	use crate::search::dijkstra_search;
	use crate::{EdgeType::Bidirectional, EdgeType::Unidirectional, Vertex};

	/// A 4x4 lattice of unit-spaced Vertices "x,y" with unit Edges between neighbors
	fn lattice() -> Graph {
		let mut graph = Graph::new();
		for y in 0..4 {
			for x in 0..4 {
				graph.add_vertex_at(format!("{},{}", x, y), x, y).unwrap();
			}
		}
		for y in 0..4 {
			for x in 0..4 {
				let here = format!("{},{}", x, y);
				if x < 3 {
					graph.add_edge(&here, &format!("{},{}", x + 1, y), 1, Bidirectional).unwrap();
				}
				if y < 3 {
					graph.add_edge(&here, &format!("{},{}", x, y + 1), 1, Bidirectional).unwrap();
				}
			}
		}
		graph
	}

	#[test]
	fn lattice_corner_to_corner() {
		let graph = lattice();
		let (start, target) = (graph.id_of("0,0").unwrap(), graph.id_of("3,3").unwrap());

		let path = a_star_search(&graph, start, target).unwrap();
		assert_eq!(path.cost(), 6);
		assert_eq!(path.len(), 7);
		assert_eq!(path.first(), Some(&"0,0"));
		assert_eq!(path.last(), Some(&"3,3"));

		let dijkstra = dijkstra_search(&graph, start, target).unwrap();
		assert_eq!(path.cost(), dijkstra.cost());
	}

	#[test]
	fn heuristic_expands_fewer_vertices() {
		use std::cell::Cell;

		let graph = lattice();
		let (start, target) = (graph.id_of("0,0").unwrap(), graph.id_of("3,0").unwrap());

		let calls = Cell::new(0);
		let counting_zero = |_: &Vertex, _: &Vertex| -> Cost {
			calls.set(calls.get() + 1);
			0
		};
		a_star_search_with(&graph, start, target, counting_zero, SearchConfig::default()).unwrap();
		let blind = calls.replace(0);

		let counting_euclid = |v: &Vertex, t: &Vertex| {
			calls.set(calls.get() + 1);
			Euclidean.estimate(v, t)
		};
		let path =
			a_star_search_with(&graph, start, target, counting_euclid, SearchConfig::default())
				.unwrap();

		assert_eq!(path, vec!["0,0", "1,0", "2,0", "3,0"]);
		assert!(calls.get() < blind);
	}

	#[test]
	fn rescore_does_not_change_the_path() {
		let graph = lattice();
		for (from, to) in [("0,0", "3,3"), ("3,0", "0,2"), ("1,1", "2,3")] {
			let (start, target) = (graph.id_of(from).unwrap(), graph.id_of(to).unwrap());
			assert_eq!(
				a_star_search_with(&graph, start, target, Euclidean, SearchConfig::CANONICAL),
				a_star_search(&graph, start, target)
			);
		}
	}

	#[test]
	fn vertices_without_coordinates() {
		let mut graph = Graph::new();
		for label in ["A", "B", "C", "D"] {
			graph.add_vertex(label).unwrap();
		}
		graph.add_edge("A", "B", 1, Bidirectional).unwrap();
		graph.add_edge("B", "D", 1, Bidirectional).unwrap();
		graph.add_edge("A", "C", 5, Bidirectional).unwrap();
		graph.add_edge("C", "D", 1, Bidirectional).unwrap();

		let path = a_star_search(&graph, 0, 3).unwrap();
		assert_eq!(path, vec!["A", "B", "D"]);
		assert_eq!(path.cost(), 2);
		assert_eq!(a_star_search_with(&graph, 0, 3, Zero, SearchConfig::EXHAUSTIVE), Some(path));
	}

	#[test]
	fn unreachable_and_invalid() {
		let mut graph = lattice();
		let island = graph.add_vertex_at("island", 10, 10).unwrap();

		assert_eq!(a_star_search(&graph, 0, island), None);
		assert_eq!(a_star_search(&graph, island, 0), None);
		assert_eq!(a_star_search(&graph, 0, 99), None);
		assert_eq!(a_star_search(&graph, 0, 0), None);
	}

	#[test]
	fn huge_weights_saturate() {
		let mut graph = Graph::new();
		for label in ["A", "B", "C"] {
			graph.add_vertex(label).unwrap();
		}
		let weight = Cost::MAX / 2 + 1;
		graph.add_edge("A", "B", weight, Unidirectional).unwrap();
		graph.add_edge("B", "C", weight, Unidirectional).unwrap();

		for config in [SearchConfig::default(), SearchConfig::CANONICAL] {
			let path = a_star_search_with(&graph, 0, 2, Zero, config).unwrap();
			assert_eq!(path, vec!["A", "B", "C"]);
			assert_eq!(path.cost(), Cost::MAX);
		}
	}
}
