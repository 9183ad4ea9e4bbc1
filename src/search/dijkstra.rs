use super::{check_endpoints, reconstruct_path, select_min};
use crate::{Cost, Graph, Path, SearchConfig, VertexID};

/// Searches a Graph using [Dijkstra's Algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm).
///
/// The unsettled Vertex with the lowest distance from `start` is picked by scanning all
/// Vertices (ties go to the lowest index), every Edge leaving it is relaxed, and the Vertex is
/// settled. The search stops as soon as `target` is settled or no reachable Vertex is left.
///
/// ## Examples
/// Basic usage:
/// ```
/// use graph_pathfinding::{search::dijkstra_search, EdgeType::Unidirectional, Graph};
///
/// // A --1--> B --1--> D
/// //  \               ^
/// //   5--> C --1----/
/// let mut graph = Graph::new();
/// for label in ["A", "B", "C", "D"] {
///     graph.add_vertex(label).unwrap();
/// }
/// graph.add_edge("A", "B", 1, Unidirectional).unwrap();
/// graph.add_edge("B", "D", 1, Unidirectional).unwrap();
/// graph.add_edge("A", "C", 5, Unidirectional).unwrap();
/// graph.add_edge("C", "D", 1, Unidirectional).unwrap();
///
/// let (a, d) = (graph.id_of("A").unwrap(), graph.id_of("D").unwrap());
/// let path = dijkstra_search(&graph, a, d).unwrap();
///
/// assert_eq!(path, vec!["A", "B", "D"]);
/// assert_eq!(path.cost(), 2);
///
/// // Edges are directed
/// assert_eq!(dijkstra_search(&graph, d, a), None);
/// ```
///
/// ## Returns
/// the cheapest Path, or `None` if `start` or `target` are not part of the Graph or if
/// `target` cannot be reached. Since a Path needs at least one Edge leading into `target`,
/// searching from a Vertex to itself also gives `None`.
pub fn dijkstra_search(graph: &Graph, start: VertexID, target: VertexID) -> Option<Path<&str>> {
	dijkstra_search_with(graph, start, target, SearchConfig::default())
}

/// [`dijkstra_search`] with a custom [`SearchConfig`].
///
/// Only [`stop_at_target`](SearchConfig::stop_at_target) has an effect here.
pub fn dijkstra_search_with(
	graph: &Graph,
	start: VertexID,
	target: VertexID,
	config: SearchConfig,
) -> Option<Path<&str>> {
	if !check_endpoints(graph, start, target, "dijkstra") {
		return None;
	}
	let n = graph.len();
	// `None` until reached, so a distance saturated at `Cost::MAX` still counts as reached
	let mut distances: Vec<Option<Cost>> = vec![None; n];
	let mut settled = vec![false; n];
	let mut predecessors: Vec<Option<VertexID>> = vec![None; n];

	distances[start] = Some(0);
	let start_label = graph[start].label();

	while let Some((current_id, current_cost)) = select_min(&distances, &settled) {
		let current = &graph[current_id];
		log::trace!(
			"checking {}, distance from {} is {}",
			current.label(),
			start_label,
			current_cost
		);

		for edge in current.edges() {
			let other_cost = current_cost.saturating_add(edge.weight);
			if distances[edge.dest].map_or(true, |known| known > other_cost) {
				distances[edge.dest] = Some(other_cost);
				predecessors[edge.dest] = Some(current_id);
			}
		}
		settled[current_id] = true;

		if config.stop_at_target && settled[target] {
			break;
		}
	}

	let path = distances[target]
		.and_then(|cost| reconstruct_path(graph, &predecessors, start, target, cost));
	match &path {
		Some(path) => log::debug!("dijkstra: {}", path),
		None => log::debug!("dijkstra: no path from {} to {}", start_label, graph[target].label()),
	}
	path
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::EdgeType::{Bidirectional, Unidirectional};

	fn graph(edges: &[(&str, &str, usize)]) -> Graph {
		let mut graph = Graph::new();
		for &(src, dest, weight) in edges {
			for label in [src, dest] {
				if graph.id_of(label).is_none() {
					graph.add_vertex(label).unwrap();
				}
			}
			graph.add_edge(src, dest, weight, Unidirectional).unwrap();
		}
		graph
	}

	fn search<'g>(graph: &'g Graph, start: &str, target: &str) -> Option<Path<&'g str>> {
		dijkstra_search(graph, graph.id_of(start)?, graph.id_of(target)?)
	}

	#[test]
	fn shorter_weight_wins() {
		let graph = graph(&[("A", "B", 1), ("B", "D", 1), ("A", "C", 5), ("C", "D", 1)]);
		let path = search(&graph, "A", "D").unwrap();

		assert_eq!(path, vec!["A", "B", "D"]);
		assert_eq!(path.cost(), 2);
	}

	#[test]
	fn more_hops_can_be_cheaper() {
		let graph = graph(&[
			("A", "D", 10),
			("A", "B", 2),
			("B", "C", 2),
			("C", "D", 2),
		]);
		let path = search(&graph, "A", "D").unwrap();

		assert_eq!(path, vec!["A", "B", "C", "D"]);
		assert_eq!(path.cost(), 6);
	}

	#[test]
	fn zero_weight_edges() {
		let graph = graph(&[("A", "B", 0), ("B", "C", 0), ("A", "C", 1)]);
		let path = search(&graph, "A", "C").unwrap();

		assert_eq!(path, vec!["A", "B", "C"]);
		assert_eq!(path.cost(), 0);
	}

	#[test]
	fn ties_go_to_first_settled() {
		// both routes cost 2, B is settled before C
		let graph = graph(&[("A", "B", 1), ("A", "C", 1), ("C", "D", 1), ("B", "D", 1)]);

		assert_eq!(search(&graph, "A", "D").unwrap(), vec!["A", "B", "D"]);
	}

	#[test]
	fn unreachable() {
		let mut graph = graph(&[("A", "B", 1)]);
		graph.add_vertex("Z").unwrap();

		assert_eq!(search(&graph, "A", "Z"), None);
		assert_eq!(search(&graph, "B", "A"), None);
	}

	#[test]
	fn invalid_endpoints() {
		let graph = graph(&[("A", "B", 1)]);

		assert_eq!(dijkstra_search(&graph, 0, 7), None);
		assert_eq!(dijkstra_search(&graph, 7, 0), None);
		assert_eq!(dijkstra_search(&Graph::new(), 0, 0), None);
	}

	#[test]
	fn same_start_and_target() {
		let graph = graph(&[("A", "B", 1), ("B", "A", 1)]);

		assert_eq!(search(&graph, "A", "A"), None);
	}

	#[test]
	fn exhaustive_gives_the_same_path() {
		let mut graph = graph(&[("A", "B", 3), ("B", "C", 4), ("A", "C", 9), ("C", "E", 1)]);
		graph.add_vertex("F").unwrap();
		graph.add_edge("F", "A", 1, Bidirectional).unwrap();
		let (a, c) = (graph.id_of("A").unwrap(), graph.id_of("C").unwrap());

		assert_eq!(
			dijkstra_search_with(&graph, a, c, SearchConfig::EXHAUSTIVE),
			dijkstra_search(&graph, a, c)
		);
	}

	#[test]
	fn huge_weights_saturate() {
		let weight = Cost::MAX / 2 + 1;
		let graph = graph(&[("A", "B", weight), ("B", "C", weight), ("A", "D", 1)]);

		let path = search(&graph, "A", "C").unwrap();
		assert_eq!(path, vec!["A", "B", "C"]);
		assert_eq!(path.cost(), Cost::MAX);
		assert_eq!(search(&graph, "A", "D").unwrap().cost(), 1);
	}
}
