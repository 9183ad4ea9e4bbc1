use super::check_endpoints;
use crate::{Cost, Graph, Path, SearchConfig, VertexID};

/// Searches a Graph for a Path from `start` to `target` by exhaustive Backtracking.
///
/// The Edges of every Vertex are followed in the order they were added, and the first Edge
/// that leads to `target` wins. A Vertex is never entered twice on the same branch. Once every
/// Edge out of a Vertex failed, its mark is cleared again, so a later branch may still pass
/// through it. The result is therefore *a* Path, not necessarily the cheapest one.
///
/// ## Examples
/// Basic usage:
/// ```
/// use graph_pathfinding::{search::backtracking_search, EdgeType::Unidirectional, Graph};
///
/// let mut graph = Graph::new();
/// for label in ["A", "B", "C", "D"] {
///     graph.add_vertex(label).unwrap();
/// }
/// graph.add_edge("A", "C", 5, Unidirectional).unwrap();
/// graph.add_edge("A", "B", 1, Unidirectional).unwrap();
/// graph.add_edge("C", "D", 1, Unidirectional).unwrap();
/// graph.add_edge("B", "D", 1, Unidirectional).unwrap();
///
/// // the first Edge of A leads to D, even though it is the more expensive way
/// let path = backtracking_search(&graph, 0, 3).unwrap();
/// assert_eq!(path, vec!["A", "C", "D"]);
/// assert_eq!(path.cost(), 6);
/// ```
///
/// ## Returns
/// the Path, or `None` if `start` or `target` are not part of the Graph or not connected.
/// Searching from a Vertex to itself gives a Path of just that Vertex.
pub fn backtracking_search(graph: &Graph, start: VertexID, target: VertexID) -> Option<Path<&str>> {
	backtracking_search_with(graph, start, target, SearchConfig::default())
}

/// [`backtracking_search`] with a custom [`SearchConfig`].
///
/// Only [`unmark_on_failure`](SearchConfig::unmark_on_failure) has an effect here.
pub fn backtracking_search_with(
	graph: &Graph,
	start: VertexID,
	target: VertexID,
	config: SearchConfig,
) -> Option<Path<&str>> {
	if !check_endpoints(graph, start, target, "backtracking") {
		return None;
	}
	log::trace!("checking {}", graph[start].label());
	if start == target {
		return Some(Path::new(vec![graph[start].label()], 0));
	}

	let mut visited = vec![false; graph.len()];
	visited[start] = true;

	// (vertex, next edge to follow)
	let mut stack: Vec<(VertexID, usize)> = vec![(start, 0)];

	while let Some(frame) = stack.last_mut() {
		let (id, next_edge) = *frame;
		let Some(&edge) = graph[id].edges().get(next_edge) else {
			stack.pop();
			if config.unmark_on_failure {
				visited[id] = false;
			}
			continue;
		};
		frame.1 += 1;

		if visited[edge.dest] {
			continue;
		}
		log::trace!("checking {}", graph[edge.dest].label());

		if edge.dest == target {
			// every frame points one past the Edge it descended through
			let cost = stack
				.iter()
				.map(|&(id, next_edge)| graph[id].edges()[next_edge - 1].weight)
				.fold(0, Cost::saturating_add);
			let mut steps: Vec<&str> = stack.iter().map(|&(id, _)| graph[id].label()).collect();
			steps.push(graph[target].label());

			let path = Path::new(steps, cost);
			log::debug!("backtracking: {}", path);
			return Some(path);
		}

		visited[edge.dest] = true;
		stack.push((edge.dest, 0));
	}

	log::debug!(
		"backtracking: no path from {} to {}",
		graph[start].label(),
		graph[target].label()
	);
	None
}
