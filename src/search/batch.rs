use super::{a_star_search_with, dijkstra_search};
use crate::heuristic::Heuristic;
use crate::{Graph, Path, SearchConfig, Vertex, VertexID};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Runs [`dijkstra_search`] for every `(start, target)` pair in `queries`.
///
/// With the `parallel` feature the queries are spread over the rayon thread pool. The results
/// are in the same order as `queries` either way.
///
/// ## Examples
/// ```
/// use graph_pathfinding::{search::dijkstra_search_all, EdgeType::Bidirectional, Graph};
///
/// let mut graph = Graph::new();
/// for label in ["A", "B", "C"] {
///     graph.add_vertex(label).unwrap();
/// }
/// graph.add_edge("A", "B", 1, Bidirectional).unwrap();
/// graph.add_edge("B", "C", 2, Bidirectional).unwrap();
///
/// let paths = dijkstra_search_all(&graph, &[(0, 2), (2, 0), (0, 7)]);
/// assert_eq!(paths[0].as_ref().map(|p| p.cost()), Some(3));
/// assert_eq!(paths[1].as_ref().unwrap(), &vec!["C", "B", "A"]);
/// assert_eq!(paths[2], None);
/// ```
pub fn dijkstra_search_all<'g>(
	graph: &'g Graph,
	queries: &[(VertexID, VertexID)],
) -> Vec<Option<Path<&'g str>>> {
	log::debug!("dijkstra: {} queries", queries.len());

	#[cfg(feature = "parallel")]
	let iter = queries.par_iter();
	#[cfg(not(feature = "parallel"))]
	let iter = queries.iter();

	iter.map(|&(start, target)| dijkstra_search(graph, start, target))
		.collect()
}

/// Runs [`a_star_search_with`] for every `(start, target)` pair in `queries`, sharing one
/// Heuristic and [`SearchConfig`].
///
/// See [`dijkstra_search_all`] for how the queries are distributed.
pub fn a_star_search_all<'g, H: Heuristic + Sync>(
	graph: &'g Graph,
	queries: &[(VertexID, VertexID)],
	heuristic: H,
	config: SearchConfig,
) -> Vec<Option<Path<&'g str>>> {
	log::debug!("a*: {} queries", queries.len());
	let estimate = |vertex: &Vertex, target: &Vertex| heuristic.estimate(vertex, target);

	#[cfg(feature = "parallel")]
	let iter = queries.par_iter();
	#[cfg(not(feature = "parallel"))]
	let iter = queries.iter();

	iter.map(|&(start, target)| a_star_search_with(graph, start, target, estimate, config))
		.collect()
}
