//! Depth-first and breadth-first traversal of a [`Graph`].
//!
//! Both traversals start at the first Vertex that was added to the Graph and visit every
//! Vertex reachable from it exactly once. Vertices that cannot be reached from there are
//! never visited: there is no restart from other components.

use crate::{Graph, Vertex, VertexID};
use std::collections::VecDeque;

/// Receives every Vertex a traversal reaches, together with its depth (DFS) or level (BFS).
///
/// Any `FnMut(&Vertex, usize)` closure is a Visitor.
pub trait Visitor {
	/// called exactly once per reachable Vertex
	fn visit(&mut self, vertex: &Vertex, depth: usize);
}

impl<F: FnMut(&Vertex, usize)> Visitor for F {
	fn visit(&mut self, vertex: &Vertex, depth: usize) {
		self(vertex, depth)
	}
}

/// Visits the Graph depth-first, in pre-order.
///
/// Each Vertex is visited before any of its descendants, and the Edges of a Vertex are
/// followed in the order they were added, skipping Vertices that were already visited.
/// The first Vertex has depth 0 and every descent adds 1.
///
/// Returns the greatest depth that was reached, or 0 for an empty Graph.
///
/// ## Examples
/// ```
/// use graph_pathfinding::{traversal::depth_first_traverse, EdgeType, Graph, Vertex};
///
/// let mut graph = Graph::new();
/// for label in ["A", "B", "C", "D"] {
///     graph.add_vertex(label).unwrap();
/// }
/// graph.add_edge("A", "B", 1, EdgeType::Unidirectional).unwrap();
/// graph.add_edge("B", "C", 1, EdgeType::Unidirectional).unwrap();
/// graph.add_edge("A", "D", 1, EdgeType::Unidirectional).unwrap();
///
/// let mut order = vec![];
/// let depth = depth_first_traverse(&graph, |v: &Vertex, depth: usize| order.push((v.label().to_owned(), depth)));
///
/// assert_eq!(depth, 2);
/// let expected = [("A", 0), ("B", 1), ("C", 2), ("D", 1)];
/// assert!(order.iter().map(|(l, d)| (l.as_str(), *d)).eq(expected));
/// ```
pub fn depth_first_traverse(graph: &Graph, mut visitor: impl Visitor) -> usize {
	let root = match graph.first() {
		Some(root) => root,
		None => return 0,
	};
	let mut explored = vec![false; graph.len()];
	let mut max_depth = 0;

	visitor.visit(root, 0);
	explored[root.index()] = true;

	// (vertex, depth, next edge to follow)
	let mut stack: Vec<(VertexID, usize, usize)> = vec![(root.index(), 0, 0)];

	while let Some(frame) = stack.last_mut() {
		let (id, depth) = (frame.0, frame.1);
		let Some(&edge) = graph[id].edges().get(frame.2) else {
			stack.pop();
			continue;
		};
		frame.2 += 1;

		if explored[edge.dest] {
			continue;
		}
		let depth = depth + 1;
		visitor.visit(&graph[edge.dest], depth);
		explored[edge.dest] = true;
		max_depth = max_depth.max(depth);

		stack.push((edge.dest, depth, 0));
	}

	log::debug!(
		"depth-first traversal reached {} of {} vertices, max depth {}",
		explored.iter().filter(|&&e| e).count(),
		graph.len(),
		max_depth
	);
	max_depth
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mark {
	Unexplored,
	Queued,
	Explored,
}

/// Visits the Graph level by level.
///
/// The first Vertex is on level 0, its unvisited neighbors on level 1 and so on. Neighbors
/// are queued in the order their Edges were added. A queued Vertex is not queued a second time.
///
/// Levels are delimited by a separator in the queue. Every time a separator is dequeued the
/// level counter advances, and the traversal ends once the queue holds nothing but the
/// separator. The returned value is the number of separators crossed minus one, which is the
/// index of the last level that held a Vertex (0 for an empty or single-vertex Graph).
///
/// ## Examples
/// ```
/// use graph_pathfinding::{traversal::breadth_first_traverse, EdgeType, Graph, Vertex};
///
/// let mut graph = Graph::new();
/// for label in ["A", "B", "C", "D"] {
///     graph.add_vertex(label).unwrap();
/// }
/// graph.add_edge("A", "B", 1, EdgeType::Unidirectional).unwrap();
/// graph.add_edge("B", "C", 1, EdgeType::Unidirectional).unwrap();
/// graph.add_edge("A", "D", 1, EdgeType::Unidirectional).unwrap();
///
/// let mut order = vec![];
/// let levels = breadth_first_traverse(&graph, |v: &Vertex, level: usize| order.push((v.index(), level)));
///
/// assert_eq!(levels, 2);
/// assert_eq!(order, [(0, 0), (1, 1), (3, 1), (2, 2)]);
/// ```
pub fn breadth_first_traverse(graph: &Graph, mut visitor: impl Visitor) -> usize {
	let root = match graph.first() {
		Some(root) => root,
		None => return 0,
	};
	let mut marks = vec![Mark::Unexplored; graph.len()];

	// `None` separates two levels
	let mut queue: VecDeque<Option<VertexID>> = VecDeque::new();
	queue.push_back(Some(root.index()));
	queue.push_back(None);

	let mut level = 0;

	while let Some(entry) = queue.pop_front() {
		let Some(id) = entry else {
			level += 1;
			queue.push_back(None);
			if matches!(queue.front(), Some(None)) {
				break;
			}
			continue;
		};

		if marks[id] == Mark::Explored {
			continue;
		}
		marks[id] = Mark::Explored;
		visitor.visit(&graph[id], level);

		for edge in graph[id].edges() {
			if marks[edge.dest] == Mark::Unexplored {
				queue.push_back(Some(edge.dest));
				marks[edge.dest] = Mark::Queued;
			}
		}
	}

	let levels = level.saturating_sub(1);
	log::debug!(
		"breadth-first traversal reached {} of {} vertices, {} levels",
		marks.iter().filter(|&&m| m == Mark::Explored).count(),
		graph.len(),
		levels
	);
	levels
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::EdgeType;

	/// A -> B -> C -> A (cycle), A -> D, E is isolated
	fn cyclic() -> Graph {
		let mut graph = Graph::new();
		for label in ["A", "B", "C", "D", "E"] {
			graph.add_vertex(label).unwrap();
		}
		graph.add_edge("A", "B", 1, EdgeType::Unidirectional).unwrap();
		graph.add_edge("B", "C", 1, EdgeType::Unidirectional).unwrap();
		graph.add_edge("C", "A", 1, EdgeType::Unidirectional).unwrap();
		graph.add_edge("A", "D", 1, EdgeType::Bidirectional).unwrap();
		graph
	}

	fn record(
		traverse: fn(&Graph, &mut dyn FnMut(&Vertex, usize)) -> usize,
		graph: &Graph,
	) -> (usize, Vec<(String, usize)>) {
		let mut seen = vec![];
		let depth = traverse(graph, &mut |v: &Vertex, d| seen.push((v.label().to_owned(), d)));
		(depth, seen)
	}

	fn dfs(graph: &Graph, visitor: &mut dyn FnMut(&Vertex, usize)) -> usize {
		depth_first_traverse(graph, visitor)
	}

	fn bfs(graph: &Graph, visitor: &mut dyn FnMut(&Vertex, usize)) -> usize {
		breadth_first_traverse(graph, visitor)
	}

	fn labels(seen: &[(String, usize)]) -> Vec<&str> {
		seen.iter().map(|(l, _)| l.as_str()).collect()
	}

	#[test]
	fn empty_graph() {
		let graph = Graph::new();
		let mut calls = 0;

		assert_eq!(depth_first_traverse(&graph, |_: &Vertex, _: usize| calls += 1), 0);
		assert_eq!(breadth_first_traverse(&graph, |_: &Vertex, _: usize| calls += 1), 0);
		assert_eq!(calls, 0);
	}

	#[test]
	fn single_vertex() {
		let mut graph = Graph::new();
		graph.add_vertex("only").unwrap();

		for traverse in [dfs, bfs] {
			let (depth, seen) = record(traverse, &graph);
			assert_eq!(depth, 0);
			assert_eq!(seen, vec![("only".to_owned(), 0)]);
		}
	}

	#[test]
	fn dfs_on_cycle() {
		let (depth, seen) = record(dfs, &cyclic());

		assert_eq!(depth, 2);
		assert_eq!(
			seen,
			vec![
				("A".to_owned(), 0),
				("B".to_owned(), 1),
				("C".to_owned(), 2),
				("D".to_owned(), 1),
			]
		);
	}

	#[test]
	fn bfs_on_cycle() {
		let (levels, seen) = record(bfs, &cyclic());

		assert_eq!(levels, 2);
		assert_eq!(
			seen,
			vec![
				("A".to_owned(), 0),
				("B".to_owned(), 1),
				("D".to_owned(), 1),
				("C".to_owned(), 2),
			]
		);
	}

	#[test]
	fn unreachable_vertices_are_skipped() {
		let graph = cyclic();
		for traverse in [dfs, bfs] {
			let (_, seen) = record(traverse, &graph);
			assert!(!labels(&seen).contains(&"E"));
			let mut sorted = labels(&seen);
			sorted.sort_unstable();
			sorted.dedup();
			assert_eq!(sorted.len(), seen.len(), "a vertex was visited twice");
		}
	}

	#[test]
	fn dfs_depth_is_tree_depth() {
		// A -> B -> C and A -> C: C is first reached through B
		let mut graph = Graph::new();
		for label in ["A", "B", "C"] {
			graph.add_vertex(label).unwrap();
		}
		graph.add_edge("A", "B", 1, EdgeType::Unidirectional).unwrap();
		graph.add_edge("B", "C", 1, EdgeType::Unidirectional).unwrap();
		graph.add_edge("A", "C", 1, EdgeType::Unidirectional).unwrap();

		let (depth, seen) = record(dfs, &graph);
		assert_eq!(depth, 2);
		assert_eq!(seen[2], ("C".to_owned(), 2));

		let (levels, seen) = record(bfs, &graph);
		assert_eq!(levels, 1);
		assert_eq!(seen[2], ("C".to_owned(), 1));
	}

	#[test]
	fn long_chain_does_not_overflow() {
		let n = 100_000;
		let mut graph = Graph::with_capacity(n);
		for i in 0..n {
			graph.add_vertex(i.to_string()).unwrap();
		}
		for i in 1..n {
			graph
				.add_edge(&(i - 1).to_string(), &i.to_string(), 1, EdgeType::Unidirectional)
				.unwrap();
		}

		let mut count = 0;
		assert_eq!(depth_first_traverse(&graph, |_: &Vertex, _: usize| count += 1), n - 1);
		assert_eq!(count, n);
		assert_eq!(breadth_first_traverse(&graph, |_: &Vertex, _: usize| ()), n - 1);
	}
}
