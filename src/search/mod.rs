//! Path searches over a [`Graph`]: Backtracking, Dijkstra and A*.
//!
//! All searches take the Graph by shared reference and never change it. Every call allocates
//! its own bookkeeping (visited marks, distance and score tables, predecessor maps), indexed
//! by [`VertexID`] and sized to the Graph at the time of the call, so any number of searches
//! may run over the same Graph at once.
//!
//! The returned [`Path`] lists the labels of the Vertices from `start` to `target`. Its Cost
//! is the sum of the weights of the Edges that were followed. An unknown `start` or `target`
//! and an unreachable `target` both produce `None`.

mod backtracking;
pub use backtracking::{backtracking_search, backtracking_search_with};

mod dijkstra;
pub use dijkstra::{dijkstra_search, dijkstra_search_with};

mod a_star;
pub use a_star::{a_star_search, a_star_search_with};

mod batch;
pub use batch::{a_star_search_all, dijkstra_search_all};

use crate::{Cost, Graph, Path, VertexID};

fn check_endpoints(graph: &Graph, start: VertexID, target: VertexID, search: &str) -> bool {
	if graph.contains(start) && graph.contains(target) {
		true
	} else {
		log::warn!(
			"{} from {} to {} in a graph of {} vertices",
			search,
			start,
			target,
			graph.len()
		);
		false
	}
}

/// The unsettled, reached Vertex with the lowest score, and that score. Ties go to the lowest
/// index.
///
/// `None` scores mark Vertices that were not reached yet. A reached Vertex is selectable even
/// if its score saturated at `Cost::MAX`.
fn select_min(scores: &[Option<Cost>], settled: &[bool]) -> Option<(VertexID, Cost)> {
	let mut best: Option<(VertexID, Cost)> = None;
	for (id, (&score, &done)) in scores.iter().zip(settled).enumerate() {
		let Some(score) = score else {
			continue;
		};
		if !done && best.map_or(true, |(_, min)| score < min) {
			best = Some((id, score));
		}
	}
	best
}

/// Walks `predecessors` back from `target` to `start`.
///
/// Returns `None` if `target` has no predecessor, which is the case when it was never reached.
fn reconstruct_path<'g>(
	graph: &'g Graph,
	predecessors: &[Option<VertexID>],
	start: VertexID,
	target: VertexID,
	cost: Cost,
) -> Option<Path<&'g str>> {
	if predecessors[target].is_none() {
		return None;
	}

	let steps = {
		let mut steps = vec![graph[target].label()];
		let mut current = target;

		while let Some(prev) = predecessors[current] {
			steps.push(graph[prev].label());
			current = prev;
			if current == start {
				break;
			}
		}
		steps.reverse();
		steps
	};

	Some(Path::new(steps, cost))
}
