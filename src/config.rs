/// Options for tuning the searches in [`search`](crate::search)
///
/// Default options:
/// ```
/// # use graph_pathfinding::SearchConfig;
/// assert_eq!(
/// 	SearchConfig {
/// 		unmark_on_failure: true,
/// 		rescore_on_select: true,
/// 		stop_at_target: true,
/// 	},
/// 	Default::default()
/// );
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SearchConfig {
	/// `true` (default): Backtracking clears the visited mark of a Vertex once every Edge
	/// leaving it failed to reach the target, so the Vertex can be entered again through a
	/// different route.
	///
	/// `false`: a Vertex stays marked once entered and is never entered again. Every reachable
	/// target is still found, but failed branches are not explored a second time, which keeps
	/// the search linear in the size of the Graph.
	pub unmark_on_failure: bool,
	/// `true` (default): when A* selects a Vertex, its stored score is replaced by the bare
	/// heuristic distance to the target.
	///
	/// `false`: the stored score stays `g + h`.
	///
	/// The selected Vertex is settled right away, so this only changes the score that is
	/// stored and reported, never the order in which Vertices are expanded.
	pub rescore_on_select: bool,
	/// `true` (default): Dijkstra and A* stop as soon as the target is settled.
	///
	/// `false`: every reachable Vertex is settled before the Path is built.
	pub stop_at_target: bool,
}

impl SearchConfig {
	/// the textbook formulation of A*, keeping `f = g + h` for every Vertex
	///
	/// Values:
	/// ```
	/// # use graph_pathfinding::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		unmark_on_failure: true,
	/// 		rescore_on_select: false,
	/// 		stop_at_target: true,
	/// 	},
	/// 	SearchConfig::CANONICAL
	/// );
	/// ```
	pub const CANONICAL: SearchConfig = SearchConfig {
		unmark_on_failure: true,
		rescore_on_select: false,
		stop_at_target: true,
	};
	/// settles every reachable Vertex instead of stopping at the target
	///
	/// Values:
	/// ```
	/// # use graph_pathfinding::SearchConfig;
	/// assert_eq!(
	/// 	SearchConfig {
	/// 		unmark_on_failure: true,
	/// 		rescore_on_select: true,
	/// 		stop_at_target: false,
	/// 	},
	/// 	SearchConfig::EXHAUSTIVE
	/// );
	/// ```
	pub const EXHAUSTIVE: SearchConfig = SearchConfig {
		unmark_on_failure: true,
		rescore_on_select: true,
		stop_at_target: false,
	};

	/// a Config that keeps visited marks during Backtracking, like the Grid search does
	pub fn keep_marks() -> SearchConfig {
		SearchConfig {
			unmark_on_failure: false,
			..Default::default()
		}
	}
}

impl Default for SearchConfig {
	fn default() -> SearchConfig {
		SearchConfig {
			unmark_on_failure: true,
			rescore_on_select: true,
			stop_at_target: true,
		}
	}
}
