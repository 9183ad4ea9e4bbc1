#![warn(
	missing_docs,
	missing_debug_implementations,
	missing_copy_implementations,
	trivial_casts,
	trivial_numeric_casts,
	unsafe_code,
	unstable_features,
	unused_import_braces,
	unused_qualifications
)]

//! A crate to traverse and search small directed Graphs and occupancy Grids.
//!
//! ## Introduction
//! The [`Graph`] stores labelled Vertices (optionally placed on a 2D plane) and weighted,
//! directed Edges. Every Vertex is addressed by a [`VertexID`], handed out in insertion order
//! starting at 0, and keeps its outgoing Edges in the order they were added. That order is
//! what every algorithm in this crate follows, so all of them are fully deterministic.
//!
//! On top of the Graph there are two kinds of algorithms:
//! - [Traversals](traversal) that visit every Vertex reachable from Vertex 0, either depth-first
//!   or breadth-first level by level.
//! - [Searches](search) that look for a [`Path`] between two Vertices: exhaustive
//!   Backtracking, Dijkstra and A*.
//!
//! The [`Grid`] is a rectangle of walkable and blocked Cells, searched by its own
//! [Backtracking](grid::backtracking_search) in 4 directions.
//!
//! All searches return `Option<Path>`: `None` means there is no Path, or that the start or
//! target was not part of the Graph/Grid (which is also reported as a `log` warning).
//!
//! ## Examples
//! Building a Graph and searching it:
//! ```
//! use graph_pathfinding::prelude::*;
//!
//! let mut graph = Graph::new();
//! graph.add_vertex_at("A", 0, 0).unwrap();
//! graph.add_vertex_at("B", 3, 0).unwrap();
//! graph.add_vertex_at("C", 3, 4).unwrap();
//!
//! graph.add_edge("A", "B", 3, EdgeType::Bidirectional).unwrap();
//! graph.add_edge("B", "C", 4, EdgeType::Bidirectional).unwrap();
//! graph.add_edge("A", "C", 9, EdgeType::Unidirectional).unwrap();
//!
//! let (a, c) = (graph.id_of("A").unwrap(), graph.id_of("C").unwrap());
//!
//! let path = dijkstra_search(&graph, a, c).unwrap();
//! assert_eq!(path, vec!["A", "B", "C"]);
//! assert_eq!(path.cost(), 7);
//! assert_eq!(path.to_string(), "Path[Cost = 7]: A -> B -> C");
//!
//! // A* finds the same Path, guided by the straight-line distance
//! assert_eq!(a_star_search(&graph, a, c), Some(path));
//!
//! // the first Edge that leads somewhere wins
//! let path = backtracking_search(&graph, a, c).unwrap();
//! assert_eq!(path, vec!["A", "B", "C"]);
//! ```
//!
//! Walking the Graph:
//! ```
//! # use graph_pathfinding::prelude::*;
//! # let mut graph = Graph::new();
//! # for label in ["A", "B", "C"] {
//! #     graph.add_vertex(label).unwrap();
//! # }
//! # graph.add_edge("A", "B", 3, EdgeType::Bidirectional).unwrap();
//! # graph.add_edge("B", "C", 4, EdgeType::Bidirectional).unwrap();
//! let mut order = vec![];
//! let levels = breadth_first_traverse(&graph, |v: &Vertex, level: usize| {
//!     order.push((v.label().to_string(), level));
//! });
//!
//! assert_eq!(levels, 2);
//! assert_eq!(order.len(), 3);
//! ```
//!
//! Searching a Grid:
//! ```
//! use graph_pathfinding::prelude::*;
//!
//! // '0' = walkable, '1' = blocked, one row per line
//! let grid: Grid = "000\n110\n000".parse().unwrap();
//!
//! let path = grid_backtracking_search(&grid, (0, 0), (0, 2)).unwrap();
//! assert_eq!(path, vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]);
//! assert_eq!(path.cost(), 6);
//! ```
//!
//! The behavior of the Graph searches can be adjusted with a [`SearchConfig`]:
//! ```
//! use graph_pathfinding::prelude::*;
//!
//! # let mut graph = Graph::new();
//! # graph.add_vertex("A").unwrap();
//! # graph.add_vertex("B").unwrap();
//! # graph.add_edge("A", "B", 1, EdgeType::Unidirectional).unwrap();
//! let config = SearchConfig {
//!     stop_at_target: false,
//!     ..SearchConfig::CANONICAL
//! };
//! let path = a_star_search_with(&graph, 0, 1, heuristic::Zero, config);
//! assert_eq!(path.map(|p| p.cost()), Some(1));
//! ```
//!
//! ## Features
//! - `parallel` (default): runs the batch searches ([`search::dijkstra_search_all`],
//!   [`search::a_star_search_all`]) on the rayon thread pool.

/// The Type used to reference a Vertex in a [`Graph`]
pub type VertexID = usize;

/// A shorthand for Cells on the Grid, as `(x, y)`
pub type Point = (usize, usize);

mod path;
pub use path::{Cost, Path};

pub mod error;

mod config;
pub use config::SearchConfig;

mod graph;
pub use graph::{Coord, Edge, EdgeType, Graph, Vertex};

pub mod traversal;

pub mod grid;
pub use grid::{Cell, Grid};

pub mod heuristic;

pub mod search;

/// The most commonly used types and functions, for glob-importing
pub mod prelude {
	pub use crate::{
		grid::backtracking_search as grid_backtracking_search,
		heuristic::{self, Euclidean, Heuristic},
		search::{
			a_star_search, a_star_search_with, backtracking_search, backtracking_search_with,
			dijkstra_search, dijkstra_search_with,
		},
		traversal::{breadth_first_traverse, depth_first_traverse, Visitor},
		Cell, Cost, EdgeType, Graph, Grid, Path, Point, SearchConfig, Vertex, VertexID,
	};
}
