use crate::{Cost, VertexID};

/// Planar coordinates of a Vertex, used by the A* heuristic
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Coord {
	/// horizontal position
	pub x: i32,
	/// vertical position
	pub y: i32,
}

impl Coord {
	/// Creates a new Coord
	pub fn new(x: i32, y: i32) -> Coord {
		Coord { x, y }
	}

	/// straight-line distance between two Coords
	///
	/// ## Examples
	/// ```
	/// # use graph_pathfinding::Coord;
	/// assert_eq!(Coord::new(0, 0).distance(Coord::new(3, 4)), 5.0);
	/// ```
	pub fn distance(self, other: Coord) -> f64 {
		let dx = other.x as f64 - self.x as f64;
		let dy = other.y as f64 - self.y as f64;
		dx.hypot(dy)
	}
}

impl From<(i32, i32)> for Coord {
	fn from((x, y): (i32, i32)) -> Coord {
		Coord { x, y }
	}
}

/// A directed connection from the Vertex that stores it to `dest`
///
/// The destination is a plain index into the same [`Graph`](crate::Graph), so an Edge never
/// keeps a Vertex alive on its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
	/// the index of the Vertex this Edge leads to
	pub dest: VertexID,
	/// the Cost of walking along this Edge
	pub weight: Cost,
}

/// Whether [`add_edge`](crate::Graph::add_edge) connects one way or both ways
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeType {
	/// a single Edge from `src` to `dest`
	#[default]
	Unidirectional,
	/// one Edge from `src` to `dest` and one from `dest` to `src`
	Bidirectional,
}

/// A Vertex of a [`Graph`](crate::Graph)
///
/// Vertices are owned by their Graph and can only be created through
/// [`add_vertex`](crate::Graph::add_vertex).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Vertex {
	pub(super) index: VertexID,
	pub(super) label: String,
	pub(super) pos: Option<Coord>,
	pub(super) edges: Vec<Edge>,
}

impl Vertex {
	pub(super) fn new(index: VertexID, label: String, pos: Option<Coord>) -> Vertex {
		Vertex {
			index,
			label,
			pos,
			edges: Vec::new(),
		}
	}

	/// the index of this Vertex. Indices are handed out in insertion order, starting at 0
	pub fn index(&self) -> VertexID {
		self.index
	}

	/// the label of this Vertex, unique within its Graph
	pub fn label(&self) -> &str {
		&self.label
	}

	/// the coordinates of this Vertex, if it was given any
	pub fn pos(&self) -> Option<Coord> {
		self.pos
	}

	/// the outgoing Edges, in the order they were added
	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	/// the number of outgoing Edges
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}
}
