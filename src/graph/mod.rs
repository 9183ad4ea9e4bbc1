//! The Graph Store: an arena of labelled Vertices with ordered, weighted, directed Edges.

mod vertex;
pub use vertex::{Coord, Edge, EdgeType, Vertex};

use crate::{error::GraphError, Cost, VertexID};
use hashbrown::HashMap;

/// A directed Graph of labelled Vertices
///
/// Vertices are stored in an arena and addressed by their [`VertexID`], which is assigned in
/// insertion order starting at 0 and stays valid until the Graph is cleared. Labels are unique within
/// a Graph. Edges are kept per Vertex in the order they were added, which makes every search
/// in this crate deterministic.
///
/// Vertices and Edges can only be added. Dropping the Graph (or calling
/// [`delete`](Graph::delete)) releases all of them at once.
///
/// ## Examples
/// ```
/// use graph_pathfinding::{EdgeType, Graph};
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex("A").unwrap();
/// let b = graph.add_vertex("B").unwrap();
///
/// assert_eq!((a, b), (0, 1));
/// assert!(graph.add_vertex("A").is_err());
///
/// graph.add_edge("A", "B", 1, EdgeType::Bidirectional).unwrap();
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph[a].edges()[0].dest, b);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
	vertices: slab::Slab<Vertex>,
	labels: HashMap<String, VertexID>,
	edge_count: usize,
}

impl Graph {
	/// Creates an empty Graph
	pub fn new() -> Graph {
		Graph::default()
	}

	/// Creates an empty Graph with room for `capacity` Vertices
	pub fn with_capacity(capacity: usize) -> Graph {
		Graph {
			vertices: slab::Slab::with_capacity(capacity),
			labels: HashMap::with_capacity(capacity),
			edge_count: 0,
		}
	}

	/// the number of Vertices
	pub fn len(&self) -> usize {
		self.vertices.len()
	}

	/// `true` if the Graph has no Vertices
	pub fn is_empty(&self) -> bool {
		self.vertices.is_empty()
	}

	/// the number of directed Edges. A bidirectional connection counts twice
	pub fn edge_count(&self) -> usize {
		self.edge_count
	}

	/// Adds a Vertex without coordinates.
	///
	/// Returns the index of the new Vertex, or [`GraphError::DuplicateLabel`] if the label is
	/// already taken, in which case the Graph is left unchanged.
	pub fn add_vertex(&mut self, label: impl Into<String>) -> Result<VertexID, GraphError> {
		self.insert_vertex(label.into(), None)
	}

	/// Adds a Vertex at the coordinates `(x, y)`.
	///
	/// Coordinates are only used by the A* heuristic. See [`add_vertex`](Graph::add_vertex) for
	/// the error cases.
	pub fn add_vertex_at(
		&mut self,
		label: impl Into<String>,
		x: i32,
		y: i32,
	) -> Result<VertexID, GraphError> {
		self.insert_vertex(label.into(), Some(Coord::new(x, y)))
	}

	fn insert_vertex(&mut self, label: String, pos: Option<Coord>) -> Result<VertexID, GraphError> {
		if self.labels.contains_key(&label) {
			log::debug!("rejected duplicate vertex {:?}", label);
			return Err(GraphError::DuplicateLabel(label));
		}
		let entry = self.vertices.vacant_entry();
		let id = entry.key();
		entry.insert(Vertex::new(id, label.clone(), pos));
		self.labels.insert(label, id);
		Ok(id)
	}

	/// Connects the Vertices labelled `src` and `dest`.
	///
	/// An [`EdgeType::Unidirectional`] connection appends one Edge `src -> dest`, a
	/// [`EdgeType::Bidirectional`] one also appends `dest -> src`. New Edges always go to
	/// the end of the Edge list of their Vertex.
	///
	/// Returns [`GraphError::UnknownVertex`] if either label is missing, in which case the
	/// Graph is left unchanged.
	pub fn add_edge(
		&mut self,
		src: &str,
		dest: &str,
		weight: Cost,
		kind: EdgeType,
	) -> Result<(), GraphError> {
		let src_id = self
			.id_of(src)
			.ok_or_else(|| GraphError::UnknownVertex(src.to_owned()))?;
		let dest_id = self
			.id_of(dest)
			.ok_or_else(|| GraphError::UnknownVertex(dest.to_owned()))?;

		self[src_id].edges.push(Edge {
			dest: dest_id,
			weight,
		});
		self.edge_count += 1;

		if kind == EdgeType::Bidirectional {
			self[dest_id].edges.push(Edge {
				dest: src_id,
				weight,
			});
			self.edge_count += 1;
		}
		Ok(())
	}

	/// Releases every Vertex and Edge, leaving an empty Graph.
	///
	/// Calling this on an empty Graph does nothing.
	pub fn delete(&mut self) {
		if self.is_empty() {
			return;
		}
		self.vertices.clear();
		self.labels.clear();
		self.edge_count = 0;
	}

	/// the Vertex with the given index, if any
	pub fn vertex(&self, id: VertexID) -> Option<&Vertex> {
		self.vertices.get(id)
	}

	/// the index of the Vertex with the given label, if any
	pub fn id_of(&self, label: &str) -> Option<VertexID> {
		self.labels.get(label).copied()
	}

	/// the Vertex with the given label, if any
	pub fn vertex_by_label(&self, label: &str) -> Option<&Vertex> {
		self.id_of(label).map(|id| &self[id])
	}

	/// `true` if `id` refers to a Vertex of this Graph
	pub fn contains(&self, id: VertexID) -> bool {
		self.vertices.contains(id)
	}

	/// Returns an Iterator over all Vertices in insertion order
	pub fn iter(&self) -> impl Iterator<Item = &Vertex> + '_ {
		self.vertices.iter().map(|(_, vertex)| vertex)
	}

	/// the first Vertex that was added, where all traversals start
	pub fn first(&self) -> Option<&Vertex> {
		self.vertex(0)
	}
}

use std::ops::{Index, IndexMut};
impl Index<VertexID> for Graph {
	type Output = Vertex;
	#[track_caller]
	fn index(&self, index: VertexID) -> &Vertex {
		&self.vertices[index]
	}
}
impl IndexMut<VertexID> for Graph {
	#[track_caller]
	fn index_mut(&mut self, index: VertexID) -> &mut Vertex {
		&mut self.vertices[index]
	}
}

use std::fmt;
impl fmt::Display for Graph {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		writeln!(fmt, "Number of vertices: {}", self.len())?;
		for vertex in self.iter() {
			write!(fmt, "[{}] {}", vertex.index, vertex.label)?;
			if let Some(Coord { x, y }) = vertex.pos {
				write!(fmt, " ({}, {})", x, y)?;
			}
			for edge in vertex.edges.iter() {
				write!(fmt, " ->{}:{}", edge.dest, edge.weight)?;
			}
			writeln!(fmt)?;
		}
		Ok(())
	}
}
