use super::Cost;

/// An ordered sequence of Nodes from a start to a target, along with the total Cost
/// of walking it.
///
/// For searches over a [`Graph`](crate::Graph), the Nodes are the labels of the visited
/// Vertices and the Cost is the sum of the weights of the Edges that were followed.
/// For searches on a [`Grid`](crate::Grid), the Nodes are Cells and the Cost is the number of steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<P> {
	path: Vec<P>,
	cost: Cost,
}

impl<P> Path<P> {
	/// creates a new Path with the given sequence of Nodes and total Cost
	/// ## Examples
	/// Basic usage:
	/// ```
	/// # use graph_pathfinding::Path;
	/// let path = Path::new(vec!['a', 'b', 'c'], 42);
	///
	/// assert_eq!(path.len(), 3);
	/// assert_eq!(path.cost(), 42);
	/// ```
	pub fn new(path: Vec<P>, cost: Cost) -> Path<P> {
		Path { path, cost }
	}

	/// the total Cost of the Path
	pub fn cost(&self) -> Cost {
		self.cost
	}

	/// the number of Nodes in the Path, including start and target
	pub fn len(&self) -> usize {
		self.path.len()
	}

	/// `true` if the Path has no Nodes at all
	pub fn is_empty(&self) -> bool {
		self.path.is_empty()
	}

	/// Returns an Iterator over the Nodes from start to target
	pub fn iter(&self) -> std::slice::Iter<'_, P> {
		self.path.iter()
	}

	/// Turns the Path into the plain sequence of Nodes, dropping the Cost
	pub fn into_vec(self) -> Vec<P> {
		self.path
	}

	/// Applies `f` to every Node, keeping order and Cost
	pub fn map<Q>(self, f: impl FnMut(P) -> Q) -> Path<Q> {
		Path::new(self.path.into_iter().map(f).collect(), self.cost)
	}
}

use std::ops::{Deref, Index};

impl<P> Index<usize> for Path<P> {
	type Output = P;
	fn index(&self, index: usize) -> &P {
		&self.path[index]
	}
}

impl<P> Deref for Path<P> {
	type Target = [P];
	fn deref(&self) -> &[P] {
		&self.path
	}
}

impl<P> IntoIterator for Path<P> {
	type Item = P;
	type IntoIter = std::vec::IntoIter<P>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.into_iter()
	}
}

impl<'a, P> IntoIterator for &'a Path<P> {
	type Item = &'a P;
	type IntoIter = std::slice::Iter<'a, P>;
	fn into_iter(self) -> Self::IntoIter {
		self.path.iter()
	}
}

impl<P: PartialEq> PartialEq<Vec<P>> for Path<P> {
	fn eq(&self, rhs: &Vec<P>) -> bool {
		self.path == *rhs
	}
}

impl<'a, P: PartialEq> PartialEq<&'a [P]> for Path<P> {
	fn eq(&self, rhs: &&'a [P]) -> bool {
		self.path.as_slice() == *rhs
	}
}

use std::cmp::Ordering;

impl<P: Eq> Ord for Path<P> {
	fn cmp(&self, other: &Path<P>) -> Ordering {
		self.cost.cmp(&other.cost)
	}
}

impl<P: PartialEq> PartialOrd for Path<P> {
	fn partial_cmp(&self, other: &Path<P>) -> Option<Ordering> {
		Some(self.cost.cmp(&other.cost))
	}
}

use std::fmt;
impl<P: fmt::Display> fmt::Display for Path<P> {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		write!(fmt, "Path[Cost = {}]: ", self.cost)?;
		if self.path.is_empty() {
			write!(fmt, "<empty>")
		} else {
			write!(fmt, "{}", self.path[0])?;
			for p in self.path.iter().skip(1) {
				write!(fmt, " -> {}", p)?;
			}
			Ok(())
		}
	}
}
