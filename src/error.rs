//! Errors reported while building a [`Graph`](crate::Graph) or a [`Grid`](crate::Grid).
//!
//! All of them are caller-correctable: the structure that reported the error is left exactly
//! as it was before the call.

/// Errors from mutating a [`Graph`](crate::Graph)
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
	/// A Vertex with this label is already part of the Graph
	#[error("a vertex labelled {0:?} already exists")]
	DuplicateLabel(String),

	/// No Vertex with this label is part of the Graph
	#[error("no vertex labelled {0:?}")]
	UnknownVertex(String),
}

/// Errors from building a [`Grid`](crate::Grid)
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
	/// A row is shorter or longer than the first one
	#[error("row {row} has {found} cells, expected {expected}")]
	RaggedRow {
		/// index of the offending row
		row: usize,
		/// length of the first row
		expected: usize,
		/// length of the offending row
		found: usize,
	},

	/// A character that is neither `'0'` (walkable) nor `'1'` (blocked)
	#[error("unknown cell {found:?} at row {row}, column {col}")]
	UnknownCell {
		/// row of the offending character
		row: usize,
		/// column of the offending character
		col: usize,
		/// the character itself
		found: char,
	},

	/// The number of cells does not match `rows * cols`
	#[error("expected {expected} cells, found {found}")]
	SizeMismatch {
		/// `rows * cols`, or `usize::MAX` if that overflows
		expected: usize,
		/// the number of cells supplied
		found: usize,
	},
}
