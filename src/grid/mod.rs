//! A rectangular occupancy Grid and the Backtracking search that walks it.

mod backtracking;
pub use backtracking::{backtracking_search, backtracking_search_by};

use crate::{error::GridError, Point};

/// The state of a single Cell of a [`Grid`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Cell {
	/// the Cell can be entered
	#[default]
	Walkable,
	/// the Cell can never be entered
	Blocked,
}

impl Cell {
	/// `'0'` is walkable, `'1'` is blocked
	pub fn from_char(c: char) -> Option<Cell> {
		match c {
			'0' => Some(Cell::Walkable),
			'1' => Some(Cell::Blocked),
			_ => None,
		}
	}

	/// the inverse of [`from_char`](Cell::from_char)
	pub fn to_char(self) -> char {
		match self {
			Cell::Walkable => '0',
			Cell::Blocked => '1',
		}
	}
}

/// A rectangular matrix of [`Cell`]s, addressed by `(x, y)` with `x` being the column and
/// `y` the row.
///
/// ## Examples
/// ```
/// use graph_pathfinding::{Cell, Grid};
///
/// let grid = Grid::from_rows(&[
///     "0010",
///     "0000",
/// ]).unwrap();
///
/// assert_eq!((grid.cols(), grid.rows()), (4, 2));
/// assert_eq!(grid.get((2, 0)), Some(Cell::Blocked));
/// assert!(grid.is_walkable((2, 1)));
/// assert!(!grid.is_walkable((4, 0)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
	rows: usize,
	cols: usize,
	cells: Vec<Cell>,
}

impl Grid {
	/// Creates a Grid from `rows * cols` Cells in row-major order
	pub fn new(rows: usize, cols: usize, cells: Vec<Cell>) -> Result<Grid, GridError> {
		match rows.checked_mul(cols) {
			Some(expected) if expected == cells.len() => Ok(Grid { rows, cols, cells }),
			expected => Err(GridError::SizeMismatch {
				expected: expected.unwrap_or(usize::MAX),
				found: cells.len(),
			}),
		}
	}

	/// Creates a Grid where every Cell is walkable
	///
	/// ## Panics
	/// if `rows * cols` Cells cannot be allocated, like `vec!` does
	pub fn open(rows: usize, cols: usize) -> Grid {
		Grid {
			rows,
			cols,
			cells: vec![Cell::Walkable; rows * cols],
		}
	}

	/// Parses a Grid from text rows of `'0'` (walkable) and `'1'` (blocked).
	///
	/// All rows must have the same length.
	pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Grid, GridError> {
		let cols = rows.first().map_or(0, |row| row.as_ref().chars().count());
		let mut cells = Vec::with_capacity(rows.len().checked_mul(cols).unwrap_or(0));

		for (y, row) in rows.iter().enumerate() {
			let row = row.as_ref();
			let found = row.chars().count();
			if found != cols {
				return Err(GridError::RaggedRow {
					row: y,
					expected: cols,
					found,
				});
			}
			for (x, c) in row.chars().enumerate() {
				let cell = Cell::from_char(c).ok_or(GridError::UnknownCell {
					row: y,
					col: x,
					found: c,
				})?;
				cells.push(cell);
			}
		}

		Ok(Grid {
			rows: rows.len(),
			cols,
			cells,
		})
	}

	/// the number of rows (the height)
	pub fn rows(&self) -> usize {
		self.rows
	}

	/// the number of columns (the width)
	pub fn cols(&self) -> usize {
		self.cols
	}

	fn index(&self, (x, y): Point) -> Option<usize> {
		if x < self.cols && y < self.rows {
			Some(y * self.cols + x)
		} else {
			None
		}
	}

	/// the Cell at `(x, y)`, or `None` if that is outside the Grid
	pub fn get(&self, pos: Point) -> Option<Cell> {
		self.index(pos).map(|i| self.cells[i])
	}

	/// Changes the Cell at `(x, y)`. Returns `false` if that is outside the Grid.
	pub fn set(&mut self, pos: Point, cell: Cell) -> bool {
		match self.index(pos) {
			Some(i) => {
				self.cells[i] = cell;
				true
			}
			None => false,
		}
	}

	/// `true` if `(x, y)` is inside the Grid and not blocked
	pub fn is_walkable(&self, pos: Point) -> bool {
		self.get(pos) == Some(Cell::Walkable)
	}
}

impl std::str::FromStr for Grid {
	type Err = GridError;
	fn from_str(s: &str) -> Result<Grid, GridError> {
		let rows: Vec<&str> = s.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
		Grid::from_rows(&rows)
	}
}

use std::fmt;
impl fmt::Display for Grid {
	fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
		for row in self.cells.chunks(self.cols.max(1)) {
			for cell in row {
				write!(fmt, "{}", cell.to_char())?;
			}
			writeln!(fmt)?;
		}
		Ok(())
	}
}
