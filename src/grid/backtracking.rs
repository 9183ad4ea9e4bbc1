use super::Grid;
use crate::{Path, Point};

/// down, right, left, up
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 0), (0, -1)];

fn step((x, y): Point, (dx, dy): (isize, isize), (width, height): (usize, usize)) -> Option<Point> {
	let x = x.checked_add_signed(dx)?;
	let y = y.checked_add_signed(dy)?;
	if x < width && y < height {
		Some((x, y))
	} else {
		None
	}
}

/// Searches a [`Grid`] for a Path from `start` to `target` by exhaustive Backtracking.
///
/// From every Cell, the four neighbors are tried in the fixed order down, right, left, up,
/// and the first direction that leads to the target wins. A Cell that was entered once stays
/// marked, even after every direction out of it failed, so no Cell is ever entered twice.
/// The result is therefore *a* Path, not necessarily the shortest one.
///
/// The Cost of the returned Path is its number of steps.
///
/// ## Examples
/// ```
/// use graph_pathfinding::{grid::backtracking_search, Grid};
///
/// let grid = Grid::from_rows(&[
///     "000",
///     "110",
///     "000",
/// ]).unwrap();
///
/// let path = backtracking_search(&grid, (0, 0), (0, 2)).unwrap();
/// assert_eq!(path, vec![(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]);
/// assert_eq!(path.cost(), 6);
/// ```
///
/// ## Returns
/// the Path, if one was found, or `None` if `start` or `target` are outside the Grid or
/// blocked, or if they are not connected.
pub fn backtracking_search(grid: &Grid, start: Point, target: Point) -> Option<Path<Point>> {
	backtracking_search_by(
		(grid.cols(), grid.rows()),
		|pos| grid.is_walkable(pos),
		start,
		target,
	)
}

/// The same search as [`backtracking_search`], on any Grid of the given size.
///
/// ## Arguments
/// - `(width, height)` - the size of the Grid
/// - `is_walkable` - a Function that determines if an in-bounds Cell can be entered
/// - `start` - the Cell the search starts at
/// - `target` - the Cell to search for
///
/// A size whose Cell count overflows `usize` is rejected with `None`.
pub fn backtracking_search_by(
	(width, height): (usize, usize),
	mut is_walkable: impl FnMut(Point) -> bool,
	start: Point,
	target: Point,
) -> Option<Path<Point>> {
	let Some(cell_count) = width.checked_mul(height) else {
		log::warn!("backtracking on a {}x{} grid, too many cells", width, height);
		return None;
	};
	let in_bounds = |(x, y): Point| x < width && y < height;
	if !in_bounds(start) || !in_bounds(target) {
		log::warn!(
			"backtracking from {:?} to {:?} outside a {}x{} grid",
			start,
			target,
			width,
			height
		);
		return None;
	}
	if !is_walkable(start) {
		log::debug!("start {:?} is blocked", start);
		return None;
	}
	log::trace!("checking cell {:?}", start);
	if start == target {
		return Some(Path::new(vec![start], 0));
	}

	let mut visited = vec![false; cell_count];
	let index = |(x, y): Point| y * width + x;

	visited[index(start)] = true;

	// (cell, next direction to try)
	let mut stack: Vec<(Point, usize)> = vec![(start, 0)];

	while let Some(frame) = stack.last_mut() {
		let Some(&dir) = DIRECTIONS.get(frame.1) else {
			// every direction failed, the cell keeps its mark
			stack.pop();
			continue;
		};
		frame.1 += 1;

		let Some(next) = step(frame.0, dir, (width, height)) else {
			continue;
		};
		if visited[index(next)] || !is_walkable(next) {
			continue;
		}
		log::trace!("checking cell {:?}", next);

		if next == target {
			let mut steps: Vec<Point> = stack.iter().map(|&(pos, _)| pos).collect();
			steps.push(target);
			let cost = steps.len() - 1;
			log::debug!("backtracking found a path of {} steps", cost);
			return Some(Path::new(steps, cost));
		}

		visited[index(next)] = true;
		stack.push((next, 0));
	}

	log::debug!("no path from {:?} to {:?}", start, target);
	None
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::{Cell, Grid};

	fn assert_connected(path: &[Point], grid: &Grid) {
		for pair in path.windows(2) {
			let ((ax, ay), (bx, by)) = (pair[0], pair[1]);
			assert_eq!(ax.abs_diff(bx) + ay.abs_diff(by), 1, "{:?} is not a step", pair);
		}
		assert!(path.iter().all(|&p| grid.is_walkable(p)));
	}

	#[test]
	fn open_3x3() {
		let grid = Grid::open(3, 3);
		let path = backtracking_search(&grid, (0, 0), (2, 2)).unwrap();

		assert_eq!(path.first(), Some(&(0, 0)));
		assert_eq!(path.last(), Some(&(2, 2)));
		assert!(path.len() >= 5);
		assert_connected(&path, &grid);
		// down first, all the way
		assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (1, 2), (2, 2)]);
	}

	#[test]
	fn dead_end_is_not_revisited() {
		// the way down from (0, 0) is a dead end, the search has to back out of it
		let grid = Grid::from_rows(&["000", "011", "011"]).unwrap();
		let path = backtracking_search(&grid, (0, 0), (2, 0)).unwrap();

		assert_eq!(path, vec![(0, 0), (1, 0), (2, 0)]);
		assert_eq!(path.cost(), 2);
	}

	#[test]
	fn blocked_start() {
		let mut grid = Grid::open(3, 3);
		grid.set((0, 0), Cell::Blocked);

		assert_eq!(backtracking_search(&grid, (0, 0), (2, 2)), None);
	}

	#[test]
	fn blocked_target() {
		let mut grid = Grid::open(3, 3);
		grid.set((2, 2), Cell::Blocked);

		assert_eq!(backtracking_search(&grid, (0, 0), (2, 2)), None);
	}

	#[test]
	fn disconnected() {
		let grid = Grid::from_rows(&["010", "010", "010"]).unwrap();

		assert_eq!(backtracking_search(&grid, (0, 0), (2, 2)), None);
	}

	#[test]
	fn out_of_bounds() {
		let grid = Grid::open(2, 2);

		assert_eq!(backtracking_search(&grid, (2, 0), (0, 0)), None);
		assert_eq!(backtracking_search(&grid, (0, 0), (0, 5)), None);
	}

	#[test]
	fn start_is_target() {
		let grid = Grid::open(1, 1);
		let path = backtracking_search(&grid, (0, 0), (0, 0)).unwrap();

		assert_eq!(path, vec![(0, 0)]);
		assert_eq!(path.cost(), 0);
	}

	#[test]
	fn maze() {
		let grid = Grid::from_rows(&[
			"0111111",
			"0000001",
			"1110101",
			"1000100",
			"1011111",
			"1000000",
		])
		.unwrap();
		let path = backtracking_search(&grid, (0, 0), (6, 5)).unwrap();

		assert_eq!(path.first(), Some(&(0, 0)));
		assert_eq!(path.last(), Some(&(6, 5)));
		assert_connected(&path, &grid);
	}

	#[test]
	fn closure_grid() {
		// a 4x4 Grid where only the border is walkable
		let path = backtracking_search_by(
			(4, 4),
			|(x, y)| x == 0 || y == 0 || x == 3 || y == 3,
			(0, 0),
			(3, 3),
		)
		.unwrap();

		assert_eq!(path, vec![(0, 0), (0, 1), (0, 2), (0, 3), (1, 3), (2, 3), (3, 3)]);
	}

	#[test]
	fn oversized_grid() {
		assert_eq!(backtracking_search_by((usize::MAX, 2), |_| true, (0, 0), (0, 1)), None);
		assert_eq!(backtracking_search_by((2, usize::MAX), |_| true, (0, 0), (0, 0)), None);
	}
}
