//! Toroidal grid topology: every cell's neighbors, computed once per grid.

use crate::error::LifeError;

/// A cell coordinate, 0-indexed. `x` runs along the width, `y` along the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Grid dimensions. Both sides are at least 1 and `width * height` fits in a `usize`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: usize,
    height: usize,
}

impl Dimensions {
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        if width == 0 || height == 0 || width.checked_mul(height).is_none() {
            return Err(LifeError::InvalidDimensions { width, height });
        }
        Ok(Self { width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Flat index of a position, row-major.
    pub fn index(&self, position: Position) -> usize {
        position.y * self.width + position.x
    }

    /// Inverse of [`Dimensions::index`].
    pub fn position(&self, index: usize) -> Position {
        Position::new(index % self.width, index / self.width)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x < self.width && position.y < self.height
    }
}

const OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Wrap coordinate for toroidal topology.
/// Mathematical modulo, so negative coordinates land on the far edge.
pub fn wrap(coord: isize, max: usize) -> usize {
    coord.rem_euclid(max as isize) as usize
}

/// Indices of the distinct cells adjacent to `position` on the torus, in
/// row-major offset order. The cell itself is never included, and a cell
/// reached through two different offsets (grids narrower than 3) appears once.
pub fn neighbors_of(dims: Dimensions, position: Position) -> Vec<usize> {
    let own = dims.index(position);
    let x = position.x as isize;
    let y = position.y as isize;

    let mut neighbors = Vec::with_capacity(OFFSETS.len());
    for (dx, dy) in OFFSETS {
        let nx = wrap(x + dx, dims.width);
        let ny = wrap(y + dy, dims.height);
        let idx = dims.index(Position::new(nx, ny));
        if idx != own && !neighbors.contains(&idx) {
            neighbors.push(idx);
        }
    }
    neighbors
}

/// Adjacency lists for every cell of the grid, indexed like the cells themselves.
pub fn build(dims: Dimensions) -> Vec<Vec<usize>> {
    (0..dims.area())
        .map(|idx| neighbors_of(dims, dims.position(idx)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dims(width: usize, height: usize) -> Dimensions {
        Dimensions::new(width, height).unwrap()
    }

    #[test]
    fn test_wrap_positive() {
        assert_eq!(wrap(0, 10), 0);
        assert_eq!(wrap(5, 10), 5);
        assert_eq!(wrap(9, 10), 9);
    }

    #[test]
    fn test_wrap_negative() {
        assert_eq!(wrap(-1, 10), 9);
        assert_eq!(wrap(-10, 10), 0);
        assert_eq!(wrap(-11, 10), 9);
    }

    #[test]
    fn test_wrap_overflow() {
        assert_eq!(wrap(10, 10), 0);
        assert_eq!(wrap(11, 10), 1);
        assert_eq!(wrap(20, 10), 0);
    }

    #[test]
    fn test_wrap_unit() {
        assert_eq!(wrap(-1, 1), 0);
        assert_eq!(wrap(1, 1), 0);
    }

    #[test]
    fn test_rejects_empty_dimensions() {
        assert!(matches!(
            Dimensions::new(0, 5),
            Err(LifeError::InvalidDimensions { width: 0, height: 5 })
        ));
        assert!(matches!(Dimensions::new(5, 0), Err(LifeError::InvalidDimensions { .. })));
        assert!(matches!(Dimensions::new(usize::MAX, 2), Err(LifeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_index_round_trip() {
        let d = dims(7, 3);
        assert_eq!(d.index(Position::new(2, 1)), 9);
        assert_eq!(d.position(9), Position::new(2, 1));
        assert_eq!(d.position(d.area() - 1), Position::new(6, 2));
    }

    #[test]
    fn test_corner_wraps_diagonally() {
        for (w, h) in [(3, 3), (5, 4), (10, 10), (2, 7)] {
            let d = dims(w, h);
            let neighbors = neighbors_of(d, Position::new(0, 0));
            assert!(neighbors.contains(&d.index(Position::new(w - 1, h - 1))), "{}x{}", w, h);
            assert!(!neighbors.contains(&0), "{}x{}", w, h);
        }
    }

    #[test]
    fn test_eight_neighbors_when_at_least_3x3() {
        for (w, h) in [(3, 3), (3, 8), (6, 4), (12, 12)] {
            let adjacency = build(dims(w, h));
            assert_eq!(adjacency.len(), w * h);
            assert!(adjacency.iter().all(|n| n.len() == 8), "{}x{}", w, h);
        }
    }

    #[test]
    fn test_degenerate_ring_has_no_duplicates() {
        for (w, h) in [(1, 1), (1, 2), (1, 5), (5, 1), (2, 2), (2, 5)] {
            for neighbors in build(dims(w, h)) {
                let mut sorted = neighbors.clone();
                sorted.sort();
                sorted.dedup();
                assert_eq!(sorted.len(), neighbors.len(), "{}x{}", w, h);
                // distinct columns times distinct rows, minus the cell itself
                assert_eq!(neighbors.len(), w.min(3) * h.min(3) - 1, "{}x{}", w, h);
            }
        }
    }

    #[test]
    fn test_single_cell_has_no_neighbors() {
        assert!(neighbors_of(dims(1, 1), Position::new(0, 0)).is_empty());
    }

    #[test]
    fn test_2x2_neighbors_are_the_other_three() {
        let d = dims(2, 2);
        let mut neighbors = neighbors_of(d, Position::new(1, 0));
        neighbors.sort();
        assert_eq!(neighbors, vec![0, 2, 3]);
    }
}
