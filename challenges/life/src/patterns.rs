/// Well known Life patterns, as cell offsets from their top-left corner.

use clap::ValueEnum;

use crate::topology::{Dimensions, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Pattern {
    /// 2x2 still life
    Block,
    /// Period 2
    Blinker,
    /// Period 2
    Toad,
    /// Period 2
    Beacon,
    /// Travels diagonally, period 4
    Glider,
    /// Lightweight spaceship, travels horizontally
    Lwss,
    /// Period 3
    Pulsar,
}

impl Pattern {
    pub fn offsets(self) -> Vec<(usize, usize)> {
        match self {
            // **
            // **
            Pattern::Block => vec![(0, 0), (1, 0), (0, 1), (1, 1)],
            // ***
            Pattern::Blinker => vec![(0, 0), (1, 0), (2, 0)],
            //  ***
            // ***
            Pattern::Toad => vec![
                (1, 0), (2, 0), (3, 0),
                (0, 1), (1, 1), (2, 1),
            ],
            // **
            // *
            //    *
            //   **
            Pattern::Beacon => vec![
                (0, 0), (1, 0),
                (0, 1),
                (3, 2),
                (2, 3), (3, 3),
            ],
            //  *
            //   *
            // ***
            Pattern::Glider => vec![
                (1, 0),
                (2, 1),
                (0, 2), (1, 2), (2, 2),
            ],
            //  *  *
            //      *
            //  *   *
            //   ****
            Pattern::Lwss => vec![
                (1, 0), (4, 0),
                (5, 1),
                (1, 2), (5, 2),
                (2, 3), (3, 3), (4, 3), (5, 3),
            ],
            Pattern::Pulsar => {
                let quadrant = [
                    (2, 0), (3, 0), (4, 0),
                    (0, 2), (5, 2),
                    (0, 3), (5, 3),
                    (0, 4), (5, 4),
                    (2, 5), (3, 5), (4, 5),
                ];
                // mirror the quadrant into all four corners of a 13x13 box
                quadrant
                    .iter()
                    .flat_map(|&(dx, dy)| [(dx, dy), (12 - dx, dy), (dx, 12 - dy), (12 - dx, 12 - dy)])
                    .collect()
            }
        }
    }

    /// Cells of the pattern with its corner at (x, y), wrapped onto the grid.
    pub fn place(self, x: usize, y: usize, dims: Dimensions) -> Vec<Position> {
        self.offsets()
            .into_iter()
            .map(|(dx, dy)| Position::new((x + dx) % dims.width(), (y + dy) % dims.height()))
            .collect()
    }
}

/// A mix of oscillators and spaceships spread over a 100x100 area; smaller
/// grids get the same layout folded onto the torus.
pub fn demo_scene(dims: Dimensions) -> Vec<Position> {
    [
        (Pattern::Glider, 10, 10),
        (Pattern::Blinker, 30, 10),
        (Pattern::Toad, 40, 10),
        (Pattern::Beacon, 55, 10),
        (Pattern::Lwss, 70, 10),
        (Pattern::Pulsar, 20, 30),
        (Pattern::Block, 60, 35),
        (Pattern::Glider, 80, 80),
        (Pattern::Glider, 15, 85),
    ]
    .into_iter()
    .flat_map(|(pattern, x, y)| pattern.place(x, y, dims))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pulsar_has_48_cells() {
        let mut cells = Pattern::Pulsar.offsets();
        cells.sort();
        cells.dedup();
        assert_eq!(cells.len(), 48);
    }

    #[test]
    fn test_place_wraps() {
        let dims = Dimensions::new(4, 4).unwrap();
        let cells = Pattern::Blinker.place(3, 3, dims);
        assert_eq!(
            cells,
            vec![Position::new(3, 3), Position::new(0, 3), Position::new(1, 3)]
        );
    }

    #[test]
    fn test_demo_scene_stays_in_bounds() {
        let dims = Dimensions::new(37, 23).unwrap();
        assert!(demo_scene(dims).into_iter().all(|p| dims.contains(p)));
    }
}
