use crate::topology::Position;

/// A single cell of the grid.
///
/// Neighbors are indices into the owning [`crate::world::World`]'s cell vector;
/// a cell never holds references to other cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    alive: bool,
    was_alive: bool,
    life_span: u64,
    position: Position,
    neighbors: Vec<usize>,
}

impl Cell {
    pub(crate) fn new(position: Position, neighbors: Vec<usize>, alive: bool) -> Cell {
        Cell {
            alive,
            was_alive: false,
            life_span: 0,
            position,
            neighbors,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// State at the start of the generation being computed.
    pub fn was_alive(&self) -> bool {
        self.was_alive
    }

    /// Consecutive generations this cell has been alive, 0 while dead.
    pub fn life_span(&self) -> u64 {
        self.life_span
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }

    /// Snapshot the current state. Every cell of a grid must be saved before
    /// any of them is processed.
    pub(crate) fn save_state(&mut self) {
        self.was_alive = self.alive;
    }

    /// Live neighbors as of the last snapshot. Only `was_alive` is read, so the
    /// count is unaffected by neighbors already processed this generation.
    pub(crate) fn alive_neighbors(&self, cells: &[Cell]) -> usize {
        self.neighbors
            .iter()
            .filter(|&&idx| cells[idx].was_alive)
            .count()
    }

    /// Apply the B3/S23 rule given the snapshot neighbor count.
    pub(crate) fn process(&mut self, alive_neighbors: usize) {
        self.alive = match (self.alive, alive_neighbors) {
            (true, n) if !(2..=3).contains(&n) => false, // under/overpopulation
            (false, 3) => true,                          // birth
            (alive, _) => alive,
        };

        if self.alive {
            self.life_span += 1;
        } else {
            self.life_span = 0;
        }
    }
}
