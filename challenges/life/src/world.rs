use log::{debug, trace};

use crate::cell::Cell;
use crate::error::LifeError;
use crate::seeder::Seed;
use crate::topology::{self, Dimensions, Position};

/// A toroidal Game of Life grid and its population statistics.
///
/// Construction counts as generation 1. Each [`World::advance`] computes the
/// next generation synchronously: every cell snapshots its state before any
/// cell applies the rule.
#[derive(Debug, Clone)]
pub struct World {
    origin: Position,
    dimensions: Dimensions,
    cells: Vec<Cell>,
    generation: u64,
    alive_count: usize,
    last_change: Option<u64>,
}

impl World {
    /// Build a `width` x `height` grid, asking `seeder` once per cell (in
    /// row-major order) whether it starts alive. `origin` is where a renderer
    /// places the grid's top-left corner; the engine itself never reads it.
    pub fn new(
        origin: Position,
        width: usize,
        height: usize,
        mut seeder: impl Seed,
    ) -> Result<World, LifeError> {
        let dimensions = Dimensions::new(width, height)?;
        let cells: Vec<Cell> = topology::build(dimensions)
            .into_iter()
            .enumerate()
            .map(|(idx, neighbors)| {
                let position = dimensions.position(idx);
                let alive = seeder.seed(position, dimensions);
                Cell::new(position, neighbors, alive)
            })
            .collect();

        let alive_count = count_alive(&cells);
        debug!(
            "built {}x{} world with {} live cells",
            width, height, alive_count
        );

        Ok(World {
            origin,
            dimensions,
            cells,
            generation: 1,
            alive_count,
            last_change: None,
        })
    }

    /// Compute the next generation.
    pub fn advance(&mut self) {
        // The snapshot pass must complete before any cell is processed;
        // interleaving the two would leak this generation's results into
        // neighbor counts.
        for cell in self.cells.iter_mut() {
            cell.save_state();
        }
        for idx in 0..self.cells.len() {
            let alive_neighbors = self.cells[idx].alive_neighbors(&self.cells);
            self.cells[idx].process(alive_neighbors);
        }
        self.generation += 1;
        self.analyze();
        trace!(
            "generation {}: population {}",
            self.generation, self.alive_count
        );
    }

    /// Advance `n` generations.
    pub fn advance_by(&mut self, n: u64) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Recount the population and record the generation if it changed.
    ///
    /// This tracks population only: a pattern that rearranges itself without
    /// changing its cell count (any constant-population oscillator, for
    /// instance) is reported as unchanged.
    pub fn analyze(&mut self) {
        let previous = self.alive_count;
        self.alive_count = count_alive(&self.cells);
        if self.alive_count != previous {
            debug!(
                "population changed {} -> {} at generation {}",
                previous, self.alive_count, self.generation
            );
            self.last_change = Some(self.generation);
        }
    }

    pub fn origin(&self) -> Position {
        self.origin
    }

    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    pub fn width(&self) -> usize {
        self.dimensions.width()
    }

    pub fn height(&self) -> usize {
        self.dimensions.height()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn alive_count(&self) -> usize {
        self.alive_count
    }

    /// Most recent generation at which the population differed from the
    /// generation before it. `None` until the first change after construction.
    pub fn last_change_generation(&self) -> Option<u64> {
        self.last_change
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, position: Position) -> Option<&Cell> {
        if !self.dimensions.contains(position) {
            return None;
        }
        self.cells.get(self.dimensions.index(position))
    }

    pub fn is_alive(&self, position: Position) -> bool {
        self.cell(position).is_some_and(Cell::is_alive)
    }
}

fn count_alive(cells: &[Cell]) -> usize {
    cells.iter().filter(|cell| cell.is_alive()).count()
}
