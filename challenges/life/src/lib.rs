//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! [`World`] owns the cells and advances them one synchronous generation at a
//! time, tracking population and the last generation at which it changed.
//! [`render`] and [`driver`] put a world on a terminal.

pub mod cell;
pub mod driver;
pub mod error;
pub mod patterns;
pub mod render;
pub mod seeder;
pub mod topology;
pub mod world;

pub use cell::Cell;
pub use error::LifeError;
pub use seeder::{Seed, Seeder};
pub use topology::{Dimensions, Position};
pub use world::World;
