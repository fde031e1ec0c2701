//! Draws a world onto a terminal: one glyph per cell, offset by the world's
//! origin, and a status line under the grid.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};

use crate::world::World;

pub const ALIVE: char = '█';
pub const DEAD: char = '░';

pub fn glyph(alive: bool) -> char {
    if alive { ALIVE } else { DEAD }
}

/// `Generation: G  Cells: C  Population: P  Equilibrium: E`, tab separated.
/// `E` is -1 until the population has changed at least once.
pub fn status_line(world: &World) -> String {
    let equilibrium = match world.last_change_generation() {
        Some(generation) => generation.to_string(),
        None => "-1".to_string(),
    };
    format!(
        "Generation: {} \tCells: {} \tPopulation: {}  \tEquilibrium: {}",
        world.generation(),
        world.cell_count(),
        world.alive_count(),
        equilibrium
    )
}

pub fn draw<W: Write>(out: &mut W, world: &World) -> io::Result<()> {
    let origin = world.origin();
    let mut row = String::with_capacity(world.width() * ALIVE.len_utf8());

    for (y, cells) in world.cells().chunks(world.width()).enumerate() {
        row.clear();
        row.extend(cells.iter().map(|cell| glyph(cell.is_alive())));
        queue!(out, MoveTo(coord(origin.x)?, coord(origin.y + y)?), Print(&row))?;
    }

    queue!(
        out,
        MoveTo(coord(origin.x)?, coord(origin.y + world.height())?),
        Clear(ClearType::UntilNewLine),
        Print(status_line(world))
    )?;
    out.flush()
}

/// Show `message` in the top-left corner of the screen.
pub fn prompt<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    queue!(out, MoveTo(0, 0), Print(message))?;
    out.flush()
}

fn coord(value: usize) -> io::Result<u16> {
    u16::try_from(value).map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("screen coordinate {} out of range", value),
        )
    })
}
