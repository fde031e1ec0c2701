use std::io::{self, Write};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use crossterm::cursor::{Hide, Show};
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use log::info;
use tokio::io::BufReader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use life::driver::{self, Settings, StopPolicy};
use life::patterns::{self, Pattern};
use life::{render, Dimensions, LifeError, Position, Seeder, World};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SeederKind {
    /// Coin flip per cell
    Random,
    /// Coin flip per cell, seeded by its position
    PositionHash,
    /// Alive where x * y is a Fibonacci number
    Fibonacci,
    /// A named pattern, or a demo scene when none is given
    Pattern,
}

#[derive(Parser, Debug)]
#[command(name = "life")]
#[command(about = "Conway's Game of Life on a toroidal grid", long_about = None)]
struct Cli {
    #[arg(long, default_value_t = 100)]
    width: usize,
    #[arg(long, default_value_t = 100)]
    height: usize,
    /// Screen column of the grid's left edge
    #[arg(long, default_value_t = 2)]
    origin_x: usize,
    /// Screen row of the grid's top edge
    #[arg(long, default_value_t = 2)]
    origin_y: usize,
    #[arg(short, long, value_enum, default_value_t = SeederKind::Random)]
    seeder: SeederKind,
    /// Makes `random` reproducible; salts `position-hash`
    #[arg(long)]
    seed: Option<u64>,
    #[arg(short, long, value_enum)]
    pattern: Option<Pattern>,
    #[arg(long, default_value_t = 0)]
    pattern_x: usize,
    #[arg(long, default_value_t = 0)]
    pattern_y: usize,
    /// Milliseconds between generations
    #[arg(short, long, default_value_t = 50)]
    interval_ms: u64,
    #[arg(long)]
    max_generations: Option<u64>,
    /// Stop once the population has not changed for this many generations
    #[arg(long)]
    stop_after_stable: Option<u64>,
    /// Start immediately instead of waiting for Enter
    #[arg(long)]
    no_wait: bool,
}

impl Cli {
    fn seeder(&self) -> Result<Seeder, LifeError> {
        Ok(match self.seeder {
            SeederKind::Random => match self.seed {
                Some(seed) => Seeder::seeded(seed),
                None => Seeder::random(),
            },
            SeederKind::PositionHash => Seeder::position_hash(self.seed.unwrap_or(0)),
            SeederKind::Fibonacci => Seeder::Fibonacci,
            SeederKind::Pattern => {
                let dims = Dimensions::new(self.width, self.height)?;
                match self.pattern {
                    Some(pattern) => Seeder::points(pattern.place(self.pattern_x, self.pattern_y, dims)),
                    None => Seeder::points(patterns::demo_scene(dims)),
                }
            }
        })
    }

    fn settings(&self) -> Settings {
        Settings {
            interval: Duration::from_millis(self.interval_ms),
            policy: StopPolicy {
                max_generations: self.max_generations,
                stable_for: self.stop_after_stable,
            },
        }
    }
}

/// Alternate screen with a hidden cursor, restored on drop.
struct Screen;

impl Screen {
    fn enter<W: Write>(out: &mut W) -> io::Result<Screen> {
        execute!(out, EnterAlternateScreen, Hide, Clear(ClearType::All))?;
        Ok(Screen)
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> Result<(), LifeError> {
    // logs go to stderr so they never land inside a frame; RUST_LOG selects the level.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Cli::parse();
    let origin = Position::new(args.origin_x, args.origin_y);
    let mut world = World::new(origin, args.width, args.height, args.seeder()?)?;
    info!(
        "seeded {:?}: {} of {} cells alive",
        args.seeder,
        world.alive_count(),
        world.cell_count()
    );

    let mut out = io::stdout().lock();
    let screen = Screen::enter(&mut out)?;
    render::draw(&mut out, &world)?;

    if !args.no_wait {
        render::prompt(&mut out, "Press Enter to begin!")?;
        let mut stdin = BufReader::new(tokio::io::stdin());
        tokio::select! {
            res = driver::wait_for_enter(&mut stdin) => res?,
            _ = signal::ctrl_c() => {
                info!("interrupted before start");
                drop(screen);
                // the pending stdin read would otherwise hold the runtime open
                std::process::exit(0);
            }
        }
        render::prompt(&mut out, &" ".repeat("Press Enter to begin!".len()))?;
    }

    let reason = driver::run(&mut world, &mut out, args.settings(), signal::ctrl_c()).await?;
    drop(screen);
    info!(
        "stopped at generation {}: {} (population {}, equilibrium {:?})",
        world.generation(),
        reason,
        world.alive_count(),
        world.last_change_generation()
    );
    Ok(())
}
