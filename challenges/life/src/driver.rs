use std::fmt;
use std::future::Future;
use std::io::Write;
use std::time::Duration;

use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::time::{self, MissedTickBehavior};

use crate::error::LifeError;
use crate::render;
use crate::world::World;

/// The engine never stops on its own; this decides when a run is over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StopPolicy {
    /// Stop once the generation counter reaches this value.
    pub max_generations: Option<u64>,
    /// Stop once the population has not changed for this many generations.
    pub stable_for: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    MaxGenerations(u64),
    /// Population unchanged since generation `since`.
    Stable { since: u64 },
    Interrupted,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::MaxGenerations(generation) => {
                write!(f, "reached generation {}", generation)
            }
            StopReason::Stable { since } => {
                write!(f, "population stable since generation {}", since)
            }
            StopReason::Interrupted => write!(f, "interrupted"),
        }
    }
}

impl StopPolicy {
    pub fn should_stop(&self, world: &World) -> Option<StopReason> {
        let generation = world.generation();
        if self.max_generations.is_some_and(|max| generation >= max) {
            return Some(StopReason::MaxGenerations(generation));
        }
        if let Some(stable_for) = self.stable_for {
            // no recorded change means stable since construction
            let since = world.last_change_generation().unwrap_or(1);
            if generation.saturating_sub(since) >= stable_for {
                return Some(StopReason::Stable { since });
            }
        }
        None
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Settings {
    /// Pause between generations.
    pub interval: Duration,
    pub policy: StopPolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            interval: Duration::from_millis(50),
            policy: StopPolicy::default(),
        }
    }
}

/// Block until a full line (or end of input) has been read.
pub async fn wait_for_enter<R: AsyncBufRead + Unpin>(reader: &mut R) -> std::io::Result<()> {
    let mut line = String::new();
    reader.read_line(&mut line).await?;
    Ok(())
}

/// Advance and redraw `world` once per interval until the stop policy fires
/// or `shutdown` completes.
pub async fn run<W: Write>(
    world: &mut World,
    out: &mut W,
    settings: Settings,
    shutdown: impl Future,
) -> Result<StopReason, LifeError> {
    info!(
        "running {}x{} world every {:?}",
        world.width(),
        world.height(),
        settings.interval
    );
    tokio::select! {
        res = tick(world, out, settings) => res,
        _ = shutdown => {
            info!("shutting down");
            Ok(StopReason::Interrupted)
        }
    }
}

async fn tick<W: Write>(
    world: &mut World,
    out: &mut W,
    settings: Settings,
) -> Result<StopReason, LifeError> {
    // tokio rejects a zero period
    let mut ticker = time::interval(settings.interval.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    // the first tick completes immediately
    ticker.tick().await;

    loop {
        if let Some(reason) = settings.policy.should_stop(world) {
            return Ok(reason);
        }
        world.advance();
        render::draw(out, world)?;
        ticker.tick().await;
    }
}
