use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifeError {
    /// A grid side is zero, or the cell count does not fit in memory addressing.
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),
}
