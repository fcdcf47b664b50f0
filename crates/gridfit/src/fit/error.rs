//! Failure modes shared by the fitters.

use thiserror::Error;

/// Why a fit produced no shape.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FitError {
    #[error("need at least {needed} points, got {got}")]
    TooFewPoints { needed: usize, got: usize },

    #[error("points are collinear or otherwise degenerate")]
    Collinear,

    #[error("fit produced a non-finite value")]
    NonFinite,

    #[error("fitted size {value} is outside (0, 10000]")]
    OutOfRange { value: f64 },
}

pub type FitResult<T> = std::result::Result<T, FitError>;
