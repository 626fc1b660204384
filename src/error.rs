//! Error types for the Navier plate solver

use thiserror::Error;

/// Main error type for plate computations
#[derive(Error, Debug)]
pub enum PlateError {
    #[error("Plate side lengths must be positive (a = {a}, b = {b})")]
    InvalidSideLengths { a: f64, b: f64 },

    #[error("Plate thickness must be positive (h = {0})")]
    InvalidThickness(f64),

    #[error("Young's modulus must be positive (E = {0})")]
    InvalidModulus(f64),

    #[error("Poisson's ratio must lie in [0, 0.5) (nu = {0})")]
    InvalidPoissonRatio(f64),

    #[error("Series truncation order must be at least 1")]
    InvalidTruncationOrder,
}

/// Result type for plate computations
pub type PlateResult<T> = Result<T, PlateError>;
