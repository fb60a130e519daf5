//! Error types for trueno-raster operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
///
/// Rasterization itself only fails on precondition violations; degenerate
/// input (a zero-length line, a zero radius) always succeeds.
#[derive(Error, Debug)]
pub enum Error {
    /// Circle radius below zero.
    #[error("Negative radius: {radius}")]
    NegativeRadius {
        /// Radius value.
        radius: i32,
    },

    /// The restricted Bresenham variant only walks rightward (`x1 > x0`).
    #[error("Bresenham shallow-rightward variant requires x1 > x0 (got x0 = {x0}, x1 = {x1})")]
    BresenhamDomain {
        /// Start x coordinate.
        x0: i32,
        /// End x coordinate.
        x1: i32,
    },

    /// NaN or infinite coordinate handed to a real-valued rasterizer.
    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate {
        /// X value.
        x: f64,
        /// Y value.
        y: f64,
    },

    /// Real-valued coordinate that does not round into the `i32` lattice.
    #[error("Coordinate out of range: ({x}, {y})")]
    CoordinateOutOfRange {
        /// X value.
        x: f64,
        /// Y value.
        y: f64,
    },

    /// DDA segment needing more samples than the supported limit.
    #[error("DDA needs {steps} steps (limit {limit})")]
    TooManySteps {
        /// Requested step count.
        steps: f64,
        /// Largest accepted step count.
        limit: u32,
    },

    /// Circle whose outline leaves the `i32` lattice.
    #[error("Circle at ({cx}, {cy}) with radius {radius} leaves the i32 range")]
    CircleOutOfRange {
        /// Centre x.
        cx: i32,
        /// Centre y.
        cy: i32,
        /// Radius value.
        radius: i32,
    },

    /// Unrecognised line algorithm name.
    #[error("Unknown line algorithm: {0} (expected midpoint, dda or bresenham)")]
    UnknownAlgorithm(String),

    /// Unrecognised half-plane name.
    #[error("Unknown half-plane: {0} (expected upper, lower, left or right)")]
    UnknownHalfPlane(String),

    /// Invalid dimensions for a preview framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Configuration parsing error with line number.
    #[error("configuration error at line {line}: {message}")]
    ConfigParse {
        /// Line number where the error occurred (1-indexed, 0 if unknown).
        line: usize,
        /// Error message describing the issue.
        message: String,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {0}")]
    ConfigNotFound(String),
}
