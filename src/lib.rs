//! # Trueno-Raster
//!
//! Integer rasterization of line segments and circles.
//!
//! Converts continuous primitives into the lattice points that best
//! approximate them, using incremental decision variables instead of
//! per-pixel distance evaluation. Output is a plain `Vec<Point>`; colour,
//! clipping and display belong to the caller.
//!
//! ## Features
//!
//! - **Lines**: DDA, restricted Bresenham, and octant-normalized midpoint
//! - **Circles**: midpoint with 8-way symmetry
//! - **Sequences**: half-plane filtering, deduplication, bounds, connectivity
//! - **Previews**: plot any sequence into a framebuffer and write PNG or ASCII
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let line = rasterize_line(Point::new(0, 0), Point::new(5, 2), LineAlgorithm::MidpointOctant)?;
//! assert_eq!(line.len(), 6);
//!
//! let roof = midpoint_circle(Point::new(240, 350), 70)?;
//! let upper = retain_half_plane(&roof, Point::new(240, 350), HalfPlane::Upper);
//! assert!(upper.iter().all(|p| p.y >= 350));
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize on geometry and algorithm types
//! - `cli`: YAML configuration and the `trueno-raster` binary
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade (`trace!` per call, `debug!`
//! on rejected input). The library never installs a logger.
//!
//! ## Academic References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//!   *IBM Systems Journal*, 4(1), 25-30.
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of
//!   circular arcs." *Communications of the ACM*, 20(2), 100-106.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Lattice points, segments and circles.
pub mod geometry;

/// Line and circle rasterization.
pub mod raster;

// ============================================================================
// Preview Modules
// ============================================================================

/// Colors for point previews.
pub mod color;

/// Pixel buffer that point sequences are plotted into.
pub mod framebuffer;

/// Output encoders (PNG, terminal).
pub mod output;

// ============================================================================
// Optional Modules
// ============================================================================

/// YAML configuration for the command line front end.
#[cfg(feature = "cli")]
#[cfg_attr(docsrs, doc(cfg(feature = "cli")))]
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and functions for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, LineSegment, Point, PointF};
    pub use crate::output::{PngEncoder, TerminalEncoder, TerminalMode};
    pub use crate::raster::{
        bounds, midpoint_circle, rasterize_line, retain_half_plane, unique_points, HalfPlane,
        LineAlgorithm, Octant, Rasterize,
    };
}

// ============================================================================
// Tests
// ============================================================================
