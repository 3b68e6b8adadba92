//! Control points of a smooth piecewise cubic Bezier curve passing through every sample point.
//! First derivative is continuous at every interior sample. Samples are assumed to be uniformly indexed.
//!
//! # Example
//! ```
//! use bezier_spline::{solve, Point};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let samples = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(1.0, 1.0),
//!     Point::new(2.0, 0.0)
//! ];
//! let segments = solve(&samples).unwrap();
//!
//! assert_eq!(samples.len() - 1, segments.len());
//! assert_approx_eq!(1.0, segments[0].get_control2().y, 1e-9);
//! assert_approx_eq!(1.0, segments[1].get_control1().y, 1e-9);
//! ```

mod path;
mod segment;
mod solver;

pub use path::{edge_value, CurvePath, FillDirection, PathElement};
pub use segment::Segment;
pub use solver::{solve, SplineError};

/// Sample and control point coordinates.
pub type Point = nalgebra::Point2<f64>;
