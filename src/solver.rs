use std::{error::Error, fmt::Display};

use log::trace;
use nalgebra::{Point2, Vector2};

use crate::segment::Segment;

/// Calculates control points of the smooth curve passing through every sample.
/// Returned vector has one [Segment] per pair of consecutive samples, segment `i` connects
/// `samples[i]` with `samples[i + 1]`. First derivative is continuous at every interior sample.
/// # Example
/// ```
/// use bezier_spline::{solve, Point};
/// use assert_approx_eq::assert_approx_eq;
///
/// let samples = vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0), Point::new(2.0, 0.0)];
/// let segments = solve(&samples).unwrap();
///
/// assert_eq!(2, segments.len());
/// assert_approx_eq!(1.0 / 3.0, segments[0].get_control1().x, 1e-9);
/// assert_approx_eq!(0.5, segments[0].get_control1().y, 1e-9);
/// ```
/// # Errors
/// [SplineError::InvalidInput] is returned when there are less than 2 samples.
/// ```
/// use bezier_spline::{solve, Point, SplineError};
///
/// let result = solve(&[Point::new(1.0, 2.0)]);
/// assert!(matches!(result, Err(SplineError::InvalidInput(_))));
/// ```
pub fn solve(samples: &[Point2<f64>]) -> Result<Vec<Segment>, SplineError> {
    if samples.len() < 2 {
        return Err(SplineError::InvalidInput(format!(
            "at least 2 samples are required, got {}",
            samples.len()
        )));
    }

    let number_of_segments = samples.len() - 1;
    trace!("solving control points for {} segments", number_of_segments);

    if number_of_segments == 1 {
        return Ok(vec![single_segment(samples[0], samples[1])]);
    }

    let first_controls = TridiagonalSystem::for_samples(samples).solve()?;
    let second_controls = second_control_points(samples, &first_controls);

    let segments = first_controls
        .iter()
        .zip(second_controls.iter())
        .map(|(first, second)| Segment::new(Point2::from(*first), Point2::from(*second)))
        .collect();
    Ok(segments)
}

/// Closed form for the curve between only two samples, controls are placed in thirds of the chord.
fn single_segment(start: Point2<f64>, end: Point2<f64>) -> Segment {
    let control1 = (start.coords * 2.0 + end.coords) / 3.0;
    let control2 = control1 * 2.0 - start.coords;
    Segment::new(Point2::from(control1), Point2::from(control2))
}

/// Second control point of every segment derived from first control points.
/// Interior joints satisfy `control2[i] + control1[i + 1] = 2 * samples[i + 1]`.
fn second_control_points(samples: &[Point2<f64>], first_controls: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let number_of_segments = first_controls.len();
    let mut second_controls = Vec::with_capacity(number_of_segments);

    for i in 0..number_of_segments {
        let end = samples[i + 1].coords;
        if i == number_of_segments - 1 {
            second_controls.push((end + first_controls[i]) / 2.0);
        } else {
            second_controls.push(end * 2.0 - first_controls[i + 1]);
        }
    }
    second_controls
}

/// Tridiagonal set of equations for first control points of every segment.
/// Both coordinates share the coefficients, right hand side keeps x and y together.
/// - `sub` - coefficients below diagonal, `sub[0]` is unused,
/// - `diagonal` - coefficients on diagonal,
/// - `sup` - coefficients above diagonal, last one is unused,
/// - `rhs` - right hand side.
struct TridiagonalSystem {
    sub: Vec<f64>,
    diagonal: Vec<f64>,
    sup: Vec<f64>,
    rhs: Vec<Vector2<f64>>,
}

impl TridiagonalSystem {
    /// Builds one equation per segment, coefficients depend only on segment position.
    fn for_samples(samples: &[Point2<f64>]) -> Self {
        let number_of_segments = samples.len() - 1;
        let mut system = TridiagonalSystem {
            sub: Vec::with_capacity(number_of_segments),
            diagonal: Vec::with_capacity(number_of_segments),
            sup: Vec::with_capacity(number_of_segments),
            rhs: Vec::with_capacity(number_of_segments),
        };

        for i in 0..number_of_segments {
            let start = samples[i].coords;
            let end = samples[i + 1].coords;

            if i == 0 {
                system.push_equation(0.0, 2.0, 1.0, start + end * 2.0);
            } else if i == number_of_segments - 1 {
                system.push_equation(2.0, 7.0, 0.0, start * 8.0 + end);
            } else {
                system.push_equation(1.0, 4.0, 1.0, start * 4.0 + end * 2.0);
            }
        }
        system
    }

    fn push_equation(&mut self, sub: f64, diagonal: f64, sup: f64, rhs: Vector2<f64>) {
        self.sub.push(sub);
        self.diagonal.push(diagonal);
        self.sup.push(sup);
        self.rhs.push(rhs);
    }

    /// Thomas algorithm: forward elimination followed by back substitution, no pivoting.
    fn solve(mut self) -> Result<Vec<Vector2<f64>>, SplineError> {
        let size = self.diagonal.len();

        for i in 1..size {
            let pivot = self.pivot(i - 1)?;
            let m = self.sub[i] / pivot;
            self.diagonal[i] -= m * self.sup[i - 1];
            let previous = self.rhs[i - 1];
            self.rhs[i] -= previous * m;
        }

        let mut solution = vec![Vector2::zeros(); size];
        solution[size - 1] = self.rhs[size - 1] / self.pivot(size - 1)?;

        for i in (0..size - 1).rev() {
            solution[i] = (self.rhs[i] - solution[i + 1] * self.sup[i]) / self.pivot(i)?;
        }
        Ok(solution)
    }

    fn pivot(&self, index: usize) -> Result<f64, SplineError> {
        let pivot = self.diagonal[index];
        if pivot == 0.0 {
            return Err(SplineError::NumericFailure(format!("zero pivot in equation {}", index)));
        }
        Ok(pivot)
    }
}

/// Errors returned by [solve] and by constructors built on top of it.
#[derive(Debug, Clone, PartialEq)]
pub enum SplineError {
    /// Samples do not describe any segment.
    InvalidInput(String),
    /// Elimination met a zero pivot.
    NumericFailure(String),
}

impl Display for SplineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SplineError::InvalidInput(message) => write!(f, "Invalid input: {}", message),
            SplineError::NumericFailure(message) => write!(f, "Numeric failure: {}", message),
        }
    }
}

impl Error for SplineError {}
