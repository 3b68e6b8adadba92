use log::trace;
use nalgebra::Point2;

use crate::segment::Segment;
use crate::solver::{solve, SplineError};

/// Single command of a path, consumed by whatever draws the curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathElement {
    MoveTo(Point2<f64>),
    LineTo(Point2<f64>),
    /// Cubic curve from the current point: `(control1, control2, end)`.
    CurveTo(Point2<f64>, Point2<f64>, Point2<f64>),
    ClosePath,
}

/// Side of the frame to which filled area is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FillDirection {
    /// Area between curve and the bottom edge (`y = height`).
    #[default]
    Down,
    /// Area between curve and the top edge (`y = 0`).
    Up,
}

/// Smooth curve through samples laid out in a `width` x `height` frame.
/// Control points are solved once, stroke and fill paths share them.
pub struct CurvePath {
    samples: Vec<Point2<f64>>,
    segments: Vec<Segment>,
    width: f64,
    height: f64,
}

impl CurvePath {
    /// Maps values onto uniformly spaced samples: value `k` of `n` lands on
    /// `(k / (n - 1) * width, value * height)`.
    /// # Example
    /// ```
    /// use bezier_spline::{CurvePath, PathElement, Point};
    ///
    /// let path = CurvePath::from_values(&[0.25, 0.75, 0.5], 100.0, 40.0).unwrap();
    ///
    /// assert_eq!(3, path.get_samples().len());
    /// assert_eq!(Point::new(50.0, 30.0), path.get_samples()[1]);
    /// assert_eq!(PathElement::MoveTo(Point::new(0.0, 10.0)), path.stroke()[0]);
    /// ```
    /// # Errors
    /// [SplineError::InvalidInput] is returned for less than 2 values.
    pub fn from_values(values: &[f64], width: f64, height: f64) -> Result<Self, SplineError> {
        if values.len() < 2 {
            return Err(SplineError::InvalidInput(format!(
                "at least 2 values are required, got {}",
                values.len()
            )));
        }

        let last_index = (values.len() - 1) as f64;
        let samples = values
            .iter()
            .enumerate()
            .map(|(index, value)| Point2::new(index as f64 / last_index * width, value * height))
            .collect();

        CurvePath::from_samples(samples, width, height)
    }

    /// Uses samples already placed in frame coordinates.
    pub fn from_samples(samples: Vec<Point2<f64>>, width: f64, height: f64) -> Result<Self, SplineError> {
        let segments = solve(&samples)?;
        Ok(CurvePath { samples, segments, width, height })
    }

    pub fn get_samples(&self) -> &[Point2<f64>] {
        &self.samples
    }

    pub fn get_segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn get_width(&self) -> f64 {
        self.width
    }

    pub fn get_height(&self) -> f64 {
        self.height
    }

    /// Point on segment `index` at parameter `t`, `None` when there is no such segment.
    pub fn evaluate(&self, index: usize, t: f64) -> Option<Point2<f64>> {
        let segment = self.segments.get(index)?;
        Some(segment.evaluate(self.samples[index], self.samples[index + 1], t))
    }

    /// Open path following the curve from the first sample to the last one.
    pub fn stroke(&self) -> Vec<PathElement> {
        trace!("building stroke path over {} segments", self.segments.len());

        let mut elements = Vec::with_capacity(self.samples.len());
        elements.push(PathElement::MoveTo(self.samples[0]));

        for (segment, end) in self.segments.iter().zip(self.samples.iter().skip(1)) {
            elements.push(PathElement::CurveTo(segment.get_control1(), segment.get_control2(), *end));
        }
        elements
    }

    /// Closed path: the curve followed by the frame edge selected by `direction`.
    /// # Example
    /// ```
    /// use bezier_spline::{CurvePath, FillDirection, PathElement, Point};
    ///
    /// let path = CurvePath::from_values(&[0.5, 0.25], 10.0, 4.0).unwrap();
    /// let fill = path.fill(FillDirection::Up);
    ///
    /// assert_eq!(PathElement::LineTo(Point::new(10.0, 0.0)), fill[2]);
    /// assert_eq!(PathElement::LineTo(Point::new(0.0, 0.0)), fill[3]);
    /// assert_eq!(PathElement::ClosePath, fill[4]);
    /// ```
    pub fn fill(&self, direction: FillDirection) -> Vec<PathElement> {
        trace!("building {:?} fill path over {} segments", direction, self.segments.len());

        let baseline = match direction {
            FillDirection::Down => self.height,
            FillDirection::Up => 0.0,
        };

        let mut elements = self.stroke();
        elements.push(PathElement::LineTo(Point2::new(self.width, baseline)));
        elements.push(PathElement::LineTo(Point2::new(0.0, baseline)));
        elements.push(PathElement::ClosePath);
        elements
    }
}

/// Extremal value at which fill gradient starts, for values normalised to `[0, 1]`.
/// Filling down anchors at the minimum (never above 1), filling up at the maximum (never below 0).
/// # Example
/// ```
/// use bezier_spline::{edge_value, FillDirection};
///
/// let values = [0.2, 0.6, 0.4, 0.3, 0.2];
/// assert_eq!(0.2, edge_value(&values, FillDirection::Down));
/// assert_eq!(0.6, edge_value(&values, FillDirection::Up));
/// ```
pub fn edge_value(values: &[f64], direction: FillDirection) -> f64 {
    match direction {
        FillDirection::Down => values.iter().fold(1.0, |edge, value| if *value < edge { *value } else { edge }),
        FillDirection::Up => values.iter().fold(0.0, |edge, value| if *value > edge { *value } else { edge }),
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    #[test]
    fn from_values_layout() {
        let path = CurvePath::from_values(&[0.2, 0.6, 0.4, 0.3, 0.2], 200.0, 100.0).unwrap();
        let samples = path.get_samples();

        assert_eq!(5, samples.len());
        assert_eq!(4, path.get_segments().len());
        assert_eq!(200.0, path.get_width());
        assert_eq!(100.0, path.get_height());

        let eps = 1e-9;
        let expected = [(0.0, 20.0), (50.0, 60.0), (100.0, 40.0), (150.0, 30.0), (200.0, 20.0)];
        for (sample, (x, y)) in samples.iter().zip(expected) {
            assert_approx_eq!(sample.x, x, eps);
            assert_approx_eq!(sample.y, y, eps);
        }
    }

    #[test]
    fn from_values_too_short() {
        assert!(matches!(CurvePath::from_values(&[], 1.0, 1.0), Err(SplineError::InvalidInput(_))));
        assert!(matches!(CurvePath::from_values(&[0.5], 1.0, 1.0), Err(SplineError::InvalidInput(_))));
    }

    #[test]
    fn stroke_walks_samples_and_segments() {
        let path = CurvePath::from_values(&[0.0, 1.0, 0.0], 2.0, 1.0).unwrap();
        let stroke = path.stroke();

        assert_eq!(3, stroke.len());
        assert_eq!(PathElement::MoveTo(Point2::new(0.0, 0.0)), stroke[0]);

        for (i, element) in stroke.iter().skip(1).enumerate() {
            let segment = path.get_segments()[i];
            assert_eq!(
                PathElement::CurveTo(segment.get_control1(), segment.get_control2(), path.get_samples()[i + 1]),
                *element
            );
        }
    }

    #[test]
    fn fill_closes_to_bottom() {
        let path = CurvePath::from_values(&[0.3, 0.7, 0.5], 30.0, 10.0).unwrap();
        let fill = path.fill(FillDirection::Down);

        assert_eq!(6, fill.len());
        assert_eq!(path.stroke()[..], fill[..3]);
        assert_eq!(PathElement::LineTo(Point2::new(30.0, 10.0)), fill[3]);
        assert_eq!(PathElement::LineTo(Point2::new(0.0, 10.0)), fill[4]);
        assert_eq!(PathElement::ClosePath, fill[5]);
    }

    #[test]
    fn fill_closes_to_top() {
        let path = CurvePath::from_values(&[0.3, 0.7, 0.5], 30.0, 10.0).unwrap();
        let fill = path.fill(FillDirection::Up);

        assert_eq!(PathElement::LineTo(Point2::new(30.0, 0.0)), fill[3]);
        assert_eq!(PathElement::LineTo(Point2::new(0.0, 0.0)), fill[4]);
    }

    #[test]
    fn evaluate_segments() {
        let path = CurvePath::from_values(&[0.0, 1.0, 0.0], 2.0, 1.0).unwrap();

        assert_eq!(Some(Point2::new(1.0, 1.0)), path.evaluate(0, 1.0));
        assert_eq!(Some(Point2::new(1.0, 1.0)), path.evaluate(1, 0.0));
        assert_eq!(None, path.evaluate(2, 0.5));
    }

    #[test]
    fn edge_value_seeds() {
        assert_eq!(1.0, edge_value(&[], FillDirection::Down));
        assert_eq!(0.0, edge_value(&[], FillDirection::Up));
        assert_eq!(1.0, edge_value(&[1.5, 2.0], FillDirection::Down));
        assert_eq!(0.0, edge_value(&[-0.5, -2.0], FillDirection::Up));
        assert_eq!(-0.5, edge_value(&[0.3, -0.5], FillDirection::Down));
    }
}
