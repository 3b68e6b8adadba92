use nalgebra::{Point2, Vector2};

/// Segment holds the two control points of the cubic Bezier piece between two consecutive samples.
/// Endpoints are not stored, they are the samples on both sides of the segment.
/// - `control1` - control point leaving the start sample,
/// - `control2` - control point entering the end sample.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    control1: Point2<f64>,
    control2: Point2<f64>,
}

impl Segment {
    pub fn new(control1: Point2<f64>, control2: Point2<f64>) -> Self {
        Segment { control1, control2 }
    }

    pub fn get_control1(&self) -> Point2<f64> {
        self.control1
    }

    pub fn get_control2(&self) -> Point2<f64> {
        self.control2
    }

    /// Evaluates cubic Bezier defined by `start`, both control points and `end` at parameter `t`.
    /// For `t` equal to 0 and 1 endpoints are returned as they are.
    /// # Example
    /// ```
    /// use bezier_spline::{Point, Segment};
    ///
    /// let segment = Segment::new(Point::new(1.0, 1.0), Point::new(2.0, 1.0));
    /// let start = Point::new(0.0, 0.0);
    /// let end = Point::new(3.0, 0.0);
    ///
    /// assert_eq!(segment.evaluate(start, end, 0.0), start);
    /// assert_eq!(segment.evaluate(start, end, 1.0), end);
    /// assert_eq!(segment.evaluate(start, end, 0.5), Point::new(1.5, 0.75));
    /// ```
    pub fn evaluate(&self, start: Point2<f64>, end: Point2<f64>, t: f64) -> Point2<f64> {
        if t == 0.0 {
            return start;
        }
        if t == 1.0 {
            return end;
        }

        let mt = 1.0 - t;
        let coords = start.coords * (mt * mt * mt)
            + self.control1.coords * (3.0 * mt * mt * t)
            + self.control2.coords * (3.0 * mt * t * t)
            + end.coords * (t * t * t);
        Point2::from(coords)
    }

    /// Direction in which curve leaves `start`, a third of the derivative at `t = 0`.
    pub fn start_tangent(&self, start: Point2<f64>) -> Vector2<f64> {
        self.control1 - start
    }

    /// Direction in which curve enters `end`, a third of the derivative at `t = 1`.
    pub fn end_tangent(&self, end: Point2<f64>) -> Vector2<f64> {
        end - self.control2
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn test_new() {
        let control1 = Point2::new(1.0, 2.0);
        let control2 = Point2::new(-3.0, 0.5);
        let segment = Segment::new(control1, control2);

        assert_eq!(control1, segment.get_control1());
        assert_eq!(control2, segment.get_control2());
    }

    #[test]
    fn evaluate_endpoints_exact() {
        let segment = Segment::new(Point2::new(0.1, 7.3), Point2::new(-4.2, 1.0 / 3.0));
        let start = Point2::new(0.3, 0.7);
        let end = Point2::new(1.0 / 3.0, 2.0 / 7.0);

        assert_eq!(start, segment.evaluate(start, end, 0.0));
        assert_eq!(end, segment.evaluate(start, end, 1.0));
    }

    #[test]
    fn evaluate_straight_line() {
        let eps = 1e-12;
        let start = Point2::new(0.0, 0.0);
        let end = Point2::new(3.0, 6.0);
        let segment = Segment::new(Point2::new(1.0, 2.0), Point2::new(2.0, 4.0));

        for t in [0.1, 0.25, 0.5, 0.8] {
            let point = segment.evaluate(start, end, t);
            assert_approx_eq!(point.x, 3.0 * t, eps);
            assert_approx_eq!(point.y, 6.0 * t, eps);
        }
    }

    #[test]
    fn tangents() {
        let start = Point2::new(0.0, 0.0);
        let end = Point2::new(4.0, 0.0);
        let segment = Segment::new(Point2::new(1.0, 1.0), Point2::new(3.0, -2.0));

        assert_eq!(Vector2::new(1.0, 1.0), segment.start_tangent(start));
        assert_eq!(Vector2::new(1.0, 2.0), segment.end_tangent(end));
    }
}
