use serde::{Deserialize, Serialize};

use crate::Point;

/// A minimal 2D affine transformation with an independent scale and offset per axis:
///
/// ```text
/// x' = a * x + b
/// y' = c * y + d
/// ```
///
/// Converts projected map coordinates into tile-grid pixel space. The default value flips the
/// y axis, because tile rows grow downwards while map northings grow upwards.
/// Serialized as the `[a, b, c, d]` array used by the TileJSON `transform` property.
///
/// # Examples
///
/// ```
/// # use tile_grid_utils::{Point, Transformation};
/// let t = Transformation::default();
/// assert_eq!(t.transform(Point::new(3.0, 5.0)), Point::new(3.0, -5.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 4]", into = "[f64; 4]")]
pub struct Transformation {
    a: f64,
    b: f64,
    c: f64,
    d: f64,
}

impl Transformation {
    #[must_use]
    pub fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// The `(a, b, c, d)` coefficients.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    #[must_use]
    pub fn transform(&self, p: Point) -> Point {
        Point::new(self.a * p.x + self.b, self.c * p.y + self.d)
    }
}

impl Default for Transformation {
    fn default() -> Self {
        Self::new(1.0, 0.0, -1.0, 0.0)
    }
}

impl From<[f64; 4]> for Transformation {
    fn from([a, b, c, d]: [f64; 4]) -> Self {
        Self::new(a, b, c, d)
    }
}

impl From<Transformation> for [f64; 4] {
    fn from(t: Transformation) -> Self {
        t.coefficients()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(Transformation::default(), (3.0, 5.0), (3.0, -5.0))]
    #[case(Transformation::new(1.0, 0.0, 1.0, 0.0), (3.0, 5.0), (3.0, 5.0))]
    #[case(Transformation::new(2.0, 10.0, -0.5, 100.0), (3.0, 5.0), (16.0, 97.5))]
    #[case(
        Transformation::new(1.0, 20_037_508.342_789, -1.0, 20_037_508.342_789),
        (-20_037_508.342_789, 20_037_508.342_789),
        (0.0, 0.0)
    )]
    fn transforms_point(
        #[case] t: Transformation,
        #[case] (x, y): (f64, f64),
        #[case] (ex, ey): (f64, f64),
    ) {
        let p = t.transform(Point::new(x, y));
        assert_relative_eq!(p.x, ex);
        assert_relative_eq!(p.y, ey);
    }

    #[test]
    fn equality_is_exact() {
        assert_eq!(Transformation::default(), Transformation::new(1.0, 0.0, -1.0, 0.0));
        assert_ne!(
            Transformation::default(),
            Transformation::new(1.0, 0.0, -1.0, f64::EPSILON)
        );
    }

    #[test]
    fn serializes_as_coefficient_array() {
        let t: Transformation = serde_json::from_str("[0.5, 1, -0.5, 2]").unwrap();
        assert_eq!(t, Transformation::new(0.5, 1.0, -0.5, 2.0));
        assert_eq!(serde_json::to_string(&t).unwrap(), "[0.5,1.0,-0.5,2.0]");
    }
}
