use crate::common::ShapeError;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-types", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde-types", serde(try_from = "f64", into = "f64"))]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Fails unless `radius` is positive and finite.
    pub fn new(radius: f64) -> Result<Self, ShapeError> {
        if radius > 0.0 && radius.is_finite() {
            Ok(Self { radius })
        } else {
            Err(ShapeError::InvalidRadius(radius))
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl TryFrom<f64> for Circle {
    type Error = ShapeError;

    fn try_from(radius: f64) -> Result<Self, Self::Error> {
        Circle::new(radius)
    }
}

impl From<Circle> for f64 {
    fn from(circle: Circle) -> f64 {
        circle.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_circle_new() {
        let c = Circle::new(5.0).unwrap();
        assert_eq!(c.radius(), 5.0);
    }

    #[test]
    fn test_circle_rejects_bad_radius() {
        assert_eq!(Circle::new(-1.0), Err(ShapeError::InvalidRadius(-1.0)));
        assert_eq!(Circle::new(0.0), Err(ShapeError::InvalidRadius(0.0)));
        assert!(Circle::new(f64::NAN).is_err());
        assert!(Circle::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_circle_try_from_radius() {
        assert_eq!(Circle::try_from(2.0).map(|c| c.radius()), Ok(2.0));
        assert!(Circle::try_from(-2.0).is_err());
        assert_eq!(f64::from(Circle::new(3.0).unwrap()), 3.0);
    }
}
