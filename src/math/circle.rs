use std::{f64::consts::PI, fmt};

use log::debug;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CircleError {
    #[error("Radius {0} is negative")]
    NegativeRadius(f64),
    #[error("Radius {0} is not finite")]
    NonFiniteRadius(f64),
}

/// Area of a circle, π·r².
pub fn calculate_area(radius: f64) -> f64 {
    PI * radius.powi(2)
}

/// A circle measurement.  The area is computed once, when the radius is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    radius: f64,
    area: f64,
}

impl Circle {
    pub fn new(radius: f64) -> Result<Circle, CircleError> {
        if !radius.is_finite() {
            return Err(CircleError::NonFiniteRadius(radius));
        }
        if radius < 0.0 {
            return Err(CircleError::NegativeRadius(radius));
        }
        let area = calculate_area(radius);
        debug!("circle with radius {} has area {}", radius, area);
        Ok(Circle { radius, area })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn area(&self) -> f64 {
        self.area
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r={}, area={:.2}", self.radius, self.area)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use super::*;

    #[test]
    fn test_area_radius_5() {
        let circle = Circle::new(5.0).unwrap();
        assert!((circle.area() - 78.53981633974483).abs() < 1e-12);
        assert_eq!(format!("{:.2}", circle.area()), "78.54");
        assert_eq!(circle.radius(), 5.0);
    }

    #[test]
    fn test_area_formula() {
        for r in [0.5, 1.0, 2.5, 7.0, 10.0, 123.456, 1e6] {
            let expected = PI * r * r;
            let rel = (calculate_area(r) - expected).abs() / expected;
            assert!(rel < 1e-9, "r={}", r);
        }
        assert_eq!(calculate_area(0.0), 0.0);
    }

    #[test]
    fn test_invalid_radius() {
        assert_eq!(
            Circle::new(-2.0).unwrap_err().to_string(),
            "Radius -2 is negative"
        );
        assert_eq!(Circle::new(-1.0), Err(CircleError::NegativeRadius(-1.0)));
        assert!(matches!(
            Circle::new(f64::NAN),
            Err(CircleError::NonFiniteRadius(_))
        ));
        assert_eq!(
            Circle::new(f64::INFINITY),
            Err(CircleError::NonFiniteRadius(f64::INFINITY))
        );
    }

    #[test]
    fn test_display() {
        let circle = Circle::new(5.0).unwrap();
        assert_eq!(circle.to_string(), "r=5, area=78.54");
    }
}
