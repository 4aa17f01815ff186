use super::{Point2, Vector2, TOLERANCE};

/// Returns the unsigned angle between two vectors in degrees, in `[0, 180]`.
///
/// Returns `None` if either vector has zero length.
#[must_use]
pub fn angle_between_degrees(v1: &Vector2, v2: &Vector2) -> Option<f64> {
    let mag1 = v1.norm();
    let mag2 = v2.norm();
    if mag1 < TOLERANCE || mag2 < TOLERANCE {
        return None;
    }
    let cos = (v1.dot(v2) / (mag1 * mag2)).clamp(-1.0, 1.0);
    Some(cos.acos().to_degrees())
}

/// Direction of the vector `from → to` relative to the +X axis, in degrees `(-180, 180]`.
#[must_use]
pub fn direction_degrees(from: &Point2, to: &Point2) -> f64 {
    let d = to - from;
    d.y.atan2(d.x).to_degrees()
}

/// Unit vector pointing at `degrees` from the +X axis.
#[must_use]
pub fn unit_from_degrees(degrees: f64) -> Vector2 {
    let rad = degrees.to_radians();
    Vector2::new(rad.cos(), rad.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn right_angle() {
        let a = angle_between_degrees(&Vector2::new(-1.0, 0.0), &Vector2::new(0.0, 1.0));
        assert_relative_eq!(a.unwrap_or_default(), 90.0, epsilon = 1e-12);
    }

    #[test]
    fn opposite_vectors_are_180() {
        let a = angle_between_degrees(&Vector2::new(-2.0, 0.0), &Vector2::new(5.0, 0.0));
        assert_relative_eq!(a.unwrap_or_default(), 180.0, epsilon = 1e-12);
    }

    #[test]
    fn same_direction_is_zero() {
        let a = angle_between_degrees(&Vector2::new(3.0, 3.0), &Vector2::new(1.0, 1.0));
        assert!(a.unwrap_or(f64::NAN).abs() < 1e-6);
    }

    #[test]
    fn zero_vector_has_no_angle() {
        assert!(angle_between_degrees(&Vector2::zeros(), &Vector2::new(1.0, 0.0)).is_none());
    }

    #[test]
    fn direction_of_vertical_segment() {
        let d = direction_degrees(&Point2::new(1.0, 1.0), &Point2::new(1.0, 4.0));
        assert_relative_eq!(d, 90.0, epsilon = 1e-12);
    }

    #[test]
    fn unit_vector_from_degrees() {
        let v = unit_from_degrees(180.0);
        assert_relative_eq!(v.x, -1.0, epsilon = 1e-12);
        assert!(v.y.abs() < 1e-12);
    }
}
