use std::f64::consts::PI;

use crate::geometry::{models::UvCoord, vector3::Vector3};

pub mod ellipsoid;
pub mod polygon;
pub mod sphere;

/// Maps a direction from the center of a round object to texture coordinates.
pub(crate) fn spherical_uv(direction: &Vector3) -> UvCoord {
    let direction = direction.normalized();

    let mut u = direction.y.atan2(direction.x) / (2.0 * PI);
    if u < 0.0 {
        u += 1.0;
    }
    let v = direction.z.max(-1.0).min(1.0).acos() / PI;

    UvCoord::new(u, v)
}

/// Nearest positive root of `a*t^2 + b*t + c = 0`.
pub(crate) fn nearest_positive_root(a: f64, b: f64, c: f64) -> Option<f64> {
    if a == 0.0 {
        return None;
    }

    let discriminant = b.powi(2) - 4.0 * a * c;
    if discriminant < 0.0 {
        return None;
    }

    let sqrt = discriminant.sqrt();
    let near = (-b - sqrt) / (2.0 * a);
    let far = (-b + sqrt) / (2.0 * a);

    if near > 0.0 {
        Some(near)
    } else if far > 0.0 {
        Some(far)
    } else {
        None
    }
}

#[cfg(test)]
pub(crate) fn assert_distance(actual: Option<f64>, expected: f64) {
    match actual {
        Some(v) => assert!((v - expected).abs() < 1e-9, "expected distance {}, got {}", expected, v),
        None => panic!("expected distance {}, got no intersection", expected),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spherical_uv_poles() {
        assert_eq!(spherical_uv(&Vector3::new(0.0, 0.0, 2.0)).v, 0.0);
        assert_eq!(spherical_uv(&Vector3::new(0.0, 0.0, -2.0)).v, 1.0);
    }

    #[test]
    fn test_spherical_uv_wraps_u() {
        let uv = spherical_uv(&Vector3::new(0.0, -1.0, 0.0));
        assert!((uv.u - 0.75).abs() < 1e-12);
        assert!((uv.v - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_nearest_positive_root() {
        // (t - 1)(t - 3)
        assert_distance(nearest_positive_root(1.0, -4.0, 3.0), 1.0);
        // (t + 1)(t - 3)
        assert_distance(nearest_positive_root(1.0, -2.0, -3.0), 3.0);
        // (t + 1)(t + 3)
        assert_eq!(nearest_positive_root(1.0, 4.0, 3.0), None);
        assert_eq!(nearest_positive_root(1.0, 0.0, 1.0), None);
    }
}
