use crate::geometry::vector3::Vector3;
use crate::scene::light::Light;

/// Point light restricted to a cone around `direction`.
pub struct SpotLight {

    position: Vector3,
    direction: Vector3,
    cos_cutoff: f64,
    color: Vector3,
}

impl SpotLight {

    pub fn new(position: Vector3, direction: Vector3, cutoff_degrees: f64, color: Vector3) -> Self {
        SpotLight {
            position,
            direction: direction.normalized(),
            cos_cutoff: cutoff_degrees.to_radians().cos(),
            color,
        }
    }
}

impl Light for SpotLight {

    fn color(&self) -> &Vector3 {
        &self.color
    }

    fn position(&self) -> Option<&Vector3> {
        Some(&self.position)
    }

    fn direction_from(&self, point: &Vector3) -> Vector3 {
        let to_light = (self.position - *point).normalized();
        if (-to_light).dot_product(&self.direction) < self.cos_cutoff {
            return Vector3::zero();
        }

        to_light
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot() -> SpotLight {
        SpotLight::new(Vector3::new(0.0, 10.0, 0.0), Vector3::new(0.0, -1.0, 0.0), 30.0, Vector3::one())
    }

    #[test]
    fn test_point_inside_cone() {
        let direction = spot().direction_from(&Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(direction, Vector3::new(-1.0, 10.0, 0.0).normalized());
    }

    #[test]
    fn test_point_outside_cone() {
        let direction = spot().direction_from(&Vector3::new(10.0, 0.0, 0.0));
        assert!(direction.is_zero());

        let behind = spot().direction_from(&Vector3::new(0.0, 20.0, 0.0));
        assert!(behind.is_zero());
    }

    #[test]
    fn test_is_not_global() {
        assert!(!spot().is_global());
        assert_eq!(spot().max_distance(&Vector3::zero()), 10.0);
    }
}
