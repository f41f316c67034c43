use crate::geometry::vector3::Vector3;
use crate::scene::light::Light;

pub struct PointLight {

    position: Vector3,
    color: Vector3,
}

impl PointLight {

    pub fn new(position: Vector3, color: Vector3) -> Self {
        PointLight {
            position,
            color,
        }
    }
}

impl Light for PointLight {

    fn color(&self) -> &Vector3 {
        &self.color
    }

    fn position(&self) -> Option<&Vector3> {
        Some(&self.position)
    }

    fn direction_from(&self, point: &Vector3) -> Vector3 {
        (self.position - *point).normalized()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_and_distance() {
        let light = PointLight::new(Vector3::new(0.0, 10.0, 0.0), Vector3::one());
        let point = Vector3::new(0.0, 2.0, 0.0);

        assert_eq!(light.direction_from(&point), Vector3::new(0.0, 1.0, 0.0));
        assert_eq!(light.max_distance(&point), 8.0);
        assert!(!light.is_global());
    }
}
