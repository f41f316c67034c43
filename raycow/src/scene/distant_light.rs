use crate::geometry::vector3::Vector3;
use crate::scene::light::Light;

/// Directional light, every ray travels along the same direction.
pub struct DistantLight {

    direction: Vector3,
    color: Vector3,
}

impl DistantLight {

    pub fn new(direction: Vector3, color: Vector3) -> Self {
        DistantLight {
            direction: direction.normalized(),
            color,
        }
    }
}

impl Light for DistantLight {

    fn color(&self) -> &Vector3 {
        &self.color
    }

    fn position(&self) -> Option<&Vector3> {
        None
    }

    fn direction_from(&self, _point: &Vector3) -> Vector3 {
        -self.direction
    }
}
