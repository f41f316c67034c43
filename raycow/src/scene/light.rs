use crate::geometry::vector3::Vector3;

pub trait Light {

    fn color(&self) -> &Vector3;

    /// `None` for lights infinitely far away.
    fn position(&self) -> Option<&Vector3>;

    /// Unit vector from the point towards the light. A zero vector means the light
    /// does not reach the point at all.
    fn direction_from(&self, point: &Vector3) -> Vector3;

    /// Global lights are never bounded by distance when testing for shadows.
    fn is_global(&self) -> bool {
        self.position().is_none()
    }

    fn max_distance(&self, point: &Vector3) -> f64 {
        self.position()
            .map(|position| point.distance_to(position))
            .unwrap_or(f64::MAX)
    }
}
