use crate::geometry::ray::Ray;
use crate::scene::scene::SceneObjectBox;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {

    object_index: usize,
    ray_distance: f64,
}

impl Intersection {

    pub fn new(object_index: usize, ray_distance: f64) -> Self {
        Self {
            object_index,
            ray_distance,
        }
    }

    pub fn object_index(&self) -> usize {
        self.object_index
    }

    pub fn ray_distance(&self) -> f64 {
        self.ray_distance
    }
}

/// Nearest object hit by the ray, found by checking every object.
pub fn find_intersection(ray: &Ray, objects: &[SceneObjectBox]) -> Option<Intersection> {
    let mut result = None;
    let mut min_distance = f64::MAX;

    for (index, object) in objects.iter().enumerate() {
        if let Some(distance) = object.check_intersection(ray) {
            if distance < min_distance {
                min_distance = distance;
                result = Some(Intersection::new(index, distance));
            }
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::geometry::vector3::Vector3;
    use crate::materials::material::Material;
    use crate::objects::sphere::Sphere;

    fn sphere_at(z: f64) -> SceneObjectBox {
        let material = Arc::new(Material::ambient_only(Vector3::one(), 1.0));
        Box::new(Sphere::new(Vector3::new(0.0, 0.0, z), 1.0, material))
    }

    #[test]
    fn test_nearest_object_wins() {
        let objects = vec![sphere_at(-10.0), sphere_at(-5.0), sphere_at(5.0)];
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));

        let intersection = find_intersection(&ray, &objects).unwrap();
        assert_eq!(intersection.object_index(), 1);
        assert!((intersection.ray_distance() - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_objects_hit() {
        let objects = vec![sphere_at(-10.0)];
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 1.0, 0.0));

        assert_eq!(find_intersection(&ray, &objects), None);
        assert_eq!(find_intersection(&ray, &[]), None);
    }
}
