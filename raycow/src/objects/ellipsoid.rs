use std::sync::Arc;

use crate::geometry::{models::UvCoord, ray::Ray, vector3::Vector3};
use crate::materials::{material::Material, texture::Texture};
use crate::scene::scene_object::SceneObject;
use super::{nearest_positive_root, spherical_uv};

/// Axis-aligned ellipsoid. Intersections are solved in a frame where it becomes a unit sphere.
pub struct Ellipsoid {

    center: Vector3,
    radii: Vector3,

    material: Arc<Material>,
    texture: Option<Arc<Texture>>,
}

impl Ellipsoid {

    pub fn new(center: Vector3, radii: Vector3, material: Arc<Material>) -> Self {
        Self {
            center,
            radii,
            material,
            texture: None,
        }
    }

    pub fn with_texture(self, texture: Arc<Texture>) -> Self {
        Self {
            texture: Some(texture),
            ..self
        }
    }

    fn to_local(&self, vector: &Vector3) -> Vector3 {
        vector.divide_componentwise(&self.radii)
    }
}

impl SceneObject for Ellipsoid {

    fn material(&self) -> &Material {
        &self.material
    }

    fn texture(&self) -> Option<&Texture> {
        self.texture.as_deref()
    }

    fn check_intersection(&self, ray: &Ray) -> Option<f64> {
        // scaling keeps the ray parameter, so t found for the unit sphere is valid for the ellipsoid
        let origin = self.to_local(&(ray.origin() - &self.center));
        let direction = self.to_local(ray.direction());

        let a = direction.dot_product_with_self();
        let b = 2.0 * direction.dot_product(&origin);
        let c = origin.dot_product_with_self() - 1.0;

        nearest_positive_root(a, b, c)
    }

    fn normal_at(&self, point: &Vector3) -> Vector3 {
        // gradient of sum(((p - c) / r)^2)
        let radii_squared = self.radii.multiply_componentwise(&self.radii);
        (point - &self.center).divide_componentwise(&radii_squared).normalized()
    }

    fn uv_at(&self, point: &Vector3) -> Option<UvCoord> {
        Some(spherical_uv(&self.to_local(&(point - &self.center))))
    }
}
