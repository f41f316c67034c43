use std::sync::Arc;

use crate::geometry::{models::UvCoord, ray::Ray, vector3::Vector3};
use crate::materials::{material::Material, texture::Texture};
use crate::scene::scene_object::SceneObject;
use super::{nearest_positive_root, spherical_uv};

pub struct Sphere {

    center: Vector3,
    radius: f64,

    material: Arc<Material>,
    texture: Option<Arc<Texture>>,
}

impl Sphere {

    pub fn new(center: Vector3, radius: f64, material: Arc<Material>) -> Self {
        Self {
            center,
            radius,
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

    pub fn center(&self) -> &Vector3 {
        &self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl SceneObject for Sphere {

    fn material(&self) -> &Material {
        &self.material
    }

    fn texture(&self) -> Option<&Texture> {
        self.texture.as_deref()
    }

    fn check_intersection(&self, ray: &Ray) -> Option<f64> {
        // |origin + t * direction - center|**2 = radius**2, expanded into a quadratic for t:
        // a = |direction|**2
        // b = 2 * dot(direction, origin - center)
        // c = |origin - center|**2 - radius**2
        let to_origin = ray.origin() - &self.center;

        let a = ray.direction().dot_product_with_self();
        let b = 2.0 * ray.direction().dot_product(&to_origin);
        let c = to_origin.dot_product_with_self() - self.radius.powi(2);

        nearest_positive_root(a, b, c)
    }

    fn normal_at(&self, point: &Vector3) -> Vector3 {
        (point - &self.center).normalized()
    }

    fn uv_at(&self, point: &Vector3) -> Option<UvCoord> {
        Some(spherical_uv(&(point - &self.center)))
    }
}
