use crate::geometry::{models::UvCoord, ray::Ray, vector3::Vector3};
use crate::materials::{material::Material, texture::Texture};

/// Everything the renderer needs from a primitive: visibility, orientation and color.
pub trait SceneObject {

    fn material(&self) -> &Material;

    fn texture(&self) -> Option<&Texture>;

    /// Nearest positive distance along the ray, in units of the ray direction.
    /// `None` when the ray misses.
    fn check_intersection(&self, ray: &Ray) -> Option<f64>;

    /// Unit outward normal at a point lying on the surface.
    fn normal_at(&self, point: &Vector3) -> Vector3;

    fn uv_at(&self, point: &Vector3) -> Option<UvCoord>;

    fn color_at(&self, point: &Vector3) -> Vector3 {
        let uv = match self.texture() {
            Some(texture) => self.uv_at(point).map(|uv| (texture, uv)),
            None => None,
        };

        match uv {
            Some((texture, uv)) => texture.color_at(&uv),
            None => *self.material().diffuse_color(),
        }
    }
}
