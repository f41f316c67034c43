use std::sync::Arc;

use crate::geometry::{models::UvCoord, ray::Ray, vector3::Vector3};
use crate::materials::{material::Material, texture::Texture};
use crate::scene::scene_object::SceneObject;

const DELTA: f64 = 1e-10;

/// Triangular mesh face with optional per-vertex normals and texture coordinates.
pub struct Polygon {

    vertices: [Vector3; 3],
    normals: Option<[Vector3; 3]>,
    uvs: Option<[UvCoord; 3]>,

    v0v1: Vector3,
    v0v2: Vector3,
    face_normal: Vector3,

    material: Arc<Material>,
    texture: Option<Arc<Texture>>,
}

impl Polygon {

    pub fn new(vertices: [Vector3; 3], material: Arc<Material>) -> Self {
        let v0v1 = vertices[1] - vertices[0];
        let v0v2 = vertices[2] - vertices[0];

        Self {
            vertices,
            normals: None,
            uvs: None,

            v0v1,
            v0v2,
            face_normal: v0v1.cross_product(&v0v2).normalized(),

            material,
            texture: None,
        }
    }

    pub fn with_normals(self, normals: [Vector3; 3]) -> Self {
        Self {
            normals: Some([normals[0].normalized(), normals[1].normalized(), normals[2].normalized()]),
            ..self
        }
    }

    pub fn with_uvs(self, uvs: [UvCoord; 3]) -> Self {
        Self {
            uvs: Some(uvs),
            ..self
        }
    }

    pub fn with_texture(self, texture: Arc<Texture>) -> Self {
        Self {
            texture: Some(texture),
            ..self
        }
    }

    pub fn is_degenerate(&self) -> bool {
        self.face_normal.is_zero()
    }

    /// Weights of the three vertices for a point in the plane of the face.
    pub fn barycentric(&self, point: &Vector3) -> (f64, f64, f64) {
        let v0p = point - &self.vertices[0];

        let d00 = self.v0v1.dot_product_with_self();
        let d01 = self.v0v1.dot_product(&self.v0v2);
        let d11 = self.v0v2.dot_product_with_self();
        let d20 = v0p.dot_product(&self.v0v1);
        let d21 = v0p.dot_product(&self.v0v2);

        let denominator = d00 * d11 - d01 * d01;
        if denominator.abs() < DELTA {
            return (1.0, 0.0, 0.0);
        }

        let beta = (d11 * d20 - d01 * d21) / denominator;
        let gamma = (d00 * d21 - d01 * d20) / denominator;

        (1.0 - beta - gamma, beta, gamma)
    }
}

impl SceneObject for Polygon {

    fn material(&self) -> &Material {
        &self.material
    }

    fn texture(&self) -> Option<&Texture> {
        self.texture.as_deref()
    }

    fn check_intersection(&self, ray: &Ray) -> Option<f64> {
        let v0 = &self.vertices[0];
        let v0v1 = &self.v0v1;
        let v0v2 = &self.v0v2;

        let direction = ray.direction();

        let p = direction.cross_product(v0v2);
        let det = v0v1.dot_product(&p);
        if det.abs() < DELTA {
            return None;
        }

        let inv_det = 1.0 / det;

        let t = ray.origin() - v0;
        let u = t.dot_product(&p) * inv_det;
        if u < 0.0 || u > 1.0 {
            return None;
        }

        let q = t.cross_product(v0v1);
        let v = direction.dot_product(&q) * inv_det;
        if v < 0.0 || v + u > 1.0 {
            return None;
        }

        let ray_distance = v0v2.dot_product(&q) * inv_det;
        if ray_distance <= 0.0 {
            return None;
        }

        Some(ray_distance)
    }

    fn normal_at(&self, point: &Vector3) -> Vector3 {
        let normals = match &self.normals {
            Some(v) => v,
            None => return self.face_normal,
        };

        let (alpha, beta, gamma) = self.barycentric(point);
        let normal = (normals[0] * alpha + normals[1] * beta + normals[2] * gamma).normalized();

        if normal.is_zero() {
            self.face_normal
        } else {
            normal
        }
    }

    fn uv_at(&self, point: &Vector3) -> Option<UvCoord> {
        let uvs = self.uvs.as_ref()?;
        let (alpha, beta, gamma) = self.barycentric(point);

        Some(UvCoord::new(
            uvs[0].u * alpha + uvs[1].u * beta + uvs[2].u * gamma,
            uvs[0].v * alpha + uvs[1].v * beta + uvs[2].v * gamma,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objects::assert_distance;
    use raycow_core::models::{image::Image, pixel::Pixel};

    fn material() -> Arc<Material> {
        Arc::new(Material::new(Vector3::new(0.5, 0.5, 0.5), Vector3::one(), 0.2, 0.5, 0.3, 10.0))
    }

    // lies in the z = -2 plane, counter-clockwise when seen from the origin
    fn triangle() -> Polygon {
        Polygon::new([
            Vector3::new(-1.0, -1.0, -2.0),
            Vector3::new(1.0, -1.0, -2.0),
            Vector3::new(0.0, 1.0, -2.0),
        ], material())
    }

    #[test]
    fn test_intersection() {
        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -1.0));
        assert_distance(triangle().check_intersection(&ray), 2.0);

        let ray = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, -0.5));
        assert_distance(triangle().check_intersection(&ray), 4.0);
    }

    #[test]
    fn test_misses() {
        let away = Ray::new(Vector3::zero(), Vector3::new(0.0, 0.0, 1.0));
        assert_eq!(triangle().check_intersection(&away), None);

        let outside = Ray::new(Vector3::new(3.0, 0.0, 0.0), Vector3::new(0.0, 0.0, -1.0));
        assert_eq!(triangle().check_intersection(&outside), None);

        let parallel = Ray::new(Vector3::zero(), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(triangle().check_intersection(&parallel), None);
    }

    #[test]
    fn test_flat_normal() {
        let normal = triangle().normal_at(&Vector3::new(0.0, 0.0, -2.0));
        assert_eq!(normal, Vector3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_barycentric_at_vertices() {
        let triangle = triangle();
        let (a, b, c) = triangle.barycentric(&Vector3::new(1.0, -1.0, -2.0));
        assert!((a - 0.0).abs() < 1e-12 && (b - 1.0).abs() < 1e-12 && c.abs() < 1e-12);

        let (a, b, c) = triangle.barycentric(&Vector3::new(0.0, -1.0, -2.0));
        assert!((a - 0.5).abs() < 1e-12 && (b - 0.5).abs() < 1e-12 && c.abs() < 1e-12);
    }

    #[test]
    fn test_interpolated_normal() {
        let triangle = triangle().with_normals([
            Vector3::new(-1.0, 0.0, 1.0),
            Vector3::new(1.0, 0.0, 1.0),
            Vector3::new(0.0, 0.0, 1.0),
        ]);

        let at_first_vertex = triangle.normal_at(&Vector3::new(-1.0, -1.0, -2.0));
        assert_eq!(at_first_vertex, Vector3::new(-1.0, 0.0, 1.0).normalized());

        let between = triangle.normal_at(&Vector3::new(0.0, -1.0, -2.0));
        assert_eq!(between, Vector3::new(0.0, 0.0, 1.0));

        let inside = triangle.normal_at(&Vector3::new(0.2, -0.3, -2.0));
        assert!((inside.length() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_texture_needs_uvs() {
        let texture = Arc::new(Texture::new(Image::filled(2, 2, Pixel::from_rgb(255, 0, 0))));
        let point = Vector3::new(0.0, 0.0, -2.0);

        let untextured_uvs = triangle().with_texture(texture.clone());
        assert_eq!(untextured_uvs.color_at(&point), Vector3::new(0.5, 0.5, 0.5));

        let textured = triangle()
            .with_texture(texture)
            .with_uvs([UvCoord::new(0.0, 1.0), UvCoord::new(1.0, 1.0), UvCoord::new(0.5, 0.0)]);
        assert_eq!(textured.color_at(&point), Vector3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_uv_interpolation() {
        let triangle = triangle()
            .with_uvs([UvCoord::new(0.0, 1.0), UvCoord::new(1.0, 1.0), UvCoord::new(0.5, 0.0)]);

        let uv = triangle.uv_at(&Vector3::new(0.0, -1.0, -2.0)).unwrap();
        assert!((uv.u - 0.5).abs() < 1e-12);
        assert!((uv.v - 1.0).abs() < 1e-12);
    }
}
