use crate::geometry::vector3::Vector3;

/// Phong surface description. Shared between objects through `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    diffuse_color: Vector3,
    specular_color: Vector3,

    ambient: f64,
    diffuse: f64,
    specular: f64,
    shininess: f64,
}

impl Material {

    pub fn new(diffuse_color: Vector3, specular_color: Vector3, ambient: f64, diffuse: f64, specular: f64, shininess: f64) -> Self {
        Self {
            diffuse_color,
            specular_color,
            ambient,
            diffuse,
            specular,
            shininess,
        }
    }

    /// Flat color without any light response except the ambient term.
    pub fn ambient_only(color: Vector3, ambient: f64) -> Self {
        Self::new(color, Vector3::zero(), ambient, 0.0, 0.0, 1.0)
    }

    pub fn diffuse_color(&self) -> &Vector3 {
        &self.diffuse_color
    }

    pub fn specular_color(&self) -> &Vector3 {
        &self.specular_color
    }

    pub fn ambient(&self) -> f64 {
        self.ambient
    }

    pub fn diffuse(&self) -> f64 {
        self.diffuse
    }

    pub fn specular(&self) -> f64 {
        self.specular
    }

    pub fn shininess(&self) -> f64 {
        self.shininess
    }
}
