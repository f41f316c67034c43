use std::sync::Arc;

use raycow_core::models::{image::Image, pixel::Pixel};

use super::{camera::Camera, light::Light, scene_object::SceneObject};
use crate::geometry::{models::MeshData, vector3::Vector3};
use crate::materials::{material::Material, texture::Texture};

pub type SceneObjectBox = Box<dyn SceneObject + Sync + Send>;
pub type LightBox = Box<dyn Light + Sync + Send>;

#[derive(Clone, Debug, PartialEq)]
pub struct ImageSettings {
    pub width: usize,
    pub height: usize,
    pub background: Vector3,
}

impl ImageSettings {

    pub fn new(width: usize, height: usize, background: Vector3) -> Self {
        Self {
            width,
            height,
            background,
        }
    }

    pub fn background_pixel(&self) -> Pixel {
        Pixel::from_unit_rgb(self.background.x, self.background.y, self.background.z)
    }

    pub fn create_image(&self) -> Image {
        Image::filled(self.width, self.height, self.background_pixel())
    }
}

/// Everything needed for one render. Built once, read-only afterwards.
pub struct Scene {
    camera: Camera,
    settings: ImageSettings,

    objects: Vec<SceneObjectBox>,
    lights: Vec<LightBox>,

    materials: Vec<Arc<Material>>,
    textures: Vec<Arc<Texture>>,
    mesh: MeshData,
}

impl Scene {

    pub fn new(camera: Camera, settings: ImageSettings) -> Self {
        Self {
            camera,
            settings,
            objects: Vec::new(),
            lights: Vec::new(),
            materials: Vec::new(),
            textures: Vec::new(),
            mesh: MeshData::new(),
        }
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn settings(&self) -> &ImageSettings {
        &self.settings
    }

    pub fn add_object(&mut self, obj: SceneObjectBox) {
        self.objects.push(obj)
    }

    pub fn objects(&self) -> &Vec<SceneObjectBox> {
        &self.objects
    }

    pub fn add_light(&mut self, light: LightBox) {
        self.lights.push(light)
    }

    pub fn lights(&self) -> &Vec<LightBox> {
        &self.lights
    }

    pub fn add_material(&mut self, material: Material) -> Arc<Material> {
        let material = Arc::new(material);
        self.materials.push(material.clone());
        material
    }

    pub fn materials(&self) -> &Vec<Arc<Material>> {
        &self.materials
    }

    pub fn add_texture(&mut self, texture: Texture) -> Arc<Texture> {
        let texture = Arc::new(texture);
        self.textures.push(texture.clone());
        texture
    }

    pub fn textures(&self) -> &Vec<Arc<Texture>> {
        &self.textures
    }

    pub fn mesh(&self) -> &MeshData {
        &self.mesh
    }

    pub fn mesh_mut(&mut self) -> &mut MeshData {
        &mut self.mesh
    }
}
