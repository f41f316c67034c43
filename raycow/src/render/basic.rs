use indicatif::ProgressIterator;
use raycow_core::models::{image::Image, pixel::Pixel};

use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::scene::scene::Scene;
use super::intersection::find_intersection;
use super::phong::shade;
use super::render::{check_target, Render, RenderError};

pub struct BasicRender {
}

impl BasicRender {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl Render for BasicRender {

    fn render(&self, scene: &Scene, render_to: &mut Image) -> Result<(), RenderError> {
        check_target(render_to)?;

        let width = render_to.width;
        let height = render_to.height;
        let viewport = scene.camera().viewport(width, height);

        for y in (0..height).progress() {
            for x in 0..width {
                let ray = viewport.ray_for_pixel(x, y);
                render_to.set_pixel(x, y, render_ray(&ray, scene));
            }
        }

        Ok(())
    }
}

pub fn render_ray(ray: &Ray, scene: &Scene) -> Pixel {
    let color = trace_ray(ray, scene);
    Pixel::from_unit_rgb(color.x, color.y, color.z)
}

pub fn trace_ray(ray: &Ray, scene: &Scene) -> Vector3 {
    match find_intersection(ray, scene.objects()) {
        Some(intersection) => shade(scene, intersection.object_index(), &ray.point(intersection.ray_distance())),
        None => scene.settings().background,
    }
}
