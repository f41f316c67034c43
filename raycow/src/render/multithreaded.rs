use rayon::prelude::*;

use raycow_core::models::{image::Image, pixel::Pixel};

use crate::scene::{camera::Viewport, scene::Scene};
use super::basic::render_ray;
use super::render::{check_target, Render, RenderError};

/// Renders scanlines in parallel, each worker owns a disjoint row of the output.
pub struct MultithreadedRender {
}

impl MultithreadedRender {

    pub fn new() -> Self {
        Self {
        }
    }
}

impl Render for MultithreadedRender {

    fn render(&self, scene: &Scene, render_to: &mut Image) -> Result<(), RenderError> {
        check_target(render_to)?;

        let width = render_to.width;
        let viewport = scene.camera().viewport(width, render_to.height);

        render_to.pixels.par_chunks_mut(width).enumerate().for_each(|(y, output)| {
            worker(scene, &viewport, output, y);
        });

        Ok(())
    }
}

fn worker(scene: &Scene, viewport: &Viewport, output: &mut [Pixel], y: usize) {
    for (x, pixel) in output.iter_mut().enumerate() {
        let ray = viewport.ray_for_pixel(x, y);
        *pixel = render_ray(&ray, scene);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::vector3::Vector3;
    use crate::materials::material::Material;
    use crate::objects::{ellipsoid::Ellipsoid, sphere::Sphere};
    use crate::render::basic::BasicRender;
    use crate::scene::{camera::Camera, distant_light::DistantLight, point_light::PointLight, scene::ImageSettings};

    #[test]
    fn test_same_output_as_basic_render() {
        let camera = Camera::new(Vector3::new(0.0, 1.0, 4.0), Vector3::new(0.0, -0.2, -1.0), Vector3::up(), 50.0);
        let mut scene = Scene::new(camera, ImageSettings::new(24, 16, Vector3::new(0.3, 0.3, 0.3)));

        let shiny = scene.add_material(Material::new(Vector3::new(0.9, 0.2, 0.2), Vector3::one(), 0.1, 0.6, 0.4, 30.0));
        let matte = scene.add_material(Material::new(Vector3::new(0.2, 0.8, 0.3), Vector3::one(), 0.2, 0.8, 0.0, 1.0));
        scene.add_object(Box::new(Sphere::new(Vector3::new(-0.8, 0.5, -1.0), 0.7, shiny)));
        scene.add_object(Box::new(Ellipsoid::new(Vector3::new(0.0, -100.0, -1.0), Vector3::new(100.0, 99.5, 100.0), matte)));
        scene.add_light(Box::new(PointLight::new(Vector3::new(2.0, 4.0, 2.0), Vector3::one())));
        scene.add_light(Box::new(DistantLight::new(Vector3::new(-1.0, -1.0, -1.0), Vector3::new(0.3, 0.3, 0.3))));

        let mut expected = scene.settings().create_image();
        BasicRender::new().render(&scene, &mut expected).unwrap();

        let mut actual = scene.settings().create_image();
        MultithreadedRender::new().render(&scene, &mut actual).unwrap();

        assert_eq!(actual.pixels, expected.pixels);
    }
}
