use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use raycow_core::models::io::ImageReader;

use crate::geometry::{models::{FaceVertex, MeshData, UvCoord}, vector3::Vector3};
use crate::materials::{material::Material, texture::Texture};
use crate::objects::{ellipsoid::Ellipsoid, polygon::Polygon, sphere::Sphere};
use crate::scene::{
    camera::{Camera, Projection},
    distant_light::DistantLight,
    point_light::PointLight,
    scene::{ImageSettings, LightBox, Scene},
    spot_light::SpotLight,
};
use super::description::{Directive, SceneDescription};
use super::provider::{SceneError, SceneProvider};

/// Largest image the renderer allocates, in pixels.
pub const MAX_IMAGE_PIXELS: usize = 1 << 26;

/// Loads a scene from a text scene file. Textures are resolved relative to the file.
pub struct SceneFileLoader {
    path: PathBuf,
    texture_reader: Box<dyn ImageReader>,
}

impl SceneFileLoader {

    pub fn new(path: &Path, texture_reader: Box<dyn ImageReader>) -> Self {
        Self {
            path: path.to_path_buf(),
            texture_reader,
        }
    }
}

impl SceneProvider for SceneFileLoader {

    fn scene(&self) -> Result<Scene, SceneError> {
        info!("reading scene from {}", self.path.display());

        let text = fs::read_to_string(&self.path).map_err(|err| SceneError::FailedToRead {
            description: format!("{}: {}", self.path.display(), err),
        })?;

        let description = SceneDescription::parse(&text);
        debug!("scene file has {} directives", description.directives().len());

        let base_dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        build_scene(&description, base_dir, self.texture_reader.as_ref())
    }
}

pub fn build_scene(description: &SceneDescription, base_dir: &Path, texture_reader: &dyn ImageReader) -> Result<Scene, SceneError> {
    info!("setting up image");
    let settings = image_settings(description)?;
    info!("image size: {}x{}", settings.width, settings.height);

    info!("setting up camera");
    let camera = camera(description)?;
    if let Projection::Parallel { .. } = camera.projection() {
        info!("camera uses parallel projection");
    }

    let mut scene = Scene::new(camera, settings);
    let mut current_material: Option<Arc<Material>> = None;
    let mut current_texture: Option<Arc<Texture>> = None;

    info!("setting up objects and lights");
    for directive in description.directives() {
        trace!("line {}: {}", directive.line(), directive);

        match directive.keyword() {
            "imsize" | "bkgcolor" | "eye" | "viewdir" | "updir" | "fovv" | "parallel" => {},
            "mtlcolor" => {
                current_material = Some(scene.add_material(material(directive)?));
                debug!("material #{} declared on line {}", scene.materials().len(), directive.line());
            },
            "texture" => {
                let texture = load_texture(directive, base_dir, texture_reader)?;
                debug!("texture {}x{} loaded on line {}", texture.width(), texture.height(), directive.line());
                current_texture = Some(scene.add_texture(texture));
            },
            "sphere" => {
                let material = require_material(directive, &current_material)?;
                let sphere = sphere(directive, material, &current_texture)?;
                scene.add_object(Box::new(sphere));
            },
            "ellipsoid" => {
                let material = require_material(directive, &current_material)?;
                let ellipsoid = ellipsoid(directive, material, &current_texture)?;
                scene.add_object(Box::new(ellipsoid));
            },
            "v" => {
                let vertex = directive.vector()?;
                scene.mesh_mut().add_vertex(vertex);
            },
            "vn" => {
                let normal = directive.vector()?;
                if normal.is_zero() {
                    return Err(directive.error("normal must not be a zero vector"));
                }
                scene.mesh_mut().add_normal(normal);
            },
            "vt" => {
                let uv = uv_coord(directive)?;
                scene.mesh_mut().add_uv(uv);
            },
            "f" => {
                let material = require_material(directive, &current_material)?;
                let polygon = polygon(directive, scene.mesh(), material, &current_texture)?;
                if polygon.is_degenerate() {
                    warn!("face on line {} has zero area and will never be hit", directive.line());
                }
                scene.add_object(Box::new(polygon));
            },
            "light" => {
                scene.add_light(basic_light(directive)?);
            },
            "spotlight" => {
                scene.add_light(Box::new(spot_light(directive)?));
            },
            other => warn!("skipping unknown directive \"{}\" on line {}", other, directive.line()),
        }
    }

    info!(
        "scene has {} objects, {} lights, {} materials, {} textures, {} vertices, {} normals",
        scene.objects().len(),
        scene.lights().len(),
        scene.materials().len(),
        scene.textures().len(),
        scene.mesh().vertices().len(),
        scene.mesh().normals().len(),
    );

    Ok(scene)
}

/// Image and camera parameters of a scene, as directives that `build_scene` accepts.
pub fn describe_settings(scene: &Scene) -> SceneDescription {
    let settings = scene.settings();
    let camera = scene.camera();
    let components = |v: &Vector3| v.components().to_vec();

    let mut description = SceneDescription::new();
    description.push(Directive::new("imsize", vec![settings.width.to_string(), settings.height.to_string()], 0));
    description.push(Directive::from_numbers("bkgcolor", &components(&settings.background)));
    description.push(Directive::from_numbers("eye", &components(camera.eye())));
    description.push(Directive::from_numbers("viewdir", &components(camera.view_direction())));
    description.push(Directive::from_numbers("updir", &components(camera.up_direction())));
    description.push(Directive::from_numbers("fovv", &[camera.field_of_view()]));

    match camera.projection() {
        Projection::Perspective => {},
        Projection::Parallel { window_width: None } => description.push(Directive::from_numbers("parallel", &[])),
        Projection::Parallel { window_width: Some(v) } => description.push(Directive::from_numbers("parallel", &[*v])),
    }

    description
}

fn image_settings(description: &SceneDescription) -> Result<ImageSettings, SceneError> {
    let imsize = description.require("imsize")?;
    if imsize.tokens().len() != 2 {
        return Err(imsize.error("image size with 2 dimensions must be provided"));
    }

    let width = imsize.dimension(0)?;
    let height = imsize.dimension(1)?;
    match width.checked_mul(height) {
        Some(pixels) if pixels <= MAX_IMAGE_PIXELS => {},
        _ => return Err(imsize.error(&format!("image of {}x{} pixels exceeds the limit of {} pixels", width, height, MAX_IMAGE_PIXELS))),
    }

    let background = match description.find("bkgcolor") {
        Some(v) => v.vector()?,
        None => {
            warn!("bkgcolor is not set, using black background");
            Vector3::zero()
        },
    };

    Ok(ImageSettings::new(width, height, background))
}

fn camera(description: &SceneDescription) -> Result<Camera, SceneError> {
    let eye = description.require("eye")?.vector()?;

    let viewdir = description.require("viewdir")?;
    let view_direction = viewdir.vector()?;
    if view_direction.is_zero() {
        return Err(viewdir.error("view direction must not be a zero vector"));
    }

    let updir = description.require("updir")?;
    let up_direction = updir.vector()?;

    let fovv = description.require("fovv")?;
    let field_of_view = fovv.numbers(1)?[0];
    if field_of_view <= 0.0 || field_of_view >= 180.0 {
        return Err(fovv.error(&format!("field of view should be between 0 and 180 degrees, got {}", field_of_view)));
    }

    let mut camera = Camera::new(eye, view_direction, up_direction, field_of_view);
    if !camera.has_valid_basis() {
        return Err(updir.error("up direction must not be parallel to the view direction"));
    }

    if let Some(parallel) = description.find("parallel") {
        let window_width = match parallel.tokens().len() {
            0 => None,
            1 => {
                let width = parallel.number(0)?;
                if width <= 0.0 {
                    return Err(parallel.error("viewing window width must be positive"));
                }
                Some(width)
            },
            other => return Err(parallel.error(&format!("expected at most 1 value, got {}", other))),
        };
        camera = camera.with_projection(Projection::Parallel { window_width });
    }

    Ok(camera)
}

fn material(directive: &Directive) -> Result<Material, SceneError> {
    let values = directive.numbers(10)?;

    Ok(Material::new(
        Vector3::new(values[0], values[1], values[2]),
        Vector3::new(values[3], values[4], values[5]),
        values[6],
        values[7],
        values[8],
        values[9],
    ))
}

fn load_texture(directive: &Directive, base_dir: &Path, reader: &dyn ImageReader) -> Result<Texture, SceneError> {
    directive.expect_tokens(1)?;
    let path = base_dir.join(&directive.tokens()[0]);

    let texture_error = |description: String| SceneError::FailedToLoadTexture {
        path: path.display().to_string(),
        description,
    };

    let data = fs::read(&path).map_err(|err| texture_error(err.to_string()))?;
    let image = reader.read(&data)
        .map_err(|err| texture_error(err.to_string()))?
        .into_iter()
        .next()
        .ok_or_else(|| texture_error("file contains no images".to_string()))?;

    if image.is_empty() {
        return Err(texture_error("texture has zero size".to_string()));
    }

    Ok(Texture::new(image))
}

fn require_material(directive: &Directive, material: &Option<Arc<Material>>) -> Result<Arc<Material>, SceneError> {
    material.clone().ok_or_else(|| directive.error("objects must be declared after a mtlcolor"))
}

fn sphere(directive: &Directive, material: Arc<Material>, texture: &Option<Arc<Texture>>) -> Result<Sphere, SceneError> {
    let values = directive.numbers(4)?;
    if values[3] <= 0.0 {
        return Err(directive.error("radius must be positive"));
    }

    let sphere = Sphere::new(Vector3::new(values[0], values[1], values[2]), values[3], material);
    debug!("sphere at {:?} with radius {}", sphere.center(), sphere.radius());

    Ok(match texture {
        Some(texture) => sphere.with_texture(texture.clone()),
        None => sphere,
    })
}

fn ellipsoid(directive: &Directive, material: Arc<Material>, texture: &Option<Arc<Texture>>) -> Result<Ellipsoid, SceneError> {
    directive.expect_tokens(6)?;
    let center = directive.vector_at(0)?;
    let radii = directive.vector_at(3)?;
    if radii.x <= 0.0 || radii.y <= 0.0 || radii.z <= 0.0 {
        return Err(directive.error("radii must be positive"));
    }

    debug!("ellipsoid at {:?} with radii {:?}", center, radii);
    let ellipsoid = Ellipsoid::new(center, radii, material);

    Ok(match texture {
        Some(texture) => ellipsoid.with_texture(texture.clone()),
        None => ellipsoid,
    })
}

fn uv_coord(directive: &Directive) -> Result<UvCoord, SceneError> {
    // an optional third component is accepted and ignored
    match directive.tokens().len() {
        2 | 3 => Ok(UvCoord::new(directive.number(0)?, directive.number(1)?)),
        other => Err(directive.error(&format!("expected 2 values, got {}", other))),
    }
}

fn polygon(directive: &Directive, mesh: &MeshData, material: Arc<Material>, texture: &Option<Arc<Texture>>) -> Result<Polygon, SceneError> {
    directive.expect_tokens(3)?;

    let mut corners = Vec::with_capacity(3);
    for token in directive.tokens() {
        let corner = FaceVertex::parse(token)
            .ok_or_else(|| directive.error(&format!("invalid face vertex \"{}\"", token)))?;
        corners.push(corner);
    }

    let lookup = |index: usize, table: &str, value: Option<Vector3>| {
        value.ok_or_else(|| directive.error(&format!("{} index {} is out of range", table, index)))
    };

    let mut vertices = [Vector3::zero(); 3];
    for (i, corner) in corners.iter().enumerate() {
        vertices[i] = lookup(corner.vertex, "vertex", mesh.vertex(corner.vertex).copied())?;
    }

    let mut polygon = Polygon::new(vertices, material);

    if corners.iter().all(|v| v.normal.is_some()) {
        let mut normals = [Vector3::zero(); 3];
        for (i, corner) in corners.iter().enumerate() {
            let index = corner.normal.unwrap_or_default();
            normals[i] = lookup(index, "normal", mesh.normal(index).copied())?;
        }
        polygon = polygon.with_normals(normals);
    } else if corners.iter().any(|v| v.normal.is_some()) {
        warn!("face on line {} has normals only for some vertices, using flat shading", directive.line());
    }

    if corners.iter().all(|v| v.uv.is_some()) {
        let mut uvs = [UvCoord::new(0.0, 0.0); 3];
        for (i, corner) in corners.iter().enumerate() {
            let index = corner.uv.unwrap_or_default();
            uvs[i] = mesh.uv(index)
                .copied()
                .ok_or_else(|| directive.error(&format!("texture coordinate index {} is out of range", index)))?;
        }
        polygon = polygon.with_uvs(uvs);
    }

    Ok(match texture {
        Some(texture) => polygon.with_texture(texture.clone()),
        None => polygon,
    })
}

fn basic_light(directive: &Directive) -> Result<LightBox, SceneError> {
    let values = directive.numbers(7)?;
    let vector = Vector3::new(values[0], values[1], values[2]);
    let color = Vector3::new(values[4], values[5], values[6]);

    if values[3] == 0.0 {
        if vector.is_zero() {
            return Err(directive.error("directional light needs a non-zero direction"));
        }
        debug!("directional light along {:?}", vector);
        Ok(Box::new(DistantLight::new(vector, color)))
    } else if values[3] == 1.0 {
        debug!("point light at {:?}", vector);
        Ok(Box::new(PointLight::new(vector, color)))
    } else {
        Err(directive.error(&format!("light type should be 0 (directional) or 1 (point), got {}", values[3])))
    }
}

fn spot_light(directive: &Directive) -> Result<SpotLight, SceneError> {
    let values = directive.numbers(10)?;
    let position = Vector3::new(values[0], values[1], values[2]);
    let direction = Vector3::new(values[3], values[4], values[5]);
    let angle = values[6];
    let color = Vector3::new(values[7], values[8], values[9]);

    if direction.is_zero() {
        return Err(directive.error("spotlight needs a non-zero direction"));
    }
    if angle <= 0.0 || angle >= 180.0 {
        return Err(directive.error(&format!("cone angle should be between 0 and 180 degrees, got {}", angle)));
    }

    debug!("spotlight at {:?} aimed along {:?}", position, direction);
    Ok(SpotLight::new(position, direction, angle, color))
}
