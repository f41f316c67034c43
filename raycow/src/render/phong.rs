use crate::geometry::{ray::Ray, vector3::Vector3};
use crate::materials::material::Material;
use crate::scene::{light::Light, scene::{Scene, SceneObjectBox}};

/// Occluders closer than this to the shaded point are treated as the surface itself.
pub const SHADOW_BIAS: f64 = 0.0001;

/// Phong color of a point lying on the surface of `scene.objects()[object_index]`.
/// Every channel of the result is in [0, 1].
pub fn shade(scene: &Scene, object_index: usize, point: &Vector3) -> Vector3 {
    let object = &scene.objects()[object_index];
    let material = object.material();

    let base_color = object.color_at(point);
    let normal = object.normal_at(point);
    let view = (*scene.camera().eye() - *point).normalized();

    let mut color = base_color * material.ambient();

    for light in scene.lights() {
        let light_direction = light.direction_from(point);
        if light_direction.is_zero() {
            continue;
        }

        let occluder = find_occluder(scene.objects(), object_index, point, &light_direction);
        let shadow = shadow_factor(light.as_ref(), occluder, point);

        let contribution = local_contribution(material, &base_color, &normal, &light_direction, &view);
        color += light.color().multiply_componentwise(&contribution) * shadow;
    }

    color.clamped(0.0, 1.0)
}

/// Distance to the nearest object between the point and the light, along `light_direction`.
///
/// Skips the shaded object and any surface facing away from the point.
pub fn find_occluder(objects: &[SceneObjectBox], shaded_index: usize, point: &Vector3, light_direction: &Vector3) -> Option<f64> {
    let shadow_ray = Ray::new(*point, *light_direction);
    let towards_point = -*light_direction;

    let mut nearest: Option<f64> = None;

    for (index, object) in objects.iter().enumerate() {
        if index == shaded_index {
            continue;
        }

        let distance = match object.check_intersection(&shadow_ray) {
            Some(v) => v,
            None => continue,
        };

        let occluder_normal = object.normal_at(&shadow_ray.point(distance));
        if occluder_normal.dot_product(&towards_point) < 0.0 {
            continue;
        }

        if distance >= 0.0 && nearest.map(|v| distance < v).unwrap_or(true) {
            nearest = Some(distance);
        }
    }

    nearest
}

/// 1.0 when the light reaches the point, 0.0 when it is blocked.
pub fn shadow_factor(light: &dyn Light, occluder: Option<f64>, point: &Vector3) -> f64 {
    match occluder {
        None => 1.0,
        Some(distance) if distance <= SHADOW_BIAS => 1.0,
        Some(_) if light.is_global() => 0.0,
        Some(distance) if distance <= light.max_distance(point) => 0.0,
        Some(_) => 1.0,
    }
}

/// Diffuse and specular terms of one light, clamped to [0, 1] per channel.
/// A light behind the surface (N·L <= 0) contributes nothing.
pub fn local_contribution(material: &Material, base_color: &Vector3, normal: &Vector3, light_direction: &Vector3, view: &Vector3) -> Vector3 {
    let n_dot_l = normal.dot_product(light_direction);
    if n_dot_l <= 0.0 {
        return Vector3::zero();
    }

    let halfway = (*light_direction + *view).normalized();
    let n_dot_h = normal.dot_product(&halfway).max(0.0);

    let diffuse = *base_color * (material.diffuse() * n_dot_l);
    let specular = *material.specular_color() * (material.specular() * n_dot_h.powf(material.shininess()));

    (diffuse + specular).clamped(0.0, 1.0)
}
