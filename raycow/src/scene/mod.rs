pub mod camera;
pub mod distant_light;
pub mod light;
pub mod point_light;
pub mod scene;
pub mod scene_object;
pub mod spot_light;
