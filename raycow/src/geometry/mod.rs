pub mod models;
pub mod ray;
pub mod vector3;
