pub mod basic;
pub mod intersection;
pub mod multithreaded;
pub mod phong;
pub mod render;
