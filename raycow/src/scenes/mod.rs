pub mod description;
pub mod loader;
pub mod provider;
