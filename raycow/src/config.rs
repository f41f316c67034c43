use std::env;
use std::path::{Path, PathBuf};

use crate::render::{basic::BasicRender, multithreaded::MultithreadedRender, render::Render};

pub const RENDER_VAR: &str = "RAYCOW_RENDER";
pub const OUTPUT_VAR: &str = "RAYCOW_OUTPUT";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RenderKind {
    Basic,
    Multithreaded,
}

impl RenderKind {

    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "basic" => Some(RenderKind::Basic),
            "multithreaded" => Some(RenderKind::Multithreaded),
            _ => None,
        }
    }
}

/// Render settings that come from the environment rather than the scene file.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub render: RenderKind,
    pub output: Option<PathBuf>,
}

impl RenderOptions {

    pub fn from_env() -> Self {
        Self::from_values(env::var(RENDER_VAR).ok(), env::var(OUTPUT_VAR).ok())
    }

    pub fn from_values(render: Option<String>, output: Option<String>) -> Self {
        let render = match render {
            Some(name) => RenderKind::from_name(&name).unwrap_or_else(|| {
                warn!("unknown {} value \"{}\", using basic render", RENDER_VAR, name);
                RenderKind::Basic
            }),
            None => RenderKind::Basic,
        };

        Self {
            render,
            output: output.filter(|v| !v.is_empty()).map(PathBuf::from),
        }
    }

    pub fn renderer(&self) -> Box<dyn Render> {
        match self.render {
            RenderKind::Basic => Box::new(BasicRender::new()),
            RenderKind::Multithreaded => Box::new(MultithreadedRender::new()),
        }
    }

    /// Explicit output path, or the scene path with a `.ppm` extension.
    pub fn output_path(&self, scene_path: &Path) -> PathBuf {
        match &self.output {
            Some(v) => v.clone(),
            None => scene_path.with_extension("ppm"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::from_values(None, None);

        assert_eq!(options.render, RenderKind::Basic);
        assert_eq!(options.output_path(Path::new("scenes/spheres.txt")), PathBuf::from("scenes/spheres.ppm"));
        assert_eq!(options.output_path(Path::new("scene")), PathBuf::from("scene.ppm"));
    }

    #[test]
    fn test_render_kind() {
        assert_eq!(RenderOptions::from_values(Some("Multithreaded".to_string()), None).render, RenderKind::Multithreaded);
        assert_eq!(RenderOptions::from_values(Some("gpu".to_string()), None).render, RenderKind::Basic);
    }

    #[test]
    fn test_output_override() {
        let options = RenderOptions::from_values(None, Some("out/result.ppm".to_string()));
        assert_eq!(options.output_path(Path::new("scene.txt")), PathBuf::from("out/result.ppm"));

        let options = RenderOptions::from_values(None, Some(String::new()));
        assert_eq!(options.output_path(Path::new("scene.txt")), PathBuf::from("scene.ppm"));
    }
}
