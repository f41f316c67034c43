#[macro_use]
extern crate log;
extern crate custom_error;

pub mod config;
pub mod geometry;
pub mod materials;
pub mod objects;
pub mod render;
pub mod scene;
pub mod scenes;

use std::{env, fs, process};
use std::path::Path;

use custom_error::custom_error;
use env_logger::Env;

use raycow_core::utils::print_intro;
use raycow_core::models::io::{ImageIOError, ImageWriterOptions};
use raycow_core::plugins::ImageFormatSupportPlugin;
use ppm_support::{PPMFormatSupportPlugin, writer::OPTION_COMMENT};

use config::RenderOptions;
use render::render::RenderError;
use scenes::{loader::SceneFileLoader, provider::{SceneError, SceneProvider}};

const DEFAULT_LOGGING_LEVEL: &str = "info";

custom_error! {CliError
    InvalidArguments {count: usize} = "expected exactly one argument, the scene file path, got {count}. Usage: raycow <scene-file>",
    Scene {source: SceneError} = "{source}",
    Render {source: RenderError} = "{source}",
    Encode {source: ImageIOError} = "{source}",
    FailedToSave {path: String, description: String} = "Failed to save image to {path}: {description}",
}

fn main() {
    env_logger::Builder::from_env(Env::default().default_filter_or(DEFAULT_LOGGING_LEVEL)).init();
    print_intro();

    let args: Vec<String> = env::args().collect();
    debug!("args are: {:?}", args);

    if let Err(err) = run(&args) {
        error!("{}", err);
        process::exit(1);
    }

    info!("done");
}

fn run(args: &[String]) -> Result<(), CliError> {
    if args.len() != 2 {
        return Err(CliError::InvalidArguments { count: args.len().saturating_sub(1) });
    }

    let options = RenderOptions::from_env();
    let scene_path = Path::new(&args[1]);
    let format_support = PPMFormatSupportPlugin::new();

    let scene = SceneFileLoader::new(scene_path, format_support.reader()).scene()?;
    let mut output = scene.settings().create_image();

    info!("rendering image with {:?} render", options.render);
    options.renderer().render(&scene, &mut output)?;

    let output_path = options.output_path(scene_path);
    info!("saving rendered image to {}", output_path.display());

    let writer_options = ImageWriterOptions::default()
        .with_option(OPTION_COMMENT, &format!("rendered by raycow from {}", scene_path.display()));
    let image_bytes = format_support.writer().write(&output, &writer_options)?;

    fs::write(&output_path, &image_bytes).map_err(|err| CliError::FailedToSave {
        path: output_path.display().to_string(),
        description: err.to_string(),
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_argument_count() {
        match run(&["raycow".to_string()]) {
            Err(CliError::InvalidArguments { count }) => assert_eq!(count, 0),
            other => panic!("expected invalid arguments, got {:?}", other),
        }

        let args: Vec<String> = vec!["raycow", "a.txt", "b.txt"].into_iter().map(String::from).collect();
        match run(&args) {
            Err(CliError::InvalidArguments { count }) => assert_eq!(count, 2),
            other => panic!("expected invalid arguments, got {:?}", other),
        }
    }

    #[test]
    fn test_renders_scene_file() {
        let dir = env::temp_dir().join(format!("raycow_cli_test_{}", process::id()));
        fs::create_dir_all(&dir).unwrap();
        let scene_path = dir.join("scene.txt");
        fs::write(&scene_path, "imsize 4 3\neye 0 0 5\nviewdir 0 0 -1\nupdir 0 1 0\nfovv 60\nbkgcolor 0 0 1\n").unwrap();

        let result = run(&["raycow".to_string(), scene_path.display().to_string()]);
        let written = fs::read_to_string(dir.join("scene.ppm"));
        fs::remove_dir_all(&dir).unwrap();

        assert!(result.is_ok());
        let written = written.unwrap();
        assert!(written.starts_with("P3\n# rendered by raycow from "));
        assert!(written.contains("\n4 3\n255\n"));
        assert_eq!(written.lines().filter(|v| *v == "0 0 255").count(), 12);
    }

    #[test]
    fn test_missing_scene_file() {
        match run(&["raycow".to_string(), "does/not/exist.txt".to_string()]) {
            Err(CliError::Scene { source: SceneError::FailedToRead { .. } }) => {},
            other => panic!("expected scene read error, got {:?}", other),
        }
    }
}
