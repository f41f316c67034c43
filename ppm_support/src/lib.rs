extern crate custom_error;

use raycow_core::{plugins::ImageFormatSupportPlugin, models::io::{ImageReader, ImageWriter}};

use reader::PPMReader;
use writer::PPMWriter;

pub mod reader;
pub mod writer;

pub struct PPMFormatSupportPlugin {
}

impl PPMFormatSupportPlugin {

    pub fn new() -> Self {
        PPMFormatSupportPlugin {}
    }
}

impl ImageFormatSupportPlugin for PPMFormatSupportPlugin {

    fn format_name(&self) -> String {
        "PPM".to_string()
    }

    fn reader(&self) -> Box<dyn ImageReader> {
        Box::new(PPMReader::new())
    }

    fn writer(&self) -> Box<dyn ImageWriter> {
        Box::new(PPMWriter::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supports_extension() {
        let plugin = PPMFormatSupportPlugin::new();
        assert!(plugin.supports_extension("ppm"));
        assert!(!plugin.supports_extension("bmp"));
    }
}
