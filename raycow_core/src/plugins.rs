use crate::models::io::{ImageReader, ImageWriter};

/// Bundles the reader and the writer of one image format.
pub trait ImageFormatSupportPlugin {

    fn format_name(&self) -> String;

    fn reader(&self) -> Box<dyn ImageReader>;
    fn writer(&self) -> Box<dyn ImageWriter>;

    fn supports_extension(&self, extension: &str) -> bool {
        self.format_name().eq_ignore_ascii_case(extension)
    }
}
