use raycow_core::models::{image::Image, io::{ImageWriter, ImageWriterOptions, ImageIOError}};

pub const OPTION_COMMENT: &str = "comment";
pub const OPTION_MAX_COLOR_VALUE: &str = "max_color_value";

const DEFAULT_COMMENT: &str = "rendered by raycow";
const DEFAULT_MAX_COLOR_VALUE: u32 = 255;

pub struct PPMWriter {
}

impl PPMWriter {

    pub const fn new() -> Self {
        PPMWriter {}
    }
}

impl ImageWriter for PPMWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError> {
        let max_color_value = options.get_u32(OPTION_MAX_COLOR_VALUE, DEFAULT_MAX_COLOR_VALUE)?;
        if max_color_value == 0 || max_color_value > 65535 {
            return Err(ImageIOError::InvalidOptions {
                description: format!("max color value should be in 1..=65535, got {}", max_color_value),
            });
        }

        let comment = options.get_string(OPTION_COMMENT).unwrap_or(DEFAULT_COMMENT);
        if comment.contains('\n') {
            return Err(ImageIOError::InvalidOptions {
                description: "comment should fit on a single line".to_string(),
            });
        }

        let mut bytes = Vec::new();
        bytes.extend_from_slice(b"P3\n");
        bytes.extend_from_slice(format!("# {}\n", comment).as_bytes());
        bytes.extend_from_slice(format!("{} {}\n", image.width, image.height).as_bytes());
        bytes.extend_from_slice(format!("{}\n", max_color_value).as_bytes());

        for row in image.rows() {
            for pixel in row {
                let (red, green, blue) = pixel.scaled_to(max_color_value);
                bytes.extend_from_slice(format!("{} {} {}\n", red, green, blue).as_bytes());
            }
        }

        Ok(bytes)
    }
}
