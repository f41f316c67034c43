use std::collections::HashMap;

use custom_error::custom_error;

use super::image::Image;

custom_error! {pub ImageIOError
    FailedToRead {description: String} = "Failed to read image: {description}",
    InvalidOptions {description: String} = "Invalid options are set for this io operation: {description}",
}

pub trait ImageReader {

    fn read(&self, data: &[u8]) -> Result<Vec<Image>, ImageIOError>;
}

pub trait ImageWriter {

    fn write(&self, image: &Image, options: &ImageWriterOptions) -> Result<Vec<u8>, ImageIOError>;
}

#[derive(Clone, Debug, Default)]
pub struct ImageWriterOptions {

    options: HashMap<String, String>,
}

impl ImageWriterOptions {

    pub fn with_option(&self, key: &str, value: &str) -> Self {
        let mut options = self.options.clone();
        options.insert(key.to_string(), value.to_string());

        Self {
            options,
        }
    }

    pub fn with_option_u32(&self, key: &str, value: u32) -> Self {
        self.with_option(key, &value.to_string())
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.options.get(key).map(|v| v.as_str())
    }

    pub fn get_u32(&self, key: &str, default: u32) -> Result<u32, ImageIOError> {
        match self.options.get(key) {
            Some(v) => v.trim().parse().map_err(|err| ImageIOError::InvalidOptions {
                description: format!("failed to parse option {} as u32: {}", key, err),
            }),
            None => Ok(default),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_u32_default() {
        let options = ImageWriterOptions::default();
        assert_eq!(options.get_u32("max_color_value", 255).unwrap(), 255);
    }

    #[test]
    fn test_get_u32_invalid() {
        let options = ImageWriterOptions::default().with_option("max_color_value", "lots");
        match options.get_u32("max_color_value", 255) {
            Err(ImageIOError::InvalidOptions { description }) => assert!(description.contains("max_color_value")),
            other => panic!("expected invalid options error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_string() {
        let options = ImageWriterOptions::default().with_option("comment", "rendered by raycow");
        assert_eq!(options.get_string("comment"), Some("rendered by raycow"));
        assert_eq!(options.get_string("missing"), None);
    }
}
