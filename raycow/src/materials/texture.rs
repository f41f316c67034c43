use raycow_core::models::image::Image;

use crate::geometry::{models::UvCoord, vector3::Vector3};

pub struct Texture {
    image: Image,
}

impl Texture {

    pub fn new(image: Image) -> Self {
        Self {
            image,
        }
    }

    pub fn width(&self) -> usize {
        self.image.width
    }

    pub fn height(&self) -> usize {
        self.image.height
    }

    /// Nearest texel lookup, (0, 0) is the top left corner of the image.
    pub fn color_at(&self, uv: &UvCoord) -> Vector3 {
        if self.image.is_empty() {
            return Vector3::zero();
        }

        let u = clamp_unit(uv.u);
        let v = clamp_unit(uv.v);

        let x = (u * (self.image.width - 1) as f64).round() as usize;
        let y = (v * (self.image.height - 1) as f64).round() as usize;

        let (red, green, blue) = self.image.get_pixel(x, y).to_unit_rgb();
        Vector3::new(red, green, blue)
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.max(0.0).min(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raycow_core::models::pixel::Pixel;

    fn checker() -> Texture {
        let mut image = Image::new(2, 2);
        image.set_pixel(0, 0, Pixel::white());
        image.set_pixel(1, 1, Pixel::white());
        image.set_pixel(1, 0, Pixel::from_rgb(255, 0, 0));
        Texture::new(image)
    }

    #[test]
    fn test_corners() {
        let texture = checker();

        assert_eq!(texture.color_at(&UvCoord::new(0.0, 0.0)), Vector3::one());
        assert_eq!(texture.color_at(&UvCoord::new(1.0, 0.0)), Vector3::new(1.0, 0.0, 0.0));
        assert_eq!(texture.color_at(&UvCoord::new(0.0, 1.0)), Vector3::zero());
        assert_eq!(texture.color_at(&UvCoord::new(1.0, 1.0)), Vector3::one());
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        let texture = checker();
        assert_eq!(texture.color_at(&UvCoord::new(3.0, -1.0)), Vector3::new(1.0, 0.0, 0.0));
    }
}
