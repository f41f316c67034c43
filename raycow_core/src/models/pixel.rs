pub const MAX_CHANNEL_VALUE: u8 = 255;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pixel {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Pixel {

    pub fn zero() -> Self {
        Self::black()
    }

    pub fn white() -> Self {
        Self::from_rgb(255, 255, 255)
    }

    pub fn black() -> Self {
        Self::from_rgb(0, 0, 0)
    }

    pub fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Pixel {
            red,
            green,
            blue,
        }
    }

    /// Builds a pixel from channels in [0, 1]. Out of range values are clamped.
    pub fn from_unit_rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::from_rgb(unit_to_channel(red), unit_to_channel(green), unit_to_channel(blue))
    }

    pub fn to_unit_rgb(&self) -> (f64, f64, f64) {
        (
            channel_to_unit(self.red),
            channel_to_unit(self.green),
            channel_to_unit(self.blue),
        )
    }

    /// Rescales the channels to a `0..=max_value` range.
    pub fn scaled_to(&self, max_value: u32) -> (u32, u32, u32) {
        let scale = |v: u8| ((v as u32 * max_value) as f64 / MAX_CHANNEL_VALUE as f64).round() as u32;
        (scale(self.red), scale(self.green), scale(self.blue))
    }
}

fn unit_to_channel(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }

    (value.max(0.0).min(1.0) * MAX_CHANNEL_VALUE as f64).round() as u8
}

fn channel_to_unit(value: u8) -> f64 {
    value as f64 / MAX_CHANNEL_VALUE as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_unit_rgb_clamps() {
        assert_eq!(Pixel::from_unit_rgb(1.5, -0.2, 0.5), Pixel::from_rgb(255, 0, 128));
    }

    #[test]
    fn test_unit_rgb_round_trip_for_extremes() {
        assert_eq!(Pixel::white().to_unit_rgb(), (1.0, 1.0, 1.0));
        assert_eq!(Pixel::black().to_unit_rgb(), (0.0, 0.0, 0.0));
    }

    #[test]
    fn test_scaled_to_smaller_range() {
        assert_eq!(Pixel::from_rgb(255, 0, 51).scaled_to(15), (15, 0, 3));
    }
}
