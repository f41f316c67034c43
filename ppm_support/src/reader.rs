use std::str::from_utf8;

use raycow_core::models::{image::Image, pixel::Pixel, io::{ImageReader, ImageIOError}};

#[derive(Debug)]
struct Header {
    magic_number: String,
    width: usize,
    height: usize,
    pixel_count: usize,
    max_color_value: usize,
}

trait RasterReader {
    fn read_raster(&self, header: &Header, data: &[u8]) -> Result<Vec<Pixel>, ImageIOError>;
}

struct P3RasterReader {
}

impl RasterReader for P3RasterReader {

    fn read_raster(&self, header: &Header, mut data: &[u8]) -> Result<Vec<Pixel>, ImageIOError> {
        // every channel takes at least one digit and one separator
        let minimum = header.pixel_count.checked_mul(6).unwrap_or(usize::MAX);
        if data.len() + 1 < minimum {
            return Err(ImageIOError::FailedToRead {
                description: format!("{} pixels do not fit into {} bytes of raster data", header.pixel_count, data.len()),
            });
        }

        let normalize = get_normalize_fn(header.max_color_value);
        let mut pixels = Vec::with_capacity(header.pixel_count);

        for _ in 0..header.pixel_count {
            let (red, rest) = read_number(skip_whitespaces_and_comments(data))?;
            let (green, rest) = read_number(skip_whitespaces_and_comments(rest))?;
            let (blue, rest) = read_number(skip_whitespaces_and_comments(rest))?;
            data = rest;

            pixels.push(Pixel::from_rgb(normalize(red), normalize(green), normalize(blue)));
        }

        Ok(pixels)
    }
}

struct P6RasterReader {
}

impl RasterReader for P6RasterReader {

    fn read_raster(&self, header: &Header, data: &[u8]) -> Result<Vec<Pixel>, ImageIOError> {
        // exactly one whitespace byte separates the header from binary data
        let data = if data.is_empty() { data } else { &data[1..] };

        let bytes_per_channel = if header.max_color_value < 256 { 1 } else { 2 };
        let expected = header.pixel_count.checked_mul(3 * bytes_per_channel)
            .ok_or_else(|| ImageIOError::FailedToRead {
                description: format!("raster of {}x{} pixels is too large", header.width, header.height),
            })?;
        if data.len() < expected {
            return Err(ImageIOError::FailedToRead {
                description: format!("expected {} bytes of raster data, got {}", expected, data.len()),
            });
        }

        let normalize = get_normalize_fn(header.max_color_value);
        let pixels = data[..expected]
            .chunks(3 * bytes_per_channel)
            .map(|chunk| {
                let channel = |i: usize| if bytes_per_channel == 1 {
                    chunk[i] as usize
                } else {
                    ((chunk[2 * i] as usize) << 8) | chunk[2 * i + 1] as usize
                };
                Pixel::from_rgb(normalize(channel(0)), normalize(channel(1)), normalize(channel(2)))
            })
            .collect();

        Ok(pixels)
    }
}

fn get_raster_reader(magic_number: &str) -> Result<Box<dyn RasterReader>, ImageIOError> {
    match magic_number {
        "P3" => Ok(Box::new(P3RasterReader {})),
        "P6" => Ok(Box::new(P6RasterReader {})),
        other => Err(ImageIOError::FailedToRead {
            description: format!("PPM reader does not support {} magic number", other),
        }),
    }
}

fn get_normalize_fn(max_value: usize) -> impl Fn(usize) -> u8 {
    move |x| (255 * x.min(max_value) / max_value) as u8
}

fn is_whitespace(char: u8) -> bool {
    // 9 - TAB; 10 - LF; 13 - CR; 32 - SPACE;
    char == 9 || char == 10 || char == 13 || char == 32
}

fn read_number(data: &[u8]) -> Result<(usize, &[u8]), ImageIOError> {
    let mut i = 0;
    while data.len() > i && !is_whitespace(data[i]) {
        i += 1;
    }

    if i == 0 {
        return Err(ImageIOError::FailedToRead {
            description: "unexpected end of data, expected a number".to_string(),
        });
    }

    let number = from_utf8(&data[0..i])
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .ok_or_else(|| ImageIOError::FailedToRead {
            description: format!("failed to parse number: {}", String::from_utf8_lossy(&data[0..i])),
        })?;

    Ok((number, &data[i..]))
}

fn skip_whitespaces_and_comments(mut data: &[u8]) -> &[u8] {
    loop {
        let mut i = 0;
        while i < data.len() && is_whitespace(data[i]) {
            i += 1;
        }
        data = &data[i..];

        // 35 - #; 10 - LF
        if data.first() != Some(&35) {
            return data;
        }

        let mut i = 0;
        while i < data.len() && data[i] != 10 {
            i += 1;
        }
        data = &data[i..];
    }
}

fn read_header(data: &[u8]) -> Result<(Header, &[u8]), ImageIOError> {
    if data.len() < 2 {
        return Err(ImageIOError::FailedToRead {
            description: "data is too short to contain a PPM header".to_string(),
        });
    }

    let magic_number = from_utf8(&data[0..2]).map_err(|_| ImageIOError::FailedToRead {
        description: "bad data for magic number in PPM header".to_string(),
    })?;

    let (width, data) = read_number(skip_whitespaces_and_comments(&data[2..]))?;
    let (height, data) = read_number(skip_whitespaces_and_comments(data))?;
    let (max_color_value, data) = read_number(skip_whitespaces_and_comments(data))?;

    if max_color_value == 0 || max_color_value > 65535 {
        return Err(ImageIOError::FailedToRead {
            description: format!("invalid max color value: {}", max_color_value),
        });
    }

    let pixel_count = width.checked_mul(height).ok_or_else(|| ImageIOError::FailedToRead {
        description: format!("image size {}x{} is too large", width, height),
    })?;

    Ok((Header {
        magic_number: magic_number.to_owned(),
        width,
        height,
        pixel_count,
        max_color_value,
    }, data))
}

pub struct PPMReader {
}

impl PPMReader {

    pub const fn new() -> Self {
        PPMReader {}
    }
}

impl ImageReader for PPMReader {

    fn read(&self, data: &[u8]) -> Result<Vec<Image>, ImageIOError> {
        let (header, data) = read_header(data)?;
        let raster_reader = get_raster_reader(header.magic_number.as_str())?;

        Ok(vec![Image {
            width: header.width,
            height: header.height,
            pixels: raster_reader.read_raster(&header, data)?,
        }])
    }
}
