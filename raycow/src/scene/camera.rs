use crate::geometry::{ray::Ray, vector3::Vector3};

#[derive(Clone, Debug, PartialEq)]
pub enum Projection {
    Perspective,
    /// Orthographic, optionally with an explicit viewing window width.
    Parallel { window_width: Option<f64> },
}

#[derive(Clone, Debug)]
pub struct Camera {

    eye: Vector3,
    view_direction: Vector3,
    up_direction: Vector3,
    field_of_view: f64,
    projection: Projection,
}

impl Camera {

    /// `field_of_view` is the vertical field of view in degrees.
    pub fn new(eye: Vector3, view_direction: Vector3, up_direction: Vector3, field_of_view: f64) -> Self {
        Self {
            eye,
            view_direction,
            up_direction,
            field_of_view,
            projection: Projection::Perspective,
        }
    }

    pub fn with_projection(self, projection: Projection) -> Self {
        Self {
            projection,
            ..self
        }
    }

    pub fn eye(&self) -> &Vector3 {
        &self.eye
    }

    pub fn view_direction(&self) -> &Vector3 {
        &self.view_direction
    }

    pub fn up_direction(&self) -> &Vector3 {
        &self.up_direction
    }

    pub fn field_of_view(&self) -> f64 {
        self.field_of_view
    }

    pub fn projection(&self) -> &Projection {
        &self.projection
    }

    /// False when the view and up directions cannot span a camera basis.
    pub fn has_valid_basis(&self) -> bool {
        self.view_direction.cross_product(&self.up_direction).length() > 1e-9
    }

    pub fn viewport(&self, width: usize, height: usize) -> Viewport {
        let w = self.view_direction.normalized();
        let u = w.cross_product(&self.up_direction).normalized();
        let v = u.cross_product(&w);

        let aspect_ratio = width as f64 / height as f64;
        let (window_width, window_height) = match self.projection {
            Projection::Parallel { window_width: Some(window_width) } => (window_width, window_width / aspect_ratio),
            _ => {
                let window_height = 2.0 * (self.field_of_view.to_radians() / 2.0).tan();
                (window_height * aspect_ratio, window_height)
            },
        };

        let window_center = self.eye + w;
        let upper_left = window_center - u * (window_width / 2.0) + v * (window_height / 2.0);

        Viewport {
            eye: self.eye,
            forward: w,
            upper_left,
            step_x: u * (window_width / width as f64),
            step_y: v * -(window_height / height as f64),
            parallel: matches!(self.projection, Projection::Parallel { .. }),
        }
    }
}

/// Viewing window of a camera for a fixed image size.
pub struct Viewport {
    eye: Vector3,
    forward: Vector3,
    upper_left: Vector3,
    step_x: Vector3,
    step_y: Vector3,
    parallel: bool,
}

impl Viewport {

    /// Ray through the center of pixel (x, y), row 0 being the top of the image.
    pub fn ray_for_pixel(&self, x: usize, y: usize) -> Ray {
        let point = self.upper_left
            + self.step_x * (x as f64 + 0.5)
            + self.step_y * (y as f64 + 0.5);

        if self.parallel {
            Ray::new(point - self.forward, self.forward)
        } else {
            Ray::new(self.eye, (point - self.eye).normalized())
        }
    }
}
