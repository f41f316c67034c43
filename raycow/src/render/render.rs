use custom_error::custom_error;
use raycow_core::models::image::Image;

use crate::scene::scene::Scene;

custom_error! {pub RenderError
    InvalidTarget {description: String} = "Invalid render target: {description}",
}

pub trait Render {

    fn render(&self, scene: &Scene, render_to: &mut Image) -> Result<(), RenderError>;
}

pub(crate) fn check_target(render_to: &Image) -> Result<(), RenderError> {
    if render_to.is_empty() {
        return Err(RenderError::InvalidTarget {
            description: format!("image has zero size: {}x{}", render_to.width, render_to.height),
        });
    }

    if render_to.pixels.len() != render_to.width * render_to.height {
        return Err(RenderError::InvalidTarget {
            description: format!(
                "expected {} pixels for a {}x{} image, got {}",
                render_to.width * render_to.height, render_to.width, render_to.height, render_to.pixels.len()
            ),
        });
    }

    Ok(())
}
