use custom_error::custom_error;

use crate::scene::scene::Scene;

custom_error! {pub SceneError
    FailedToRead {description: String} = "Failed to read scene: {description}",
    MissingDirective {name: String} = "Required directive is missing: {name}",
    InvalidDirective {line: usize, description: String} = "Invalid directive on line {line}: {description}",
    FailedToLoadTexture {path: String, description: String} = "Failed to load texture {path}: {description}",
}

pub trait SceneProvider {

    fn scene(&self) -> Result<Scene, SceneError>;
}
