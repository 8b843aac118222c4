use crate::application::Dimensions;
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("cannot read layout file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid layout file format - {0}")]
    Format(#[from] serde_json::Error),
    #[error("button image must be at least 1x1, got {width}x{height}")]
    EmptyImage { width: u16, height: u16 },
}

pub struct FileRepository;

impl FileRepository {
    pub fn load_dimensions(path: &Path) -> Result<Dimensions, LayoutError> {
        let content = fs::read_to_string(path)?;
        let dimensions = serde_json::from_str::<Dimensions>(&content)?;

        if dimensions.button_image_width == 0 || dimensions.button_image_height == 0 {
            return Err(LayoutError::EmptyImage {
                width: dimensions.button_image_width,
                height: dimensions.button_image_height,
            });
        }

        Ok(dimensions)
    }

    pub fn save_dimensions(dimensions: &Dimensions, path: &Path) -> Result<(), LayoutError> {
        let json = serde_json::to_string_pretty(dimensions)?;
        fs::write(path, json)?;
        Ok(())
    }
}
