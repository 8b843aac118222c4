//! Layout settings for the lemonade screen.

use serde::{Deserialize, Serialize};

/// Sizes used when drawing the screen, measured in terminal cells.
///
/// None of these affect how steps advance.
///
/// # Examples
///
/// ```
/// use lemonade::application::Dimensions;
///
/// let dims: Dimensions = serde_json::from_str(r#"{"button_image_width": 40}"#).unwrap();
/// assert_eq!(dims.button_image_width, 40);
/// assert_eq!(dims.button_image_height, Dimensions::default().button_image_height);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    /// Zero draws square corners, anything else draws rounded ones
    pub button_corner_radius: u16,
    pub button_image_width: u16,
    pub button_image_height: u16,
    /// Blank cells between the button border and the image
    pub button_interior_padding: u16,
    /// Blank rows between the button, label and Next control
    pub padding_vertical: u16,
}

impl Default for Dimensions {
    fn default() -> Self {
        Self {
            button_corner_radius: 1,
            button_image_width: 30,
            button_image_height: 9,
            button_interior_padding: 1,
            padding_vertical: 1,
        }
    }
}

impl Dimensions {
    /// Outer width of the primary button including border and padding.
    pub fn button_width(&self) -> u16 {
        self.button_image_width
            .saturating_add(self.button_interior_padding.saturating_mul(2))
            .saturating_add(2)
    }

    /// Outer height of the primary button including border and padding.
    pub fn button_height(&self) -> u16 {
        self.button_image_height
            .saturating_add(self.button_interior_padding.saturating_mul(2))
            .saturating_add(2)
    }

    /// Whether the button corners should be drawn rounded.
    pub fn rounded(&self) -> bool {
        self.button_corner_radius > 0
    }
}
