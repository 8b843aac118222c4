//! Text and picture resources looked up by the keys in a `ViewDescriptor`.

/// Title shown in the top bar.
pub const APP_TITLE: &str = "Lemonade Maker!";

/// Caption of the secondary control.
pub const NEXT_LABEL: &str = "Next";

/// Returns the English text for a label or description key.
///
/// Unknown keys are returned unchanged so a missing entry is visible on screen.
///
/// # Examples
///
/// ```
/// use lemonade::presentation::text;
///
/// assert_eq!(text("tap_drink"), "Tap the lemonade to drink it");
/// assert_eq!(text("no_such_key"), "no_such_key");
/// ```
pub fn text(key: &str) -> &str {
    match key {
        "tap_tree" => "Tap the lemon tree to select a lemon",
        "squeeze_lemon" => "Keep tapping the lemon to squeeze it",
        "tap_drink" => "Tap the lemonade to drink it",
        "tap_restart" => "Tap the empty glass to start again",
        "lemon_tree_description" => "Lemon tree",
        "lemon_description" => "Lemon",
        "lemonade_description" => "Glass of lemonade",
        "empty_glass_description" => "Empty glass",
        other => other,
    }
}

/// Returns the picture drawn inside the primary button for an image key.
pub fn image(key: &str) -> &'static [&'static str] {
    match key {
        "lemon_tree" => &[
            "      .-~~~~-.      ",
            "   .-~  (o)   ~-.   ",
            "  (  (o)    (o)  )  ",
            "   ~-.   (o)  .-~   ",
            "      ~-.__.-~      ",
            "         ||         ",
            "         ||         ",
            "      ___||___      ",
        ],
        "lemon_squeeze" => &[
            "                    ",
            "       _.---._      ",
            "    .-'       '-.   ",
            "   (      o      )  ",
            "    '-._     _.-'   ",
            "        '---'       ",
            "                    ",
        ],
        "lemon_drink" => &[
            "     |~~~~~~~~~|    ",
            "     |  o  o   |    ",
            "     |   o   o |    ",
            "     |  o   o  |    ",
            "     |  o  o   |    ",
            "      \\_______/     ",
        ],
        "lemon_restart" => &[
            "     |         |    ",
            "     |         |    ",
            "     |         |    ",
            "     |         |    ",
            "     |         |    ",
            "      \\_______/     ",
        ],
        _ => &["?"],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Step;

    #[test]
    fn test_every_step_has_resources() {
        for step in Step::ALL {
            let view = step.view();
            assert_ne!(text(view.label_key), view.label_key);
            assert_ne!(text(view.description_key), view.description_key);
            assert!(image(view.image_key).len() > 1);
        }
    }

    #[test]
    fn test_unknown_image_placeholder() {
        assert_eq!(image("mystery"), &["?"]);
    }
}
