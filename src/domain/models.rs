use std::ops::RangeInclusive;

/// Inclusive range the squeeze count is drawn from when a lemon is picked.
pub const SQUEEZE_RANGE: RangeInclusive<u32> = 2..=4;

/// One of the four fixed stages of making lemonade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Step {
    /// Tap the tree to pick a lemon
    #[default]
    PickLemon,
    /// Tap the lemon repeatedly to squeeze it
    Squeeze,
    /// Tap the glass to drink the lemonade
    Drink,
    /// Tap the empty glass to start over
    Restart,
}

impl Step {
    /// All steps in cycle order.
    pub const ALL: [Step; 4] = [Step::PickLemon, Step::Squeeze, Step::Drink, Step::Restart];

    /// Returns the one-based position of this step in the cycle.
    ///
    /// # Examples
    ///
    /// ```
    /// use lemonade::domain::Step;
    ///
    /// assert_eq!(Step::PickLemon.number(), 1);
    /// assert_eq!(Step::Restart.number(), 4);
    /// ```
    pub fn number(self) -> u8 {
        match self {
            Step::PickLemon => 1,
            Step::Squeeze => 2,
            Step::Drink => 3,
            Step::Restart => 4,
        }
    }

    /// Returns the step that follows this one. Restart wraps to PickLemon.
    pub fn next(self) -> Step {
        match self {
            Step::PickLemon => Step::Squeeze,
            Step::Squeeze => Step::Drink,
            Step::Drink => Step::Restart,
            Step::Restart => Step::PickLemon,
        }
    }

    /// Returns the static view descriptor for this step.
    pub fn view(self) -> ViewDescriptor {
        STEP_VIEWS[usize::from(self.number() - 1)]
    }
}

/// The complete state of one lemonade session.
///
/// # Examples
///
/// ```
/// use lemonade::domain::{Step, StepState};
///
/// let state = StepState::default();
/// assert_eq!(state.step, Step::PickLemon);
/// assert_eq!(state.squeezes_remaining, 0);
/// assert!(!state.next_enabled);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepState {
    /// Current step in the cycle
    pub step: Step,
    /// Squeezes left before the lemon is done; only meaningful in `Step::Squeeze`
    pub squeezes_remaining: u32,
    /// Whether the Next control may advance to the following step
    pub next_enabled: bool,
}

impl StepState {
    /// Builds a state at the given step with the remaining fields set explicitly.
    pub fn new(step: Step, squeezes_remaining: u32, next_enabled: bool) -> Self {
        Self { step, squeezes_remaining, next_enabled }
    }
}

/// Resource keys the renderer uses to draw a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewDescriptor {
    pub label_key: &'static str,
    pub image_key: &'static str,
    pub description_key: &'static str,
}

/// Lookup table indexed by `Step::number() - 1`.
pub const STEP_VIEWS: [ViewDescriptor; 4] = [
    ViewDescriptor {
        label_key: "tap_tree",
        image_key: "lemon_tree",
        description_key: "lemon_tree_description",
    },
    ViewDescriptor {
        label_key: "squeeze_lemon",
        image_key: "lemon_squeeze",
        description_key: "lemon_description",
    },
    ViewDescriptor {
        label_key: "tap_drink",
        image_key: "lemon_drink",
        description_key: "lemonade_description",
    },
    ViewDescriptor {
        label_key: "tap_restart",
        image_key: "lemon_restart",
        description_key: "empty_glass_description",
    },
];
