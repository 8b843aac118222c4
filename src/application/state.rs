//! Application state management for the lemonade maker.
//!
//! This module contains the session state the terminal front end owns
//! and the focus and mode handling around it.

use super::config::Dimensions;
use crate::domain::{RandomSource, RngSource, Step, StepController, StepState, ViewDescriptor};
use tracing::info;

/// Represents the current mode of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Lemonade screen is interactive
    Normal,
    /// Help popup is displayed
    Help,
}

/// Which of the two on-screen controls keyboard activation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The step image button
    Primary,
    /// The Next button
    Next,
}

/// Main application state for one lemonade session.
///
/// # Examples
///
/// ```
/// use lemonade::application::{App, AppMode};
/// use lemonade::domain::Step;
///
/// let app = App::default();
/// assert_eq!(app.state.step, Step::PickLemon);
/// assert_eq!(app.mode, AppMode::Normal);
/// ```
#[derive(Debug)]
pub struct App {
    /// Current step machine state
    pub state: StepState,
    /// Random source for squeeze counts
    pub rng: Box<dyn RandomSource>,
    /// Current application mode
    pub mode: AppMode,
    /// Control that Space/Enter activates
    pub focus: Focus,
    /// Layout settings for rendering
    pub dimensions: Dimensions,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Number of times the cycle has been completed
    pub glasses_made: u32,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Terminal height in rows (for help scrolling limits)
    pub viewport_rows: u16,
}

impl Default for App {
    fn default() -> Self {
        Self::new(Box::new(RngSource::thread()), Dimensions::default())
    }
}

impl App {
    /// Creates a fresh session at the first step.
    pub fn new(rng: Box<dyn RandomSource>, dimensions: Dimensions) -> Self {
        Self {
            state: StepState::default(),
            rng,
            mode: AppMode::Normal,
            focus: Focus::Primary,
            dimensions,
            status_message: None,
            glasses_made: 0,
            help_scroll: 0,
            viewport_rows: 24,
        }
    }

    /// Handles a tap on the step image.
    pub fn primary_tap(&mut self) {
        self.status_message = None;
        self.state = StepController::on_primary_tap(self.state, self.rng.as_mut());
    }

    /// Handles a tap on the Next button.
    ///
    /// Does nothing while the button is disabled. Finishing the Restart step
    /// counts one more glass.
    pub fn next_tap(&mut self) {
        if !self.state.next_enabled {
            self.status_message = Some("Finish this step first".to_string());
            return;
        }

        let previous = self.state.step;
        self.state = StepController::on_next_tap(self.state);
        self.focus = Focus::Primary;
        self.status_message = None;

        if previous == Step::Restart {
            self.glasses_made += 1;
            info!(glasses_made = self.glasses_made, "glass of lemonade finished");
            self.status_message = Some(format!("Glasses made: {}", self.glasses_made));
        }
    }

    /// Activates whichever control currently has focus.
    pub fn activate_focused(&mut self) {
        match self.focus {
            Focus::Primary => self.primary_tap(),
            Focus::Next => self.next_tap(),
        }
    }

    /// Moves focus to the other control.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Primary => Focus::Next,
            Focus::Next => Focus::Primary,
        };
    }

    /// Resource keys for the step currently on screen.
    pub fn current_view(&self) -> ViewDescriptor {
        StepController::current_step_view(&self.state)
    }

    /// Opens the help popup at the top of the text.
    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    /// Closes the help popup and returns to normal mode.
    pub fn close_help(&mut self) {
        self.mode = AppMode::Normal;
        self.help_scroll = 0;
    }

    pub fn scroll_help_up(&mut self) {
        self.help_scroll = self.help_scroll.saturating_sub(1);
    }

    /// Scrolls the help text down one line, stopping once the last line
    /// is visible (`max_scroll` is the first line of the final page).
    pub fn scroll_help_down(&mut self, max_scroll: usize) {
        if self.help_scroll < max_scroll {
            self.help_scroll += 1;
        }
    }
}
