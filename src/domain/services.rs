//! Step transition services for the lemonade maker.
//!
//! This module holds the state machine that moves a session through
//! the four steps, and the random source used to decide how many
//! squeezes a freshly picked lemon needs.

use super::models::{Step, StepState, ViewDescriptor, SQUEEZE_RANGE};
use rand::rngs::{StdRng, ThreadRng};
use rand::{Rng, SeedableRng};
use std::fmt::Debug;
use std::ops::RangeInclusive;
use tracing::{debug, warn};

/// Source of the integer drawn when a lemon is picked.
///
/// Implementations must return a value inside `range`.
pub trait RandomSource: Debug {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32;
}

/// Adapts any `rand` generator into a [`RandomSource`].
#[derive(Debug)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Creates a reproducible source from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RngSource<ThreadRng> {
    /// Creates a source backed by the thread-local generator.
    pub fn thread() -> Self {
        Self(rand::thread_rng())
    }
}

impl<R: Rng + Debug> RandomSource for RngSource<R> {
    fn draw(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.0.gen_range(range)
    }
}

/// Pure state machine driving the lemonade steps.
///
/// Every operation takes the current [`StepState`] by value and returns the
/// next one; the caller owns the mutable cell.
///
/// # Examples
///
/// ```
/// use lemonade::domain::{RngSource, Step, StepController, StepState};
///
/// let mut rng = RngSource::seeded(7);
/// let state = StepController::on_primary_tap(StepState::default(), &mut rng);
/// assert!(state.next_enabled);
/// assert!((2..=4).contains(&state.squeezes_remaining));
///
/// let state = StepController::on_next_tap(state);
/// assert_eq!(state.step, Step::Squeeze);
/// assert!(!state.next_enabled);
/// ```
pub struct StepController;

impl StepController {
    /// Applies a tap on the primary image for the current step.
    ///
    /// Picking a lemon rolls the squeeze count for the upcoming Squeeze step.
    /// Squeezing decrements the count, clamped at zero, and enables Next once
    /// it reaches zero. Drinking and restarting enable Next immediately.
    pub fn on_primary_tap(state: StepState, rng: &mut dyn RandomSource) -> StepState {
        let next = match state.step {
            Step::PickLemon => StepState {
                squeezes_remaining: rng.draw(SQUEEZE_RANGE),
                next_enabled: true,
                ..state
            },
            Step::Squeeze => {
                let squeezes_remaining = state.squeezes_remaining.saturating_sub(1);
                StepState {
                    squeezes_remaining,
                    next_enabled: state.next_enabled || squeezes_remaining == 0,
                    ..state
                }
            }
            Step::Drink | Step::Restart => StepState {
                next_enabled: true,
                ..state
            },
        };

        debug!(
            step = next.step.number(),
            squeezes_remaining = next.squeezes_remaining,
            next_enabled = next.next_enabled,
            "primary tap"
        );
        next
    }

    /// Advances to the following step and disables Next.
    ///
    /// A tap while Next is disabled leaves the state untouched.
    pub fn on_next_tap(state: StepState) -> StepState {
        if !state.next_enabled {
            warn!(step = state.step.number(), "next tap ignored while disabled");
            return state;
        }

        let next = StepState {
            step: state.step.next(),
            next_enabled: false,
            ..state
        };

        debug!(
            from = state.step.number(),
            to = next.step.number(),
            squeezes_remaining = next.squeezes_remaining,
            "next tap"
        );
        next
    }

    /// Returns the resource keys the renderer needs for the current step.
    pub fn current_step_view(state: &StepState) -> ViewDescriptor {
        state.step.view()
    }
}
