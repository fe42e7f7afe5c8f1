//! Landing-to-main choreography timing.
//!
//! [`TransitionPlan::steps`] is the full timeline, measured from activation.
//! The web side runs each step with a one-shot timer at its `at` offset.

use crate::constants::{CASCADE_STEP_MS, FADE_OUT_MS};
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionPlan {
    /// Time between activation and swapping the landing view for the main view.
    pub fade_out: Duration,
    /// Gap between consecutive section entrances.
    pub cascade_step: Duration,
}

impl Default for TransitionPlan {
    fn default() -> Self {
        Self {
            fade_out: Duration::from_millis(FADE_OUT_MS),
            cascade_step: Duration::from_millis(CASCADE_STEP_MS),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionStep {
    /// Start the landing view's opacity fade.
    FadeOutLanding,
    /// Hide the landing view and show the main view.
    SwapViews,
    /// Start the entrance animation of the section at this document index.
    EnterSection(usize),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScheduledStep {
    /// Offset from activation.
    pub at: Duration,
    pub step: TransitionStep,
}

impl TransitionPlan {
    /// Delay of a section's entrance, relative to the swap.
    pub fn section_delay(&self, index: usize) -> Duration {
        u32::try_from(index)
            .ok()
            .and_then(|i| self.cascade_step.checked_mul(i))
            .unwrap_or(Duration::MAX)
    }

    /// Every step for `sections` sections, in firing order.
    pub fn steps(&self, sections: usize) -> Vec<ScheduledStep> {
        let mut steps = Vec::with_capacity(sections + 2);
        steps.push(ScheduledStep {
            at: Duration::ZERO,
            step: TransitionStep::FadeOutLanding,
        });
        steps.push(ScheduledStep {
            at: self.fade_out,
            step: TransitionStep::SwapViews,
        });
        steps.extend((0..sections).map(|i| ScheduledStep {
            at: self.fade_out.saturating_add(self.section_delay(i)),
            step: TransitionStep::EnterSection(i),
        }));
        steps
    }
}

/// Accepts the activation event once.
#[derive(Debug, Default)]
pub struct PageTransition {
    plan: TransitionPlan,
    activated: bool,
}

impl PageTransition {
    pub fn new(plan: TransitionPlan) -> Self {
        Self {
            plan,
            activated: false,
        }
    }

    /// Returns the plan on the first call, `None` afterwards.
    pub fn activate(&mut self) -> Option<TransitionPlan> {
        if self.activated {
            return None;
        }
        self.activated = true;
        Some(self.plan)
    }
}
