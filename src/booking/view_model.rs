use std::collections::BTreeSet;

use crate::booking::summary::BookingSummary;
use crate::booking::validation::FieldId;
use crate::booking::wizard::{Effect, Step};

/// Everything the booking modal markup depends on, built up purely from
/// wizard effects.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardView {
    pub modal_open: bool,
    pub active_step: Step,
    pub selected_option: Option<String>,
    pub next_enabled: bool,
    pub field_errors: BTreeSet<FieldId>,
    pub summary: Option<BookingSummary>,
    pub submit_locked: bool,
}

impl WizardView {
    /// Applies the visual part of an effect. Timers and notifications are
    /// left to the component.
    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::ShowModal => self.modal_open = true,
            Effect::HideModal => self.modal_open = false,
            Effect::SetStepActive(step) => self.active_step = *step,
            Effect::MarkOptionSelected(id) => self.selected_option = id.clone(),
            Effect::SetNextEnabled(enabled) => self.next_enabled = *enabled,
            Effect::SetFieldError(field, true) => {
                self.field_errors.insert(*field);
            }
            Effect::SetFieldError(field, false) => {
                self.field_errors.remove(field);
            }
            Effect::RenderSummary(summary) => self.summary = Some(summary.clone()),
            Effect::SetSubmitLocked(locked) => self.submit_locked = *locked,
            Effect::Notify(_)
            | Effect::NotifyAfter { .. }
            | Effect::ScheduleSubmission { .. }
            | Effect::CancelPending => {}
        }
    }

    pub fn is_step_active(&self, step: Step) -> bool {
        self.active_step == step
    }

    /// Progress markers light up for the active step and every step before it.
    pub fn is_step_reached(&self, step: Step) -> bool {
        step <= self.active_step
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submit_locked {
            "Processing..."
        } else {
            "Confirm Booking"
        }
    }
}
