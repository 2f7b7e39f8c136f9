//! The booking wizard as a pure state machine.
//!
//! Every input returns the list of [`Effect`]s the presentation layer has to
//! apply. Nothing in here touches the DOM or a timer, so the whole flow runs in
//! plain unit tests.

use std::collections::BTreeSet;

use log::{debug, info};

use crate::booking::catalog::{SelectedService, ServiceCatalog};
use crate::booking::error::BookingError;
use crate::booking::summary::BookingSummary;
use crate::booking::validation::{missing_required, FieldId, FieldValues};
use crate::components::notification::Notice;
use crate::config;

pub const OFFER_NOTICE: &str = "🎉 Special Offer: Get 15% OFF your first service!";
pub const BOOKING_SENT_NOTICE: &str = "✅ Booking Request Sent Successfully! We'll contact you within 24 hours to confirm your appointment. Check your phone for our call!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    #[default]
    SelectService,
    EnterDetails,
    Review,
}

impl Step {
    pub const ALL: [Step; 3] = [Step::SelectService, Step::EnterDetails, Step::Review];

    pub fn number(self) -> u8 {
        match self {
            Step::SelectService => 1,
            Step::EnterDetails => 2,
            Step::Review => 3,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::SelectService => "Select Service",
            Step::EnterDetails => "Your Details",
            Step::Review => "Confirm",
        }
    }

    fn next(self) -> Option<Step> {
        match self {
            Step::SelectService => Some(Step::EnterDetails),
            Step::EnterDetails => Some(Step::Review),
            Step::Review => None,
        }
    }

    fn prev(self) -> Option<Step> {
        match self {
            Step::SelectService => None,
            Step::EnterDetails => Some(Step::SelectService),
            Step::Review => Some(Step::EnterDetails),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Submitted,
    Failed(String),
}

/// Requests the wizard makes of whoever renders it.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ShowModal,
    HideModal,
    SetStepActive(Step),
    MarkOptionSelected(Option<String>),
    SetNextEnabled(bool),
    SetFieldError(FieldId, bool),
    RenderSummary(BookingSummary),
    SetSubmitLocked(bool),
    Notify(Notice),
    NotifyAfter { notice: Notice, delay_ms: u32 },
    ScheduleSubmission { ticket: u64, delay_ms: u32 },
    /// Drop the pending submission timer and any delayed notice.
    CancelPending,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct WizardState {
    step: Step,
    selected_service: Option<SelectedService>,
    // What is currently typed into the step 2 inputs
    draft: FieldValues,
    form_data: FieldValues,
    field_errors: BTreeSet<FieldId>,
    in_flight: Option<u64>,
    // Survives resets so a ticket from a cancelled submission is never reused
    tickets: u64,
}

impl WizardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn selected_service(&self) -> Option<&SelectedService> {
        self.selected_service.as_ref()
    }

    pub fn form_data(&self) -> &FieldValues {
        &self.form_data
    }

    pub fn draft(&self, field: FieldId) -> &str {
        self.draft.get(&field).map(String::as_str).unwrap_or("")
    }

    pub fn has_error(&self, field: FieldId) -> bool {
        self.field_errors.contains(&field)
    }

    pub fn submission_in_flight(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Starts a fresh booking, optionally with a service already picked.
    pub fn open(&mut self, catalog: &ServiceCatalog, preselect: Option<&str>) -> Vec<Effect> {
        info!("Opening booking wizard (preselect: {:?})", preselect);
        let mut effects = self.reset();
        effects.push(Effect::ShowModal);
        if let Some(id) = preselect {
            effects.extend(self.select(catalog, id));
        }
        effects.push(Effect::NotifyAfter {
            notice: Notice::success(OFFER_NOTICE),
            delay_ms: config::OFFER_NOTICE_DELAY_MS,
        });
        effects
    }

    pub fn select(&mut self, catalog: &ServiceCatalog, id: &str) -> Vec<Effect> {
        if self.step != Step::SelectService {
            debug!("Ignoring service selection outside step 1");
            return Vec::new();
        }
        let selected = catalog.select_service(id);
        debug!("Service selected: {:?}", selected);
        self.selected_service = Some(selected);
        vec![
            Effect::MarkOptionSelected(Some(id.to_string())),
            Effect::SetNextEnabled(true),
        ]
    }

    pub fn set_field(&mut self, field: FieldId, value: String) -> Vec<Effect> {
        self.draft.insert(field, value);
        if self.field_errors.remove(&field) {
            vec![Effect::SetFieldError(field, false)]
        } else {
            Vec::new()
        }
    }

    pub fn next(&mut self) -> Vec<Effect> {
        if self.submission_in_flight() {
            return Vec::new();
        }
        match self.step {
            Step::SelectService => match self.require_service() {
                Ok(_) => self.advance(),
                Err(e) => vec![Effect::Notify(Notice::error(e.to_string()))],
            },
            Step::EnterDetails => {
                let mut effects = Vec::new();
                match self.accept_details(&mut effects) {
                    Ok(summary) => {
                        effects.extend(self.advance());
                        effects.push(Effect::RenderSummary(summary));
                    }
                    Err(e) => effects.push(Effect::Notify(Notice::error(e.to_string()))),
                }
                effects
            }
            Step::Review => Vec::new(),
        }
    }

    pub fn prev(&mut self) -> Vec<Effect> {
        if self.submission_in_flight() {
            return Vec::new();
        }
        match self.step.prev() {
            Some(step) => {
                self.step = step;
                info!("Returned to step: {}", step.number());
                vec![Effect::SetStepActive(step)]
            }
            None => Vec::new(),
        }
    }

    pub fn submit(&mut self) -> Vec<Effect> {
        if self.step != Step::Review || self.submission_in_flight() {
            return Vec::new();
        }
        self.tickets += 1;
        self.in_flight = Some(self.tickets);
        info!("Submitting booking (ticket {})", self.tickets);
        vec![
            Effect::SetSubmitLocked(true),
            Effect::ScheduleSubmission { ticket: self.tickets, delay_ms: config::SUBMISSION_DELAY_MS },
        ]
    }

    /// Settles the submission identified by `ticket`. Tickets that are no
    /// longer in flight are ignored.
    pub fn finish_submission(&mut self, ticket: u64, outcome: SubmissionOutcome) -> Vec<Effect> {
        if self.in_flight != Some(ticket) {
            debug!("Ignoring stale submission ticket {}", ticket);
            return Vec::new();
        }
        self.in_flight = None;

        match outcome {
            SubmissionOutcome::Submitted => {
                info!("Booking submitted");
                let mut effects = vec![
                    Effect::SetSubmitLocked(false),
                    Effect::Notify(Notice::success(BOOKING_SENT_NOTICE)),
                    Effect::HideModal,
                ];
                effects.extend(self.reset());
                effects
            }
            SubmissionOutcome::Failed(reason) => {
                info!("Booking failed: {}", reason);
                vec![
                    Effect::SetSubmitLocked(false),
                    Effect::Notify(Notice::error(format!(
                        "Booking could not be sent: {}. Please try again.",
                        reason
                    ))),
                ]
            }
        }
    }

    /// Closing counts as cancelling anything still pending.
    pub fn close(&mut self) -> Vec<Effect> {
        if let Some(ticket) = self.in_flight {
            info!("Booking closed mid-submission, cancelling ticket {}", ticket);
        }
        let mut effects = vec![Effect::CancelPending, Effect::HideModal];
        effects.extend(self.reset());
        effects
    }

    pub fn reset(&mut self) -> Vec<Effect> {
        let mut effects = vec![
            Effect::SetStepActive(Step::SelectService),
            Effect::MarkOptionSelected(None),
            Effect::SetNextEnabled(false),
            Effect::SetSubmitLocked(false),
        ];
        effects.extend(
            self.field_errors
                .iter()
                .map(|field| Effect::SetFieldError(*field, false)),
        );

        *self = WizardState { tickets: self.tickets, ..WizardState::default() };
        debug!("Booking wizard reset");
        effects
    }

    fn advance(&mut self) -> Vec<Effect> {
        match self.step.next() {
            Some(step) => {
                self.step = step;
                info!("Advanced to step: {}", step.number());
                vec![Effect::SetStepActive(step)]
            }
            None => Vec::new(),
        }
    }

    fn require_service(&self) -> Result<&SelectedService, BookingError> {
        self.selected_service.as_ref().ok_or(BookingError::NoServiceSelected)
    }

    fn accept_details(&mut self, effects: &mut Vec<Effect>) -> Result<BookingSummary, BookingError> {
        let missing = missing_required(&self.draft);

        for field in FieldId::ALL.into_iter().filter(|f| f.required()) {
            let accepted = self.draft.get(&field).map(|v| v.trim()).filter(|v| !v.is_empty());
            match accepted {
                Some(value) => {
                    self.field_errors.remove(&field);
                    self.form_data.insert(field, value.to_string());
                }
                None => {
                    self.field_errors.insert(field);
                    self.form_data.remove(&field);
                }
            }
            effects.push(Effect::SetFieldError(field, accepted.is_none()));
        }

        if !missing.is_empty() {
            return Err(BookingError::MissingRequiredFields(missing));
        }

        for field in FieldId::ALL.into_iter().filter(|f| !f.required()) {
            match self.draft.get(&field).map(|v| v.trim()) {
                Some(value) if !value.is_empty() => {
                    self.form_data.insert(field, value.to_string());
                }
                _ => {
                    self.form_data.remove(&field);
                }
            }
        }

        let service = self.require_service()?;
        Ok(BookingSummary::build(service, &self.form_data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::notification::NoticeKind;

    fn catalog() -> &'static ServiceCatalog {
        ServiceCatalog::builtin()
    }

    fn error_notices(effects: &[Effect]) -> usize {
        effects
            .iter()
            .filter(|e| matches!(e, Effect::Notify(n) if n.kind == NoticeKind::Error))
            .count()
    }

    fn fill(wizard: &mut WizardState, name: &str, phone: &str, vehicle: &str) {
        wizard.set_field(FieldId::CustomerName, name.to_string());
        wizard.set_field(FieldId::CustomerPhone, phone.to_string());
        wizard.set_field(FieldId::VehicleInfo, vehicle.to_string());
    }

    fn at_review(service: &str) -> WizardState {
        let mut wizard = WizardState::new();
        wizard.open(catalog(), Some(service));
        wizard.next();
        fill(&mut wizard, "Megha", "9999999999", "Honda City 2020");
        wizard.next();
        assert_eq!(wizard.step(), Step::Review);
        wizard
    }

    fn summary_of(effects: &[Effect]) -> Option<&BookingSummary> {
        effects.iter().find_map(|e| match e {
            Effect::RenderSummary(summary) => Some(summary),
            _ => None,
        })
    }

    #[test]
    fn clearing_a_field_after_review_drops_it_from_form_data() {
        let mut wizard = at_review("ppf");
        wizard.prev();
        wizard.set_field(FieldId::VehicleInfo, "  ".to_string());
        let effects = wizard.next();

        assert_eq!(wizard.step(), Step::EnterDetails);
        assert_eq!(error_notices(&effects), 1);
        assert!(wizard.has_error(FieldId::VehicleInfo));
        assert!(!wizard.form_data().contains_key(&FieldId::VehicleInfo));
        assert_eq!(
            wizard.form_data().get(&FieldId::CustomerName).map(String::as_str),
            Some("Megha")
        );
    }

    #[test]
    fn next_without_service_stays_and_notifies_once() {
        let mut wizard = WizardState::new();
        let effects = wizard.next();

        assert_eq!(wizard.step(), Step::SelectService);
        assert_eq!(error_notices(&effects), 1);
        assert_eq!(
            effects,
            vec![Effect::Notify(Notice::error("Please select a service to continue."))]
        );
    }

    #[test]
    fn selecting_unlocks_next() {
        let mut wizard = WizardState::new();
        let effects = wizard.select(catalog(), "detailing");
        assert_eq!(
            effects,
            vec![
                Effect::MarkOptionSelected(Some("detailing".to_string())),
                Effect::SetNextEnabled(true),
            ]
        );

        let effects = wizard.next();
        assert_eq!(wizard.step(), Step::EnterDetails);
        assert_eq!(effects, vec![Effect::SetStepActive(Step::EnterDetails)]);
    }

    #[test]
    fn selection_is_ignored_after_step_one() {
        let mut wizard = WizardState::new();
        wizard.select(catalog(), "ppf");
        wizard.next();
        assert!(wizard.select(catalog(), "detailing").is_empty());
        assert_eq!(wizard.selected_service().unwrap().id, "ppf");
    }

    #[test]
    fn unknown_service_degrades_to_placeholder() {
        let mut wizard = WizardState::new();
        wizard.select(catalog(), "nonexistent");
        let selected = wizard.selected_service().unwrap();
        assert_eq!(selected.display_name, "Service");
        assert_eq!(selected.price_range, "Contact for pricing");
    }

    #[test]
    fn empty_required_fields_block_step_two() {
        let mut wizard = WizardState::new();
        wizard.select(catalog(), "ppf");
        wizard.next();
        fill(&mut wizard, "Megha", "   ", "");

        let effects = wizard.next();
        assert_eq!(wizard.step(), Step::EnterDetails);
        assert_eq!(error_notices(&effects), 1);
        assert!(effects.contains(&Effect::Notify(Notice::error("Please fill in all required fields."))));
        assert!(effects.contains(&Effect::SetFieldError(FieldId::CustomerName, false)));
        assert!(effects.contains(&Effect::SetFieldError(FieldId::CustomerPhone, true)));
        assert!(effects.contains(&Effect::SetFieldError(FieldId::VehicleInfo, true)));
        assert!(wizard.has_error(FieldId::CustomerPhone));
        // the valid field is kept
        assert_eq!(wizard.form_data().get(&FieldId::CustomerName).map(String::as_str), Some("Megha"));
    }

    #[test]
    fn typing_clears_field_error() {
        let mut wizard = WizardState::new();
        wizard.select(catalog(), "ppf");
        wizard.next();
        wizard.next();
        assert!(wizard.has_error(FieldId::VehicleInfo));

        let effects = wizard.set_field(FieldId::VehicleInfo, "H".to_string());
        assert_eq!(effects, vec![Effect::SetFieldError(FieldId::VehicleInfo, false)]);
        assert!(wizard.set_field(FieldId::VehicleInfo, "Ho".to_string()).is_empty());
    }

    #[test]
    fn ppf_summary_has_exact_name_and_price() {
        let mut wizard = WizardState::new();
        wizard.open(catalog(), Some("ppf"));
        wizard.next();
        fill(&mut wizard, "Megha", "9999999999", "Honda City 2020");
        let effects = wizard.next();

        let lines = summary_of(&effects).unwrap().lines();
        assert!(lines.contains(&"Service: Paint Protection Film".to_string()));
        assert!(lines.contains(&"Price: ₹25,000 - ₹75,000".to_string()));
    }

    #[test]
    fn blank_preferred_date_renders_asap() {
        let mut wizard = WizardState::new();
        wizard.open(catalog(), Some("ceramic-coating"));
        wizard.next();
        fill(&mut wizard, "Megha", "9999999999", "Honda City 2020");
        wizard.set_field(FieldId::PreferredDate, "".to_string());
        let effects = wizard.next();

        let lines = summary_of(&effects).unwrap().lines();
        assert!(lines.contains(&"Name: Megha".to_string()));
        assert!(lines.contains(&"Phone: 9999999999".to_string()));
        assert!(lines.contains(&"Vehicle: Honda City 2020".to_string()));
        assert!(lines.contains(&"Preferred Date: ASAP".to_string()));
    }

    #[test]
    fn prev_walks_back_but_not_past_step_one() {
        let mut wizard = at_review("ppf");
        assert_eq!(wizard.prev(), vec![Effect::SetStepActive(Step::EnterDetails)]);
        assert_eq!(wizard.prev(), vec![Effect::SetStepActive(Step::SelectService)]);
        assert!(wizard.prev().is_empty());
        assert_eq!(wizard.step(), Step::SelectService);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut wizard = at_review("ppf");
        wizard.reset();
        let once = wizard.clone();
        wizard.reset();

        assert_eq!(wizard, once);
        assert_eq!(wizard.step(), Step::SelectService);
        assert!(wizard.selected_service().is_none());
        assert!(wizard.form_data().is_empty());
    }

    #[test]
    fn reset_clears_error_markers() {
        let mut wizard = WizardState::new();
        wizard.select(catalog(), "ppf");
        wizard.next();
        wizard.next();

        let effects = wizard.reset();
        assert!(effects.contains(&Effect::SetNextEnabled(false)));
        assert!(effects.contains(&Effect::SetFieldError(FieldId::CustomerName, false)));
        assert!(!wizard.has_error(FieldId::CustomerName));
    }

    #[test]
    fn second_submit_while_in_flight_is_noop() {
        let mut wizard = at_review("ppf");
        let first = wizard.submit();
        assert_eq!(
            first,
            vec![
                Effect::SetSubmitLocked(true),
                Effect::ScheduleSubmission { ticket: 1, delay_ms: 2500 },
            ]
        );
        assert!(wizard.submission_in_flight());
        assert!(wizard.submit().is_empty());
        assert!(wizard.prev().is_empty());
    }

    #[test]
    fn successful_submission_notifies_closes_and_resets() {
        let mut wizard = at_review("ppf");
        wizard.submit();
        let effects = wizard.finish_submission(1, SubmissionOutcome::Submitted);

        assert_eq!(&effects[..3], &[
            Effect::SetSubmitLocked(false),
            Effect::Notify(Notice::success(BOOKING_SENT_NOTICE)),
            Effect::HideModal,
        ]);
        assert_eq!(wizard.step(), Step::SelectService);
        assert!(wizard.selected_service().is_none());
        assert!(!wizard.submission_in_flight());
    }

    #[test]
    fn failed_submission_stays_on_review_for_retry() {
        let mut wizard = at_review("ppf");
        wizard.submit();
        let effects = wizard.finish_submission(1, SubmissionOutcome::Failed("timeout".to_string()));

        assert_eq!(wizard.step(), Step::Review);
        assert_eq!(error_notices(&effects), 1);
        assert!(!wizard.submission_in_flight());
        assert_eq!(
            wizard.submit(),
            vec![
                Effect::SetSubmitLocked(true),
                Effect::ScheduleSubmission { ticket: 2, delay_ms: 2500 },
            ]
        );
    }

    #[test]
    fn closing_mid_submission_cancels_it() {
        let mut wizard = at_review("ppf");
        wizard.submit();
        let effects = wizard.close();
        assert_eq!(&effects[..2], &[Effect::CancelPending, Effect::HideModal]);
        assert!(!wizard.submission_in_flight());

        // a timer that slipped through must not report success
        assert!(wizard.finish_submission(1, SubmissionOutcome::Submitted).is_empty());
    }

    #[test]
    fn open_with_service_premarks_option_and_schedules_offer() {
        let mut wizard = WizardState::new();
        let effects = wizard.open(catalog(), Some("bike-restoration"));

        assert!(effects.contains(&Effect::ShowModal));
        assert!(effects.contains(&Effect::MarkOptionSelected(Some("bike-restoration".to_string()))));
        assert_eq!(
            effects.last(),
            Some(&Effect::NotifyAfter { notice: Notice::success(OFFER_NOTICE), delay_ms: 1000 })
        );
        assert_eq!(wizard.step(), Step::SelectService);
    }

    #[test]
    fn optional_fields_copied_on_success() {
        let mut wizard = WizardState::new();
        wizard.select(catalog(), "detailing");
        wizard.next();
        fill(&mut wizard, " Julian ", "9876543210", "Swift 2019");
        wizard.set_field(FieldId::Notes, "Pet hair".to_string());
        wizard.next();

        let form = wizard.form_data();
        assert_eq!(form.get(&FieldId::CustomerName).map(String::as_str), Some("Julian"));
        assert_eq!(form.get(&FieldId::Notes).map(String::as_str), Some("Pet hair"));
        assert!(form.get(&FieldId::PreferredDate).is_none());
    }
}
