use std::collections::BTreeMap;

use chrono::{Local, NaiveDate};
use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::catalog::ServiceCatalog;
use crate::booking::validation::{validate_input, FieldId, InputKind};
use crate::booking::view_model::WizardView;
use crate::booking::wizard::{Effect, Step, SubmissionOutcome, WizardState};
use crate::components::notification::Notice;
use crate::dom;

/// A request from the page to show the booking wizard. `seq` changes on every
/// click so asking for the same service twice still reopens it.
#[derive(Clone, Debug, PartialEq)]
pub struct BookingRequest {
    pub service: Option<String>,
    pub seq: u32,
}

/// Provided through context to every "Book" button on the page.
#[derive(Clone, PartialEq)]
pub struct BookingLauncher(pub Callback<Option<String>>);

impl BookingLauncher {
    pub fn open(&self, service: Option<&str>) {
        self.0.emit(service.map(str::to_string));
    }

    /// Opens the wizard for whatever service the trigger's text mentions.
    pub fn open_from_text(&self, text: &str) {
        self.open(ServiceCatalog::builtin().infer_from_text(text));
    }
}

/// Earliest date a customer can ask for: tomorrow.
pub fn min_preferred_date(today: NaiveDate) -> String {
    today
        .succ_opt()
        .unwrap_or(today)
        .format("%Y-%m-%d")
        .to_string()
}

#[derive(Properties, PartialEq)]
pub struct BookingModalProps {
    pub request: Option<BookingRequest>,
    pub on_close: Callback<()>,
    pub notify: Callback<Notice>,
}

pub enum BookingMsg {
    Open(Option<String>),
    Close,
    Select(String),
    SetField(FieldId, String),
    Blur(FieldId, String),
    Next,
    Prev,
    Submit,
    SubmissionSettled(u64, SubmissionOutcome),
}

pub struct BookingModal {
    wizard: WizardState,
    view: WizardView,
    blur_messages: BTreeMap<FieldId, &'static str>,
    submission_timer: Option<Timeout>,
    offer_timer: Option<Timeout>,
}

impl BookingModal {
    fn run(&mut self, ctx: &Context<Self>, effects: Vec<Effect>) {
        for effect in effects {
            self.view.apply(&effect);
            match effect {
                Effect::ShowModal => dom::lock_body_scroll(true),
                Effect::HideModal => {
                    dom::lock_body_scroll(false);
                    self.blur_messages.clear();
                    ctx.props().on_close.emit(());
                }
                Effect::Notify(notice) => ctx.props().notify.emit(notice),
                Effect::NotifyAfter { notice, delay_ms } => {
                    let notify = ctx.props().notify.clone();
                    self.offer_timer = Some(Timeout::new(delay_ms, move || notify.emit(notice)));
                }
                Effect::ScheduleSubmission { ticket, delay_ms } => {
                    // No backend yet: every submission succeeds after the delay.
                    let link = ctx.link().clone();
                    self.submission_timer = Some(Timeout::new(delay_ms, move || {
                        link.send_message(BookingMsg::SubmissionSettled(ticket, SubmissionOutcome::Submitted));
                    }));
                }
                Effect::CancelPending => {
                    self.submission_timer = None;
                    self.offer_timer = None;
                }
                _ => {}
            }
        }
    }

    fn view_service_step(&self, ctx: &Context<Self>) -> Html {
        let options = ServiceCatalog::builtin().options().iter().map(|option| {
            let selected = self.view.selected_option.as_deref() == Some(option.id.as_str());
            let id = option.id.clone();
            let onclick = ctx.link().callback(move |e: MouseEvent| {
                e.prevent_default();
                BookingMsg::Select(id.clone())
            });
            html! {
                <div key={option.id.clone()} class={classes!("service-option", selected.then(|| "selected"))} {onclick}>
                    <h4>{&option.display_name}</h4>
                    <p class="service-price">{&option.price_range}</p>
                    <p class="service-blurb">{&option.blurb}</p>
                </div>
            }
        });

        html! {
            <>
                <h3>{"Choose Your Service"}</h3>
                <div class="service-options">{ for options }</div>
                <div class="wizard-actions">
                    <button
                        class="btn btn--primary next-step"
                        disabled={!self.view.next_enabled}
                        onclick={ctx.link().callback(|_| BookingMsg::Next)}
                    >
                        {"Next"}
                    </button>
                </div>
            </>
        }
    }

    fn view_field(&self, ctx: &Context<Self>, field: FieldId, min_date: &str) -> Html {
        let value = self.wizard.draft(field).to_string();
        let has_error = self.view.field_errors.contains(&field) || self.blur_messages.contains_key(&field);
        let class = classes!("form-control", "glass-input", has_error.then(|| "error"));

        let input = match field.kind() {
            InputKind::TextArea => html! {
                <textarea
                    id={field.key()}
                    {class}
                    rows="3"
                    {value}
                    oninput={ctx.link().callback(move |e: InputEvent| {
                        let input: HtmlTextAreaElement = e.target_unchecked_into();
                        BookingMsg::SetField(field, input.value())
                    })}
                />
            },
            kind => {
                let input_type = match kind {
                    InputKind::Tel => "tel",
                    InputKind::Email => "email",
                    InputKind::Date => "date",
                    _ => "text",
                };
                let min = (kind == InputKind::Date).then(|| min_date.to_string());
                html! {
                    <input
                        id={field.key()}
                        type={input_type}
                        {class}
                        {min}
                        required={field.required()}
                        {value}
                        oninput={ctx.link().callback(move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            BookingMsg::SetField(field, input.value())
                        })}
                        onblur={ctx.link().callback(move |e: FocusEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            BookingMsg::Blur(field, input.value())
                        })}
                    />
                }
            }
        };

        html! {
            <div key={field.key()} class="form-group">
                <label for={field.key()}>
                    {field.label()}
                    if field.required() { <span class="required">{" *"}</span> }
                </label>
                {input}
                if let Some(message) = self.blur_messages.get(&field) {
                    <div class="error-message">{*message}</div>
                }
            </div>
        }
    }

    fn view_details_step(&self, ctx: &Context<Self>) -> Html {
        let min_date = min_preferred_date(Local::now().date_naive());
        html! {
            <>
                <h3>{"Your Details"}</h3>
                <form class="booking-form" onsubmit={ctx.link().callback(|e: SubmitEvent| {
                    e.prevent_default();
                    BookingMsg::Next
                })}>
                    { for FieldId::ALL.into_iter().map(|field| self.view_field(ctx, field, &min_date)) }
                </form>
                <div class="wizard-actions">
                    <button class="btn prev-step" onclick={ctx.link().callback(|_| BookingMsg::Prev)}>{"Back"}</button>
                    <button class="btn btn--primary next-step" onclick={ctx.link().callback(|_| BookingMsg::Next)}>{"Review"}</button>
                </div>
            </>
        }
    }

    fn view_review_step(&self, ctx: &Context<Self>) -> Html {
        let summary = match &self.view.summary {
            Some(summary) => html! {
                <div id="summary-details">
                    { for summary.rows.iter().map(|(label, value)| html! {
                        <div class="summary-item">
                            <strong>{format!("{}:", label)}</strong>{" "}{value}
                        </div>
                    }) }
                    if let Some(notes) = &summary.notes {
                        <div class="summary-item"><strong>{"Notes:"}</strong>{" "}{notes}</div>
                    }
                    <div class="discount-notice glass-card">
                        <strong>{summary.banner}</strong>
                    </div>
                </div>
            },
            None => html! {},
        };

        html! {
            <>
                <h3>{"Confirm Your Booking"}</h3>
                {summary}
                <div class="wizard-actions">
                    <button
                        class="btn prev-step"
                        disabled={self.view.submit_locked}
                        onclick={ctx.link().callback(|_| BookingMsg::Prev)}
                    >
                        {"Back"}
                    </button>
                    <button
                        class={classes!("btn", "btn--primary", "submit-booking", self.view.submit_locked.then(|| "btn--loading"))}
                        disabled={self.view.submit_locked}
                        onclick={ctx.link().callback(|_| BookingMsg::Submit)}
                    >
                        {self.view.submit_label()}
                    </button>
                </div>
            </>
        }
    }
}

impl Component for BookingModal {
    type Message = BookingMsg;
    type Properties = BookingModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        if let Some(request) = &ctx.props().request {
            ctx.link().send_message(BookingMsg::Open(request.service.clone()));
        }
        Self {
            wizard: WizardState::new(),
            view: WizardView::default(),
            blur_messages: BTreeMap::new(),
            submission_timer: None,
            offer_timer: None,
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().request != old_props.request {
            match &ctx.props().request {
                Some(request) => ctx.link().send_message(BookingMsg::Open(request.service.clone())),
                None if self.view.modal_open => ctx.link().send_message(BookingMsg::Close),
                None => {}
            }
        }
        false
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let catalog = ServiceCatalog::builtin();
        let effects = match msg {
            BookingMsg::Open(service) => {
                self.blur_messages.clear();
                self.wizard.open(catalog, service.as_deref())
            }
            BookingMsg::Close => self.wizard.close(),
            BookingMsg::Select(id) => self.wizard.select(catalog, &id),
            BookingMsg::SetField(field, value) => {
                self.blur_messages.remove(&field);
                self.wizard.set_field(field, value)
            }
            BookingMsg::Blur(field, value) => {
                match validate_input(field.kind(), field.required(), &value) {
                    Some(message) => self.blur_messages.insert(field, message),
                    None => self.blur_messages.remove(&field),
                };
                Vec::new()
            }
            BookingMsg::Next => self.wizard.next(),
            BookingMsg::Prev => self.wizard.prev(),
            BookingMsg::Submit => self.wizard.submit(),
            BookingMsg::SubmissionSettled(ticket, outcome) => {
                self.submission_timer = None;
                self.wizard.finish_submission(ticket, outcome)
            }
        };
        self.run(ctx, effects);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !self.view.modal_open {
            return html! {};
        }

        let progress = Step::ALL.iter().map(|step| {
            html! {
                <div class={classes!("progress-step", self.view.is_step_reached(*step).then(|| "active"))}>
                    <span class="progress-number">{step.number()}</span>
                    <span class="progress-title">{step.title()}</span>
                </div>
            }
        });

        let body = match self.view.active_step {
            Step::SelectService => self.view_service_step(ctx),
            Step::EnterDetails => self.view_details_step(ctx),
            Step::Review => self.view_review_step(ctx),
        };

        html! {
            <div id="booking-modal" class="glass-modal booking-modal">
                <div class="modal-content glass-card" id="booking-wizard">
                    <button class="modal-close" onclick={ctx.link().callback(|_| BookingMsg::Close)}>{"×"}</button>
                    <h2>{"Book Your Service"}</h2>
                    <div class="progress-steps">{ for progress }</div>
                    <div class={classes!("wizard-step", "active")} id={format!("step-{}", self.view.active_step.number())}>
                        {body}
                    </div>
                </div>
                <style>
                    {r#"
                        .glass-modal {
                            position: fixed;
                            inset: 0;
                            display: flex;
                            align-items: center;
                            justify-content: center;
                            background: rgba(0, 0, 0, 0.85);
                            backdrop-filter: blur(10px);
                            z-index: 9000;
                        }
                        .booking-modal .modal-content {
                            position: relative;
                            width: min(640px, 92vw);
                            max-height: 90vh;
                            overflow-y: auto;
                            padding: 32px;
                            border-radius: 16px;
                            background: rgba(0, 0, 0, 0.85);
                            border: 1px solid rgba(31, 184, 205, 0.4);
                            color: #e0f8ff;
                        }
                        .modal-close {
                            position: absolute;
                            top: 12px;
                            right: 16px;
                            background: none;
                            border: none;
                            color: #fff;
                            font-size: 28px;
                            cursor: pointer;
                        }
                        .progress-steps {
                            display: flex;
                            justify-content: space-between;
                            margin: 16px 0 24px;
                        }
                        .progress-step {
                            display: flex;
                            flex-direction: column;
                            align-items: center;
                            gap: 4px;
                            opacity: 0.5;
                        }
                        .progress-step.active {
                            opacity: 1;
                            color: #1fb8cd;
                        }
                        .service-options {
                            display: grid;
                            grid-template-columns: repeat(auto-fit, minmax(220px, 1fr));
                            gap: 12px;
                        }
                        .service-option {
                            padding: 16px;
                            border-radius: 12px;
                            border: 1px solid rgba(255, 255, 255, 0.2);
                            cursor: pointer;
                            transition: transform 0.3s ease, border-color 0.3s ease;
                        }
                        .service-option.selected {
                            border-color: #1fb8cd;
                            transform: scale(1.02);
                            box-shadow: 0 0 20px rgba(31, 184, 205, 0.4);
                        }
                        .service-price {
                            color: #1fb8cd;
                            font-weight: 700;
                        }
                        .form-group {
                            display: flex;
                            flex-direction: column;
                            gap: 6px;
                            margin-bottom: 14px;
                        }
                        .glass-input {
                            padding: 10px 12px;
                            border-radius: 8px;
                            border: 1px solid rgba(255, 255, 255, 0.3);
                            background: rgba(255, 255, 255, 0.9);
                            color: #0f172a;
                            font-weight: 600;
                        }
                        .form-control.error {
                            border-color: #ef4444;
                            box-shadow: 0 0 10px rgba(239, 68, 68, 0.5);
                            background: rgba(239, 68, 68, 0.1);
                        }
                        .error-message {
                            color: #fca5a5;
                            font-size: 12px;
                            font-weight: 600;
                        }
                        .required {
                            color: #fca5a5;
                        }
                        .wizard-actions {
                            display: flex;
                            justify-content: flex-end;
                            gap: 12px;
                            margin-top: 20px;
                        }
                        .btn:disabled {
                            opacity: 0.5;
                            cursor: not-allowed;
                        }
                        .summary-item {
                            padding: 8px 0;
                            border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        }
                        .discount-notice {
                            margin-top: 16px;
                            padding: 12px;
                            border-radius: 8px;
                            background: linear-gradient(45deg, rgba(31, 184, 205, 0.1), rgba(50, 160, 203, 0.1));
                        }
                    "#}
                </style>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preferred_date_starts_tomorrow() {
        let today = NaiveDate::from_ymd_opt(2026, 12, 31).unwrap();
        assert_eq!(min_preferred_date(today), "2027-01-01");
    }
}
