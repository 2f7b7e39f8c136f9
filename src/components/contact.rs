use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::booking::validation::is_valid_email;
use crate::components::notification::{Notice, Notifier};
use crate::config;

pub const CONTACT_SUCCESS: &str = "Message sent successfully! We'll get back to you soon.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactForm {
    /// Fields that would block sending right now.
    pub fn invalid_fields(&self) -> Vec<ContactField> {
        let mut invalid = Vec::new();
        if self.name.trim().is_empty() {
            invalid.push(ContactField::Name);
        }
        if self.email.trim().is_empty() || !is_valid_email(self.email.trim()) {
            invalid.push(ContactField::Email);
        }
        if self.message.trim().is_empty() {
            invalid.push(ContactField::Message);
        }
        invalid
    }

    /// First problem with the form, if any.
    pub fn validate(&self) -> Result<(), &'static str> {
        if [&self.name, &self.email, &self.message]
            .iter()
            .any(|value| value.trim().is_empty())
        {
            return Err("Please fill in all required fields.");
        }
        if !is_valid_email(self.email.trim()) {
            return Err("Please enter a valid email address.");
        }
        Ok(())
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let notifier = use_context::<Notifier>();
    let form = use_state(ContactForm::default);
    let sent = use_state(|| false);
    let marked = use_state(Vec::<ContactField>::new);
    let sent_timer = use_mut_ref(|| None::<Timeout>);

    let on_name = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { name: input.value(), ..(*form).clone() });
        })
    };
    let on_email = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            form.set(ContactForm { email: input.value(), ..(*form).clone() });
        })
    };
    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            form.set(ContactForm { message: input.value(), ..(*form).clone() });
        })
    };

    let onsubmit = {
        let form = form.clone();
        let sent = sent.clone();
        let marked = marked.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if let Err(message) = form.validate() {
                log::debug!("Contact form rejected: {}", message);
                marked.set(form.invalid_fields());
                if let Some(notifier) = &notifier {
                    notifier.notify(Notice::error(message));
                }
                return;
            }
            log::info!("Contact form submitted");
            marked.set(Vec::new());
            form.set(ContactForm::default());
            sent.set(true);
            let sent = sent.clone();
            *sent_timer.borrow_mut() = Some(Timeout::new(config::CONTACT_SUCCESS_MS, move || sent.set(false)));
        })
    };

    let field_class = |field: ContactField| classes!("form-control", marked.contains(&field).then(|| "error"));

    html! {
        <section id="contact" class="contact-section">
            <h2>{"Get In Touch"}</h2>
            <div class="contact-grid">
                <div class="contact-info glass-card">
                    <h3>{config::BUSINESS_NAME}</h3>
                    <p>{config::BUSINESS_TAGLINE}</p>
                    <p><a href={format!("tel:{}", config::CONTACT_PHONE)}>{config::CONTACT_PHONE}</a></p>
                </div>
                <form id="contact-form" class="contact-form glass-card" {onsubmit}>
                    <input class={field_class(ContactField::Name)} type="text" name="name" placeholder="Your Name" value={form.name.clone()} oninput={on_name} />
                    <input class={field_class(ContactField::Email)} type="email" name="email" placeholder="Your Email" value={form.email.clone()} oninput={on_email} />
                    <textarea class={field_class(ContactField::Message)} name="message" rows="5" placeholder="Your Message" value={form.message.clone()} oninput={on_message} />
                    <button type="submit" class="btn-primary">{"Send Message"}</button>
                    if *sent {
                        <div class="form-success">{CONTACT_SUCCESS}</div>
                    }
                </form>
            </div>
        </section>
    }
}
