use gloo_timers::callback::Timeout;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::notification::{Notice, Notifier};
use crate::config;
use crate::dom;

const MOUSE_OUT_MIN_SCROLL: f64 = 1000.0;
const FALLBACK_MIN_SCROLL: f64 = 500.0;

pub const DISCOUNT_NOTICE: &str =
    "💰 15% Discount Applied! Complete your booking to claim this offer.";

/// Decides when to interrupt a leaving visitor with the discount offer.
/// It fires at most once per page view.
#[derive(Debug, Default)]
pub struct ExitIntent {
    triggered: bool,
}

impl ExitIntent {
    pub fn triggered(&self) -> bool {
        self.triggered
    }

    /// Pointer left through the top edge of the window.
    pub fn on_mouse_out(&mut self, client_y: f64, scroll_y: f64, viewport_width: f64) -> bool {
        if viewport_width <= config::MOBILE_BREAKPOINT_PX {
            return false;
        }
        self.fire(client_y <= 0.0 && scroll_y > MOUSE_OUT_MIN_SCROLL)
    }

    /// Long visit without booking.
    pub fn on_fallback(&mut self, scroll_y: f64) -> bool {
        self.fire(scroll_y > FALLBACK_MIN_SCROLL)
    }

    fn fire(&mut self, condition: bool) -> bool {
        if self.triggered || !condition {
            return false;
        }
        self.triggered = true;
        true
    }
}

/// Emits `on_trigger` the first time the visitor looks like they are leaving.
#[hook]
pub fn use_exit_intent(on_trigger: Callback<()>) {
    let state = use_mut_ref(ExitIntent::default);

    {
        let state = state.clone();
        let on_trigger = on_trigger.clone();
        use_event_with_window("mouseout", move |e: MouseEvent| {
            let fired = state
                .borrow_mut()
                .on_mouse_out(e.client_y() as f64, dom::scroll_y(), dom::viewport_width());
            if fired {
                log::info!("Exit intent detected");
                on_trigger.emit(());
            }
        });
    }

    use_effect_with_deps(
        move |_| {
            let timeout = Timeout::new(config::EXIT_INTENT_FALLBACK_MS, move || {
                if state.borrow_mut().on_fallback(dom::scroll_y()) {
                    log::info!("Exit intent fallback timer fired");
                    on_trigger.emit(());
                }
            });
            move || drop(timeout)
        },
        (),
    );
}

#[derive(Properties, PartialEq)]
pub struct ExitIntentModalProps {
    pub open: bool,
    pub on_close: Callback<()>,
    /// Opens the booking wizard after the discount is claimed.
    pub on_claim: Callback<()>,
}

#[function_component(ExitIntentModal)]
pub fn exit_intent_modal(props: &ExitIntentModalProps) -> Html {
    let notifier = use_context::<Notifier>();

    if !props.open {
        return html! {};
    }

    let claim = {
        let on_close = props.on_close.clone();
        let on_claim = props.on_claim.clone();
        Callback::from(move |_: MouseEvent| {
            on_close.emit(());
            if let Some(notifier) = &notifier {
                notifier.notify(Notice::success(DISCOUNT_NOTICE));
            }
            on_claim.emit(());
        })
    };
    let dismiss = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id="exit-intent-modal" class="glass-modal show" onclick={dismiss.clone()}>
            <div class="exit-intent-content glass-card" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="modal-close" onclick={dismiss.clone()}>{"×"}</button>
                <h2>{"Wait! Don't Miss Out"}</h2>
                <p>{"Book today and get 15% OFF your first ceramic coating."}</p>
                <div class="exit-intent-actions">
                    <button class="btn-primary" onclick={claim}>{"Claim 15% Discount"}</button>
                    <button class="btn-secondary" onclick={dismiss}>{"No Thanks"}</button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_when_leaving_through_top_after_scrolling() {
        let mut intent = ExitIntent::default();
        assert!(!intent.on_mouse_out(0.0, 400.0, 1280.0));
        assert!(!intent.on_mouse_out(120.0, 1500.0, 1280.0));
        assert!(intent.on_mouse_out(-3.0, 1500.0, 1280.0));
        assert!(intent.triggered());
    }

    #[test]
    fn fires_only_once() {
        let mut intent = ExitIntent::default();
        assert!(intent.on_mouse_out(0.0, 1500.0, 1280.0));
        assert!(!intent.on_mouse_out(0.0, 1500.0, 1280.0));
        assert!(!intent.on_fallback(2000.0));
    }

    #[test]
    fn disabled_on_narrow_screens() {
        let mut intent = ExitIntent::default();
        assert!(!intent.on_mouse_out(0.0, 1500.0, 768.0));
        assert!(!intent.triggered());
    }

    #[test]
    fn fallback_needs_scroll() {
        let mut intent = ExitIntent::default();
        assert!(!intent.on_fallback(300.0));
        assert!(intent.on_fallback(600.0));
    }
}
