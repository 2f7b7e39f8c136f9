use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, Local, Timelike, Weekday};
use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::booking::modal::BookingLauncher;
use crate::config;
use crate::dom;

const TESTIMONIAL_MIN_SCROLL: f64 = 500.0;
const AVAILABILITY_MIN_SCROLL: f64 = 200.0;

pub struct Testimonial {
    pub stars: &'static str,
    pub text: &'static str,
    pub reviewer: &'static str,
}

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial { stars: "★★★★★", text: "Amazing ceramic coating service!", reviewer: "Megha" },
    Testimonial { stars: "★★★★★", text: "Professional work, great results!", reviewer: "Julian" },
    Testimonial { stars: "★★★★★", text: "Sanjay is a true expert!", reviewer: "Vittal" },
    Testimonial { stars: "★★★★★", text: "Best coating service in Bangalore!", reviewer: "Sabal" },
];

/// Round-robin over the testimonials, skipping turns while the visitor is
/// still near the top of the page.
#[derive(Debug, Default)]
pub struct TestimonialRotation {
    next: usize,
}

impl TestimonialRotation {
    pub fn show(&mut self, scroll_y: f64) -> Option<usize> {
        if scroll_y <= TESTIMONIAL_MIN_SCROLL || TESTIMONIALS.is_empty() {
            return None;
        }
        let current = self.next;
        self.next = (self.next + 1) % TESTIMONIALS.len();
        Some(current)
    }
}

/// Holds the timer that hides a widget again. Replacing or cancelling drops
/// the previous handle, which for gloo timers cancels it.
pub struct HideSlot<T>(Rc<RefCell<Option<T>>>);

impl<T> Clone for HideSlot<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T> Default for HideSlot<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T> HideSlot<T> {
    pub fn replace(&self, timer: T) {
        *self.0.borrow_mut() = Some(timer);
    }

    pub fn cancel(&self) {
        self.0.borrow_mut().take();
    }

    pub fn is_pending(&self) -> bool {
        self.0.borrow().is_some()
    }
}

pub fn availability_due(scroll_y: f64) -> bool {
    scroll_y > AVAILABILITY_MIN_SCROLL
}

/// Open Monday to Saturday during weekday hours, shorter hours on Sunday.
pub fn is_open_at(weekday: Weekday, hour: u32) -> bool {
    let (open, close) = match weekday {
        Weekday::Sun => config::SUNDAY_HOURS,
        _ => config::WEEKDAY_HOURS,
    };
    hour >= open && hour < close
}

#[function_component(FloatingTestimonials)]
pub fn floating_testimonials() -> Html {
    let visible = use_state(|| None::<usize>);
    let hide = (*use_memo(|_| HideSlot::<Timeout>::default(), ())).clone();

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |_| {
                let mut rotation = TestimonialRotation::default();
                let slot = hide.clone();
                let mut show = move || {
                    if let Some(index) = rotation.show(dom::scroll_y()) {
                        visible.set(Some(index));
                        let visible = visible.clone();
                        slot.replace(Timeout::new(config::TESTIMONIAL_VISIBLE_MS, move || visible.set(None)));
                    }
                };
                let interval = Rc::new(RefCell::new(None::<Interval>));
                let interval_clone = interval.clone();
                let first = Timeout::new(config::TESTIMONIAL_FIRST_MS, move || {
                    show();
                    *interval_clone.borrow_mut() = Some(Interval::new(config::TESTIMONIAL_INTERVAL_MS, show));
                });

                move || {
                    drop(first);
                    interval.borrow_mut().take();
                    hide.cancel();
                }
            },
            (),
        );
    }

    let testimonial = visible.and_then(|index| TESTIMONIALS.get(index));

    html! {
        <div id="floating-testimonials" class={classes!("floating-testimonials", testimonial.is_some().then(|| "show"))}>
            if let Some(testimonial) = testimonial {
                <div class="floating-review glass-card">
                    <div class="review-stars">{testimonial.stars}</div>
                    <p>{format!("\"{}\"", testimonial.text)}</p>
                    <span class="reviewer">{format!("- {}", testimonial.reviewer)}</span>
                </div>
            }
        </div>
    }
}

#[function_component(AvailabilityIndicator)]
pub fn availability_indicator() -> Html {
    let launcher = use_context::<BookingLauncher>();
    let shown = use_state(|| false);
    let hide = (*use_memo(|_| HideSlot::<Timeout>::default(), ())).clone();

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |_| {
                let slot = hide.clone();
                let show = move || {
                    if availability_due(dom::scroll_y()) {
                        shown.set(true);
                        let shown = shown.clone();
                        slot.replace(Timeout::new(config::AVAILABILITY_VISIBLE_MS, move || shown.set(false)));
                    }
                };
                let interval = Rc::new(RefCell::new(None::<Interval>));
                let interval_clone = interval.clone();
                let first = Timeout::new(config::AVAILABILITY_FIRST_MS, move || {
                    show();
                    *interval_clone.borrow_mut() = Some(Interval::new(config::AVAILABILITY_INTERVAL_MS, show));
                });

                move || {
                    drop(first);
                    interval.borrow_mut().take();
                    hide.cancel();
                }
            },
            (),
        );
    }

    let now = Local::now();
    let online = is_open_at(now.weekday(), now.hour());

    let onclick = {
        let shown = shown.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(launcher) = &launcher {
                launcher.open(None);
            }
            shown.set(false);
        })
    };

    html! {
        <div id="availability-indicator" class={classes!("availability-indicator", (*shown).then(|| "show"))} {onclick}>
            <span class={classes!("availability-status", if online { "online" } else { "offline" })}>
                {if online { "● ONLINE" } else { "● OFFLINE" }}
            </span>
            {" Available Now"}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn testimonials_wait_for_scroll() {
        let mut rotation = TestimonialRotation::default();
        assert_eq!(rotation.show(100.0), None);
        assert_eq!(rotation.show(500.0), None);
        assert_eq!(rotation.show(501.0), Some(0));
    }

    #[test]
    fn testimonials_rotate_round_robin() {
        let mut rotation = TestimonialRotation::default();
        let shown: Vec<_> = (0..6).filter_map(|_| rotation.show(800.0)).collect();
        assert_eq!(shown, vec![0, 1, 2, 3, 0, 1]);
    }

    struct Flag(Rc<RefCell<bool>>);

    impl Drop for Flag {
        fn drop(&mut self) {
            *self.0.borrow_mut() = true;
        }
    }

    #[test]
    fn cancelling_hide_slot_drops_the_timer() {
        let dropped = Rc::new(RefCell::new(false));
        let slot = HideSlot::default();
        slot.clone().replace(Flag(dropped.clone()));
        assert!(slot.is_pending());
        assert!(!*dropped.borrow());

        slot.cancel();
        assert!(!slot.is_pending());
        assert!(*dropped.borrow());
    }

    #[test]
    fn replacing_hide_slot_drops_the_previous_timer() {
        let first = Rc::new(RefCell::new(false));
        let second = Rc::new(RefCell::new(false));
        let slot = HideSlot::default();
        slot.replace(Flag(first.clone()));
        slot.replace(Flag(second.clone()));
        assert!(*first.borrow());
        assert!(!*second.borrow());
    }

    #[test]
    fn availability_needs_some_scroll() {
        assert!(!availability_due(200.0));
        assert!(availability_due(250.0));
    }

    #[test]
    fn opening_hours() {
        assert!(is_open_at(Weekday::Mon, 9));
        assert!(is_open_at(Weekday::Sat, 18));
        assert!(!is_open_at(Weekday::Sat, 19));
        assert!(!is_open_at(Weekday::Wed, 8));
        assert!(is_open_at(Weekday::Sun, 12));
        assert!(!is_open_at(Weekday::Sun, 13));
    }
}
