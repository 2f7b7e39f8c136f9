use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::booking::modal::BookingLauncher;
use crate::config;
use crate::dom;

const CONTACT_MARGIN: f64 = 200.0;

/// Visible between the bottom of the hero and shortly before the contact section.
pub fn sticky_visible(scroll_y: f64, hero_bottom: f64, contact_top: f64) -> bool {
    scroll_y > hero_bottom && scroll_y < contact_top - CONTACT_MARGIN
}

#[function_component(StickyBookButton)]
pub fn sticky_book_button() -> Html {
    let launcher = use_context::<BookingLauncher>();
    let (_, scroll_y) = use_window_scroll();

    let visible = match (dom::section_bounds("home"), dom::section_bounds("contact")) {
        (Some((_, hero_bottom)), Some((contact_top, _))) => {
            sticky_visible(scroll_y, hero_bottom, contact_top)
        }
        _ => false,
    };

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(launcher) = &launcher {
            launcher.open(None);
        }
    });

    html! {
        <button id="sticky-book-btn" class={classes!("sticky-book-btn", visible.then(|| "show"))} {onclick}>
            {"📅 Book Now"}
        </button>
    }
}

#[function_component(FloatingCallButton)]
pub fn floating_call_button() -> Html {
    html! {
        <a class="floating-call-btn" href={format!("tel:{}", config::CONTACT_PHONE)} aria-label="Call us">
            {"📞"}
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_over_hero() {
        assert!(!sticky_visible(300.0, 800.0, 4000.0));
        assert!(!sticky_visible(800.0, 800.0, 4000.0));
    }

    #[test]
    fn visible_in_the_middle() {
        assert!(sticky_visible(1500.0, 800.0, 4000.0));
        assert!(sticky_visible(3799.0, 800.0, 4000.0));
    }

    #[test]
    fn hidden_near_contact() {
        assert!(!sticky_visible(3800.0, 800.0, 4000.0));
        assert!(!sticky_visible(4500.0, 800.0, 4000.0));
    }
}
