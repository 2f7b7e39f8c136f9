use yew::prelude::*;
use yew_hooks::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::{Event, KeyboardEvent, MouseEvent};

mod config;
mod dom;
mod booking {
    pub mod catalog;
    pub mod error;
    pub mod validation;
    pub mod summary;
    pub mod wizard;
    pub mod view_model;
    pub mod modal;
}
mod components {
    pub mod notification;
    pub mod faq;
    pub mod gallery;
    pub mod counters;
    pub mod social_proof;
    pub mod exit_intent;
    pub mod sticky_book;
    pub mod contact;
}
mod pages {
    pub mod home;
}

use booking::modal::{BookingLauncher, BookingModal, BookingRequest};
use components::exit_intent::{use_exit_intent, ExitIntentModal};
use components::notification::{NotificationToast, Notifier, NotifierAction, NotifierState};
use pages::home::Home;

/// Height of the fixed navbar, subtracted when jumping to a section.
const NAV_HEIGHT: f64 = 80.0;
const NAV_SCROLLED_AT: f64 = 100.0;
const NAV_HIDE_AFTER: f64 = 200.0;

const NAV_LINKS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("services", "Services"),
    ("gallery", "Gallery"),
    ("faq", "FAQ"),
    ("contact", "Contact"),
];

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home}>{"Back to the home page"}</Link<Route>>
                </div>
            }
        },
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NavScroll {
    pub last_y: f64,
    pub scrolled: bool,
    pub hidden: bool,
}

impl NavScroll {
    /// Navbar appearance after the page scrolled to `y`.
    pub fn update(self, y: f64, viewport_width: f64) -> Self {
        let hidden = if viewport_width > config::MOBILE_BREAKPOINT_PX {
            y > self.last_y && y > NAV_HIDE_AFTER
        } else {
            false
        };
        Self {
            last_y: y,
            scrolled: y > NAV_SCROLLED_AT,
            hidden,
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    // (scrolled, hidden); the raw position lives in `last_scroll`
    let nav_look = use_state_eq(|| (false, false));
    let last_scroll = use_mut_ref(NavScroll::default);

    {
        let nav_look = nav_look.clone();
        use_event_with_window("scroll", move |_: Event| {
            let next = last_scroll.borrow().update(dom::scroll_y(), dom::viewport_width());
            *last_scroll.borrow_mut() = next;
            nav_look.set((next.scrolled, next.hidden));
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let links = NAV_LINKS.iter().map(|(section, label)| {
        let onclick = {
            let menu_open = menu_open.clone();
            let section = *section;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                menu_open.set(false);
                dom::scroll_to_section(section, NAV_HEIGHT);
            })
        };
        html! {
            <a key={*section} href={format!("#{}", section)} class="nav-link" {onclick}>{*label}</a>
        }
    });

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!(
            "top-nav",
            nav_look.0.then(|| "scrolled"),
            nav_look.1.then(|| "nav-hidden"),
        )}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {config::BUSINESS_NAME}
                </Link<Route>>

                <button class={classes!("burger-menu", (*menu_open).then(|| "active"))} onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    { for links }
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    let notices = use_reducer(NotifierState::default);
    let request = use_state(|| None::<BookingRequest>);
    let request_seq = use_mut_ref(|| 0u32);
    let exit_open = use_state(|| false);

    let notifier = {
        let dispatcher = notices.dispatcher();
        use_memo(
            move |_| Notifier(Callback::from(move |notice| dispatcher.dispatch(NotifierAction::Show(notice)))),
            (),
        )
    };

    let launcher = {
        let request = request.clone();
        use_memo(
            move |_| {
                BookingLauncher(Callback::from(move |service: Option<String>| {
                    let mut seq = request_seq.borrow_mut();
                    *seq = seq.wrapping_add(1);
                    info!("Opening booking wizard for {:?}", service);
                    request.set(Some(BookingRequest { service, seq: *seq }));
                }))
            },
            (),
        )
    };

    let close_booking = {
        let request = request.clone();
        Callback::from(move |_| request.set(None))
    };
    let dismiss_notice = {
        let dispatcher = notices.dispatcher();
        Callback::from(move |id| dispatcher.dispatch(NotifierAction::Dismiss(id)))
    };

    use_exit_intent({
        let exit_open = exit_open.clone();
        Callback::from(move |_| exit_open.set(true))
    });
    let close_exit = {
        let exit_open = exit_open.clone();
        Callback::from(move |_| exit_open.set(false))
    };
    let claim_exit = {
        let launcher = launcher.clone();
        Callback::from(move |_| launcher.open(None))
    };

    {
        let request = request.clone();
        let exit_open = exit_open.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() != "Escape" {
                return;
            }
            if request.is_some() {
                request.set(None);
            }
            if *exit_open {
                exit_open.set(false);
            }
        });
    }

    html! {
        <ContextProvider<Notifier> context={(*notifier).clone()}>
            <ContextProvider<BookingLauncher> context={(*launcher).clone()}>
                <BrowserRouter>
                    <Nav />
                    <Switch<Route> render={switch} />
                </BrowserRouter>
                <BookingModal
                    request={(*request).clone()}
                    on_close={close_booking}
                    notify={notifier.0.clone()}
                />
                <ExitIntentModal open={*exit_open} on_close={close_exit} on_claim={claim_exit} />
                <NotificationToast current={notices.current.clone()} on_dismiss={dismiss_notice} />
            </ContextProvider<BookingLauncher>>
        </ContextProvider<Notifier>>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if config::is_dev_mode() { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_marks_scrolled_past_threshold() {
        let nav = NavScroll::default().update(50.0, 1280.0);
        assert!(!nav.scrolled);
        assert!(nav.update(150.0, 1280.0).scrolled);
    }

    #[test]
    fn navbar_hides_on_desktop_scroll_down() {
        let nav = NavScroll::default().update(150.0, 1280.0);
        assert!(!nav.hidden);
        let down = nav.update(400.0, 1280.0);
        assert!(down.hidden);
        let up = down.update(300.0, 1280.0);
        assert!(!up.hidden);
    }

    #[test]
    fn navbar_never_hides_on_mobile() {
        let nav = NavScroll::default().update(150.0, 600.0).update(900.0, 600.0);
        assert!(nav.scrolled);
        assert!(!nav.hidden);
    }
}
