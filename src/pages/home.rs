use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::booking::catalog::ServiceCatalog;
use crate::booking::modal::BookingLauncher;
use crate::components::contact::ContactSection;
use crate::components::counters::StatsBar;
use crate::components::faq::Faq;
use crate::components::gallery::{Gallery, GalleryItem, Lightbox};
use crate::components::social_proof::{AvailabilityIndicator, FloatingTestimonials};
use crate::components::sticky_book::{FloatingCallButton, StickyBookButton};
use crate::config;

/// Marketing highlights. Their "Book" buttons pick the service from the card text.
const HIGHLIGHTS: &[(&str, &str)] = &[
    ("9H Ceramic Coating", "Hydrophobic nano ceramic coating with up to 5 years of gloss."),
    ("Self-Healing PPF", "Paint protection film that shrugs off stone chips and swirls."),
    ("Showroom Detailing", "Interior and exterior detailing, inside and out."),
    ("Bike Restoration", "Bring a tired bike back to factory shine."),
];

const REVIEWS: &[(&str, &str)] = &[
    ("Megha", "Amazing ceramic coating service! My car looks brand new even after the monsoon."),
    ("Julian", "Professional work and great results. The PPF is invisible."),
    ("Vittal", "Sanjay is a true expert. Honest advice, no upselling."),
];

#[function_component(Hero)]
fn hero() -> Html {
    let launcher = use_context::<BookingLauncher>();
    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(launcher) = &launcher {
            launcher.open(None);
        }
    });

    html! {
        <section id="home" class="hero">
            <div class="hero-content">
                <h1>{config::BUSINESS_NAME}</h1>
                <p class="hero-tagline">{config::BUSINESS_TAGLINE}</p>
                <button class="btn-primary hero-cta" {onclick}>{"Book Now"}</button>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    let launcher = use_context::<BookingLauncher>();

    let cards = ServiceCatalog::builtin().options().iter().map(|option| {
        let onclick = {
            let launcher = launcher.clone();
            let id = option.id.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if let Some(launcher) = &launcher {
                    launcher.open(Some(&id));
                }
            })
        };
        html! {
            <div key={option.id.clone()} class="service-card glass-card">
                <h3>{&option.display_name}</h3>
                <p class="service-price">{&option.price_range}</p>
                <p>{&option.blurb}</p>
                <button class="btn-primary" {onclick}>{"Book Service"}</button>
            </div>
        }
    });

    html! {
        <section id="services" class="services-section">
            <h2>{"Our Services"}</h2>
            <div class="services-grid">{ for cards }</div>
        </section>
    }
}

#[function_component(Highlights)]
fn highlights() -> Html {
    let launcher = use_context::<BookingLauncher>();

    let cards = HIGHLIGHTS.iter().map(|(title, text)| {
        let onclick = {
            let launcher = launcher.clone();
            let card_text = format!("{} {}", title, text);
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                if let Some(launcher) = &launcher {
                    launcher.open_from_text(&card_text);
                }
            })
        };
        html! {
            <div key={*title} class="feature-card glass-card">
                <h3>{*title}</h3>
                <p>{*text}</p>
                <button class="btn-secondary" {onclick}>{"Book"}</button>
            </div>
        }
    });

    html! {
        <section id="features" class="features-section">
            <h2>{"Why Choose Us"}</h2>
            <div class="features-grid">{ for cards }</div>
        </section>
    }
}

#[function_component(Reviews)]
fn reviews() -> Html {
    html! {
        <section id="testimonials" class="testimonials-section">
            <h2>{"What Our Customers Say"}</h2>
            <div class="testimonials-grid">
                { for REVIEWS.iter().map(|(name, text)| html! {
                    <div key={*name} class="testimonial-card glass-card">
                        <div class="review-stars">{"★★★★★"}</div>
                        <p>{*text}</p>
                        <span class="reviewer">{format!("- {}", name)}</span>
                    </div>
                }) }
            </div>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let lightbox = use_state(|| None::<GalleryItem>);

    let open_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |item: GalleryItem| lightbox.set(Some(item)))
    };
    let close_lightbox = {
        let lightbox = lightbox.clone();
        Callback::from(move |_| lightbox.set(None))
    };

    {
        let lightbox = lightbox.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" && lightbox.is_some() {
                lightbox.set(None);
            }
        });
    }

    html! {
        <div class="home">
            <Hero />
            <StatsBar />
            <Services />
            <Highlights />
            <Gallery on_open={open_lightbox} />
            <Reviews />
            <Faq />
            <ContactSection />

            <Lightbox item={*lightbox} on_close={close_lightbox} />
            <FloatingTestimonials />
            <AvailabilityIndicator />
            <StickyBookButton />
            <FloatingCallButton />
            <style>
                {r#"
                .hero {
                    min-height: 90vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    text-align: center;
                    background: linear-gradient(rgba(0, 0, 0, 0.55), rgba(0, 0, 0, 0.85)), url('/assets/hero.jpg') center / cover;
                }
                .hero h1 {
                    font-size: 3.5rem;
                    letter-spacing: 0.2em;
                    color: #ffffff;
                }
                .hero-tagline {
                    color: #1fb8cd;
                    font-size: 1.3rem;
                    margin-bottom: 32px;
                }
                .services-section, .features-section, .testimonials-section, .contact-section {
                    max-width: 1200px;
                    margin: 0 auto;
                    padding: 80px 20px;
                }
                .services-grid, .features-grid, .testimonials-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(250px, 1fr));
                    gap: 20px;
                }
                .service-card, .feature-card, .testimonial-card {
                    padding: 24px;
                    border-radius: 16px;
                    background: rgba(0, 0, 0, 0.65);
                    border: 1px solid rgba(255, 255, 255, 0.15);
                    color: #e0f8ff;
                }
                .contact-grid {
                    display: grid;
                    grid-template-columns: 1fr 2fr;
                    gap: 24px;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 12px;
                    padding: 24px;
                }
                .form-success {
                    color: #2ecc71;
                    font-weight: 700;
                }
                .floating-testimonials, .availability-indicator {
                    position: fixed;
                    left: 20px;
                    opacity: 0;
                    transform: translateY(20px);
                    transition: all 0.4s ease;
                    pointer-events: none;
                    z-index: 900;
                }
                .floating-testimonials { bottom: 20px; }
                .availability-indicator { bottom: 120px; cursor: pointer; }
                .floating-testimonials.show, .availability-indicator.show {
                    opacity: 1;
                    transform: translateY(0);
                    pointer-events: auto;
                }
                .availability-status.online { color: #2ecc71; }
                .availability-status.offline { color: #e74c3c; }
                .sticky-book-btn {
                    position: fixed;
                    right: 20px;
                    bottom: 90px;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity 0.3s ease;
                    z-index: 900;
                }
                .sticky-book-btn.show {
                    opacity: 1;
                    pointer-events: auto;
                }
                .floating-call-btn {
                    position: fixed;
                    right: 20px;
                    bottom: 20px;
                    width: 56px;
                    height: 56px;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    background: #1fb8cd;
                    text-decoration: none;
                    z-index: 900;
                }
                @media (max-width: 768px) {
                    .contact-grid { grid-template-columns: 1fr; }
                    .hero h1 { font-size: 2.4rem; }
                }
                "#}
            </style>
        </div>
    }
}
