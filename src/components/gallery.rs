use yew::prelude::*;

use crate::dom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryCategory {
    Ceramic,
    Ppf,
    Detailing,
    Bike,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GalleryFilter {
    All,
    Only(GalleryCategory),
}

impl GalleryFilter {
    pub const BUTTONS: [(GalleryFilter, &'static str); 5] = [
        (GalleryFilter::All, "All"),
        (GalleryFilter::Only(GalleryCategory::Ceramic), "Ceramic"),
        (GalleryFilter::Only(GalleryCategory::Ppf), "PPF"),
        (GalleryFilter::Only(GalleryCategory::Detailing), "Detailing"),
        (GalleryFilter::Only(GalleryCategory::Bike), "Bike"),
    ];

    pub fn shows(self, category: GalleryCategory) -> bool {
        match self {
            GalleryFilter::All => true,
            GalleryFilter::Only(wanted) => wanted == category,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryItem {
    pub image: &'static str,
    pub title: Option<&'static str>,
    pub description: &'static str,
    pub category: GalleryCategory,
}

impl GalleryItem {
    pub fn display_title(&self) -> &'static str {
        self.title.unwrap_or("Gallery Image")
    }
}

pub const GALLERY: &[GalleryItem] = &[
    GalleryItem {
        image: "/assets/gallery/fortuner-ceramic.jpg",
        title: Some("Fortuner Ceramic Coating"),
        description: "9H nano ceramic with a mirror finish",
        category: GalleryCategory::Ceramic,
    },
    GalleryItem {
        image: "/assets/gallery/city-ppf.jpg",
        title: Some("Honda City Full PPF"),
        description: "Full-body self-healing film",
        category: GalleryCategory::Ppf,
    },
    GalleryItem {
        image: "/assets/gallery/creta-interior.jpg",
        title: Some("Creta Interior Detailing"),
        description: "Deep clean and leather conditioning",
        category: GalleryCategory::Detailing,
    },
    GalleryItem {
        image: "/assets/gallery/royal-enfield.jpg",
        title: Some("Royal Enfield Restoration"),
        description: "Tank repaint, chrome polish and coating",
        category: GalleryCategory::Bike,
    },
    GalleryItem {
        image: "/assets/gallery/bmw-ceramic.jpg",
        title: Some("BMW 3 Series Coating"),
        description: "Paint correction followed by two coating layers",
        category: GalleryCategory::Ceramic,
    },
    GalleryItem {
        image: "/assets/gallery/workshop.jpg",
        title: None,
        description: "",
        category: GalleryCategory::Detailing,
    },
];

#[derive(Properties, PartialEq)]
pub struct LightboxProps {
    pub item: Option<GalleryItem>,
    pub on_close: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    {
        use_effect_with_deps(
            |item: &Option<GalleryItem>| {
                dom::lock_body_scroll(item.is_some());
                || ()
            },
            props.item,
        );
    }

    let Some(item) = props.item else {
        return html! {};
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div id="lightbox" class="glass-modal lightbox" onclick={close.clone()}>
            <div class="lightbox-content" onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}>
                <button class="modal-close" onclick={close}>{"×"}</button>
                <img id="lightbox-image" src={item.image} alt={item.display_title()} />
                <h3 id="lightbox-title">{item.display_title()}</h3>
                <p id="lightbox-description">{item.description}</p>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct GalleryProps {
    pub on_open: Callback<GalleryItem>,
}

#[function_component(Gallery)]
pub fn gallery(props: &GalleryProps) -> Html {
    let filter = use_state(|| GalleryFilter::All);

    let buttons = GalleryFilter::BUTTONS.iter().map(|(value, label)| {
        let onclick = {
            let filter = filter.clone();
            let value = *value;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                filter.set(value);
            })
        };
        html! {
            <button class={classes!("filter-btn", (*filter == *value).then(|| "active"))} {onclick}>
                {*label}
            </button>
        }
    });

    let items = GALLERY.iter().enumerate().map(|(index, item)| {
        let visible = filter.shows(item.category);
        let onclick = {
            let on_open = props.on_open.clone();
            let item = *item;
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                log::debug!("Gallery item clicked: {}", item.display_title());
                on_open.emit(item);
            })
        };
        html! {
            <div key={index} class={classes!("gallery-item", (!visible).then(|| "filtered-out"))} {onclick}>
                <img src={item.image} alt={item.display_title()} loading="lazy" />
                <div class="gallery-overlay">
                    <h3>{item.display_title()}</h3>
                    <p>{item.description}</p>
                </div>
            </div>
        }
    });

    html! {
        <section id="gallery" class="gallery-section">
            <h2>{"Our Work"}</h2>
            <div class="gallery-filters">{ for buttons }</div>
            <div class="gallery-grid">{ for items }</div>
            <style>
                {r#"
                .gallery-section {
                    padding: 80px 20px;
                    max-width: 1200px;
                    margin: 0 auto;
                }
                .gallery-filters {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 10px;
                    justify-content: center;
                    margin-bottom: 24px;
                }
                .filter-btn {
                    padding: 8px 18px;
                    border-radius: 999px;
                    border: 1px solid rgba(255, 255, 255, 0.3);
                    background: rgba(0, 0, 0, 0.6);
                    color: #fff;
                    font-weight: 600;
                    cursor: pointer;
                }
                .filter-btn.active {
                    background: #1fb8cd;
                    color: #000;
                }
                .gallery-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
                    gap: 16px;
                }
                .gallery-item {
                    position: relative;
                    border-radius: 12px;
                    overflow: hidden;
                    cursor: pointer;
                    transition: opacity 0.3s ease, transform 0.3s ease;
                }
                .gallery-item.filtered-out {
                    display: none;
                }
                .gallery-item img {
                    width: 100%;
                    height: 200px;
                    object-fit: cover;
                }
                .gallery-overlay {
                    position: absolute;
                    inset: auto 0 0 0;
                    padding: 12px;
                    background: linear-gradient(transparent, rgba(0, 0, 0, 0.85));
                }
                .lightbox-content {
                    position: relative;
                    max-width: 90vw;
                    text-align: center;
                    color: #e0f8ff;
                }
                .lightbox-content img {
                    max-width: 100%;
                    max-height: 70vh;
                    border-radius: 12px;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_shows_everything() {
        assert!(GALLERY.iter().all(|item| GalleryFilter::All.shows(item.category)));
    }

    #[test]
    fn category_filter_hides_others() {
        let filter = GalleryFilter::Only(GalleryCategory::Ceramic);
        let shown: Vec<_> = GALLERY
            .iter()
            .filter(|item| filter.shows(item.category))
            .map(|item| item.display_title())
            .collect();
        assert_eq!(shown, vec!["Fortuner Ceramic Coating", "BMW 3 Series Coating"]);
    }

    #[test]
    fn untitled_item_uses_default_title() {
        let untitled = GALLERY.iter().find(|item| item.title.is_none()).unwrap();
        assert_eq!(untitled.display_title(), "Gallery Image");
    }
}
