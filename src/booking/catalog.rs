use once_cell::sync::Lazy;
use serde::Deserialize;
use log::{error, warn};

use crate::booking::error::BookingError;

const PLACEHOLDER_NAME: &str = "Service";
const PLACEHOLDER_PRICE: &str = "Contact for pricing";

static BUILTIN: Lazy<ServiceCatalog> = Lazy::new(|| {
    ServiceCatalog::from_json(include_str!("../../assets/services.json")).unwrap_or_else(|e| {
        error!("{}", e);
        ServiceCatalog::default()
    })
});

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct ServiceOption {
    pub id: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "price")]
    pub price_range: String,
    #[serde(default)]
    pub blurb: String,
    // Lowercase fragments used to recognise the service from button or card text
    #[serde(default)]
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectedService {
    pub id: String,
    pub display_name: String,
    pub price_range: String,
}

impl From<&ServiceOption> for SelectedService {
    fn from(option: &ServiceOption) -> Self {
        Self {
            id: option.id.clone(),
            display_name: option.display_name.clone(),
            price_range: option.price_range.clone(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ServiceCatalog {
    options: Vec<ServiceOption>,
}

impl ServiceCatalog {
    /// The catalog shipped in `assets/services.json`.
    pub fn builtin() -> &'static ServiceCatalog {
        &BUILTIN
    }

    pub fn from_json(raw: &str) -> Result<Self, BookingError> {
        let options: Vec<ServiceOption> = serde_json::from_str(raw)?;
        Ok(Self { options })
    }

    pub fn options(&self) -> &[ServiceOption] {
        &self.options
    }

    pub fn get(&self, id: &str) -> Result<&ServiceOption, BookingError> {
        self.options
            .iter()
            .find(|option| option.id == id)
            .ok_or_else(|| BookingError::UnknownServiceId(id.to_string()))
    }

    /// Resolves an id for display. Unknown ids get a placeholder instead of an error.
    pub fn select_service(&self, id: &str) -> SelectedService {
        match self.get(id) {
            Ok(option) => option.into(),
            Err(e) => {
                warn!("{}, falling back to placeholder", e);
                SelectedService {
                    id: id.to_string(),
                    display_name: PLACEHOLDER_NAME.to_string(),
                    price_range: PLACEHOLDER_PRICE.to_string(),
                }
            }
        }
    }

    /// Guesses which service a button or card is about from its visible text.
    pub fn infer_from_text(&self, text: &str) -> Option<&str> {
        let text = text.to_lowercase();
        self.options
            .iter()
            .find(|option| option.keywords.iter().any(|k| text.contains(k.as_str())))
            .map(|option| option.id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_all_services() {
        let ids: Vec<&str> = ServiceCatalog::builtin()
            .options()
            .iter()
            .map(|o| o.id.as_str())
            .collect();
        assert_eq!(ids, vec!["ceramic-coating", "ppf", "detailing", "bike-restoration"]);
    }

    #[test]
    fn ppf_resolves_to_display_metadata() {
        let selected = ServiceCatalog::builtin().select_service("ppf");
        assert_eq!(selected.display_name, "Paint Protection Film");
        assert_eq!(selected.price_range, "₹25,000 - ₹75,000");
    }

    #[test]
    fn unknown_id_falls_back_to_placeholder() {
        let catalog = ServiceCatalog::builtin();
        assert!(matches!(
            catalog.get("nonexistent"),
            Err(BookingError::UnknownServiceId(id)) if id == "nonexistent"
        ));

        let selected = catalog.select_service("nonexistent");
        assert_eq!(selected.id, "nonexistent");
        assert_eq!(selected.display_name, "Service");
        assert_eq!(selected.price_range, "Contact for pricing");
    }

    #[test]
    fn infers_service_from_button_text() {
        let catalog = ServiceCatalog::builtin();
        assert_eq!(catalog.infer_from_text("Book Ceramic Coating"), Some("ceramic-coating"));
        assert_eq!(catalog.infer_from_text("Get PPF now"), Some("ppf"));
        assert_eq!(catalog.infer_from_text("Paint Protection Film"), Some("ppf"));
        assert_eq!(catalog.infer_from_text("Professional Detailing"), Some("detailing"));
        assert_eq!(catalog.infer_from_text("Bike Restoration"), Some("bike-restoration"));
        assert_eq!(catalog.infer_from_text("Book Now"), None);
    }

    #[test]
    fn adding_a_service_is_a_data_change() {
        let raw = r#"[{"id": "wash", "name": "Foam Wash", "price": "₹500"}]"#;
        let catalog = ServiceCatalog::from_json(raw).unwrap();
        assert_eq!(catalog.select_service("wash").display_name, "Foam Wash");
        assert!(catalog.options()[0].keywords.is_empty());
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(matches!(
            ServiceCatalog::from_json("{ not json"),
            Err(BookingError::Catalog(_))
        ));
    }
}
