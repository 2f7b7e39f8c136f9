use crate::booking::catalog::SelectedService;
use crate::booking::validation::{FieldId, FieldValues};

pub const DISCOUNT_BANNER: &str = "🎉 Special Offer Applied: 15% OFF";

const MISSING: &str = "N/A";
const NO_DATE: &str = "ASAP";

/// What step 3 shows before the customer confirms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingSummary {
    pub rows: Vec<(&'static str, String)>,
    pub notes: Option<String>,
    pub banner: &'static str,
}

impl BookingSummary {
    pub fn build(service: &SelectedService, form: &FieldValues) -> Self {
        let field = |id: FieldId, default: &str| {
            form.get(&id)
                .filter(|v| !v.trim().is_empty())
                .cloned()
                .unwrap_or_else(|| default.to_string())
        };

        let rows = vec![
            ("Service", service.display_name.clone()),
            ("Price", service.price_range.clone()),
            ("Name", field(FieldId::CustomerName, MISSING)),
            ("Phone", field(FieldId::CustomerPhone, MISSING)),
            ("Vehicle", field(FieldId::VehicleInfo, MISSING)),
            ("Preferred Date", field(FieldId::PreferredDate, NO_DATE)),
        ];

        Self {
            rows,
            notes: form.get(&FieldId::Notes).filter(|v| !v.trim().is_empty()).cloned(),
            banner: DISCOUNT_BANNER,
        }
    }

    /// `Label: value` lines, in display order.
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|(label, value)| format!("{}: {}", label, value))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::catalog::ServiceCatalog;

    #[test]
    fn missing_fields_get_defaults() {
        let service = ServiceCatalog::builtin().select_service("detailing");
        let summary = BookingSummary::build(&service, &FieldValues::new());

        assert_eq!(
            summary.lines(),
            vec![
                "Service: Car Detailing",
                "Price: ₹3,000 - ₹8,000",
                "Name: N/A",
                "Phone: N/A",
                "Vehicle: N/A",
                "Preferred Date: ASAP",
            ]
        );
        assert_eq!(summary.notes, None);
        assert_eq!(summary.banner, DISCOUNT_BANNER);
    }

    #[test]
    fn echoes_date_and_notes_when_given() {
        let service = ServiceCatalog::builtin().select_service("ppf");
        let mut form = FieldValues::new();
        form.insert(FieldId::PreferredDate, "2026-11-02".to_string());
        form.insert(FieldId::Notes, "Front bumper only".to_string());

        let summary = BookingSummary::build(&service, &form);
        assert!(summary.lines().contains(&"Preferred Date: 2026-11-02".to_string()));
        assert_eq!(summary.notes.as_deref(), Some("Front bumper only"));
    }
}
