use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?[1-9]\d{0,15}$").unwrap());

/// Fields collected in step 2 of the booking wizard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    CustomerName,
    CustomerPhone,
    VehicleInfo,
    PreferredDate,
    Notes,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Tel,
    Email,
    Date,
    TextArea,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::CustomerName,
        FieldId::CustomerPhone,
        FieldId::VehicleInfo,
        FieldId::PreferredDate,
        FieldId::Notes,
    ];

    /// DOM id and form data key.
    pub fn key(self) -> &'static str {
        match self {
            FieldId::CustomerName => "customer-name",
            FieldId::CustomerPhone => "customer-phone",
            FieldId::VehicleInfo => "vehicle-info",
            FieldId::PreferredDate => "preferred-date",
            FieldId::Notes => "notes",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FieldId::CustomerName => "Your Name",
            FieldId::CustomerPhone => "Phone Number",
            FieldId::VehicleInfo => "Vehicle (Make, Model, Year)",
            FieldId::PreferredDate => "Preferred Date",
            FieldId::Notes => "Additional Notes",
        }
    }

    pub fn required(self) -> bool {
        matches!(self, FieldId::CustomerName | FieldId::CustomerPhone | FieldId::VehicleInfo)
    }

    pub fn kind(self) -> InputKind {
        match self {
            FieldId::CustomerPhone => InputKind::Tel,
            FieldId::PreferredDate => InputKind::Date,
            FieldId::Notes => InputKind::TextArea,
            _ => InputKind::Text,
        }
    }
}

/// Field values keyed by field, as typed or as accepted.
pub type FieldValues = BTreeMap<FieldId, String>;

/// Required fields whose trimmed value is empty, in form order.
pub fn missing_required(values: &FieldValues) -> Vec<FieldId> {
    FieldId::ALL
        .into_iter()
        .filter(|field| field.required())
        .filter(|field| values.get(field).map_or(true, |v| v.trim().is_empty()))
        .collect()
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn is_valid_phone(phone: &str) -> bool {
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();
    PHONE_RE.is_match(&digits)
}

/// On-blur feedback for a single input. Returns the message to show under the
/// input, or `None` when it is fine.
pub fn validate_input(kind: InputKind, required: bool, value: &str) -> Option<&'static str> {
    let value = value.trim();
    if required && value.is_empty() {
        return Some("This field is required");
    }
    if value.is_empty() {
        return None;
    }
    match kind {
        InputKind::Email if !is_valid_email(value) => Some("Please enter a valid email address"),
        InputKind::Tel if !is_valid_phone(value) => Some("Please enter a valid phone number"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(FieldId, &str)]) -> FieldValues {
        pairs.iter().map(|(f, v)| (*f, v.to_string())).collect()
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let form = values(&[
            (FieldId::CustomerName, "   "),
            (FieldId::CustomerPhone, "9999999999"),
        ]);
        assert_eq!(
            missing_required(&form),
            vec![FieldId::CustomerName, FieldId::VehicleInfo]
        );
    }

    #[test]
    fn optional_fields_are_never_missing() {
        let form = values(&[
            (FieldId::CustomerName, "Megha"),
            (FieldId::CustomerPhone, "9999999999"),
            (FieldId::VehicleInfo, "Honda City 2020"),
        ]);
        assert!(missing_required(&form).is_empty());
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("megha@example.com"));
        assert!(!is_valid_email("megha@example"));
        assert!(!is_valid_email("me gha@example.com"));
    }

    #[test]
    fn phone_format_ignores_punctuation() {
        assert!(is_valid_phone("9999999999"));
        assert!(is_valid_phone("+91 99999-99999"));
        assert!(!is_valid_phone("0123456"));
        assert!(!is_valid_phone("12345678901234567"));
    }

    #[test]
    fn blur_feedback_messages() {
        assert_eq!(validate_input(InputKind::Text, true, " "), Some("This field is required"));
        assert_eq!(validate_input(InputKind::Email, false, ""), None);
        assert_eq!(
            validate_input(InputKind::Email, true, "nope"),
            Some("Please enter a valid email address")
        );
        assert_eq!(
            validate_input(InputKind::Tel, true, "abc"),
            Some("Please enter a valid phone number")
        );
        assert_eq!(validate_input(InputKind::Tel, true, "9999999999"), None);
    }
}
